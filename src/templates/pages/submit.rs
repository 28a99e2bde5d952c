// templates/pages/submit.rs

use crate::domain::complaint::ComplaintType;
use crate::domain::form::{ComplaintForm, Field};
use crate::templates::{desktop_layout, notice_banner, Notice};
use maud::{html, Markup};

pub fn submit_page(form: &ComplaintForm, notice: Option<&Notice>) -> Markup {
    desktop_layout(
        "Reportar um problema",
        html! {
            main class="container narrow" {
                h1 { "Reportar um problema" }
                p class="lead" { "Preencha o formulário abaixo para reportar um problema em Caratinga" }

                @if let Some(notice) = notice {
                    (notice_banner(notice))
                }

                div class="callout" {
                    h3 { "Importante" }
                    p {
                        "Este sistema é colaborativo. Lembre-se de fornecer informações precisas para "
                        "ajudar a resolver o problema. Quanto mais detalhes você fornecer, melhor!"
                    }
                }

                (complaint_form(form))
            }
        },
    )
}

pub fn complaint_form(form: &ComplaintForm) -> Markup {
    let draft = form.draft();
    let errors = form.errors();

    html! {
        form method="post" action="/submit" class="complaint-form" novalidate {
            div class="field" {
                label for="name" { "Nome completo" }
                input
                    id="name"
                    name="name"
                    placeholder="Seu nome completo"
                    value=(draft.name)
                    oninput=[errors.contains(Field::Name).then(|| clear_error_js(Field::Name))]
                    class=[errors.contains(Field::Name).then_some("invalid")];
                (field_error(form, Field::Name))
            }

            div class="field" {
                label for="address" { "Endereço do problema" }
                input
                    id="address"
                    name="address"
                    placeholder="Rua, número, bairro"
                    value=(draft.address)
                    oninput=[errors.contains(Field::Address).then(|| clear_error_js(Field::Address))]
                    class=[errors.contains(Field::Address).then_some("invalid")];
                (field_error(form, Field::Address))
            }

            div class="field" {
                label for="type" { "Tipo de problema" }
                select
                    id="type"
                    name="type"
                    onchange=[errors.contains(Field::Type).then(|| clear_error_js(Field::Type))]
                    class=[errors.contains(Field::Type).then_some("invalid")]
                {
                    option value="" selected[draft.kind.is_empty()] { "Selecione o tipo de problema" }
                    @for kind in ComplaintType::ALL {
                        option value=(kind.as_str()) selected[draft.kind == kind.as_str()] {
                            (kind.form_label())
                        }
                    }
                }
                (field_error(form, Field::Type))
            }

            div class="field" {
                label for="description" { "Descrição detalhada" }
                textarea
                    id="description"
                    name="description"
                    placeholder="Descreva o problema em detalhes..."
                    oninput=[errors.contains(Field::Description).then(|| clear_error_js(Field::Description))]
                    class=[errors.contains(Field::Description).then_some("invalid")]
                {
                    (draft.description)
                }
                (field_error(form, Field::Description))
            }

            button type="submit" class="btn primary" disabled[form.is_submitting()] {
                @if form.is_submitting() { "Enviando..." } @else { "Enviar Denúncia" }
            }
        }
    }
}

fn field_error(form: &ComplaintForm, field: Field) -> Markup {
    html! {
        @if let Some(msg) = form.errors().get(field) {
            p class="field-error" id=(format!("{}-error", field.as_str())) { (msg) }
        }
    }
}

/// Editing a field drops its error on the page too, without a round trip.
fn clear_error_js(field: Field) -> String {
    format!(
        "this.classList.remove('invalid');var e=document.getElementById('{}-error');if(e)e.remove();",
        field.as_str()
    )
}
