// templates/pages/complaints.rs

use crate::domain::browser::{result_count_label, BrowserView, ComplaintBrowser, StatusFilter};
use crate::templates::{complaint_card, desktop_layout, notice_banner, Notice};
use chrono::{DateTime, Utc};
use maud::{html, Markup};

pub struct ComplaintsVm<'a> {
    pub browser: &'a ComplaintBrowser,
    pub notice: Option<Notice>,
    pub now: DateTime<Utc>,
}

pub fn complaints_page(vm: &ComplaintsVm) -> Markup {
    desktop_layout(
        "Denúncias da comunidade",
        html! {
            main class="container" {
                h1 { "Denúncias da comunidade" }
                p class="lead" { "Acompanhe os problemas reportados em Caratinga e suas atualizações" }

                @if let Some(notice) = &vm.notice {
                    (notice_banner(notice))
                }

                (complaints_list(vm))
            }
        },
    )
}

pub fn complaints_list(vm: &ComplaintsVm) -> Markup {
    let browser = vm.browser;

    match browser.view() {
        BrowserView::Empty => html! {
            section class="empty-state" id="complaints-empty" {
                h3 { "Nenhuma denúncia encontrada" }
                p { "Seja o primeiro a reportar um problema na cidade." }
                a href="/submit" class="btn primary" { "Reportar um problema" }
            }
        },
        view => html! {
            (filters(browser))

            @match view {
                BrowserView::Results(matches) => {
                    p class="result-count" { (result_count_label(matches.len())) }
                    section class="complaints" {
                        @for complaint in matches {
                            (complaint_card(complaint, browser.status_filter(), browser.search_term(), vm.now))
                        }
                    }
                }
                _ => {
                    p class="result-count" { (result_count_label(0)) }
                    section class="no-matches" id="complaints-no-matches" {
                        p { "Nenhuma denúncia corresponde aos filtros aplicados." }
                        a href="/complaints/reset" class="btn link" { "Limpar filtros" }
                    }
                }
            }
        },
    }
}

fn filters(browser: &ComplaintBrowser) -> Markup {
    html! {
        form method="get" action="/complaints" class="filters" {
            div class="field" {
                label for="search" { "Buscar" }
                input
                    id="search"
                    name="q"
                    type="search"
                    placeholder="Buscar por endereço, descrição..."
                    value=(browser.search_term());
            }

            fieldset class="status-filter" {
                legend { "Status" }
                @for filter in StatusFilter::ALL {
                    label class="pill" {
                        input
                            type="radio"
                            name="status"
                            value=(filter.as_str())
                            checked[browser.status_filter() == filter];
                        (filter.label())
                    }
                }
            }

            button type="submit" class="btn" { "Filtrar" }
            a href="/complaints/reset" class="btn outline" { "Limpar filtros" }
        }
    }
}
