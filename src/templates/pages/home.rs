// templates/pages/home.rs

use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Início",
        html! {
            main class="container" {
                section class="hero" {
                    p class="pill" { "Plataforma colaborativa para Caratinga" }
                    h1 { "Juntos por uma Caratinga melhor" }
                    p class="lead" {
                        "Reporte problemas urbanos como falta de água, energia, buracos nas ruas e "
                        "acompanhe o status das denúncias da sua comunidade."
                    }
                    div class="hero-actions" {
                        a href="/submit" class="btn primary" { "Reportar um problema" }
                        a href="/complaints" class="btn" { "Ver denúncias" }
                    }
                }

                section class="features" {
                    h2 { "Como funciona" }

                    (card("Reporte problemas", html! {
                        p { "Identifique e reporte problemas urbanos da sua rua, bairro ou cidade usando o nosso formulário simples." }
                    }))

                    (card("Acompanhe o status", html! {
                        p { "Monitore o progresso das denúncias e veja quais problemas já foram resolvidos ou estão em andamento." }
                    }))

                    (card("Colabore com atualizações", html! {
                        p { "Atualize o status das denúncias quando perceber que um problema foi resolvido ou está em manutenção." }
                    }))
                }

                section class="cta" {
                    h2 { "Faça a diferença na sua cidade" }
                    a href="/submit" class="btn primary" { "Reportar agora" }
                }
            }
        },
    )
}
