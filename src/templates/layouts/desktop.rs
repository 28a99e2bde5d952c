use maud::{html, Markup, DOCTYPE};

pub const SITE_NAME: &str = "Caratinga Conecta";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · " (SITE_NAME) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
              header class="flex items-center justify-between px-6 py-3 shadow" {
                  a href="/" class="brand" { (SITE_NAME) }
                  nav {
                      ul {
                          li { a href="/" { "Início" } }
                          li { a href="/submit" { "Reportar problema" } }
                          li { a href="/complaints" { "Ver denúncias" } }
                      }
                  }
              }
                (content)
              footer class="site-footer" {
                  p { "© 2023 " (SITE_NAME) ". Todos os direitos reservados." }
              }
            }
        }
    }
}
