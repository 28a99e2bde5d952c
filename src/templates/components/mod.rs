use maud::{html, Markup};

pub mod complaint_card;
pub mod error;
pub mod notice;

pub use complaint_card::complaint_card;
pub use notice::{notice_banner, Notice};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
