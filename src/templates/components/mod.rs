use maud::{html, Markup};

pub mod alert;
pub mod error;
pub mod institution_card;
pub mod results;
pub mod search_form;
pub mod status_panel;

pub use error::html_error_response;
pub use results::app_shell;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card mb-3" {
            div class="card-header" { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
