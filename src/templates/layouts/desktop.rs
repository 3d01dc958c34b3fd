use maud::{html, Markup, DOCTYPE};

const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";
const HTMX_JS: &str = "https://unpkg.com/htmx.org@1.9.12";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="zh-Hant" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(BOOTSTRAP_CSS);
                link rel="stylesheet" href=(FONT_AWESOME_CSS);
                script src=(HTMX_JS) defer {}
                style {
                    ".result-card { border-left: 4px solid #0d6efd; }"
                    ".service-badge { margin: 0 .25rem .25rem 0; }"
                }
            }
            body class="bg-light" {
                header class="navbar navbar-dark bg-primary mb-4" {
                    div class="container" {
                        span class="navbar-brand" {
                            i class="fas fa-hospital-user" {}
                            " " (title)
                        }
                    }
                }
                main class="container" {
                    (content)
                }
            }
        }
    }
}
