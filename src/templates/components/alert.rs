use crate::view::Notice;
use maud::{html, Markup};

pub fn notice_alert(notice: &Notice) -> Markup {
    let class = format!(
        "alert alert-{} alert-dismissible fade show",
        notice.severity.css_suffix()
    );

    html! {
        div class=(class) role="alert" data-notice-id=(notice.id) {
            @for (i, line) in notice.lines.iter().enumerate() {
                @if i > 0 { br; }
                (line)
            }
            button
                type="button"
                class="btn-close"
                aria-label="Close"
                hx-post=(format!("/ui/notices/{}/dismiss", notice.id))
                hx-target="closest .alert"
                hx-swap="delete"
            {}
        }
    }
}
