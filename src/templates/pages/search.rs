use crate::domain::FormState;
use crate::templates::{app_shell, desktop_layout};
use crate::view::PageView;
use maud::Markup;

pub const PAGE_TITLE: &str = "長照機構查詢系統";

pub fn search_page(view: &PageView, form: &FormState) -> Markup {
    desktop_layout(PAGE_TITLE, app_shell(view, form))
}
