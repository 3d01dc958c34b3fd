use crate::domain::{format_count, FormState};
use crate::templates::components::{
    alert::notice_alert, institution_card::institution_card, search_form::search_form,
    status_panel::status_panel,
};
use crate::view::PageView;
use maud::{html, Markup};

/// Everything below the page header. Every `/ui/*` route re-renders this
/// and htmx swaps it in place.
pub fn app_shell(view: &PageView, form: &FormState) -> Markup {
    // htmx shows `.htmx-indicator` during its own requests; `htmx-request`
    // keeps it up while a search started elsewhere is still pending.
    let loading_class = if view.is_loading() {
        "text-center py-4 htmx-indicator htmx-request"
    } else {
        "text-center py-4 htmx-indicator"
    };

    html! {
        div id="app" hx-target="#app" hx-swap="outerHTML" hx-indicator="#loadingIndicator" {
            (search_form(view, form))

            @if let Some(panel) = view.status_panel() {
                (status_panel(panel, view.status_panel_remaining()))
            }

            div id="loadingIndicator" class=(loading_class) {
                div class="spinner-border text-primary" role="status" {}
                p class="mt-2 text-muted" { "搜尋中..." }
            }

            @if let Some(total) = view.stats() {
                div id="statsContainer" class="alert alert-light" {
                    "共找到 " strong id="totalCount" { (format_count(total)) } " 筆機構"
                }
            }

            (results_area(view))
        }
    }
}

fn results_area(view: &PageView) -> Markup {
    html! {
        div id="resultsContainer" {
            @for notice in view.notices() {
                (notice_alert(notice))
            }

            @match view.results() {
                None => {
                    div class="text-center py-5 text-muted results-intro" {
                        i class="fas fa-search-location fa-3x mb-3" {}
                        p { "請選擇條件後按下搜尋" }
                    }
                }
                Some([]) => {
                    div class="text-center py-5 results-empty" {
                        i class="fas fa-search fa-3x text-muted mb-3" {}
                        h5 class="text-muted" { "沒有找到符合條件的機構" }
                        p class="text-muted" { "請嘗試調整搜尋條件或選擇其他區域" }
                    }
                }
                Some(cards) => {
                    @for card in cards {
                        (institution_card(card))
                    }
                }
            }
        }
    }
}
