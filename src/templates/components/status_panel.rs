use crate::domain::{format_count, format_timestamp};
use crate::templates::components::card;
use crate::view::StatusPanel;
use maud::{html, Markup};
use std::time::Duration;

/// The data-status panel. With a `remaining` window it asks the host to
/// hide it once that has elapsed, then removes itself.
pub fn status_panel(panel: &StatusPanel, remaining: Option<Duration>) -> Markup {
    let body = match panel {
        StatusPanel::Available {
            file_date,
            days_old,
            total_records,
            needs_update,
        } => {
            let (status_class, icon, label) = if *needs_update {
                ("text-warning", "exclamation-triangle", "需要更新")
            } else {
                ("text-success", "check-circle", "資料最新")
            };

            html! {
                div class="row" {
                    div class="col-md-6" {
                        p class="mb-1" {
                            i class="fas fa-calendar" {}
                            " " strong { "檔案日期:" } " " (format_timestamp(file_date))
                        }
                        p class="mb-1" {
                            i class="fas fa-clock" {}
                            " " strong { "檔案年齡:" } " " (format!("{days_old:.1}")) " 天"
                        }
                    }
                    div class="col-md-6" {
                        p class="mb-1" {
                            i class="fas fa-database" {}
                            " " strong { "記錄數量:" } " " (format_count(*total_records)) " 筆"
                        }
                        p class=(format!("mb-1 {status_class}")) {
                            i class=(format!("fas fa-{icon}")) {}
                            " " strong { "狀態:" } " " (label)
                        }
                    }
                }
                div class="mt-2" {
                    small class="text-muted" {
                        i class="fas fa-info-circle" {}
                        " 系統每30天自動更新一次資料，您也可以手動強制更新"
                    }
                }
            }
        }
        StatusPanel::MissingLocalFile => html! {
            p class="text-warning mb-0" {
                i class="fas fa-exclamation-triangle" {}
                " 本地資料檔案不存在，將在首次搜尋時自動下載"
            }
        },
    };

    html! {
        @if let Some(remaining) = remaining {
            div
                id="dataInfoContainer"
                hx-get="/ui/data-status/hide"
                hx-trigger=(format!("load delay:{}ms", remaining.as_millis()))
                hx-target="this"
                hx-swap="delete"
            {
                (card("資料狀態", body))
            }
        } @else {
            div id="dataInfoContainer" {
                (card("資料狀態", body))
            }
        }
    }
}
