use crate::controller::REFRESH_PROMPT;
use crate::domain::FormState;
use crate::view::{PageView, SelectOption};
use maud::{html, Markup};

fn options(list: &[SelectOption], selected: &str) -> Markup {
    html! {
        @for opt in list {
            option value=(opt.value) selected[opt.value == selected] { (opt.label) }
        }
    }
}

pub fn search_form(view: &PageView, form: &FormState) -> Markup {
    html! {
        form id="searchForm" class="row g-3 mb-3" hx-get="/ui/search" {
            div class="col-md-4" {
                label for="citySelect" class="form-label" { "縣市" }
                select
                    id="citySelect"
                    name="city"
                    class="form-select"
                    hx-get="/ui/districts"
                    hx-trigger="change"
                {
                    (options(view.city_options(), &form.city))
                }
            }
            div class="col-md-4" {
                label for="districtSelect" class="form-label" { "鄉鎮區" }
                select id="districtSelect" name="district" class="form-select" {
                    (options(view.district_options(), &form.district))
                }
            }
            div class="col-md-4" {
                label for="serviceType" class="form-label" { "服務類型" }
                input
                    type="text"
                    id="serviceType"
                    name="service_type"
                    class="form-control"
                    placeholder="例如：日間照顧"
                    value=(form.service_type);
            }
            div class="col-12 d-flex gap-2" {
                button type="submit" class="btn btn-primary" {
                    i class="fas fa-search" {}
                    " 搜尋"
                }
                button type="button" class="btn btn-outline-info" hx-get="/ui/data-status" {
                    i class="fas fa-info-circle" {}
                    " 資料狀態"
                }
                button
                    type="button"
                    class="btn btn-outline-warning"
                    hx-post="/ui/refresh-data"
                    hx-confirm=(REFRESH_PROMPT)
                    hx-vals=(r#"{"confirmed": "true"}"#)
                {
                    i class="fas fa-sync-alt" {}
                    " 強制更新資料"
                }
            }
        }
    }
}
