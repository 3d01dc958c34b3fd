use super::{body_string, context, Browser};
use crate::api::ApiError;
use crate::tests::utils::StubApi;

#[test]
fn refresh_without_confirmation_makes_no_request() {
    let api = StubApi::new();
    let ctx = context(api.clone());
    let browser = Browser::new(&ctx);

    browser.post_form("/ui/refresh-data", "");
    browser.post_form("/ui/refresh-data", "confirmed=false");

    assert_eq!(api.calls(), vec!["cities"]);
}

#[test]
fn confirmed_refresh_reports_success() {
    let api = StubApi::new();
    let ctx = context(api.clone());
    let browser = Browser::new(&ctx);

    let body = body_string(browser.post_form("/ui/refresh-data", "confirmed=true"));

    assert_eq!(api.calls(), vec!["cities", "refresh_data"]);
    assert!(body.contains("alert-success"));
    assert!(body.contains("共載入 12,345 筆機構資料<br>更新時間: 2026-10-19 08:30"));
}

#[test]
fn failed_refresh_reports_error() {
    let api = StubApi::new().with_refresh(Err(ApiError::Network("connection reset".into())));
    let ctx = context(api);
    let browser = Browser::new(&ctx);

    let body = body_string(browser.post_form("/ui/refresh-data", "confirmed=true"));

    assert!(body.contains("資料更新失敗: Network error: connection reset"));
    assert!(!browser.with_controller(|c| c.view().is_loading()));
}
