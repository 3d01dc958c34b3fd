use super::{body_string, context, Browser};
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::StubApi;
use crate::view::Severity;
use astra::Body;
use http::{Method, Request};

#[test]
fn home_page_lists_cities_with_placeholder() {
    let ctx = context(StubApi::new());
    let browser = Browser::new(&ctx);

    let resp = browser.get("/");
    assert_eq!(resp.status(), 200);
    assert!(resp.headers()["Content-Type"]
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let body = body_string(resp);
    assert!(body.contains("長照機構查詢系統"));
    assert!(body.contains("請選擇縣市"));
    assert!(body.contains(r#"<option value="63000">臺北市</option>"#));
    assert!(body.contains("results-intro"));
}

#[test]
fn app_shell_points_htmx_at_the_loading_indicator() {
    let ctx = context(StubApi::new());
    let browser = Browser::new(&ctx);

    let body = body_string(browser.get("/"));

    assert!(body.contains(r##"hx-indicator="#loadingIndicator""##));
    assert!(body.contains(r#"id="loadingIndicator""#));
}

#[test]
fn choosing_a_city_fills_districts() {
    let api = StubApi::new();
    let ctx = context(api.clone());
    let browser = Browser::new(&ctx);

    let body = body_string(browser.get("/ui/districts?city=63000"));

    assert!(body.contains(r#"<option value="63000" selected>臺北市</option>"#));
    assert!(body.contains("大安區"));
    assert!(body.contains("信義區"));
    assert_eq!(api.calls(), vec!["cities", "districts:63000"]);
}

#[test]
fn clearing_the_city_makes_no_district_request() {
    let api = StubApi::new();
    let ctx = context(api.clone());
    let browser = Browser::new(&ctx);

    let body = body_string(browser.get("/ui/districts?city="));

    assert!(body.contains("請選擇鄉鎮區"));
    assert!(!body.contains("大安區"));
    assert_eq!(api.calls(), vec!["cities"]);
}

#[test]
fn data_status_panel_schedules_its_own_hiding() {
    let ctx = context(StubApi::new());
    let browser = Browser::new(&ctx);

    let body = body_string(browser.get("/ui/data-status"));
    assert!(body.contains("dataInfoContainer"));
    assert!(body.contains("本地資料檔案不存在"));
    assert!(body.contains(r#"hx-get="/ui/data-status/hide""#));
    assert!(body.contains(r#"hx-target="this" hx-swap="delete""#));

    let body = body_string(browser.get("/ui/data-status/hide"));
    assert!(body.is_empty());

    let body = body_string(browser.get("/"));
    assert!(!body.contains("dataInfoContainer"));
}

#[test]
fn hiding_the_panel_keeps_unsubmitted_form_input() {
    let ctx = context(StubApi::new());
    let browser = Browser::new(&ctx);

    browser.get("/ui/data-status");
    let body = body_string(browser.get("/ui/data-status/hide"));

    // An `#app` re-render here would overwrite what the user typed.
    assert!(!body.contains(r#"id="app""#));
    assert!(!body.contains("searchForm"));
}

#[test]
fn notices_can_be_dismissed() {
    let ctx = context(StubApi::new());
    let browser = Browser::new(&ctx);
    browser.get("/");
    let id = browser.with_controller(|c| c.show_alert("提醒", Severity::Info));

    let body = body_string(browser.get("/"));
    assert!(body.contains("提醒"));
    assert!(body.contains(r#"hx-target="closest .alert" hx-swap="delete""#));

    let body = body_string(browser.post_form(&format!("/ui/notices/{id}/dismiss"), ""));
    assert!(!body.contains(r#"id="app""#));

    let body = body_string(browser.get("/"));
    assert!(!body.contains("提醒"));
}

#[test]
fn bad_notice_id_is_a_bad_request() {
    let ctx = context(StubApi::new());
    let req = Request::builder()
        .method(Method::POST)
        .uri("/ui/notices/abc/dismiss")
        .body(Body::empty())
        .unwrap();

    assert!(matches!(handle(req, &ctx), Err(ServerError::BadRequest(_))));
}

#[test]
fn unknown_route_is_not_found() {
    let ctx = context(StubApi::new());
    let req = Request::builder()
        .method(Method::GET)
        .uri("/admin")
        .body(Body::empty())
        .unwrap();

    assert!(matches!(handle(req, &ctx), Err(ServerError::NotFound)));
}
