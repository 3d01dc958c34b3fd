use super::{body_string, context, Browser};
use crate::api::ApiError;
use crate::tests::utils::{institution, results, StubApi};

const DAY_CARE: &str = "%E6%97%A5%E9%96%93%E7%85%A7%E9%A1%A7";

#[test]
fn search_renders_cards_and_total() {
    let mut first = institution("A1", "甲機構");
    first.service_type = Some("日間照顧; 居家服務".into());
    let page = vec![first, institution("B2", "乙機構")];
    let api = StubApi::new().with_search(Ok(results(page, 1234)));
    let ctx = context(api.clone());
    let browser = Browser::new(&ctx);

    let body = body_string(browser.get(
        &format!("/ui/search?city=63000&district=&service_type={DAY_CARE}"),
    ));

    assert!(body.contains("甲機構"));
    assert!(body.contains("乙機構"));
    assert!(body.find("甲機構") < body.find("乙機構"));
    assert!(body.contains(r#"<strong id="totalCount">1,234</strong>"#));
    assert_eq!(
        api.calls(),
        vec![
            "cities",
            "districts:63000",
            "search:city=63000&service_type=日間照顧",
        ]
    );
}

#[test]
fn district_is_kept_when_the_city_is_unchanged() {
    let api = StubApi::new();
    let ctx = context(api.clone());
    let browser = Browser::new(&ctx);

    browser.get("/ui/districts?city=63000");
    let body = body_string(browser.get("/ui/search?city=63000&district=63000030&service_type="));

    assert!(body.contains(r#"<option value="63000030" selected>大安區</option>"#));
    assert_eq!(
        api.calls().last().map(String::as_str),
        Some("search:city=63000&district=63000030")
    );
}

#[test]
fn district_from_another_city_is_dropped() {
    let api = StubApi::new();
    let ctx = context(api.clone());
    let browser = Browser::new(&ctx);

    browser.get("/ui/districts?city=63000");
    browser.get("/ui/search?city=64000&district=63000030");

    assert_eq!(
        api.calls().last().map(String::as_str),
        Some("search:city=64000")
    );
    assert_eq!(browser.with_controller(|c| c.form().district.clone()), "");
}

#[test]
fn zero_matches_show_empty_state_and_zero_total() {
    let ctx = context(StubApi::new().with_search(Ok(results(vec![], 0))));
    let browser = Browser::new(&ctx);

    let body = body_string(browser.get("/ui/search?city=63000"));

    assert!(body.contains("沒有找到符合條件的機構"));
    assert!(body.contains("請嘗試調整搜尋條件或選擇其他區域"));
    assert!(body.contains(r#"<strong id="totalCount">0</strong>"#));
}

#[test]
fn failed_search_shows_error_and_no_stats() {
    let api = StubApi::new().with_search(Err(ApiError::Remote("資料庫忙碌".into())));
    let ctx = context(api);
    let browser = Browser::new(&ctx);

    let body = body_string(browser.get("/ui/search"));

    assert!(body.contains("alert-danger"));
    assert!(body.contains("搜尋失敗: 資料庫忙碌"));
    assert!(body.contains("results-empty"));
    assert!(!body.contains("statsContainer"));
}

#[test]
fn deep_link_keeps_a_district_of_the_new_city() {
    let api = StubApi::new();
    let ctx = context(api.clone());
    let browser = Browser::new(&ctx);

    let body = body_string(browser.get("/ui/search?city=63000&district=63000030"));

    assert!(body.contains(r#"<option value="63000030" selected>大安區</option>"#));
    assert_eq!(
        api.calls(),
        vec![
            "cities",
            "districts:63000",
            "search:city=63000&district=63000030",
        ]
    );
}

#[test]
fn switching_city_keeps_a_district_it_offers() {
    let api = StubApi::new();
    let ctx = context(api.clone());
    let browser = Browser::new(&ctx);

    browser.get("/ui/districts?city=64000");
    browser.get("/ui/search?city=63000&district=63000040");

    assert_eq!(
        api.calls().last().map(String::as_str),
        Some("search:city=63000&district=63000040")
    );
    assert_eq!(browser.with_controller(|c| c.form().district.clone()), "63000040");
}
