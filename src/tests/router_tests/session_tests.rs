use super::{body_string, context, Browser};
use crate::session::{generate_id, session_cookie, session_id_from_cookies, SESSION_COOKIE};
use crate::tests::utils::{institution, results, StubApi};
use rand::rngs::mock::StepRng;

#[test]
fn first_request_hands_out_a_session_cookie() {
    let ctx = context(StubApi::new());
    let browser = Browser::new(&ctx);

    let resp = browser.get("/");
    let set_cookie = resp.headers()["set-cookie"].to_str().unwrap().to_string();

    assert!(set_cookie.starts_with(&format!("{SESSION_COOKIE}=")));
    assert!(set_cookie.contains("HttpOnly"));

    // A known session is not issued a new cookie.
    let resp = browser.get("/");
    assert!(resp.headers().get("set-cookie").is_none());
}

#[test]
fn unknown_session_id_gets_a_fresh_session() {
    let ctx = context(StubApi::new());
    let browser = Browser::new(&ctx);
    browser.get("/");
    let first = browser.session_id().unwrap();

    let stranger = ctx.session(Some("not-a-real-session"));

    assert!(stranger.is_new);
    assert_ne!(stranger.id, "not-a-real-session");
    assert_ne!(stranger.id, first);
}

#[test]
fn browsers_do_not_see_each_others_results() {
    let api = StubApi::new().with_search(Ok(results(vec![institution("A1", "甲機構")], 1)));
    let ctx = context(api.clone());
    let alice = Browser::new(&ctx);
    let bob = Browser::new(&ctx);

    let body = body_string(alice.get("/ui/search?city=63000&district=63000030"));
    assert!(body.contains("甲機構"));

    let body = body_string(bob.get("/"));
    assert!(!body.contains("甲機構"));
    assert!(body.contains("results-intro"));
    assert!(!body.contains(r#"<option value="63000" selected>"#));

    let body = body_string(alice.get("/"));
    assert!(body.contains("甲機構"));
    assert!(body.contains(r#"<option value="63000030" selected>大安區</option>"#));
}

#[test]
fn form_state_stays_with_its_session() {
    let ctx = context(StubApi::new());
    let alice = Browser::new(&ctx);
    let bob = Browser::new(&ctx);

    alice.get("/ui/districts?city=63000");
    bob.get("/ui/districts?city=64000");

    assert_eq!(alice.with_controller(|c| c.form().city.clone()), "63000");
    assert_eq!(bob.with_controller(|c| c.form().city.clone()), "64000");
    assert_ne!(alice.session_id(), bob.session_id());
}

#[test]
fn new_sessions_reuse_the_cached_city_list() {
    let api = StubApi::new();
    let ctx = context(api.clone());

    for _ in 0..3 {
        let body = body_string(Browser::new(&ctx).get("/"));
        assert!(body.contains(r#"<option value="64000">高雄市</option>"#));
    }

    assert_eq!(api.calls(), vec!["cities"]);
}

#[test]
fn session_ids_are_url_safe() {
    let mut rng = StepRng::new(0, 1);
    let id = generate_id(&mut rng, 32);

    assert_eq!(id.len(), 43);
    assert!(id
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'));
}

#[test]
fn session_id_is_read_among_other_cookies() {
    let header = "theme=dark; session=abc123; lang=zh-TW";
    assert_eq!(session_id_from_cookies(header), Some("abc123"));
    assert_eq!(session_id_from_cookies("theme=dark"), None);
    assert_eq!(session_id_from_cookies("session="), None);
    assert_eq!(
        session_id_from_cookies(&session_cookie("xyz")),
        Some("xyz")
    );
}
