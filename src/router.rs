use crate::api::DirectoryApi;
use crate::app_state::{AppContext, Session};
use crate::errors::ServerError;
use crate::responses::{html_response, ResultResp};
use crate::session::{session_cookie, session_id_from_cookies};
use crate::templates;
use astra::Request;
use maud::html;
use std::collections::HashMap;
use std::io::Read;

const MAX_FORM_BYTES: u64 = 16 * 1024;

pub fn handle<A>(req: Request, ctx: &AppContext<A>) -> ResultResp
where
    A: DirectoryApi + Clone,
{
    let cookie_id = req
        .headers()
        .get("cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(session_id_from_cookies)
        .map(str::to_string);
    let active = ctx.session(cookie_id.as_deref());

    let mut resp = route(req, ctx, &active.session)?;

    if active.is_new {
        let cookie = session_cookie(&active.id)
            .parse()
            .map_err(|_| ServerError::InternalError)?;
        resp.headers_mut().insert("set-cookie", cookie);
    }
    Ok(resp)
}

fn route<A>(mut req: Request, ctx: &AppContext<A>, session: &Session<A>) -> ResultResp
where
    A: DirectoryApi + Clone,
{
    let api = ctx.api();
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let params = parse_query(&req);

    tracing::debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => {
            let page = session.with_controller(|c| {
                templates::pages::search_page(c.view(), c.form())
            })?;
            html_response(page)
        }

        ("GET", "/ui/cities") => {
            let result = ctx.load_cities();
            session.with_controller(|c| c.apply_cities(result))?;
            app_shell(session)
        }

        ("GET", "/ui/districts") => {
            change_city(api, session, param(&params, "city"))?;
            app_shell(session)
        }

        ("GET", "/ui/search") => search(api, session, &params),

        ("GET", "/ui/data-status") => {
            let result = api.data_status();
            session.with_controller(|c| c.apply_data_status(result))?;
            app_shell(session)
        }

        // The panel removes itself client-side; the form stays untouched.
        ("GET", "/ui/data-status/hide") => {
            session.with_controller(|c| c.hide_data_status())?;
            html_response(html! {})
        }

        ("POST", "/ui/refresh-data") => {
            let form = read_form(&mut req)?;
            let confirmed = param(&form, "confirmed") == "true";

            let started =
                session.with_controller(|c| c.begin_refresh(&move |_: &str| confirmed))?;
            if started {
                let result = api.refresh_data();
                session.with_controller(|c| c.finish_refresh(result))?;
            }
            app_shell(session)
        }

        ("POST", p) if p.starts_with("/ui/notices/") => {
            let id = notice_id(p)?;
            session.with_controller(|c| c.dismiss_notice(id))?;
            html_response(html! {})
        }

        _ => Err(ServerError::NotFound),
    }
}

fn app_shell<A>(session: &Session<A>) -> ResultResp
where
    A: DirectoryApi,
{
    let markup = session.with_controller(|c| templates::app_shell(c.view(), c.form()))?;
    html_response(markup)
}

// The districts request runs without the lock held; a response for a city
// that was replaced meanwhile is dropped by the controller.
fn change_city<A>(api: &A, session: &Session<A>, city: &str) -> Result<(), ServerError>
where
    A: DirectoryApi,
{
    let needs_fetch = session.with_controller(|c| c.begin_select_city(city))?;
    if needs_fetch {
        let city = city.trim();
        let result = api.districts(city);
        session.with_controller(|c| c.apply_districts(city, result))?;
    }
    Ok(())
}

fn search<A>(api: &A, session: &Session<A>, params: &HashMap<String, String>) -> ResultResp
where
    A: DirectoryApi,
{
    let city = param(params, "city");
    let district = param(params, "district").trim();

    let city_changed = session.with_controller(|c| c.form().city != city.trim())?;
    if city_changed {
        change_city(api, session, city)?;
    }

    let (ticket, query) = session.with_controller(|c| {
        // After a city change only a district the new list offers survives.
        let keep_district = !city_changed
            || c.view()
                .district_options()
                .iter()
                .any(|o| !o.is_placeholder() && o.value == district);
        if keep_district {
            c.select_district(district);
        }
        c.set_service_type(param(params, "service_type"));

        let query = c.form().to_query();
        (c.begin_search(&query), query)
    })?;

    let outcome = api.search(&query);
    session.with_controller(|c| c.finish_search(ticket, outcome))?;

    app_shell(session)
}

fn param<'a>(params: &'a HashMap<String, String>, key: &str) -> &'a str {
    params.get(key).map(String::as_str).unwrap_or("")
}

fn notice_id(path: &str) -> Result<u64, ServerError> {
    path.strip_prefix("/ui/notices/")
        .and_then(|rest| rest.strip_suffix("/dismiss"))
        .ok_or(ServerError::NotFound)?
        .parse()
        .map_err(|_| ServerError::BadRequest("invalid notice id".into()))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn read_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;

    Ok(url::form_urlencoded::parse(&body).into_owned().collect())
}
