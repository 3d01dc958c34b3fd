use crate::errors::ServerError;
use crate::responses::html_with_status;
use crate::templates::desktop_layout;
use astra::{Body, Response};
use maud::html;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();
    let message = match &err {
        ServerError::NotFound => "找不到此頁面".to_string(),
        ServerError::BadRequest(msg) => format!("請求格式錯誤: {msg}"),
        ServerError::InternalError => "伺服器內部錯誤".to_string(),
    };

    let page = desktop_layout(
        &format!("Error {status}"),
        html! {
            h1 { "Error " (status) }
            p class="lead" { (message) }
            p { a href="/" { "← 回到查詢頁面" } }
        },
    );

    html_with_status(status, page)
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
