//! Responder wiring for the browser

use platform_client::HttpResponder;
use platform_core::Locale;

/// Path of the chat endpoint on the serving origin
const CHAT_PATH: &str = "/api/chat";

/// Origin assumed when the page has none (tests, `file://`)
const FALLBACK_ORIGIN: &str = "http://localhost:3000";

/// Chat endpoint for `origin`
pub fn endpoint_for_origin(origin: Option<&str>) -> String {
    let origin = origin
        .filter(|o| o.starts_with("http"))
        .unwrap_or(FALLBACK_ORIGIN);
    format!("{}{CHAT_PATH}", origin.trim_end_matches('/'))
}

/// Endpoint baked in at build time, else the page's own origin
pub fn chat_endpoint() -> String {
    if let Some(endpoint) = option_env!("CHAT_ENDPOINT") {
        return endpoint.to_string();
    }

    let origin = web_sys::window().and_then(|w| w.location().origin().ok());
    endpoint_for_origin(origin.as_deref())
}

pub fn responder() -> HttpResponder {
    HttpResponder::new(chat_endpoint())
}

/// Fallback-message language, from `<html lang>`
pub fn page_locale() -> Locale {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|root| root.get_attribute("lang"))
        .map(|lang| Locale::from_tag(&lang))
        .unwrap_or_default()
}
