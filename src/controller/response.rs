use actix_web::HttpResponse;
use maud::Markup;
use std::collections::HashMap;
use std::hash::BuildHasher;

#[must_use]
pub fn html(markup: Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

/// `json=1` (or `json=true`) asks for the data instead of the page.
#[must_use]
pub fn wants_json<S: BuildHasher>(query: &HashMap<String, String, S>) -> bool {
    match query.get("json").map(String::as_str) {
        Some("1") => true,
        Some("0") | None => false,
        Some(other) => other.parse().unwrap_or(false),
    }
}
