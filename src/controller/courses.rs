use actix_web::web::{self, Data};
use actix_web::{HttpRequest, HttpResponse};
use std::collections::HashMap;
use tokio_util::sync::CancellationToken;

use crate::args::CleanArgs;
use crate::controller::auth::{auth_from_request, require_auth, session_expired_redirect};
use crate::controller::backend::{GolfApi, with_cancel};
use crate::controller::response::html;
use crate::mvu::error::AppError;
use crate::view::courses::render_courses_page;

pub async fn courses(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
    api: Data<dyn GolfApi>,
    args: Data<CleanArgs>,
) -> HttpResponse {
    let mut auth = auth_from_request(&req, &args);
    if let Err(redirect) = require_auth(&auth) {
        return redirect;
    }
    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();

    let term = query.get("search").map(|s| s.trim()).unwrap_or_default();
    if term.is_empty() {
        return html(render_courses_page(term, &[], None));
    }

    let found = with_cancel(&cancel, api.search_courses(&auth, term)).await;
    match found {
        Ok(found) => html(render_courses_page(term, &found, None)),
        Err(AppError::Unauthorized) => session_expired_redirect(&mut auth),
        Err(e) => {
            log::warn!("Course search for '{term}' failed: {e}");
            html(render_courses_page(term, &[], Some("Error loading data")))
        }
    }
}
