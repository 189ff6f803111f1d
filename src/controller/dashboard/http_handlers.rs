use actix_web::web::{self, Data};
use actix_web::{HttpRequest, HttpResponse};
use serde_json::json;
use std::collections::HashMap;
use tokio_util::sync::CancellationToken;

use crate::args::CleanArgs;
use crate::controller::auth::{auth_from_request, session_expired_redirect};
use crate::controller::backend::GolfApi;
use crate::controller::response::html;
use crate::mvu::dashboard::{Deps, Msg, decode_request_to_model};
use crate::mvu::error::AppError;
use crate::mvu::runtime::run_dashboard;

pub async fn dashboard(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
    api: Data<dyn GolfApi>,
    args: Data<CleanArgs>,
) -> HttpResponse {
    let mut auth = auth_from_request(&req, &args);
    let mut model = match decode_request_to_model(&query.0, &auth, args.player_id, args.trend_window)
    {
        Ok(model) => model,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e.to_string()})),
    };

    // Dropping the handler future (client gone) cancels every outstanding fetch.
    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();
    let deps = Deps {
        api: api.get_ref(),
        auth: &auth,
        cancel: &cancel,
    };

    match run_dashboard(&mut model, Msg::PageLoad, deps).await {
        Ok(()) => {}
        Err(AppError::Cancelled) => {
            log::info!("Dashboard for player {} cancelled", model.player_id);
            return HttpResponse::NoContent().finish();
        }
        Err(e) => {
            log::error!("Dashboard for player {} failed: {e}", model.player_id);
            return HttpResponse::InternalServerError().json(json!({"error": e.to_string()}));
        }
    }

    if model.session_expired && auth.is_authenticated() {
        return session_expired_redirect(&mut auth);
    }

    match (model.want_json, model.data, model.markup) {
        (true, Some(data), _) => HttpResponse::Ok().json(data),
        (false, _, Some(markup)) => html(markup),
        _ => {
            log::error!("Dashboard for player {} produced no output", model.player_id);
            HttpResponse::InternalServerError().json(json!({"error": "dashboard was not rendered"}))
        }
    }
}
