use ahash::AHashMap;
use actix_web::web::{self, Data};
use actix_web::{HttpRequest, HttpResponse};
use regex::Regex;
use std::collections::HashMap;
use std::hash::BuildHasher;
use std::sync::OnceLock;
use tokio_util::sync::CancellationToken;

use crate::args::CleanArgs;
use crate::controller::auth::{auth_from_request, require_auth, session_expired_redirect};
use crate::controller::backend::{GolfApi, with_cancel};
use crate::controller::dashboard::LOAD_ERROR_NOTICE;
use crate::model::{AuthContext, Course, HoleScoreSubmission, RoundSubmission, Tee};
use crate::controller::response::html;
use crate::mvu::error::AppError;
use crate::view::rounds::{FormAlert, RoundFormView, render_round_form_page};

pub const SUBMIT_OK: &str = "Round data updated successfully!";
pub const SUBMIT_FAILED: &str = "Failed to update round data.";
/// Used when a tee publishes no hole count.
const FALLBACK_HOLE_COUNT: u32 = 18;

/// Raw text of one form row, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawHole {
    pub strokes: Option<String>,
    pub putts: Option<String>,
    pub penalties: Option<String>,
    pub fairway_hit: bool,
    pub green_in_regulation: bool,
}

impl RawHole {
    fn is_blank(&self) -> bool {
        [&self.strokes, &self.putts, &self.penalties]
            .iter()
            .all(|f| f.as_deref().is_none_or(|v| v.trim().is_empty()))
            && !self.fairway_hit
            && !self.green_in_regulation
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundForm {
    pub course: String,
    pub tee: String,
    pub notes: String,
    /// Sorted by hole number; rows left entirely blank are dropped.
    pub holes: Vec<(u32, RawHole)>,
}

impl RoundForm {
    #[must_use]
    pub fn hole(&self, n: u32) -> Option<&RawHole> {
        self.holes.iter().find(|(h, _)| *h == n).map(|(_, raw)| raw)
    }
}

fn is_checked(value: &str) -> bool {
    matches!(value.trim(), "on" | "1" | "true" | "yes")
}

fn field_pattern() -> Result<&'static Regex, AppError> {
    static FIELD: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    FIELD
        .get_or_init(|| Regex::new(r"^(strokes|putts|penalties|fairway|gir)_(\d{1,3})$"))
        .as_ref()
        .map_err(|e| AppError::Other(e.to_string()))
}

/// Splits `strokes_3`, `putts_3`, `penalties_3`, `fairway_3`, `gir_3` style fields into rows.
///
/// # Errors
///
/// Will return `Err` if the field pattern cannot be compiled.
pub fn parse_round_form<S: BuildHasher>(
    form: &HashMap<String, String, S>,
) -> Result<RoundForm, AppError> {
    let field = field_pattern()?;

    let mut rows: AHashMap<u32, RawHole> = AHashMap::new();
    for (key, value) in form {
        let Some(caps) = field.captures(key) else {
            continue;
        };
        let Ok(hole_number) = caps[2].parse::<u32>() else {
            continue;
        };
        let row = rows.entry(hole_number).or_default();
        match &caps[1] {
            "strokes" => row.strokes = Some(value.clone()),
            "putts" => row.putts = Some(value.clone()),
            "penalties" => row.penalties = Some(value.clone()),
            "fairway" => row.fairway_hit = is_checked(value),
            "gir" => row.green_in_regulation = is_checked(value),
            _ => {}
        }
    }

    let mut holes: Vec<(u32, RawHole)> = rows.into_iter().filter(|(_, r)| !r.is_blank()).collect();
    holes.sort_by_key(|(n, _)| *n);

    let text = |key: &str| form.get(key).map(|v| v.trim().to_string()).unwrap_or_default();
    Ok(RoundForm {
        course: text("course"),
        tee: text("tee"),
        notes: text("notes"),
        holes,
    })
}

fn count_field(hole: u32, name: &str, raw: Option<&str>) -> Result<u32, AppError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(0),
        Some(v) => v.parse::<u32>().map_err(|_| {
            AppError::Validation(format!("Hole {hole}: {name} must be a whole number"))
        }),
    }
}

fn tee_hole_count(tee: &Tee) -> u32 {
    match tee.hole_count() {
        0 => FALLBACK_HOLE_COUNT,
        n => n,
    }
}

/// Exact (case-insensitive) course name match.
#[must_use]
pub fn find_course<'a>(courses: &'a [Course], name: &str) -> Option<&'a Course> {
    let name = name.trim();
    courses
        .iter()
        .find(|c| c.display_name().eq_ignore_ascii_case(name))
}

/// Checks a parsed form against the course list and builds the backend payload.
///
/// # Errors
///
/// Returns `AppError::Validation` naming the first problem found.
pub fn validate_round(form: &RoundForm, courses: &[Course]) -> Result<RoundSubmission, AppError> {
    if form.course.is_empty() {
        return Err(AppError::Validation("Choose a course first".to_string()));
    }
    let course = find_course(courses, &form.course).ok_or_else(|| {
        AppError::Validation(format!("Course '{}' was not found", form.course))
    })?;
    let course_id = course.id.ok_or_else(|| {
        AppError::Validation(format!("Course '{}' has no id", course.display_name()))
    })?;
    let (_, tee) = course.find_tee(&form.tee).ok_or_else(|| {
        AppError::Validation(format!(
            "Tee '{}' does not exist for {}",
            form.tee,
            course.display_name()
        ))
    })?;
    if form.holes.is_empty() {
        return Err(AppError::Validation(
            "Enter a score for at least one hole".to_string(),
        ));
    }

    let hole_count = tee_hole_count(tee);
    let mut hole_scores = Vec::with_capacity(form.holes.len());
    for (hole_number, raw) in &form.holes {
        let hole_number = *hole_number;
        if hole_number == 0 || hole_number > hole_count {
            return Err(AppError::Validation(format!(
                "Hole {hole_number} is not on this tee ({hole_count} holes)"
            )));
        }
        let strokes = raw
            .strokes
            .as_deref()
            .map(str::trim)
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|s| *s >= 1)
            .ok_or_else(|| {
                AppError::Validation(format!("Hole {hole_number}: strokes must be 1 or more"))
            })?;
        hole_scores.push(HoleScoreSubmission {
            hole_number,
            strokes,
            putts: count_field(hole_number, "putts", raw.putts.as_deref())?,
            fairway_hit: raw.fairway_hit,
            green_in_regulation: raw.green_in_regulation,
            penalties: count_field(hole_number, "penalties", raw.penalties.as_deref())?,
        });
    }

    Ok(RoundSubmission {
        course_id,
        tee_name: tee.tee_name.clone(),
        tee_id: tee.id,
        notes: form.notes.clone(),
        hole_scores,
    })
}

async fn lookup_course(
    api: &dyn GolfApi,
    auth: &AuthContext,
    name: &str,
    cancel: &CancellationToken,
) -> Result<Option<Course>, AppError> {
    if name.trim().is_empty() {
        return Ok(None);
    }
    let courses = with_cancel(cancel, api.search_courses(auth, name.trim())).await?;
    Ok(find_course(&courses, name).cloned())
}

pub async fn new_round(
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

    let course_name = query.get("course").cloned().unwrap_or_default();
    let tee_name = query.get("tee").cloned().unwrap_or_default();
    let mut view = RoundFormView::new(&course_name, &tee_name);

    let lookup = lookup_course(api.get_ref(), &auth, &course_name, &cancel).await;
    match lookup {
        Ok(Some(course)) => {
            view.tee = course.find_tee(&tee_name).map(|(_, t)| t.clone());
            if view.tee.is_none() && !tee_name.is_empty() {
                view.alert = Some(FormAlert::error(format!(
                    "Tee '{tee_name}' does not exist for {}",
                    course.display_name()
                )));
            }
        }
        Ok(None) if !course_name.trim().is_empty() => {
            view.alert = Some(FormAlert::error(format!(
                "Course '{course_name}' was not found"
            )));
        }
        Ok(None) => {}
        Err(AppError::Unauthorized) => return session_expired_redirect(&mut auth),
        Err(e) => {
            log::warn!("Course lookup for '{course_name}' failed: {e}");
            view.alert = Some(FormAlert::error(LOAD_ERROR_NOTICE.to_string()));
        }
    }
    html(render_round_form_page(&view))
}

pub async fn submit_round(
    req: HttpRequest,
    form: web::Form<HashMap<String, String>>,
    api: Data<dyn GolfApi>,
    args: Data<CleanArgs>,
) -> HttpResponse {
    let mut auth = auth_from_request(&req, &args);
    if let Err(redirect) = require_auth(&auth) {
        return redirect;
    }
    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();

    let parsed = match parse_round_form(&form.0) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::error!("Round form could not be read: {e}");
            return HttpResponse::InternalServerError().body(SUBMIT_FAILED);
        }
    };
    let mut view = RoundFormView::new(&parsed.course, &parsed.tee);
    view.notes.clone_from(&parsed.notes);

    let found = with_cancel(&cancel, api.search_courses(&auth, &parsed.course)).await;
    let courses = match found {
        Ok(courses) => courses,
        Err(AppError::Unauthorized) => return session_expired_redirect(&mut auth),
        Err(e) => {
            log::warn!("Course lookup for '{}' failed: {e}", parsed.course);
            view.alert = Some(FormAlert::error(LOAD_ERROR_NOTICE.to_string()));
            view.entered = Some(parsed);
            return html(render_round_form_page(&view));
        }
    };
    view.tee = find_course(&courses, &parsed.course)
        .and_then(|c| c.find_tee(&parsed.tee))
        .map(|(_, t)| t.clone());

    let submission = match validate_round(&parsed, &courses) {
        Ok(submission) => submission,
        Err(e) => {
            view.alert = Some(FormAlert::error(e.to_string()));
            view.entered = Some(parsed);
            return html(render_round_form_page(&view));
        }
    };

    let player_id = auth.user_id().unwrap_or(args.player_id);
    let submitted = with_cancel(&cancel, api.submit_round(&auth, player_id, &submission)).await;
    match submitted {
        Ok(()) => {
            log::info!(
                "Round at {} ({} holes) submitted for player {player_id}",
                parsed.course,
                submission.hole_scores.len()
            );
            view.alert = Some(FormAlert::success(SUBMIT_OK.to_string()));
        }
        Err(AppError::Unauthorized) => return session_expired_redirect(&mut auth),
        Err(e) => {
            log::warn!("Round submission failed: {e}");
            view.alert = Some(FormAlert::error(SUBMIT_FAILED.to_string()));
            view.entered = Some(parsed);
        }
    }
    html(render_round_form_page(&view))
}
