use futures::future::join_all;

use super::dashboard::{Deps, DashboardModel, Msg, run_effect, update};
use super::error::AppError;

/// Runs the MVU loop for the dashboard: seeds with `init_msg`, then runs each batch of
/// effects concurrently and feeds their messages back one at a time.
///
/// # Errors
///
/// Returns `AppError::Cancelled` if the request was cancelled; nothing is rendered then.
pub async fn run_dashboard(
    model: &mut DashboardModel,
    init_msg: Msg,
    deps: Deps<'_>,
) -> Result<(), AppError> {
    let mut effects = update(model, init_msg);
    while !effects.is_empty() {
        let batch = std::mem::take(&mut effects);
        let msgs = {
            let snapshot: &DashboardModel = model;
            join_all(batch.into_iter().map(|effect| run_effect(effect, snapshot, deps))).await
        };
        for msg in msgs {
            if matches!(msg, Msg::Cancelled) {
                update(model, msg);
                return Err(AppError::Cancelled);
            }
            effects.extend(update(model, msg));
        }
    }
    Ok(())
}
