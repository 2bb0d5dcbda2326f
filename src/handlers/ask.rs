// POST /ask handler

use std::convert::Infallible;

use chrono::{Local, SubsecRound};
use tracing::{info, warn};
use warp::http::StatusCode;
use warp::Reply;

use super::{ApiError, AppState};
use crate::models::{AskRequest, AskResponse};

/// Answer a question and log it
///
/// Upstream failures become [`ApiError`]s. Persisting the answer is best
/// effort: a storage failure goes to the observer and the answer is still
/// returned.
pub async fn ask(state: &AppState, request: AskRequest) -> Result<AskResponse, ApiError> {
    let question = request.question;
    if question.trim().is_empty() {
        return Err(ApiError::unprocessable("question must not be empty"));
    }

    let answer = state.upstream.ask(&question).await.map_err(|e| {
        warn!(error = %e, "Upstream call failed");
        ApiError::from(e)
    })?;

    let (q, a) = (question.clone(), answer.clone());
    match state.store.run(move |store| store.insert(&q, &a)).await {
        Ok(id) => state.observer.record_saved(id),
        Err(e) => state.observer.record_dropped(&question, &e),
    }

    Ok(AskResponse {
        question,
        answer,
        timestamp: Local::now().naive_local().trunc_subsecs(6),
    })
}

pub async fn ask_handler(
    request: AskRequest,
    state: AppState,
) -> Result<warp::reply::Response, Infallible> {
    info!("POST /ask");

    let response = match ask(&state, request).await {
        Ok(body) => warp::reply::with_status(warp::reply::json(&body), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    };
    Ok(response)
}
