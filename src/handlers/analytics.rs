// GET /analytics handler

use std::convert::Infallible;

use tracing::{error, info};
use warp::http::StatusCode;
use warp::Reply;

use super::{ApiError, AppState};
use crate::analytics::top_words;
use crate::models::{AnalyticsResponse, RecentQuestion};

/// How many recent records the summary includes
pub const RECENT_LIMIT: usize = 5;

/// How many top words the summary includes
pub const TOP_WORDS: usize = 3;

/// Summarize the stored history
pub async fn analytics(state: &AppState) -> Result<AnalyticsResponse, ApiError> {
    let (total_queries, recent, questions) = state
        .store
        .run(|store| {
            let total = store.count()?;
            let recent = store.recent(RECENT_LIMIT)?;
            let questions = store.all_questions()?;
            Ok((total, recent, questions))
        })
        .await
        .map_err(|e| {
            error!(error = %e, "Analytics query failed");
            ApiError::analytics(e)
        })?;

    Ok(AnalyticsResponse {
        total_queries,
        last_5_questions: recent.into_iter().map(RecentQuestion::from).collect(),
        top_3_words: top_words(&questions, TOP_WORDS),
    })
}

pub async fn analytics_handler(state: AppState) -> Result<warp::reply::Response, Infallible> {
    info!("GET /analytics");

    let response = match analytics(&state).await {
        Ok(body) => warp::reply::with_status(warp::reply::json(&body), StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    };
    Ok(response)
}
