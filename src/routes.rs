// Route definitions

use std::convert::Infallible;

use warp::Filter;

use crate::handlers::{self, AppState};

/// Largest accepted request body
pub const MAX_BODY_BYTES: u64 = 16 * 1024;

fn with_state(state: AppState) -> impl Filter<Extract = (AppState,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}

pub fn configure_routes(
    state: AppState,
) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
    // POST /ask
    let ask = warp::path("ask")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(with_state(state.clone()))
        .and_then(handlers::ask_handler);

    // GET /analytics
    let analytics = warp::path("analytics")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_state(state))
        .and_then(handlers::analytics_handler);

    ask.or(analytics).recover(handlers::handle_rejection)
}
