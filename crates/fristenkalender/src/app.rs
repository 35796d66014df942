use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        business_day::{
            add_business_days, add_calendar_days, check_business_day, next_business_day,
            previous_business_day,
        },
        export::{export_fristen_for_type, export_whole_calendar},
        fristen::{all_fristen, fristen_for_type},
        health::{health, version},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for the read-only API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    let timeout = TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        state.config.request_timeout(),
    );

    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        // Deadline queries
        .route("/deadlines/{year}", get(all_fristen))
        .route("/deadlines/{year}/{category}", get(fristen_for_type))
        // Calendar file exports
        .route(
            "/calendar/export/{filename}/{attendee}/{year}",
            get(export_whole_calendar),
        )
        .route(
            "/calendar/export/{filename}/{attendee}/{year}/{category}",
            get(export_fristen_for_type),
        )
        // Business-day queries
        .route("/businessday/is/{date}", get(check_business_day))
        .route("/businessday/next/{date}", get(next_business_day))
        .route("/businessday/previous/{date}", get(previous_business_day))
        .route(
            "/businessday/add/business/{date}/{count}",
            get(add_business_days),
        )
        .route(
            "/businessday/add/calendar/{date}/{count}",
            get(add_calendar_days),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(timeout)
        .with_state(state)
}
