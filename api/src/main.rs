//! TourGael API Server
//!
//! Backend for a GAA international travel/tournament platform: club
//! registration and approval, event review with date-clash detection,
//! demand capture from travelling teams, day-pass pricing, and admin
//! reporting. Uses hexagonal (ports & adapters) architecture for clean
//! separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    AnyMailer, HttpMailer, NoopMailer, PostgresClubRepository, PostgresDayPassRateRepository,
    PostgresEventRepository, PostgresInterestRepository,
};
use app::{ClubService, EventService, InterestService, PricingService, ReportService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub event_service:
        Arc<EventService<PostgresEventRepository, PostgresClubRepository, AnyMailer>>,
    pub club_service: Arc<ClubService<PostgresClubRepository, AnyMailer>>,
    pub interest_service: Arc<InterestService<PostgresInterestRepository, PostgresEventRepository>>,
    pub pricing_service: Arc<PricingService<PostgresDayPassRateRepository, PostgresClubRepository>>,
    pub report_service: Arc<
        ReportService<
            PostgresEventRepository,
            PostgresClubRepository,
            PostgresInterestRepository,
            PostgresDayPassRateRepository,
        >,
    >,
    pub admin_key_hash: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tourgael_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting TourGael API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connected");

    // Create adapters
    let event_repo = Arc::new(PostgresEventRepository::new(db.clone()));
    let club_repo = Arc::new(PostgresClubRepository::new(db.clone()));
    let interest_repo = Arc::new(PostgresInterestRepository::new(db.clone()));
    let rate_repo = Arc::new(PostgresDayPassRateRepository::new(db.clone()));

    let mailer = Arc::new(if config.mail_enabled() {
        tracing::info!("Outbound mail enabled");
        AnyMailer::Http(HttpMailer::new(
            config.mail_api_url.clone().unwrap_or_default(),
            config.mail_api_key.clone().unwrap_or_default(),
            config.mail_api_secret.clone().unwrap_or_default(),
            config.mail_from.clone(),
        ))
    } else {
        tracing::info!("Outbound mail not configured, notifications will be logged only");
        AnyMailer::Noop(NoopMailer)
    });

    // Create application services
    let event_service = Arc::new(EventService::new(
        event_repo.clone(),
        club_repo.clone(),
        mailer.clone(),
    ));

    let club_service = Arc::new(ClubService::new(club_repo.clone(), mailer.clone()));

    let interest_service = Arc::new(InterestService::new(
        interest_repo.clone(),
        event_repo.clone(),
    ));

    let pricing_service = Arc::new(PricingService::new(rate_repo.clone(), club_repo.clone()));

    let report_service = Arc::new(ReportService::new(
        event_repo.clone(),
        club_repo.clone(),
        interest_repo.clone(),
        pricing_service.clone(),
    ));

    // Create app state
    let state = AppState {
        event_service,
        club_service,
        interest_service,
        pricing_service,
        report_service,
        admin_key_hash: auth::hash_api_key(&config.admin_api_key),
    };

    // Rate limiting config: 2 req/sec sustained, burst of 5
    // Uses PeerIpKeyExtractor to get client IP from socket connection
    // (SmartIpKeyExtractor requires X-Forwarded-For headers from reverse proxy)
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .expect("Failed to build governor config"),
    );

    // Rate-limited public submission routes
    let rate_limited_routes = Router::new()
        .route("/clubs/register", post(handlers::register_club))
        .route("/events/:id/interest", post(handlers::register_interest))
        .layer(GovernorLayer {
            config: governor_config,
        });

    // Build router
    let app = Router::new()
        // Health check (no auth)
        .route("/health", get(health))
        // Public read endpoints
        .route("/events", get(handlers::list_events))
        .route("/events/:id", get(handlers::get_event))
        // Merge rate-limited routes
        .merge(rate_limited_routes)
        // Admin routes
        .nest(
            "/",
            Router::new()
                // Event review
                .route("/events", post(handlers::submit_event))
                .route("/events/:id/approve", post(handlers::approve_event))
                .route("/events/:id/reject", post(handlers::reject_event))
                // Club review
                .route("/clubs", get(handlers::list_clubs))
                .route("/clubs/match", get(handlers::match_club))
                .route("/clubs/:id/approve", post(handlers::approve_club))
                .route("/clubs/:id/reject", post(handlers::reject_club))
                // Demand
                .route("/events/:id/interests", get(handlers::list_interests))
                .route("/interests/:id/convert", post(handlers::convert_interest))
                // Day-pass pricing
                .route(
                    "/clubs/:id/day-pass",
                    get(handlers::get_day_pass_rate).put(handlers::set_day_pass_rate),
                )
                // Reports
                .route("/reports/dashboard", get(handlers::dashboard))
                .route("/reports/events/:id/demand", get(handlers::event_demand))
                .route("/reports/events/:id/revenue", get(handlers::event_revenue))
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth::api_key::admin_auth_middleware,
                )),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
