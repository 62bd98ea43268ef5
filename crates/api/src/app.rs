use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use persistence::MemoryStore;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, rate_limit_middleware, security_headers_middleware,
    trace_id, RateLimiterState, EVICTION_INTERVAL,
};
use crate::routes::{
    bookings, class_schedules, classes, contact, facilities, health, membership_plans,
    membership_registrations, testimonials, trainers, users,
};

#[derive(Clone)]
pub struct AppState {
    pub store: MemoryStore,
    pub config: Arc<Config>,
    pub rate_limiter: Option<Arc<RateLimiterState>>,
}

pub fn create_app(config: Config, store: MemoryStore) -> Router {
    let config = Arc::new(config);

    // Rate limiting is disabled when rate_limit_per_minute is 0
    let rate_limiter = if config.security.rate_limit_per_minute > 0 {
        let limiter = Arc::new(RateLimiterState::new(
            config.security.rate_limit_per_minute,
            config.security.trusted_proxies.clone(),
        ));
        if tokio::runtime::Handle::try_current().is_ok() {
            limiter.spawn_eviction(EVICTION_INTERVAL);
        }
        Some(limiter)
    } else {
        None
    };

    let state = AppState {
        store,
        config: config.clone(),
        rate_limiter,
    };

    let cors = if config.security.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Catalog and read routes
    let read_routes = Router::new()
        .route(
            "/api/membership-plans",
            get(membership_plans::list_membership_plans),
        )
        .route(
            "/api/membership-plans/:id",
            get(membership_plans::get_membership_plan),
        )
        .route("/api/trainers", get(trainers::list_trainers))
        .route("/api/trainers/:id", get(trainers::get_trainer))
        .route("/api/classes", get(classes::list_classes))
        .route("/api/classes/:id", get(classes::get_class))
        .route("/api/facilities", get(facilities::list_facilities))
        .route("/api/facilities/:id", get(facilities::get_facility))
        .route("/api/testimonials", get(testimonials::list_testimonials))
        .route("/api/testimonials/:id", get(testimonials::get_testimonial))
        .route(
            "/api/class-schedules",
            get(class_schedules::list_class_schedules),
        )
        .route(
            "/api/class-schedules/:id",
            get(class_schedules::get_class_schedule),
        )
        .route("/api/users/:id", get(users::get_user))
        .route("/api/users/:id/bookings", get(users::list_user_bookings))
        .route(
            "/api/users/:id/membership-registrations",
            get(users::list_user_membership_registrations),
        );

    // Write routes, limited per client
    let write_routes = Router::new()
        .route(
            "/api/membership-registration",
            post(membership_registrations::register_membership),
        )
        .route("/api/book-class", post(bookings::book_class))
        .route("/api/contact", post(contact::submit_contact_message))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ));

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(read_routes)
        .merge(write_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            security_headers_middleware,
        ))
        .layer(RequestBodyLimitLayer::new(config.server.max_body_size))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
