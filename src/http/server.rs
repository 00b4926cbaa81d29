//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, panics, timeout, limits, metrics)
//! - Own the store for the lifetime of the server
//! - Bind server to listener and shut down gracefully

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue},
    middleware,
    routing::get,
    Router,
};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    catch_panic::CatchPanicLayer,
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::handlers::{self, cars, dealerships};
use crate::http::request::{normalize_path, MakeRequestUuidV4};
use crate::http::response::panic_response;
use crate::observability::metrics;
use crate::store::{SharedStore, Store};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
}

/// HTTP server for the dealership API.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
    store: SharedStore,
}

impl HttpServer {
    /// Create a new HTTP server, building the store the config asks for.
    pub fn new(config: ServiceConfig) -> Self {
        let store = if config.store.seed {
            Store::seeded()
        } else {
            Store::new()
        };
        tracing::info!(
            dealerships = store.dealerships().len(),
            cars = store.car_count(),
            "Store initialized"
        );
        metrics::record_store_size(&store);

        Self::with_store(config, store)
    }

    /// Create a new HTTP server around an existing store.
    pub fn with_store(config: ServiceConfig, store: Store) -> Self {
        let store = store.into_shared();
        let state = AppState {
            store: store.clone(),
        };

        let router = Self::build_router(&config, state);
        Self {
            router,
            config,
            store,
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let routes = Router::new()
            .merge(resource_routes("dealerships", "cars"))
            .merge(resource_routes("concesionarios", "coches"))
            .route("/health", get(handlers::health))
            .fallback(handlers::fallback)
            .with_state(state);

        normalize_paths(with_middleware(config, routes))
    }

    /// The router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Handle to the store the handlers operate on.
    pub fn store(&self) -> SharedStore {
        self.store.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            request_timeout_secs = self.config.timeouts.request_secs,
            max_body_size = self.config.limits.max_body_size,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        let store = self.store.read().await;
        tracing::info!(
            dealerships = store.dealerships().len(),
            cars = store.car_count(),
            "HTTP server stopped, discarding store"
        );
        Ok(())
    }
}

/// Wrap routes in the middleware stack.
#[allow(deprecated)]
fn with_middleware(config: &ServiceConfig, routes: Router) -> Router {
    routes
        .layer(middleware::from_fn(metrics::track_requests))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::SERVER,
            HeaderValue::from_static(concat!("dealership-api/", env!("CARGO_PKG_VERSION"))),
        ))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
}

/// Route matching ignores case and trailing slashes.
///
/// `Router::layer` runs after routing, so the rewrite sits on an outer
/// router whose only job is to hand the request to the real one.
fn normalize_paths(router: Router) -> Router {
    Router::new()
        .fallback_service(router)
        .layer(middleware::map_request(normalize_path))
}

/// CRUD routes for one collection name and its nested car collection name.
fn resource_routes(collection: &str, cars_collection: &str) -> Router<AppState> {
    let base = format!("/{}", collection);
    let item = format!("{}/{{id}}", base);
    let cars_base = format!("{}/{}", item, cars_collection);
    let car_item = format!("{}/{{car_id}}", cars_base);

    Router::new()
        .route(
            &base,
            get(dealerships::list_dealerships).post(dealerships::create_dealership),
        )
        .route(
            &item,
            get(dealerships::get_dealership)
                .put(dealerships::update_dealership)
                .delete(dealerships::delete_dealership),
        )
        .route(&cars_base, get(cars::list_cars).post(cars::create_car))
        .route(
            &car_item,
            get(cars::get_car)
                .put(cars::update_car)
                .delete(cars::delete_car),
        )
}
