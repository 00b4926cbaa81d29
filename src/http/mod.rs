//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, JSON body decoding)
//!     → handlers/ (store lookup and mutation)
//!     → response.rs (error → status + JSON body)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{JsonBody, MakeRequestUuidV4, X_REQUEST_ID};
pub use response::{ApiError, ErrorBody};
pub use server::{AppState, HttpServer};
