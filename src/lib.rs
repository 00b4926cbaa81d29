//! Dealership API library.
//!
//! CRUD over dealerships and the cars each one owns, held in memory for the
//! lifetime of the process.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod store;

pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::Store;
