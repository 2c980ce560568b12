//! PG manager web UI
//!
//! Routing, session context and pages. The HTTP client and the session
//! store themselves live in `pg-manager-http`.

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod config;
pub mod pages;
pub mod routes;
pub mod session;
pub mod storage;

pub use app::{App, AppProps};
pub use bootstrap::AppServices;
pub use routes::{Navigation, Route};
