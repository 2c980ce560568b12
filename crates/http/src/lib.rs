//! PG manager HTTP layer
//!
//! Platform-neutral pieces of the frontend: the API client with its bearer
//! token interceptor, the token storage seam, and the session store that
//! ties them together. Nothing in here touches the DOM, so it runs natively
//! under `cargo test` as well as inside the WASM bundle.

pub mod client;
pub mod config;
pub mod session;
pub mod storage;
pub mod types;

pub use client::{ApiClient, ApiClientBuilder, error::ClientError};
pub use config::{ApiConfig, StorageConfig};
pub use session::{Session, SessionStore};
pub use storage::{MemoryStorage, StorageError, TokenStorage};
pub use types::{LoginRequest, LoginResponse, Property, Room, SessionUser};
