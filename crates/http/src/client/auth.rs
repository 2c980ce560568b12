//! Authentication endpoints

use crate::client::{ApiClient, ClientError};
use crate::types::{LoginRequest, LoginResponse};

impl ApiClient {
    /// Exchange credentials for a bearer token
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ClientError> {
        self.post("/auth/login", credentials).await
    }
}
