//! Property and room endpoints

use crate::client::{ApiClient, ClientError};
use crate::types::{Property, Room};

impl ApiClient {
    /// List the properties of the signed-in owner
    pub async fn list_properties(&self) -> Result<Vec<Property>, ClientError> {
        self.get("/properties").await
    }

    /// List the rooms of one property
    pub async fn property_rooms(&self, property_id: u64) -> Result<Vec<Room>, ClientError> {
        self.get(&format!("/properties/{property_id}/rooms")).await
    }
}
