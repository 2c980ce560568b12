//! Request and response types shared with the backend

use serde::{Deserialize, Deserializer, Serialize};

/// Credentials posted to `/auth/login`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Successful login response
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// The signed-in user as far as the frontend knows it
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub role: Option<String>,
}

/// A PG building owned by the signed-in owner
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub owner_id: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rooms: Vec<Room>,
}

/// A room inside a property
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Rooms embed the ORM base model, which serializes its key as `ID`
    #[serde(rename = "ID", alias = "id")]
    pub id: u64,
    pub property_id: u64,
    #[serde(rename = "room_no")]
    pub room_number: String,
    pub capacity: u32,
    /// Rent per bed
    pub price: f64,
    pub deposit: f64,
    #[serde(default)]
    pub occupied: u32,
    #[serde(default)]
    pub is_full: bool,
}

impl Room {
    /// Beds still free in this room
    pub fn vacancies(&self) -> u32 {
        self.capacity.saturating_sub(self.occupied)
    }
}

/// The backend encodes an empty relation as `null`
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
