//! Integration tests for the API client and its token interceptor

use pg_manager_http::{
    ApiClient, ClientError, MemoryStorage, StorageError, TokenStorage, types::Property,
};
use serde_json::json;
use std::rc::Rc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Storage whose reads always fail
struct BrokenStorage;

impl TokenStorage for BrokenStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Access("quota exceeded".into()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Access("quota exceeded".into()))
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Access("quota exceeded".into()))
    }
}

fn api_base(server: &MockServer) -> String {
    format!("{}/api", server.uri())
}

fn client_with_token(server: &MockServer, token: &str) -> ApiClient {
    ApiClient::new(api_base(server), Rc::new(MemoryStorage::with_token(token))).unwrap()
}

#[tokio::test]
async fn test_persisted_token_is_sent_as_bearer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/properties"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_with_token(&mock_server, "abc");

    let properties = client.list_properties().await.unwrap();
    assert!(properties.is_empty());
}

#[tokio::test]
async fn test_request_without_token_is_unmodified() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/properties"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(api_base(&mock_server), Rc::new(MemoryStorage::new())).unwrap();
    client.list_properties().await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_token_change_applies_to_next_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/properties"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let storage = Rc::new(MemoryStorage::new());
    let client = ApiClient::new(api_base(&mock_server), storage.clone()).unwrap();

    client.list_properties().await.unwrap();
    storage.set_token("fresh").unwrap();
    client.list_properties().await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
    assert_eq!(
        requests[1].headers.get("authorization").unwrap(),
        "Bearer fresh"
    );
}

#[tokio::test]
async fn test_storage_failure_rejects_request() {
    let mock_server = MockServer::start().await;

    let client = ApiClient::new(api_base(&mock_server), Rc::new(BrokenStorage)).unwrap();
    let result = client.list_properties().await;

    assert!(matches!(
        result,
        Err(ClientError::Storage(StorageError::Access(_)))
    ));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_error_status_mapping() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/properties"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/properties/9/rooms"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "Failed to fetch rooms"
        })))
        .mount(&mock_server)
        .await;

    let client = client_with_token(&mock_server, "t");

    let result = client.list_properties().await;
    assert!(matches!(result, Err(ClientError::AuthenticationFailed(_))));

    let result = client.property_rooms(9).await;
    match result {
        Err(ClientError::ServerError { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("Failed to fetch rooms"));
        }
        _ => panic!("Expected server error"),
    }
}

#[tokio::test]
async fn test_malformed_success_body_is_serialization_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/properties"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = client_with_token(&mock_server, "t");
    let result = client.list_properties().await;

    assert!(matches!(result, Err(ClientError::Serialization(_))));
}

#[tokio::test]
async fn test_property_rooms_decodes_backend_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/properties/3/rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "ID": 11,
            "CreatedAt": "2024-01-01T00:00:00Z",
            "property_id": 3,
            "room_no": "G-2",
            "capacity": 2,
            "price": 5000.0,
            "deposit": 8000.0,
            "occupied": 1,
            "is_full": false
        }])))
        .mount(&mock_server)
        .await;

    let client = client_with_token(&mock_server, "t");
    let rooms = client.property_rooms(3).await.unwrap();

    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].id, 11);
    assert_eq!(rooms[0].room_number, "G-2");
    assert_eq!(rooms[0].vacancies(), 1);
}

#[tokio::test]
async fn test_list_properties_decodes_owner_buildings() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/properties"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z",
            "name": "Sunrise PG",
            "address": "12 Lake Road",
            "owner_id": 4,
            "rooms": null
        }])))
        .mount(&mock_server)
        .await;

    let client = client_with_token(&mock_server, "t");
    let properties: Vec<Property> = client.list_properties().await.unwrap();

    assert_eq!(properties[0].name, "Sunrise PG");
    assert!(properties[0].rooms.is_empty());
}
