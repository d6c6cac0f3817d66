//! Shared fixtures for the wiremock integration tests.

#![allow(dead_code)] // not every test binary uses every fixture

use serde_json::{Value, json};
use stayfinder_client::session::Credentials;
use stayfinder_client::{ApiConfig, ApiGateway, MemoryTokenStore, Session, SessionController};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Gateway pointed at the mock server.
pub fn gateway(server: &MockServer) -> ApiGateway {
    ApiGateway::new(ApiConfig::new(server.uri()))
}

/// Mount a login endpoint and establish a session for `user_id`.
#[allow(clippy::unwrap_used)]
pub async fn login_as(server: &MockServer, user_id: &str, is_host: bool) -> Session {
    let email = format!("{user_id}@example.com");
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": &email, "password": "hunter2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": format!("tok-{user_id}"),
            "user": {
                "id": user_id,
                "name": "Test User",
                "email": &email,
                "isHost": is_host,
            },
        })))
        .mount(server)
        .await;

    let mut controller = SessionController::new(gateway(server), MemoryTokenStore::new());
    controller
        .login(&Credentials {
            email,
            password: "hunter2".to_string(),
        })
        .await
        .unwrap();
    controller.session().unwrap().clone()
}

/// A listing document as the backend returns it.
pub fn listing_doc(id: &str, name: &str, host: &Value) -> Value {
    json!({
        "_id": id,
        "hotelName": name,
        "description": "A fine stay",
        "address": "1 Main St",
        "city": "Paris",
        "country": "France",
        "starRating": 4,
        "amenities": ["WiFi"],
        "images": ["uploads/front.jpg"],
        "roomTypes": [{
            "type": "Standard",
            "price": 90,
            "currency": "USD",
            "capacity": 2,
            "available": 5,
            "description": "Cozy",
        }],
        "host": host,
    })
}

/// A booking document as the backend returns it.
pub fn booking_doc(id: &str, status: &str, special_requests: Option<&str>) -> Value {
    let mut doc = json!({
        "_id": id,
        "listing": "l1",
        "user": {"_id": "guest-1", "name": "Guest", "email": "g@example.com"},
        "roomType": "Standard",
        "checkIn": "2025-06-01T00:00:00Z",
        "checkOut": "2025-06-04T00:00:00Z",
        "guests": 2,
        "totalPrice": 270,
        "status": status,
    });
    if let Some(text) = special_requests {
        doc["specialRequests"] = json!(text);
    }
    doc
}
