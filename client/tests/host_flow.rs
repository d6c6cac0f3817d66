//! Host listing management: create with multipart flattening, edit, delete
//! with cascade receipt.

#![allow(clippy::unwrap_used)]

mod common;

use common::{gateway, listing_doc, login_as};
use serde_json::json;
use stayfinder_client::{Error, HostDashboard, HostListingService};
use stayfinder_core::{ImageAttachment, ListingDraft, ValidationError};
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn complete_draft() -> ListingDraft {
    let mut draft = ListingDraft::new();
    draft.hotel_name = "Grand Hotel".to_string();
    draft.description = "A fine stay".to_string();
    draft.address = "1 Main St".to_string();
    draft.city = "Paris".to_string();
    draft.country = "France".to_string();
    draft.amenities = "WiFi, Pool".to_string();
    draft.contact.phone = "555-0100".to_string();
    draft.contact.email = "host@example.com".to_string();
    draft.images.push(ImageAttachment {
        file_name: "front.jpg".to_string(),
        content_type: "image/jpeg".to_string(),
        bytes: b"not-really-a-jpeg".to_vec(),
    });
    draft
}

#[tokio::test]
async fn create_validates_before_any_network_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/listings"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let session = login_as(&server, "host-1", true).await;
    let service = HostListingService::new(gateway(&server));

    let mut draft = complete_draft();
    draft.images.clear();
    let err = service.create(&session, &draft).await.unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationError::NoImages)));
    assert_eq!(
        err.surface_message("Failed to create hotel. Please try again."),
        "At least one image is required"
    );
}

#[tokio::test]
async fn create_sends_bracket_flattened_multipart_fields() {
    let server = MockServer::start().await;
    let session = login_as(&server, "host-1", true).await;

    Mock::given(method("POST"))
        .and(path("/api/listings"))
        .and(header("x-auth-token", session.token()))
        .and(body_string_contains("name=\"hotelName\""))
        .and(body_string_contains("name=\"roomTypes[0][price]\""))
        .and(body_string_contains("name=\"roomTypes[0][currency]\""))
        .and(body_string_contains("name=\"policies[checkIn]\""))
        .and(body_string_contains("name=\"contactInfo[email]\""))
        .and(body_string_contains("name=\"images\""))
        .and(body_string_contains("filename=\"front.jpg\""))
        .respond_with(ResponseTemplate::new(201).set_body_json(listing_doc(
            "l-new",
            "Grand Hotel",
            &json!("host-1"),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let service = HostListingService::new(gateway(&server));
    let listing = service.create(&session, &complete_draft()).await.unwrap();
    assert_eq!(listing.id, "l-new");
}

#[tokio::test]
async fn update_fetches_then_puts_a_full_replacement() {
    let server = MockServer::start().await;
    let session = login_as(&server, "host-1", true).await;

    Mock::given(method("GET"))
        .and(path("/api/listings/l1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_doc(
            "l1",
            "Grand Hotel",
            &json!("host-1"),
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/listings/l1"))
        .and(body_string_contains("name=\"roomTypes[0][available]\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_doc(
            "l1",
            "Grander Hotel",
            &json!("host-1"),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let service = HostListingService::new(gateway(&server));
    let existing = service.load_for_edit("l1").await.unwrap();
    assert_eq!(existing.hotel_name, "Grand Hotel");

    let mut draft = complete_draft();
    draft.hotel_name = "Grander Hotel".to_string();
    let updated = service.update(&session, "l1", &draft).await.unwrap();
    assert_eq!(updated.hotel_name, "Grander Hotel");
}

#[tokio::test]
async fn unconfirmed_delete_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/listings/l1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let session = login_as(&server, "host-1", true).await;
    let mut dashboard = HostDashboard::new(gateway(&server));
    let err = dashboard
        .delete_listing(&session, "l1", false)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::DeleteNotConfirmed)
    ));
}

#[tokio::test]
async fn confirmed_delete_reports_cascade_and_removes_locally_without_refetch() {
    let server = MockServer::start().await;
    let session = login_as(&server, "host-1", true).await;

    Mock::given(method("GET"))
        .and(path("/api/listings"))
        .and(query_param("host", "host-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            listing_doc("l1", "Grand Hotel", &json!("host-1")),
            listing_doc("l2", "Harbor Inn", &json!("host-1")),
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/listings/l1"))
        .and(header("x-auth-token", session.token()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cancelledBookings": 3,
            "hotelName": "Grand Hotel",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut dashboard = HostDashboard::new(gateway(&server));
    dashboard.load(&session).await.unwrap();
    assert_eq!(dashboard.listings().len(), 2);
    assert_eq!(dashboard.stats().room_types, 2);

    let receipt = dashboard
        .delete_listing(&session, "l1", true)
        .await
        .unwrap();
    assert_eq!(receipt.cancelled_bookings, 3);
    assert!(receipt.notice().contains("3 booking(s)"));

    // Removed from the local collection, no listing re-fetch (GET expect(1)).
    let remaining: Vec<&str> = dashboard
        .listings()
        .iter()
        .map(|l| l.id.as_str())
        .collect();
    assert_eq!(remaining, vec!["l2"]);
}
