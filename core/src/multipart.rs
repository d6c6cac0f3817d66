//! Multipart field flattening for listing submissions.
//!
//! The backend parses listing create/update bodies as multipart form data
//! with nested objects flattened into bracket-indexed field names
//! (`roomTypes[0][price]`, `policies[checkIn]`, `contactInfo[email]`).
//! This flattening scheme is a wire contract the backend depends on and
//! must be preserved exactly.

use crate::listing::ListingDraft;

/// Flatten a listing draft into ordered `(field, value)` text pairs.
///
/// Image attachments are not included; they travel as repeated `images`
/// file parts and are appended by the HTTP layer.
#[must_use]
pub fn flatten_fields(draft: &ListingDraft) -> Vec<(String, String)> {
    let mut fields = Vec::new();
    let mut push = |name: String, value: String| fields.push((name, value));

    push("contactInfo[phone]".to_string(), draft.contact.phone.clone());
    push("contactInfo[email]".to_string(), draft.contact.email.clone());
    push(
        "contactInfo[website]".to_string(),
        draft.contact.website.clone(),
    );
    push("hotelName".to_string(), draft.hotel_name.clone());
    push("description".to_string(), draft.description.clone());
    push("address".to_string(), draft.address.clone());
    push("city".to_string(), draft.city.clone());
    push("country".to_string(), draft.country.clone());
    push("starRating".to_string(), draft.star_rating.to_string());
    push("amenities".to_string(), draft.amenities.clone());

    for (i, room) in draft.room_types.iter().enumerate() {
        push(format!("roomTypes[{i}][type]"), room.kind.clone());
        push(format!("roomTypes[{i}][price]"), room.price.to_string());
        push(
            format!("roomTypes[{i}][currency]"),
            room.currency.code().to_string(),
        );
        push(format!("roomTypes[{i}][capacity]"), room.capacity.to_string());
        push(
            format!("roomTypes[{i}][available]"),
            room.available.to_string(),
        );
        push(
            format!("roomTypes[{i}][description]"),
            room.description.clone(),
        );
    }

    push("policies[checkIn]".to_string(), draft.policies.check_in.clone());
    push(
        "policies[checkOut]".to_string(),
        draft.policies.check_out.clone(),
    );
    push(
        "policies[cancellation]".to_string(),
        draft.policies.cancellation.clone(),
    );
    push(
        "policies[petPolicy]".to_string(),
        draft.policies.pet_policy.clone(),
    );
    push(
        "policies[smokingPolicy]".to_string(),
        draft.policies.smoking_policy.clone(),
    );

    fields
}
