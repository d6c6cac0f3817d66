//! Listing types: hotels, room types, ownership, and the host-side draft.

use crate::error::{RoomTypeIssue, ValidationError};
use crate::user::User;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Reference to the user owning a listing.
///
/// The backend sometimes returns the owner as a populated user object and
/// sometimes as a bare id. One normalization function, [`Owner::id`], is
/// used everywhere ownership is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Owner {
    /// Populated user document.
    Embedded(User),
    /// Bare user id.
    Id(String),
}

impl Owner {
    /// Resolve the owner to its user id.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Embedded(user) => &user.id,
            Self::Id(id) => id,
        }
    }
}

/// Room price currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    /// US dollars.
    #[serde(rename = "USD")]
    Usd,
    /// Indian rupees.
    #[serde(rename = "INR")]
    Inr,
}

impl Currency {
    /// Display symbol for price rendering.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Inr => "₹",
        }
    }

    /// ISO-style currency code, as sent on the wire.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Inr => "INR",
        }
    }
}

/// A bookable room category within a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    /// Category label ("Standard", "Deluxe", ...).
    #[serde(rename = "type")]
    pub kind: String,

    /// Price per night.
    pub price: f64,

    /// Currency the price is denominated in.
    pub currency: Currency,

    /// Guest capacity per room.
    pub capacity: u32,

    /// Rooms currently available.
    pub available: u32,

    /// Free-text description.
    #[serde(default)]
    pub description: String,
}

impl RoomType {
    /// Whether this room type can still be selected for a new booking.
    ///
    /// Availability enforcement is entirely server-side; the client only
    /// disables exhausted options.
    #[must_use]
    pub const fn is_bookable(&self) -> bool {
        self.available > 0
    }
}

/// Host contact details attached to a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    /// Phone number.
    #[serde(default)]
    pub phone: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Optional website URL.
    #[serde(default)]
    pub website: String,
}

/// House policies attached to a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policies {
    /// Check-in time.
    pub check_in: String,
    /// Check-out time.
    pub check_out: String,
    /// Cancellation policy text.
    pub cancellation: String,
    /// Pet policy text.
    pub pet_policy: String,
    /// Smoking policy text.
    pub smoking_policy: String,
}

impl Default for Policies {
    fn default() -> Self {
        Self {
            check_in: "15:00".to_string(),
            check_out: "11:00".to_string(),
            cancellation: "Standard cancellation policy".to_string(),
            pet_policy: "No pets allowed".to_string(),
            smoking_policy: "No smoking".to_string(),
        }
    }
}

/// A hotel property owned by a host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Opaque listing identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Hotel name.
    #[serde(default)]
    pub hotel_name: String,

    /// Legacy display title present on some documents.
    #[serde(default)]
    pub title: Option<String>,

    /// Free-text description.
    #[serde(default)]
    pub description: String,

    /// Street address.
    #[serde(default)]
    pub address: String,

    /// City.
    #[serde(default)]
    pub city: String,

    /// Country.
    #[serde(default)]
    pub country: String,

    /// Star rating, 0-5.
    #[serde(default)]
    pub star_rating: u8,

    /// Amenity labels, in listing order.
    #[serde(default)]
    pub amenities: Vec<String>,

    /// Image paths or absolute URLs, in listing order.
    #[serde(default)]
    pub images: Vec<String>,

    /// Bookable room categories.
    #[serde(default)]
    pub room_types: Vec<RoomType>,

    /// Owning host.
    pub host: Owner,

    /// Maximum guests per booking, when the document carries it.
    #[serde(default)]
    pub guests: Option<u32>,

    /// Host contact details.
    #[serde(default)]
    pub contact_info: Option<ContactInfo>,

    /// House policies.
    #[serde(default)]
    pub policies: Option<Policies>,
}

impl Listing {
    /// Whether this listing carries the fields every display surface needs.
    ///
    /// Listings failing this check are silently dropped by the directory.
    #[must_use]
    pub fn is_displayable(&self) -> bool {
        !self.hotel_name.is_empty() && !self.city.is_empty() && !self.country.is_empty()
    }

    /// Preferred display name: the legacy title when present, else the
    /// hotel name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.hotel_name)
    }

    /// The cheapest room type, for "from ..." price badges.
    #[must_use]
    pub fn lowest_priced_room(&self) -> Option<&RoomType> {
        self.room_types
            .iter()
            .min_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal))
    }
}

/// An image to attach to a listing create/update submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    /// File name reported in the multipart part.
    pub file_name: String,
    /// MIME type of the image data.
    pub content_type: String,
    /// Raw image bytes.
    pub bytes: Vec<u8>,
}

/// One room type row in a listing draft.
///
/// `available` stays signed here so a negative entry can be rejected with
/// the same message the form showed, instead of failing to parse.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomTypeDraft {
    /// Category label.
    pub kind: String,
    /// Price per night.
    pub price: f64,
    /// Currency.
    pub currency: Currency,
    /// Guest capacity per room.
    pub capacity: u32,
    /// Rooms available, as entered.
    pub available: i64,
    /// Free-text description.
    pub description: String,
}

impl Default for RoomTypeDraft {
    fn default() -> Self {
        Self {
            kind: "Standard".to_string(),
            price: 1.0,
            currency: Currency::Usd,
            capacity: 1,
            available: 1,
            description: String::new(),
        }
    }
}

impl RoomTypeDraft {
    fn validate(&self, index: usize) -> Result<(), ValidationError> {
        let issue = if self.kind.is_empty() {
            Some(RoomTypeIssue::MissingType)
        } else if self.price <= 0.0 {
            Some(RoomTypeIssue::InvalidPrice)
        } else if self.capacity == 0 {
            Some(RoomTypeIssue::InvalidCapacity)
        } else if self.available < 0 {
            Some(RoomTypeIssue::NegativeAvailability)
        } else {
            None
        };

        match issue {
            Some(issue) => Err(ValidationError::InvalidRoomType { index, issue }),
            None => Ok(()),
        }
    }
}

/// The full create/edit form for a listing.
///
/// Submitted as multipart form data; see [`crate::multipart`] for the exact
/// field flattening the backend depends on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingDraft {
    /// Hotel name.
    pub hotel_name: String,
    /// Free-text description.
    pub description: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Country.
    pub country: String,
    /// Star rating, 0-5.
    pub star_rating: u8,
    /// Comma-separated amenity labels, as the form collects them.
    pub amenities: String,
    /// Host contact details.
    pub contact: ContactInfo,
    /// House policies.
    pub policies: Policies,
    /// Room type rows.
    pub room_types: Vec<RoomTypeDraft>,
    /// Images to attach. Updates replace the stored image set.
    pub images: Vec<ImageAttachment>,
}

impl ListingDraft {
    /// Fresh draft with one default room type, matching the empty form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            star_rating: 3,
            policies: Policies::default(),
            room_types: vec![RoomTypeDraft::default()],
            ..Self::default()
        }
    }

    /// Required-field validation; the first missing field wins.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`], in the same order the form
    /// checked: hotel name, description, address, city, country, phone,
    /// email, at least one image, then each room type row.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required: [(&str, &'static str); 7] = [
            (&self.hotel_name, "Hotel name"),
            (&self.description, "Description"),
            (&self.address, "Address"),
            (&self.city, "City"),
            (&self.country, "Country"),
            (&self.contact.phone, "Phone"),
            (&self.contact.email, "Email"),
        ];
        for (value, field) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }
        if self.images.is_empty() {
            return Err(ValidationError::NoImages);
        }
        for (i, room) in self.room_types.iter().enumerate() {
            room.validate(i + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str, host: Owner) -> Listing {
        Listing {
            id: id.to_string(),
            hotel_name: "Grand Hotel".to_string(),
            title: None,
            description: String::new(),
            address: "1 Main St".to_string(),
            city: "Paris".to_string(),
            country: "France".to_string(),
            star_rating: 4,
            amenities: vec![],
            images: vec![],
            room_types: vec![],
            host,
            guests: None,
            contact_info: None,
            policies: None,
        }
    }

    #[test]
    fn test_owner_normalizes_embedded_and_bare_ids() {
        let bare = Owner::Id("host-1".to_string());
        assert_eq!(bare.id(), "host-1");

        let embedded = Owner::Embedded(User {
            id: "host-1".to_string(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            is_host: true,
        });
        assert_eq!(embedded.id(), "host-1");
    }

    #[test]
    #[allow(clippy::unwrap_used)] // Test code
    fn test_owner_deserializes_both_shapes() {
        let bare: Owner = serde_json::from_str(r#""abc123""#).unwrap();
        assert_eq!(bare.id(), "abc123");

        let embedded: Owner =
            serde_json::from_str(r#"{"_id":"abc123","name":"Ana","email":"a@x.io"}"#).unwrap();
        assert_eq!(embedded.id(), "abc123");
    }

    #[test]
    fn test_displayable_requires_name_city_country() {
        let mut l = listing("l1", Owner::Id("h".to_string()));
        assert!(l.is_displayable());
        l.city = String::new();
        assert!(!l.is_displayable());
    }

    #[test]
    fn test_lowest_priced_room() {
        let mut l = listing("l1", Owner::Id("h".to_string()));
        l.room_types = vec![
            RoomType {
                kind: "Deluxe".to_string(),
                price: 220.0,
                currency: Currency::Usd,
                capacity: 3,
                available: 2,
                description: String::new(),
            },
            RoomType {
                kind: "Standard".to_string(),
                price: 90.0,
                currency: Currency::Usd,
                capacity: 2,
                available: 0,
                description: String::new(),
            },
        ];
        let cheapest = l.lowest_priced_room();
        assert_eq!(cheapest.map(|r| r.kind.as_str()), Some("Standard"));
        assert!(!l.room_types[1].is_bookable());
    }

    #[test]
    fn test_draft_validation_order() {
        let mut draft = ListingDraft::new();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("Hotel name"))
        );

        draft.hotel_name = "Grand Hotel".to_string();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("Description"))
        );

        draft.description = "Nice".to_string();
        draft.address = "1 Main St".to_string();
        draft.city = "Paris".to_string();
        draft.country = "France".to_string();
        draft.contact.phone = "555".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::MissingField("Email")));

        draft.contact.email = "host@example.com".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::NoImages));

        draft.images.push(ImageAttachment {
            file_name: "front.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: vec![0xff, 0xd8],
        });
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_room_type_draft_rejections() {
        let mut draft = ListingDraft::new();
        draft.hotel_name = "H".to_string();
        draft.description = "D".to_string();
        draft.address = "A".to_string();
        draft.city = "C".to_string();
        draft.country = "C".to_string();
        draft.contact.phone = "1".to_string();
        draft.contact.email = "e".to_string();
        draft.images.push(ImageAttachment {
            file_name: "a.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![],
        });

        draft.room_types[0].price = 0.0;
        assert_eq!(
            draft.validate(),
            Err(ValidationError::InvalidRoomType {
                index: 1,
                issue: RoomTypeIssue::InvalidPrice,
            })
        );

        draft.room_types[0].price = 80.0;
        draft.room_types[0].available = -1;
        assert_eq!(
            draft.validate(),
            Err(ValidationError::InvalidRoomType {
                index: 1,
                issue: RoomTypeIssue::NegativeAvailability,
            })
        );
    }
}
