//! Book (catalog record) model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog record in the bookstore.
///
/// Identifiers are caller- or seed-assigned and are expected to be unique,
/// but the store does not enforce uniqueness on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Identifier of the book
    pub id: i64,
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Description of the book
    pub description: String,
    /// Price of the book (serialized as a decimal string)
    #[schema(value_type = String, example = "10")]
    pub price: Decimal,
    /// URL of the cover image
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}
