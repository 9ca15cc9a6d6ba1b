use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for cart lines (the product id from the catalog).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A product line held in the shopping cart.
///
/// The serialized form matches what the storefront writes to device storage:
/// a flat object with `id`, `title`, `image_url`, `price` and `quantity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub title: String,
    pub image_url: String,
    pub price: f64,
    /// Units of this product in the cart. Signed because records loaded from
    /// storage are not validated.
    pub quantity: i64,
}

impl CartItem {
    /// Creates a new cart line.
    ///
    /// # Arguments
    /// * `id` - Catalog product id
    /// * `title` - Display title
    /// * `image_url` - Product image shown next to the line
    /// * `price` - Unit price
    /// * `quantity` - Units in the cart
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        image_url: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image_url: image_url.into(),
            price,
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_storefront_field_names() {
        let item = CartItem::new("p1", "Mug", "https://img/mug.png", 10.0, 2);
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["id"], "p1");
        assert_eq!(json["title"], "Mug");
        assert_eq!(json["image_url"], "https://img/mug.png");
        assert_eq!(json["price"], 10.0);
        assert_eq!(json["quantity"], 2);
    }

    #[test]
    fn test_parses_stored_array() {
        let raw = r#"[{"id":"p1","title":"Mug","image_url":"u","price":9.5,"quantity":3}]"#;
        let items: Vec<CartItem> = serde_json::from_str(raw).unwrap();

        assert_eq!(items, vec![CartItem::new("p1", "Mug", "u", 9.5, 3)]);
    }
}
