// Catalog data types
// Product records and the create/patch wire payloads

use serde::{Deserialize, Deserializer, Serialize};

/// A single catalog record
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    pub rating: Option<f64>,
    pub image: Option<String>,
}

/// Create payload for `POST /api/products`
///
/// Every field is optional at the wire level so missing fields can be
/// reported as a validation error rather than a parse error.
#[derive(Debug, Deserialize, Default)]
pub struct NewProduct {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
}

impl NewProduct {
    /// Check the mandatory fields: name/category/description must be
    /// non-empty after trimming, price and stock must be present.
    pub fn validate(&self) -> Result<(), &'static str> {
        let text_ok =
            |field: &Option<String>| field.as_deref().is_some_and(|s| !s.trim().is_empty());

        if !text_ok(&self.name)
            || !text_ok(&self.category)
            || !text_ok(&self.description)
            || self.price.is_none()
            || self.stock.is_none()
        {
            return Err("Missing required fields");
        }
        Ok(())
    }
}

/// Partial-update payload for `PATCH /api/products/{id}`
///
/// `rating` and `image` are nullable, so they distinguish an absent field
/// (leave untouched) from an explicit `null` (clear the value).
#[derive(Debug, Deserialize, Default)]
pub struct ProductPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default, deserialize_with = "double_option")]
    pub rating: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub image: Option<Option<String>>,
}

/// Wrap a nullable field so that `null` becomes `Some(None)` while an
/// absent field stays `None` via the serde default.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl Product {
    /// Apply a partial update in place; string fields are stored trimmed
    pub fn apply(&mut self, patch: &ProductPatch) {
        if let Some(name) = &patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(category) = &patch.category {
            self.category = category.trim().to_string();
        }
        if let Some(description) = &patch.description {
            self.description = description.trim().to_string();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(rating) = &patch.rating {
            self.rating = *rating;
        }
        if let Some(image) = &patch.image {
            self.image = image.as_ref().map(|s| s.trim().to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: "abc123".to_string(),
            name: "Laptop".to_string(),
            category: "Electronics".to_string(),
            description: "Powerful gaming laptop".to_string(),
            price: 1200.0,
            stock: 5,
            rating: Some(4.5),
            image: None,
        }
    }

    #[test]
    fn test_validate_complete_payload() {
        let new: NewProduct = serde_json::from_str(
            r#"{"name":"Mouse","category":"Peripherals","description":"Gaming mouse","price":50,"stock":25}"#,
        )
        .unwrap();
        assert!(new.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_fields() {
        let new: NewProduct =
            serde_json::from_str(r#"{"name":"Mouse","price":50,"stock":25}"#).unwrap();
        assert_eq!(new.validate(), Err("Missing required fields"));

        let new: NewProduct = serde_json::from_str(
            r#"{"name":"Mouse","category":"Peripherals","description":"Gaming mouse","stock":25}"#,
        )
        .unwrap();
        assert_eq!(new.validate(), Err("Missing required fields"));
    }

    #[test]
    fn test_validate_blank_text_counts_as_missing() {
        let new: NewProduct = serde_json::from_str(
            r#"{"name":"  ","category":"Peripherals","description":"Gaming mouse","price":50,"stock":25}"#,
        )
        .unwrap();
        assert_eq!(new.validate(), Err("Missing required fields"));
    }

    #[test]
    fn test_patch_absent_field_is_untouched() {
        let patch: ProductPatch = serde_json::from_str(r#"{"price":999.5}"#).unwrap();
        let mut product = sample_product();
        product.apply(&patch);

        assert_eq!(product.price, 999.5);
        assert_eq!(product.name, "Laptop");
        assert_eq!(product.rating, Some(4.5));
    }

    #[test]
    fn test_patch_null_clears_nullable_field() {
        let patch: ProductPatch = serde_json::from_str(r#"{"rating":null}"#).unwrap();
        assert_eq!(patch.rating, Some(None));

        let mut product = sample_product();
        product.apply(&patch);
        assert_eq!(product.rating, None);
    }

    #[test]
    fn test_patch_trims_strings() {
        let patch: ProductPatch =
            serde_json::from_str(r#"{"name":"  Ultrabook  ","image":" https://x/img.png "}"#)
                .unwrap();
        let mut product = sample_product();
        product.apply(&patch);

        assert_eq!(product.name, "Ultrabook");
        assert_eq!(product.image.as_deref(), Some("https://x/img.png"));
    }
}
