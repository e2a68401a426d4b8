//! The product record as loaded from the catalog source.

use serde::{Deserialize, Serialize};

/// One item from the store catalog.
///
/// Catalog payloads carry no schema version, so every field falls back to its
/// default when absent: a structurally incompatible element degrades to empty
/// text fields rather than failing the whole load. Matching code can therefore
/// treat all text fields as present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique identifier, stable across loads.
    #[serde(default)]
    pub id: i64,
    /// Display name. Matched against queries and used for prefix ranking.
    #[serde(default)]
    pub name: String,
    /// Category label. Matched against queries.
    #[serde(default)]
    pub category: String,
    /// Price in the store's display currency.
    #[serde(default)]
    pub price: f64,
    /// Link to the product page. Opaque to the search core.
    #[serde(default)]
    pub url: String,
    /// Free-text description. Matched against queries.
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_decode_to_defaults() {
        let product: Product = serde_json::from_str(r#"{"id": 7, "name": "كابل شحن"}"#).unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.name, "كابل شحن");
        assert_eq!(product.category, "");
        assert_eq!(product.description, "");
        assert_eq!(product.price, 0.0);
        assert_eq!(product.url, "");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let product: Product =
            serde_json::from_str(r#"{"id": 1, "name": "x", "stock": 42}"#).unwrap();
        assert_eq!(product.id, 1);
    }

    #[test]
    fn full_record_round_trips() {
        let product = Product {
            id: 2,
            name: "باور بانك 20000".into(),
            category: "شحن".into(),
            price: 99.0,
            url: "https://shop.example/p/2".into(),
            description: "بطارية محمولة بسعة كبيرة".into(),
        };
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
