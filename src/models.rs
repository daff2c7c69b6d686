//! Core API entities shared by the composite layer and the downstream clients.
//!
//! All of these are transient value records: they are built from a parsed
//! HTTP response, carried through one aggregate request, and dropped. The
//! composite layer never caches or mutates them. `productId` is the join key
//! across the three entity kinds but is not validated here; the aggregator is
//! a pass-through, never authoritative for the data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product record served by the product backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[schema(example = 1)]
    pub product_id: i32,
    #[schema(example = "iPad")]
    pub name: String,
    #[schema(example = 200)]
    pub weight: i32,
    /// Which backend instance served this record. Informational only.
    #[serde(default)]
    pub service_address: String,
}

/// Recommendation record served by the recommendation backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub product_id: i32,
    pub recommendation_id: i32,
    pub author: String,
    pub rate: i32,
    pub content: String,
    #[serde(default)]
    pub service_address: String,
}

/// Review record served by the review backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub product_id: i32,
    pub review_id: i32,
    pub author: String,
    pub subject: String,
    pub content: String,
    #[serde(default)]
    pub service_address: String,
}

/// Wire shape of a backend error body, and of our own error responses.
///
/// When a backend rejects a request it answers with this JSON; only the
/// `message` field is extracted during error translation. Deserialization
/// requires `message` so that arbitrary JSON bodies fall through to the
/// raw-text fallback instead of yielding an empty message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorInfo {
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub status: u16,
    pub message: String,
}

impl ErrorInfo {
    /// Build an error body for a response produced by this service.
    pub fn new(path: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            path: path.into(),
            status,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_uses_camel_case_wire_names() {
        let json = r#"{"productId":1,"name":"iPad","weight":200,"serviceAddress":"host-a:7001"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.product_id, 1);
        assert_eq!(product.name, "iPad");
        assert_eq!(product.weight, 200);
        assert_eq!(product.service_address, "host-a:7001");

        let back = serde_json::to_value(&product).unwrap();
        assert_eq!(back["productId"], 1);
        assert_eq!(back["serviceAddress"], "host-a:7001");
    }

    #[test]
    fn service_address_is_optional_on_the_wire() {
        let json = r#"{"productId":2,"name":"Pen","weight":5}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.service_address, "");
    }

    #[test]
    fn recommendation_round_trips() {
        let json = r#"{"productId":1,"recommendationId":7,"author":"ann","rate":4,"content":"good","serviceAddress":"rec-1"}"#;
        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.recommendation_id, 7);
        assert_eq!(rec.rate, 4);
    }

    #[test]
    fn error_info_parses_backend_body() {
        let json = r#"{"timestamp":"2024-05-01T10:00:00Z","path":"/product/13","status":404,"message":"No product found for productId: 13"}"#;
        let info: ErrorInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.status, 404);
        assert_eq!(info.message, "No product found for productId: 13");
    }

    #[test]
    fn error_info_requires_a_message() {
        assert!(serde_json::from_str::<ErrorInfo>(r#"{"status":404}"#).is_err());
        assert!(serde_json::from_str::<ErrorInfo>("not json at all").is_err());
    }
}
