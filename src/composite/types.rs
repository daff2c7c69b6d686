//! Aggregate response DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Product, Recommendation, Review};

/// Unified view of one product across the three backends.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductAggregate {
    pub product_id: i32,
    pub name: String,
    pub weight: i32,
    /// Empty when the recommendation backend failed or returned nothing.
    pub recommendations: Vec<Recommendation>,
    /// Empty when the review backend failed or returned nothing.
    pub reviews: Vec<Review>,
    pub service_addresses: ServiceAddresses,
}

/// Which service instances participated in assembling the aggregate.
/// Informational only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAddresses {
    pub composite: String,
    pub product: String,
    pub recommendation: String,
    pub review: String,
}

impl ProductAggregate {
    /// Assemble the aggregate from the three facet results.
    pub fn assemble(
        product: Product,
        recommendations: Vec<Recommendation>,
        reviews: Vec<Review>,
        composite_address: &str,
    ) -> Self {
        let service_addresses = ServiceAddresses {
            composite: composite_address.to_string(),
            product: product.service_address.clone(),
            recommendation: recommendations
                .first()
                .map(|r| r.service_address.clone())
                .unwrap_or_default(),
            review: reviews
                .first()
                .map(|r| r.service_address.clone())
                .unwrap_or_default(),
        };

        Self {
            product_id: product.product_id,
            name: product.name,
            weight: product.weight,
            recommendations,
            reviews,
            service_addresses,
        }
    }
}
