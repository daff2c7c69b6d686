//! Caller-facing composite service.
//!
//! Pure delegation over the three backend contracts plus the aggregate
//! fan-out. No retries, no caching, no state carried across calls.
//!
//! Delete semantics: the backends report 404 for an already-deleted
//! resource regardless of how often delete is called, so the caller-facing
//! contract treats `NotFound` on any delete as success. The absorption
//! happens here, not in the clients, which stay faithful pass-throughs.

use std::sync::Arc;

use tracing::debug;

use crate::integration::{
    IntegrationError, ProductService, RecommendationService, ReviewService,
};
use crate::models::{Product, Recommendation, Review};

use super::types::ProductAggregate;

pub struct CompositeService {
    product: Arc<dyn ProductService>,
    recommendation: Arc<dyn RecommendationService>,
    review: Arc<dyn ReviewService>,
    /// Advertised in aggregate responses. Informational only.
    service_address: String,
}

impl CompositeService {
    pub fn new(
        product: Arc<dyn ProductService>,
        recommendation: Arc<dyn RecommendationService>,
        review: Arc<dyn ReviewService>,
        service_address: String,
    ) -> Self {
        Self {
            product,
            recommendation,
            review,
            service_address,
        }
    }

    /// Fan out to the three backends and assemble the unified response.
    ///
    /// The three fetches are joined concurrently and have no ordering
    /// dependency. A product failure is fatal to the aggregate; the two
    /// list fetches were already degraded to empty by the integration
    /// layer, so they can never fail or cancel each other.
    pub async fn get_product_aggregate(
        &self,
        product_id: i32,
    ) -> Result<ProductAggregate, IntegrationError> {
        let (product, recommendations, reviews) = tokio::join!(
            self.product.get_product(product_id),
            self.recommendation.get_recommendations(product_id),
            self.review.get_reviews(product_id),
        );

        let product = product?;
        Ok(ProductAggregate::assemble(
            product,
            recommendations,
            reviews,
            &self.service_address,
        ))
    }

    pub async fn get_product(&self, product_id: i32) -> Result<Product, IntegrationError> {
        self.product.get_product(product_id).await
    }

    pub async fn create_product(&self, body: Product) -> Result<Product, IntegrationError> {
        self.product.create_product(body).await
    }

    pub async fn delete_product(&self, product_id: i32) -> Result<(), IntegrationError> {
        absorb_not_found("product", self.product.delete_product(product_id).await)
    }

    pub async fn get_recommendations(&self, product_id: i32) -> Vec<Recommendation> {
        self.recommendation.get_recommendations(product_id).await
    }

    pub async fn create_recommendation(
        &self,
        body: Recommendation,
    ) -> Result<Recommendation, IntegrationError> {
        self.recommendation.create_recommendation(body).await
    }

    pub async fn delete_recommendations(&self, product_id: i32) -> Result<(), IntegrationError> {
        absorb_not_found(
            "recommendations",
            self.recommendation.delete_recommendations(product_id).await,
        )
    }

    pub async fn get_reviews(&self, product_id: i32) -> Vec<Review> {
        self.review.get_reviews(product_id).await
    }

    pub async fn create_review(&self, body: Review) -> Result<Review, IntegrationError> {
        self.review.create_review(body).await
    }

    pub async fn delete_reviews(&self, product_id: i32) -> Result<(), IntegrationError> {
        absorb_not_found("reviews", self.review.delete_reviews(product_id).await)
    }
}

/// Idempotent delete: a resource that is already gone counts as deleted.
fn absorb_not_found(what: &str, result: Result<(), IntegrationError>) -> Result<(), IntegrationError> {
    match result {
        Err(err) if err.is_not_found() => {
            debug!("{} already gone, treating delete as success: {}", what, err);
            Ok(())
        }
        other => other,
    }
}
