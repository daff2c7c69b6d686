//! Downstream integration layer.
//!
//! Three independent backend contracts ([`ProductService`],
//! [`RecommendationService`], [`ReviewService`]) fulfilled by one
//! [`CompositeIntegration`] that composes a [`RestClient`] per backend.
//! Each contract is a separate trait so callers (and tests) can swap any
//! one of them independently.
//!
//! Failure policy lives here and in [`error`]:
//! - single-item operations translate 404/422 into domain errors and pass
//!   every other status through with its original code;
//! - list retrieval never fails, it degrades to an empty list.

pub mod client;
pub mod error;

use std::time::Duration;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::models::{Product, Recommendation, Review};

pub use client::RestClient;
pub use error::IntegrationError;

/// Contract of the product backend.
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn get_product(&self, product_id: i32) -> Result<Product, IntegrationError>;
    async fn create_product(&self, body: Product) -> Result<Product, IntegrationError>;
    async fn delete_product(&self, product_id: i32) -> Result<(), IntegrationError>;
}

/// Contract of the recommendation backend.
#[async_trait]
pub trait RecommendationService: Send + Sync {
    /// Best-effort: failures degrade to an empty list, never an error.
    async fn get_recommendations(&self, product_id: i32) -> Vec<Recommendation>;
    async fn create_recommendation(
        &self,
        body: Recommendation,
    ) -> Result<Recommendation, IntegrationError>;
    async fn delete_recommendations(&self, product_id: i32) -> Result<(), IntegrationError>;
}

/// Contract of the review backend.
#[async_trait]
pub trait ReviewService: Send + Sync {
    /// Best-effort: failures degrade to an empty list, never an error.
    async fn get_reviews(&self, product_id: i32) -> Vec<Review>;
    async fn create_review(&self, body: Review) -> Result<Review, IntegrationError>;
    async fn delete_reviews(&self, product_id: i32) -> Result<(), IntegrationError>;
}

/// Fulfils the three backend contracts over HTTP.
pub struct CompositeIntegration {
    product: RestClient,
    recommendation: RestClient,
    review: RestClient,
}

impl CompositeIntegration {
    /// Build the three clients from the configured endpoints, sharing one
    /// HTTP client with the uniform request timeout.
    pub fn from_config(config: &AppConfig) -> Result<Self, IntegrationError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                IntegrationError::Transport(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self::new(
            RestClient::new(
                http.clone(),
                &config.product_service.host,
                config.product_service.port,
                "product",
            ),
            RestClient::new(
                http.clone(),
                &config.recommendation_service.host,
                config.recommendation_service.port,
                "recommendation",
            ),
            RestClient::new(
                http,
                &config.review_service.host,
                config.review_service.port,
                "review",
            ),
        ))
    }

    pub fn new(product: RestClient, recommendation: RestClient, review: RestClient) -> Self {
        Self {
            product,
            recommendation,
            review,
        }
    }
}

#[async_trait]
impl ProductService for CompositeIntegration {
    async fn get_product(&self, product_id: i32) -> Result<Product, IntegrationError> {
        let product: Product = self.product.get_one(product_id).await?;
        tracing::debug!("found a product with id: {}", product.product_id);
        Ok(product)
    }

    async fn create_product(&self, body: Product) -> Result<Product, IntegrationError> {
        let product: Product = self.product.create(&body).await?;
        tracing::debug!("created a product with id: {}", product.product_id);
        Ok(product)
    }

    async fn delete_product(&self, product_id: i32) -> Result<(), IntegrationError> {
        self.product.delete_by_id(product_id).await
    }
}

#[async_trait]
impl RecommendationService for CompositeIntegration {
    async fn get_recommendations(&self, product_id: i32) -> Vec<Recommendation> {
        let recommendations: Vec<Recommendation> = self.recommendation.get_many(product_id).await;
        tracing::debug!(
            "found {} recommendations for product id: {}",
            recommendations.len(),
            product_id
        );
        recommendations
    }

    async fn create_recommendation(
        &self,
        body: Recommendation,
    ) -> Result<Recommendation, IntegrationError> {
        let recommendation: Recommendation = self.recommendation.create(&body).await?;
        tracing::debug!(
            "created a recommendation for product id: {}",
            recommendation.product_id
        );
        Ok(recommendation)
    }

    async fn delete_recommendations(&self, product_id: i32) -> Result<(), IntegrationError> {
        self.recommendation.delete_by_product_id(product_id).await
    }
}

#[async_trait]
impl ReviewService for CompositeIntegration {
    async fn get_reviews(&self, product_id: i32) -> Vec<Review> {
        let reviews: Vec<Review> = self.review.get_many(product_id).await;
        tracing::debug!(
            "found {} reviews for product id: {}",
            reviews.len(),
            product_id
        );
        reviews
    }

    async fn create_review(&self, body: Review) -> Result<Review, IntegrationError> {
        let review: Review = self.review.create(&body).await?;
        tracing::debug!("created a review for product id: {}", review.product_id);
        Ok(review)
    }

    async fn delete_reviews(&self, product_id: i32) -> Result<(), IntegrationError> {
        self.review.delete_by_product_id(product_id).await
    }
}
