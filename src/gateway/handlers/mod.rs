//! HTTP handlers, one file per resource.

pub mod composite;
pub mod health;
pub mod product;
pub mod recommendation;
pub mod review;

pub use composite::*;
pub use health::*;
pub use product::*;
pub use recommendation::*;
pub use review::*;

use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameter shared by the list and bulk-delete endpoints.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ProductIdQuery {
    pub product_id: i32,
}
