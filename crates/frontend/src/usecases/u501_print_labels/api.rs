use contracts::domain::a004_product::aggregate::Product;
use contracts::usecases::u501_print_labels::{LabelPrintRequest, PRINT_PATH};

use crate::domain::a004_product;
use crate::shared::api_utils::{self, ApiError};

pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    a004_product::api::fetch_products().await
}

/// Render labels for the request; the response body is the PDF.
pub async fn print_labels(request: &LabelPrintRequest) -> Result<Vec<u8>, ApiError> {
    api_utils::post_for_bytes(PRINT_PATH, request).await
}
