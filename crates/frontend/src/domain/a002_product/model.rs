//! Запросы к справочнику товаров.

use contracts::api::{ApiError, Paginated};
use contracts::domain::product::{Product, ProductDraft};

use crate::shared::api_client::ApiClient;

pub async fn fetch_products(client: &ApiClient) -> Result<Vec<Product>, ApiError> {
    let page: Paginated<Product> = client.get("/product/").await?;
    Ok(page.results)
}

pub async fn create_product(client: &ApiClient, draft: &ProductDraft) -> Result<Product, ApiError> {
    client.post("/product/", draft).await
}

pub async fn update_product(
    client: &ApiClient,
    id: i64,
    draft: &ProductDraft,
) -> Result<Product, ApiError> {
    client.put(&format!("/product/{}/", id), draft).await
}

pub async fn delete_product(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/product/{}/", id)).await
}
