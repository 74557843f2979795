//! Запросы к справочнику категорий товаров.

use contracts::api::{ApiError, Paginated};
use contracts::domain::category::{Category, CategoryDraft};

use crate::shared::api_client::ApiClient;

pub async fn fetch_categories(client: &ApiClient) -> Result<Vec<Category>, ApiError> {
    let page: Paginated<Category> = client.get("/product_category/").await?;
    Ok(page.results)
}

pub async fn create_category(client: &ApiClient, draft: &CategoryDraft) -> Result<Category, ApiError> {
    client.post("/product_category/", draft).await
}

pub async fn update_category(
    client: &ApiClient,
    id: i64,
    draft: &CategoryDraft,
) -> Result<Category, ApiError> {
    client.put(&format!("/product_category/{}/", id), draft).await
}

pub async fn delete_category(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/product_category/{}/", id)).await
}
