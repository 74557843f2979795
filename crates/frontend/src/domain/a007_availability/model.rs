//! Фид доступности товаров и отправка заказа торговой точки.

use contracts::api::ApiError;
use contracts::domain::availability::AvailabilityEntry;
use contracts::domain::order::OrderLine;

use crate::shared::api_client::ApiClient;

pub async fn fetch_availability(client: &ApiClient) -> Result<Vec<AvailabilityEntry>, ApiError> {
    client.get("/products-with-quantity/").await
}

/// Создаёт заказ из непустого набора строк. Тело ответа не используется,
/// важен только статус.
pub async fn submit_order(client: &ApiClient, lines: &[OrderLine]) -> Result<(), ApiError> {
    let _: serde_json::Value = client.post("/product_order/", &lines).await?;
    Ok(())
}
