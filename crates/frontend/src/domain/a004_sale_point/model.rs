//! Справочник торговых точек; используется как справочные данные
//! в таблице заказов.

use contracts::api::{ApiError, Paginated};
use contracts::domain::sale_point::SalePoint;

use crate::shared::api_client::ApiClient;

pub async fn fetch_sale_points(client: &ApiClient) -> Result<Vec<SalePoint>, ApiError> {
    let page: Paginated<SalePoint> = client.get("/sale_point/").await?;
    Ok(page.results)
}
