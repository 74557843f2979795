//! Справочник заводов; используется как справочные данные в таблице заказов.

use contracts::api::{ApiError, Paginated};
use contracts::domain::factory::Factory;

use crate::shared::api_client::ApiClient;

pub async fn fetch_factories(client: &ApiClient) -> Result<Vec<Factory>, ApiError> {
    let page: Paginated<Factory> = client.get("/factory/").await?;
    Ok(page.results)
}
