//! Единая точка доступа к REST API.
//!
//! Клиент создаётся из токена текущей сессии и передаётся в функции
//! модулей домена явно. Отсутствие токена — ошибка до любого сетевого
//! вызова; 403 переводится в `PermissionDenied`, остальные статусы и
//! ошибки разбора — в соответствующие виды `ApiError`.

use contracts::api::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::api_url;

#[derive(Clone, Debug)]
pub struct ApiClient {
    token: String,
}

impl ApiClient {
    /// Создаёт клиент из токена сессии; без токена запросы невозможны.
    pub fn new(token: Option<String>) -> Result<Self, ApiError> {
        token
            .map(|token| Self { token })
            .ok_or(ApiError::MissingToken)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header("Authorization", &format!("Token {}", self.token))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            return Err(ApiError::from_status(response.status()));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .authorized(Request::get(&api_url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .authorized(Request::post(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .authorized(Request::put(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .authorized(Request::patch(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    /// DELETE без тела ответа.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .authorized(Request::delete(&api_url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::from_status(response.status()));
        }
        Ok(())
    }

    /// DELETE с JSON-телом (эндпоинт складских остатков принимает
    /// идентификатор товара в теле запроса).
    pub async fn delete_with_body<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let response = self
            .authorized(Request::delete(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::from_status(response.status()));
        }
        Ok(())
    }
}
