use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибки взаимодействия с REST API.
///
/// 403 переводится в отдельный вариант с собственным сообщением,
/// остальные не-2xx ответы остаются общим `Http`. Ошибка разбора
/// ответа — отдельный вид (`Decode`), а не "просто сеть".
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("Нет токена аутентификации")]
    MissingToken,

    #[error("Доступ запрещён: недостаточно прав для выполнения этого действия.")]
    PermissionDenied,

    #[error("HTTP {0}")]
    Http(u16),

    #[error("Сетевая ошибка: {0}")]
    Network(String),

    #[error("Некорректный ответ сервера: {0}")]
    Decode(String),
}

impl ApiError {
    /// Перевод HTTP-статуса в ошибку. Вызывается только для не-2xx ответов.
    pub fn from_status(status: u16) -> Self {
        if status == 403 {
            ApiError::PermissionDenied
        } else {
            ApiError::Http(status)
        }
    }
}

/// Постраничный конверт списочных ответов бэкенда (DRF).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_403_maps_to_permission_denied() {
        assert_eq!(ApiError::from_status(403), ApiError::PermissionDenied);
    }

    #[test]
    fn other_statuses_stay_generic() {
        assert_eq!(ApiError::from_status(500), ApiError::Http(500));
        assert_eq!(ApiError::from_status(404), ApiError::Http(404));
        assert_eq!(ApiError::from_status(400), ApiError::Http(400));
    }

    #[test]
    fn paginated_envelope_deserializes() {
        let json = r#"{"count":2,"next":null,"previous":null,"results":[1,2]}"#;
        let page: Paginated<i64> = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 2);
        assert_eq!(page.results, vec![1, 2]);
    }
}
