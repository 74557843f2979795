use serde::{Deserialize, Serialize};

/// Роль пользователя, определяет доступный раздел приложения.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Factory,
    Carrier,
    SalePoint,
}

impl Role {
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Factory => "Производство",
            Role::Carrier => "Перевозчик",
            Role::SalePoint => "Торговая точка",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_wire_names_are_snake_case() {
        let json = r#"{"token":"abc","role":"sale_point"}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.role, Role::SalePoint);
        assert_eq!(serde_json::to_string(&Role::Factory).unwrap(), r#""factory""#);
    }
}
