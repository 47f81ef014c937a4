use serde::{Deserialize, Serialize};

/// A single catalog entry as served by the endpoint. Identity is `id`;
/// instances are only ever produced by deserializing a response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub description: String,
}

/// Response envelope for the item listing. The repository unwraps it before
/// anything downstream sees it.
#[derive(Debug, Clone, Deserialize)]
pub struct Items {
    pub items: Vec<Item>,
}

/// Login request body. Built at call time and dropped once the request
/// completes, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    action: String,
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            action: "login".to_string(),
            username: username.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub message: String,
}
