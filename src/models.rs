use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// Тело запроса на создание курьера и на вход.
// Отсутствующее поле (None) не попадает в JSON, пустое (Some("")) уходит как "".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourierPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
}

impl CourierPayload {
    pub fn new(login: &str, password: &str, first_name: &str) -> Self {
        Self {
            login: Some(login.to_string()),
            password: Some(password.to_string()),
            first_name: Some(first_name.to_string()),
        }
    }

    pub fn credentials(login: &str, password: &str) -> Self {
        Self {
            login: Some(login.to_string()),
            password: Some(password.to_string()),
            first_name: None,
        }
    }

    /// Те же логин и пароль без имени, для ручки входа.
    pub fn login_payload(&self) -> Self {
        Self {
            login: self.login.clone(),
            password: self.password.clone(),
            first_name: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Color {
    Black,
    Grey,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub metro_station: u32,
    pub phone: String,
    pub rent_time: u32,
    pub delivery_date: String,
    pub comment: String,
    #[serde(default)]
    pub color: Vec<Color>,
}

/// Трек-номер заказа. Непрозрачен: сравнивается только целиком.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Track(String);

impl Track {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Живой сервис отдает track числом, поэтому принимаем и число, и строку
impl<'de> Deserialize<'de> for Track {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawTrack {
            Number(u64),
            Text(String),
        }

        Ok(match RawTrack::deserialize(deserializer)? {
            RawTrack::Number(number) => Track(number.to_string()),
            RawTrack::Text(text) => Track(text),
        })
    }
}

// Тела ответов
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedOrder {
    pub track: Track,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

/// Заказ в том виде, в каком его отдает сервис: с присвоенными id и track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: i64,
    pub track: Track,
    #[serde(flatten)]
    pub order: Order,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedOrder {
    pub order: OrderRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderList {
    pub orders: Vec<OrderRecord>,
}
