// HTTP-клиент к сервису проката самокатов: один метод, один запрос.
// Повторов, кэша и ожиданий здесь нет, что ответил сервис, то и проверяет тест.

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Config;
use crate::constants::TRACK_QUERY_PARAM;
use crate::endpoints::Endpoints;
use crate::error::Result;
use crate::models::{CourierPayload, Order, Track};

#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value, // Value::Null, если сервис прислал не JSON
    pub raw: String,
}

impl ApiResponse {
    pub fn has_key(&self, key: &str) -> bool {
        self.body.get(key).is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }

    /// Разбирает тело в конкретный тип ответа.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.body.clone())?)
    }
}

#[derive(Debug, Clone)]
pub struct ScooterClient {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl ScooterClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoints: config.endpoints(),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub async fn create_courier(&self, payload: &CourierPayload) -> Result<ApiResponse> {
        let url = self.endpoints.courier();
        self.send(Method::POST, &url, self.http.post(&url).json(payload))
            .await
    }

    pub async fn login_courier(&self, payload: &CourierPayload) -> Result<ApiResponse> {
        let url = self.endpoints.courier_login();
        self.send(Method::POST, &url, self.http.post(&url).json(payload))
            .await
    }

    pub async fn delete_courier(&self, id: i64) -> Result<ApiResponse> {
        let url = self.endpoints.courier_by_id(id);
        self.send(Method::DELETE, &url, self.http.delete(&url)).await
    }

    // DELETE на коллекцию курьеров, без id в пути
    pub async fn delete_courier_without_id(&self) -> Result<ApiResponse> {
        let url = self.endpoints.courier();
        self.send(Method::DELETE, &url, self.http.delete(&url)).await
    }

    pub async fn create_order(&self, order: &Order) -> Result<ApiResponse> {
        let url = self.endpoints.orders();
        self.send(Method::POST, &url, self.http.post(&url).json(order))
            .await
    }

    pub async fn list_orders(&self) -> Result<ApiResponse> {
        let url = self.endpoints.orders();
        self.send(Method::GET, &url, self.http.get(&url)).await
    }

    pub async fn track_order(&self, track: &Track) -> Result<ApiResponse> {
        let url = self.endpoints.orders_track();
        let request = self
            .http
            .get(&url)
            .query(&[(TRACK_QUERY_PARAM, track.as_str())]);
        self.send(Method::GET, &url, request).await
    }

    pub async fn track_order_without_t(&self) -> Result<ApiResponse> {
        let url = self.endpoints.orders_track();
        self.send(Method::GET, &url, self.http.get(&url)).await
    }

    async fn send(&self, method: Method, url: &str, request: RequestBuilder) -> Result<ApiResponse> {
        log::info!("{} {}", method, url);
        let response = request.send().await?;
        let status = response.status();
        let raw = response.text().await?;
        let body = match serde_json::from_str(&raw) {
            Ok(body) => body,
            Err(e) => {
                log::warn!("{} {}: тело ответа не JSON ({})", method, url, e);
                Value::Null
            }
        };
        log::info!("{} {} -> {}", method, url, status);
        log::debug!("тело ответа: {}", raw);
        Ok(ApiResponse { status, body, raw })
    }
}
