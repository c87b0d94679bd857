use std::env;
use std::net::SocketAddr;

use crate::constants::BASE_URL;
use crate::endpoints::Endpoints;

/// Переменная окружения с базовым адресом тестируемого сервиса.
pub const BASE_URL_ENV: &str = "SCOOTER_BASE_URL";
/// Переменная окружения с адресом, на котором поднимается заглушка.
pub const STUB_ADDR_ENV: &str = "SCOOTER_STUB_ADDR";

/// Настройки прогона: куда отправлять запросы.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_url: String,
}

impl Config {
    /// Базовый адрес берется из `SCOOTER_BASE_URL`, иначе используется боевой сервис.
    pub fn from_env() -> Self {
        match env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::with_base_url(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.base_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_base_url(BASE_URL)
    }
}

/// Адрес заглушки из `SCOOTER_STUB_ADDR`, по умолчанию http://127.0.0.1:3000
pub fn stub_addr_from_env() -> SocketAddr {
    env::var(STUB_ADDR_ENV)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)))
}
