#![allow(dead_code)]

use reqwest::StatusCode;
use scooter_api_tests::{stub::StubHandle, ApiResponse, Config, ScooterClient};

/// Сервис, против которого идет прогон. Заглушка живет, пока жив `Target`.
pub struct Target {
    pub client: ScooterClient,
    _stub: Option<StubHandle>,
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[cfg(not(feature = "remote-tests"))]
pub async fn target() -> Target {
    init_logging();
    let stub = scooter_api_tests::stub::spawn()
        .await
        .expect("stub server should start");
    let client = ScooterClient::new(&Config::with_base_url(stub.base_url()));
    Target {
        client,
        _stub: Some(stub),
    }
}

#[cfg(feature = "remote-tests")]
pub async fn target() -> Target {
    init_logging();
    Target {
        client: ScooterClient::new(&Config::from_env()),
        _stub: None,
    }
}

/// Проверяет код ответа и текст сообщения об ошибке.
pub fn assert_error(response: &ApiResponse, status: StatusCode, message: &str, case: &str) {
    assert_eq!(
        response.status, status,
        "case `{}`: unexpected status, body: {}",
        case, response.raw
    );
    assert_eq!(
        response.message(),
        Some(message),
        "case `{}`: unexpected message, body: {}",
        case,
        response.raw
    );
}

pub fn assert_status(response: &ApiResponse, status: StatusCode, case: &str) {
    assert_eq!(
        response.status, status,
        "case `{}`: unexpected status, body: {}",
        case, response.raw
    );
}
