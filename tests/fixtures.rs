use std::net::TcpListener;

use scooter_api_tests::fixtures::{created_courier, created_order};
use scooter_api_tests::{stub, ApiError, Config, ScooterClient};

// Адрес, на котором гарантированно никто не слушает
fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}/api/v1", addr)
}

#[tokio::test]
async fn courier_fixture_fails_when_service_is_unreachable() {
    let client = ScooterClient::new(&Config::with_base_url(closed_base_url()));

    let err = created_courier(&client).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "got {:?}", err);
}

#[tokio::test]
async fn order_fixture_fails_when_service_is_unreachable() {
    let client = ScooterClient::new(&Config::with_base_url(closed_base_url()));

    let err = created_order(&client).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "got {:?}", err);
}

#[tokio::test]
async fn fixtures_fail_on_unsuccessful_status() {
    let stub = stub::spawn().await.expect("stub server should start");
    // неверный префикс: заглушка отвечает 404 на любую ручку
    let client = ScooterClient::new(&Config::with_base_url(format!(
        "http://{}/api/v0",
        stub.addr()
    )));

    match created_courier(&client).await {
        Err(ApiError::UnexpectedStatus { endpoint, status }) => {
            assert_eq!(status, 404);
            assert!(endpoint.ends_with("/api/v0/courier"), "endpoint {}", endpoint);
        }
        other => panic!("expected UnexpectedStatus, got {:?}", other),
    }

    match created_order(&client).await {
        Err(ApiError::UnexpectedStatus { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected UnexpectedStatus, got {:?}", other),
    }
}
