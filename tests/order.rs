mod common;

use reqwest::StatusCode;

use common::{assert_error, assert_status, target};
use scooter_api_tests::constants::*;
use scooter_api_tests::data;
use scooter_api_tests::fixtures::created_order;
use scooter_api_tests::models::Track;

#[tokio::test]
async fn create_order_with_any_color_set_returns_track() {
    let target = target().await;

    for order in data::order_variants() {
        let case = format!("{} {} {:?}", order.first_name, order.last_name, order.color);
        let response = target.client.create_order(&order).await.expect("create request");
        assert_status(&response, StatusCode::CREATED, &case);
        assert!(response.has_key("track"), "case `{}`: body {}", case, response.raw);
    }
}

#[tokio::test]
async fn list_orders_without_params_returns_orders() {
    let target = target().await;
    // хотя бы один заказ в списке точно будет
    created_order(&target.client).await.expect("order fixture");

    let response = target.client.list_orders().await.expect("list request");
    assert_status(&response, StatusCode::OK, "order list");
    let orders = response.body["orders"]
        .as_array()
        .unwrap_or_else(|| panic!("`orders` is not a list: {}", response.raw));
    assert!(orders.first().is_some_and(|order| order.get("id").is_some()));
}

#[tokio::test]
async fn track_nonexistent_order_is_not_found() {
    let target = target().await;
    let response = target
        .client
        .track_order(&Track::new(NONEXISTENT_TRACK))
        .await
        .expect("track request");

    assert_error(&response, StatusCode::NOT_FOUND, MSG_ORDER_NOT_FOUND, "nonexistent track");
}

#[tokio::test]
async fn track_without_number_is_rejected() {
    let target = target().await;
    let response = target
        .client
        .track_order_without_t()
        .await
        .expect("track request");

    assert_error(&response, StatusCode::BAD_REQUEST, MSG_TRACK_NOT_ENOUGH_DATA, "no track");
}

#[tokio::test]
async fn track_created_order_returns_order() {
    let target = target().await;
    let track = created_order(&target.client).await.expect("order fixture");

    let response = target.client.track_order(&track).await.expect("track request");
    assert_status(&response, StatusCode::OK, "created order");
    let order = &response.body["order"];
    assert!(order.get("id").is_some(), "body: {}", response.raw);

    let echoed: Track = serde_json::from_value(order["track"].clone()).expect("order has track");
    assert_eq!(echoed, track);
}
