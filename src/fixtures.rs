// Фикстуры: создают сущность в сервисе и возвращают ее идентификатор.
// При любой ошибке фикстура возвращает Err, тест прерывается. Повторов и уборки
// за собой при сбое нет.

use crate::client::{ApiResponse, ScooterClient};
use crate::data;
use crate::error::{ApiError, Result};
use crate::models::{CreatedOrder, LoginResponse, Track};

/// Создает курьера со случайными данными, логинится им и возвращает его id.
pub async fn created_courier(client: &ScooterClient) -> Result<i64> {
    let payload = data::new_courier();
    let created = client.create_courier(&payload).await?;
    ensure_success(&created, client.endpoints().courier())?;

    let login = client.login_courier(&payload.login_payload()).await?;
    let endpoint = client.endpoints().courier_login();
    ensure_success(&login, endpoint.clone())?;
    let id = login
        .json::<LoginResponse>()
        .map_err(|_| missing(&login, endpoint, "id"))?
        .id;
    log::info!("создан курьер {:?} с id {}", payload.login, id);
    Ok(id)
}

/// Создает заказ по умолчанию и возвращает его трек-номер.
pub async fn created_order(client: &ScooterClient) -> Result<Track> {
    let response = client.create_order(&data::default_order()).await?;
    let endpoint = client.endpoints().orders();
    ensure_success(&response, endpoint.clone())?;
    let track = response
        .json::<CreatedOrder>()
        .map_err(|_| missing(&response, endpoint, "track"))?
        .track;
    log::info!("создан заказ с треком {}", track);
    Ok(track)
}

fn ensure_success(response: &ApiResponse, endpoint: String) -> Result<()> {
    if response.status.is_success() {
        Ok(())
    } else {
        Err(ApiError::UnexpectedStatus {
            endpoint,
            status: response.status.as_u16(),
        })
    }
}

fn missing(response: &ApiResponse, endpoint: String, field: &'static str) -> ApiError {
    ApiError::MissingField {
        endpoint,
        field,
        status: response.status.as_u16(),
    }
}
