// Локальная заглушка сервиса проката на axum.
// Повторяет задокументированные ответы ручек курьеров и заказов, включая замеченные
// расхождения живого сервиса: имя курьера не обязательно, DELETE без id отдает 404,
// вход без пароля отдает 504.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Router,
};
use serde::Deserialize;
use tokio::sync::oneshot;

use crate::constants::*;
use crate::error::{ApiError, Result};
use crate::models::{
    CourierPayload, CreatedOrder, ErrorResponse, LoginResponse, OkResponse, Order, OrderList,
    OrderRecord, Track, TrackedOrder,
};

const FIRST_COURIER_ID: i64 = 100_000;
const FIRST_ORDER_ID: i64 = 1;
const FIRST_TRACK: u64 = 500_000;

struct StoredCourier {
    id: i64,
    password: String,
}

#[derive(Default)]
struct StubData {
    couriers: HashMap<String, StoredCourier>,
    orders: Vec<OrderRecord>,
    next_courier_id: i64,
    next_order_id: i64,
    next_track: u64,
}

// Состояние заглушки, разделяемое между обработчиками
#[derive(Clone)]
pub struct StubState {
    data: Arc<Mutex<StubData>>,
}

impl StubState {
    pub fn new() -> Self {
        Self {
            data: Arc::new(Mutex::new(StubData {
                next_courier_id: FIRST_COURIER_ID,
                next_order_id: FIRST_ORDER_ID,
                next_track: FIRST_TRACK,
                ..StubData::default()
            })),
        }
    }

    /// Состояние с курьером, которого тесты считают уже существующим.
    pub fn seeded() -> Self {
        let state = Self::new();
        {
            let mut data = state.lock();
            let id = data.next_courier_id;
            data.next_courier_id += 1;
            data.couriers.insert(
                ACTUAL_COURIER_LOGIN.to_string(),
                StoredCourier {
                    id,
                    password: ACTUAL_COURIER_PASSWORD.to_string(),
                },
            );
        }
        state
    }

    fn lock(&self) -> MutexGuard<'_, StubData> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for StubState {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Маршруты заглушки под префиксом `/api/v1`.
pub fn router(state: StubState) -> Router {
    let api = Router::new()
        .route(COURIER_PATH, post(create_courier).delete(delete_courier_without_id))
        .route(COURIER_LOGIN_PATH, post(login_courier))
        .route("/courier/:id", delete(delete_courier))
        .route(ORDERS_PATH, post(create_order).get(list_orders))
        .route(ORDERS_TRACK_PATH, get(track_order));

    Router::new().nest(API_PREFIX, api).with_state(state)
}

// При drop сервер останавливается
pub struct StubHandle {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl StubHandle {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    // Базовый адрес вместе с /api/v1
    pub fn base_url(&self) -> String {
        format!("http://{}{}", self.addr, API_PREFIX)
    }
}

impl Drop for StubHandle {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

// Заглушка на свободном порту 127.0.0.1 в фоновой задаче
pub async fn spawn() -> Result<StubHandle> {
    spawn_on(SocketAddr::from(([127, 0, 0, 1], 0)), StubState::seeded()).await
}

pub async fn spawn_on(addr: SocketAddr, state: StubState) -> Result<StubHandle> {
    let server = axum::Server::try_bind(&addr)
        .map_err(|e| ApiError::Server(Box::new(e)))?
        .serve(router(state).into_make_service());
    let addr = server.local_addr();
    let (shutdown, stopped) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let graceful = server.with_graceful_shutdown(async {
            let _ = stopped.await;
        });
        if let Err(e) = graceful.await {
            log::error!("Ошибка в работе заглушки: {}", e);
        }
    });

    log::info!("Заглушка доступна по ссылке: http://{}{}", addr, API_PREFIX);
    Ok(StubHandle {
        addr,
        shutdown: Some(shutdown),
    })
}

pub async fn run(addr: SocketAddr) -> Result<()> {
    let server = axum::Server::try_bind(&addr)
        .map_err(|e| ApiError::Server(Box::new(e)))?
        .serve(router(StubState::seeded()).into_make_service());
    log::info!("Заглушка доступна по ссылке: http://{}{}", server.local_addr(), API_PREFIX);
    server.await.map_err(|e| ApiError::Server(Box::new(e)))
}

fn error(status: StatusCode, message: &str) -> Response {
    let body = ErrorResponse {
        code: status.as_u16(),
        message: message.to_string(),
    };
    (status, Json(body)).into_response()
}

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, str::is_empty)
}

// Создание курьера: логин и пароль обязательны, имя нет
async fn create_courier(
    State(state): State<StubState>,
    Json(payload): Json<CourierPayload>,
) -> Response {
    let (login, password) = match (payload.login, payload.password) {
        (Some(login), Some(password)) if !login.is_empty() && !password.is_empty() => {
            (login, password)
        }
        _ => {
            log::info!("Создание курьера: не хватает данных.");
            return error(StatusCode::BAD_REQUEST, MSG_CREATE_NOT_ENOUGH_DATA);
        }
    };

    let mut data = state.lock();
    if data.couriers.contains_key(&login) {
        log::info!("Создание курьера: логин {} занят.", login);
        return error(StatusCode::CONFLICT, MSG_LOGIN_TAKEN);
    }

    let id = data.next_courier_id;
    data.next_courier_id += 1;
    data.couriers.insert(login.clone(), StoredCourier { id, password });
    log::info!("Создан курьер {} с id {}.", login, id);

    (StatusCode::CREATED, Json(OkResponse { ok: true })).into_response()
}

async fn login_courier(
    State(state): State<StubState>,
    Json(payload): Json<CourierPayload>,
) -> Response {
    // Живой сервис без поля password не отвечает вовремя
    if payload.password.is_none() {
        return error(StatusCode::GATEWAY_TIMEOUT, MSG_SERVICE_UNAVAILABLE);
    }
    if is_blank(&payload.login) || is_blank(&payload.password) {
        return error(StatusCode::BAD_REQUEST, MSG_LOGIN_NOT_ENOUGH_DATA);
    }

    let login = payload.login.unwrap_or_default();
    let password = payload.password.unwrap_or_default();
    let data = state.lock();
    match data.couriers.get(&login) {
        Some(courier) if courier.password == password => {
            (StatusCode::OK, Json(LoginResponse { id: courier.id })).into_response()
        }
        _ => error(StatusCode::NOT_FOUND, MSG_ACCOUNT_NOT_FOUND),
    }
}

async fn delete_courier(State(state): State<StubState>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<i64>() else {
        return error(StatusCode::NOT_FOUND, MSG_COURIER_ID_NOT_FOUND);
    };

    let mut data = state.lock();
    let login = data
        .couriers
        .iter()
        .find(|(_, courier)| courier.id == id)
        .map(|(login, _)| login.clone());

    match login {
        Some(login) => {
            data.couriers.remove(&login);
            log::info!("Удален курьер {} с id {}.", login, id);
            (StatusCode::OK, Json(OkResponse { ok: true })).into_response()
        }
        None => error(StatusCode::NOT_FOUND, MSG_COURIER_ID_NOT_FOUND),
    }
}

// Так отвечает живой сервис, хотя по документации ждем 400
async fn delete_courier_without_id() -> Response {
    error(StatusCode::NOT_FOUND, MSG_NOT_FOUND)
}

async fn create_order(State(state): State<StubState>, Json(order): Json<Order>) -> Response {
    let mut data = state.lock();
    let id = data.next_order_id;
    let track = Track::new(data.next_track.to_string());
    data.next_order_id += 1;
    data.next_track += 1;
    data.orders.push(OrderRecord {
        id,
        track: track.clone(),
        order,
    });
    log::info!("Создан заказ {} с треком {}.", id, track);

    (StatusCode::CREATED, Json(CreatedOrder { track })).into_response()
}

async fn list_orders(State(state): State<StubState>) -> Response {
    let data = state.lock();
    let orders = data.orders.iter().rev().cloned().collect();
    (StatusCode::OK, Json(OrderList { orders })).into_response()
}

#[derive(Deserialize)]
struct TrackQuery {
    t: Option<String>,
}

async fn track_order(State(state): State<StubState>, Query(query): Query<TrackQuery>) -> Response {
    let Some(t) = query.t.filter(|t| !t.is_empty()) else {
        return error(StatusCode::BAD_REQUEST, MSG_TRACK_NOT_ENOUGH_DATA);
    };

    let data = state.lock();
    match data.orders.iter().find(|record| record.track.as_str() == t) {
        Some(record) => (
            StatusCode::OK,
            Json(TrackedOrder {
                order: record.clone(),
            }),
        )
            .into_response(),
        None => error(StatusCode::NOT_FOUND, MSG_ORDER_NOT_FOUND),
    }
}
