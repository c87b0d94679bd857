// Сквозные проверки REST API сервиса проката самокатов: курьеры и заказы

pub mod client;
pub mod config;
pub mod constants;
pub mod data;
pub mod endpoints;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod stub;

pub use client::{ApiResponse, ScooterClient};
pub use config::Config;
pub use error::{ApiError, Result};
