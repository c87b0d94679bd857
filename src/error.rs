// Локальные ошибки прогона. Коды ответа сервиса (400, 404, 409) сюда не попадают:
// их проверяют сами тесты.

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    // Сетевая ошибка: хост недоступен, соединение оборвано и т.п.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    // Фикстура получила неуспешный код ответа
    #[error("{endpoint} answered with unexpected status {status}")]
    UnexpectedStatus { endpoint: String, status: u16 },

    // Ответ успешный, но нужного поля в нем нет
    #[error("response from {endpoint} has no `{field}` (status {status})")]
    MissingField {
        endpoint: String,
        field: &'static str,
        status: u16,
    },

    #[error("stub server failed to start: {0}")]
    Server(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, ApiError>;
