// Базовый адрес сервиса вместе с версией API
macro_rules! base_url {
    () => {
        "http://qa-scooter.praktikum-services.ru/api/v1"
    };
}

// Константы адресов
pub const BASE_URL: &str = base_url!();
pub const COURIER_URL: &str = concat!(base_url!(), "/courier");
pub const COURIER_LOGIN_URL: &str = concat!(base_url!(), "/courier/login");
pub const ORDERS_URL: &str = concat!(base_url!(), "/orders");
pub const ORDERS_TRACK_URL: &str = concat!(base_url!(), "/orders/track");

// Относительные пути, из которых собираются адреса для произвольного хоста
pub const API_PREFIX: &str = "/api/v1";
pub const COURIER_PATH: &str = "/courier";
pub const COURIER_LOGIN_PATH: &str = "/courier/login";
pub const ORDERS_PATH: &str = "/orders";
pub const ORDERS_TRACK_PATH: &str = "/orders/track";
pub const TRACK_QUERY_PARAM: &str = "t";

// Константы для курьера
pub const ACTUAL_COURIER_LOGIN: &str = "heyitsme";
pub const ACTUAL_COURIER_PASSWORD: &str = "1234";
pub const ACTUAL_COURIER_FIRST_NAME: &str = "heyitsme";
pub const WRONG_PASSWORD: &str = "4321";
pub const NONEXISTENT_COURIER_LOGIN: &str = "nobodyherecourier270999";
pub const NONEXISTENT_COURIER_PASSWORD: &str = "nopassword270999";
pub const NONEXISTENT_COURIER_ID: i64 = 270999999;

// Константы для генерации данных
pub const COURIER_LOGIN_PREFIX: &str = "iamtestcourier";
pub const COURIER_PASSWORD_PREFIX: &str = "password";
pub const COURIER_FIRST_NAME_PREFIX: &str = "Courier";
pub const RANDOM_SUFFIX_MAX: u32 = 9999;
pub const UNIQUE_TOKEN_LEN: usize = 8;
pub const SAMPLE_LOGIN: &str = "ninjaty";
pub const SAMPLE_PASSWORD: &str = "4434343";
pub const SAMPLE_FIRST_NAME: &str = "Iamtestcourier";

// Константы для заказа
pub const NONEXISTENT_TRACK: &str = "255499999";

// Ожидаемые сообщения сервиса
pub const MSG_LOGIN_TAKEN: &str = "Этот логин уже используется. Попробуйте другой.";
pub const MSG_CREATE_NOT_ENOUGH_DATA: &str = "Недостаточно данных для создания учетной записи";
pub const MSG_ACCOUNT_NOT_FOUND: &str = "Учетная запись не найдена";
pub const MSG_LOGIN_NOT_ENOUGH_DATA: &str = "Недостаточно данных для входа";
pub const MSG_COURIER_ID_NOT_FOUND: &str = "Курьера с таким id нет.";
pub const MSG_DELETE_NOT_ENOUGH_DATA: &str = "Недостаточно данных для удаления курьера";
pub const MSG_ORDER_NOT_FOUND: &str = "Заказ не найден";
pub const MSG_TRACK_NOT_ENOUGH_DATA: &str = "Недостаточно данных для поиска";
pub const MSG_NOT_FOUND: &str = "Not Found.";
pub const MSG_SERVICE_UNAVAILABLE: &str = "Service unavailable";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_share_base() {
        assert_eq!(COURIER_URL, format!("{BASE_URL}{COURIER_PATH}"));
        assert_eq!(COURIER_LOGIN_URL, format!("{BASE_URL}{COURIER_LOGIN_PATH}"));
        assert_eq!(ORDERS_URL, format!("{BASE_URL}{ORDERS_PATH}"));
        assert_eq!(ORDERS_TRACK_URL, format!("{BASE_URL}{ORDERS_TRACK_PATH}"));
        assert!(BASE_URL.ends_with(API_PREFIX));
    }
}
