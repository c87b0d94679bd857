// Тестовые данные: готовые наборы учетных данных и генераторы случайных тел запросов.

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::constants::*;
use crate::models::{Color, CourierPayload, Order};

/// Случайное число, которое дописывается к логину, паролю и имени.
pub fn random_suffix() -> u32 {
    rand::thread_rng().gen_range(0..=RANDOM_SUFFIX_MAX)
}

/// Случайный токен из латиницы и цифр в нижнем регистре.
pub fn random_token(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(|byte| char::from(byte).to_ascii_lowercase())
        .collect()
}

pub fn random_login() -> String {
    format!("{}{}", COURIER_LOGIN_PREFIX, random_suffix())
}

/// Логин с токеном: повторные прогоны не упираются в уже занятые логины.
pub fn unique_login() -> String {
    format!(
        "{}{}{}",
        COURIER_LOGIN_PREFIX,
        random_suffix(),
        random_token(UNIQUE_TOKEN_LEN)
    )
}

pub fn random_password() -> String {
    format!("{}{}", COURIER_PASSWORD_PREFIX, random_suffix())
}

pub fn random_first_name() -> String {
    format!("{}{}", COURIER_FIRST_NAME_PREFIX, random_suffix())
}

/// Полный набор полей для создания нового курьера.
pub fn new_courier() -> CourierPayload {
    CourierPayload::new(&unique_login(), &random_password(), &random_first_name())
}

// Наборы учетных данных, которые уже есть в сервисе

pub fn actual_courier_credentials() -> CourierPayload {
    CourierPayload::credentials(ACTUAL_COURIER_LOGIN, ACTUAL_COURIER_PASSWORD)
}

pub fn actual_courier_wrong_password() -> CourierPayload {
    CourierPayload::credentials(ACTUAL_COURIER_LOGIN, WRONG_PASSWORD)
}

pub fn nonexistent_courier_credentials() -> CourierPayload {
    CourierPayload::credentials(NONEXISTENT_COURIER_LOGIN, NONEXISTENT_COURIER_PASSWORD)
}

/// Все три поля уже созданного курьера, для проверки повторного создания.
pub fn created_courier_credentials() -> CourierPayload {
    CourierPayload::new(
        ACTUAL_COURIER_LOGIN,
        ACTUAL_COURIER_PASSWORD,
        ACTUAL_COURIER_FIRST_NAME,
    )
}

/// Занятый логин со свежесгенерированными паролем и именем.
pub fn taken_login_courier() -> CourierPayload {
    CourierPayload::new(
        ACTUAL_COURIER_LOGIN,
        &random_password(),
        &random_first_name(),
    )
}

// Заказы

fn order(
    first_name: &str,
    last_name: &str,
    address: &str,
    metro_station: u32,
    phone: &str,
    rent_time: u32,
    delivery_date: &str,
    comment: &str,
    color: &[Color],
) -> Order {
    Order {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        address: address.to_string(),
        metro_station,
        phone: phone.to_string(),
        rent_time,
        delivery_date: delivery_date.to_string(),
        comment: comment.to_string(),
        color: color.to_vec(),
    }
}

/// Заказ, который создает фикстура: оба цвета.
pub fn default_order() -> Order {
    order(
        "Mister",
        "Blackgrey",
        "Tolstoeva 12",
        10,
        "89999999999",
        3,
        "2024-08-08",
        "just test comment 2",
        &[Color::Black, Color::Grey],
    )
}

/// Заказы без цвета, с обоими цветами, только с черным и только с серым.
pub fn order_variants() -> Vec<Order> {
    vec![
        order(
            "Guido",
            "van Rossum",
            "Pushkinova, 34",
            9,
            "+79999999999",
            2,
            "2024-07-07",
            "just test comment 1",
            &[],
        ),
        default_order(),
        order(
            "Mister",
            "Black",
            "ул. Главная 13-13",
            11,
            "+7 999 999 99 99",
            4,
            "2024-09-09",
            "just test comment 3",
            &[Color::Black],
        ),
        order(
            "Mister",
            "Grey",
            "улица Комсомольскнаамурова д.5 кв. 55",
            12,
            "8-999-999-99-99",
            5,
            "2024-10-10",
            "just test comment 4",
            &[Color::Grey],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_values_keep_prefixes() {
        assert!(random_login().starts_with(COURIER_LOGIN_PREFIX));
        assert!(random_password().starts_with(COURIER_PASSWORD_PREFIX));
        assert!(random_first_name().starts_with(COURIER_FIRST_NAME_PREFIX));
    }

    #[test]
    fn suffix_stays_in_range() {
        for _ in 0..1000 {
            assert!(random_suffix() <= RANDOM_SUFFIX_MAX);
        }
    }

    #[test]
    fn unique_logins_do_not_repeat() {
        let logins: HashSet<String> = (0..200).map(|_| unique_login()).collect();
        assert_eq!(logins.len(), 200);
        assert!(logins
            .iter()
            .all(|login| login.chars().all(|c| c.is_ascii_alphanumeric())));
    }

    #[test]
    fn new_courier_has_all_fields_filled() {
        let courier = new_courier();
        assert!(courier.login.is_some_and(|value| !value.is_empty()));
        assert!(courier.password.is_some_and(|value| !value.is_empty()));
        assert!(courier.first_name.is_some_and(|value| !value.is_empty()));
    }

    #[test]
    fn order_variants_cover_every_color_set() {
        let colors: Vec<Vec<Color>> = order_variants().into_iter().map(|o| o.color).collect();
        assert!(colors.contains(&vec![]));
        assert!(colors.contains(&vec![Color::Black, Color::Grey]));
        assert!(colors.contains(&vec![Color::Black]));
        assert!(colors.contains(&vec![Color::Grey]));
    }
}
