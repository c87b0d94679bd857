use std::env;

use scooter_api_tests::{config, stub};

#[tokio::main]
async fn main() {
    // Включаем отображение сообщений лога, если уровень не задан снаружи
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init(); // Инициализируем систему логирования env_logger
    log::info!("Запуск заглушки сервиса проката...");

    // Адрес берется из SCOOTER_STUB_ADDR, по умолчанию http://127.0.0.1:3000
    let addr = config::stub_addr_from_env();

    // Запускаем сервер, контролируя Ok и Err
    match stub::run(addr).await {
        Ok(()) => (),
        Err(e) => log::error!("Ошибка при инициализации сервера: {}", e),
    }
}
