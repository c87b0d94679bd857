use crate::constants::{COURIER_LOGIN_PATH, COURIER_PATH, ORDERS_PATH, ORDERS_TRACK_PATH};

/// Адреса ручек сервиса относительно одного базового адреса.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn courier(&self) -> String {
        format!("{}{}", self.base, COURIER_PATH)
    }

    pub fn courier_login(&self) -> String {
        format!("{}{}", self.base, COURIER_LOGIN_PATH)
    }

    pub fn courier_by_id(&self, id: impl std::fmt::Display) -> String {
        format!("{}{}/{}", self.base, COURIER_PATH, id)
    }

    pub fn orders(&self) -> String {
        format!("{}{}", self.base, ORDERS_PATH)
    }

    pub fn orders_track(&self) -> String {
        format!("{}{}", self.base, ORDERS_TRACK_PATH)
    }
}
