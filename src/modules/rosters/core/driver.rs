use serde::{Deserialize, Serialize};

pub const DRIVER_ROLE: &str = "driver";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub role: String,
    pub color: Option<String>,
    pub vehicle_id: Option<String>,
}

impl Driver {
    /// The address schedule emails go to, if the driver has a usable one.
    pub fn notification_email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
    }
}
