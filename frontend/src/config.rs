use log::Level;

/// WhatsApp number that receives booking requests, in international format without `+`.
pub const WHATSAPP_NUMBER: &str = "56952399709";
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Appended to every booking message so the practice knows where the patient expects to be seen.
pub const LOCATION: &str = "Consulta Matrona Ginecología, Providencia, Santiago";

pub const CONTACT_PHONE: &str = "+56 9 5239 9709";
pub const CONTACT_EMAIL: &str = "contacto@matronaginecologia.cl";
pub const CONTACT_ADDRESS: &str = "Av. Providencia 1234, oficina 56, Providencia, Santiago";
pub const OPENING_HOURS: &[(&str, &str)] = &[
    ("Lunes a viernes", "09:00 - 19:00"),
    ("Sábado", "09:00 - 13:00"),
];

/// How long success and error notices stay visible.
pub const NOTICE_DURATION_MS: u32 = 5_000;

pub const MIN_AGE: i64 = 18;
pub const MAX_AGE: i64 = 28;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn whatsapp_chat_url() -> String {
    format!("{}/{}", WHATSAPP_BASE_URL, WHATSAPP_NUMBER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_url_points_at_practice_number() {
        assert_eq!(whatsapp_chat_url(), "https://wa.me/56952399709");
    }

    #[test]
    fn age_range_is_not_empty() {
        assert!(MIN_AGE <= MAX_AGE);
    }
}
