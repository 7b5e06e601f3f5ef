use gloo_timers::callback::Timeout;
use yew::UseStateHandle;

use crate::booking::BookingError;
use crate::config::NOTICE_DURATION_MS;

#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Sent,
    Rejected(BookingError),
}

impl Notice {
    pub fn text(&self) -> String {
        match self {
            Notice::Sent => {
                "¡Gracias! Te redirigimos a WhatsApp para confirmar tu hora.".to_string()
            }
            Notice::Rejected(err) => err.to_string(),
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Notice::Sent => "notice success",
            Notice::Rejected(_) => "notice error",
        }
    }
}

/// Shows `notice` and clears it after `NOTICE_DURATION_MS`.
/// The clear is not cancelled if another notice replaces this one in the meantime.
pub fn show_notice(handle: &UseStateHandle<Option<Notice>>, notice: Notice) {
    handle.set(Some(notice));
    let setter = handle.setter();
    Timeout::new(NOTICE_DURATION_MS, move || setter.set(None)).forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_notice_shows_the_rule_message() {
        let notice = Notice::Rejected(BookingError::MissingConcern);
        assert_eq!(notice.text(), BookingError::MissingConcern.to_string());
        assert_eq!(notice.class(), "notice error");
    }

    #[test]
    fn sent_notice_is_a_success() {
        assert_eq!(Notice::Sent.class(), "notice success");
        assert!(Notice::Sent.text().contains("WhatsApp"));
    }
}
