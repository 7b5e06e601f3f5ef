use thiserror::Error;

use crate::config::{LOCATION, MAX_AGE, MIN_AGE, WHATSAPP_BASE_URL, WHATSAPP_NUMBER};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceType {
    GynecologicalCheckup,
    Contraception,
    PapSmear,
    SexualHealthCounseling,
    StiScreening,
    Preconception,
}

impl ServiceType {
    pub const ALL: [ServiceType; 6] = [
        ServiceType::GynecologicalCheckup,
        ServiceType::Contraception,
        ServiceType::PapSmear,
        ServiceType::SexualHealthCounseling,
        ServiceType::StiScreening,
        ServiceType::Preconception,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::GynecologicalCheckup => "Control Ginecológico",
            ServiceType::Contraception => "Anticoncepción",
            ServiceType::PapSmear => "Toma de PAP",
            ServiceType::SexualHealthCounseling => "Consejería en Salud Sexual",
            ServiceType::StiScreening => "Pesquisa de ITS",
            ServiceType::Preconception => "Control Preconcepcional",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ServiceType::GynecologicalCheckup => {
                "Evaluación ginecológica anual, examen de mamas y resolución de dudas sobre tu ciclo."
            }
            ServiceType::Contraception => {
                "Orientación para elegir el método anticonceptivo que mejor se adapta a ti, inicio y seguimiento."
            }
            ServiceType::PapSmear => {
                "Toma de Papanicolaou para la detección precoz del cáncer cervicouterino."
            }
            ServiceType::SexualHealthCounseling => {
                "Un espacio confidencial para conversar sobre sexualidad, relaciones y bienestar."
            }
            ServiceType::StiScreening => {
                "Detección, orientación y derivación oportuna de infecciones de transmisión sexual."
            }
            ServiceType::Preconception => {
                "Preparación integral si estás planificando un embarazo."
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingField {
    FullName,
    Email,
    Age,
    ServiceType,
    Concern,
}

/// Validation failures, in the order they are checked. `Display` is the text shown to the patient.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("Por favor, ingresa tu nombre completo.")]
    MissingFullName,
    #[error("Por favor, ingresa un correo electrónico válido.")]
    InvalidEmail,
    #[error("Por favor, ingresa tu edad.")]
    MissingAge,
    #[error("Por favor, selecciona el servicio que deseas.")]
    MissingServiceType,
    #[error("Por favor, describe el motivo de tu consulta.")]
    MissingConcern,
    #[error("Este servicio está disponible solo para personas entre {min} y {max} años.", min = MIN_AGE, max = MAX_AGE)]
    AgeOutOfRange,
}

/// Raw form state. Lives only as long as the page; reset after every successful send.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub full_name: String,
    pub email: String,
    pub age: String,
    pub service_type: String,
    pub concern: String,
}

/// A request that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Booking {
    pub full_name: String,
    pub email: String,
    pub age: i64,
    pub service_type: String,
    pub concern: String,
}

impl BookingForm {
    pub fn set(&mut self, field: BookingField, value: String) {
        match field {
            BookingField::FullName => self.full_name = value,
            BookingField::Email => self.email = value,
            BookingField::Age => self.age = value,
            BookingField::ServiceType => self.service_type = value,
            BookingField::Concern => self.concern = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> Result<Booking, BookingError> {
        if self.full_name.is_empty() {
            return Err(BookingError::MissingFullName);
        }
        // Only a superficial check; the receiving side sees the address as typed.
        if self.email.is_empty() || !self.email.contains('@') {
            return Err(BookingError::InvalidEmail);
        }
        if self.age.is_empty() {
            return Err(BookingError::MissingAge);
        }
        if self.service_type.is_empty() {
            return Err(BookingError::MissingServiceType);
        }
        if self.concern.is_empty() {
            return Err(BookingError::MissingConcern);
        }

        let age = match self.age.trim().parse::<i64>() {
            Ok(age) if (MIN_AGE..=MAX_AGE).contains(&age) => age,
            _ => return Err(BookingError::AgeOutOfRange),
        };

        Ok(Booking {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            age,
            service_type: self.service_type.clone(),
            concern: self.concern.clone(),
        })
    }

    /// Validates and, on success, clears the form and returns the WhatsApp URL to open.
    /// On failure the form is left as it was.
    pub fn submit(&mut self) -> Result<String, BookingError> {
        let booking = self.validate()?;
        let url = booking.whatsapp_url();
        *self = Self::default();
        Ok(url)
    }
}

impl Booking {
    pub fn message(&self) -> String {
        format!(
            "Hola, me gustaría agendar una hora.\n\n\
             Nombre completo: {}\n\
             Correo electrónico: {}\n\
             Edad: {}\n\
             Servicio: {}\n\
             Motivo de consulta: {}\n\n\
             Ubicación: {}",
            self.full_name, self.email, self.age, self.service_type, self.concern, LOCATION
        )
    }

    pub fn whatsapp_url(&self) -> String {
        format!(
            "{}/{}?text={}",
            WHATSAPP_BASE_URL,
            WHATSAPP_NUMBER,
            urlencoding::encode(&self.message())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> BookingForm {
        BookingForm {
            full_name: "Ana Pérez".to_string(),
            email: "ana@example.com".to_string(),
            age: "22".to_string(),
            service_type: "Control Ginecológico".to_string(),
            concern: "dolor".to_string(),
        }
    }

    #[test]
    fn empty_name_is_reported_first() {
        let forms = [
            BookingForm::default(),
            BookingForm {
                full_name: String::new(),
                ..valid_form()
            },
            BookingForm {
                full_name: String::new(),
                email: "no-at-sign".to_string(),
                age: "99".to_string(),
                ..BookingForm::default()
            },
        ];
        for form in forms {
            assert_eq!(form.validate(), Err(BookingError::MissingFullName));
        }
    }

    #[test]
    fn rules_are_checked_in_order() {
        let mut form = BookingForm {
            full_name: "Ana".to_string(),
            ..BookingForm::default()
        };
        assert_eq!(form.validate(), Err(BookingError::InvalidEmail));

        form.email = "ana.example.com".to_string();
        assert_eq!(form.validate(), Err(BookingError::InvalidEmail));

        form.email = "ana@example.com".to_string();
        assert_eq!(form.validate(), Err(BookingError::MissingAge));

        // Out of range, but missing fields come first.
        form.age = "40".to_string();
        assert_eq!(form.validate(), Err(BookingError::MissingServiceType));

        form.service_type = "Toma de PAP".to_string();
        assert_eq!(form.validate(), Err(BookingError::MissingConcern));

        form.concern = "control".to_string();
        assert_eq!(form.validate(), Err(BookingError::AgeOutOfRange));

        form.age = "25".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn every_age_in_range_passes() {
        for age in MIN_AGE..=MAX_AGE {
            let form = BookingForm {
                age: age.to_string(),
                ..valid_form()
            };
            assert_eq!(form.validate().map(|b| b.age), Ok(age));
        }
    }

    #[test]
    fn ages_outside_range_or_not_numbers_are_rejected() {
        for age in ["17", "29", "0", "-20", "abc", "22.5", "veinte", "2 2"] {
            let form = BookingForm {
                age: age.to_string(),
                ..valid_form()
            };
            assert_eq!(form.validate(), Err(BookingError::AgeOutOfRange), "age {:?}", age);
        }
    }

    #[test]
    fn age_tolerates_surrounding_whitespace() {
        let form = BookingForm {
            age: " 18 ".to_string(),
            ..valid_form()
        };
        assert_eq!(form.validate().map(|b| b.age), Ok(18));
    }

    #[test]
    fn email_only_needs_an_at_sign() {
        let form = BookingForm {
            email: "@".to_string(),
            ..valid_form()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn message_contains_every_value() {
        let booking = valid_form().validate().unwrap();
        let message = booking.message();
        for value in ["Ana Pérez", "ana@example.com", "22", "Control Ginecológico", "dolor", LOCATION] {
            assert!(message.contains(value), "missing {:?} in {:?}", value, message);
        }
        assert!(message.lines().count() > 5);
    }

    #[test]
    fn url_targets_practice_number_with_encoded_message() {
        let booking = valid_form().validate().unwrap();
        let url = booking.whatsapp_url();
        assert!(url.starts_with("https://wa.me/56952399709?text="));

        let encoded = url.trim_start_matches("https://wa.me/56952399709?text=");
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('\n'));
        assert_eq!(urlencoding::decode(encoded).unwrap(), booking.message());
    }

    #[test]
    fn successful_submit_resets_form() {
        let mut form = valid_form();
        let url = form.submit().unwrap();
        assert!(url.starts_with("https://wa.me/56952399709?text="));
        assert!(form.is_empty());
        assert_eq!(form, BookingForm::default());
    }

    #[test]
    fn failed_submit_keeps_form() {
        let mut form = BookingForm {
            concern: String::new(),
            ..valid_form()
        };
        let before = form.clone();
        assert_eq!(form.submit(), Err(BookingError::MissingConcern));
        assert_eq!(form, before);
    }

    #[test]
    fn set_replaces_only_the_named_field() {
        let mut form = BookingForm::default();
        form.set(BookingField::FullName, "Ana".to_string());
        form.set(BookingField::Email, "ana@example.com".to_string());
        form.set(BookingField::Age, "20".to_string());
        form.set(BookingField::ServiceType, "Anticoncepción".to_string());
        form.set(BookingField::Concern, "consulta".to_string());
        assert_eq!(
            form,
            BookingForm {
                full_name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                age: "20".to_string(),
                service_type: "Anticoncepción".to_string(),
                concern: "consulta".to_string(),
            }
        );

        form.set(BookingField::Age, "21".to_string());
        assert_eq!(form.age, "21");
        assert_eq!(form.full_name, "Ana");
        assert!(!form.is_empty());
    }

    #[test]
    fn age_message_names_the_range() {
        let text = BookingError::AgeOutOfRange.to_string();
        assert!(text.contains("18"));
        assert!(text.contains("28"));
    }

    #[test]
    fn service_labels_are_unique() {
        for (i, a) in ServiceType::ALL.iter().enumerate() {
            for b in &ServiceType::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
        assert!(ServiceType::ALL.iter().any(|s| s.label() == "Control Ginecológico"));
    }
}
