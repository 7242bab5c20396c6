//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::Draft;
pub use response::{ApiResponse, MessageResult};
pub use validation::ValidationError;
pub use value::{Channel, Module, PhoneNumber, ScheduleTime};

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};

    use super::*;

    #[test]
    fn channel_wire_values() {
        assert_eq!(Channel::Regular.as_str(), "NON-2FA");
        assert_eq!(Channel::Otp.as_str(), "2FA");
        assert_eq!(Channel::Default.as_str(), "DEFAULT");
        assert_eq!(Channel::LongNumber.as_str(), "LONGNUMBER");
        assert_eq!(Channel::Otp.to_string(), "2FA");
    }

    #[test]
    fn module_wire_values() {
        assert_eq!(Module::Sms.as_str(), "SMS");
        assert_eq!(Module::Email.as_str(), "EMAIL");
        assert_eq!(Module::Whatsapp.as_str(), "WA");
    }

    #[test]
    fn new_draft_is_sms_and_empty() {
        let draft = Draft::new(Channel::Otp);
        assert_eq!(draft.module, Module::Sms);
        assert_eq!(draft.channel, Channel::Otp);
        assert!(draft.sender_id.is_empty());
        assert!(draft.destinations.is_empty());
    }

    #[test]
    fn clear_keeps_module_and_channel() {
        let mut draft = Draft::new(Channel::LongNumber);
        draft.sender_id.push_str("K1NG");
        draft.content.push_str("hello");
        draft.template.push_str("promo");
        draft.destinations.push("0811".to_owned());

        draft.clear();

        assert_eq!(draft, Draft::new(Channel::LongNumber));
    }

    #[test]
    fn schedule_time_uses_fixed_format() {
        let utc = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 0).unwrap();
        assert_eq!(ScheduleTime::new(&utc).as_str(), "2024-03-09 07:05:00");

        let naive = NaiveDate::from_ymd_opt(2024, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(
            ScheduleTime::from_naive(&naive).as_str(),
            "2024-12-31 23:59:59"
        );
    }

    #[test]
    fn schedule_time_keeps_wall_clock_of_its_zone() {
        let jakarta = FixedOffset::east_opt(7 * 3600).unwrap();
        let local = jakarta.with_ymd_and_hms(2024, 1, 1, 8, 30, 0).unwrap();
        assert_eq!(ScheduleTime::new(&local).as_str(), "2024-01-01 08:30:00");
    }

    #[test]
    fn phone_number_parses_with_region_and_trims() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::ID), " 081234567890 ").unwrap();
        assert_eq!(pn.raw(), "081234567890");
        assert_eq!(pn.e164(), "+6281234567890");
    }

    #[test]
    fn phone_number_rejects_empty_and_garbage() {
        assert!(matches!(
            PhoneNumber::parse(None, "   "),
            Err(ValidationError::EmptyDestination)
        ));
        assert!(matches!(
            PhoneNumber::parse(None, "not a number"),
            Err(ValidationError::InvalidPhoneNumber { .. })
        ));
    }
}
