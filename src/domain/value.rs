use std::fmt;

use chrono::{DateTime, NaiveDateTime, TimeZone};
use phonenumber::country;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// K1NG product line addressed by a request (`module`).
pub enum Module {
    /// Text messages (`SMS`).
    Sms,
    /// E-mail delivery (`EMAIL`).
    Email,
    /// WhatsApp messages (`WA`).
    Whatsapp,
}

impl Module {
    /// Form field name used by K1NG (`module`).
    pub const FIELD: &'static str = "module";

    /// Wire value of the module.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sms => "SMS",
            Self::Email => "EMAIL",
            Self::Whatsapp => "WA",
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// SMS routing channel (`sub_module`).
pub enum Channel {
    /// Non-OTP traffic for Indonesian customers (`NON-2FA`).
    Regular,
    /// OTP traffic for Indonesian customers (`2FA`).
    Otp,
    /// International customers sending to Indonesian numbers (`DEFAULT`).
    Default,
    /// Messages sent with a long number as sender id (`LONGNUMBER`).
    LongNumber,
}

impl Channel {
    /// Form field name used by K1NG (`sub_module`).
    pub const FIELD: &'static str = "sub_module";

    /// Wire value of the channel.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "NON-2FA",
            Self::Otp => "2FA",
            Self::Default => "DEFAULT",
            Self::LongNumber => "LONGNUMBER",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Delivery time of a scheduled message (`schedule_time`).
///
/// Rendered as `YYYY-MM-DD HH:MM:SS` in the wall-clock time of the zone the
/// value was created from. The format does not depend on the locale.
pub struct ScheduleTime(String);

impl ScheduleTime {
    /// Form field name used by K1NG (`schedule_time`).
    pub const FIELD: &'static str = "schedule_time";

    /// `chrono` format string of the wire value.
    pub const FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

    /// Format a zoned timestamp using its own offset.
    pub fn new<Tz>(time: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self(time.format(Self::FORMAT).to_string())
    }

    /// Format a timestamp that carries no zone information.
    pub fn from_naive(time: &NaiveDateTime) -> Self {
        Self(time.format(Self::FORMAT).to_string())
    }

    /// Borrow the formatted value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<Tz> From<DateTime<Tz>> for ScheduleTime
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    fn from(value: DateTime<Tz>) -> Self {
        Self::new(&value)
    }
}

impl From<NaiveDateTime> for ScheduleTime {
    fn from(value: NaiveDateTime) -> Self {
        Self::from_naive(&value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Parsed phone number (via the `phonenumber` crate).
///
/// Destinations are plain strings on the wire; use this type when numbers
/// should be normalized to E.164 before they are added to a draft.
pub struct PhoneNumber {
    raw: String,
    e164: String,
}

impl PhoneNumber {
    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::EmptyDestination);
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164 })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.e164
    }
}
