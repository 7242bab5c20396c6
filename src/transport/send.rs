use serde::Deserialize;
use serde::de::Error as DeError;

use crate::domain::{
    ApiResponse, Channel, Draft, MessageResult, Module, ScheduleTime, ValidationError,
};

pub const SEND_ENDPOINT: &str = "api/v1/send";

const SENDER_ID_FIELD: &str = "sid";
const CONTENT_FIELD: &str = "content";
const TEMPLATE_FIELD: &str = "template_name";
const DESTINATION_FIELD: &str = "destination";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
struct SendJsonResponse {
    #[serde(default)]
    status: Option<i64>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    count: Option<i64>,
    #[serde(default)]
    data: Option<Vec<MessageJsonResult>>,
    #[serde(default)]
    errors: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
struct MessageJsonResult {
    #[serde(default)]
    id_message: TransportText,
    #[serde(default)]
    status_code: TransportText,
    #[serde(default)]
    status_message: TransportText,
    #[serde(default)]
    destination: TransportText,
}

/// Text field returned by K1NG as either JSON string or JSON number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct TransportText(String);

impl<'de> Deserialize<'de> for TransportText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(value) => Ok(Self(value)),
            serde_json::Value::Number(value) => Ok(Self(value.to_string())),
            serde_json::Value::Null => Ok(Self::default()),
            _ => Err(D::Error::custom("expected JSON string or number")),
        }
    }
}

pub fn encode_send_form(draft: &Draft) -> Result<Vec<(String, String)>, ValidationError> {
    let mut params = vec![
        (Module::FIELD.to_owned(), draft.module.as_str().to_owned()),
        (Channel::FIELD.to_owned(), draft.channel.as_str().to_owned()),
    ];

    if draft.sender_id.is_empty() {
        return Err(ValidationError::EmptySenderId);
    }
    params.push((SENDER_ID_FIELD.to_owned(), draft.sender_id.clone()));

    if draft.content.is_empty() {
        return Err(ValidationError::EmptyContent);
    }
    params.push((CONTENT_FIELD.to_owned(), draft.content.clone()));

    if !draft.template.trim().is_empty() {
        params.push((TEMPLATE_FIELD.to_owned(), draft.template.clone()));
    }

    if draft.destinations.is_empty() {
        return Err(ValidationError::EmptyDestination);
    }
    params.push((DESTINATION_FIELD.to_owned(), draft.destinations.join(",")));

    Ok(params)
}

pub fn encode_schedule_time(params: &mut Vec<(String, String)>, time: &ScheduleTime) {
    params.push((ScheduleTime::FIELD.to_owned(), time.as_str().to_owned()));
}

pub fn decode_send_json_response(json: &str) -> Result<ApiResponse, TransportError> {
    let parsed: SendJsonResponse = serde_json::from_str(json)?;

    let results = parsed
        .data
        .unwrap_or_default()
        .into_iter()
        .map(|item| MessageResult {
            id: item.id_message.0,
            status_code: item.status_code.0,
            status_message: item.status_message.0,
            destination: item.destination.0,
        })
        .collect();

    Ok(ApiResponse {
        code: parsed.status.unwrap_or_default(),
        message: parsed.message.unwrap_or_default(),
        count: parsed.count.unwrap_or_default(),
        results,
        has_errors: parsed.errors.unwrap_or_default(),
    })
}
