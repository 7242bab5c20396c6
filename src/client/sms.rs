use std::sync::Arc;

use reqwest::Method;

use crate::client::{Core, K1ngError};
use crate::domain::{
    ApiResponse, Channel, Draft, Module, PhoneNumber, ScheduleTime, ValidationError,
};
use crate::transport::{
    SEND_ENDPOINT, decode_send_json_response, encode_schedule_time, encode_send_form,
};

#[derive(Debug, Clone)]
/// Fluent SMS builder bound to a [`Core`].
///
/// Setters mutate the draft in place and return `&mut Self`, so calls can be
/// chained. Validation runs on every [`Sms::send`] / [`Sms::send_at`]; the
/// draft is left untouched by sending and can be sent again.
pub struct Sms {
    core: Arc<Core>,
    draft: Draft,
}

impl Sms {
    fn create(
        host_url: impl Into<String>,
        api_key: impl Into<String>,
        api_pass: impl Into<String>,
        channel: Channel,
    ) -> Result<Self, K1ngError> {
        let core = Core::new(host_url, api_key, api_pass)?;
        Ok(Self::with_core(Arc::new(core), channel))
    }

    /// Builder on [`Channel::Default`] (international senders).
    ///
    /// The channel can still be changed later with [`Sms::set_channel`].
    pub fn default_channel(
        host_url: impl Into<String>,
        api_key: impl Into<String>,
        api_pass: impl Into<String>,
    ) -> Result<Self, K1ngError> {
        Self::create(host_url, api_key, api_pass, Channel::Default)
    }

    /// Builder on [`Channel::LongNumber`].
    pub fn long_number(
        host_url: impl Into<String>,
        api_key: impl Into<String>,
        api_pass: impl Into<String>,
    ) -> Result<Self, K1ngError> {
        Self::create(host_url, api_key, api_pass, Channel::LongNumber)
    }

    /// Builder on [`Channel::Otp`].
    pub fn otp(
        host_url: impl Into<String>,
        api_key: impl Into<String>,
        api_pass: impl Into<String>,
    ) -> Result<Self, K1ngError> {
        Self::create(host_url, api_key, api_pass, Channel::Otp)
    }

    /// Builder on [`Channel::Regular`].
    pub fn regular(
        host_url: impl Into<String>,
        api_key: impl Into<String>,
        api_pass: impl Into<String>,
    ) -> Result<Self, K1ngError> {
        Self::create(host_url, api_key, api_pass, Channel::Regular)
    }

    /// Bind a new, empty draft to an existing (possibly shared) core.
    pub fn with_core(core: Arc<Core>, channel: Channel) -> Self {
        Self {
            core,
            draft: Draft::new(channel),
        }
    }

    pub fn set_sender_id(&mut self, sender_id: impl Into<String>) -> &mut Self {
        self.draft.sender_id = sender_id.into();
        self
    }

    pub fn set_channel(&mut self, channel: Channel) -> &mut Self {
        self.draft.channel = channel;
        self
    }

    /// Set the message body.
    ///
    /// When a template is set, pass a comma-separated list of its placeholder values here.
    pub fn set_content(&mut self, content: impl Into<String>) -> &mut Self {
        self.draft.content = content.into();
        self
    }

    /// Use a server-side template. Blank names are not sent.
    pub fn set_template(&mut self, template_name: impl Into<String>) -> &mut Self {
        self.draft.template = template_name.into();
        self
    }

    /// Append phone numbers to the destination list, keeping insertion order.
    pub fn add_destinations<I, S>(&mut self, phone_numbers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.draft
            .destinations
            .extend(phone_numbers.into_iter().map(Into::into));
        self
    }

    /// Append parsed phone numbers in E.164 form.
    pub fn add_phone_numbers<I>(&mut self, phone_numbers: I) -> &mut Self
    where
        I: IntoIterator<Item = PhoneNumber>,
    {
        self.add_destinations(phone_numbers)
    }

    pub fn empty_destinations(&mut self) -> &mut Self {
        self.draft.destinations.clear();
        self
    }

    /// Clear sender id, content, template and destinations. Channel is kept.
    pub fn reset(&mut self) -> &mut Self {
        self.draft.clear();
        self
    }

    pub fn module(&self) -> Module {
        self.draft.module
    }

    pub fn channel(&self) -> Channel {
        self.draft.channel
    }

    pub fn sender_id(&self) -> &str {
        &self.draft.sender_id
    }

    pub fn content(&self) -> &str {
        &self.draft.content
    }

    pub fn template(&self) -> &str {
        &self.draft.template
    }

    pub fn destinations(&self) -> &[String] {
        &self.draft.destinations
    }

    pub fn core(&self) -> &Arc<Core> {
        &self.core
    }

    /// Validate the draft and encode it as form parameters (without credentials).
    pub fn build_params(&self) -> Result<Vec<(String, String)>, ValidationError> {
        encode_send_form(&self.draft)
    }

    /// Send the draft immediately.
    ///
    /// Errors:
    /// - [`K1ngError::Validation`] for an incomplete draft (no request is made),
    /// - [`K1ngError::Transport`] when the HTTP call fails,
    /// - [`K1ngError::HttpStatus`] for any status other than 200,
    /// - [`K1ngError::Decode`] when the body is not the expected JSON.
    pub async fn send(&self) -> Result<ApiResponse, K1ngError> {
        let params = self.build_params()?;
        self.submit(params).await
    }

    /// Schedule the draft for delivery at `send_time`.
    ///
    /// Same as [`Sms::send`] with an extra `schedule_time` parameter.
    pub async fn send_at(
        &self,
        send_time: impl Into<ScheduleTime>,
    ) -> Result<ApiResponse, K1ngError> {
        let schedule_time = send_time.into();
        let mut params = self.build_params()?;
        encode_schedule_time(&mut params, &schedule_time);
        self.submit(params).await
    }

    async fn submit(&self, params: Vec<(String, String)>) -> Result<ApiResponse, K1ngError> {
        let response = self
            .core
            .consume(Method::POST, SEND_ENDPOINT, params)
            .await?;

        if response.status != 200 {
            tracing::warn!(status = response.status, "K1NG send rejected");
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(K1ngError::HttpStatus {
                status: response.status,
                body,
            });
        }

        decode_send_json_response(&response.body).map_err(|err| K1ngError::Decode(Box::new(err)))
    }
}
