//! Typed Rust client for the K1NG SMS HTTP API.
//!
//! The crate has three layers: a domain layer of plain types, a transport
//! layer for the wire format of `api/v1/send`, and a client layer with the
//! authenticated HTTP [`Core`] and the fluent [`Sms`] builder.
//!
//! ```rust,no_run
//! use k1ng::{K1ngError, Sms};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), K1ngError> {
//!     let mut sms = Sms::otp("https://api.example.com", "api-key", "api-pass")?;
//!     sms.set_sender_id("K1NG")
//!         .set_content("Your code is 123456")
//!         .add_destinations(["081234567890"]);
//!     let response = sms.send().await?;
//!     println!("queued {} message(s)", response.count);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Core, CoreBuilder, HttpResponse, K1ngError, Sms};
pub use domain::{
    ApiResponse, Channel, MessageResult, Module, PhoneNumber, ScheduleTime, ValidationError,
};
