//! Transport layer: wire-format details (form encoding, JSON decoding).

mod send;

pub use send::{SEND_ENDPOINT, decode_send_json_response, encode_schedule_time, encode_send_form};
