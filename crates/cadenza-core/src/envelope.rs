use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::responder::respond;
use crate::status::reason_phrase;

/// The body of every cadenza response.
///
/// ```json
/// { "code": 404, "data": "Not Found" }
/// ```
///
/// `code` always equals the status set on the transport response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(code: u16, data: T) -> Self {
        Envelope { code, data }
    }
}

impl Envelope<&'static str> {
    /// Envelope carrying the reason phrase for `code` as its data.
    pub fn reason(code: u16) -> Self {
        Envelope {
            code,
            data: reason_phrase(code),
        }
    }
}

impl<T: Serialize> Envelope<T> {
    /// Encode the envelope to JSON bytes.
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(64);
        crate::json::to_writer(&mut buf, self)?;
        Ok(buf)
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    /// Panics if `data` cannot be encoded or `code` is outside `100..=999`.
    fn into_response(self) -> Response {
        let mut response = Response::default();
        respond(&mut response, self.code, Some(&self.data));
        response
    }
}
