//! The response sink: whatever can take a status, headers and a body.

use axum::body::Body;
use axum::http::{HeaderValue, StatusCode};
use axum::response::Response;

use crate::error::CadenzaError;

/// Capability to set a status, set headers and write body bytes.
///
/// Implemented for axum's [`Response`] and for [`crate::testing::Recorder`].
/// Header names are passed as lowercase static strings.
pub trait ResponseSink {
    fn set_status(&mut self, code: u16);

    /// Set `name` to `value`, replacing any previous value.
    fn set_header(&mut self, name: &'static str, value: &str);

    /// Set the body to `bytes`, replacing anything written before.
    fn write_body(&mut self, bytes: &[u8]);
}

impl<S: ResponseSink + ?Sized> ResponseSink for &mut S {
    fn set_status(&mut self, code: u16) {
        (**self).set_status(code)
    }

    fn set_header(&mut self, name: &'static str, value: &str) {
        (**self).set_header(name, value)
    }

    fn write_body(&mut self, bytes: &[u8]) {
        (**self).write_body(bytes)
    }
}

impl ResponseSink for Response {
    /// Panics for codes outside `100..=999`, which HTTP/1.1 cannot express.
    fn set_status(&mut self, code: u16) {
        match StatusCode::from_u16(code) {
            Ok(status) => *self.status_mut() = status,
            Err(_) => panic!("{}", CadenzaError::InvalidStatus(code)),
        }
    }

    fn set_header(&mut self, name: &'static str, value: &str) {
        match HeaderValue::from_str(value) {
            Ok(value) => {
                self.headers_mut().insert(name, value);
            }
            Err(_) => tracing::warn!(header = name, "dropping header with invalid value"),
        }
    }

    fn write_body(&mut self, bytes: &[u8]) {
        *self.body_mut() = Body::from(bytes.to_vec());
    }
}
