//! In-memory sink for tests.
//!
//! ```
//! use cadenza_core::{Recorder, teapot, NO_DATA};
//!
//! let mut rec = Recorder::new();
//! teapot(&mut rec, NO_DATA);
//! assert_eq!(rec.status(), 418);
//! assert_eq!(rec.body_str(), r#"{"code":418,"data":"I'm a teapot"}"#);
//! ```

use std::borrow::Cow;

use serde::de::DeserializeOwned;

use crate::envelope::Envelope;
use crate::sink::ResponseSink;
use crate::status::for_each_status;

/// A [`ResponseSink`] that records everything written to it.
///
/// The status starts at 200. Repeated header sets and body writes replace
/// the previous value, as they do on an axum `Response`.
#[derive(Debug, Clone)]
pub struct Recorder {
    status: u16,
    headers: Vec<(&'static str, String)>,
    body: Vec<u8>,
}

impl Default for Recorder {
    fn default() -> Self {
        Recorder {
            status: 200,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Value of header `name`, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn body_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Decode the recorded body as an envelope.
    pub fn envelope<T: DeserializeOwned>(&self) -> Result<Envelope<T>, crate::json::Error> {
        crate::json::from_slice(&self.body)
    }

    pub fn into_parts(self) -> (u16, Vec<(&'static str, String)>, Vec<u8>) {
        (self.status, self.headers, self.body)
    }
}

impl ResponseSink for Recorder {
    fn set_status(&mut self, code: u16) {
        self.status = code;
    }

    fn set_header(&mut self, name: &'static str, value: &str) {
        match self
            .headers
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
        {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.headers.push((name, value.to_string())),
        }
    }

    fn write_body(&mut self, bytes: &[u8]) {
        self.body.clear();
        self.body.extend_from_slice(bytes);
    }
}

/// A named helper bound to the recorder and a JSON value payload.
pub type HelperFn = fn(&mut Recorder, Option<&serde_json::Value>);

macro_rules! define_helper_table {
    ($( ($code:literal, $konst:ident, $helper:ident, $name:literal, $reason:literal); )+) => {
        /// Every named helper with the code it is bound to, in registry order.
        pub static HELPERS: &[(u16, &str, HelperFn)] = &[
            $( ($code, $name, crate::helpers::$helper::<Recorder, serde_json::Value> as HelperFn), )+
        ];
    };
}

for_each_status!(define_helper_table);
