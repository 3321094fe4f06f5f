//! # cadenza-core
//!
//! Standardized JSON response bodies for HTTP servers. Every response is an
//! envelope:
//!
//! ```json
//! { "code": 404, "data": "Not Found" }
//! ```
//!
//! where `code` mirrors the transport status and `data` is the caller's
//! payload, or the status reason phrase when no payload is given.
//!
//! ```
//! use cadenza_core::{Recorder, not_found, ok, NO_DATA};
//!
//! let mut rec = Recorder::new();
//! ok(&mut rec, Some("hello"));
//! assert_eq!(rec.body_str(), r#"{"code":200,"data":"hello"}"#);
//!
//! let mut rec = Recorder::new();
//! not_found(&mut rec, NO_DATA);
//! assert_eq!(rec.status(), 404);
//! assert_eq!(rec.body_str(), r#"{"code":404,"data":"Not Found"}"#);
//! ```
//!
//! With axum, write into a [`axum::response::Response`] or return an
//! [`Envelope`] directly; both go through the same writer.

pub mod envelope;
pub mod error;
pub mod helpers;
pub mod json;
pub mod logging;
pub mod responder;
pub mod sink;
pub mod status;
pub mod testing;

pub use envelope::Envelope;
pub use error::{CadenzaError, Result};
pub use helpers::*;
pub use responder::{CONTENT_TYPE, NO_DATA, encode, respond};
pub use sink::ResponseSink;
pub use status::{STATUS_TABLE, Status, StatusClass, reason_phrase};
pub use testing::Recorder;
