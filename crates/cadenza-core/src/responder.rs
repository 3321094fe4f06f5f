//! The Response Writer.

use serde::Serialize;

use crate::envelope::Envelope;
use crate::error::Result;
use crate::sink::ResponseSink;

/// Content type set on every envelope response.
pub const CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// The "no payload" argument: the envelope's `data` becomes the reason phrase.
///
/// ```
/// use cadenza_core::{Recorder, respond, NO_DATA};
///
/// let mut rec = Recorder::new();
/// respond(&mut rec, 404, NO_DATA);
/// assert_eq!(rec.body_str(), r#"{"code":404,"data":"Not Found"}"#);
/// ```
pub const NO_DATA: Option<&'static ()> = None;

/// Encode the envelope for `code` without touching any sink.
///
/// `None` puts the reason phrase for `code` in `data`; `Some(value)` puts
/// `value` there verbatim, so `Some(&())` encodes `"data":null`.
pub fn encode<T>(code: u16, data: Option<&T>) -> Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    match data {
        Some(data) => Envelope::new(code, data).to_vec(),
        None => Envelope::reason(code).to_vec(),
    }
}

/// Write a `{code, data}` envelope with status `code` to `sink`.
///
/// Sets `content-type` to [`CONTENT_TYPE`], the status to `code` and the
/// body to the encoded envelope. `code` is not validated.
///
/// # Panics
///
/// If `data` cannot be encoded as JSON (for instance a map whose keys are
/// not strings). Encoding happens before the sink is touched, so nothing is
/// written to it. The sink may panic on its own for codes it cannot carry.
pub fn respond<S, T>(sink: &mut S, code: u16, data: Option<&T>)
where
    S: ResponseSink + ?Sized,
    T: Serialize + ?Sized,
{
    let body = match encode(code, data) {
        Ok(body) => body,
        Err(err) => {
            tracing::error!(code, error = %err, "aborting response");
            panic!("{err}");
        }
    };

    sink.set_header("content-type", CONTENT_TYPE);
    sink.set_status(code);
    sink.write_body(&body);

    tracing::trace!(code, bytes = body.len(), "wrote envelope");
}

/// Variadic form of [`respond`](fn@crate::respond).
///
/// Only the first payload is used; any further ones are evaluated and
/// ignored.
///
/// ```
/// use cadenza_core::{Recorder, respond};
///
/// let mut rec = Recorder::new();
/// respond!(&mut rec, 200, "hello", "ignored");
/// assert_eq!(rec.body_str(), r#"{"code":200,"data":"hello"}"#);
///
/// let mut rec = Recorder::new();
/// respond!(&mut rec, 403);
/// assert_eq!(rec.body_str(), r#"{"code":403,"data":"Forbidden"}"#);
/// ```
#[macro_export]
macro_rules! respond {
    ($sink:expr, $code:expr $(,)?) => {
        $crate::respond($sink, $code, $crate::NO_DATA)
    };
    ($sink:expr, $code:expr, $data:expr $(, $extra:expr)* $(,)?) => {{
        $( let _ = &$extra; )*
        $crate::respond($sink, $code, ::core::option::Option::Some(&$data))
    }};
}
