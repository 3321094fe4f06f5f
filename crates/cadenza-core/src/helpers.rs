//! One named writer per registered status code.
//!
//! Each helper is exactly [`respond`] with its code fixed:
//! `not_found(sink, data)` is `respond(sink, 404, data)`.

use serde::Serialize;

use crate::responder::respond;
use crate::sink::ResponseSink;
use crate::status::{self, for_each_status};

macro_rules! define_helpers {
    ($( ($code:literal, $konst:ident, $helper:ident, $name:literal, $reason:literal); )+) => {
        $(
            #[doc = concat!("Writes an envelope with status `", stringify!($code), "` (", $name, ").")]
            #[inline]
            pub fn $helper<S, T>(sink: &mut S, data: Option<&T>)
            where
                S: ResponseSink + ?Sized,
                T: Serialize + ?Sized,
            {
                respond(sink, status::$konst, data)
            }
        )+
    };
}

for_each_status!(define_helpers);
