//! The status registry.
//!
//! Every standard status code is declared exactly once, as a row of
//! `(code, CONSTANT, helper, "CanonicalName", "Reason phrase")` inside
//! [`for_each_status!`]. The rows are expanded by callback macros into the
//! constants, [`STATUS_TABLE`], [`reason_phrase`] and the named helpers in
//! [`crate::helpers`], so the table is the only place a code is spelled out.

use serde::Serialize;

/// Invokes `$callback!` with every row of the registry, sorted by code.
macro_rules! for_each_status {
    ($callback:ident) => {
        $callback! {
            // ── 1xx ────────────────────────────────────────────────
            (100, CONTINUE, r#continue, "Continue", "Continue");
            (101, SWITCHING_PROTOCOLS, switching_protocols, "SwitchingProtocols", "Switching Protocols");
            (102, PROCESSING, processing, "Processing", "Processing");
            (103, EARLY_HINTS, early_hints, "EarlyHints", "Early Hints");

            // ── 2xx ────────────────────────────────────────────────
            (200, OK, ok, "OK", "OK");
            (201, CREATED, created, "Created", "Created");
            (202, ACCEPTED, accepted, "Accepted", "Accepted");
            (203, NON_AUTHORITATIVE_INFO, non_authoritative_info, "NonAuthoritativeInfo", "Non-Authoritative Information");
            (204, NO_CONTENT, no_content, "NoContent", "No Content");
            (205, RESET_CONTENT, reset_content, "ResetContent", "Reset Content");
            (206, PARTIAL_CONTENT, partial_content, "PartialContent", "Partial Content");
            (207, MULTI_STATUS, multi_status, "MultiStatus", "Multi-Status");
            (208, ALREADY_REPORTED, already_reported, "AlreadyReported", "Already Reported");
            (226, IM_USED, im_used, "IMUsed", "IM Used");

            // ── 3xx ────────────────────────────────────────────────
            (300, MULTIPLE_CHOICES, multiple_choices, "MultipleChoices", "Multiple Choices");
            (301, MOVED_PERMANENTLY, moved_permanently, "MovedPermanently", "Moved Permanently");
            (302, FOUND, found, "Found", "Found");
            (303, SEE_OTHER, see_other, "SeeOther", "See Other");
            (304, NOT_MODIFIED, not_modified, "NotModified", "Not Modified");
            (305, USE_PROXY, use_proxy, "UseProxy", "Use Proxy");
            // Reserved and unused: no reason phrase is registered.
            (306, SWITCH_PROXY, switch_proxy, "SwitchProxy", "");
            (307, TEMPORARY_REDIRECT, temporary_redirect, "TemporaryRedirect", "Temporary Redirect");
            (308, PERMANENT_REDIRECT, permanent_redirect, "PermanentRedirect", "Permanent Redirect");

            // ── 4xx ────────────────────────────────────────────────
            (400, BAD_REQUEST, bad_request, "BadRequest", "Bad Request");
            (401, UNAUTHORIZED, unauthorized, "Unauthorized", "Unauthorized");
            (402, PAYMENT_REQUIRED, payment_required, "PaymentRequired", "Payment Required");
            (403, FORBIDDEN, forbidden, "Forbidden", "Forbidden");
            (404, NOT_FOUND, not_found, "NotFound", "Not Found");
            (405, METHOD_NOT_ALLOWED, method_not_allowed, "MethodNotAllowed", "Method Not Allowed");
            (406, NOT_ACCEPTABLE, not_acceptable, "NotAcceptable", "Not Acceptable");
            (407, PROXY_AUTH_REQUIRED, proxy_auth_required, "ProxyAuthRequired", "Proxy Authentication Required");
            (408, REQUEST_TIMEOUT, request_timeout, "RequestTimeout", "Request Timeout");
            (409, CONFLICT, conflict, "Conflict", "Conflict");
            (410, GONE, gone, "Gone", "Gone");
            (411, LENGTH_REQUIRED, length_required, "LengthRequired", "Length Required");
            (412, PRECONDITION_FAILED, precondition_failed, "PreconditionFailed", "Precondition Failed");
            (413, REQUEST_ENTITY_TOO_LARGE, request_entity_too_large, "RequestEntityTooLarge", "Request Entity Too Large");
            (414, REQUEST_URI_TOO_LONG, request_uri_too_long, "RequestURITooLong", "Request URI Too Long");
            (415, UNSUPPORTED_MEDIA_TYPE, unsupported_media_type, "UnsupportedMediaType", "Unsupported Media Type");
            (416, REQUESTED_RANGE_NOT_SATISFIABLE, requested_range_not_satisfiable, "RequestedRangeNotSatisfiable", "Requested Range Not Satisfiable");
            (417, EXPECTATION_FAILED, expectation_failed, "ExpectationFailed", "Expectation Failed");
            (418, TEAPOT, teapot, "Teapot", "I'm a teapot");
            (421, MISDIRECTED_REQUEST, misdirected_request, "MisdirectedRequest", "Misdirected Request");
            (422, UNPROCESSABLE_ENTITY, unprocessable_entity, "UnprocessableEntity", "Unprocessable Entity");
            (423, LOCKED, locked, "Locked", "Locked");
            (424, FAILED_DEPENDENCY, failed_dependency, "FailedDependency", "Failed Dependency");
            (425, TOO_EARLY, too_early, "TooEarly", "Too Early");
            (426, UPGRADE_REQUIRED, upgrade_required, "UpgradeRequired", "Upgrade Required");
            (428, PRECONDITION_REQUIRED, precondition_required, "PreconditionRequired", "Precondition Required");
            (429, TOO_MANY_REQUESTS, too_many_requests, "TooManyRequests", "Too Many Requests");
            (431, REQUEST_HEADER_FIELDS_TOO_LARGE, request_header_fields_too_large, "RequestHeaderFieldsTooLarge", "Request Header Fields Too Large");
            (451, UNAVAILABLE_FOR_LEGAL_REASONS, unavailable_for_legal_reasons, "UnavailableForLegalReasons", "Unavailable For Legal Reasons");

            // ── 5xx ────────────────────────────────────────────────
            (500, INTERNAL_SERVER_ERROR, internal_server_error, "InternalServerError", "Internal Server Error");
            (501, NOT_IMPLEMENTED, not_implemented, "NotImplemented", "Not Implemented");
            (502, BAD_GATEWAY, bad_gateway, "BadGateway", "Bad Gateway");
            (503, SERVICE_UNAVAILABLE, service_unavailable, "ServiceUnavailable", "Service Unavailable");
            (504, GATEWAY_TIMEOUT, gateway_timeout, "GatewayTimeout", "Gateway Timeout");
            (505, HTTP_VERSION_NOT_SUPPORTED, http_version_not_supported, "HTTPVersionNotSupported", "HTTP Version Not Supported");
            (506, VARIANT_ALSO_NEGOTIATES, variant_also_negotiates, "VariantAlsoNegotiates", "Variant Also Negotiates");
            (507, INSUFFICIENT_STORAGE, insufficient_storage, "InsufficientStorage", "Insufficient Storage");
            (508, LOOP_DETECTED, loop_detected, "LoopDetected", "Loop Detected");
            (510, NOT_EXTENDED, not_extended, "NotExtended", "Not Extended");
            (511, NETWORK_AUTHENTICATION_REQUIRED, network_authentication_required, "NetworkAuthenticationRequired", "Network Authentication Required");
        }
    };
}

pub(crate) use for_each_status;

/// One row of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Status {
    pub code: u16,
    /// Canonical name, also the PascalCase form of the helper's name.
    pub name: &'static str,
    /// Standard reason phrase. Empty for reserved codes such as 306.
    pub reason: &'static str,
}

impl Status {
    pub const fn class(&self) -> StatusClass {
        StatusClass::of(self.code)
    }
}

macro_rules! define_table {
    ($( ($code:literal, $konst:ident, $helper:ident, $name:literal, $reason:literal); )+) => {
        $(
            #[doc = concat!("`", stringify!($code), "` (", $name, ")")]
            pub const $konst: u16 = $code;
        )+

        /// Every registered status, sorted by code.
        pub static STATUS_TABLE: &[Status] = &[
            $( Status { code: $code, name: $name, reason: $reason }, )+
        ];

        /// Standard reason phrase for `code`, or `""` if the code is not registered.
        ///
        /// ```
        /// assert_eq!(cadenza_core::status::reason_phrase(404), "Not Found");
        /// assert_eq!(cadenza_core::status::reason_phrase(299), "");
        /// ```
        pub const fn reason_phrase(code: u16) -> &'static str {
            match code {
                $( $code => $reason, )+
                _ => "",
            }
        }
    };
}

for_each_status!(define_table);

/// Find the registry row for `code`.
pub fn lookup(code: u16) -> Option<&'static Status> {
    STATUS_TABLE
        .binary_search_by_key(&code, |status| status.code)
        .ok()
        .map(|index| &STATUS_TABLE[index])
}

/// Find a registry row by canonical name, ignoring ASCII case.
pub fn lookup_name(name: &str) -> Option<&'static Status> {
    STATUS_TABLE
        .iter()
        .find(|status| status.name.eq_ignore_ascii_case(name))
}

/// The class a status code belongs to, decided by its first digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
    Unknown,
}

impl StatusClass {
    pub const fn of(code: u16) -> Self {
        match code {
            100..=199 => StatusClass::Informational,
            200..=299 => StatusClass::Success,
            300..=399 => StatusClass::Redirection,
            400..=499 => StatusClass::ClientError,
            500..=599 => StatusClass::ServerError,
            _ => StatusClass::Unknown,
        }
    }

    /// `true` for the 4xx and 5xx classes.
    pub const fn is_error(self) -> bool {
        matches!(self, StatusClass::ClientError | StatusClass::ServerError)
    }
}
