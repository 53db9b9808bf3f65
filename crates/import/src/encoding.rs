use encoding_rs::Encoding;
use std::borrow::Cow;

use crate::error::ImportError;

/// Look up a WHATWG encoding label such as `cp1250` or `utf-8`.
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding, ImportError> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| ImportError::UnknownEncoding(label.to_string()))
}

/// Decode file bytes. A byte-order mark overrides the configured encoding.
pub fn decode<'a>(bytes: &'a [u8], encoding: &'static Encoding) -> Cow<'a, str> {
    let (text, used, had_errors) = encoding.decode(bytes);
    if used != encoding {
        tracing::debug!(configured = encoding.name(), used = used.name(), "byte-order mark detected");
    }
    if had_errors {
        tracing::warn!(encoding = used.name(), "malformed byte sequences replaced while decoding");
    }
    text
}
