//! HTML sanitization port.

/// Filters untrusted HTML down to a safe allow-listed subset.
///
/// Implementations must be deterministic and idempotent, and must never fail:
/// malformed markup degrades to best-effort stripped output.
pub trait HtmlSanitizer: Send + Sync {
    fn sanitize(&self, html: &str) -> String;
}
