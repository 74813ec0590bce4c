//! HTML sanitization implementations.

mod html;

pub use html::AmmoniaSanitizer;
