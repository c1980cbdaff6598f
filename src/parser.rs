//! Byte-level parsers.

pub(crate) mod decompose;
pub(crate) mod str;
pub(crate) mod validate;
