//! Low-level word helpers shared by the Speck primitives.

pub(crate) mod bits;
pub(crate) mod converter;
