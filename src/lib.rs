//! Arbitrary-precision signed integers in two's-complement form. \
//! This crate provides:
//! - [`BigInt`]: a signed integer of unbounded size with the full arithmetic,
//!   bitwise, shift and comparison operator set, plus decimal parsing and
//!   formatting.
//!
//! Values of one limb or less live inline with no allocation; larger values
//! share their limb buffer on clone and only copy it when one of the clones
//! is written to.

mod big_int;
mod limb_vec;

pub use big_int::{BigInt, ParseBigIntError};
