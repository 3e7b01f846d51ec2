//! Curve constant tables for the extpoint library
//!
//! This crate holds nothing but `pub const` data: the twist constants,
//! curve coefficients and generator coordinates that the algorithms crate
//! turns into live field elements. Keeping them here mirrors the split
//! between parameter bootstrap (which produced these values once, offline)
//! and the point arithmetic that merely consumes them.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod bls12_381;
