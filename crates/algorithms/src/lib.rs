//! Point normalization and Frobenius operators over tower extension fields
//!
//! This crate implements the coordinate-level core of elliptic curve
//! arithmetic over tower extensions of a prime field, the setting used by
//! pairing-friendly curves:
//!
//! - [`Point::normalize`] converts a point in projective or Jacobian
//!   coordinates back to affine form.
//! - [`Point::batch_normalize`] does the same for a whole slice of points
//!   with a single field inversion, using simultaneous inversion.
//! - [`Point::frobenius`] applies the Frobenius endomorphism to a point any
//!   number of times, rescaling by the twist constants of an explicit
//!   [`CurveContext`].
//!
//! Field arithmetic enters through the [`field::TowerField`] trait; the
//! crate ships implementations for the base 381-bit prime field and its
//! quadratic, quartic and sextic towers, plus a ready-made context for the
//! quadratic twist of BLS12-381 in [`ec::g2`].
//!
//! All operations are pure functions over value types: no locks, no global
//! mutable state, no I/O. Invalid inputs are contract violations and surface
//! immediately as [`Error`] values; nothing here is retried.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Field towers and the arithmetic contract
pub mod field;
pub use field::TowerField;

// Elliptic curve point primitives
pub mod ec;
pub use ec::{CoordKind, CurveContext, Point};
