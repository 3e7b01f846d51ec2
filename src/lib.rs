//! # extpoint
//!
//! Elliptic curve point arithmetic over tower extension fields, as used by
//! pairing-friendly curves.
//!
//! The library covers the coordinate-level core that higher layers (scalar
//! multiplication, pairing evaluation, serialization) build on:
//!
//! - conversion of points from projective or Jacobian coordinates back to
//!   affine form, including a batched variant that amortizes the field
//!   inversion across the whole input with the simultaneous-inversion trick;
//! - the Frobenius endomorphism on points, applied any number of times with
//!   per-curve twist constants supplied through an explicit [`CurveContext`]
//!   value.
//!
//! ## Crate structure
//!
//! This is a facade crate that re-exports functionality from two sub-crates:
//!
//! - [`extpoint-algorithms`]: fields, points and the operators on them
//! - [`extpoint-params`]: curve constant tables consumed by the algorithms
//!
//! ## Example
//!
//! ```
//! use extpoint::prelude::*;
//!
//! let ctx = g2::context();
//! let g = g2::generator();
//! let image = g.frobenius(1, &ctx)?;
//! assert!(g2::is_on_twist(&image)?);
//! # Ok::<(), extpoint::prelude::Error>(())
//! ```
//!
//! [`CurveContext`]: prelude::CurveContext
//! [`extpoint-algorithms`]: extpoint_algorithms
//! [`extpoint-params`]: extpoint_params

// Core re-exports (always available)
pub use extpoint_algorithms as algorithms;
pub use extpoint_params as params;

/// Common imports for extpoint users
pub mod prelude {
    pub use extpoint_algorithms::ec::g2;
    pub use extpoint_algorithms::field::{Fp, Fp2, Fp4, Fp6, TowerField};
    pub use extpoint_algorithms::{CoordKind, CurveContext, Error, Point, Result};
}
