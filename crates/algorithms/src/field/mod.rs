//! Tower extension fields over the 381-bit base prime
//!
//! The [`TowerField`] trait is the arithmetic contract the point layer
//! consumes; the submodules implement it for the base prime field and for
//! the quadratic, quartic and sextic extensions built on top of it.

use core::fmt;

use crate::error::{Error, Result};

pub mod fp; // Base field
pub mod fp2; // Quadratic extension
pub mod fp4; // Quartic extension
pub mod fp6; // Sextic extension


pub use fp::Fp;
pub use fp2::Fp2;
pub use fp4::Fp4;
pub use fp6::Fp6;

/// Arithmetic contract for an element of a tower extension field.
///
/// The point layer is generic over this trait: everything it needs from the
/// field is listed here, and nothing else. `frobenius_map` is one
/// application of the p-power automorphism, implemented as a fixed
/// structural transform of the tower representation rather than a general
/// exponentiation.
pub trait TowerField: Sized + Clone + PartialEq + fmt::Debug {
    /// Extension degree over the base prime field.
    const DEGREE: usize;

    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Whether this element is exactly zero.
    fn is_zero(&self) -> bool;

    /// Field addition.
    fn add(&self, rhs: &Self) -> Self;

    /// Field subtraction.
    fn sub(&self, rhs: &Self) -> Self;

    /// Field multiplication.
    fn mul(&self, rhs: &Self) -> Self;

    /// Field squaring.
    fn square(&self) -> Self;

    /// Multiplicative inverse; fails on zero with [`Error::ZeroInversion`].
    fn invert(&self) -> Result<Self>;

    /// One application of the Frobenius automorphism.
    fn frobenius_map(&self) -> Self;

    /// Simultaneous inversion of a whole slice with one general inversion
    /// plus O(n) multiplications.
    ///
    /// Fails atomically: a zero anywhere in the input yields
    /// [`Error::ZeroInversion`] and no partial output. An empty slice
    /// performs no inversion at all.
    fn invert_batch(elems: &[Self]) -> Result<Vec<Self>> {
        if elems.is_empty() {
            return Ok(Vec::new());
        }

        // Forward pass: running[i] = elems[0] * ... * elems[i-1].
        let mut running = Vec::with_capacity(elems.len());
        let mut acc = Self::one();
        for e in elems {
            if e.is_zero() {
                return Err(Error::ZeroInversion {
                    context: "simultaneous inversion",
                });
            }
            running.push(acc.clone());
            acc = acc.mul(e);
        }

        // One general inversion for the whole batch.
        let mut acc = acc.invert()?;

        // Backward pass peels off one factor per step.
        let mut out = vec![Self::zero(); elems.len()];
        for i in (0..elems.len()).rev() {
            out[i] = acc.mul(&running[i]);
            acc = acc.mul(&elems[i]);
        }
        Ok(out)
    }
}
