//! Sextic extension `Fp6 = Fp2[v] / (v³ - ξ)` with ξ = u + 1
//!
//! As a cubic extension of its quadratic base this is the tower shape that
//! exercises the cubic finishing formulas of the point layer.

use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::field::fp::P_MINUS_1_OVER_3;
use crate::field::fp2::Fp2;
use crate::field::TowerField;

/// Element c0 + c1·v + c2·v² of the sextic extension, with v³ = ξ.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Fp6 {
    pub(crate) c0: Fp2,
    pub(crate) c1: Fp2,
    pub(crate) c2: Fp2,
}

impl Default for Fp6 {
    fn default() -> Fp6 {
        Fp6::zero()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Fp6 {}

/// Frobenius constants γ1 = ξ^((p-1)/3) and γ2 = γ1², derived once per
/// process.
///
/// v^p = γ1·v and (v²)^p = γ2·v², so one Frobenius application conjugates
/// the coefficients and rescales the v and v² coefficients.
fn frobenius_gammas() -> &'static (Fp2, Fp2) {
    static GAMMAS: OnceLock<(Fp2, Fp2)> = OnceLock::new();
    GAMMAS.get_or_init(|| {
        let g1 = Fp2::NONRESIDUE.pow_vartime(&P_MINUS_1_OVER_3);
        let g2 = g1.square();
        (g1, g2)
    })
}

impl Fp6 {
    /// The additive identity: 0
    #[inline]
    pub const fn zero() -> Fp6 {
        Fp6 {
            c0: Fp2::zero(),
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }

    /// The multiplicative identity: 1
    #[inline]
    pub const fn one() -> Fp6 {
        Fp6 {
            c0: Fp2::one(),
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }

    /// Assemble an element from its three coefficients.
    pub const fn new(c0: Fp2, c1: Fp2, c2: Fp2) -> Fp6 {
        Fp6 { c0, c1, c2 }
    }

    /// Check if the element is zero
    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }

    /// Field addition
    pub fn add(&self, rhs: &Fp6) -> Fp6 {
        Fp6 {
            c0: self.c0.add(&rhs.c0),
            c1: self.c1.add(&rhs.c1),
            c2: self.c2.add(&rhs.c2),
        }
    }

    /// Field subtraction
    pub fn sub(&self, rhs: &Fp6) -> Fp6 {
        Fp6 {
            c0: self.c0.sub(&rhs.c0),
            c1: self.c1.sub(&rhs.c1),
            c2: self.c2.sub(&rhs.c2),
        }
    }

    /// Additive inverse
    pub fn negate(&self) -> Fp6 {
        Fp6 {
            c0: self.c0.negate(),
            c1: self.c1.negate(),
            c2: self.c2.negate(),
        }
    }

    /// Field multiplication
    pub fn mul(&self, rhs: &Fp6) -> Fp6 {
        // Schoolbook cubic multiplication with v³ = ξ folded back in:
        //   c0 = a0 b0 + ξ (a1 b2 + a2 b1)
        //   c1 = a0 b1 + a1 b0 + ξ a2 b2
        //   c2 = a0 b2 + a1 b1 + a2 b0
        let c0 = self.c0.mul(&rhs.c0).add(
            &self
                .c1
                .mul(&rhs.c2)
                .add(&self.c2.mul(&rhs.c1))
                .mul_by_nonresidue(),
        );
        let c1 = self
            .c0
            .mul(&rhs.c1)
            .add(&self.c1.mul(&rhs.c0))
            .add(&self.c2.mul(&rhs.c2).mul_by_nonresidue());
        let c2 = self
            .c0
            .mul(&rhs.c2)
            .add(&self.c1.mul(&rhs.c1))
            .add(&self.c2.mul(&rhs.c0));
        Fp6 { c0, c1, c2 }
    }

    /// Field squaring
    #[inline(always)]
    pub fn square(&self) -> Fp6 {
        self.mul(self)
    }

    /// One application of the Frobenius automorphism.
    pub fn frobenius_map(&self) -> Fp6 {
        let (g1, g2) = frobenius_gammas();
        Fp6 {
            c0: self.c0.conjugate(),
            c1: self.c1.conjugate().mul(g1),
            c2: self.c2.conjugate().mul(g2),
        }
    }

    /// Multiplicative inverse; fails on zero.
    pub fn invert(&self) -> Result<Fp6> {
        if self.is_zero() {
            return Err(Error::ZeroInversion {
                context: "fp6 inversion",
            });
        }
        // Adjugate-over-norm inversion for the cubic extension.
        let t0 = self.c0.square().sub(&self.c1.mul(&self.c2).mul_by_nonresidue());
        let t1 = self.c2.square().mul_by_nonresidue().sub(&self.c0.mul(&self.c1));
        let t2 = self.c1.square().sub(&self.c0.mul(&self.c2));
        let norm = self
            .c1
            .mul(&t2)
            .add(&self.c2.mul(&t1))
            .mul_by_nonresidue()
            .add(&self.c0.mul(&t0));
        let t = norm.invert()?;
        Ok(Fp6 {
            c0: t0.mul(&t),
            c1: t1.mul(&t),
            c2: t2.mul(&t),
        })
    }
}

impl TowerField for Fp6 {
    const DEGREE: usize = 6;

    fn zero() -> Fp6 {
        Fp6::zero()
    }

    fn one() -> Fp6 {
        Fp6::one()
    }

    fn is_zero(&self) -> bool {
        Fp6::is_zero(self)
    }

    fn add(&self, rhs: &Fp6) -> Fp6 {
        Fp6::add(self, rhs)
    }

    fn sub(&self, rhs: &Fp6) -> Fp6 {
        Fp6::sub(self, rhs)
    }

    fn mul(&self, rhs: &Fp6) -> Fp6 {
        Fp6::mul(self, rhs)
    }

    fn square(&self) -> Fp6 {
        Fp6::square(self)
    }

    fn invert(&self) -> Result<Fp6> {
        Fp6::invert(self)
    }

    fn frobenius_map(&self) -> Fp6 {
        Fp6::frobenius_map(self)
    }
}
