//! Quartic extension `Fp4 = Fp2[s] / (s² - ξ)` with ξ = u + 1

use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::field::fp::P_MINUS_1_OVER_2;
use crate::field::fp2::Fp2;
use crate::field::TowerField;

/// Element c0 + c1·s of the quartic extension, with s² = ξ.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Fp4 {
    pub(crate) c0: Fp2,
    pub(crate) c1: Fp2,
}

impl Default for Fp4 {
    fn default() -> Fp4 {
        Fp4::zero()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Fp4 {}

/// Frobenius constant γ = ξ^((p-1)/2), derived once per process.
///
/// s^p = γ·s, so one Frobenius application conjugates the coefficients and
/// rescales the s coefficient by γ.
fn frobenius_gamma() -> &'static Fp2 {
    static GAMMA: OnceLock<Fp2> = OnceLock::new();
    GAMMA.get_or_init(|| Fp2::NONRESIDUE.pow_vartime(&P_MINUS_1_OVER_2))
}

impl Fp4 {
    /// The additive identity: 0
    #[inline]
    pub const fn zero() -> Fp4 {
        Fp4 {
            c0: Fp2::zero(),
            c1: Fp2::zero(),
        }
    }

    /// The multiplicative identity: 1
    #[inline]
    pub const fn one() -> Fp4 {
        Fp4 {
            c0: Fp2::one(),
            c1: Fp2::zero(),
        }
    }

    /// Assemble an element from its two coefficients.
    pub const fn new(c0: Fp2, c1: Fp2) -> Fp4 {
        Fp4 { c0, c1 }
    }

    /// Check if the element is zero
    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    /// Field addition
    pub fn add(&self, rhs: &Fp4) -> Fp4 {
        Fp4 {
            c0: self.c0.add(&rhs.c0),
            c1: self.c1.add(&rhs.c1),
        }
    }

    /// Field subtraction
    pub fn sub(&self, rhs: &Fp4) -> Fp4 {
        Fp4 {
            c0: self.c0.sub(&rhs.c0),
            c1: self.c1.sub(&rhs.c1),
        }
    }

    /// Additive inverse
    pub fn negate(&self) -> Fp4 {
        Fp4 {
            c0: self.c0.negate(),
            c1: self.c1.negate(),
        }
    }

    /// Field multiplication
    pub fn mul(&self, rhs: &Fp4) -> Fp4 {
        // (a0 + a1 s)(b0 + b1 s) = a0 b0 + ξ a1 b1 + (a0 b1 + a1 b0) s
        let t0 = self.c0.mul(&rhs.c0);
        let t1 = self.c1.mul(&rhs.c1);
        Fp4 {
            c0: t0.add(&t1.mul_by_nonresidue()),
            c1: self.c0.mul(&rhs.c1).add(&self.c1.mul(&rhs.c0)),
        }
    }

    /// Field squaring
    pub fn square(&self) -> Fp4 {
        let t = self.c0.mul(&self.c1);
        Fp4 {
            c0: self.c0.square().add(&self.c1.square().mul_by_nonresidue()),
            c1: t.add(&t),
        }
    }

    /// One application of the Frobenius automorphism.
    pub fn frobenius_map(&self) -> Fp4 {
        Fp4 {
            c0: self.c0.conjugate(),
            c1: self.c1.conjugate().mul(frobenius_gamma()),
        }
    }

    /// Multiplicative inverse; fails on zero.
    pub fn invert(&self) -> Result<Fp4> {
        if self.is_zero() {
            return Err(Error::ZeroInversion {
                context: "fp4 inversion",
            });
        }
        // The conjugation s ↦ -s gives the norm a0² - ξ a1² in Fp2.
        let norm = self.c0.square().sub(&self.c1.square().mul_by_nonresidue());
        let t = norm.invert()?;
        Ok(Fp4 {
            c0: self.c0.mul(&t),
            c1: self.c1.negate().mul(&t),
        })
    }
}

impl TowerField for Fp4 {
    const DEGREE: usize = 4;

    fn zero() -> Fp4 {
        Fp4::zero()
    }

    fn one() -> Fp4 {
        Fp4::one()
    }

    fn is_zero(&self) -> bool {
        Fp4::is_zero(self)
    }

    fn add(&self, rhs: &Fp4) -> Fp4 {
        Fp4::add(self, rhs)
    }

    fn sub(&self, rhs: &Fp4) -> Fp4 {
        Fp4::sub(self, rhs)
    }

    fn mul(&self, rhs: &Fp4) -> Fp4 {
        Fp4::mul(self, rhs)
    }

    fn square(&self) -> Fp4 {
        Fp4::square(self)
    }

    fn invert(&self) -> Result<Fp4> {
        Fp4::invert(self)
    }

    fn frobenius_map(&self) -> Fp4 {
        Fp4::frobenius_map(self)
    }
}
