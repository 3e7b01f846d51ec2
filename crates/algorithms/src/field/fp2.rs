//! Quadratic extension `Fp2 = Fp[u] / (u² + 1)`

use crate::error::{Error, Result};
use crate::field::fp::Fp;
use crate::field::TowerField;

use subtle::{Choice, ConditionallySelectable};

/// Element c0 + c1·u of the quadratic extension, with u² = -1.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Fp2 {
    pub(crate) c0: Fp,
    pub(crate) c1: Fp,
}

impl Default for Fp2 {
    fn default() -> Fp2 {
        Fp2::zero()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Fp2 {}

impl ConditionallySelectable for Fp2 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp2 {
            c0: Fp::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl Fp2 {
    /// The quadratic and cubic non-residue ξ = u + 1 used by the higher
    /// towers.
    pub(crate) const NONRESIDUE: Fp2 = Fp2 {
        c0: Fp::one(),
        c1: Fp::one(),
    };

    /// The additive identity: 0
    #[inline]
    pub const fn zero() -> Fp2 {
        Fp2 {
            c0: Fp::zero(),
            c1: Fp::zero(),
        }
    }

    /// The multiplicative identity: 1
    #[inline]
    pub const fn one() -> Fp2 {
        Fp2 {
            c0: Fp::one(),
            c1: Fp::zero(),
        }
    }

    /// Assemble an element from its two coefficients.
    pub const fn new(c0: Fp, c1: Fp) -> Fp2 {
        Fp2 { c0, c1 }
    }

    /// Assemble an element directly from Montgomery-form limb tables.
    pub(crate) const fn from_raw_unchecked(c0: [u64; 6], c1: [u64; 6]) -> Fp2 {
        Fp2 {
            c0: Fp::from_raw_unchecked(c0),
            c1: Fp::from_raw_unchecked(c1),
        }
    }

    /// Check if the element is zero
    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    /// Field addition
    pub fn add(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: self.c0.add(&rhs.c0),
            c1: self.c1.add(&rhs.c1),
        }
    }

    /// Field subtraction
    pub fn sub(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: self.c0.sub(&rhs.c0),
            c1: self.c1.sub(&rhs.c1),
        }
    }

    /// Additive inverse
    pub fn negate(&self) -> Fp2 {
        Fp2 {
            c0: self.c0.negate(),
            c1: self.c1.negate(),
        }
    }

    /// Field multiplication
    pub fn mul(&self, rhs: &Fp2) -> Fp2 {
        // (a0 + a1 u)(b0 + b1 u) = a0 b0 - a1 b1 + (a0 b1 + a1 b0) u
        Fp2 {
            c0: self.c0.mul(&rhs.c0).sub(&self.c1.mul(&rhs.c1)),
            c1: self.c0.mul(&rhs.c1).add(&self.c1.mul(&rhs.c0)),
        }
    }

    /// Field squaring
    pub fn square(&self) -> Fp2 {
        // (a0 + a1 u)² = (a0 + a1)(a0 - a1) + 2 a0 a1 u
        let t = self.c0.mul(&self.c1);
        Fp2 {
            c0: self.c0.add(&self.c1).mul(&self.c0.sub(&self.c1)),
            c1: t.add(&t),
        }
    }

    /// Multiply by the non-residue ξ = u + 1.
    pub fn mul_by_nonresidue(&self) -> Fp2 {
        // (c0 + c1 u)(1 + u) = c0 - c1 + (c0 + c1) u
        Fp2 {
            c0: self.c0.sub(&self.c1),
            c1: self.c0.add(&self.c1),
        }
    }

    /// Complex conjugation c0 - c1·u.
    pub fn conjugate(&self) -> Fp2 {
        Fp2 {
            c0: self.c0,
            c1: self.c1.negate(),
        }
    }

    /// One application of the Frobenius automorphism.
    ///
    /// For p ≡ 3 mod 4 this is exactly conjugation.
    pub fn frobenius_map(&self) -> Fp2 {
        self.conjugate()
    }

    /// Multiplicative inverse; fails on zero.
    pub fn invert(&self) -> Result<Fp2> {
        if self.is_zero() {
            return Err(Error::ZeroInversion {
                context: "fp2 inversion",
            });
        }
        // 1 / (c0 + c1 u) = (c0 - c1 u) / (c0² + c1²)
        let norm = self.c0.square().add(&self.c1.square());
        let t = norm.invert()?;
        Ok(Fp2 {
            c0: self.c0.mul(&t),
            c1: self.c1.negate().mul(&t),
        })
    }

    /// Exponentiation by a 384-bit exponent, variable time in the exponent.
    pub fn pow_vartime(&self, exp: &[u64; 6]) -> Fp2 {
        let mut res = Fp2::one();
        for limb in exp.iter().rev() {
            for bit in (0..64).rev() {
                res = res.square();
                if (limb >> bit) & 1 == 1 {
                    res = res.mul(self);
                }
            }
        }
        res
    }
}

impl TowerField for Fp2 {
    const DEGREE: usize = 2;

    fn zero() -> Fp2 {
        Fp2::zero()
    }

    fn one() -> Fp2 {
        Fp2::one()
    }

    fn is_zero(&self) -> bool {
        Fp2::is_zero(self)
    }

    fn add(&self, rhs: &Fp2) -> Fp2 {
        Fp2::add(self, rhs)
    }

    fn sub(&self, rhs: &Fp2) -> Fp2 {
        Fp2::sub(self, rhs)
    }

    fn mul(&self, rhs: &Fp2) -> Fp2 {
        Fp2::mul(self, rhs)
    }

    fn square(&self) -> Fp2 {
        Fp2::square(self)
    }

    fn invert(&self) -> Result<Fp2> {
        Fp2::invert(self)
    }

    fn frobenius_map(&self) -> Fp2 {
        Fp2::frobenius_map(self)
    }
}
