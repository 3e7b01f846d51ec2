//! Base field `GF(p)` where p = 0x1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab

use core::fmt;

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::error::{Error, Result};
use crate::field::TowerField;

/// Number of 64-bit limbs per field element (6 × 64 = 384 bits)
const NLIMBS: usize = 6;

/// Size of a serialized field element in bytes
pub const FP_ELEMENT_SIZE: usize = 48;

// ============================================================================
// Arithmetic helpers
// ============================================================================

/// Compute a + b + carry, returning (result, carry). Carry is 0 or 1.
#[inline(always)]
const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// Compute a - (b + borrow), returning (result, borrow). Borrow is 0 or 1.
#[inline(always)]
const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let t = (a as u128).wrapping_sub((b as u128) + (borrow as u128));
    (t as u64, ((t >> 64) as u64) & 1)
}

/// Compute a + (b * c) + carry, returning (result, carry).
#[inline(always)]
const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) * (c as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// Shift a 384-bit little-endian limb value right by one bit.
const fn shr1(v: [u64; NLIMBS]) -> [u64; NLIMBS] {
    let mut out = [0u64; NLIMBS];
    let mut i = 0;
    while i < NLIMBS {
        out[i] = v[i] >> 1;
        if i + 1 < NLIMBS {
            out[i] |= v[i + 1] << 63;
        }
        i += 1;
    }
    out
}

/// Exact division of a 384-bit little-endian limb value by three.
const fn div3(v: [u64; NLIMBS]) -> [u64; NLIMBS] {
    let mut out = [0u64; NLIMBS];
    let mut rem: u128 = 0;
    let mut i = NLIMBS;
    while i > 0 {
        i -= 1;
        let cur = (rem << 64) | (v[i] as u128);
        out[i] = (cur / 3) as u64;
        rem = cur % 3;
    }
    out
}

// ============================================================================
// Field constants
// ============================================================================

/// Field modulus p, little-endian limbs
const MODULUS: [u64; NLIMBS] = [
    0xb9fe_ffff_ffff_aaab,
    0x1eab_fffe_b153_ffff,
    0x6730_d2a0_f6b0_f624,
    0x6477_4b84_f385_12bf,
    0x4b1b_a7b6_434b_acd7,
    0x1a01_11ea_397f_e69a,
];

/// Montgomery parameter INV = -(p^{-1} mod 2^64) mod 2^64
const INV: u64 = 0x89f3_fffc_fffc_fffd;

/// Montgomery R = 2^384 mod p
const R: Fp = Fp([
    0x7609_0000_0002_fffd,
    0xebf4_000b_c40c_0002,
    0x5f48_9857_53c7_58ba,
    0x77ce_5853_7052_5745,
    0x5c07_1a97_a256_ec6d,
    0x15f6_5ec3_fa80_e493,
]);

/// Montgomery R^2 = 2^768 mod p
const R2: Fp = Fp([
    0xf4df_1f34_1c34_1746,
    0x0a76_e6a6_09d1_04f1,
    0x8de5_476c_4c95_b6d5,
    0x67eb_88a9_939d_83c0,
    0x9a79_3e85_b519_952d,
    0x1198_8fe5_92ca_e3aa,
]);

/// Exponent p - 2 for Fermat inversion
const P_MINUS_2: [u64; NLIMBS] = [
    0xb9fe_ffff_ffff_aaa9,
    0x1eab_fffe_b153_ffff,
    0x6730_d2a0_f6b0_f624,
    0x6477_4b84_f385_12bf,
    0x4b1b_a7b6_434b_acd7,
    0x1a01_11ea_397f_e69a,
];

/// p - 1, the group order of the multiplicative group
const P_MINUS_1: [u64; NLIMBS] = [
    0xb9fe_ffff_ffff_aaaa,
    0x1eab_fffe_b153_ffff,
    0x6730_d2a0_f6b0_f624,
    0x6477_4b84_f385_12bf,
    0x4b1b_a7b6_434b_acd7,
    0x1a01_11ea_397f_e69a,
];

/// (p - 1) / 2, the exponent of the quadratic character
pub(crate) const P_MINUS_1_OVER_2: [u64; NLIMBS] = shr1(P_MINUS_1);

/// (p - 1) / 3, the exponent of the cubic character (p ≡ 1 mod 3)
pub(crate) const P_MINUS_1_OVER_3: [u64; NLIMBS] = div3(P_MINUS_1);

// ============================================================================
// Field element type
// ============================================================================

/// Element of the base prime field, stored as six little-endian 64-bit limbs
/// in Montgomery form: `Fp(a)` holds aR mod p with R = 2^384.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Fp(pub(crate) [u64; NLIMBS]);

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for b in self.to_bytes().iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl Default for Fp {
    fn default() -> Fp {
        Fp::zero()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Fp {}

impl ConstantTimeEq for Fp {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl ConditionallySelectable for Fp {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = [0u64; NLIMBS];
        for (i, limb) in out.iter_mut().enumerate() {
            *limb = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        Fp(out)
    }
}

/// Read limb `idx` (little-endian limb order) out of a big-endian byte string.
#[inline(always)]
fn be_limb(bytes: &[u8; FP_ELEMENT_SIZE], idx: usize) -> u64 {
    let o = (NLIMBS - 1 - idx) * 8;
    u64::from_be_bytes([
        bytes[o],
        bytes[o + 1],
        bytes[o + 2],
        bytes[o + 3],
        bytes[o + 4],
        bytes[o + 5],
        bytes[o + 6],
        bytes[o + 7],
    ])
}

impl Fp {
    /// The additive identity: 0
    #[inline]
    pub const fn zero() -> Fp {
        Fp([0u64; NLIMBS])
    }

    /// The multiplicative identity: 1
    #[inline]
    pub const fn one() -> Fp {
        R
    }

    /// Build an element directly from Montgomery-form limbs.
    ///
    /// The caller is responsible for the limbs being canonical (below the
    /// modulus) and already in Montgomery form.
    pub(crate) const fn from_raw_unchecked(v: [u64; NLIMBS]) -> Fp {
        Fp(v)
    }

    /// Build a field element from a small literal.
    pub fn from_u64(n: u64) -> Fp {
        Fp([n, 0, 0, 0, 0, 0]).mul(&R2)
    }

    /// Check if the element is zero
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    /// Create a field element from big-endian bytes.
    /// Validates that the value < p; returns Err otherwise.
    pub fn from_bytes(bytes: &[u8; FP_ELEMENT_SIZE]) -> Result<Fp> {
        let mut limbs = [0u64; NLIMBS];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = be_limb(bytes, i);
        }

        // borrow == 0 means limbs >= p
        let mut borrow = 0u64;
        for i in 0..NLIMBS {
            let (_, b) = sbb(limbs[i], MODULUS[i], borrow);
            borrow = b;
        }
        if borrow == 0 {
            return Err(Error::InvalidArgument {
                name: "bytes",
                reason: "value is not below the field modulus",
            });
        }

        // Convert to Montgomery form: limbs * R^2 * R^{-1} = limbs * R
        Ok(Fp(limbs).mul(&R2))
    }

    /// Convert this field element into big-endian bytes.
    pub fn to_bytes(&self) -> [u8; FP_ELEMENT_SIZE] {
        // Leave Montgomery form: reduce (a, 0) to a * R^{-1} mod p.
        let mut t = [0u64; NLIMBS * 2];
        t[..NLIMBS].copy_from_slice(&self.0);
        let raw = Fp::montgomery_reduce(&t);

        let mut out = [0u8; FP_ELEMENT_SIZE];
        for (i, limb) in raw.0.iter().enumerate() {
            let o = (NLIMBS - 1 - i) * 8;
            out[o..o + 8].copy_from_slice(&limb.to_be_bytes());
        }
        out
    }

    /// Reduce once if the value is at or above the modulus.
    #[inline]
    const fn subtract_p(&self) -> Fp {
        let (r0, borrow) = sbb(self.0[0], MODULUS[0], 0);
        let (r1, borrow) = sbb(self.0[1], MODULUS[1], borrow);
        let (r2, borrow) = sbb(self.0[2], MODULUS[2], borrow);
        let (r3, borrow) = sbb(self.0[3], MODULUS[3], borrow);
        let (r4, borrow) = sbb(self.0[4], MODULUS[4], borrow);
        let (r5, borrow) = sbb(self.0[5], MODULUS[5], borrow);

        // borrow == 1 iff self < p; keep self in that case
        let mask = 0u64.wrapping_sub(borrow);
        Fp([
            (self.0[0] & mask) | (r0 & !mask),
            (self.0[1] & mask) | (r1 & !mask),
            (self.0[2] & mask) | (r2 & !mask),
            (self.0[3] & mask) | (r3 & !mask),
            (self.0[4] & mask) | (r4 & !mask),
            (self.0[5] & mask) | (r5 & !mask),
        ])
    }

    /// Field addition: (self + rhs) mod p
    pub fn add(&self, rhs: &Fp) -> Fp {
        let (d0, carry) = adc(self.0[0], rhs.0[0], 0);
        let (d1, carry) = adc(self.0[1], rhs.0[1], carry);
        let (d2, carry) = adc(self.0[2], rhs.0[2], carry);
        let (d3, carry) = adc(self.0[3], rhs.0[3], carry);
        let (d4, carry) = adc(self.0[4], rhs.0[4], carry);
        let (d5, _) = adc(self.0[5], rhs.0[5], carry);

        // Both inputs are below p < 2^381, so the sum fits in six limbs.
        Fp([d0, d1, d2, d3, d4, d5]).subtract_p()
    }

    /// Field subtraction: (self - rhs) mod p
    pub fn sub(&self, rhs: &Fp) -> Fp {
        let (d0, borrow) = sbb(self.0[0], rhs.0[0], 0);
        let (d1, borrow) = sbb(self.0[1], rhs.0[1], borrow);
        let (d2, borrow) = sbb(self.0[2], rhs.0[2], borrow);
        let (d3, borrow) = sbb(self.0[3], rhs.0[3], borrow);
        let (d4, borrow) = sbb(self.0[4], rhs.0[4], borrow);
        let (d5, borrow) = sbb(self.0[5], rhs.0[5], borrow);
        let diff = Fp([d0, d1, d2, d3, d4, d5]);

        // If the subtraction borrowed, wrap around by adding p back.
        let (e0, carry) = adc(d0, MODULUS[0], 0);
        let (e1, carry) = adc(d1, MODULUS[1], carry);
        let (e2, carry) = adc(d2, MODULUS[2], carry);
        let (e3, carry) = adc(d3, MODULUS[3], carry);
        let (e4, carry) = adc(d4, MODULUS[4], carry);
        let (e5, _) = adc(d5, MODULUS[5], carry);
        let wrapped = Fp([e0, e1, e2, e3, e4, e5]);

        Fp::conditional_select(&diff, &wrapped, Choice::from(borrow as u8))
    }

    /// Negate this field element: p - self if non-zero, else zero
    pub fn negate(&self) -> Fp {
        if self.is_zero() {
            return Fp::zero();
        }
        let (d0, borrow) = sbb(MODULUS[0], self.0[0], 0);
        let (d1, borrow) = sbb(MODULUS[1], self.0[1], borrow);
        let (d2, borrow) = sbb(MODULUS[2], self.0[2], borrow);
        let (d3, borrow) = sbb(MODULUS[3], self.0[3], borrow);
        let (d4, borrow) = sbb(MODULUS[4], self.0[4], borrow);
        let (d5, _) = sbb(MODULUS[5], self.0[5], borrow);
        Fp([d0, d1, d2, d3, d4, d5])
    }

    /// Field multiplication: (self * rhs) mod p
    ///
    /// Schoolbook 6×6 product followed by Montgomery reduction.
    pub fn mul(&self, rhs: &Fp) -> Fp {
        let mut t = [0u64; NLIMBS * 2];
        for i in 0..NLIMBS {
            let mut carry = 0u64;
            for j in 0..NLIMBS {
                let (lo, hi) = mac(t[i + j], self.0[i], rhs.0[j], carry);
                t[i + j] = lo;
                carry = hi;
            }
            t[i + NLIMBS] = carry;
        }
        Fp::montgomery_reduce(&t)
    }

    /// Field squaring: (self²) mod p
    #[inline(always)]
    pub fn square(&self) -> Fp {
        self.mul(self)
    }

    /// Montgomery reduction of a 768-bit product to a canonical element.
    fn montgomery_reduce(t: &[u64; NLIMBS * 2]) -> Fp {
        let mut r = *t;
        let mut carry2 = 0u64;
        for i in 0..NLIMBS {
            let k = r[i].wrapping_mul(INV);
            let mut carry = 0u64;
            for j in 0..NLIMBS {
                let (lo, hi) = mac(r[i + j], k, MODULUS[j], carry);
                r[i + j] = lo;
                carry = hi;
            }
            let (lo, hi) = adc(r[i + NLIMBS], carry2, carry);
            r[i + NLIMBS] = lo;
            carry2 = hi;
        }
        Fp([r[6], r[7], r[8], r[9], r[10], r[11]]).subtract_p()
    }

    /// Exponentiation by a 384-bit exponent, variable time in the exponent.
    pub fn pow_vartime(&self, exp: &[u64; NLIMBS]) -> Fp {
        let mut res = Fp::one();
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

    /// Compute the multiplicative inverse via Fermat: self^(p-2) mod p
    pub fn invert(&self) -> Result<Fp> {
        if self.is_zero() {
            return Err(Error::ZeroInversion {
                context: "prime field inversion",
            });
        }
        Ok(self.pow_vartime(&P_MINUS_2))
    }
}

impl TowerField for Fp {
    const DEGREE: usize = 1;

    fn zero() -> Fp {
        Fp::zero()
    }

    fn one() -> Fp {
        Fp::one()
    }

    fn is_zero(&self) -> bool {
        Fp::is_zero(self)
    }

    fn add(&self, rhs: &Fp) -> Fp {
        Fp::add(self, rhs)
    }

    fn sub(&self, rhs: &Fp) -> Fp {
        Fp::sub(self, rhs)
    }

    fn mul(&self, rhs: &Fp) -> Fp {
        Fp::mul(self, rhs)
    }

    fn square(&self) -> Fp {
        Fp::square(self)
    }

    fn invert(&self) -> Result<Fp> {
        Fp::invert(self)
    }

    // The p-power map fixes the base field.
    fn frobenius_map(&self) -> Fp {
        *self
    }
}
