//! The quadratic twist of BLS12-381: y² = x³ + 4(u+1) over Fp2
//!
//! This is the blessed instantiation of the generic point layer. The twist
//! constants and generator come from the params crate as Montgomery-form
//! limb tables and are turned into live field elements here.

use extpoint_params::bls12_381::{BLS12_381_TWIST_CURVE, BLS12_381_TWIST_FROBENIUS};

use crate::ec::{CurveContext, Point};
use crate::error::Result;
use crate::field::Fp2;

/// The Frobenius context for the twist.
///
/// Every call returns a fresh value; callers that apply the endomorphism in
/// a loop should build the context once and pass it by reference.
pub fn context() -> CurveContext<Fp2> {
    CurveContext::new(
        Fp2::from_raw_unchecked(BLS12_381_TWIST_FROBENIUS.x_c0, BLS12_381_TWIST_FROBENIUS.x_c1),
        Fp2::from_raw_unchecked(BLS12_381_TWIST_FROBENIUS.y_c0, BLS12_381_TWIST_FROBENIUS.y_c1),
    )
}

/// The x rescaling constant of the squared endomorphism, 1/2^((p-1)/3).
pub fn psi2_x() -> Fp2 {
    Fp2::from_raw_unchecked(BLS12_381_TWIST_FROBENIUS.psi2_x_c0, [0u64; 6])
}

/// The curve constant B' = 4(u+1) of the twist.
pub fn twist_b() -> Fp2 {
    Fp2::from_raw_unchecked(BLS12_381_TWIST_CURVE.b, BLS12_381_TWIST_CURVE.b)
}

/// The standard generator of the twist, in affine coordinates.
pub fn generator() -> Point<Fp2> {
    Point::affine(
        Fp2::from_raw_unchecked(BLS12_381_TWIST_CURVE.g_x_c0, BLS12_381_TWIST_CURVE.g_x_c1),
        Fp2::from_raw_unchecked(BLS12_381_TWIST_CURVE.g_y_c0, BLS12_381_TWIST_CURVE.g_y_c1),
    )
}

/// Check whether a point satisfies the twist equation y² = x³ + B'.
///
/// The point is normalized first, so any coordinate system is accepted; the
/// point at infinity is on the curve by convention.
pub fn is_on_twist(p: &Point<Fp2>) -> Result<bool> {
    let p = p.normalize()?;
    if p.is_infinity() {
        return Ok(true);
    }
    let lhs = p.y().square();
    let rhs = p.x().square().mul(p.x()).add(&twist_b());
    Ok(lhs == rhs)
}
