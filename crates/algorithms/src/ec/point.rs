//! Curve points and the operators on them: normalization, batched
//! normalization and the Frobenius endomorphism.

use crate::ec::{CoordKind, CurveContext};
use crate::error::{validate, Error, Result};
use crate::field::TowerField;

/// A curve point tagged with its coordinate system.
///
/// The point at infinity carries no meaningful coordinates; every operation
/// checks the flag before touching field values. For a finite point the z
/// coordinate is non-zero, which the fallible constructors enforce.
///
/// Equality is representation equality: the same group element in two
/// different coordinate systems (or at two different scales) compares
/// unequal until normalized.
#[derive(Clone, Debug, PartialEq)]
pub struct Point<F: TowerField> {
    pub(crate) x: F,
    pub(crate) y: F,
    pub(crate) z: F,
    coord: CoordKind,
    infinity: bool,
}

impl<F: TowerField> Point<F> {
    /// The point at infinity.
    ///
    /// Stored with z = 1 so that the coordinates stay inert even if they
    /// leak into field arithmetic that expects invertible values.
    pub fn infinity() -> Point<F> {
        Point {
            x: F::zero(),
            y: F::one(),
            z: F::one(),
            coord: CoordKind::Affine,
            infinity: true,
        }
    }

    /// A finite point in affine coordinates.
    pub fn affine(x: F, y: F) -> Point<F> {
        Point {
            x,
            y,
            z: F::one(),
            coord: CoordKind::Affine,
            infinity: false,
        }
    }

    /// A finite point in homogeneous projective coordinates.
    ///
    /// Rejects a zero z up front: a finite point with no defined affine
    /// image is a representation invariant breach, not a value.
    pub fn projective(x: F, y: F, z: F) -> Result<Point<F>> {
        validate::point_state(
            !z.is_zero(),
            "projective point",
            "finite point requires a non-zero z",
        )?;
        Ok(Point {
            x,
            y,
            z,
            coord: CoordKind::Projective,
            infinity: false,
        })
    }

    /// A finite point in Jacobian coordinates.
    pub fn jacobian(x: F, y: F, z: F) -> Result<Point<F>> {
        validate::point_state(
            !z.is_zero(),
            "jacobian point",
            "finite point requires a non-zero z",
        )?;
        Ok(Point {
            x,
            y,
            z,
            coord: CoordKind::Jacobian,
            infinity: false,
        })
    }

    /// Whether this is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.infinity
    }

    /// The coordinate system this point is stored in.
    #[inline]
    pub fn coord(&self) -> CoordKind {
        self.coord
    }

    /// The stored x coordinate.
    pub fn x(&self) -> &F {
        &self.x
    }

    /// The stored y coordinate.
    pub fn y(&self) -> &F {
        &self.y
    }

    /// The stored z coordinate.
    pub fn z(&self) -> &F {
        &self.z
    }

    /// Convert this point to affine coordinates.
    ///
    /// The point at infinity and points already in affine form pass through
    /// as plain copies without any field operation. For the scaled systems
    /// one inversion of z is followed by the per-system finishing formulas.
    pub fn normalize(&self) -> Result<Point<F>> {
        if self.infinity {
            return Ok(self.clone());
        }
        match self.coord {
            CoordKind::Affine => Ok(self.clone()),
            CoordKind::Projective | CoordKind::Jacobian => {
                let zinv = self.z.invert().map_err(|_| Error::InvalidPointState {
                    context: "normalize",
                    details: "finite point with non-invertible z",
                })?;
                Ok(self.finish_normalized(&zinv))
            }
        }
    }

    /// Convert a whole slice of points to affine coordinates with a single
    /// field inversion.
    ///
    /// Equivalent to mapping [`Point::normalize`] over the input, but the z
    /// coordinates of all finite points are inverted simultaneously.
    /// Infinite points are left out of the inversion entirely and reappear
    /// untouched in the output, so a batch may mix finite and infinite
    /// points freely; a batch with no finite points performs no inversion
    /// at all. On error no point in the batch is normalized.
    pub fn batch_normalize(points: &[Point<F>]) -> Result<Vec<Point<F>>> {
        let zs: Vec<F> = points
            .iter()
            .filter(|p| !p.infinity)
            .map(|p| p.z.clone())
            .collect();
        if zs.is_empty() {
            return Ok(points.to_vec());
        }

        let inverses = F::invert_batch(&zs)?;

        let mut out = Vec::with_capacity(points.len());
        let mut next = 0;
        for p in points {
            if p.infinity {
                out.push(p.clone());
            } else {
                out.push(p.finish_normalized(&inverses[next]));
                next += 1;
            }
        }
        Ok(out)
    }

    /// Finishing formulas shared by the single and batched paths; `zinv`
    /// is the already-inverted z of this finite point.
    fn finish_normalized(&self, zinv: &F) -> Point<F> {
        match self.coord {
            CoordKind::Affine => self.clone(),
            CoordKind::Projective => Point {
                x: self.x.mul(zinv),
                y: self.y.mul(zinv),
                z: F::one(),
                coord: CoordKind::Affine,
                infinity: false,
            },
            CoordKind::Jacobian => {
                let t = zinv.square();
                Point {
                    x: self.x.mul(&t),
                    y: self.y.mul(&t.mul(zinv)),
                    z: F::one(),
                    coord: CoordKind::Affine,
                    infinity: false,
                }
            }
        }
    }

    /// Apply the Frobenius endomorphism `power` times.
    ///
    /// Each application maps every coordinate through the field-level
    /// Frobenius automorphism and then rescales x and y by the context's
    /// twist constants; z picks up no constant. The coordinate system is
    /// preserved, and `power == 0` returns a plain copy. A negative count
    /// is rejected up front instead of degenerating into a copy.
    pub fn frobenius(&self, power: i64, ctx: &CurveContext<F>) -> Result<Point<F>> {
        validate::argument(
            power >= 0,
            "power",
            "Frobenius iteration count must be non-negative",
        )?;
        if self.infinity {
            return Ok(self.clone());
        }
        let mut r = self.clone();
        for _ in 0..power {
            r.x = r.x.frobenius_map().mul(ctx.twist_x());
            r.y = r.y.frobenius_map().mul(ctx.twist_y());
            r.z = r.z.frobenius_map();
        }
        Ok(r)
    }
}
