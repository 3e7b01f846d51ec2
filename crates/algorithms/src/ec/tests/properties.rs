//! Property tests over randomly generated point representations.

use proptest::prelude::*;

use crate::ec::{g2, CoordKind, Point};
use crate::field::{Fp, Fp2};

fn arb_fp2() -> impl Strategy<Value = Fp2> {
    (any::<u64>(), any::<u64>())
        .prop_map(|(a, b)| Fp2::new(Fp::from_u64(a), Fp::from_u64(b)))
}

fn arb_point() -> impl Strategy<Value = Point<Fp2>> {
    (arb_fp2(), arb_fp2(), any::<u64>(), any::<u64>(), 0u8..3, any::<bool>()).prop_map(
        |(x, y, z0, z1, tag, infinite)| {
            if infinite {
                return Point::infinity();
            }
            // Forcing the low bit keeps z non-zero.
            let z = Fp2::new(Fp::from_u64(z0 | 1), Fp::from_u64(z1));
            match CoordKind::from_tag(tag).unwrap() {
                CoordKind::Affine => Point::affine(x, y),
                CoordKind::Projective => Point::projective(x, y, z).unwrap(),
                CoordKind::Jacobian => Point::jacobian(x, y, z).unwrap(),
            }
        },
    )
}

proptest! {
    #[test]
    fn batch_matches_pointwise_normalization(
        points in proptest::collection::vec(arb_point(), 0..12)
    ) {
        let batch = Point::batch_normalize(&points).unwrap();
        prop_assert_eq!(batch.len(), points.len());
        for (b, p) in batch.iter().zip(points.iter()) {
            prop_assert_eq!(b, &p.normalize().unwrap());
        }
    }

    #[test]
    fn normalization_is_idempotent(p in arb_point()) {
        let once = p.normalize().unwrap();
        prop_assert_eq!(once.normalize().unwrap(), once);
    }

    #[test]
    fn frobenius_applications_compose(p in arb_point(), i in 0i64..4, j in 0i64..4) {
        let ctx = g2::context();
        let split = p.frobenius(i, &ctx).unwrap().frobenius(j, &ctx).unwrap();
        let joint = p.frobenius(i + j, &ctx).unwrap();
        prop_assert_eq!(split, joint);
    }
}
