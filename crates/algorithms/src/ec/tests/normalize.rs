use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use super::{nonzero_fp2, random_fp2};
use crate::ec::{g2, CoordKind, Point};
use crate::error::Error;
use crate::field::{Fp, Fp2, Fp6};

#[test]
fn test_affine_point_passes_through() {
    let mut rng = ChaCha20Rng::seed_from_u64(100);
    let p = Point::affine(random_fp2(&mut rng), random_fp2(&mut rng));
    let n = p.normalize().unwrap();
    assert_eq!(n, p);
    assert_eq!(n.coord(), CoordKind::Affine);
}

#[test]
fn test_infinity_passes_through() {
    let inf = Point::<Fp2>::infinity();
    let n = inf.normalize().unwrap();
    assert!(n.is_infinity());
    assert_eq!(n, inf);
}

#[test]
fn test_projective_matches_reference_conversion() {
    let mut rng = ChaCha20Rng::seed_from_u64(101);
    let x = random_fp2(&mut rng);
    let y = random_fp2(&mut rng);
    let z = nonzero_fp2(&mut rng);

    let n = Point::projective(x, y, z).unwrap().normalize().unwrap();

    let zinv = z.invert().unwrap();
    assert_eq!(n.coord(), CoordKind::Affine);
    assert_eq!(n.x(), &x.mul(&zinv));
    assert_eq!(n.y(), &y.mul(&zinv));
    assert_eq!(n.z(), &Fp2::one());
}

#[test]
fn test_jacobian_matches_reference_conversion() {
    let mut rng = ChaCha20Rng::seed_from_u64(102);
    let x = random_fp2(&mut rng);
    let y = random_fp2(&mut rng);
    let z = nonzero_fp2(&mut rng);

    let n = Point::jacobian(x, y, z).unwrap().normalize().unwrap();

    let zinv = z.invert().unwrap();
    let zinv2 = zinv.square();
    assert_eq!(n.coord(), CoordKind::Affine);
    assert_eq!(n.x(), &x.mul(&zinv2));
    assert_eq!(n.y(), &y.mul(&zinv2.mul(&zinv)));
}

#[test]
fn test_projective_scaling_recovers_generator() {
    let mut rng = ChaCha20Rng::seed_from_u64(103);
    let g = g2::generator();
    let s = nonzero_fp2(&mut rng);

    let p = Point::projective(g.x().mul(&s), g.y().mul(&s), s).unwrap();
    assert_eq!(p.normalize().unwrap(), g);
}

#[test]
fn test_jacobian_scaling_recovers_generator() {
    let mut rng = ChaCha20Rng::seed_from_u64(104);
    let g = g2::generator();
    let s = nonzero_fp2(&mut rng);
    let s2 = s.square();

    let p = Point::jacobian(g.x().mul(&s2), g.y().mul(&s2.mul(&s)), s).unwrap();
    assert_eq!(p.normalize().unwrap(), g);
}

#[test]
fn test_normalize_is_idempotent() {
    let mut rng = ChaCha20Rng::seed_from_u64(105);
    let p = Point::jacobian(
        random_fp2(&mut rng),
        random_fp2(&mut rng),
        nonzero_fp2(&mut rng),
    )
    .unwrap();

    let once = p.normalize().unwrap();
    assert_eq!(once.normalize().unwrap(), once);
}

#[test]
fn test_cubic_tower_projective_conversion() {
    // Projective point over the cubic extension of the quadratic base,
    // with z far from one.
    let x = Fp6::new(
        Fp2::new(Fp::from_u64(11), Fp::from_u64(5)),
        Fp2::new(Fp::from_u64(7), Fp::from_u64(19)),
        Fp2::new(Fp::from_u64(2), Fp::from_u64(3)),
    );
    let y = Fp6::new(
        Fp2::new(Fp::from_u64(23), Fp::from_u64(1)),
        Fp2::new(Fp::from_u64(0), Fp::from_u64(29)),
        Fp2::new(Fp::from_u64(31), Fp::from_u64(4)),
    );
    let z = Fp6::new(
        Fp2::new(Fp::from_u64(1), Fp::from_u64(2)),
        Fp2::new(Fp::from_u64(3), Fp::from_u64(0)),
        Fp2::new(Fp::from_u64(0), Fp::from_u64(5)),
    );

    let n = Point::projective(x, y, z).unwrap().normalize().unwrap();

    let zinv = z.invert().unwrap();
    assert_eq!(n.coord(), CoordKind::Affine);
    assert_eq!(n.x(), &x.mul(&zinv));
    assert_eq!(n.y(), &y.mul(&zinv));
}

#[test]
fn test_constructors_reject_zero_z() {
    let mut rng = ChaCha20Rng::seed_from_u64(106);
    let x = random_fp2(&mut rng);
    let y = random_fp2(&mut rng);

    match Point::projective(x, y, Fp2::zero()) {
        Err(Error::InvalidPointState { .. }) => {}
        other => panic!("expected InvalidPointState, got {:?}", other),
    }
    match Point::jacobian(x, y, Fp2::zero()) {
        Err(Error::InvalidPointState { .. }) => {}
        other => panic!("expected InvalidPointState, got {:?}", other),
    }
}

#[test]
fn test_coord_tag_round_trip() {
    for kind in [CoordKind::Affine, CoordKind::Projective, CoordKind::Jacobian] {
        assert_eq!(CoordKind::from_tag(kind.tag()).unwrap(), kind);
    }
}

#[test]
fn test_unknown_coord_tag_rejected() {
    match CoordKind::from_tag(7) {
        Err(Error::UnsupportedCoordinateSystem { tag: 7 }) => {}
        other => panic!("expected UnsupportedCoordinateSystem, got {:?}", other),
    }
}
