use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use super::{nonzero_fp2, random_fp2};
use crate::ec::Point;
use crate::field::Fp2;

/// A batch mixing every coordinate system with interleaved infinities.
fn mixed_batch(rng: &mut ChaCha20Rng) -> Vec<Point<Fp2>> {
    vec![
        Point::affine(random_fp2(rng), random_fp2(rng)),
        Point::projective(random_fp2(rng), random_fp2(rng), nonzero_fp2(rng)).unwrap(),
        Point::infinity(),
        Point::jacobian(random_fp2(rng), random_fp2(rng), nonzero_fp2(rng)).unwrap(),
        Point::projective(random_fp2(rng), random_fp2(rng), nonzero_fp2(rng)).unwrap(),
        Point::infinity(),
    ]
}

#[test]
fn test_batch_matches_individual_normalization() {
    let mut rng = ChaCha20Rng::seed_from_u64(200);
    let points = mixed_batch(&mut rng);

    let batch = Point::batch_normalize(&points).unwrap();
    assert_eq!(batch.len(), points.len());
    for (b, p) in batch.iter().zip(points.iter()) {
        assert_eq!(b, &p.normalize().unwrap());
    }
}

#[test]
fn test_batch_with_interior_infinity() {
    let mut rng = ChaCha20Rng::seed_from_u64(201);
    let mut points = Vec::new();
    for i in 0..5 {
        if i == 2 {
            points.push(Point::infinity());
        } else {
            points.push(
                Point::projective(random_fp2(&mut rng), random_fp2(&mut rng), nonzero_fp2(&mut rng))
                    .unwrap(),
            );
        }
    }

    let batch = Point::batch_normalize(&points).unwrap();
    assert_eq!(batch.len(), 5);
    assert!(batch[2].is_infinity());
    for (i, (b, p)) in batch.iter().zip(points.iter()).enumerate() {
        if i != 2 {
            assert!(!b.is_infinity());
        }
        assert_eq!(b, &p.normalize().unwrap());
    }
}

#[test]
fn test_batch_of_only_infinities() {
    let points = vec![Point::<Fp2>::infinity(); 4];
    let batch = Point::batch_normalize(&points).unwrap();
    assert_eq!(batch, points);
}

#[test]
fn test_empty_batch() {
    let batch = Point::<Fp2>::batch_normalize(&[]).unwrap();
    assert!(batch.is_empty());
}

#[test]
fn test_single_point_batch() {
    let mut rng = ChaCha20Rng::seed_from_u64(202);
    let p = Point::jacobian(random_fp2(&mut rng), random_fp2(&mut rng), nonzero_fp2(&mut rng))
        .unwrap();

    let batch = Point::batch_normalize(&[p.clone()]).unwrap();
    assert_eq!(batch, vec![p.normalize().unwrap()]);
}

#[test]
fn test_batch_is_order_equivariant() {
    let mut rng = ChaCha20Rng::seed_from_u64(203);
    let points = mixed_batch(&mut rng);
    let reversed: Vec<Point<Fp2>> = points.iter().rev().cloned().collect();

    let forward = Point::batch_normalize(&points).unwrap();
    let backward = Point::batch_normalize(&reversed).unwrap();

    for (f, b) in forward.iter().zip(backward.iter().rev()) {
        assert_eq!(f, b);
    }
}
