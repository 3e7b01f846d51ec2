//! Tests for the point layer

use rand::RngCore;
use rand_chacha::ChaCha20Rng;

use crate::field::{Fp, Fp2};

mod batch;
mod normalize;
mod properties;

/// Deterministic field element below the modulus by construction.
fn random_fp(rng: &mut ChaCha20Rng) -> Fp {
    let mut bytes = [0u8; 48];
    rng.fill_bytes(&mut bytes);
    bytes[0] = 0;
    Fp::from_bytes(&bytes).unwrap()
}

fn random_fp2(rng: &mut ChaCha20Rng) -> Fp2 {
    Fp2::new(random_fp(rng), random_fp(rng))
}

fn nonzero_fp2(rng: &mut ChaCha20Rng) -> Fp2 {
    loop {
        let v = random_fp2(rng);
        if !v.is_zero() {
            return v;
        }
    }
}
