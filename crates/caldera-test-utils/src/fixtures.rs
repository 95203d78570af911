//! Deterministic field fixtures.

use caldera_grid::{HeatField, Phase};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A field whose `phase` holds uniform values in `[0, 40)` drawn from a
/// ChaCha8 stream seeded with `seed`. The other phase is zero.
pub fn random_field(size: usize, phase: Phase, seed: u64) -> HeatField {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut field = HeatField::new(size);
    for v in field.phase_mut(phase) {
        *v = unit(&mut rng) * 40.0;
    }
    field
}

/// A field whose `phase` holds `value(x)` in every cell of row `x`.
pub fn row_constant_field(size: usize, phase: Phase, value: impl Fn(usize) -> f64) -> HeatField {
    let mut field = HeatField::new(size);
    for x in 0..size {
        field.row_mut(phase, x).fill(value(x));
    }
    field
}

/// Uniform `f64` in `[0, 1)` from the top 53 bits of one draw.
fn unit(rng: &mut ChaCha8Rng) -> f64 {
    (rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_field() {
        let a = random_field(6, Phase::Zero, 17);
        let b = random_field(6, Phase::Zero, 17);
        assert_eq!(a, b);
        assert_ne!(a, random_field(6, Phase::Zero, 18));
    }

    #[test]
    fn random_values_in_range() {
        let field = random_field(10, Phase::One, 3);
        assert!(field.phase(Phase::One).iter().all(|&v| (0.0..40.0).contains(&v)));
        assert!(field.phase(Phase::Zero).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn row_constants() {
        let field = row_constant_field(4, Phase::Zero, |x| x as f64 * 1.5);
        assert_eq!(field.row(Phase::Zero, 2), &[3.0; 4]);
    }
}
