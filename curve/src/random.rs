use num_bigint::{BigInt, Sign};
use rand::Rng;

/// Samples a scalar uniformly from `[1, order - 1]`.
///
/// Uses rejection sampling over random bytes masked to the bit length of
/// `order - 1`. Returns `None` when the range is empty (`order < 2`).
pub fn random_scalar<R: Rng + ?Sized>(rng: &mut R, order: &BigInt) -> Option<BigInt> {
    if *order < BigInt::from(2u32) {
        return None;
    }

    let bits = (order - 1u32).bits();
    let len = bits.div_ceil(8) as usize;
    let excess = (len as u64) * 8 - bits;
    let mut buf = vec![0u8; len];

    loop {
        rng.fill(&mut buf[..]);
        buf[0] &= 0xffu8 >> excess;
        let candidate = BigInt::from_bytes_be(Sign::Plus, &buf);
        if candidate > BigInt::from(0u32) && candidate < *order {
            return Some(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_scalar_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let order = BigInt::from(19);
        let mut seen = [false; 19];

        for _ in 0..1000 {
            let k = random_scalar(&mut rng, &order).unwrap();
            assert!(k >= BigInt::from(1) && k < order);
            let idx: usize = k.try_into().unwrap();
            seen[idx] = true;
        }
        assert!(!seen[0]);
        assert!(seen[1..].iter().all(|&s| s));
    }

    #[test]
    fn test_random_scalar_large_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let order: BigInt = "115792089237316195423570985008687907852837564279074904382605163141518161494337"
            .parse()
            .unwrap();

        for _ in 0..32 {
            let k = random_scalar(&mut rng, &order).unwrap();
            assert!(k >= BigInt::from(1) && k < order);
        }
    }

    #[test]
    fn test_random_scalar_empty_range() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_scalar(&mut rng, &BigInt::from(1)), None);
        assert_eq!(random_scalar(&mut rng, &BigInt::from(2)), Some(BigInt::from(1)));
    }
}
