//! Placement randomness: a small xorshift64* stream.
//!
//! Seeded from the browser's entropy source when the `rng` feature is on;
//! otherwise from a `performance.now()` linear-congruential mix. Not crypto
//! secure, and does not need to be — it only scatters sprites.

pub struct FieldRng {
    state: u64,
}

impl FieldRng {
    /// Seeds a fresh stream for this mount.
    pub fn seeded() -> Self {
        Self::from_seed(entropy_seed())
    }

    pub fn from_seed(seed: u64) -> Self {
        // A zero state would lock xorshift at zero forever.
        Self {
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Uniform draw in `[min, max)`; returns `min` for empty/inverted ranges.
    pub fn gen_range_f64(&mut self, min: f64, max: f64) -> f64 {
        if max <= min {
            return min;
        }
        // 53 bits of mantissa worth of uniformity is plenty for pixels.
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        min + unit * (max - min)
    }
}

#[cfg(feature = "rng")]
fn entropy_seed() -> u64 {
    let mut buf = [0u8; 8];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => u64::from_le_bytes(buf),
        Err(_) => clock_seed(),
    }
}

#[cfg(not(feature = "rng"))]
fn entropy_seed() -> u64 {
    clock_seed()
}

fn clock_seed() -> u64 {
    let now = web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0);
    // Same linear transform the prototype randomness used.
    (now as u64)
        .wrapping_mul(1664525)
        .wrapping_add(1013904223)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = FieldRng::from_seed(42);
        let mut b = FieldRng::from_seed(42);
        for _ in 0..32 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn zero_seed_is_remapped() {
        let mut r = FieldRng::from_seed(0);
        assert_ne!(r.next_u64(), 0);
    }

    #[test]
    fn range_draws_stay_in_bounds() {
        let mut r = FieldRng::from_seed(7);
        for _ in 0..1000 {
            let v = r.gen_range_f64(0.0, 720.0);
            assert!((0.0..720.0).contains(&v), "draw {v} out of bounds");
        }
    }

    #[test]
    fn empty_range_returns_min() {
        let mut r = FieldRng::from_seed(7);
        assert_eq!(r.gen_range_f64(5.0, 5.0), 5.0);
        assert_eq!(r.gen_range_f64(5.0, -1.0), 5.0);
    }
}
