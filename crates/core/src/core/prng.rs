// Minimal PRNG (no external crates).
//
// This is NOT cryptographically secure.
// It only picks problems; hosts seed it from whatever entropy they have.

#[derive(Debug, Clone)]
pub struct Prng {
    state: u64,
}

impl Prng {
    pub fn new(seed: u64) -> Self {
        // Avoid a zero state.
        let seed = if seed == 0 { 0x9E3779B97F4A7C15 } else { seed };
        Self { state: seed }
    }

    /// Seed from a float in `[0, 1)`, as handed out by `Math.random()`.
    pub fn from_unit_f64(r: f64) -> Self {
        let r = if r.is_finite() { r.clamp(0.0, 1.0) } else { 0.0 };
        Self::new((r * u64::MAX as f64) as u64)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        // xorshift64*
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    pub fn next_f64_01(&mut self) -> f64 {
        // 53 significant bits, in [0,1).
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in `[low, high]`, both ends inclusive.
    ///
    /// Mirrors the usual `round(low - 0.5 + r * (high - low + 1))` trick, but
    /// clamps the rounding edge so `high + 1` can never come out.
    pub fn gen_range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        let span = (high - low + 1) as f64;
        let picked = (self.next_f64_01() * span).floor() as u32;
        low + picked.min(high - low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_seed_is_not_stuck() {
        let mut rng = Prng::new(0);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn inclusive_range_hits_both_ends() {
        let mut rng = Prng::new(7);
        let mut seen = [false; 4];
        for _ in 0..2_000 {
            let v = rng.gen_range_inclusive(1, 4);
            assert!((1..=4).contains(&v));
            seen[(v - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn degenerate_range_returns_low() {
        let mut rng = Prng::new(3);
        assert_eq!(rng.gen_range_inclusive(5, 5), 5);
        assert_eq!(rng.gen_range_inclusive(9, 2), 9);
    }

    #[test]
    fn unit_seed_handles_odd_inputs() {
        let mut a = Prng::from_unit_f64(f64::NAN);
        let mut b = Prng::from_unit_f64(0.0);
        assert_eq!(a.next_u32(), b.next_u32());
        let mut c = Prng::from_unit_f64(0.25);
        assert!(c.next_f64_01() < 1.0);
    }
}
