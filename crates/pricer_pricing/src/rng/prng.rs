//! Pseudo-random number generator wrapper for Monte Carlo simulations.
//!
//! This module provides [`PricerRng`], a seeded PRNG wrapper that offers
//! reproducible random number generation with efficient batch operations.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// Monte Carlo simulation random number generator.
///
/// Provides seeded, reproducible standard normal variates. A generator is
/// either keyed by a single seed ([`PricerRng::from_seed`]) or by a
/// `(seed, stream)` pair ([`PricerRng::for_stream`]); the latter gives every
/// batch of paths its own independent sequence so batches can run on any
/// thread in any order.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::PricerRng;
///
/// let mut rng = PricerRng::for_stream(42, 3);
///
/// let n: f64 = rng.gen_normal();
///
/// // Batch generation (zero allocation)
/// let mut buffer = vec![0.0; 100];
/// rng.fill_normal(&mut buffer);
/// ```
#[derive(Clone, Debug)]
pub struct PricerRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: u64,
    /// Stream index within the seed (0 for [`PricerRng::from_seed`]).
    stream: u64,
}

impl PricerRng {
    /// Creates a new RNG instance initialised with the given seed.
    ///
    /// The same seed will always produce the same sequence of random numbers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::rng::PricerRng;
    ///
    /// let mut rng1 = PricerRng::from_seed(12345);
    /// let mut rng2 = PricerRng::from_seed(12345);
    ///
    /// assert_eq!(rng1.gen_normal(), rng2.gen_normal());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
            stream: 0,
        }
    }

    /// Creates the generator for stream `stream` of seed `seed`.
    ///
    /// The 256-bit key embeds both values verbatim, so distinct pairs never
    /// share a key; two further words are scrambled with SplitMix64 to
    /// decorrelate neighbouring streams.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::rng::PricerRng;
    ///
    /// let mut a = PricerRng::for_stream(7, 0);
    /// let mut b = PricerRng::for_stream(7, 1);
    /// assert_ne!(a.gen_normal(), b.gen_normal());
    /// ```
    pub fn for_stream(seed: u64, stream: u64) -> Self {
        let words = [
            seed,
            stream,
            splitmix64(seed),
            splitmix64(stream ^ 0xD1B5_4A32_D192_ED03),
        ];
        let mut key = [0u8; 32];
        for (chunk, word) in key.chunks_exact_mut(8).zip(words) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }

        Self {
            inner: StdRng::from_seed(key),
            seed,
            stream,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the stream index.
    #[inline]
    pub fn stream(&self) -> u64 {
        self.stream
    }

    /// Generates a single standard normal variate (mean=0, std=1).
    ///
    /// Uses the ZIGNOR Ziggurat algorithm via `rand_distr::StandardNormal`.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills the buffer with standard normal (mean=0, std=1) variates.
    ///
    /// This is a zero-allocation operation; the buffer must be pre-allocated
    /// by the caller. Empty buffers are handled gracefully (no operation).
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}

/// SplitMix64 finaliser.
#[inline]
fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = PricerRng::from_seed(42);
        let mut b = PricerRng::from_seed(42);
        let mut buf_a = vec![0.0; 64];
        let mut buf_b = vec![0.0; 64];
        a.fill_normal(&mut buf_a);
        b.fill_normal(&mut buf_b);
        assert_eq!(buf_a, buf_b);
        assert_eq!(a.seed(), 42);
        assert_eq!(a.stream(), 0);
    }

    #[test]
    fn test_streams_are_reproducible_and_distinct() {
        let draw = |seed, stream| {
            let mut rng = PricerRng::for_stream(seed, stream);
            let mut buf = vec![0.0; 16];
            rng.fill_normal(&mut buf);
            buf
        };

        assert_eq!(draw(42, 5), draw(42, 5));
        assert_ne!(draw(42, 5), draw(42, 6));
        assert_ne!(draw(42, 5), draw(43, 5));
        // Swapping seed and stream must not alias
        assert_ne!(draw(1, 2), draw(2, 1));
    }

    #[test]
    fn test_gen_normal_matches_fill_normal() {
        let mut a = PricerRng::for_stream(9, 1);
        let mut b = PricerRng::for_stream(9, 1);
        let mut buf = [0.0; 4];
        b.fill_normal(&mut buf);
        for value in buf {
            assert_eq!(a.gen_normal(), value);
        }
    }

    #[test]
    fn test_fill_normal_empty_buffer() {
        let mut rng = PricerRng::from_seed(1);
        let mut empty: [f64; 0] = [];
        rng.fill_normal(&mut empty);
    }

    #[test]
    fn test_normal_moments() {
        let mut rng = PricerRng::for_stream(2024, 0);
        let mut buf = vec![0.0; 200_000];
        rng.fill_normal(&mut buf);

        let n = buf.len() as f64;
        let mean = buf.iter().sum::<f64>() / n;
        let var = buf.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
        assert!(mean.abs() < 0.01, "mean = {}", mean);
        assert!((var - 1.0).abs() < 0.02, "variance = {}", var);
    }

    #[test]
    fn test_splitmix_known_value() {
        // First output of SplitMix64 seeded with 0
        assert_eq!(splitmix64(0), 0xE220_A839_7B1D_CDAF);
    }
}
