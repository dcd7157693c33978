//! Random number generators.
//!
//! [`MersenneTwisterUniformRng`] wraps the `rand_mt` crate's MT19937-64.
//! [`NormalStream`] turns it into a reproducible stream of standard-normal
//! variates that is an ordinary value: it can be cloned to checkpoint a
//! position, handed to a simulation kernel by `&mut`, or split into
//! independent per-worker streams.

use std::fmt;

use op_core::Real;
use rand_mt::Mt19937GenRand64;

/// 2⁻⁵², the spacing of 52-bit uniforms.
const TWO_POW_M52: Real = 1.0 / 4_503_599_627_370_496.0;

/// Map a 64-bit word to the midpoint of its 52-bit cell in `(0, 1)`.
///
/// With 52 bits `k + 0.5` is exact, so the result lies in
/// `[2⁻⁵³, 1 − 2⁻⁵³]` for every word.
#[inline]
fn open_unit(word: u64) -> Real {
    ((word >> 12) as Real + 0.5) * TWO_POW_M52
}

/// A uniform pseudo-random number generator based on the Mersenne Twister
/// MT19937-64 algorithm.
#[derive(Clone)]
pub struct MersenneTwisterUniformRng {
    rng: Mt19937GenRand64,
}

impl MersenneTwisterUniformRng {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mt19937GenRand64::new(seed),
        }
    }

    /// Generate the next uniform deviate in the open interval `(0, 1)`.
    pub fn next_open_real(&mut self) -> Real {
        open_unit(self.rng.next_u64())
    }
}

impl fmt::Debug for MersenneTwisterUniformRng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MersenneTwisterUniformRng").finish_non_exhaustive()
    }
}

/// A reproducible, advanceable stream of standard-normal variates.
///
/// Uniforms from a Mersenne Twister are mapped through the inverse normal
/// CDF, so every draw consumes exactly one 64-bit word and
/// [`position`](Self::position) is an exact count of variates drawn.
///
/// Two streams built from the same seed and advanced the same number of
/// times produce bit-identical values; a clone taken at any point replays
/// the rest of the sequence.
#[derive(Clone)]
pub struct NormalStream {
    seed: u64,
    position: u64,
    uniform: MersenneTwisterUniformRng,
}

impl NormalStream {
    /// Create a stream at position 0 for `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            position: 0,
            uniform: MersenneTwisterUniformRng::new(seed),
        }
    }

    /// The seed this stream was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of variates drawn so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Draw the next standard-normal variate.
    #[inline]
    pub fn next_normal(&mut self) -> Real {
        self.position += 1;
        crate::distributions::normal_cdf_inverse(self.uniform.next_open_real())
    }

    /// Discard the next `n` variates.
    pub fn skip(&mut self, n: u64) {
        for _ in 0..n {
            self.next_normal();
        }
    }

    /// Derive an independent stream for worker `worker`.
    ///
    /// The child seed is a SplitMix64 mix of the parent seed and the worker
    /// index, so the same `(seed, worker)` pair always yields the same
    /// stream and neighbouring workers do not get neighbouring seeds. The
    /// parent is not advanced.
    pub fn split(&self, worker: u64) -> NormalStream {
        NormalStream::new(splitmix64(self.seed ^ splitmix64(worker.wrapping_add(1))))
    }
}

impl fmt::Debug for NormalStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormalStream")
            .field("seed", &self.seed)
            .field("position", &self.position)
            .finish()
    }
}

/// SplitMix64 finaliser.
fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
