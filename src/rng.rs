//! Deterministic sampling engine: xoshiro256** with ziggurat samplers.
//!
//! The generator state is seeded through four rounds of splitmix64, so any
//! 64-bit seed yields well-distributed state words. `normal` and
//! `exponential` use a modified ziggurat: the low byte of one raw draw
//! selects among 256 equal-probability regions, most of which are
//! rectangular fast paths resolved with a single table multiply; the
//! remaining mass (curved overhangs and the tail) is dispatched through an
//! alias table and rejection-sampled with certain-accept/certain-reject
//! bounds so `exp()` is rarely evaluated. The overhang and tail retries are
//! written as loops rather than the textbook self-recursion, drawing in the
//! same order so the output sequence is unaffected.
//!
//! For a fixed seed and call order the output is bit-for-bit reproducible;
//! that determinism is the engine's central contract. A state value must
//! not be shared between threads without external synchronization.

use crate::error::{RasterError, RasterResult};

mod tables;

const MASK63: u64 = 0x7fff_ffff_ffff_ffff;
const POW2_63: f64 = 9_223_372_036_854_775_808.0;

/// xoshiro256** generator state. Every draw mutates it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Xoshiro256 {
    s: [u64; 4],
}

fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Linear interpolation across a layer's x extent: `u` in `[0, 2^63)` maps
/// from `x[j]` (the layer's inner edge) to `x[j-1]`.
fn sample_x(x: &[f64; 256], j: usize, u: u64) -> f64 {
    x[j] * POW2_63 + (x[j - 1] - x[j]) * u as f64
}

/// Linear interpolation across a layer's y extent, from `y[j-1]` upward.
fn sample_y(y: &[f64; 256], j: usize, u: u64) -> f64 {
    y[j - 1] * POW2_63 + (y[j] - y[j - 1]) * u as f64
}

impl Xoshiro256 {
    /// Seed from a 64-bit integer via four rounds of splitmix64.
    pub fn seed(seed: u64) -> Self {
        let mut sm = seed;
        let mut s = [0u64; 4];
        for word in &mut s {
            *word = splitmix64(&mut sm);
        }
        Self { s }
    }

    /// Seed from a signed integer (sign-extended to the 64-bit seed space).
    pub fn seed_i64(seed: i64) -> Self {
        Self::seed(seed as u64)
    }

    pub fn state(&self) -> [u64; 4] {
        self.s
    }

    /// One xoshiro256** step.
    pub fn next_u64(&mut self) -> u64 {
        let result = self.s[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];
        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }

    /// A draw with the top bit cleared, uniform in `[0, 2^63)`.
    pub fn next_u63(&mut self) -> u64 {
        self.next_u64() & MASK63
    }

    /// One standard-exponential sample.
    pub fn exponential(&mut self) -> f64 {
        // The tail restarts the whole sampler shifted by EXP_X0
        // (memorylessness), accumulated here instead of recursing.
        let mut offset = 0.0;
        loop {
            let r = self.next_u64();
            let i = (r & 0xff) as usize;
            if i < tables::EXP_LAYERS as usize {
                return offset + tables::EXP_X[i] * ((r & MASK63) as f64);
            }

            let j = self.exp_sample_a();
            if j > 0 {
                return offset + self.exp_overhang(j);
            }
            offset += tables::EXP_X0;
        }
    }

    /// One standard-normal sample.
    pub fn normal(&mut self) -> f64 {
        let u = self.next_u64();
        let i = (u & 0xff) as usize;
        if i < tables::NORM_BINS as usize {
            // symmetric box: the signed interpretation carries the sign
            return tables::NORM_X[i] * ((u as i64) as f64);
        }

        let mut u1 = (u & MASK63) as i64;
        let sign = if u1 & 0x100 != 0 { 1.0 } else { -1.0 };
        let j = self.norm_sample_a();

        let x = if j > tables::NORM_J_INFLECTION as usize {
            // concave overhangs near the top: points below the layer
            // diagonal are accepted outright, points far above it are
            // rejected outright, the band between gets the exact test.
            loop {
                let x = sample_x(&tables::NORM_X, j, u1 as u64);
                let u_diff = self.next_u63() as i64 - u1;
                if u_diff >= 0 {
                    break x;
                }
                if u_diff >= -tables::NORM_MAX_IE {
                    let sum = (u1 + u_diff) as u64;
                    let y = sample_y(&tables::NORM_Y, j, (1u64 << 63) - sum);
                    if y < (-0.5 * x * x).exp() {
                        break x;
                    }
                }
                u1 = self.next_u63() as i64;
            }
        } else if j == 0 {
            // Marsaglia tail sampling beyond NORM_X0
            let mut x;
            loop {
                x = self.exponential() / tables::NORM_X0;
                if self.exponential() >= 0.5 * x * x {
                    break;
                }
            }
            x + tables::NORM_X0
        } else if j < tables::NORM_J_INFLECTION as usize {
            // convex overhangs: ordering the two uniforms puts the sample
            // below the diagonal, where a large enough gap is a certain
            // accept.
            loop {
                let mut u_diff = self.next_u63() as i64 - u1;
                if u_diff < 0 {
                    u_diff = -u_diff;
                    u1 -= u_diff;
                }
                let x = sample_x(&tables::NORM_X, j, u1 as u64);
                if u_diff > tables::NORM_MIN_IE {
                    break x;
                }
                let sum = (u1 + u_diff) as u64;
                let y = sample_y(&tables::NORM_Y, j, (1u64 << 63) - sum);
                if y < (-0.5 * x * x).exp() {
                    break x;
                }
                u1 = self.next_u63() as i64;
            }
        } else {
            // the layer containing the inflection point: exact test only
            loop {
                let x = sample_x(&tables::NORM_X, j, u1 as u64);
                let y = sample_y(&tables::NORM_Y, j, self.next_u63());
                if y < (-0.5 * x * x).exp() {
                    break x;
                }
                u1 = self.next_u63() as i64;
            }
        };

        sign * x
    }

    /// Draw `count` standard-normal samples narrowed to f32, in index order.
    ///
    /// The state is untouched when `count` would overflow the output's
    /// byte-size arithmetic.
    #[tracing::instrument(skip(self))]
    pub fn normal_batch(&mut self, count: usize) -> RasterResult<Vec<f32>> {
        if count > usize::MAX / size_of::<f32>() {
            return Err(RasterError::CountTooLarge(count));
        }
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            out.push(self.normal() as f32);
        }
        Ok(out)
    }

    /// [`Self::normal_batch`] encoded as little-endian f32 bytes.
    pub fn normal_batch_bytes(&mut self, count: usize) -> RasterResult<Vec<u8>> {
        let samples = self.normal_batch(count)?;
        let mut bytes = Vec::with_capacity(samples.len() * size_of::<f32>());
        for sample in samples {
            bytes.extend_from_slice(&sample.to_le_bytes());
        }
        Ok(bytes)
    }

    /// Alias-table pick of an exponential overhang index (0 is the tail).
    fn exp_sample_a(&mut self) -> usize {
        let r = self.next_u64();
        let j = (r & 0xff) as usize;
        if (r as i64) >= tables::EXP_IPMF[j] {
            tables::EXP_MAP[j] as usize
        } else {
            j
        }
    }

    fn norm_sample_a(&mut self) -> usize {
        let r = self.next_u64();
        let j = (r & 0xff) as usize;
        if (r as i64) >= tables::NORM_IPMF[j] {
            tables::NORM_MAP[j] as usize
        } else {
            j
        }
    }

    /// Rejection-sample the exponential overhang `j`, retrying in place.
    fn exp_overhang(&mut self, j: usize) -> f64 {
        loop {
            let mut u1 = self.next_u63() as i64;
            let mut u_diff = self.next_u63() as i64 - u1;
            if u_diff < 0 {
                u_diff = -u_diff;
                u1 -= u_diff;
            }

            let x = sample_x(&tables::EXP_X, j, u1 as u64);
            if u_diff >= tables::EXP_MAX_IE {
                return x;
            }

            let sum = (u1 + u_diff) as u64;
            let y = sample_y(&tables::EXP_Y, j, (1u64 << 63) - sum);
            if y <= (-x).exp() {
                return x;
            }
        }
    }
}
