//! Image-space algorithms for a 2D vector-graphics pipeline.
//!
//! Three independent components, all synchronous, pure-CPU and free of
//! shared state:
//!
//! - [`blur`] — in-place Gaussian blur approximated by three separable box
//!   blurs over 1- or 4-channel 8-bit pixel buffers.
//! - [`path`] — adaptive flattening of quadratic/cubic Bézier path streams
//!   into polylines under a chord-distance tolerance.
//! - [`rng`] — a seedable xoshiro256** generator with ziggurat
//!   normal/exponential samplers and batch generation.

#![forbid(unsafe_code)]

pub mod blur;
pub mod error;
pub mod path;
pub mod pixel;
pub mod rng;

pub use blur::{BlurScratch, blur_in_place, blur_sub_in_place};
pub use error::{RasterError, RasterResult};
pub use path::{CommandStream, DEFAULT_TOLERANCE, PathCmd, flatten, flatten_default};
pub use pixel::{PixelFormat, PixelViewMut};
pub use rng::Xoshiro256;
