//! Gaussian blur approximated by three cascaded box blurs, applied in place.
//!
//! Each box pass is a horizontal then a vertical sliding-window average with
//! edge-replicated sampling, so the whole blur costs O(1) per pixel per pass
//! regardless of sigma. Strided images are packed tight before the passes
//! and unpacked afterwards; the working buffers live in a caller-owned
//! [`BlurScratch`] so repeated blurs on a worker thread never reallocate.

use crate::{
    error::{RasterError, RasterResult},
    pixel::{PixelFormat, PixelViewMut},
};

/// Reusable tight-packed working buffers. Grown on demand, never shrunk.
///
/// One instance per worker thread; ownership gives thread confinement
/// without locking.
#[derive(Debug, Default)]
pub struct BlurScratch {
    packed: Vec<u8>,
    work: Vec<u8>,
}

impl BlurScratch {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure(&mut self, len: usize) {
        if self.packed.len() < len {
            self.packed.resize(len, 0);
        }
        if self.work.len() < len {
            self.work.resize(len, 0);
        }
    }
}

/// Blur the whole image in place.
pub fn blur_in_place(
    img: &mut PixelViewMut<'_>,
    sigma: f64,
    scratch: &mut BlurScratch,
) -> RasterResult<()> {
    blur_sub_in_place(img, sigma, 0, 0, scratch)
}

/// Blur the top-left `width` x `height` sub-rectangle in place.
///
/// A dimension of 0 (or one exceeding the image) means the full extent;
/// callers that render into a slightly oversized scratch image use this to
/// limit the blur to the logical working area.
#[tracing::instrument(skip(img, scratch), fields(img_w = img.width(), img_h = img.height()))]
pub fn blur_sub_in_place(
    img: &mut PixelViewMut<'_>,
    sigma: f64,
    width: usize,
    height: usize,
    scratch: &mut BlurScratch,
) -> RasterResult<()> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(RasterError::InvalidSigma(sigma));
    }

    let channels = match img.format() {
        PixelFormat::A8 => 1,
        PixelFormat::Prgb32 => 4,
        other => {
            return Err(RasterError::unsupported_format(format!(
                "blur supports A8 and Prgb32, got {other:?}"
            )));
        }
    };

    if img.width() == 0 || img.height() == 0 {
        return Ok(());
    }

    let eff_w = if width > 0 && width <= img.width() {
        width
    } else {
        img.width()
    };
    let eff_h = if height > 0 && height <= img.height() {
        height
    } else {
        img.height()
    };

    let row_bytes = eff_w * channels;
    let buf_bytes = row_bytes * eff_h;
    let stride = img.stride();
    scratch.ensure(buf_bytes);
    let BlurScratch { packed, work } = scratch;

    // Pack rows tight; a single bulk copy suffices when there is no padding.
    if row_bytes == stride {
        packed[..buf_bytes].copy_from_slice(&img.bytes()[..buf_bytes]);
    } else {
        for y in 0..eff_h {
            packed[y * row_bytes..(y + 1) * row_bytes]
                .copy_from_slice(&img.bytes()[y * stride..y * stride + row_bytes]);
        }
    }

    let boxes = gaussian_box_sizes(sigma);
    tracing::debug!(?boxes, eff_w, eff_h, channels, "running box passes");
    for size in boxes {
        let radius = size / 2;
        box_blur_h(&packed[..buf_bytes], &mut work[..buf_bytes], eff_w, eff_h, channels, radius);
        box_blur_v(&work[..buf_bytes], &mut packed[..buf_bytes], eff_w, eff_h, channels, radius);
    }

    if row_bytes == stride {
        img.bytes_mut()[..buf_bytes].copy_from_slice(&packed[..buf_bytes]);
    } else {
        for y in 0..eff_h {
            img.bytes_mut()[y * stride..y * stride + row_bytes]
                .copy_from_slice(&packed[y * row_bytes..(y + 1) * row_bytes]);
        }
    }

    Ok(())
}

/// Three box widths whose cascade approximates a Gaussian of `sigma`.
///
/// Standard three-box construction: the ideal width is
/// `sqrt(12 sigma^2 / 3 + 1)`; the first `m` passes use the nearest odd
/// width below it, the rest use that width plus two.
fn gaussian_box_sizes(sigma: f64) -> [usize; 3] {
    let n = 3.0;
    let w_ideal = (12.0 * sigma * sigma / n + 1.0).sqrt();
    let mut wl = w_ideal.floor() as i64;
    if wl % 2 == 0 {
        wl -= 1;
    }
    let wl = wl.max(1);
    let wu = wl + 2;

    let wl_f = wl as f64;
    let m_ideal = (12.0 * sigma * sigma - n * wl_f * wl_f - 4.0 * n * wl_f - 3.0 * n)
        / (-4.0 * wl_f - 4.0);
    let m = m_ideal.round() as i64;

    let mut sizes = [0usize; 3];
    for (i, size) in sizes.iter_mut().enumerate() {
        *size = if (i as i64) < m { wl } else { wu } as usize;
    }
    sizes
}

fn box_blur_h(src: &[u8], dst: &mut [u8], w: usize, h: usize, channels: usize, radius: usize) {
    let dia = (2 * radius + 1) as i32;
    let last = w as isize - 1;
    for y in 0..h {
        let srow = &src[y * w * channels..(y + 1) * w * channels];
        let drow = &mut dst[y * w * channels..(y + 1) * w * channels];

        let mut sums = [0i32; 4];
        let sums = &mut sums[..channels];
        for i in -(radius as isize)..=radius as isize {
            let ix = i.clamp(0, last) as usize;
            for (c, sum) in sums.iter_mut().enumerate() {
                *sum += i32::from(srow[ix * channels + c]);
            }
        }

        for x in 0..w {
            for (c, sum) in sums.iter().enumerate() {
                drow[x * channels + c] = ((*sum + dia / 2) / dia) as u8;
            }

            // Slide the window: add the entering pixel, drop the leaving one.
            let next = (x as isize + radius as isize + 1).clamp(0, last) as usize;
            let prev = (x as isize - radius as isize).clamp(0, last) as usize;
            for (c, sum) in sums.iter_mut().enumerate() {
                *sum += i32::from(srow[next * channels + c]) - i32::from(srow[prev * channels + c]);
            }
        }
    }
}

fn box_blur_v(src: &[u8], dst: &mut [u8], w: usize, h: usize, channels: usize, radius: usize) {
    let dia = (2 * radius + 1) as i32;
    let last = h as isize - 1;
    let row_bytes = w * channels;
    for x in 0..w {
        let mut sums = [0i32; 4];
        let sums = &mut sums[..channels];
        for i in -(radius as isize)..=radius as isize {
            let iy = i.clamp(0, last) as usize;
            for (c, sum) in sums.iter_mut().enumerate() {
                *sum += i32::from(src[iy * row_bytes + x * channels + c]);
            }
        }

        for y in 0..h {
            for (c, sum) in sums.iter().enumerate() {
                dst[y * row_bytes + x * channels + c] = ((*sum + dia / 2) / dia) as u8;
            }

            let next = (y as isize + radius as isize + 1).clamp(0, last) as usize;
            let prev = (y as isize - radius as isize).clamp(0, last) as usize;
            for (c, sum) in sums.iter_mut().enumerate() {
                *sum += i32::from(src[next * row_bytes + x * channels + c])
                    - i32::from(src[prev * row_bytes + x * channels + c]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_sizes_are_odd_and_ordered() {
        for sigma in [0.3, 0.8, 1.0, 2.5, 5.0, 12.0] {
            let sizes = gaussian_box_sizes(sigma);
            for s in sizes {
                assert_eq!(s % 2, 1, "sigma {sigma}: width {s} not odd");
            }
            assert!(sizes[0] <= sizes[2]);
            assert!(sizes[2] - sizes[0] <= 2);
        }
    }

    #[test]
    fn invalid_sigma_leaves_buffer_untouched() {
        let mut buf = vec![7u8; 16];
        let before = buf.clone();
        let mut scratch = BlurScratch::new();
        for sigma in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let mut view = PixelViewMut::new_tight(&mut buf, 4, 4, PixelFormat::A8).unwrap();
            let err = blur_in_place(&mut view, sigma, &mut scratch).unwrap_err();
            assert!(matches!(err, RasterError::InvalidSigma(_)));
            assert_eq!(buf, before);
        }
    }

    #[test]
    fn xrgb_is_rejected() {
        let mut buf = vec![0u8; 64];
        let mut view = PixelViewMut::new_tight(&mut buf, 4, 4, PixelFormat::Xrgb32).unwrap();
        let err = blur_in_place(&mut view, 1.0, &mut BlurScratch::new()).unwrap_err();
        assert!(matches!(err, RasterError::UnsupportedFormat(_)));
    }

    #[test]
    fn degenerate_image_is_a_no_op() {
        let mut buf = [0u8; 0];
        let mut view = PixelViewMut::new_tight(&mut buf, 0, 0, PixelFormat::A8).unwrap();
        blur_in_place(&mut view, 2.0, &mut BlurScratch::new()).unwrap();
    }

    #[test]
    fn constant_image_is_unchanged_per_channel() {
        let (w, h) = (9usize, 7usize);
        let px = [20u8, 80, 140, 200];
        let mut buf: Vec<u8> = px.iter().copied().cycle().take(w * h * 4).collect();
        let mut view = PixelViewMut::new_tight(&mut buf, w, h, PixelFormat::Prgb32).unwrap();
        blur_in_place(&mut view, 2.0, &mut BlurScratch::new()).unwrap();
        for chunk in buf.chunks_exact(4) {
            assert_eq!(chunk, px);
        }
    }

    #[test]
    fn impulse_spreads_and_keeps_mass() {
        let (w, h) = (15usize, 15usize);
        let mut buf = vec![0u8; w * h];
        buf[7 * w + 7] = 255;
        let mut view = PixelViewMut::new_tight(&mut buf, w, h, PixelFormat::A8).unwrap();
        blur_in_place(&mut view, 1.5, &mut BlurScratch::new()).unwrap();

        let nonzero = buf.iter().filter(|&&b| b != 0).count();
        assert!(nonzero > 1);
        let sum: u32 = buf.iter().map(|&b| u32::from(b)).sum();
        // integer rounding loses a little mass per pass
        assert!((i64::from(sum) - 255).abs() <= 20, "sum {sum}");
    }

    #[test]
    fn stride_padding_is_preserved() {
        let (w, h, stride) = (5usize, 4usize, 8usize);
        let mut buf = vec![0xEEu8; stride * h];
        for y in 0..h {
            for x in 0..w {
                buf[y * stride + x] = 100;
            }
        }
        let mut view = PixelViewMut::new(&mut buf, w, h, stride, PixelFormat::A8).unwrap();
        blur_in_place(&mut view, 1.0, &mut BlurScratch::new()).unwrap();
        for y in 0..h {
            for x in 0..w {
                assert_eq!(buf[y * stride + x], 100);
            }
            for x in w..stride {
                assert_eq!(buf[y * stride + x], 0xEE, "padding touched at ({x},{y})");
            }
        }
    }

    #[test]
    fn sub_rectangle_limits_the_blur() {
        let (w, h) = (8usize, 8usize);
        let mut buf = vec![0u8; w * h];
        // impulse inside the sub-rect, sentinel outside it
        buf[2 * w + 2] = 255;
        buf[6 * w + 6] = 99;
        let mut view = PixelViewMut::new_tight(&mut buf, w, h, PixelFormat::A8).unwrap();
        blur_sub_in_place(&mut view, 1.0, 5, 5, &mut BlurScratch::new()).unwrap();
        assert_eq!(buf[6 * w + 6], 99);
        assert!(buf[2 * w + 2] < 255);
    }

    #[test]
    fn scratch_grows_but_never_shrinks() {
        let mut scratch = BlurScratch::new();
        let mut big = vec![0u8; 32 * 32];
        let mut view = PixelViewMut::new_tight(&mut big, 32, 32, PixelFormat::A8).unwrap();
        blur_in_place(&mut view, 1.0, &mut scratch).unwrap();
        let grown = scratch.packed.len();
        assert_eq!(grown, 32 * 32);

        let mut small = vec![0u8; 16];
        let mut view = PixelViewMut::new_tight(&mut small, 4, 4, PixelFormat::A8).unwrap();
        blur_in_place(&mut view, 1.0, &mut scratch).unwrap();
        assert_eq!(scratch.packed.len(), grown);
    }
}
