use rasterops::{BlurScratch, PixelFormat, PixelViewMut, RasterError, blur_in_place};

/// Route the instrumented entry points through a real subscriber so span
/// and field recording runs under test.
fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Blur an impulse and check the measured standard deviation of the falloff
/// against the requested sigma. The three-box approximation is within a few
/// percent of a true Gaussian; 8-bit quantization clips the far tail, so the
/// bound here is deliberately loose.
#[test]
fn impulse_response_std_dev_tracks_sigma() {
    init_tracing();
    let sigma = 2.0;
    let (w, h) = (25usize, 25usize);
    let (cx, cy) = (12i64, 12i64);
    let mut buf = vec![0u8; w * h];
    buf[(cy as usize) * w + cx as usize] = 255;

    let mut view = PixelViewMut::new_tight(&mut buf, w, h, PixelFormat::A8).unwrap();
    blur_in_place(&mut view, sigma, &mut BlurScratch::new()).unwrap();

    let mut total = 0.0f64;
    let mut sum_dx2 = 0.0f64;
    let mut sum_dy2 = 0.0f64;
    for y in 0..h {
        for x in 0..w {
            let v = f64::from(buf[y * w + x]);
            let dx = (x as i64 - cx) as f64;
            let dy = (y as i64 - cy) as f64;
            total += v;
            sum_dx2 += v * dx * dx;
            sum_dy2 += v * dy * dy;
        }
    }
    assert!(total > 0.0);
    let measured_x = (sum_dx2 / total).sqrt();
    let measured_y = (sum_dy2 / total).sqrt();
    assert!(
        (measured_x - sigma).abs() < 0.3,
        "x std dev {measured_x} too far from sigma {sigma}"
    );
    assert!(
        (measured_y - sigma).abs() < 0.3,
        "y std dev {measured_y} too far from sigma {sigma}"
    );
    // Each pass rounds to u8 between the horizontal and vertical
    // sub-passes, so the response is only approximately transpose-symmetric.
    assert!((measured_x - measured_y).abs() < 0.05);
}

#[test]
fn non_positive_sigma_is_rejected_without_mutation() {
    let (w, h) = (6usize, 5usize);
    let mut buf: Vec<u8> = (0..w * h * 4).map(|i| (i % 251) as u8).collect();
    let before = buf.clone();
    let mut scratch = BlurScratch::new();

    let mut view = PixelViewMut::new_tight(&mut buf, w, h, PixelFormat::Prgb32).unwrap();
    let err = blur_in_place(&mut view, 0.0, &mut scratch).unwrap_err();
    assert!(matches!(err, RasterError::InvalidSigma(_)));
    assert_eq!(buf, before);

    let mut view = PixelViewMut::new_tight(&mut buf, w, h, PixelFormat::Prgb32).unwrap();
    let err = blur_in_place(&mut view, -1.5, &mut scratch).unwrap_err();
    assert!(matches!(err, RasterError::InvalidSigma(_)));
    assert_eq!(buf, before);
}

/// Each channel of a 4-channel buffer is box-filtered independently: an
/// image that is constant per channel must come back identical.
#[test]
fn four_channel_blur_keeps_channels_independent() {
    let (w, h) = (11usize, 9usize);
    let px = [17u8, 64, 130, 255];
    let mut buf: Vec<u8> = px.iter().copied().cycle().take(w * h * 4).collect();

    let mut view = PixelViewMut::new_tight(&mut buf, w, h, PixelFormat::Prgb32).unwrap();
    blur_in_place(&mut view, 3.0, &mut BlurScratch::new()).unwrap();

    for chunk in buf.chunks_exact(4) {
        assert_eq!(chunk, px);
    }
}

/// A strided mask blur must write only the declared tight region of each
/// row and leave the padding bytes bit-for-bit alone.
#[test]
fn mask_blur_respects_row_padding() {
    let (w, h, stride) = (7usize, 6usize, 12usize);
    let mut buf = vec![0xABu8; stride * h];
    for y in 0..h {
        for x in 0..w {
            buf[y * stride + x] = if (x, y) == (3, 3) { 200 } else { 0 };
        }
    }

    let mut view = PixelViewMut::new(&mut buf, w, h, stride, PixelFormat::A8).unwrap();
    blur_in_place(&mut view, 1.0, &mut BlurScratch::new()).unwrap();

    let mut spread = 0usize;
    for y in 0..h {
        for x in w..stride {
            assert_eq!(buf[y * stride + x], 0xAB, "padding touched at ({x},{y})");
        }
        for x in 0..w {
            if buf[y * stride + x] != 0 {
                spread += 1;
            }
        }
    }
    assert!(spread > 1, "impulse did not spread");
}

/// Padded and tight layouts of the same logical image must blur to the same
/// pixels.
#[test]
fn strided_and_tight_buffers_agree() {
    let (w, h, stride) = (8usize, 8usize, 11usize);
    let pixel_at = |x: usize, y: usize| ((x * 31 + y * 7) % 256) as u8;

    let mut tight: Vec<u8> = (0..h).flat_map(|y| (0..w).map(move |x| pixel_at(x, y))).collect();
    let mut padded = vec![0u8; stride * h];
    for y in 0..h {
        for x in 0..w {
            padded[y * stride + x] = pixel_at(x, y);
        }
    }

    let mut scratch = BlurScratch::new();
    let mut view = PixelViewMut::new_tight(&mut tight, w, h, PixelFormat::A8).unwrap();
    blur_in_place(&mut view, 2.2, &mut scratch).unwrap();
    let mut view = PixelViewMut::new(&mut padded, w, h, stride, PixelFormat::A8).unwrap();
    blur_in_place(&mut view, 2.2, &mut scratch).unwrap();

    for y in 0..h {
        assert_eq!(
            &padded[y * stride..y * stride + w],
            &tight[y * w..(y + 1) * w],
            "row {y} differs"
        );
    }
}
