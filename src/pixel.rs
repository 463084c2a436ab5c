use crate::error::{RasterError, RasterResult};

/// Pixel layouts the image-space operators understand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PixelFormat {
    /// Single 8-bit alpha/mask channel.
    A8,
    /// Premultiplied BGRA, 8 bits per channel.
    Prgb32,
    /// BGRX with an unused fourth byte; storable but not blurrable.
    Xrgb32,
}

impl PixelFormat {
    pub fn channels(self) -> usize {
        match self {
            Self::A8 => 1,
            Self::Prgb32 | Self::Xrgb32 => 4,
        }
    }
}

/// Mutable view over externally owned pixel storage.
///
/// Rows are `stride` bytes apart and may carry padding past the tight
/// `width * channels` payload; the padding is never read or written.
#[derive(Debug)]
pub struct PixelViewMut<'a> {
    data: &'a mut [u8],
    width: usize,
    height: usize,
    stride: usize,
    format: PixelFormat,
}

impl<'a> PixelViewMut<'a> {
    pub fn new(
        data: &'a mut [u8],
        width: usize,
        height: usize,
        stride: usize,
        format: PixelFormat,
    ) -> RasterResult<Self> {
        let row_bytes = width
            .checked_mul(format.channels())
            .ok_or_else(|| RasterError::data_access("row byte size overflows"))?;
        if stride < row_bytes {
            return Err(RasterError::data_access(format!(
                "stride {stride} is smaller than the tight row size {row_bytes}"
            )));
        }
        let needed = if height == 0 {
            0
        } else {
            stride
                .checked_mul(height - 1)
                .and_then(|v| v.checked_add(row_bytes))
                .ok_or_else(|| RasterError::data_access("image byte size overflows"))?
        };
        if data.len() < needed {
            return Err(RasterError::data_access(format!(
                "buffer holds {} bytes but {height} rows at stride {stride} need {needed}",
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
            format,
        })
    }

    /// View over tightly packed storage (`stride == width * channels`).
    pub fn new_tight(
        data: &'a mut [u8],
        width: usize,
        height: usize,
        format: PixelFormat,
    ) -> RasterResult<Self> {
        let stride = width * format.channels();
        Self::new(data, width, height, stride, format)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.width * self.format.channels()]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        let row_bytes = self.width * self.format.channels();
        &mut self.data[start..start + row_bytes]
    }

    pub(crate) fn bytes(&self) -> &[u8] {
        self.data
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        self.data
    }
}
