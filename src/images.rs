/*
 * Copyright (c) Radzivon Bartoshyk, 10/2026. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::reconstruct_error::{check_packed_ycbcr, check_reduced_size};
use crate::ycbcr_support::ResampleMethod;
use crate::{resample_plane, ReconstructError};

#[derive(Debug, Copy, Clone)]
/// Non-owning view of a packed, subsampled YCbCr frame.
///
/// Samples are interleaved `Y, Cb, Cr` triples stored row-major at
/// `(width / down_factor) x (height / down_factor)`.
pub struct PackedYCbCrImage<'a> {
    pub data: &'a [u8],
    /// Full resolution width
    pub width: u32,
    /// Full resolution height
    pub height: u32,
    pub down_factor: u32,
}

impl PackedYCbCrImage<'_> {
    pub fn check_constraints(&self) -> Result<(), ReconstructError> {
        check_packed_ycbcr(self.data, self.width, self.height, self.down_factor)
    }

    /// Reduced plane size as `(width, height)`.
    pub fn reduced_size(&self) -> Result<(u32, u32), ReconstructError> {
        let (w, h) = check_reduced_size(self.width, self.height, self.down_factor)?;
        Ok((w as u32, h as u32))
    }

    /// Splits interleaved triples into separate planes.
    pub fn deinterleave(&self) -> Result<YCbCrPlanes, ReconstructError> {
        self.check_constraints()?;
        let (width, height) = self.reduced_size()?;
        let samples = self.data.len() / 3;
        let mut y_plane = Vec::with_capacity(samples);
        let mut cb_plane = Vec::with_capacity(samples);
        let mut cr_plane = Vec::with_capacity(samples);
        for triple in self.data.chunks_exact(3) {
            y_plane.push(triple[0]);
            cb_plane.push(triple[1]);
            cr_plane.push(triple[2]);
        }
        Ok(YCbCrPlanes {
            y_plane,
            cb_plane,
            cr_plane,
            width,
            height,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Owned packed frame, as read from disk
pub struct PackedYCbCrBuffer {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub down_factor: u32,
}

impl PackedYCbCrBuffer {
    pub fn as_image(&self) -> PackedYCbCrImage<'_> {
        PackedYCbCrImage {
            data: &self.data,
            width: self.width,
            height: self.height,
            down_factor: self.down_factor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Three tightly packed planes of equal size
pub struct YCbCrPlanes {
    pub y_plane: Vec<u8>,
    pub cb_plane: Vec<u8>,
    pub cr_plane: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl YCbCrPlanes {
    /// Resizes every plane to `width x height`.
    pub fn resample(
        &self,
        width: u32,
        height: u32,
        luma: ResampleMethod,
        chroma: ResampleMethod,
    ) -> Result<YCbCrPlanes, ReconstructError> {
        let resize =
            |plane: &[u8], method| resample_plane(plane, self.width, self.height, width, height, method);
        Ok(YCbCrPlanes {
            y_plane: resize(&self.y_plane, luma)?,
            cb_plane: resize(&self.cb_plane, chroma)?,
            cr_plane: resize(&self.cr_plane, chroma)?,
            width,
            height,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Full resolution interleaved RGB, 3 bytes per pixel, row-major
pub struct RgbFrame {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl RgbFrame {
    /// Pixel at `(x, y)` as `[r, g, b]`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let offset = (y as usize * self.width as usize + x as usize) * 3;
        [
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
        ]
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deinterleave_order() {
        // 2x1 reduced, interleaved Y, Cb, Cr
        let data = [10u8, 20, 30, 11, 21, 31];
        let image = PackedYCbCrImage {
            data: &data,
            width: 4,
            height: 2,
            down_factor: 2,
        };
        let planes = image.deinterleave().unwrap();
        assert_eq!(planes.y_plane, [10, 11]);
        assert_eq!(planes.cb_plane, [20, 21]);
        assert_eq!(planes.cr_plane, [30, 31]);
        assert_eq!((planes.width, planes.height), (2, 1));
    }

    #[test]
    fn test_deinterleave_rejects_bad_length() {
        let data = [0u8; 7];
        let image = PackedYCbCrImage {
            data: &data,
            width: 4,
            height: 2,
            down_factor: 2,
        };
        assert!(matches!(
            image.deinterleave(),
            Err(ReconstructError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_resample_keeps_luma_nearest() {
        let planes = YCbCrPlanes {
            y_plane: vec![0, 255],
            cb_plane: vec![0, 255],
            cr_plane: vec![0, 255],
            width: 2,
            height: 1,
        };
        let full = planes
            .resample(4, 2, ResampleMethod::Nearest, ResampleMethod::Bilinear)
            .unwrap();
        assert_eq!(full.y_plane, [0, 0, 255, 255, 0, 0, 255, 255]);
        assert_eq!(full.cb_plane[..4], [0, 64, 191, 255]);
        assert_eq!(full.cb_plane, full.cr_plane);
    }
}
