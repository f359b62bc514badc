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
use crate::ReconstructError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Fixed BT.601 inverse transform for limited range 8-bit YCbCr.
///
/// R = y_coef * (Y - bias_y) + cr_coef * (Cr - bias_uv)
/// G = y_coef * (Y - bias_y) - g_coeff_1 * Cr' - g_coeff_2 * Cb'
/// B = y_coef * (Y - bias_y) + cb_coef * (Cb - bias_uv)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct YCbCrInverseTransform<T> {
    pub y_coef: T,
    pub cr_coef: T,
    pub cb_coef: T,
    pub g_coeff_1: T,
    pub g_coeff_2: T,
    pub bias_y: T,
    pub bias_uv: T,
}

impl YCbCrInverseTransform<f32> {
    pub const BT601: YCbCrInverseTransform<f32> = YCbCrInverseTransform {
        y_coef: 1.164f32,
        cr_coef: 1.596f32,
        cb_coef: 2.017f32,
        g_coeff_1: 0.813f32,
        g_coeff_2: 0.392f32,
        bias_y: 16f32,
        bias_uv: 128f32,
    };
}

impl Default for YCbCrInverseTransform<f32> {
    fn default() -> Self {
        Self::BT601
    }
}

/// Interpolation used to bring a reduced plane back to full resolution
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ResampleMethod {
    Nearest = 0,
    Bilinear = 1,
}

impl From<u8> for ResampleMethod {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => ResampleMethod::Nearest,
            1 => ResampleMethod::Bilinear,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl Display for ResampleMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ResampleMethod::Nearest => f.write_str("nearest"),
            ResampleMethod::Bilinear => f.write_str("bilinear"),
        }
    }
}

/// Declares how the chroma planes of a packed frame were produced.
///
/// Only the chroma interpolation depends on this value, luma is always
/// restored with nearest neighbour.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ChromaSubsampling {
    Yuv420 = 0,
    Yuv444 = 1,
}

impl From<u8> for ChromaSubsampling {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => ChromaSubsampling::Yuv420,
            1 => ChromaSubsampling::Yuv444,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl ChromaSubsampling {
    /// Interpolation applied to Cb and Cr planes.
    #[inline]
    pub const fn chroma_resample_method(&self) -> ResampleMethod {
        match self {
            ChromaSubsampling::Yuv420 => ResampleMethod::Bilinear,
            ChromaSubsampling::Yuv444 => ResampleMethod::Nearest,
        }
    }

    /// Interpolation applied to the Y plane, independent of subsampling.
    #[inline]
    pub const fn luma_resample_method(&self) -> ResampleMethod {
        ResampleMethod::Nearest
    }
}

impl Display for ChromaSubsampling {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ChromaSubsampling::Yuv420 => f.write_str("420"),
            ChromaSubsampling::Yuv444 => f.write_str("444"),
        }
    }
}

impl FromStr for ChromaSubsampling {
    type Err = ReconstructError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "420" | "4:2:0" | "yuv420" => Ok(ChromaSubsampling::Yuv420),
            "444" | "4:4:4" | "yuv444" => Ok(ChromaSubsampling::Yuv444),
            _ => Err(ReconstructError::InvalidMode(s.to_string())),
        }
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RgbChannels {
    Rgb = 0,
    Rgba = 1,
    Bgra = 2,
    Bgr = 3,
}

impl From<u8> for RgbChannels {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => RgbChannels::Rgb,
            1 => RgbChannels::Rgba,
            2 => RgbChannels::Bgra,
            3 => RgbChannels::Bgr,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl RgbChannels {
    #[inline(always)]
    pub const fn get_channels_count(&self) -> usize {
        match self {
            RgbChannels::Rgb | RgbChannels::Bgr => 3,
            RgbChannels::Rgba | RgbChannels::Bgra => 4,
        }
    }

    #[inline(always)]
    pub const fn has_alpha(&self) -> bool {
        match self {
            RgbChannels::Rgb | RgbChannels::Bgr => false,
            RgbChannels::Rgba | RgbChannels::Bgra => true,
        }
    }

    #[inline(always)]
    pub const fn get_r_channel_offset(&self) -> usize {
        match self {
            RgbChannels::Rgb | RgbChannels::Rgba => 0,
            RgbChannels::Bgra | RgbChannels::Bgr => 2,
        }
    }

    #[inline(always)]
    pub const fn get_g_channel_offset(&self) -> usize {
        1
    }

    #[inline(always)]
    pub const fn get_b_channel_offset(&self) -> usize {
        match self {
            RgbChannels::Rgb | RgbChannels::Rgba => 2,
            RgbChannels::Bgra | RgbChannels::Bgr => 0,
        }
    }

    #[inline(always)]
    pub const fn get_a_channel_offset(&self) -> usize {
        match self {
            RgbChannels::Rgb | RgbChannels::Bgr => 0,
            RgbChannels::Rgba | RgbChannels::Bgra => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_modes() {
        for s in ["420", "4:2:0", "YUV420", " 420 "] {
            assert_eq!(s.parse::<ChromaSubsampling>().unwrap(), ChromaSubsampling::Yuv420);
        }
        for s in ["444", "4:4:4", "yuv444"] {
            assert_eq!(s.parse::<ChromaSubsampling>().unwrap(), ChromaSubsampling::Yuv444);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        for s in ["422", "", "nearest", "4:2:2"] {
            match s.parse::<ChromaSubsampling>() {
                Err(ReconstructError::InvalidMode(mode)) => assert_eq!(mode, s),
                other => panic!("Mode {:?} must be rejected, got {:?}", s, other),
            }
        }
    }

    #[test]
    fn test_display_round_trips() {
        for mode in [ChromaSubsampling::Yuv420, ChromaSubsampling::Yuv444] {
            assert_eq!(mode.to_string().parse::<ChromaSubsampling>().unwrap(), mode);
            assert_eq!(ChromaSubsampling::from(mode as u8), mode);
        }
    }

    #[test]
    fn test_resample_policy() {
        assert_eq!(
            ChromaSubsampling::Yuv420.chroma_resample_method(),
            ResampleMethod::Bilinear
        );
        assert_eq!(
            ChromaSubsampling::Yuv444.chroma_resample_method(),
            ResampleMethod::Nearest
        );
        assert_eq!(
            ChromaSubsampling::Yuv420.luma_resample_method(),
            ResampleMethod::Nearest
        );
    }
}
