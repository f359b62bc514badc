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
use crate::numerics::clip_to_u8;
use crate::reconstruct_error::{check_overflow_v2, check_rgb_destination};
use crate::ycbcr_support::*;
use crate::{PackedYCbCrImage, ReconstructError, RgbFrame};
use num_traits::AsPrimitive;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};
use tracing::debug;

#[inline(always)]
fn convert_row<V: Copy + 'static + AsPrimitive<f32>, const DESTINATION_CHANNELS: u8>(
    transform: &YCbCrInverseTransform<f32>,
    y_plane: &[V],
    cb_plane: &[V],
    cr_plane: &[V],
    rgba: &mut [u8],
) {
    let dst_chans: RgbChannels = DESTINATION_CHANNELS.into();
    let channels = dst_chans.get_channels_count();

    for (((rgba, &y_src), &cb_src), &cr_src) in rgba
        .chunks_exact_mut(channels)
        .zip(y_plane.iter())
        .zip(cb_plane.iter())
        .zip(cr_plane.iter())
    {
        let y: f32 = y_src.as_();
        let cb: f32 = cb_src.as_();
        let cr: f32 = cr_src.as_();

        let y_value = (y - transform.bias_y) * transform.y_coef;
        let cb_value = cb - transform.bias_uv;
        let cr_value = cr - transform.bias_uv;

        let r = y_value + transform.cr_coef * cr_value;
        let g = y_value - transform.g_coeff_2 * cb_value - transform.g_coeff_1 * cr_value;
        let b = y_value + transform.cb_coef * cb_value;

        rgba[dst_chans.get_r_channel_offset()] = clip_to_u8(r);
        rgba[dst_chans.get_g_channel_offset()] = clip_to_u8(g);
        rgba[dst_chans.get_b_channel_offset()] = clip_to_u8(b);
        if dst_chans.has_alpha() {
            rgba[dst_chans.get_a_channel_offset()] = 255;
        }
    }
}

fn ycbcr_to_rgbx_impl<const DESTINATION_CHANNELS: u8, const SAMPLING: u8>(
    image: &PackedYCbCrImage,
    rgba: &mut [u8],
    rgba_stride: u32,
) -> Result<(), ReconstructError> {
    let subsampling: ChromaSubsampling = SAMPLING.into();
    let dst_chans: RgbChannels = DESTINATION_CHANNELS.into();
    let channels = dst_chans.get_channels_count();

    image.check_constraints()?;
    check_rgb_destination(rgba, rgba_stride, image.width, image.height, channels)?;

    debug!(
        width = image.width,
        height = image.height,
        down_factor = image.down_factor,
        subsampling = %subsampling,
        chroma = %subsampling.chroma_resample_method(),
        "reconstructing packed YCbCr frame"
    );

    let planes = image.deinterleave()?.resample(
        image.width,
        image.height,
        subsampling.luma_resample_method(),
        subsampling.chroma_resample_method(),
    )?;

    let transform = YCbCrInverseTransform::BT601;
    let width = image.width as usize;

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = rgba
            .par_chunks_exact_mut(rgba_stride as usize)
            .zip(planes.y_plane.par_chunks_exact(width))
            .zip(planes.cb_plane.par_chunks_exact(width))
            .zip(planes.cr_plane.par_chunks_exact(width));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = rgba
            .chunks_exact_mut(rgba_stride as usize)
            .zip(planes.y_plane.chunks_exact(width))
            .zip(planes.cb_plane.chunks_exact(width))
            .zip(planes.cr_plane.chunks_exact(width));
    }
    iter.for_each(|(((rgba, y_plane), cb_plane), cr_plane)| {
        convert_row::<u8, DESTINATION_CHANNELS>(
            &transform,
            y_plane,
            cb_plane,
            cr_plane,
            &mut rgba[..width * channels],
        );
    });

    Ok(())
}

fn ycbcr_to_rgbx<const DESTINATION_CHANNELS: u8>(
    image: &PackedYCbCrImage,
    rgba: &mut [u8],
    rgba_stride: u32,
    subsampling: ChromaSubsampling,
) -> Result<(), ReconstructError> {
    match subsampling {
        ChromaSubsampling::Yuv420 => ycbcr_to_rgbx_impl::<
            DESTINATION_CHANNELS,
            { ChromaSubsampling::Yuv420 as u8 },
        >(image, rgba, rgba_stride),
        ChromaSubsampling::Yuv444 => ycbcr_to_rgbx_impl::<
            DESTINATION_CHANNELS,
            { ChromaSubsampling::Yuv444 as u8 },
        >(image, rgba, rgba_stride),
    }
}

/// Convert packed subsampled YCbCr to RGB format.
///
/// Luma is restored with nearest neighbour, chroma with bilinear for 4:2:0
/// and nearest neighbour for 4:4:4, then converted with the fixed BT.601
/// limited range matrix. Values are clipped and truncated to 8 bit.
///
/// # Arguments
///
/// * `image` - Source packed image.
/// * `rgb` - A mutable slice to store the converted RGB data.
/// * `rgb_stride` - Elements per RGB row.
/// * `subsampling` - see [ChromaSubsampling].
///
/// # Errors
///
/// Returns an error if the packed data length doesn't match the reduced
/// size, if the down factor doesn't divide the image size, or if the
/// destination doesn't fit `rgb_stride * height` elements.
///
pub fn ycbcr_to_rgb(
    image: &PackedYCbCrImage,
    rgb: &mut [u8],
    rgb_stride: u32,
    subsampling: ChromaSubsampling,
) -> Result<(), ReconstructError> {
    ycbcr_to_rgbx::<{ RgbChannels::Rgb as u8 }>(image, rgb, rgb_stride, subsampling)
}

/// Convert packed subsampled YCbCr to BGR format.
///
/// Same as [ycbcr_to_rgb] with red and blue swapped.
pub fn ycbcr_to_bgr(
    image: &PackedYCbCrImage,
    bgr: &mut [u8],
    bgr_stride: u32,
    subsampling: ChromaSubsampling,
) -> Result<(), ReconstructError> {
    ycbcr_to_rgbx::<{ RgbChannels::Bgr as u8 }>(image, bgr, bgr_stride, subsampling)
}

/// Convert packed subsampled YCbCr to RGBA format, alpha is set to 255.
pub fn ycbcr_to_rgba(
    image: &PackedYCbCrImage,
    rgba: &mut [u8],
    rgba_stride: u32,
    subsampling: ChromaSubsampling,
) -> Result<(), ReconstructError> {
    ycbcr_to_rgbx::<{ RgbChannels::Rgba as u8 }>(image, rgba, rgba_stride, subsampling)
}

/// Convert packed subsampled YCbCr to BGRA format, alpha is set to 255.
pub fn ycbcr_to_bgra(
    image: &PackedYCbCrImage,
    bgra: &mut [u8],
    bgra_stride: u32,
    subsampling: ChromaSubsampling,
) -> Result<(), ReconstructError> {
    ycbcr_to_rgbx::<{ RgbChannels::Bgra as u8 }>(image, bgra, bgra_stride, subsampling)
}

/// Reconstructs a full resolution RGB frame from raw packed YCbCr bytes.
///
/// `raw` must hold exactly `(height / down_factor) * (width / down_factor) * 3`
/// bytes of interleaved `Y, Cb, Cr` samples.
pub fn convert(
    raw: &[u8],
    width: u32,
    height: u32,
    down_factor: u32,
    subsampling: ChromaSubsampling,
) -> Result<RgbFrame, ReconstructError> {
    let image = PackedYCbCrImage {
        data: raw,
        width,
        height,
        down_factor,
    };
    image.check_constraints()?;
    let rgb_stride = check_overflow_v2(width as usize, 3)?;
    let rgb_stride_u32 = u32::try_from(rgb_stride).map_err(|_| ReconstructError::PointerOverflow)?;
    let mut data = vec![0u8; check_overflow_v2(rgb_stride, height as usize)?];
    ycbcr_to_rgb(&image, &mut data, rgb_stride_u32, subsampling)?;
    Ok(RgbFrame {
        data,
        width,
        height,
    })
}
