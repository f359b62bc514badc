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
use anyhow::{Context, Result};
use image::{ColorType, ImageFormat};
use std::path::Path;
use ycbcr_reconstruct::{ycbcr_to_rgba, ChromaSubsampling, PackedYCbCrImage, RgbFrame};

/// Interleaved 8-bit pixels ready for encoding
pub(crate) struct EncodedFrame {
    pub(crate) data: Vec<u8>,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) color: ColorType,
}

impl From<RgbFrame> for EncodedFrame {
    fn from(frame: RgbFrame) -> Self {
        EncodedFrame {
            width: frame.width,
            height: frame.height,
            data: frame.into_raw(),
            color: ColorType::Rgb8,
        }
    }
}

pub(crate) fn reconstruct_rgba(
    image: &PackedYCbCrImage,
    subsampling: ChromaSubsampling,
) -> Result<EncodedFrame> {
    let stride = image.width as usize * 4;
    let mut data = vec![0u8; stride * image.height as usize];
    ycbcr_to_rgba(image, &mut data, stride as u32, subsampling)
        .context("failed to reconstruct RGBA frame")?;
    Ok(EncodedFrame {
        data,
        width: image.width,
        height: image.height,
        color: ColorType::Rgba8,
    })
}

pub(crate) fn save_png<P: AsRef<Path>>(path: P, frame: &EncodedFrame) -> Result<()> {
    let path = path.as_ref();
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        frame.color,
        ImageFormat::Png,
    )
    .with_context(|| format!("failed to write PNG to {}", path.display()))
}
