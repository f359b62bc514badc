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
mod support;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use support::{reconstruct_rgba, save_png, EncodedFrame};
use tracing::info;
use ycbcr_reconstruct::{convert, read_packed_ycbcr, ChromaSubsampling};

/// Reconstructs an RGB PNG from a raw packed, chroma subsampled YCbCr frame.
#[derive(Parser, Debug)]
#[command(name = "reconstruct")]
struct Args {
    /// Raw interleaved Y, Cb, Cr samples at reduced resolution
    #[arg(long, default_value = "ycbcr_out.bin")]
    input: PathBuf,

    /// Output PNG
    #[arg(long, default_value = "reconstructed.png")]
    output: PathBuf,

    /// Full resolution width
    #[arg(long, default_value_t = 512)]
    width: u32,

    /// Full resolution height
    #[arg(long, default_value_t = 512)]
    height: u32,

    /// Plane reduction factor, must divide width and height
    #[arg(long, default_value_t = 2)]
    down_factor: u32,

    /// Chroma subsampling: 420 (bilinear chroma) or 444 (nearest chroma)
    #[arg(long, default_value = "420")]
    mode: ChromaSubsampling,

    /// Write RGBA with opaque alpha instead of RGB
    #[arg(long, default_value_t = false)]
    alpha: bool,
}

fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let start = Instant::now();

    let packed = read_packed_ycbcr(&args.input, args.width, args.height, args.down_factor)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    let (reduced_width, reduced_height) = packed.as_image().reduced_size()?;
    info!(
        "Loaded {} ({}x{} planes, mode {})",
        args.input.display(),
        reduced_width,
        reduced_height,
        args.mode
    );

    let frame: EncodedFrame = if args.alpha {
        reconstruct_rgba(&packed.as_image(), args.mode)?
    } else {
        convert(
            &packed.data,
            args.width,
            args.height,
            args.down_factor,
            args.mode,
        )
        .context("failed to reconstruct RGB frame")?
        .into()
    };

    save_png(&args.output, &frame)?;
    info!(
        "Wrote {} ({}x{}) in {:?}",
        args.output.display(),
        frame.width,
        frame.height,
        start.elapsed()
    );
    Ok(())
}
