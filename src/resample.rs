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
use crate::numerics::qrshr;
use crate::reconstruct_error::{check_overflow_v2, MismatchedSize};
use crate::ycbcr_support::ResampleMethod;
use crate::ReconstructError;
use num_traits::AsPrimitive;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

/// Fractional bits of bilinear weights
const RESIZE_COEF_BITS: i32 = 11;
const RESIZE_COEF_SCALE: f64 = (1 << RESIZE_COEF_BITS) as f64;

#[derive(Debug, Copy, Clone)]
struct BilinearTap {
    index0: usize,
    index1: usize,
    weight0: i32,
    weight1: i32,
}

/// Source index for every destination position, `floor(dst * src / dst_len)`.
fn nearest_offsets(src_len: usize, dst_len: usize) -> Vec<usize> {
    (0..dst_len)
        .map(|dst| ((dst as u64 * src_len as u64 / dst_len as u64) as usize).min(src_len - 1))
        .collect()
}

/// Half pixel centered taps with weights in Q0.11, edges are clamped.
fn bilinear_taps(src_len: usize, dst_len: usize) -> Vec<BilinearTap> {
    let scale = src_len as f64 / dst_len as f64;
    (0..dst_len)
        .map(|dst| {
            let position = (dst as f64 + 0.5) * scale - 0.5;
            let mut index = position.floor() as isize;
            let mut fraction = position - index as f64;
            if index < 0 {
                index = 0;
                fraction = 0.;
            }
            if index as usize >= src_len - 1 {
                index = src_len as isize - 1;
                fraction = 0.;
            }
            let index0 = index as usize;
            BilinearTap {
                index0,
                index1: (index0 + 1).min(src_len - 1),
                weight0: ((1. - fraction) * RESIZE_COEF_SCALE).round() as i32,
                weight1: (fraction * RESIZE_COEF_SCALE).round() as i32,
            }
        })
        .collect()
}

fn resize_nearest<T: Copy + Send + Sync>(
    src: &[T],
    src_width: usize,
    src_height: usize,
    dst: &mut [T],
    dst_width: usize,
    dst_height: usize,
) {
    let x_offsets = nearest_offsets(src_width, dst_width);
    let y_offsets = nearest_offsets(src_height, dst_height);

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst.par_chunks_exact_mut(dst_width).enumerate();
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst.chunks_exact_mut(dst_width).enumerate();
    }
    iter.for_each(|(y, dst_row)| {
        let src_row = &src[y_offsets[y] * src_width..(y_offsets[y] + 1) * src_width];
        for (dst, &x) in dst_row.iter_mut().zip(x_offsets.iter()) {
            *dst = src_row[x];
        }
    });
}

fn resize_bilinear<V, const BIT_DEPTH: usize>(
    src: &[V],
    src_width: usize,
    src_height: usize,
    dst: &mut [V],
    dst_width: usize,
    dst_height: usize,
) where
    V: Copy + Send + Sync + 'static + AsPrimitive<i32>,
    i32: AsPrimitive<V>,
{
    let x_taps = bilinear_taps(src_width, dst_width);
    let y_taps = bilinear_taps(src_height, dst_height);

    // Horizontal pass over every source row, values in Q0.11
    let mut horizontal = vec![0i32; src_height * dst_width];
    for (h_row, src_row) in horizontal
        .chunks_exact_mut(dst_width)
        .zip(src.chunks_exact(src_width))
    {
        for (dst, tap) in h_row.iter_mut().zip(x_taps.iter()) {
            let s0: i32 = src_row[tap.index0].as_();
            let s1: i32 = src_row[tap.index1].as_();
            *dst = s0 * tap.weight0 + s1 * tap.weight1;
        }
    }

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst.par_chunks_exact_mut(dst_width).enumerate();
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst.chunks_exact_mut(dst_width).enumerate();
    }
    iter.for_each(|(y, dst_row)| {
        let tap = y_taps[y];
        let row0 = &horizontal[tap.index0 * dst_width..(tap.index0 + 1) * dst_width];
        let row1 = &horizontal[tap.index1 * dst_width..(tap.index1 + 1) * dst_width];
        for ((dst, &h0), &h1) in dst_row.iter_mut().zip(row0.iter()).zip(row1.iter()) {
            let v = qrshr::<{ RESIZE_COEF_BITS * 2 }, BIT_DEPTH>(
                h0 * tap.weight0 + h1 * tap.weight1,
            );
            *dst = v.as_();
        }
    });
}

/// Resamples a single tightly packed 8-bit plane.
///
/// Nearest takes `floor(x * src_width / dst_width)`, bilinear uses half pixel
/// centers with clamped edges and Q0.11 weights, matching the common
/// imaging library convention for upscaling.
///
/// # Arguments
///
/// * `plane`: Source plane, `src_width * src_height` samples
/// * `dst_width`, `dst_height`: Target size
/// * `method`: see [ResampleMethod]
///
pub fn resample_plane(
    plane: &[u8],
    src_width: u32,
    src_height: u32,
    dst_width: u32,
    dst_height: u32,
    method: ResampleMethod,
) -> Result<Vec<u8>, ReconstructError> {
    if src_width == 0 || src_height == 0 || dst_width == 0 || dst_height == 0 {
        return Err(ReconstructError::ZeroBaseSize);
    }
    let src_size = check_overflow_v2(src_width as usize, src_height as usize)?;
    if plane.len() != src_size {
        return Err(ReconstructError::DimensionMismatch(MismatchedSize {
            expected: src_size,
            received: plane.len(),
        }));
    }
    let dst_size = check_overflow_v2(dst_width as usize, dst_height as usize)?;
    let mut dst = vec![0u8; dst_size];
    match method {
        ResampleMethod::Nearest => resize_nearest(
            plane,
            src_width as usize,
            src_height as usize,
            &mut dst,
            dst_width as usize,
            dst_height as usize,
        ),
        ResampleMethod::Bilinear => resize_bilinear::<u8, 8>(
            plane,
            src_width as usize,
            src_height as usize,
            &mut dst,
            dst_width as usize,
            dst_height as usize,
        ),
    }
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_nearest_replicates_blocks() {
        let plane = [1u8, 2, 3, 4, 5, 6];
        let resized = resample_plane(&plane, 3, 2, 6, 4, ResampleMethod::Nearest).unwrap();
        let expected = [
            1u8, 1, 2, 2, 3, 3, //
            1, 1, 2, 2, 3, 3, //
            4, 4, 5, 5, 6, 6, //
            4, 4, 5, 5, 6, 6,
        ];
        assert_eq!(resized, expected);
    }

    #[test]
    fn test_identity_resize() {
        let mut rng = rand::rng();
        let plane: Vec<u8> = (0..7 * 5).map(|_| rng.random()).collect();
        for method in [ResampleMethod::Nearest, ResampleMethod::Bilinear] {
            let resized = resample_plane(&plane, 7, 5, 7, 5, method).unwrap();
            assert_eq!(resized, plane, "Identity failed for {}", method);
        }
    }

    #[test]
    fn test_bilinear_constant_plane() {
        let value = rand::rng().random_range(0..256) as u8;
        let plane = vec![value; 5 * 3];
        let resized = resample_plane(&plane, 5, 3, 15, 9, ResampleMethod::Bilinear).unwrap();
        assert!(resized.iter().all(|&v| v == value));
    }

    #[test]
    fn test_bilinear_half_pixel_weights() {
        let plane = [0u8, 200];
        let resized = resample_plane(&plane, 2, 1, 4, 1, ResampleMethod::Bilinear).unwrap();
        // edges clamped, inner samples weighted 3/4 and 1/4
        assert_eq!(resized, [0u8, 50, 150, 200]);
    }

    #[test]
    fn test_bilinear_vertical_weights() {
        let plane = [0u8, 0, 100, 100];
        let resized = resample_plane(&plane, 2, 2, 2, 4, ResampleMethod::Bilinear).unwrap();
        assert_eq!(resized, [0u8, 0, 25, 25, 75, 75, 100, 100]);
    }

    #[test]
    fn test_resample_rejects_wrong_plane() {
        let plane = [0u8; 5];
        assert!(matches!(
            resample_plane(&plane, 2, 3, 4, 6, ResampleMethod::Nearest),
            Err(ReconstructError::DimensionMismatch(_))
        ));
        assert!(matches!(
            resample_plane(&plane, 5, 1, 0, 6, ResampleMethod::Nearest),
            Err(ReconstructError::ZeroBaseSize)
        ));
    }

    #[test]
    fn test_taps_clamp_edges() {
        let taps = bilinear_taps(3, 6);
        assert_eq!(taps[0].index0, 0);
        assert_eq!(taps[0].weight0, 2048);
        assert_eq!(taps[0].weight1, 0);
        let last = taps[5];
        assert_eq!(last.index0, 2);
        assert_eq!(last.index1, 2);
        assert_eq!(last.weight1, 0);
    }
}
