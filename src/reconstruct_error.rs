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
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Debug)]
pub enum ReconstructError {
    DimensionMismatch(MismatchedSize),
    IndivisibleDimensions {
        width: u32,
        height: u32,
        down_factor: u32,
    },
    DestinationSizeMismatch(MismatchedSize),
    MinimumDestinationSizeMismatch(MismatchedSize),
    PointerOverflow,
    ZeroBaseSize,
    InvalidMode(String),
    Io(std::io::Error),
}

impl Display for ReconstructError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ReconstructError::DimensionMismatch(size) => f.write_fmt(format_args!(
                "Packed YCbCr data have invalid size, it must be {}, but it was {}",
                size.expected, size.received
            )),
            ReconstructError::IndivisibleDimensions {
                width,
                height,
                down_factor,
            } => f.write_fmt(format_args!(
                "Down factor {} must evenly divide image size {}x{}",
                down_factor, width, height
            )),
            ReconstructError::DestinationSizeMismatch(size) => f.write_fmt(format_args!(
                "Destination size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            ReconstructError::MinimumDestinationSizeMismatch(size) => f.write_fmt(format_args!(
                "Destination must have size at least {} but it is {}",
                size.expected, size.received
            )),
            ReconstructError::PointerOverflow => {
                f.write_str("Image size overflow pointer capabilities")
            }
            ReconstructError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
            ReconstructError::InvalidMode(mode) => f.write_fmt(format_args!(
                "Unknown chroma subsampling mode '{}', available: 420, 444",
                mode
            )),
            ReconstructError::Io(err) => f.write_fmt(format_args!("I/O failure: {}", err)),
        }
    }
}

impl Error for ReconstructError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReconstructError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ReconstructError {
    fn from(value: std::io::Error) -> Self {
        ReconstructError::Io(value)
    }
}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<usize, ReconstructError> {
    v0.checked_mul(v1).ok_or(ReconstructError::PointerOverflow)
}

#[inline]
pub(crate) fn check_overflow_v3(v0: usize, v1: usize, v2: usize) -> Result<usize, ReconstructError> {
    check_overflow_v2(v0, v1)?
        .checked_mul(v2)
        .ok_or(ReconstructError::PointerOverflow)
}

/// Validates full size against the reduction factor and returns reduced plane size.
#[inline]
pub(crate) fn check_reduced_size(
    width: u32,
    height: u32,
    down_factor: u32,
) -> Result<(usize, usize), ReconstructError> {
    if width == 0 || height == 0 || down_factor == 0 {
        return Err(ReconstructError::ZeroBaseSize);
    }
    if width % down_factor != 0 || height % down_factor != 0 {
        return Err(ReconstructError::IndivisibleDimensions {
            width,
            height,
            down_factor,
        });
    }
    Ok((
        (width / down_factor) as usize,
        (height / down_factor) as usize,
    ))
}

#[inline]
pub(crate) fn check_packed_ycbcr(
    data: &[u8],
    width: u32,
    height: u32,
    down_factor: u32,
) -> Result<(), ReconstructError> {
    let (reduced_width, reduced_height) = check_reduced_size(width, height, down_factor)?;
    let expected = check_overflow_v3(reduced_width, reduced_height, 3)?;
    if data.len() != expected {
        return Err(ReconstructError::DimensionMismatch(MismatchedSize {
            expected,
            received: data.len(),
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_rgb_destination<V>(
    arr: &[V],
    rgb_stride: u32,
    width: u32,
    height: u32,
    channels: usize,
) -> Result<(), ReconstructError> {
    let min_size = check_overflow_v3(width as usize, height as usize, channels)?;
    let size = check_overflow_v2(rgb_stride as usize, height as usize)?;
    if arr.len() != size {
        return Err(ReconstructError::DestinationSizeMismatch(MismatchedSize {
            expected: size,
            received: arr.len(),
        }));
    }
    if size < min_size {
        return Err(ReconstructError::MinimumDestinationSizeMismatch(
            MismatchedSize {
                expected: min_size,
                received: size,
            },
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_size_accepted() {
        let data = vec![0u8; 4 * 3 * 3];
        assert!(check_packed_ycbcr(&data, 8, 6, 2).is_ok());
    }

    #[test]
    fn test_packed_size_mismatch() {
        let data = vec![0u8; 4 * 3 * 3 - 1];
        match check_packed_ycbcr(&data, 8, 6, 2) {
            Err(ReconstructError::DimensionMismatch(size)) => {
                assert_eq!(size.expected, 36);
                assert_eq!(size.received, 35);
            }
            other => panic!("Expected size mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_indivisible_dimensions() {
        let data = vec![0u8; 36];
        assert!(matches!(
            check_packed_ycbcr(&data, 9, 6, 2),
            Err(ReconstructError::IndivisibleDimensions {
                width: 9,
                height: 6,
                down_factor: 2
            })
        ));
        assert!(matches!(
            check_packed_ycbcr(&data, 8, 7, 2),
            Err(ReconstructError::IndivisibleDimensions { .. })
        ));
    }

    #[test]
    fn test_zero_sizes() {
        assert!(matches!(
            check_reduced_size(0, 4, 1),
            Err(ReconstructError::ZeroBaseSize)
        ));
        assert!(matches!(
            check_reduced_size(4, 4, 0),
            Err(ReconstructError::ZeroBaseSize)
        ));
    }

    #[test]
    fn test_destination_checks() {
        let dst = vec![0u8; 10 * 2];
        assert!(check_rgb_destination(&dst, 10, 3, 2, 3).is_ok());
        assert!(matches!(
            check_rgb_destination(&dst, 9, 3, 2, 3),
            Err(ReconstructError::DestinationSizeMismatch(_))
        ));
        let dst = vec![0u8; 8 * 2];
        assert!(matches!(
            check_rgb_destination(&dst, 8, 3, 2, 3),
            Err(ReconstructError::MinimumDestinationSizeMismatch(_))
        ));
    }

    #[test]
    fn test_io_error_source() {
        let err: ReconstructError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(err.source().is_some());
        assert!(err.to_string().contains("missing"));
    }
}
