mod images;
mod numerics;
mod packed_file;
mod reconstruct_error;
mod resample;
mod ycbcr_support;
mod ycbcr_to_rgb;

pub use images::{PackedYCbCrBuffer, PackedYCbCrImage, RgbFrame, YCbCrPlanes};
pub use packed_file::read_packed_ycbcr;
pub use reconstruct_error::{MismatchedSize, ReconstructError};
pub use resample::resample_plane;
pub use ycbcr_support::{ChromaSubsampling, ResampleMethod, RgbChannels, YCbCrInverseTransform};
pub use ycbcr_to_rgb::{convert, ycbcr_to_bgr, ycbcr_to_bgra, ycbcr_to_rgb, ycbcr_to_rgba};
