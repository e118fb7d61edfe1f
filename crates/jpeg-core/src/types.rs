//! Core types for the block transform pipeline

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use crate::{JpegError, JpegResult};

/// Interpretation of the three components stored in a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PixelFormat {
    /// Additive red/green/blue
    Rgb,
    /// Luma plus blue-difference and red-difference chroma
    YCbCr,
}

impl PixelFormat {
    /// Numeric tag used by `TryFrom<u8>`
    pub fn code(&self) -> u8 {
        match self {
            PixelFormat::Rgb => 0,
            PixelFormat::YCbCr => 1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PixelFormat::Rgb => "rgb",
            PixelFormat::YCbCr => "ycbcr",
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for PixelFormat {
    type Error = JpegError;

    fn try_from(code: u8) -> JpegResult<Self> {
        match code {
            0 => Ok(PixelFormat::Rgb),
            1 => Ok(PixelFormat::YCbCr),
            other => Err(JpegError::InvalidFormat(format!("code {other}"))),
        }
    }
}

impl FromStr for PixelFormat {
    type Err = JpegError;

    fn from_str(s: &str) -> JpegResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "rgb" => Ok(PixelFormat::Rgb),
            "ycbcr" => Ok(PixelFormat::YCbCr),
            _ => Err(JpegError::InvalidFormat(s.to_string())),
        }
    }
}

/// A single observable channel of a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    R,
    G,
    B,
    Y,
    Cb,
    Cr,
}

impl Channel {
    /// Channels of the luma/chroma representation, in storage order
    pub const YCBCR: [Channel; 3] = [Channel::Y, Channel::Cb, Channel::Cr];

    /// Channels of the additive representation, in storage order
    pub const RGB: [Channel; 3] = [Channel::R, Channel::G, Channel::B];
}

/// Image dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Both sides rounded up to the next multiple of `block`
    pub fn padded_to(&self, block: usize) -> Self {
        Self {
            width: self.width.next_multiple_of(block),
            height: self.height.next_multiple_of(block),
        }
    }
}

/// Floating-point type a transform grid can hold
///
/// Transforms accumulate in `f64` whatever the grid type, so the trait only
/// needs lossless-enough conversions to and from `f64`.
pub trait Scalar: Float + Send + Sync + fmt::Debug + Default + 'static {
    fn as_f64(self) -> f64;
    fn cast_from_f64(value: f64) -> Self;
}

impl Scalar for f32 {
    fn as_f64(self) -> f64 {
        self as f64
    }

    fn cast_from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Scalar for f64 {
    fn as_f64(self) -> f64 {
        self
    }

    fn cast_from_f64(value: f64) -> Self {
        value
    }
}
