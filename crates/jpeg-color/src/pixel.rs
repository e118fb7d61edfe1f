//! Three-component pixels tagged with their color representation

use jpeg_core::{Channel, JpegResult, PixelFormat};

use crate::ycbcr;

/// An immutable color sample
///
/// The three stored components are interpreted according to `format`. All six
/// channel accessors are available whatever the stored format; the ones that
/// do not match it are derived on each call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pixel {
    components: [f32; 3],
    format: PixelFormat,
}

impl Pixel {
    pub fn new(c1: f32, c2: f32, c3: f32, format: PixelFormat) -> Self {
        Self {
            components: [c1, c2, c3],
            format,
        }
    }

    /// Build a pixel from a numeric format tag (`0` = RGB, `1` = YCbCr)
    pub fn from_format_code(c1: f32, c2: f32, c3: f32, code: u8) -> JpegResult<Self> {
        let format = PixelFormat::try_from(code)?;
        Ok(Self::new(c1, c2, c3, format))
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, PixelFormat::Rgb)
    }

    pub fn ycbcr(y: f32, cb: f32, cr: f32) -> Self {
        Self::new(y, cb, cr, PixelFormat::YCbCr)
    }

    /// Additive black, the fill value of fresh matrices
    pub const fn black() -> Self {
        Self {
            components: [0.0; 3],
            format: PixelFormat::Rgb,
        }
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Stored components, in the order of `format`
    pub fn components(&self) -> [f32; 3] {
        self.components
    }

    fn stored_f64(&self) -> (f64, f64, f64) {
        let [a, b, c] = self.components;
        (a as f64, b as f64, c as f64)
    }

    pub fn r(&self) -> f32 {
        match self.format {
            PixelFormat::Rgb => self.components[0],
            PixelFormat::YCbCr => {
                let (y, cb, cr) = self.stored_f64();
                ycbcr::red(y, cb, cr) as f32
            }
        }
    }

    pub fn g(&self) -> f32 {
        match self.format {
            PixelFormat::Rgb => self.components[1],
            PixelFormat::YCbCr => {
                let (y, cb, cr) = self.stored_f64();
                ycbcr::green(y, cb, cr) as f32
            }
        }
    }

    pub fn b(&self) -> f32 {
        match self.format {
            PixelFormat::Rgb => self.components[2],
            PixelFormat::YCbCr => {
                let (y, cb, cr) = self.stored_f64();
                ycbcr::blue(y, cb, cr) as f32
            }
        }
    }

    pub fn y(&self) -> f32 {
        match self.format {
            PixelFormat::YCbCr => self.components[0],
            PixelFormat::Rgb => {
                let (r, g, b) = self.stored_f64();
                ycbcr::luma(r, g, b) as f32
            }
        }
    }

    pub fn cb(&self) -> f32 {
        match self.format {
            PixelFormat::YCbCr => self.components[1],
            PixelFormat::Rgb => {
                let (r, g, b) = self.stored_f64();
                ycbcr::chroma_blue(r, g, b) as f32
            }
        }
    }

    pub fn cr(&self) -> f32 {
        match self.format {
            PixelFormat::YCbCr => self.components[2],
            PixelFormat::Rgb => {
                let (r, g, b) = self.stored_f64();
                ycbcr::chroma_red(r, g, b) as f32
            }
        }
    }

    /// Value of a single channel
    pub fn channel(&self, channel: Channel) -> f32 {
        match channel {
            Channel::R => self.r(),
            Channel::G => self.g(),
            Channel::B => self.b(),
            Channel::Y => self.y(),
            Channel::Cb => self.cb(),
            Channel::Cr => self.cr(),
        }
    }

    /// The same color stored in another representation
    pub fn to_format(&self, format: PixelFormat) -> Self {
        if format == self.format {
            return *self;
        }
        match format {
            PixelFormat::Rgb => Self::rgb(self.r(), self.g(), self.b()),
            PixelFormat::YCbCr => Self::ycbcr(self.y(), self.cb(), self.cr()),
        }
    }
}

impl Default for Pixel {
    fn default() -> Self {
        Self::black()
    }
}
