//! Conversions to and from `image::RgbImage`

use image::RgbImage;
use jpeg_core::{JpegError, JpegResult, Raster};

use crate::Matrix;

/// Copy an `RgbImage` into a tightly packed raster
pub fn raster_from_rgb_image(image: &RgbImage) -> JpegResult<Raster> {
    let width = image.width() as usize;
    let height = image.height() as usize;
    Raster::from_bytes(image.as_raw().clone(), width, height, width * 3)
}

/// Copy a raster into an `RgbImage`, dropping any stride padding
pub fn rgb_image_from_raster(raster: &Raster) -> JpegResult<RgbImage> {
    let too_large = || JpegError::InvalidDimensions {
        width: raster.width(),
        height: raster.height(),
    };
    let width = u32::try_from(raster.width()).map_err(|_| too_large())?;
    let height = u32::try_from(raster.height()).map_err(|_| too_large())?;

    let mut data = Vec::with_capacity(raster.width() * raster.height() * 3);
    for y in 0..raster.height() {
        data.extend_from_slice(raster.row(y));
    }

    RgbImage::from_raw(width, height, data).ok_or_else(too_large)
}

impl Matrix {
    pub fn from_rgb_image(image: &RgbImage) -> JpegResult<Self> {
        Ok(Self::from_raster(&raster_from_rgb_image(image)?))
    }

    /// Export the region requested at construction as an `RgbImage`
    pub fn to_rgb_image(&self) -> JpegResult<RgbImage> {
        rgb_image_from_raster(&self.to_original_raster()?)
    }
}
