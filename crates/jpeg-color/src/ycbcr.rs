//! YCbCr color space conversion
//!
//! Studio-swing coefficients scaled by 256, evaluated in `f64`. Results are
//! neither rounded nor clamped, so out-of-gamut inputs produce values outside
//! `[0, 255]`; clamping happens when pixels are written to a byte raster.

/// Rows of the forward RGB -> YCbCr matrix, before division by 256
const RGB_TO_YCBCR: [[f64; 3]; 3] = [
    [65.738, 129.057, 24.064],
    [-37.945, -74.494, 112.439],
    [112.439, -94.154, -18.285],
];

/// Offsets added after the forward matrix
const YCBCR_OFFSET: [f64; 3] = [16.0, 128.0, 128.0];

/// Luma weight shared by all three inverse rows
const Y_TO_RGB: f64 = 298.082;

const CR_TO_R: f64 = 408.583;
const CB_TO_G: f64 = 100.291;
const CR_TO_G: f64 = 208.120;
const CB_TO_B: f64 = 516.412;

/// Constant terms of the inverse transform
const RGB_OFFSET: [f64; 3] = [-222.921, 135.576, -276.836];

/// Luma from RGB
#[inline]
pub fn luma(r: f64, g: f64, b: f64) -> f64 {
    let m = RGB_TO_YCBCR[0];
    YCBCR_OFFSET[0] + (m[0] * r + m[1] * g + m[2] * b) / 256.0
}

/// Blue-difference chroma from RGB
#[inline]
pub fn chroma_blue(r: f64, g: f64, b: f64) -> f64 {
    let m = RGB_TO_YCBCR[1];
    YCBCR_OFFSET[1] + (m[0] * r + m[1] * g + m[2] * b) / 256.0
}

/// Red-difference chroma from RGB
#[inline]
pub fn chroma_red(r: f64, g: f64, b: f64) -> f64 {
    let m = RGB_TO_YCBCR[2];
    YCBCR_OFFSET[2] + (m[0] * r + m[1] * g + m[2] * b) / 256.0
}

#[inline]
pub fn red(y: f64, _cb: f64, cr: f64) -> f64 {
    (Y_TO_RGB * y + CR_TO_R * cr) / 256.0 + RGB_OFFSET[0]
}

#[inline]
pub fn green(y: f64, cb: f64, cr: f64) -> f64 {
    (Y_TO_RGB * y - CB_TO_G * cb - CR_TO_G * cr) / 256.0 + RGB_OFFSET[1]
}

#[inline]
pub fn blue(y: f64, cb: f64, _cr: f64) -> f64 {
    (Y_TO_RGB * y + CB_TO_B * cb) / 256.0 + RGB_OFFSET[2]
}

/// Convert RGB to YCbCr
pub fn rgb_to_ycbcr(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    (
        luma(r, g, b) as f32,
        chroma_blue(r, g, b) as f32,
        chroma_red(r, g, b) as f32,
    )
}

/// Convert YCbCr to RGB
pub fn ycbcr_to_rgb(y: f32, cb: f32, cr: f32) -> (f32, f32, f32) {
    let (y, cb, cr) = (y as f64, cb as f64, cr as f64);
    (
        red(y, cb, cr) as f32,
        green(y, cb, cr) as f32,
        blue(y, cb, cr) as f32,
    )
}

/// Batch convert an interleaved RGB buffer to YCbCr
pub fn rgb_buffer_to_ycbcr(rgb: &[f32], ycbcr: &mut [f32]) {
    assert_eq!(rgb.len(), ycbcr.len());
    assert_eq!(rgb.len() % 3, 0);

    for (src, dst) in rgb.chunks_exact(3).zip(ycbcr.chunks_exact_mut(3)) {
        let (y, cb, cr) = rgb_to_ycbcr(src[0], src[1], src[2]);
        dst[0] = y;
        dst[1] = cb;
        dst[2] = cr;
    }
}

/// Batch convert an interleaved YCbCr buffer to RGB
pub fn ycbcr_buffer_to_rgb(ycbcr: &[f32], rgb: &mut [f32]) {
    assert_eq!(rgb.len(), ycbcr.len());
    assert_eq!(rgb.len() % 3, 0);

    for (src, dst) in ycbcr.chunks_exact(3).zip(rgb.chunks_exact_mut(3)) {
        let (r, g, b) = ycbcr_to_rgb(src[0], src[1], src[2]);
        dst[0] = r;
        dst[1] = g;
        dst[2] = b;
    }
}
