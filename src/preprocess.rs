//! Image decoding and model-input preprocessing.
//!
//! The predict endpoint feeds uploaded bytes through this module: decode,
//! resize to a fixed square resolution, and normalize ResNet-50 style. The
//! resulting tensor is exactly what a convolutional classifier would consume;
//! no model exists yet, so callers discard it after the placeholder response.

use image::imageops::FilterType;
use ndarray::Array4;

/// Default square edge length for model input (ResNet-50).
pub const DEFAULT_INPUT_SIZE: u32 = 224;

/// Per-channel ImageNet means in BGR order, as subtracted by ResNet-50
/// "caffe" preprocessing.
const IMAGENET_MEAN_BGR: [f32; 3] = [103.939, 116.779, 123.68];

/// Decode `bytes`, resize to a `size`×`size` square with bicubic filtering,
/// and normalize: channels reordered RGB→BGR and ImageNet channel means
/// subtracted. Pixel values stay in the 0..255 scale (no division by 255).
///
/// Returns an NHWC tensor with a leading batch dimension of 1.
pub fn preprocess_image(bytes: &[u8], size: u32) -> Result<Array4<f32>, image::ImageError> {
    let img = image::load_from_memory(bytes)?;
    let resized = img.resize_exact(size, size, FilterType::CatmullRom);
    let rgb = resized.to_rgb8();

    let edge = size as usize;
    let mut tensor = Array4::<f32>::zeros((1, edge, edge, 3));

    for (x, y, pixel) in rgb.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        let (x, y) = (x as usize, y as usize);
        tensor[[0, y, x, 0]] = f32::from(b) - IMAGENET_MEAN_BGR[0];
        tensor[[0, y, x, 1]] = f32::from(g) - IMAGENET_MEAN_BGR[1];
        tensor[[0, y, x, 2]] = f32::from(r) - IMAGENET_MEAN_BGR[2];
    }

    Ok(tensor)
}
