// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image preprocessing for single-person pose models

use image::{DynamicImage, GenericImageView, Rgb, RgbImage};
use ndarray::Array4;

use super::PoseModelLayout;

/// Default square input size (MoveNet Lightning)
pub const DEFAULT_INPUT_SIZE: u32 = 192;

/// Padding color used for letterboxing
const PAD_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Scaling factor and offsets used during letterboxing
///
/// Maps model-space coordinates back to normalized coordinates of the
/// original image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreprocessInfo {
    /// Scale factor applied
    pub scale: f32,
    /// X offset from padding
    pub offset_x: u32,
    /// Y offset from padding
    pub offset_y: u32,
    /// Original image width
    pub original_width: u32,
    /// Original image height
    pub original_height: u32,
    /// Square model input size
    pub target_size: u32,
}

impl PreprocessInfo {
    /// Calculate preprocessing info for an image
    pub fn new(image: &DynamicImage, target_size: u32) -> Self {
        let (orig_w, orig_h) = image.dimensions();

        if orig_w == 0 || orig_h == 0 {
            return Self {
                scale: 1.0,
                offset_x: 0,
                offset_y: 0,
                original_width: orig_w,
                original_height: orig_h,
                target_size,
            };
        }

        let (new_w, new_h, scale) = fitted_size(orig_w, orig_h, target_size);

        Self {
            scale,
            offset_x: (target_size - new_w) / 2,
            offset_y: (target_size - new_h) / 2,
            original_width: orig_w,
            original_height: orig_h,
            target_size,
        }
    }

    /// Map a pixel coordinate in model input space to [0, 1] coordinates of
    /// the original image
    pub fn to_normalized(&self, x: f32, y: f32) -> (f32, f32) {
        if self.original_width == 0 || self.original_height == 0 {
            return (x / self.target_size as f32, y / self.target_size as f32);
        }
        let orig_x = (x - self.offset_x as f32) / self.scale;
        let orig_y = (y - self.offset_y as f32) / self.scale;
        (
            orig_x / self.original_width as f32,
            orig_y / self.original_height as f32,
        )
    }
}

fn fitted_size(orig_w: u32, orig_h: u32, target_size: u32) -> (u32, u32, f32) {
    let scale = (target_size as f32 / orig_w as f32).min(target_size as f32 / orig_h as f32);
    let new_w = ((orig_w as f32 * scale).round() as u32).clamp(1, target_size);
    let new_h = ((orig_h as f32 * scale).round() as u32).clamp(1, target_size);
    (new_w, new_h, scale)
}

/// Resize image with aspect ratio preservation and padding
///
/// The image is scaled to fit within target_size x target_size and centered
/// on a black square.
pub fn resize_with_padding(image: &DynamicImage, target_size: u32) -> DynamicImage {
    let (orig_w, orig_h) = image.dimensions();

    if orig_w == 0 || orig_h == 0 {
        return DynamicImage::ImageRgb8(RgbImage::from_pixel(target_size, target_size, PAD_COLOR));
    }

    let (new_w, new_h, _) = fitted_size(orig_w, orig_h, target_size);

    let resized = image.resize_exact(new_w, new_h, image::imageops::FilterType::Triangle);
    let rgb = resized.to_rgb8();

    let mut output = RgbImage::from_pixel(target_size, target_size, PAD_COLOR);
    let offset_x = (target_size - new_w) / 2;
    let offset_y = (target_size - new_h) / 2;
    image::imageops::replace(&mut output, &rgb, offset_x as i64, offset_y as i64);

    DynamicImage::ImageRgb8(output)
}

/// Preprocess an image for pose inference
///
/// Steps:
/// 1. Letterbox to target_size x target_size
/// 2. Convert to RGB
/// 3. Scale pixels to the range the layout expects
/// 4. Convert to NHWC tensor format [1, H, W, 3]
pub fn preprocess_for_pose(
    image: &DynamicImage,
    target_size: u32,
    layout: PoseModelLayout,
) -> (Array4<f32>, PreprocessInfo) {
    let info = PreprocessInfo::new(image, target_size);
    let rgb = resize_with_padding(image, target_size).to_rgb8();
    let pixel_scale = layout.pixel_scale();

    let size = target_size as usize;
    let mut tensor = Array4::zeros((1, size, size, 3));
    for (x, y, pixel) in rgb.enumerate_pixels() {
        for c in 0..3 {
            tensor[[0, y as usize, x as usize, c]] = pixel[c] as f32 * pixel_scale;
        }
    }

    (tensor, info)
}
