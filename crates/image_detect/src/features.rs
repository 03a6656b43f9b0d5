// Feature-point detection with FAST-9 corners, drawn onto the original image.

use image::{GrayImage, Rgb, RgbImage};
use imageproc::corners::{Corner, corners_fast9};
use imageproc::drawing::draw_hollow_circle_mut;

const MARKER_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

pub fn detect_keypoints(gray: &GrayImage, threshold: u8) -> Vec<Corner> {
    corners_fast9(gray, threshold)
}

/// Copy of `image` with a hollow circle around every keypoint.
pub fn draw_keypoints(image: &RgbImage, corners: &[Corner], radius: i32) -> RgbImage {
    let mut annotated = image.clone();
    for corner in corners {
        draw_hollow_circle_mut(
            &mut annotated,
            (corner.x as i32, corner.y as i32),
            radius,
            MARKER_COLOR,
        );
    }
    annotated
}
