// Sobel edge detection on grayscale images.
//
// Rows of the output are computed in parallel inside the processor's rayon
// pool; border pixels read the nearest in-bounds neighbor.

use image::GrayImage;
use rayon::{ThreadPool, prelude::*};

pub struct Kernel3X3 {
    m: [[f32; 3]; 3],
}

impl Kernel3X3 {
    pub fn sobel_x() -> Self {
        Self {
            m: [
                [-1.0, 0.0, 1.0], //
                [-2.0, 0.0, 2.0], //
                [-1.0, 0.0, 1.0], //
            ],
        }
    }

    pub fn sobel_y() -> Self {
        Self {
            m: [
                [-1.0, -2.0, -1.0], //
                [0.0, 0.0, 0.0],    //
                [1.0, 2.0, 1.0],    //
            ],
        }
    }

    /// Kernel response centered at (x, y).
    pub fn apply_clamped(&self, buf: &GrayImage, x: u32, y: u32) -> f32 {
        let (width, height) = buf.dimensions();
        let mut acc = 0.0;

        for (ky, row) in self.m.iter().enumerate() {
            for (kx, weight) in row.iter().enumerate() {
                // we act as if the image were constant outside the border
                let sx = (x as i64 + kx as i64 - 1).clamp(0, width as i64 - 1) as u32;
                let sy = (y as i64 + ky as i64 - 1).clamp(0, height as i64 - 1) as u32;
                acc += weight * buf[(sx, sy)][0] as f32;
            }
        }

        acc
    }
}

/// Binary edge map: 255 where the Sobel gradient magnitude exceeds
/// `threshold`, 0 elsewhere.
pub fn sobel_edges(gray: &GrayImage, threshold: u8, thread_pool: &ThreadPool) -> GrayImage {
    let (width, height) = gray.dimensions();
    let mut out = GrayImage::new(width, height);

    if width == 0 || height == 0 {
        return out;
    }

    let kernel_x = Kernel3X3::sobel_x();
    let kernel_y = Kernel3X3::sobel_y();

    let thresh = |v: f32| {
        if v.clamp(0.0, 255.0) as u8 > threshold { 255 } else { 0 }
    };

    thread_pool.install(|| {
        out.par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.iter_mut().enumerate() {
                    let o_x = kernel_x.apply_clamped(gray, x as u32, y as u32);
                    let o_y = kernel_y.apply_clamped(gray, x as u32, y as u32);
                    *pixel = thresh((o_x.powi(2) + o_y.powi(2)).sqrt());
                }
            });
    });

    out
}
