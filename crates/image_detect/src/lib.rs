// top-level library module

pub mod basic_ops;
pub mod convolution;
pub mod display;
pub mod dispatch;
pub mod error;
pub mod features;

pub use dispatch::{BatchReport, run_batch};
pub use error::{ProcessError, Result};

use image::{DynamicImage, RgbImage};
use log::debug;
use rayon::{ThreadPool, ThreadPoolBuilder};
use run_config::Method;

// decoded input image, always held as 8-bit RGB

pub struct Image {
    pub image: RgbImage,
    pub dimensions: (u32, u32),
}

impl Image {
    pub fn from_file(filepath: &str) -> Result<Self> {
        let load_failed = |source: image::ImageError| ProcessError::ImageLoadFailed {
            path: filepath.to_string(),
            source,
        };

        let image_bytes = std::fs::read(filepath)
            .map_err(|e| load_failed(image::ImageError::IoError(e)))?;
        let image = image::load_from_memory(&image_bytes)
            .map_err(load_failed)?
            .to_rgb8();
        let dimensions = image.dimensions();

        Ok(Self { image, dimensions })
    }
}

/// Tuning values for the two detectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectParams {
    /// Gaussian sigma applied after grayscale conversion; 1.1 matches a
    /// 5x5 kernel.
    pub blur_sigma: f32,
    /// Sobel magnitude above which a pixel counts as an edge.
    pub edge_threshold: u8,
    /// Intensity difference threshold for FAST-9 corners.
    pub fast_threshold: u8,
    /// Radius of the circle drawn around each keypoint.
    pub marker_radius: i32,
}

impl Default for DetectParams {
    fn default() -> Self {
        Self {
            blur_sigma: 1.1,
            edge_threshold: 50,
            fast_threshold: 20,
            marker_radius: 3,
        }
    }
}

/// Shared processing context: detector parameters plus the worker pool the
/// parallel passes run in.
pub struct ImageProcessor {
    pub params: DetectParams,
    pub thread_pool: ThreadPool,
}

impl ImageProcessor {
    pub fn new(params: DetectParams) -> Result<Self> {
        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(num_cpus::get())
            .build()?;
        debug!("processing pool has {} threads", thread_pool.current_num_threads());

        Ok(Self {
            params,
            thread_pool,
        })
    }

    /// Apply `method` to a loaded image, producing the image to display and
    /// optionally save.
    pub fn apply(&self, method: Method, image: &Image) -> DynamicImage {
        #[cfg(feature = "timing")]
        let time = std::time::Instant::now();

        let gray = basic_ops::preprocess(&image.image, self.params.blur_sigma);

        let result = match method {
            Method::EdgeDetect => {
                let edges = convolution::sobel_edges(
                    &gray,
                    self.params.edge_threshold,
                    &self.thread_pool,
                );
                DynamicImage::ImageLuma8(edges)
            }
            Method::FeaturePoints => {
                let corners = features::detect_keypoints(&gray, self.params.fast_threshold);
                debug!("found {} keypoints", corners.len());
                let annotated =
                    features::draw_keypoints(&image.image, &corners, self.params.marker_radius);
                DynamicImage::ImageRgb8(annotated)
            }
        };

        #[cfg(feature = "timing")]
        report_elapsed(method.label(), time);

        result
    }
}

#[cfg(feature = "timing")]
fn report_elapsed(label: &str, time: std::time::Instant) {
    let elapsed = time.elapsed().as_secs_f32();
    log::info!("{} ... {:>2.3}s", label, elapsed);
}
