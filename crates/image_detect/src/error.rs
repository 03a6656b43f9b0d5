use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("failed to load image {path}: {source}")]
    ImageLoadFailed {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write image {path}: {source}")]
    ImageWriteFailed {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("could not start worker threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("display error: {0}")]
    Display(String),
}

pub type Result<T> = std::result::Result<T, ProcessError>;
