//! Crate-level error type and `Result` alias.
//! Decode-side and encode-side failures carry the offending path so the CLI can
//! report them verbatim; everything else is a parameter or primitive failure.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Could not decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JPEG encoding failed for {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: jpeg_encoder::EncodingError,
    },

    #[error("Image of {width}x{height} exceeds the JPEG limit of 65535 pixels per side")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("Image size mismatch: {left} vs {right}")]
    DimensionMismatch {
        left: crate::types::Dimensions,
        right: crate::types::Dimensions,
    },

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Noise distribution error: {0}")]
    Noise(#[from] rand_distr::NormalError),
}

impl Error {
    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }

    /// True for failures that happen before the pipeline has a raster to work on.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::InputNotFound { .. } | Error::Decode { .. })
    }

    /// True for failures while producing the output file.
    pub fn is_encode(&self) -> bool {
        matches!(
            self,
            Error::Write { .. } | Error::Encode { .. } | Error::DimensionsTooLarge { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_path() {
        let err = Error::InputNotFound {
            path: PathBuf::from("/nope/missing.png"),
        };
        assert!(err.to_string().contains("/nope/missing.png"));
        assert!(err.is_decode());
        assert!(!err.is_encode());
    }

    #[test]
    fn write_errors_are_encode_kind() {
        let err = Error::Write {
            path: PathBuf::from("out.jpg"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.is_encode());
        assert!(err.to_string().contains("out.jpg"));
    }
}
