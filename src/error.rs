use std::path::PathBuf;
use thiserror::Error;
use thumbnail_pipeline::PipelineError;

/// Process exit code for a tiled (unsupported layout) source.
pub const EXIT_UNSUPPORTED_LAYOUT: u8 = 2;

/// Process exit code for every other failure.
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("Cannot open source {}: {reason}", path.display())]
    SourceOpen { path: PathBuf, reason: String },

    #[error("Source {} is tiled; only scanline images are supported", path.display())]
    UnsupportedLayout { path: PathBuf },

    #[error("Cannot create target {}: {reason}", path.display())]
    TargetCreate { path: PathBuf, reason: String },

    #[error("Failed to write {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },

    #[error("Thumbnail would be empty ({width}x{height})")]
    EmptyThumbnail { width: usize, height: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}

impl ThumbnailError {
    /// Exit code reported by the command line tool for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            ThumbnailError::UnsupportedLayout { .. } => EXIT_UNSUPPORTED_LAYOUT,
            ThumbnailError::Pipeline(PipelineError::TiledLayout) => EXIT_UNSUPPORTED_LAYOUT,
            _ => EXIT_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_open_message() {
        let error = ThumbnailError::SourceOpen {
            path: PathBuf::from("scan.exr"),
            reason: "No such file or directory".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cannot open source scan.exr: No such file or directory"
        );
    }

    #[test]
    fn test_unsupported_layout_message() {
        let error = ThumbnailError::UnsupportedLayout {
            path: PathBuf::from("tiles.exr"),
        };
        assert_eq!(
            error.to_string(),
            "Source tiles.exr is tiled; only scanline images are supported"
        );
    }

    #[test]
    fn test_target_create_message() {
        let error = ThumbnailError::TargetCreate {
            path: PathBuf::from("out.gif"),
            reason: "unsupported output format".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cannot create target out.gif: unsupported output format"
        );
    }

    #[test]
    fn test_empty_thumbnail_message() {
        let error = ThumbnailError::EmptyThumbnail {
            width: 512,
            height: 0,
        };
        assert_eq!(error.to_string(), "Thumbnail would be empty (512x0)");
    }

    #[test]
    fn test_from_pipeline_error() {
        let error: ThumbnailError = PipelineError::InvalidLowresWidth.into();
        match error {
            ThumbnailError::Pipeline(_) => {}
            _ => panic!("Expected Pipeline variant"),
        }
    }

    #[test]
    fn test_exit_codes() {
        let tiled = ThumbnailError::UnsupportedLayout {
            path: PathBuf::from("a.exr"),
        };
        assert_eq!(tiled.exit_code(), EXIT_UNSUPPORTED_LAYOUT);
        assert_eq!(
            ThumbnailError::Pipeline(PipelineError::TiledLayout).exit_code(),
            EXIT_UNSUPPORTED_LAYOUT
        );

        let open = ThumbnailError::SourceOpen {
            path: PathBuf::from("a.exr"),
            reason: "missing".to_string(),
        };
        assert_eq!(open.exit_code(), EXIT_FAILURE);

        let target = ThumbnailError::TargetCreate {
            path: PathBuf::from("b.png"),
            reason: "denied".to_string(),
        };
        assert_eq!(target.exit_code(), EXIT_FAILURE);
        assert_eq!(
            ThumbnailError::Pipeline(PipelineError::InvalidGamma(0.0)).exit_code(),
            EXIT_FAILURE
        );
        let too_large = PipelineError::ThumbnailTooLarge {
            width: usize::MAX,
            height: 1,
            channels: 3,
        };
        assert_eq!(ThumbnailError::Pipeline(too_large).exit_code(), EXIT_FAILURE);
    }
}
