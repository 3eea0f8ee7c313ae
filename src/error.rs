use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComposeError{
    #[error("could not read {}: {source}", path.display())]
    Io{
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not decode {}: {source}", path.display())]
    Decode{
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("could not write {}: {source}", path.display())]
    Encode{
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// Only raised in strict mode.
    #[error("{} is {found_w}x{found_h}, expected {expected_w}x{expected_h}", path.display())]
    DimensionMismatch{
        path: PathBuf,
        expected_w: u32,
        expected_h: u32,
        found_w: u32,
        found_h: u32,
    },
    #[error("{count} tiles of width {tile_width} do not fit in one canvas")]
    CanvasTooLarge{
        count: usize,
        tile_width: u32,
    },
}

pub type ComposeResult<T> = Result<T, ComposeError>;
