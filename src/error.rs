use thiserror::Error;

/// The inputs a caption request cannot run without
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Input {
    Image,
    Text,
    FileName,
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Image => f.write_str("image"),
            Input::Text => f.write_str("text"),
            Input::FileName => f.write_str("file name"),
        }
    }
}

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum CaptionError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [ab_glyph] could not read the font's outlines
    InvalidFont(#[from] ab_glyph::InvalidFont),

    #[error(transparent)]
    /// [image] failed to decode or encode the image
    InvalidImage(#[from] image::ImageError),

    #[error("clipboard data is not a valid image: {0}")]
    /// Pasted data was not a base64 payload or data URL
    InvalidClipboard(String),

    #[error("missing input: {0}")]
    /// One of the image, text, or output file name was missing or empty
    MissingInput(Input),

    #[error("font size {0} is out of range (expected 1 to 100, or 0 for automatic)")]
    /// An explicit font size above the supported maximum
    FontSizeOutOfRange(u32),
}

impl From<base64::DecodeError> for CaptionError {
    fn from(e: base64::DecodeError) -> Self {
        CaptionError::InvalidClipboard(e.to_string())
    }
}
