//! Getting images in and out of the crate.
//!
//! Whatever format an image arrives in, it is decoded and flattened to 8-bit RGB
//! before anything is drawn on it. Results always leave as PNG.

use crate::CaptionError;
use base64::Engine as _;
use image::{ImageOutputFormat, RgbImage};
use std::io::Cursor;
use std::path::Path;

/// Decode an image from raw bytes of any format the [image] crate recognises,
/// discarding any alpha channel
pub fn decode_image(bytes: &[u8]) -> Result<RgbImage, CaptionError> {
    let format = image::guess_format(bytes)?;
    let image = image::load_from_memory_with_format(bytes, format)?;
    log::debug!(
        "decoded {:?} image, {}x{} {:?}",
        format,
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image.to_rgb8())
}

/// Read and decode an image file
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbImage, CaptionError> {
    let bytes = std::fs::read(path)?;
    decode_image(&bytes)
}

/// Decode an image pasted from a clipboard. Browsers hand these over as data URLs
/// (`data:image/png;base64,...`); a bare base64 payload is accepted too
pub fn decode_data_url(data: &str) -> Result<RgbImage, CaptionError> {
    let data = data.trim();
    let payload = match data.strip_prefix("data:") {
        Some(rest) => {
            let (header, payload) = rest.split_once(',').ok_or_else(|| {
                CaptionError::InvalidClipboard("data URL has no payload".to_string())
            })?;
            if !header.ends_with(";base64") {
                return Err(CaptionError::InvalidClipboard(format!(
                    "unsupported data URL encoding: {header}"
                )));
            }
            if !header.starts_with("image/") {
                return Err(CaptionError::InvalidClipboard(format!(
                    "data URL is not an image: {header}"
                )));
            }
            payload
        }
        None => data,
    };

    // pasted base64 is often line-wrapped
    let payload: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = base64::engine::general_purpose::STANDARD.decode(payload)?;
    decode_image(&bytes).map_err(|e| match e {
        CaptionError::InvalidImage(e) => CaptionError::InvalidClipboard(e.to_string()),
        e => e,
    })
}

/// Encode an image as PNG
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, CaptionError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)?;
    Ok(bytes)
}

/// Encode an image as PNG and write it to `path`
pub fn save_png<P: AsRef<Path>>(image: &RgbImage, path: P) -> Result<(), CaptionError> {
    let bytes = encode_png(image)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
