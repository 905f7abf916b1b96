use crate::{
    colour::{colours, Colour},
    compose::{compose_with, ComposeStyle},
    font::{load_font_or_default, resolve_font, Font},
    image::{decode_image, encode_png, save_png},
    layout::{wrap_text, Alignment, WrapMode, DEFAULT_INSET},
    CaptionError, Input, Px,
};
use image::RgbImage;
use std::path::{Path, PathBuf};

/// The font file looked for when none is configured
pub const DEFAULT_FONT_PATH: &str = "NanumGothic.ttf";

/// The name results are saved under when none is given
pub const DEFAULT_FILE_NAME: &str = "merged_image";

/// The largest font size that can be requested explicitly
pub const MAX_FONT_SIZE: u32 = 100;

/// Everything about a caption that isn't the image or the text itself
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionOptions {
    /// Font size in pixels. [None] picks a size from the image height
    pub font_size: Option<u32>,
    pub alignment: Alignment,
    pub wrap: WrapMode,
    /// Font file to render with. [None], or a file that can't be loaded, uses the
    /// built-in font
    pub font_path: Option<PathBuf>,
    /// Distance from the image edges that text is kept within
    pub inset: u32,
    pub foreground: Colour,
    pub background: Colour,
}

impl Default for CaptionOptions {
    fn default() -> Self {
        CaptionOptions {
            font_size: None,
            alignment: Alignment::Left,
            wrap: WrapMode::Pixel,
            font_path: Some(PathBuf::from(DEFAULT_FONT_PATH)),
            inset: DEFAULT_INSET,
            foreground: colours::BLACK,
            background: colours::WHITE,
        }
    }
}

impl CaptionOptions {
    /// Create a new set of options with automatic sizing, left alignment, and pixel
    /// wrapping
    pub fn new() -> CaptionOptions {
        CaptionOptions::default()
    }

    /// Set the font size, modifying `self`. A size of 0 means automatic, matching
    /// [CaptionOptions::auto_font_size]
    pub fn font_size(&mut self, font_size: u32) -> &mut Self {
        self.font_size = (font_size > 0).then_some(font_size);
        self
    }

    /// Pick the font size from the image height, modifying `self`
    pub fn auto_font_size(&mut self) -> &mut Self {
        self.font_size = None;
        self
    }

    /// Set the alignment, modifying `self`
    pub fn alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.alignment = alignment;
        self
    }

    /// Set the wrapping strategy, modifying `self`
    pub fn wrap(&mut self, wrap: WrapMode) -> &mut Self {
        self.wrap = wrap;
        self
    }

    /// Set the font file, modifying `self`
    pub fn font_path<P: Into<PathBuf>>(&mut self, path: P) -> &mut Self {
        self.font_path = Some(path.into());
        self
    }

    /// Always use the built-in font, modifying `self`
    pub fn default_font(&mut self) -> &mut Self {
        self.font_path = None;
        self
    }

    /// Set the horizontal inset, modifying `self`
    pub fn inset(&mut self, inset: u32) -> &mut Self {
        self.inset = inset;
        self
    }

    /// Set the text colour, modifying `self`
    pub fn foreground<C: Into<Colour>>(&mut self, colour: C) -> &mut Self {
        self.foreground = colour.into();
        self
    }

    /// Set the colour of the caption band, modifying `self`
    pub fn background<C: Into<Colour>>(&mut self, colour: C) -> &mut Self {
        self.background = colour.into();
        self
    }

    /// The font size to use for an image of the given height
    pub fn resolve_font_size(&self, image_height: u32) -> Result<u32, CaptionError> {
        match self.font_size {
            Some(size) if size > MAX_FONT_SIZE => Err(CaptionError::FontSizeOutOfRange(size)),
            Some(size) => Ok(size),
            None => Ok(auto_font_size(image_height)),
        }
    }
}

/// A font size proportional to the image height, but never smaller than 20px
pub fn auto_font_size(image_height: u32) -> u32 {
    (image_height / 20).max(20)
}

/// Turn a user-supplied name into the name of the PNG to save: surrounding whitespace
/// is trimmed, inner spaces become underscores, and `.png` is appended unless the name
/// already ends with it
pub fn output_file_name(name: &str) -> String {
    let mut name = name.trim().replace(' ', "_");
    if !name.to_lowercase().ends_with(".png") {
        name.push_str(".png");
    }
    name
}

/// A captioned image, ready to be saved
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub image: RgbImage,
    pub file_name: String,
    pub font_size: u32,
    pub lines: Vec<String>,
}

impl Caption {
    /// Encode the captioned image as PNG
    pub fn to_png(&self) -> Result<Vec<u8>, CaptionError> {
        encode_png(&self.image)
    }

    /// Write the captioned image into `dir` under its file name, returning the path
    /// it was written to
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf, CaptionError> {
        let path = dir.as_ref().join(&self.file_name);
        save_png(&self.image, &path)?;
        log::info!("saved caption to {}", path.display());
        Ok(path)
    }
}

/// Caption an uploaded image. All three of the image bytes, the text, and the file
/// name must be non-empty
pub fn caption(
    image_bytes: &[u8],
    text: &str,
    file_name: &str,
    options: &CaptionOptions,
) -> Result<Caption, CaptionError> {
    if image_bytes.is_empty() {
        return Err(CaptionError::MissingInput(Input::Image));
    }
    check_inputs(text, file_name)?;
    let source = decode_image(image_bytes)?;
    caption_checked(&source, text, file_name, options)
}

/// Caption an already decoded image. The text and file name must be non-empty
pub fn caption_image(
    source: &RgbImage,
    text: &str,
    file_name: &str,
    options: &CaptionOptions,
) -> Result<Caption, CaptionError> {
    check_inputs(text, file_name)?;
    caption_checked(source, text, file_name, options)
}

fn check_inputs(text: &str, file_name: &str) -> Result<(), CaptionError> {
    if text.is_empty() {
        return Err(CaptionError::MissingInput(Input::Text));
    }
    if file_name.trim().is_empty() {
        return Err(CaptionError::MissingInput(Input::FileName));
    }
    Ok(())
}

fn caption_checked(
    source: &RgbImage,
    text: &str,
    file_name: &str,
    options: &CaptionOptions,
) -> Result<Caption, CaptionError> {
    if source.width() == 0 || source.height() == 0 {
        return Err(CaptionError::MissingInput(Input::Image));
    }
    let font_size = options.resolve_font_size(source.height())?;

    let loaded: Option<Font> = options.font_path.as_deref().and_then(load_font_or_default);
    let font = resolve_font(loaded.as_ref(), font_size);

    let max_width = Px::from(source.width().saturating_sub(2 * options.inset));
    let lines = wrap_text(text, options.wrap, max_width, &font);

    let mut style = ComposeStyle::new();
    style
        .font_size(font_size)
        .alignment(options.alignment)
        .inset(options.inset)
        .foreground(options.foreground)
        .background(options.background);
    let image = compose_with(source, &lines, &font, &style);

    let file_name = output_file_name(file_name);
    log::info!(
        "captioned {}x{} image with {} lines at {}px{} as {file_name}",
        source.width(),
        source.height(),
        lines.len(),
        font_size,
        if font.is_default() { " (built-in font)" } else { "" },
    );

    Ok(Caption {
        image,
        file_name,
        font_size,
        lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_are_sanitised() {
        assert_eq!(output_file_name("merged_image"), "merged_image.png");
        assert_eq!(output_file_name("  my holiday photo "), "my_holiday_photo.png");
        assert_eq!(output_file_name("shot.PNG"), "shot.PNG");
        assert_eq!(output_file_name("shot.jpg"), "shot.jpg.png");
    }

    #[test]
    fn font_size_is_automatic_by_default() {
        let options = CaptionOptions::new();
        assert_eq!(options.resolve_font_size(100).expect("size"), 20);
        assert_eq!(options.resolve_font_size(1000).expect("size"), 50);
    }

    #[test]
    fn explicit_font_sizes_are_bounded() {
        let mut options = CaptionOptions::new();
        options.font_size(100);
        assert_eq!(options.resolve_font_size(10).expect("size"), 100);

        options.font_size(101);
        assert!(matches!(
            options.resolve_font_size(10),
            Err(CaptionError::FontSizeOutOfRange(101))
        ));

        options.font_size(0);
        assert_eq!(options.font_size, None);
    }

    #[test]
    fn missing_inputs_are_reported() {
        let options = CaptionOptions::new();
        let image = RgbImage::new(10, 10);
        assert!(matches!(
            caption(&[], "text", "name", &options),
            Err(CaptionError::MissingInput(Input::Image))
        ));
        assert!(matches!(
            caption_image(&image, "", "name", &options),
            Err(CaptionError::MissingInput(Input::Text))
        ));
        assert!(matches!(
            caption_image(&image, "text", "   ", &options),
            Err(CaptionError::MissingInput(Input::FileName))
        ));
        assert!(matches!(
            caption_image(&RgbImage::new(0, 0), "text", "name", &options),
            Err(CaptionError::MissingInput(Input::Image))
        ));
    }

    #[test]
    fn empty_decoded_images_are_missing() {
        // shared by both entry points, after decoding
        let options = CaptionOptions::new();
        for (w, h) in [(0, 5), (5, 0)] {
            assert!(matches!(
                caption_checked(&RgbImage::new(w, h), "text", "name", &options),
                Err(CaptionError::MissingInput(Input::Image))
            ));
        }
    }

    #[test]
    fn undecodable_uploads_are_invalid_images() {
        assert!(matches!(
            caption(b"garbage", "text", "name", &CaptionOptions::new()),
            Err(CaptionError::InvalidImage(_))
        ));
    }
}
