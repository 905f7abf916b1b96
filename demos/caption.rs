use caption_gen::layout::Alignment;
use caption_gen::{caption, CaptionOptions, DEFAULT_FILE_NAME};

fn main() {
    env_logger::init();

    // usage: caption <image> <text> [name] [font size, 0 = auto] [left|center|right] [font.ttf]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (Some(image_path), Some(text)) = (args.first(), args.get(1)) else {
        eprintln!("Please provide an image, some text, and optionally a file name.");
        std::process::exit(1);
    };
    let name = args.get(2).map(String::as_str).unwrap_or(DEFAULT_FILE_NAME);
    let font_size: u32 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(0);
    let alignment = match args.get(4).map(String::as_str) {
        Some("center") => Alignment::Center,
        Some("right") => Alignment::Right,
        _ => Alignment::Left,
    };

    let mut options = CaptionOptions::new();
    options.font_size(font_size).alignment(alignment);
    if let Some(font) = args.get(5) {
        options.font_path(font);
    }

    // text arrives on the command line with literal "\n" escapes
    let text = text.replace("\\n", "\n");

    let bytes = std::fs::read(image_path).unwrap();
    let result = caption(&bytes, &text, name, &options).unwrap();
    let path = result.save(".").unwrap();
    println!("wrote {}", path.display());
}
