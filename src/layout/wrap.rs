use crate::metrics::FontMetrics;
use crate::units::Px;

/// How text is broken into display lines
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    /// Greedy word wrapping against measured pixel widths
    #[default]
    Pixel,
    /// Greedy word wrapping against a fixed number of characters per line
    Columns(usize),
    /// Only break where the text has explicit newlines
    None,
}

/// Normalize newlines and split text into paragraphs. Empty paragraphs are kept, so
/// `"a\n\nb"` yields three paragraphs and `""` yields one
fn paragraphs(text: &str) -> Vec<String> {
    let text = text.replace("\r\n", "\n");
    text.split('\n').map(str::to_string).collect()
}

/// Split text on its explicit newlines only, without any wrapping
pub fn split_lines(text: &str) -> Vec<String> {
    paragraphs(text)
}

/// Lays out text in a word-by-word manner, measuring each candidate line with the given
/// font metrics and breaking before any word that would push the line past
/// `max_width`. A line exactly `max_width` wide still fits.
///
/// Explicit newlines always start a new line, and blank lines in the input come out as
/// empty strings so the vertical rhythm of the text is preserved. A single word wider
/// than `max_width` is never split: it gets a line of its own and overflows.
pub fn wrap_text_by_pixel<M: FontMetrics + ?Sized>(
    text: &str,
    max_width: Px,
    metrics: &M,
) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for paragraph in paragraphs(text) {
        let mut words = paragraph.split_whitespace().peekable();
        if words.peek().is_none() {
            lines.push(String::new());
            continue;
        }

        let mut line = String::new();
        for word in words {
            let trial = if line.is_empty() {
                word.to_string()
            } else {
                format!("{line} {word}")
            };

            if metrics.text_width(&trial) <= max_width || line.is_empty() {
                line = trial;
            } else {
                log::debug!("wrapping before {word:?}, line would exceed {max_width}");
                lines.push(std::mem::replace(&mut line, word.to_string()));
            }
        }

        if !line.is_empty() {
            lines.push(line);
        }
    }

    lines
}

/// Lays out text a fixed number of characters per line, breaking between words where
/// possible. Words longer than a whole line are cut into line-sized pieces. Blank lines
/// are preserved the same way as [wrap_text_by_pixel] preserves them.
pub fn wrap_text_by_columns(text: &str, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let mut lines: Vec<String> = Vec::new();

    for paragraph in paragraphs(text) {
        let mut line = String::new();
        let mut line_len = 0usize;
        let mut any_words = false;

        for word in paragraph.split_whitespace() {
            any_words = true;
            let mut chars: Vec<char> = word.chars().collect();

            // cut down words that can't fit on any line
            while chars.len() > columns {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                let rest = chars.split_off(columns);
                lines.push(chars.into_iter().collect());
                chars = rest;
            }
            if chars.is_empty() {
                continue;
            }

            let needed = if line.is_empty() {
                chars.len()
            } else {
                line_len + 1 + chars.len()
            };
            if needed > columns {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if !line.is_empty() {
                line.push(' ');
                line_len += 1;
            }
            line.extend(chars.iter());
            line_len += chars.len();
        }

        if !line.is_empty() {
            lines.push(line);
        } else if !any_words {
            lines.push(String::new());
        }
    }

    lines
}

/// Break text into display lines according to `mode`. `max_width` and `metrics` are
/// only consulted for [WrapMode::Pixel]
pub fn wrap_text<M: FontMetrics + ?Sized>(
    text: &str,
    mode: WrapMode,
    max_width: Px,
    metrics: &M,
) -> Vec<String> {
    match mode {
        WrapMode::Pixel => wrap_text_by_pixel(text, max_width, metrics),
        WrapMode::Columns(columns) => wrap_text_by_columns(text, columns),
        WrapMode::None => split_lines(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_font::DefaultFont;

    /// Every character is 10px wide
    struct Fixed;

    impl FontMetrics for Fixed {
        fn text_width(&self, text: &str) -> Px {
            Px(text.chars().count() as f32 * 10.0)
        }

        fn text_height(&self, text: &str) -> u32 {
            if text.trim().is_empty() {
                0
            } else {
                12
            }
        }
    }

    #[test]
    fn short_text_fits_on_one_line() {
        assert_eq!(wrap_text_by_pixel("Hello world", Px(760.0), &Fixed), vec!["Hello world"]);
    }

    #[test]
    fn exact_width_is_accepted() {
        // "aaa bbb" is exactly 70px
        assert_eq!(wrap_text_by_pixel("aaa bbb", Px(70.0), &Fixed), vec!["aaa bbb"]);
        assert_eq!(wrap_text_by_pixel("aaa bbb", Px(69.9), &Fixed), vec!["aaa", "bbb"]);
    }

    #[test]
    fn greedy_breaks_between_words() {
        let lines = wrap_text_by_pixel("the quick brown fox jumps over", Px(100.0), &Fixed);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps over"]);
    }

    #[test]
    fn blank_paragraphs_are_preserved() {
        assert_eq!(wrap_text_by_pixel("a\n\nb", Px(100.0), &Fixed), vec!["a", "", "b"]);
        assert_eq!(wrap_text_by_pixel("a\n   \nb", Px(100.0), &Fixed), vec!["a", "", "b"]);
        assert_eq!(wrap_text_by_pixel("a\n", Px(100.0), &Fixed), vec!["a", ""]);
    }

    #[test]
    fn empty_text_is_one_blank_line() {
        assert_eq!(wrap_text_by_pixel("", Px(100.0), &Fixed), vec![""]);
    }

    #[test]
    fn windows_newlines_are_normalized() {
        assert_eq!(wrap_text_by_pixel("a\r\nb", Px(100.0), &Fixed), vec!["a", "b"]);
        // a lone carriage return is just whitespace between words
        assert_eq!(wrap_text_by_pixel("a\rb", Px(100.0), &Fixed), vec!["a b"]);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(
            wrap_text_by_pixel("   spaced \t  out   ", Px(1000.0), &Fixed),
            vec!["spaced out"]
        );
    }

    #[test]
    fn unsplittable_words_overflow() {
        let word = "supercalifragilisticexpialidocious";
        let lines = wrap_text_by_pixel(word, Px(100.0), &Fixed);
        assert_eq!(lines, vec![word]);
        assert!(Fixed.text_width(&lines[0]) > Px(100.0));

        let lines = wrap_text_by_pixel(&format!("a {word} b"), Px(100.0), &Fixed);
        assert_eq!(lines, vec!["a", word, "b"]);
    }

    #[test]
    fn lines_fit_and_reconstruct_the_words() {
        let font = DefaultFont::new(16);
        let text = lipsum::lipsum(120);
        let max_width = Px(400.0);
        let lines = wrap_text_by_pixel(&text, max_width, &font);

        assert!(lines.len() > 1);
        for line in &lines {
            assert!(font.text_width(line) <= max_width, "{line:?} is too wide");
        }
        let original: Vec<&str> = text.split_whitespace().collect();
        let rejoined = lines.join(" ");
        let rejoined: Vec<&str> = rejoined.split_whitespace().collect();
        assert_eq!(original, rejoined);
    }

    #[test]
    fn wrapping_is_idempotent() {
        let font = DefaultFont::new(8);
        let max_width = Px(240.0);
        let text = format!("{}\n\n{}", lipsum::lipsum(40), lipsum::lipsum(25));
        let once = wrap_text_by_pixel(&text, max_width, &font);
        let twice = wrap_text_by_pixel(&once.join("\n"), max_width, &font);
        assert_eq!(once, twice);
    }

    #[test]
    fn column_wrapping_counts_characters() {
        assert_eq!(
            wrap_text_by_columns("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
        assert_eq!(wrap_text_by_columns("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap_text_by_columns("ab abcdefgh", 4), vec!["ab", "abcd", "efgh"]);
        assert_eq!(wrap_text_by_columns("a\n\nb", 4), vec!["a", "", "b"]);
        assert_eq!(wrap_text_by_columns("abc", 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn no_wrap_only_splits_newlines() {
        let text = "a very long line that would otherwise wrap\nsecond";
        assert_eq!(
            wrap_text(text, WrapMode::None, Px(10.0), &Fixed),
            vec!["a very long line that would otherwise wrap", "second"]
        );
        assert_eq!(wrap_text(text, WrapMode::default(), Px(10.0), &Fixed).len(), 9);
    }
}
