//! Embedded 8x8 bitmap font: measurement, wrapping, and glyph blitting.
//!
//! The renderer must be a pure function producing byte-identical output for
//! identical inputs, which rules out system font stacks. Glyphs are 8x8
//! bitmaps (one byte per row, MSB = leftmost pixel) scaled with
//! nearest-neighbor sampling. Characters outside the table render as a
//! neutral placeholder block; the poster text is always carried verbatim in
//! the caption bundle, so nothing is lost.

use image::{Rgba, RgbaImage};

pub const GLYPH_SIZE: usize = 8;

/// Horizontal advance in pixels for one glyph at `px` text height
pub fn advance(px: u32) -> u32 {
    px.max(1)
}

/// Measured pixel width of a string at `px` text height
pub fn measure(text: &str, px: u32) -> u32 {
    text.chars().count() as u32 * advance(px)
}

/// Greedy word wrap bounded to two lines.
///
/// Words are packed while the measured width stays under `max_width`; on
/// overflow a line is emitted and a new one started. If more than two lines
/// would result, the output is capped at two and the second line gets an
/// ellipsis.
pub fn wrap(text: &str, max_width: u32, px: u32) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if measure(&candidate, px) > max_width && !current.is_empty() {
            lines.push(current);
            current = word.to_string();
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > 2 {
        lines.truncate(2);
        lines[1].push_str("...");
    }
    lines
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slant {
    Upright,
    Italic,
}

/// Blit a single line of text with its top-left corner at (x, y)
pub fn draw_text(img: &mut RgbaImage, text: &str, x: i32, y: i32, px: u32, color: Rgba<u8>) {
    draw_text_slanted(img, text, x, y, px, color, Slant::Upright);
}

/// Blit a line centered horizontally around `center_x`
pub fn draw_text_centered(
    img: &mut RgbaImage,
    text: &str,
    center_x: i32,
    y: i32,
    px: u32,
    color: Rgba<u8>,
) {
    let x = center_x - measure(text, px) as i32 / 2;
    draw_text(img, text, x, y, px, color);
}

/// Centered variant with an italic shear
pub fn draw_text_centered_slanted(
    img: &mut RgbaImage,
    text: &str,
    center_x: i32,
    y: i32,
    px: u32,
    color: Rgba<u8>,
    slant: Slant,
) {
    let x = center_x - measure(text, px) as i32 / 2;
    draw_text_slanted(img, text, x, y, px, color, slant);
}

pub fn draw_text_slanted(
    img: &mut RgbaImage,
    text: &str,
    x: i32,
    y: i32,
    px: u32,
    color: Rgba<u8>,
    slant: Slant,
) {
    let step = advance(px) as i32;
    let mut pen_x = x;
    for ch in text.chars() {
        draw_glyph(img, ch, pen_x, y, px, color, slant);
        pen_x += step;
    }
}

fn draw_glyph(
    img: &mut RgbaImage,
    ch: char,
    x: i32,
    y: i32,
    px: u32,
    color: Rgba<u8>,
    slant: Slant,
) {
    if ch == ' ' {
        return;
    }
    let rows = glyph(ch);
    let size = px.max(1) as i32;

    for ty in 0..size {
        // integer shear: top rows shift right for the italic face
        let shear = match slant {
            Slant::Upright => 0,
            Slant::Italic => (size - 1 - ty) / 4,
        };
        let sy = (ty as usize * GLYPH_SIZE) / size as usize;
        for tx in 0..size {
            let sx = (tx as usize * GLYPH_SIZE) / size as usize;
            if rows[sy] & (0x80 >> sx) != 0 {
                let (ix, iy) = (x + tx + shear, y + ty);
                if ix >= 0 && iy >= 0 && (ix as u32) < img.width() && (iy as u32) < img.height() {
                    super::draw::blend_pixel(img, ix as u32, iy as u32, color);
                }
            }
        }
    }
}

/// 8x8 bitmap for a character; unknown characters get a placeholder block
pub fn glyph(ch: char) -> [u8; 8] {
    match ch {
        '!' => [0x18, 0x18, 0x18, 0x18, 0x18, 0x00, 0x18, 0x00],
        '"' => [0x66, 0x66, 0x24, 0x00, 0x00, 0x00, 0x00, 0x00],
        '#' => [0x6C, 0x6C, 0xFE, 0x6C, 0xFE, 0x6C, 0x6C, 0x00],
        '$' => [0x18, 0x3E, 0x60, 0x3C, 0x06, 0x7C, 0x18, 0x00],
        '%' => [0x00, 0xC6, 0xCC, 0x18, 0x30, 0x66, 0xC6, 0x00],
        '&' => [0x38, 0x6C, 0x38, 0x76, 0xDC, 0xCC, 0x76, 0x00],
        '\'' => [0x18, 0x18, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00],
        '(' => [0x0C, 0x18, 0x30, 0x30, 0x30, 0x18, 0x0C, 0x00],
        ')' => [0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x18, 0x30, 0x00],
        '*' => [0x00, 0x66, 0x3C, 0xFF, 0x3C, 0x66, 0x00, 0x00],
        '+' => [0x00, 0x18, 0x18, 0x7E, 0x18, 0x18, 0x00, 0x00],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x30],
        '-' => [0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00],
        '/' => [0x06, 0x0C, 0x18, 0x30, 0x60, 0xC0, 0x80, 0x00],
        '0' => [0x3C, 0x66, 0x6E, 0x76, 0x66, 0x66, 0x3C, 0x00],
        '1' => [0x18, 0x38, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00],
        '2' => [0x3C, 0x66, 0x06, 0x0C, 0x18, 0x30, 0x7E, 0x00],
        '3' => [0x3C, 0x66, 0x06, 0x1C, 0x06, 0x66, 0x3C, 0x00],
        '4' => [0x0C, 0x1C, 0x3C, 0x6C, 0x7E, 0x0C, 0x0C, 0x00],
        '5' => [0x7E, 0x60, 0x7C, 0x06, 0x06, 0x66, 0x3C, 0x00],
        '6' => [0x1C, 0x30, 0x60, 0x7C, 0x66, 0x66, 0x3C, 0x00],
        '7' => [0x7E, 0x06, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x00],
        '8' => [0x3C, 0x66, 0x66, 0x3C, 0x66, 0x66, 0x3C, 0x00],
        '9' => [0x3C, 0x66, 0x66, 0x3E, 0x06, 0x0C, 0x38, 0x00],
        ':' => [0x00, 0x18, 0x18, 0x00, 0x00, 0x18, 0x18, 0x00],
        ';' => [0x00, 0x18, 0x18, 0x00, 0x00, 0x18, 0x18, 0x30],
        '<' => [0x0C, 0x18, 0x30, 0x60, 0x30, 0x18, 0x0C, 0x00],
        '=' => [0x00, 0x00, 0x7E, 0x00, 0x7E, 0x00, 0x00, 0x00],
        '>' => [0x30, 0x18, 0x0C, 0x06, 0x0C, 0x18, 0x30, 0x00],
        '?' => [0x3C, 0x66, 0x06, 0x0C, 0x18, 0x00, 0x18, 0x00],
        '@' => [0x3C, 0x66, 0x6E, 0x6A, 0x6E, 0x60, 0x3C, 0x00],
        'A' => [0x18, 0x3C, 0x66, 0x66, 0x7E, 0x66, 0x66, 0x00],
        'B' => [0x7C, 0x66, 0x66, 0x7C, 0x66, 0x66, 0x7C, 0x00],
        'C' => [0x3C, 0x66, 0x60, 0x60, 0x60, 0x66, 0x3C, 0x00],
        'D' => [0x78, 0x6C, 0x66, 0x66, 0x66, 0x6C, 0x78, 0x00],
        'E' => [0x7E, 0x60, 0x60, 0x7C, 0x60, 0x60, 0x7E, 0x00],
        'F' => [0x7E, 0x60, 0x60, 0x7C, 0x60, 0x60, 0x60, 0x00],
        'G' => [0x3C, 0x66, 0x60, 0x6E, 0x66, 0x66, 0x3E, 0x00],
        'H' => [0x66, 0x66, 0x66, 0x7E, 0x66, 0x66, 0x66, 0x00],
        'I' => [0x7E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00],
        'J' => [0x06, 0x06, 0x06, 0x06, 0x66, 0x66, 0x3C, 0x00],
        'K' => [0x66, 0x6C, 0x78, 0x70, 0x78, 0x6C, 0x66, 0x00],
        'L' => [0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x7E, 0x00],
        'M' => [0xC6, 0xEE, 0xFE, 0xD6, 0xC6, 0xC6, 0xC6, 0x00],
        'N' => [0x66, 0x76, 0x7E, 0x7E, 0x6E, 0x66, 0x66, 0x00],
        'O' => [0x3C, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x00],
        'P' => [0x7C, 0x66, 0x66, 0x7C, 0x60, 0x60, 0x60, 0x00],
        'Q' => [0x3C, 0x66, 0x66, 0x66, 0x66, 0x6C, 0x36, 0x00],
        'R' => [0x7C, 0x66, 0x66, 0x7C, 0x78, 0x6C, 0x66, 0x00],
        'S' => [0x3C, 0x66, 0x60, 0x3C, 0x06, 0x66, 0x3C, 0x00],
        'T' => [0x7E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00],
        'U' => [0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x00],
        'V' => [0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x18, 0x00],
        'W' => [0xC6, 0xC6, 0xC6, 0xD6, 0xFE, 0xEE, 0xC6, 0x00],
        'X' => [0x66, 0x66, 0x3C, 0x18, 0x3C, 0x66, 0x66, 0x00],
        'Y' => [0x66, 0x66, 0x66, 0x3C, 0x18, 0x18, 0x18, 0x00],
        'Z' => [0x7E, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x7E, 0x00],
        '[' => [0x3C, 0x30, 0x30, 0x30, 0x30, 0x30, 0x3C, 0x00],
        '\\' => [0xC0, 0x60, 0x30, 0x18, 0x0C, 0x06, 0x02, 0x00],
        ']' => [0x3C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x3C, 0x00],
        '^' => [0x18, 0x3C, 0x66, 0x00, 0x00, 0x00, 0x00, 0x00],
        '_' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF],
        '`' => [0x30, 0x18, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00],
        'a' => [0x00, 0x00, 0x3C, 0x06, 0x3E, 0x66, 0x3E, 0x00],
        'b' => [0x60, 0x60, 0x7C, 0x66, 0x66, 0x66, 0x7C, 0x00],
        'c' => [0x00, 0x00, 0x3C, 0x60, 0x60, 0x60, 0x3C, 0x00],
        'd' => [0x06, 0x06, 0x3E, 0x66, 0x66, 0x66, 0x3E, 0x00],
        'e' => [0x00, 0x00, 0x3C, 0x66, 0x7E, 0x60, 0x3C, 0x00],
        'f' => [0x1C, 0x30, 0x7C, 0x30, 0x30, 0x30, 0x30, 0x00],
        'g' => [0x00, 0x00, 0x3E, 0x66, 0x66, 0x3E, 0x06, 0x7C],
        'h' => [0x60, 0x60, 0x7C, 0x66, 0x66, 0x66, 0x66, 0x00],
        'i' => [0x18, 0x00, 0x38, 0x18, 0x18, 0x18, 0x3C, 0x00],
        'j' => [0x0C, 0x00, 0x1C, 0x0C, 0x0C, 0x0C, 0x6C, 0x38],
        'k' => [0x60, 0x60, 0x66, 0x6C, 0x78, 0x6C, 0x66, 0x00],
        'l' => [0x38, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3C, 0x00],
        'm' => [0x00, 0x00, 0xEC, 0xFE, 0xD6, 0xC6, 0xC6, 0x00],
        'n' => [0x00, 0x00, 0x7C, 0x66, 0x66, 0x66, 0x66, 0x00],
        'o' => [0x00, 0x00, 0x3C, 0x66, 0x66, 0x66, 0x3C, 0x00],
        'p' => [0x00, 0x00, 0x7C, 0x66, 0x66, 0x7C, 0x60, 0x60],
        'q' => [0x00, 0x00, 0x3E, 0x66, 0x66, 0x3E, 0x06, 0x06],
        'r' => [0x00, 0x00, 0x6C, 0x76, 0x60, 0x60, 0x60, 0x00],
        's' => [0x00, 0x00, 0x3E, 0x60, 0x3C, 0x06, 0x7C, 0x00],
        't' => [0x30, 0x30, 0x7C, 0x30, 0x30, 0x30, 0x1C, 0x00],
        'u' => [0x00, 0x00, 0x66, 0x66, 0x66, 0x66, 0x3E, 0x00],
        'v' => [0x00, 0x00, 0x66, 0x66, 0x66, 0x3C, 0x18, 0x00],
        'w' => [0x00, 0x00, 0xC6, 0xC6, 0xD6, 0xFE, 0x6C, 0x00],
        'x' => [0x00, 0x00, 0x66, 0x3C, 0x18, 0x3C, 0x66, 0x00],
        'y' => [0x00, 0x00, 0x66, 0x66, 0x66, 0x3E, 0x06, 0x7C],
        'z' => [0x00, 0x00, 0x7E, 0x0C, 0x18, 0x30, 0x7E, 0x00],
        '{' => [0x0E, 0x18, 0x18, 0x70, 0x18, 0x18, 0x0E, 0x00],
        '|' => [0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00],
        '}' => [0x70, 0x18, 0x18, 0x0E, 0x18, 0x18, 0x70, 0x00],
        '~' => [0x00, 0x00, 0x32, 0x7E, 0x4C, 0x00, 0x00, 0x00],
        // rupee sign: an R-like stem with two horizontal bars
        '₹' => [0x7E, 0x18, 0x7E, 0x30, 0x38, 0x1C, 0x0C, 0x00],
        // anything else (emoji, non-Latin scripts) renders as a soft block
        _ => [0x00, 0x3C, 0x7E, 0x7E, 0x7E, 0x7E, 0x3C, 0x00],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_scales_with_size() {
        assert_eq!(measure("abcd", 8), 32);
        assert_eq!(measure("abcd", 16), 64);
        assert_eq!(measure("", 16), 0);
    }

    #[test]
    fn test_wrap_respects_width() {
        // 10px glyphs, 100px max -> 10 chars per line
        let lines = wrap("one two three", 100, 10);
        assert!(lines.len() <= 2);
        for line in &lines {
            assert!(measure(line, 10) <= 100 || line.split_whitespace().count() == 1);
        }
    }

    #[test]
    fn test_wrap_single_short_line() {
        assert_eq!(wrap("hello", 400, 10), vec!["hello".to_string()]);
    }

    #[test]
    fn test_wrap_caps_at_two_lines_with_ellipsis() {
        let lines = wrap("aaaa bbbb cccc dddd eeee ffff", 50, 10);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("..."));
    }

    #[test]
    fn test_wrap_two_lines_no_ellipsis() {
        // fits exactly in two lines, nothing was cut
        let lines = wrap("aaaa bbbb", 50, 10);
        assert_eq!(lines.len(), 2);
        assert!(!lines[1].ends_with("..."));
    }

    #[test]
    fn test_unknown_char_gets_placeholder() {
        assert_eq!(glyph('🧃'), glyph('न'));
        assert_ne!(glyph('🧃'), glyph('A'));
    }
}
