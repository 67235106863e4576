//! Canvas primitives over an RGBA buffer.
//!
//! Everything here is integer scanline work: no anti-aliasing, no floating
//! point in pixel placement. Determinism across platforms matters more than
//! smooth edges at poster resolution.

use image::{Rgba, RgbaImage};

/// Parse `#RRGGBB` into an opaque color; malformed input falls back to black
pub fn hex_color(hex: &str) -> Rgba<u8> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return Rgba([0, 0, 0, 255]);
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0);
    Rgba([channel(0), channel(2), channel(4), 255])
}

pub fn with_alpha(color: Rgba<u8>, alpha: u8) -> Rgba<u8> {
    Rgba([color[0], color[1], color[2], alpha])
}

/// Source-over blend of one pixel
pub fn blend_pixel(img: &mut RgbaImage, x: u32, y: u32, src: Rgba<u8>) {
    if src[3] == 0 {
        return;
    }
    if src[3] == 255 {
        img.put_pixel(x, y, src);
        return;
    }
    let dst = *img.get_pixel(x, y);
    let a = src[3] as u32;
    let inv = 255 - a;
    let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * inv) / 255) as u8;
    img.put_pixel(
        x,
        y,
        Rgba([mix(src[0], dst[0]), mix(src[1], dst[1]), mix(src[2], dst[2]), 255]),
    );
}

fn span(img: &mut RgbaImage, x0: i32, x1: i32, y: i32, color: Rgba<u8>) {
    if y < 0 || y as u32 >= img.height() {
        return;
    }
    let lo = x0.max(0) as u32;
    let hi = (x1.min(img.width() as i32 - 1)).max(-1);
    if hi < 0 {
        return;
    }
    for x in lo..=hi as u32 {
        blend_pixel(img, x, y as u32, color);
    }
}

pub fn fill_rect(img: &mut RgbaImage, x: i32, y: i32, w: i32, h: i32, color: Rgba<u8>) {
    for row in y..y + h {
        span(img, x, x + w - 1, row, color);
    }
}

/// Vertical top-to-bottom gradient across the full canvas
pub fn fill_vertical_gradient(img: &mut RgbaImage, top: Rgba<u8>, bottom: Rgba<u8>) {
    let h = img.height();
    let w = img.width();
    for y in 0..h {
        let t = y as u32;
        let lerp =
            |a: u8, b: u8| ((a as u32 * (h - 1 - t) + b as u32 * t) / (h - 1).max(1)) as u8;
        let color = Rgba([lerp(top[0], bottom[0]), lerp(top[1], bottom[1]), lerp(top[2], bottom[2]), 255]);
        for x in 0..w {
            img.put_pixel(x, y, color);
        }
    }
}

pub fn fill_circle(img: &mut RgbaImage, cx: i32, cy: i32, r: i32, color: Rgba<u8>) {
    for dy in -r..=r {
        let half = ((r * r - dy * dy) as f64).sqrt() as i32;
        span(img, cx - half, cx + half, cy + dy, color);
    }
}

pub fn fill_rounded_rect(
    img: &mut RgbaImage,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    radius: i32,
    color: Rgba<u8>,
) {
    let r = radius.min(w / 2).min(h / 2).max(0);
    for row in 0..h {
        // inset rows inside the corner arcs
        let inset = if row < r {
            let dy = r - 1 - row;
            r - ((r * r - dy * dy) as f64).sqrt() as i32
        } else if row >= h - r {
            let dy = row - (h - r);
            r - ((r * r - dy * dy) as f64).sqrt() as i32
        } else {
            0
        };
        span(img, x + inset, x + w - 1 - inset, y + row, color);
    }
}

/// Fill a simple polygon via even-odd scanline crossings
pub fn fill_polygon(img: &mut RgbaImage, points: &[(i32, i32)], color: Rgba<u8>) {
    if points.len() < 3 {
        return;
    }
    let y_min = points.iter().map(|p| p.1).min().unwrap_or(0);
    let y_max = points.iter().map(|p| p.1).max().unwrap_or(0);

    for y in y_min..y_max {
        let mut crossings: Vec<i32> = Vec::new();
        for i in 0..points.len() {
            let (x0, y0) = points[i];
            let (x1, y1) = points[(i + 1) % points.len()];
            if (y0 <= y && y < y1) || (y1 <= y && y < y0) {
                let x = x0 + (y - y0) * (x1 - x0) / (y1 - y0);
                crossings.push(x);
            }
        }
        crossings.sort_unstable();
        for pair in crossings.chunks_exact(2) {
            span(img, pair[0], pair[1], y, color);
        }
    }
}

/// Four-pointed sparkle: two crossing slim diamonds
pub fn draw_sparkle(img: &mut RgbaImage, cx: i32, cy: i32, r: i32, color: Rgba<u8>) {
    let arm = r.max(2);
    let waist = (arm / 3).max(1);
    fill_polygon(
        img,
        &[(cx, cy - arm), (cx + waist, cy), (cx, cy + arm), (cx - waist, cy)],
        color,
    );
    fill_polygon(
        img,
        &[(cx - arm, cy), (cx, cy + waist), (cx + arm, cy), (cx, cy - waist)],
        color,
    );
}

/// Horizontal rule whose alpha ramps up to the midpoint and back down
pub fn draw_gradient_rule(
    img: &mut RgbaImage,
    x0: i32,
    x1: i32,
    y: i32,
    thickness: i32,
    color: Rgba<u8>,
) {
    if x1 <= x0 {
        return;
    }
    let mid = (x0 + x1) / 2;
    let half_span = ((x1 - x0) / 2).max(1);
    for x in x0..=x1 {
        let dist = (x - mid).abs();
        let alpha = (255 * (half_span - dist) / half_span).clamp(0, 255) as u8;
        let c = with_alpha(color, alpha);
        for dy in 0..thickness {
            let yy = y + dy;
            if x >= 0 && yy >= 0 && (x as u32) < img.width() && (yy as u32) < img.height() {
                blend_pixel(img, x as u32, yy as u32, c);
            }
        }
    }
}
