//! Deterministic poster rasterizer.
//!
//! A pure function from `(StructuredOffer, EnhancedCopy, StyleId)` to an
//! embedded 540x960 PNG. No network, no system fonts, no clock reads, no
//! randomness: identical inputs produce byte-identical output, which is what
//! makes the backup path safe to hash and cache.
//!
//! The layout runs top to bottom on a fixed canvas: gradient background,
//! decorative circles, content card, business-type badge, category icon,
//! headline (wrapped, at most two lines), tagline, price pill, offer ribbon,
//! sparkle accents, call to action, and footer.

pub mod draw;
pub mod font;
pub mod icon;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::{ImageFormat, Rgba, RgbaImage};
use promo_core::{EnhancedCopy, ImageRef, StructuredOffer, StyleId};
use std::io::Cursor;

pub use icon::BusinessCategory;

pub const POSTER_WIDTH: u32 = 540;
pub const POSTER_HEIGHT: u32 = 960;

const W: i32 = POSTER_WIDTH as i32;
const H: i32 = POSTER_HEIGHT as i32;

/// Render the backup poster and return it as an embedded PNG data URI
pub fn render(offer: &StructuredOffer, enhanced: &EnhancedCopy, style: StyleId) -> ImageRef {
    let png = render_png(offer, enhanced, style);
    ImageRef::embedded(encode_data_uri(&png))
}

/// Wrap raw PNG bytes in a data URI
pub fn encode_data_uri(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", BASE64.encode(png))
}

/// Render to raw PNG bytes. Split out so the orchestrator can hash the
/// encoded bytes without re-decoding the data URI.
pub fn render_png(offer: &StructuredOffer, enhanced: &EnhancedCopy, style: StyleId) -> Vec<u8> {
    let img = render_canvas(offer, enhanced, style);
    let mut buf = Vec::new();
    // writing a PNG to an in-memory buffer cannot fail
    let _ = img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png);
    buf
}

fn render_canvas(offer: &StructuredOffer, enhanced: &EnhancedCopy, style: StyleId) -> RgbaImage {
    let palette = style.palette();
    let primary = draw::hex_color(palette.primary_color);
    let secondary = draw::hex_color(palette.secondary_color);
    let accent = draw::hex_color(palette.accent_color);
    let text_color = draw::hex_color(palette.text_color);
    let white = Rgba([255, 255, 255, 255]);

    let mut img = RgbaImage::new(POSTER_WIDTH, POSTER_HEIGHT);

    // 1. background gradient + decorative corner circles
    draw::fill_vertical_gradient(
        &mut img,
        draw::hex_color(palette.background_gradient[0]),
        draw::hex_color(palette.background_gradient[1]),
    );
    draw::fill_circle(&mut img, -50, 100, 200, draw::with_alpha(primary, 0x20));
    draw::fill_circle(&mut img, W + 50, H - 150, 250, draw::with_alpha(primary, 0x20));

    // 2. content card with a soft drop shadow
    draw::fill_rounded_rect(&mut img, 30, 90, W - 60, H - 160, 24, Rgba([0, 0, 0, 25]));
    draw::fill_rounded_rect(&mut img, 30, 80, W - 60, H - 160, 24, draw::with_alpha(white, 242));

    // 3. business-type badge
    let badge_text = offer.business_type.to_uppercase();
    let badge_w = (badge_text.chars().count() as i32 * 14 + 40).min(280);
    draw::fill_rounded_rect(&mut img, (W - badge_w) / 2, 110, badge_w, 56, 16, primary);
    font::draw_text_centered(&mut img, &badge_text, W / 2, 128, 20, white);

    // 4. category icon
    let category = BusinessCategory::detect(&offer.business_type, &offer.product);
    icon::draw_icon(&mut img, W / 2, 250, category, palette);

    // 5. headline, wrapped to at most two lines
    let headline = if enhanced.headline.is_empty() {
        &offer.product
    } else {
        &enhanced.headline
    };
    let mut y = 360;
    for line in font::wrap(headline, W as u32 - 100, 38) {
        font::draw_text_centered(&mut img, &line, W / 2, y, 38, text_color);
        y += 45;
    }
    y += 20;

    // 6. tagline, italic
    if !enhanced.tagline.is_empty() {
        for line in font::wrap(&enhanced.tagline, W as u32 - 80, 22) {
            font::draw_text_centered_slanted(
                &mut img,
                &line,
                W / 2,
                y,
                22,
                accent,
                font::Slant::Italic,
            );
            y += 28;
        }
        y += 25;
    }

    // 7. price pill
    if !offer.price.trim().is_empty() {
        let price_text = if offer.price.contains('₹') {
            offer.price.clone()
        } else {
            format!("₹{}", offer.price)
        };
        let pill_w = (price_text.chars().count() as i32 * 35 + 60).max(200);
        draw::fill_rounded_rect(&mut img, (W - pill_w) / 2, y, pill_w, 90, 20, primary);
        font::draw_text_centered(&mut img, &price_text, W / 2, y + 21, 48, white);
        y += 130;
    }

    // 8. offer ribbon with notched ends
    let ribbon_text = if enhanced.offer_highlight.trim().is_empty() {
        offer.offer.trim()
    } else {
        enhanced.offer_highlight.trim()
    };
    if !ribbon_text.is_empty() {
        draw::fill_polygon(
            &mut img,
            &[
                (50, y),
                (W - 50, y),
                (W - 30, y + 35),
                (W - 50, y + 70),
                (50, y + 70),
                (70, y + 35),
            ],
            accent,
        );
        font::draw_text_centered(&mut img, &truncate_offer(ribbon_text), W / 2, y + 24, 22, white);
    }

    // 9. sparkle accents
    draw::draw_sparkle(&mut img, 80, 700, 12, secondary);
    draw::draw_sparkle(&mut img, W - 80, 650, 14, secondary);
    draw::draw_sparkle(&mut img, 120, 750, 10, secondary);

    // 10. call to action
    if !enhanced.call_to_action.is_empty() {
        font::draw_text_centered(&mut img, &enhanced.call_to_action, W / 2, H - 200, 26, primary);
    }

    // 11. divider rule + footer
    draw::draw_gradient_rule(&mut img, 100, W - 100, H - 130, 3, primary);
    font::draw_text_centered(
        &mut img,
        "Made with VyaparAI",
        W / 2,
        H - 100,
        16,
        Rgba([0x99, 0x99, 0x99, 255]),
    );

    img
}

/// Long offers are clipped so the ribbon stays on one line
fn truncate_offer(text: &str) -> String {
    if text.chars().count() > 35 {
        let clipped: String = text.chars().take(32).collect();
        format!("{}...", clipped)
    } else {
        text.to_string()
    }
}

/// Decode an embedded PNG data URI back to its pixel dimensions
pub fn embedded_dimensions(image: &ImageRef) -> Option<(u32, u32)> {
    let ImageRef::Embedded { data_uri } = image else {
        return None;
    };
    let encoded = data_uri.strip_prefix("data:image/png;base64,")?;
    let bytes = BASE64.decode(encoded).ok()?;
    let decoded = image::load_from_memory(&bytes).ok()?;
    Some((decoded.width(), decoded.height()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_offer() -> StructuredOffer {
        StructuredOffer {
            product: "Fresh Mango Juice".into(),
            price: "₹40 only".into(),
            offer: "Buy 2 Get 1 Free".into(),
            business_type: "Juice Shop".into(),
        }
    }

    fn sample_copy() -> EnhancedCopy {
        EnhancedCopy {
            headline: "Sip The Taste Of Summer!".into(),
            tagline: "Pure Alphonso goodness in every glass".into(),
            offer_highlight: "Grab 3 for the price of 2 - today only!".into(),
            detailed_features: vec!["Fresh fruit daily".into()],
            full_description: "Five sentences of delight.".into(),
            call_to_action: "Visit us today!".into(),
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let offer = sample_offer();
        let copy = sample_copy();
        let a = render_png(&offer, &copy, StyleId::Festive);
        let b = render_png(&offer, &copy, StyleId::Festive);
        assert!(!a.is_empty());
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_dimensions() {
        let image = render(&sample_offer(), &sample_copy(), StyleId::Friendly);
        assert!(image.is_embedded());
        assert_eq!(embedded_dimensions(&image), Some((540, 960)));
    }

    #[test]
    fn test_styles_produce_distinct_pixels() {
        let offer = sample_offer();
        let copy = sample_copy();
        let friendly = render_png(&offer, &copy, StyleId::Friendly);
        let festive = render_png(&offer, &copy, StyleId::Festive);
        assert_ne!(friendly, festive);
    }

    #[test]
    fn test_render_total_on_empty_fields() {
        let offer = StructuredOffer {
            product: String::new(),
            price: String::new(),
            offer: String::new(),
            business_type: "Shop".into(),
        };
        let copy = EnhancedCopy::default();
        let image = render(&offer, &copy, StyleId::LocalStyle);
        assert_eq!(embedded_dimensions(&image), Some((540, 960)));
    }

    #[test]
    fn test_price_gains_rupee_symbol() {
        let mut offer = sample_offer();
        offer.price = "99".into();
        // render path formats the pill text; exercise it via full render
        let with_symbol = render_png(&offer, &sample_copy(), StyleId::Friendly);
        offer.price = "₹99".into();
        let already_symbol = render_png(&offer, &sample_copy(), StyleId::Friendly);
        assert_eq!(with_symbol, already_symbol);
    }

    #[test]
    fn test_truncate_offer_clips_long_text() {
        let long = "Buy one get one free on every single item in the store";
        let clipped = truncate_offer(long);
        assert_eq!(clipped.chars().count(), 35);
        assert!(clipped.ends_with("..."));
        assert_eq!(truncate_offer("short"), "short");
    }
}
