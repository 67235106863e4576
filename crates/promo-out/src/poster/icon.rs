//! Business category detection and procedural poster icons.
//!
//! The category comes from a first-match-wins keyword scan over the business
//! type and product text. Each category maps to an emoji (for the templated
//! fallback captions) and a small vector drawing the rasterizer can place
//! where a font-rendered emoji would otherwise sit.

use super::draw;
use image::{Rgba, RgbaImage};
use promo_core::StylePalette;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessCategory {
    Juice,
    Cafe,
    Restaurant,
    Bakery,
    Salon,
    Grocery,
    Clothing,
    Electronics,
    Pharmacy,
    Sweets,
    Flowers,
    StreetFood,
    Shop,
}

/// Ordered keyword table; the first matching row wins
const KEYWORDS: &[(&[&str], BusinessCategory)] = &[
    (&["juice", "drink"], BusinessCategory::Juice),
    (&["cafe", "coffee", "tea"], BusinessCategory::Cafe),
    (&["restaurant", "food", "thali", "biryani"], BusinessCategory::Restaurant),
    (&["bakery", "cake", "bread"], BusinessCategory::Bakery),
    (&["salon", "beauty", "parlour"], BusinessCategory::Salon),
    (&["kirana", "grocery", "general store"], BusinessCategory::Grocery),
    (&["cloth", "fashion", "saree", "garment"], BusinessCategory::Clothing),
    (&["electronic", "mobile", "phone"], BusinessCategory::Electronics),
    (&["pharmacy", "medical", "chemist"], BusinessCategory::Pharmacy),
    (&["sweet", "mithai"], BusinessCategory::Sweets),
    (&["flower", "florist"], BusinessCategory::Flowers),
    (&["street", "chaat", "snack"], BusinessCategory::StreetFood),
];

impl BusinessCategory {
    /// Detect a category from business type and product text
    pub fn detect(business_type: &str, product: &str) -> Self {
        let haystack = format!("{} {}", business_type, product).to_lowercase();
        for (words, category) in KEYWORDS {
            if words.iter().any(|w| haystack.contains(w)) {
                return *category;
            }
        }
        BusinessCategory::Shop
    }

    /// Emoji interpolated into the templated fallback captions
    pub fn emoji(&self) -> &'static str {
        match self {
            BusinessCategory::Juice => "🧃",
            BusinessCategory::Cafe => "☕",
            BusinessCategory::Restaurant => "🍽️",
            BusinessCategory::Bakery => "🍰",
            BusinessCategory::Salon => "💇",
            BusinessCategory::Grocery => "🛒",
            BusinessCategory::Clothing => "👕",
            BusinessCategory::Electronics => "📱",
            BusinessCategory::Pharmacy => "💊",
            BusinessCategory::Sweets => "🍬",
            BusinessCategory::Flowers => "💐",
            BusinessCategory::StreetFood => "🍿",
            BusinessCategory::Shop => "🏪",
        }
    }
}

/// Draw the category icon centered at (cx, cy) on a tinted circular tile
pub fn draw_icon(
    img: &mut RgbaImage,
    cx: i32,
    cy: i32,
    category: BusinessCategory,
    palette: &StylePalette,
) {
    let primary = draw::hex_color(palette.primary_color);
    let secondary = draw::hex_color(palette.secondary_color);
    let accent = draw::hex_color(palette.accent_color);
    let white = Rgba([255, 255, 255, 255]);

    draw::fill_circle(img, cx, cy, 56, draw::with_alpha(primary, 48));
    draw::fill_circle(img, cx, cy, 48, draw::with_alpha(secondary, 80));

    match category {
        BusinessCategory::Juice => {
            // glass with a straw
            draw::fill_polygon(
                img,
                &[(cx - 20, cy - 24), (cx + 20, cy - 24), (cx + 13, cy + 28), (cx - 13, cy + 28)],
                white,
            );
            draw::fill_polygon(
                img,
                &[(cx - 17, cy - 8), (cx + 17, cy - 8), (cx + 13, cy + 24), (cx - 13, cy + 24)],
                accent,
            );
            draw::fill_polygon(
                img,
                &[(cx + 4, cy - 40), (cx + 9, cy - 40), (cx + 2, cy - 10), (cx - 3, cy - 10)],
                primary,
            );
        }
        BusinessCategory::Cafe => {
            draw::fill_rounded_rect(img, cx - 22, cy - 12, 36, 34, 6, white);
            draw::fill_rounded_rect(img, cx - 18, cy - 8, 28, 24, 4, accent);
            draw::fill_circle(img, cx + 22, cy + 2, 10, white);
            draw::fill_circle(img, cx + 22, cy + 2, 5, secondary);
            // steam
            draw::fill_rect(img, cx - 10, cy - 28, 3, 10, white);
            draw::fill_rect(img, cx + 2, cy - 32, 3, 14, white);
        }
        BusinessCategory::Restaurant => {
            draw::fill_circle(img, cx, cy, 30, white);
            draw::fill_circle(img, cx, cy, 20, accent);
            draw::fill_circle(img, cx, cy, 8, white);
        }
        BusinessCategory::Bakery => {
            draw::fill_rounded_rect(img, cx - 26, cy, 52, 24, 6, white);
            draw::fill_rounded_rect(img, cx - 18, cy - 16, 36, 16, 6, accent);
            draw::fill_rect(img, cx - 1, cy - 30, 3, 12, primary);
            draw::fill_circle(img, cx, cy - 33, 4, accent);
        }
        BusinessCategory::Salon => {
            draw::fill_circle(img, cx - 14, cy + 14, 9, white);
            draw::fill_circle(img, cx + 14, cy + 14, 9, white);
            draw::fill_polygon(
                img,
                &[(cx - 12, cy + 6), (cx + 16, cy - 30), (cx + 22, cy - 24), (cx - 6, cy + 10)],
                accent,
            );
            draw::fill_polygon(
                img,
                &[(cx + 12, cy + 6), (cx - 16, cy - 30), (cx - 22, cy - 24), (cx + 6, cy + 10)],
                accent,
            );
        }
        BusinessCategory::Grocery => {
            draw::fill_polygon(
                img,
                &[(cx - 26, cy - 14), (cx + 24, cy - 14), (cx + 16, cy + 12), (cx - 18, cy + 12)],
                white,
            );
            draw::fill_circle(img, cx - 12, cy + 22, 6, accent);
            draw::fill_circle(img, cx + 10, cy + 22, 6, accent);
            draw::fill_rect(img, cx - 34, cy - 26, 12, 4, white);
        }
        BusinessCategory::Clothing => {
            draw::fill_polygon(
                img,
                &[
                    (cx - 12, cy - 26),
                    (cx + 12, cy - 26),
                    (cx + 28, cy - 12),
                    (cx + 18, cy - 2),
                    (cx + 14, cy - 8),
                    (cx + 14, cy + 26),
                    (cx - 14, cy + 26),
                    (cx - 14, cy - 8),
                    (cx - 18, cy - 2),
                    (cx - 28, cy - 12),
                ],
                white,
            );
            draw::fill_circle(img, cx, cy - 22, 6, accent);
        }
        BusinessCategory::Electronics => {
            draw::fill_rounded_rect(img, cx - 16, cy - 28, 32, 56, 8, white);
            draw::fill_rect(img, cx - 12, cy - 20, 24, 38, accent);
            draw::fill_circle(img, cx, cy + 22, 3, accent);
        }
        BusinessCategory::Pharmacy => {
            draw::fill_rect(img, cx - 8, cy - 26, 16, 52, white);
            draw::fill_rect(img, cx - 26, cy - 8, 52, 16, white);
        }
        BusinessCategory::Sweets => {
            draw::fill_circle(img, cx, cy, 18, white);
            draw::fill_circle(img, cx, cy, 10, accent);
            draw::fill_polygon(
                img,
                &[(cx - 18, cy), (cx - 34, cy - 12), (cx - 34, cy + 12)],
                white,
            );
            draw::fill_polygon(
                img,
                &[(cx + 18, cy), (cx + 34, cy - 12), (cx + 34, cy + 12)],
                white,
            );
        }
        BusinessCategory::Flowers => {
            for (dx, dy) in [(0, -14), (13, -4), (8, 12), (-8, 12), (-13, -4)] {
                draw::fill_circle(img, cx + dx, cy - 6 + dy, 9, white);
            }
            draw::fill_circle(img, cx, cy - 6, 7, accent);
            draw::fill_rect(img, cx - 1, cy + 8, 3, 20, accent);
        }
        BusinessCategory::StreetFood => {
            draw::fill_polygon(
                img,
                &[(cx - 20, cy - 10), (cx + 20, cy - 10), (cx + 12, cy + 28), (cx - 12, cy + 28)],
                white,
            );
            for (dx, dy) in [(-10, -18), (0, -24), (10, -18), (-4, -14), (6, -12)] {
                draw::fill_circle(img, cx + dx, cy + dy, 5, accent);
            }
        }
        BusinessCategory::Shop => {
            draw::fill_rect(img, cx - 26, cy - 6, 52, 32, white);
            draw::fill_rounded_rect(img, cx - 30, cy - 22, 60, 16, 4, accent);
            draw::fill_rect(img, cx - 6, cy + 6, 12, 20, secondary);
        }
    }
}
