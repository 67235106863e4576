//! Visual prompt synthesis for the image provider.
//!
//! Builds one natural-language text-to-image prompt from the offer, the
//! enhanced copy, and the style's descriptive phrase, then sanitizes it for
//! use inside a URL path segment.

use promo_core::{EnhancedCopy, StructuredOffer, StyleId};

/// Per-category scene description keyed off the business type
fn product_visual_description(business_type: &str, product: &str) -> String {
    let kind = business_type.to_lowercase();
    let product_lower = product.to_lowercase();

    if kind.contains("juice") || kind.contains("drink") || product_lower.contains("juice") {
        return format!(
            "a delicious condensation-covered glass of thick {} with dynamic splash effect, \
             surrounded by fresh ripe fruits and green leaves",
            product
        );
    }
    if kind.contains("cafe") || kind.contains("coffee") {
        return format!(
            "a premium steaming cup of {} with latte art, coffee beans scattered around \
             with warm bokeh lighting",
            product
        );
    }
    if kind.contains("restaurant") || kind.contains("food") || kind.contains("biryani") {
        return format!(
            "a beautifully plated {} with steam rising, garnished with fresh herbs and \
             spices in traditional Indian serving style",
            product
        );
    }
    if kind.contains("bakery") || kind.contains("cake") || kind.contains("sweet") {
        return format!(
            "a delectable {} with perfect frosting and decorative toppings under soft \
             dreamy lighting with sugar sparkles",
            product
        );
    }
    if kind.contains("salon") || kind.contains("beauty") || kind.contains("spa") {
        return "elegant beauty products and tools arranged artistically with soft luxurious \
                lighting and rose petals"
            .to_string();
    }
    if kind.contains("kirana") || kind.contains("grocery") || kind.contains("store") {
        return format!(
            "{} displayed prominently among colorful grocery items and fresh produce in a \
             bright clean presentation",
            product
        );
    }
    if kind.contains("cloth") || kind.contains("fashion") || kind.contains("garment") {
        return format!(
            "stylish {} displayed with visible premium fabric texture in professional \
             fashion photography style",
            product
        );
    }
    if kind.contains("electronics") || kind.contains("mobile") || kind.contains("gadget") {
        return format!(
            "sleek {} with modern tech aesthetic, minimalist dark background and neon \
             accent lighting",
            product
        );
    }

    format!(
        "{} displayed prominently with premium commercial photography style and dynamic lighting",
        product
    )
}

/// Compose the full poster prompt sent to the image endpoint
pub fn build_poster_prompt(
    offer: &StructuredOffer,
    enhanced: &EnhancedCopy,
    style: StyleId,
) -> String {
    let headline = if enhanced.headline.is_empty() {
        format!("{} SALE", offer.product)
    } else {
        enhanced.headline.clone()
    };
    let scene = product_visual_description(&offer.business_type, &offer.product);

    format!(
        "Professional vibrant advertisement poster for {}, {} style, {}, colorful sunburst \
         rays background, bold text {}, {}, {}, Indian retail ad, modern graphic design, \
         social media marketing poster",
        offer.product,
        offer.business_type,
        scene,
        headline,
        offer.price,
        style.description()
    )
}

/// Strip characters that break URL path segments or confuse the endpoint:
/// curly quotes, the rupee sign (transliterated), em/en dashes, newlines,
/// and runs of whitespace.
pub fn sanitize_prompt(prompt: &str) -> String {
    let mut cleaned = String::with_capacity(prompt.len());
    for ch in prompt.chars() {
        match ch {
            '\u{201C}' | '\u{201D}' | '\u{2018}' | '\u{2019}' => {}
            '₹' => cleaned.push_str("Rs"),
            '\u{2014}' | '\u{2013}' => cleaned.push('-'),
            '\n' | '\r' | '\t' => cleaned.push(' '),
            other => cleaned.push(other),
        }
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
