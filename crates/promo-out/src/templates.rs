//! Embedded caption template pack.
//!
//! When no provider can produce captions, the composer falls back to a fixed
//! Handlebars template pack compiled into the binary. The pack uses the same
//! YAML shape as external template files, so an operator-supplied pack can be
//! swapped in without touching the rendering code.

use crate::poster::BusinessCategory;
use handlebars::Handlebars;
use once_cell::sync::Lazy;
use promo_core::{CaptionSet, StructuredOffer};
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use tracing::warn;

const CAPTION_PACK: &str = r#"
version: "1.0"
templates:
  whatsapp:
    description: Short WhatsApp status caption
    template: |-
      {{emoji}} {{product}}{{#if price}} @ {{price}}{{/if}}{{#if offer}} - {{offer}}{{/if}} 🎉
  instagram:
    description: Instagram caption with hashtags
    template: |-
      ✨ {{product}}{{#if price}} @ {{price}}{{/if}}
      {{#if offer}}{{offer}}{{else}}Visit us today!{{/if}}
      #LocalBusiness #ShopLocal #SupportLocal
  facebook:
    description: Slightly longer Facebook post
    template: |-
      {{emoji}} {{product}}{{#if price}} now available at {{price}}{{/if}}!
      {{#if offer}}{{offer}} - limited time only.{{else}}Come visit us soon.{{/if}}
      Your neighborhood {{business_type}} awaits you.
  poster_text:
    description: Short text block for the poster itself
    template: |-
      {{product}}
      {{#if price}}{{price}}{{/if}}
      {{#if offer}}{{offer}}{{/if}}
"#;

/// Top-level template pack structure
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatePack {
    pub version: String,
    pub templates: HashMap<String, Template>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    pub description: String,
    pub template: String,
}

impl TemplatePack {
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("failed to parse template pack: {e}"))
    }
}

static REGISTRY: Lazy<Handlebars<'static>> = Lazy::new(|| {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(false);
    // the embedded pack is validated by tests; a registration failure at
    // runtime degrades to an empty caption, not a panic
    match TemplatePack::from_yaml(CAPTION_PACK) {
        Ok(pack) => {
            for (name, template) in &pack.templates {
                if let Err(err) = handlebars.register_template_string(name, &template.template) {
                    warn!(template = %name, error = %err, "skipping unregistrable template");
                }
            }
        }
        Err(err) => warn!(error = %err, "embedded caption pack failed to parse"),
    }
    handlebars
});

fn render(name: &str, offer: &StructuredOffer) -> String {
    let category = BusinessCategory::detect(&offer.business_type, &offer.product);
    let data = json!({
        "product": offer.product,
        "price": offer.price,
        "offer": offer.offer,
        "business_type": offer.business_type,
        "emoji": category.emoji(),
    });
    match REGISTRY.render(name, &data) {
        Ok(text) => text.trim().to_string(),
        Err(err) => {
            warn!(template = %name, error = %err, "caption template render failed");
            String::new()
        }
    }
}

/// Fully templated caption set, used when no provider output is available
pub fn fallback_captions(offer: &StructuredOffer) -> CaptionSet {
    CaptionSet {
        whatsapp: render("whatsapp", offer),
        instagram: render("instagram", offer),
        facebook: render("facebook", offer),
        poster_text: render("poster_text", offer),
    }
}

/// Replace each empty field of a parsed caption set with its templated
/// counterpart, so downstream consumers always have text to show.
pub fn patch_empty(mut set: CaptionSet, offer: &StructuredOffer) -> CaptionSet {
    if set.whatsapp.is_empty() {
        set.whatsapp = render("whatsapp", offer);
    }
    if set.instagram.is_empty() {
        set.instagram = render("instagram", offer);
    }
    if set.facebook.is_empty() {
        set.facebook = render("facebook", offer);
    }
    if set.poster_text.is_empty() {
        set.poster_text = render("poster_text", offer);
    }
    set
}
