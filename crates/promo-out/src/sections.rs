//! Labeled-section scanner for caption responses.
//!
//! The caption prompt asks the provider for four sections introduced by
//! `WHATSAPP:`, `INSTAGRAM:`, `FACEBOOK:`, and `POSTER_TEXT:`. Providers get
//! the casing and ordering wrong often enough that the scanner matches labels
//! case-insensitively and slices by byte position rather than assuming the
//! requested order. A missing label yields an empty string, never an error.

use promo_core::CaptionSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Whatsapp,
    Instagram,
    Facebook,
    PosterText,
}

const LABELS: [(&str, Field); 4] = [
    ("WHATSAPP:", Field::Whatsapp),
    ("INSTAGRAM:", Field::Instagram),
    ("FACEBOOK:", Field::Facebook),
    ("POSTER_TEXT:", Field::PosterText),
];

/// First case-insensitive occurrence of an ASCII label
fn find_label(text: &str, label: &str) -> Option<usize> {
    let haystack = text.as_bytes();
    let needle = label.as_bytes();
    if needle.len() > haystack.len() {
        return None;
    }
    (0..=haystack.len() - needle.len())
        .find(|&i| haystack[i..i + needle.len()].eq_ignore_ascii_case(needle))
}

/// Split a provider response into the four caption fields
pub fn parse_sections(text: &str) -> CaptionSet {
    // every label found, ordered by where it appears in the response
    let mut found: Vec<(usize, usize, Field)> = LABELS
        .iter()
        .filter_map(|&(label, field)| {
            find_label(text, label).map(|pos| (pos, pos + label.len(), field))
        })
        .collect();
    found.sort_by_key(|&(pos, _, _)| pos);

    let mut set = CaptionSet::default();
    for (i, &(_, content_start, field)) in found.iter().enumerate() {
        let content_end = found
            .get(i + 1)
            .map(|&(next_pos, _, _)| next_pos)
            .unwrap_or(text.len());
        let content = text[content_start..content_end].trim().to_string();
        match field {
            Field::Whatsapp => set.whatsapp = content,
            Field::Instagram => set.instagram = content,
            Field::Facebook => set.facebook = content,
            Field::PosterText => set.poster_text = content,
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sections_in_requested_order() {
        let response = "WHATSAPP: Fresh juice ₹40! 🧃\nINSTAGRAM: Sip summer #juice #local\nFACEBOOK: Come try our fresh juice, now at ₹40.\nPOSTER_TEXT: Fresh Juice ₹40";
        let set = parse_sections(response);
        assert_eq!(set.whatsapp, "Fresh juice ₹40! 🧃");
        assert_eq!(set.instagram, "Sip summer #juice #local");
        assert_eq!(set.facebook, "Come try our fresh juice, now at ₹40.");
        assert_eq!(set.poster_text, "Fresh Juice ₹40");
    }

    #[test]
    fn test_missing_label_yields_empty_string() {
        let response = "WHATSAPP: hello\nPOSTER_TEXT: Juice ₹40";
        let set = parse_sections(response);
        assert_eq!(set.whatsapp, "hello");
        assert_eq!(set.facebook, "");
        assert_eq!(set.instagram, "");
        assert_eq!(set.poster_text, "Juice ₹40");
    }

    #[test]
    fn test_case_insensitive_labels() {
        let response = "whatsapp: one\nInstagram: two\nfacebook: three\nPoster_Text: four";
        let set = parse_sections(response);
        assert_eq!(set.whatsapp, "one");
        assert_eq!(set.instagram, "two");
        assert_eq!(set.facebook, "three");
        assert_eq!(set.poster_text, "four");
    }

    #[test]
    fn test_out_of_order_labels_tolerated() {
        let response = "POSTER_TEXT: short\nFACEBOOK: fb text\nWHATSAPP: wa text\nINSTAGRAM: ig text";
        let set = parse_sections(response);
        assert_eq!(set.poster_text, "short");
        assert_eq!(set.facebook, "fb text");
        assert_eq!(set.whatsapp, "wa text");
        assert_eq!(set.instagram, "ig text");
    }

    #[test]
    fn test_multiline_section_content() {
        let response = "FACEBOOK: line one\nline two\n\nWHATSAPP: wa";
        let set = parse_sections(response);
        assert_eq!(set.facebook, "line one\nline two");
        assert_eq!(set.whatsapp, "wa");
    }

    #[test]
    fn test_no_labels_at_all() {
        let set = parse_sections("the model ignored the format entirely");
        assert_eq!(set, CaptionSet::default());
    }
}
