//! Structured-extraction prompt construction.
//!
//! One prompt does double duty: infer the structured offer fields from
//! possibly minimal input AND produce rich enhanced copy in the target
//! language, returned as a single JSON object with a fixed schema.

use promo_core::Language;

pub fn extraction_prompt(raw_input: &str, language: Language) -> String {
    let lang = language.display_name();
    format!(
        r#"You are an expert AI marketing copywriter helping local Indian business owners create AMAZING promotional content.

IMPORTANT: Even if the user gives just 2-3 words, you MUST create a DETAILED, LONG, and COMPELLING promotional content!

The input is in {lang}.
User Input: "{raw_input}"

Your task:
1. Understand what the user is trying to promote (even from minimal input)
2. Create a RICH, DETAILED promotional content that would make any customer excited!

Return a JSON object with this EXACT structure:
{{
  "product": "the main product or service (be specific, e.g., 'Fresh Mango Juice' not just 'juice')",
  "price": "the price if mentioned (with ₹ symbol), or suggest a reasonable price like '₹40 only'",
  "offer": "the offer if mentioned, or create an attractive one like 'Buy 2 Get 1 Free'",
  "businessType": "infer the business type (e.g., Juice Shop, Cafe, Restaurant, Salon, etc.)",
  "enhancedPrompt": {{
    "headline": "A POWERFUL, catchy headline (5-8 words) that grabs attention immediately in {lang}",
    "tagline": "An emotional, desire-creating tagline (8-12 words) in {lang}",
    "offerHighlight": "Present the offer in an EXCITING way with urgency (15-20 words) in {lang}",
    "detailedFeatures": [
      "Feature 1: A compelling benefit or quality point (one sentence)",
      "Feature 2: Why customers should choose this (one sentence)",
      "Feature 3: What makes it special or unique (one sentence)",
      "Feature 4: Additional value or guarantee (one sentence)"
    ],
    "fullDescription": "A DETAILED 4-5 sentence promotional paragraph in {lang} that: (1) Creates excitement, (2) Highlights the product quality, (3) Mentions the amazing value, (4) Creates urgency, (5) Ends with an invitation to visit. Make it sound like a professional advertisement!",
    "callToAction": "A STRONG, urgent call to action (5-8 words) in {lang}"
  }}
}}

REMEMBER:
- Be CREATIVE and DETAILED even if input is short!
- Make it sound like a PREMIUM advertisement
- Use emotional, persuasive language
- The fullDescription MUST be 4-5 complete sentences
- Return ONLY valid JSON, no additional text."#
    )
}
