pub mod address;

pub use address::*;

use html_escape::decode_html_entities;
use once_cell::sync::Lazy;
use regex::Regex;

static TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<[^>]*>").expect("Invalid tag regex")
});

/// Labels are sometimes followed by stray inline markup, e.g. a tooltip after
/// "Aantal leden".
static MEMBERS_LABEL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(Aantal leden)[\s\S]+$").expect("Invalid members label regex")
});

/// Clean and normalize text by removing extra whitespace and decoding HTML entities
pub fn clean_text(text: &str) -> String {
    let decoded = decode_html_entities(text);
    decoded
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Drop markup from an inner-HTML fragment, keeping the text between tags.
pub fn strip_tags(html: &str) -> String {
    TAG_REGEX.replace_all(html, " ").into_owned()
}

/// Turn a definition term's text into the label it is keyed under.
pub fn normalize_label(text: &str) -> String {
    let label = clean_text(text);
    MEMBERS_LABEL_REGEX.replace(&label, "$1").into_owned()
}

/// Turn a definition value's inner HTML into plain, single-spaced text.
pub fn normalize_value(inner_html: &str) -> String {
    clean_text(&strip_tags(inner_html))
}

pub fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn website_scheme_is_removed() {
        assert_eq!(strip_scheme("https://www.example-club.nl"), "www.example-club.nl");
        assert_eq!(strip_scheme("http://hcr.nl/contact"), "hcr.nl/contact");
        assert_eq!(strip_scheme("www.mhcl.nl"), "www.mhcl.nl");
    }

    #[test]
    fn members_label_loses_trailing_markup_text() {
        assert_eq!(normalize_label("Aantal leden (peildatum 1 januari)"), "Aantal leden");
        assert_eq!(normalize_label("  Aantal leden\n  <i>?</i>"), "Aantal leden");
        assert_eq!(normalize_label("Aantal leden"), "Aantal leden");
        assert_eq!(normalize_label("\n\tTelefoonnummer  "), "Telefoonnummer");
    }

    #[test]
    fn value_is_stripped_and_collapsed() {
        let html = "\n  <a href=\"mailto:info@club.nl\">info@club.nl</a>\n\t ";
        assert_eq!(normalize_value(html), "info@club.nl");

        let html = "Hoofdstraat 12<br>\n1234 AB&nbsp;Amsterdam";
        assert_eq!(normalize_value(html), "Hoofdstraat 12 1234 AB Amsterdam");
    }
}
