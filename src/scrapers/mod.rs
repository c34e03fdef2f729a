use url::Url;

use crate::error::FetchError;

pub mod detail;
pub mod listing;

pub use detail::{extract_fields, fetch_details, DefinitionListPage};
pub use listing::{parse_listing, prefetch};

/// Read access to the labelled fields of a club detail page, independent of
/// the markup that carries them.
pub trait DetailPageModel {
    /// Every label on the page, in document order.
    fn label_texts(&self) -> Vec<String>;
    /// The value shown for `label`, if the page has one.
    fn value_for(&self, label: &str) -> Option<String>;

    /// Every term with its own value, in document order. Labels may repeat.
    fn entries(&self) -> Vec<(String, Option<String>)> {
        self.label_texts()
            .into_iter()
            .map(|label| {
                let value = self.value_for(&label);
                (label, value)
            })
            .collect()
    }
}

/// Resolve a possibly relative link from the site against its origin.
pub fn resolve_url(base_url: &str, link: &str) -> Result<String, FetchError> {
    let invalid = |source| FetchError::InvalidUrl {
        url: link.to_string(),
        source,
    };
    let base = Url::parse(base_url).map_err(invalid)?;
    let full_url = base.join(link).map_err(invalid)?;
    Ok(full_url.to_string())
}
