use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

use crate::error::FetchError;
use crate::models::{labels, RawFields};
use crate::parsers::{normalize_label, normalize_value, parse_address, strip_scheme};
use crate::scrapers::DetailPageModel;
use crate::utils::http::PageFetcher;

static TERM_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("dt").expect("Invalid term selector")
});

/// A detail page laid out as a definition list, where each value sits two
/// element siblings after its `dt`.
#[derive(Debug, Clone, Default)]
pub struct DefinitionListPage {
    entries: Vec<(String, Option<String>)>,
}

impl DefinitionListPage {
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);
        let entries = document
            .select(&TERM_SELECTOR)
            .map(|term| {
                let label = normalize_label(&term.text().collect::<String>());
                let value = value_element(term).map(|value| normalize_value(&value.inner_html()));
                (label, value)
            })
            .collect();

        Self { entries }
    }
}

fn value_element(term: ElementRef<'_>) -> Option<ElementRef<'_>> {
    term.next_siblings().filter_map(ElementRef::wrap).nth(1)
}

impl DetailPageModel for DefinitionListPage {
    fn label_texts(&self) -> Vec<String> {
        self.entries.iter().map(|(label, _)| label.clone()).collect()
    }

    fn value_for(&self, label: &str) -> Option<String> {
        self.entries
            .iter()
            .filter(|(candidate, _)| candidate == label)
            .find_map(|(_, value)| value.clone())
    }

    fn entries(&self) -> Vec<(String, Option<String>)> {
        self.entries.clone()
    }
}

/// Build the raw field mapping of one detail page. A repeated label keeps
/// the value of its last term.
pub fn extract_fields(page: &dyn DetailPageModel) -> RawFields {
    let mut fields = RawFields::new();

    for (label, value) in page.entries() {
        let Some(value) = value else {
            debug!("No value next to label {:?}, skipping", label);
            continue;
        };

        match label.as_str() {
            labels::WEBSITE => fields.insert(labels::WEBSITE, strip_scheme(&value)),
            labels::VISITING_ADDRESS => {
                let address = parse_address(&value);
                if address.is_empty() {
                    debug!("No postal code in address {:?}", value);
                    continue;
                }
                fields.insert(labels::STREET, address.street);
                fields.insert(labels::POSTAL_CODE, address.postal_code);
                fields.insert(labels::CITY, address.city);
            }
            _ => fields.insert(label.as_str(), value),
        }
    }

    fields
}

/// Fetch a club's detail page and extract its raw fields.
pub async fn fetch_details(fetcher: &dyn PageFetcher, link: &str) -> Result<RawFields, FetchError> {
    info!("Fetching details from {}", link);
    let html = fetcher.fetch_text(link).await?;
    Ok(extract_fields(&DefinitionListPage::parse(&html)))
}
