use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

use crate::error::FetchError;
use crate::models::{ClubStub, FEDERATION_NAME};
use crate::parsers::clean_text;
use crate::utils::http::PageFetcher;

static TICKET_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(".ticket").expect("Invalid ticket selector")
});
static ACTION_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("a.ticket-action").expect("Invalid action selector")
});
static LABEL_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(".ticket-body > .ticket-label").expect("Invalid label selector")
});
static LOGO_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(".ticket-aside > img").expect("Invalid logo selector")
});

/// Fetch the overview page and list every club on it.
pub async fn prefetch(fetcher: &dyn PageFetcher, listing_url: &str) -> Result<Vec<ClubStub>, FetchError> {
    info!("Fetching club overview from {}", listing_url);
    let html = fetcher.fetch_text(listing_url).await?;

    let stubs = parse_listing(&html);
    info!("Found {} clubs on the overview page", stubs.len());
    Ok(stubs)
}

/// Parse the overview page. Missing parts of a ticket become empty strings.
pub fn parse_listing(html: &str) -> Vec<ClubStub> {
    let document = Html::parse_document(html);

    document
        .select(&TICKET_SELECTOR)
        .map(parse_ticket)
        .filter(|stub| {
            let keep = stub.name != FEDERATION_NAME;
            if !keep {
                debug!("Skipping federation ticket {}", stub.link);
            }
            keep
        })
        .collect()
}

fn parse_ticket(ticket: ElementRef<'_>) -> ClubStub {
    let first_attr = |selector: &Selector, attr: &str| {
        ticket
            .select(selector)
            .next()
            .and_then(|element| element.value().attr(attr))
            .unwrap_or_default()
            .to_string()
    };

    ClubStub {
        link: first_attr(&ACTION_SELECTOR, "href"),
        name: ticket
            .select(&LABEL_SELECTOR)
            .next()
            .map(|label| clean_text(&label.text().collect::<String>()))
            .unwrap_or_default(),
        logo: first_attr(&LOGO_SELECTOR, "src"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const OVERVIEW: &str = r#"
        <html><body><div class="tickets">
          <div class="ticket">
            <div class="ticket-aside"><img src="/media/logos/amsterdam.png" alt=""></div>
            <div class="ticket-body"><span class="ticket-label">
              Amsterdamsche H&amp;BC
            </span></div>
            <a class="ticket-action" href="https://hockey.nl/clubs/ahbc/">Bekijk</a>
          </div>
          <div class="ticket">
            <div class="ticket-aside"><img src="/media/logos/knhb.png"></div>
            <div class="ticket-body"><span class="ticket-label">KNHB</span></div>
            <a class="ticket-action" href="https://hockey.nl/clubs/knhb/">Bekijk</a>
          </div>
          <div class="ticket">
            <div class="ticket-body"><span class="ticket-label">HC Zonder Logo</span></div>
          </div>
        </div></body></html>
    "#;

    #[test]
    fn tickets_become_stubs_in_page_order() {
        let stubs = parse_listing(OVERVIEW);

        assert_eq!(
            stubs,
            vec![
                ClubStub {
                    name: "Amsterdamsche H&BC".into(),
                    logo: "/media/logos/amsterdam.png".into(),
                    link: "https://hockey.nl/clubs/ahbc/".into(),
                },
                ClubStub {
                    name: "HC Zonder Logo".into(),
                    logo: String::new(),
                    link: String::new(),
                },
            ]
        );
    }

    #[test]
    fn federation_is_never_listed() {
        assert!(parse_listing(OVERVIEW).iter().all(|stub| stub.name != "KNHB"));
    }

    #[test]
    fn only_exact_federation_name_is_dropped() {
        let html = r#"<div class="ticket"><div class="ticket-body">
            <span class="ticket-label">KNHB Regio Noord</span></div></div>"#;
        assert_eq!(parse_listing(html).len(), 1);
    }

    #[test]
    fn page_without_tickets_is_empty() {
        assert!(parse_listing("<html><body><p>Onderhoud</p></body></html>").is_empty());
    }
}
