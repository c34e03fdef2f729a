#![allow(dead_code)]

use std::sync::Arc;

use hocklubs::{Config, HttpFetcher, ScrapeSession};
use wiremock::MockServer;

pub const LISTING_PATH: &str = "/clubs/";

/// Overview page with two clubs, the federation ticket and a club without logo.
pub fn overview_html(server_uri: &str) -> String {
    format!(
        r#"<html><body><div class="tickets">
          <div class="ticket">
            <div class="ticket-aside"><img src="/media/logos/hc-rotterdam.png"></div>
            <div class="ticket-body"><span class="ticket-label">HC Rotterdam</span></div>
            <a class="ticket-action" href="{server_uri}/clubs/hc-rotterdam/">Bekijk club</a>
          </div>
          <div class="ticket">
            <div class="ticket-aside"><img src="/media/logos/knhb.png"></div>
            <div class="ticket-body"><span class="ticket-label">KNHB</span></div>
            <a class="ticket-action" href="{server_uri}/clubs/knhb/">Bekijk club</a>
          </div>
          <div class="ticket">
            <div class="ticket-aside"><img src="/media/logos/mhc-laren.png"></div>
            <div class="ticket-body"><span class="ticket-label">MHC Laren</span></div>
            <a class="ticket-action" href="/clubs/mhc-laren/">Bekijk club</a>
          </div>
        </div></body></html>"#
    )
}

pub const ROTTERDAM_HTML: &str = r#"<html><body><dl>
    <dt>Telefoonnummer</dt><dd class="sep"></dd><dd>010-1234567</dd>
    <dt>E-mailadres</dt><dd class="sep"></dd><dd><a href="mailto:info@hcrotterdam.nl">info@hcrotterdam.nl</a></dd>
    <dt>Website</dt><dd class="sep"></dd><dd>https://www.hcrotterdam.nl</dd>
    <dt>Bezoekadres</dt><dd class="sep"></dd><dd>Van Nelleweg 1<br>3044 BC Rotterdam</dd>
    <dt>Omschrijving tenue</dt><dd class="sep"></dd><dd>Groen shirt, zwarte broek</dd>
    <dt>Soort velden</dt><dd class="sep"></dd><dd>Water, semi-water</dd>
    <dt>Aantal leden<span class="tip">per 1 januari</span></dt><dd class="sep"></dd><dd>2400</dd>
    <dt>Opgericht in</dt><dd class="sep"></dd><dd>1960</dd>
</dl></body></html>"#;

pub const LAREN_HTML: &str = r#"<html><body><dl>
    <dt>Telefoonnummer</dt><dd class="sep"></dd><dd>035-5312345</dd>
    <dt>Bezoekadres</dt><dd class="sep"></dd><dd>Sportpark De Biezem, Laren</dd>
    <dt>Aantal leden</dt><dd class="sep"></dd><dd>onbekend</dd>
</dl></body></html>"#;

pub fn session_for(server: &MockServer) -> ScrapeSession {
    let config = Arc::new(Config::for_site(&server.uri(), LISTING_PATH));
    let fetcher = Arc::new(HttpFetcher::new(&config).expect("http client"));
    ScrapeSession::new(fetcher, config)
}
