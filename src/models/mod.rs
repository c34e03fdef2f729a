pub mod club;
pub mod raw_fields;

pub use club::*;
pub use raw_fields::*;

/// Detail-page labels as they appear on the site, plus the keys the address
/// split is stored under.
pub mod labels {
    pub const PHONE: &str = "Telefoonnummer";
    pub const EMAIL: &str = "E-mailadres";
    pub const WEBSITE: &str = "Website";
    pub const VISITING_ADDRESS: &str = "Bezoekadres";
    pub const OUTFIT: &str = "Omschrijving tenue";
    pub const PITCHES: &str = "Soort velden";
    pub const MEMBERS: &str = "Aantal leden";
    pub const FOUNDED: &str = "Opgericht in";

    pub const STREET: &str = "street";
    pub const POSTAL_CODE: &str = "postal_code";
    pub const CITY: &str = "city";
}

/// The federation itself shows up as a ticket on the overview page.
pub const FEDERATION_NAME: &str = "KNHB";
