use serde::{Deserialize, Serialize};
use std::fmt;

use super::{labels, RawFields};

/// What the overview page tells us about a club before its detail page is read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubStub {
    pub name: String,
    pub logo: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    pub name: String,
    pub logo: String,
    pub link: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub street: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub outfit: Option<String>,
    pub pitches: Option<String>,
    /// Passed through as scraped; numeric coercion happens at the store.
    pub members: Option<String>,
    pub founded: Option<String>,
}

impl From<ClubStub> for Club {
    fn from(stub: ClubStub) -> Self {
        Self {
            name: stub.name,
            logo: stub.logo,
            link: stub.link,
            ..Default::default()
        }
    }
}

impl fmt::Display for Club {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.link)
    }
}

/// Partial update folded out of one detail page. `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClubUpdate {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub street: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub outfit: Option<String>,
    pub pitches: Option<String>,
    pub members: Option<String>,
    pub founded: Option<String>,
}

impl ClubUpdate {
    pub fn from_raw(raw: &RawFields) -> Self {
        raw.iter().fold(Self::default(), |mut update, (label, value)| {
            let slot = match label {
                labels::PHONE => &mut update.phone,
                labels::EMAIL => &mut update.email,
                labels::WEBSITE => &mut update.website,
                labels::STREET => &mut update.street,
                labels::POSTAL_CODE => &mut update.postal_code,
                labels::CITY => &mut update.city,
                labels::OUTFIT => &mut update.outfit,
                labels::PITCHES => &mut update.pitches,
                labels::MEMBERS => &mut update.members,
                labels::FOUNDED => &mut update.founded,
                _ => return update,
            };
            *slot = Some(value.to_string());
            update
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Club {
    pub fn apply(&mut self, update: ClubUpdate) {
        fn set(field: &mut Option<String>, value: Option<String>) {
            if let Some(value) = value {
                *field = Some(value);
            }
        }

        set(&mut self.phone, update.phone);
        set(&mut self.email, update.email);
        set(&mut self.website, update.website);
        set(&mut self.street, update.street);
        set(&mut self.postal_code, update.postal_code);
        set(&mut self.city, update.city);
        set(&mut self.outfit, update.outfit);
        set(&mut self.pitches, update.pitches);
        set(&mut self.members, update.members);
        set(&mut self.founded, update.founded);
    }
}

/// Merge detail-page fields into an existing club. Name, logo and link are
/// only ever taken from the listing stub.
pub fn merge(mut existing: Club, raw: &RawFields) -> Club {
    existing.apply(ClubUpdate::from_raw(raw));
    existing
}
