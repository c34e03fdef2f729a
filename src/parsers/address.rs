use once_cell::sync::Lazy;
use regex::Regex;

/// Dutch postal code: four digits, optional space, two letters.
static POSTAL_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{4}) ?([A-Za-z]{2})\b").expect("Invalid postal code regex")
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub postal_code: String,
    pub city: String,
}

impl Address {
    /// True when no postal code was found; callers keep what they already had.
    pub fn is_empty(&self) -> bool {
        self.street.is_empty() && self.postal_code.is_empty() && self.city.is_empty()
    }
}

/// Split a visiting address around its postal code.
pub fn parse_address(text: &str) -> Address {
    let Some(captures) = POSTAL_CODE_REGEX.captures(text) else {
        return Address::default();
    };
    let (Some(token), Some(digits), Some(letters)) = (captures.get(0), captures.get(1), captures.get(2)) else {
        return Address::default();
    };

    Address {
        street: text[..token.start()].trim().to_string(),
        postal_code: format!("{} {}", digits.as_str(), letters.as_str().to_uppercase()),
        city: text[token.end()..].trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_street_postal_code_and_city() {
        assert_eq!(
            parse_address("Hoofdstraat 12 1234 AB Amsterdam"),
            Address {
                street: "Hoofdstraat 12".into(),
                postal_code: "1234 AB".into(),
                city: "Amsterdam".into(),
            }
        );
    }

    #[test]
    fn postal_code_without_space_is_normalized() {
        let address = parse_address("Sportpark De Bongerd, Laan van Olympia 4, 1183ab Amstelveen");
        assert_eq!(address.street, "Sportpark De Bongerd, Laan van Olympia 4,");
        assert_eq!(address.postal_code, "1183 AB");
        assert_eq!(address.city, "Amstelveen");
    }

    #[test]
    fn only_whitespace_is_trimmed() {
        let address = parse_address("Laan 4, 1183 AB, Amstelveen ");
        assert_eq!(address.street, "Laan 4,");
        assert_eq!(address.city, ", Amstelveen");
    }

    #[test]
    fn takes_the_first_postal_code() {
        let address = parse_address("Kerkweg 1 2000 AA Haarlem 3000 BB Rotterdam");
        assert_eq!(address.postal_code, "2000 AA");
        assert_eq!(address.city, "Haarlem 3000 BB Rotterdam");
    }

    #[test]
    fn longer_digit_runs_are_not_postal_codes() {
        assert!(parse_address("Postbus 12345 AB").is_empty());
    }

    #[test]
    fn missing_postal_code_yields_empty_parts() {
        let address = parse_address("Sportpark Zuid, Amsterdam");
        assert_eq!(address, Address::default());
        assert!(address.is_empty());
        assert!(parse_address("").is_empty());
    }
}
