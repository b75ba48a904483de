//! Human name parsing
//!
//! Creator elements hold free-text names in whatever form the cataloguer
//! typed: "Jane Q. Public", "Public, Jane Q.", "Dr. John Doe Jr.". The
//! OpenURL author fields want the parts separated, so the encoder runs
//! each creator through a [`NameParser`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::name::ParsedName;

/// Splits a free-text name into first name, last name and initials.
pub trait NameParser {
    fn parse(&self, full_name: &str) -> ParsedName;
}

static SALUTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(mr|mrs|ms|miss|dr|prof|rev|fr|sir|hon)\.?$").unwrap());

static SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(jr|sr|i{1,3}|iv|v|esq|phd|md|jd|dds|cpa)\.?$").unwrap());

// A dotted single letter is an initial, even where it collides with a
// roman-numeral suffix ("V.", "I.").
static INITIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]\.$").unwrap());

// Lowercase surname particles: "Ludwig van Beethoven" keeps "van" with the
// surname, not the initials.
static PARTICLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(van|von|der|den|de|del|della|di|da|la|le|dos|du|st\.?)$").unwrap());

/// Default name parser.
///
/// Handles the two forms that dominate catalog data: the inverted
/// bibliographic form ("Public, Jane Q.") and the direct form
/// ("Jane Q. Public"), with salutations and generational or credential
/// suffixes stripped. Interior tokens reduce to initials; lowercase
/// particles attach to the surname.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullNameParser;

impl FullNameParser {
    pub fn new() -> Self {
        Self
    }
}

impl NameParser for FullNameParser {
    fn parse(&self, full_name: &str) -> ParsedName {
        let name = full_name.trim();
        if name.is_empty() {
            return ParsedName::default();
        }

        if let Some((head, tail)) = name.split_once(',') {
            let given: Vec<&str> = tail
                .split_whitespace()
                .filter(|token| INITIAL.is_match(token) || !SUFFIX.is_match(token))
                .collect();
            if given.is_empty() {
                // "John Doe, Jr." -- the comma introduced a suffix, not an
                // inverted name
                return parse_direct(head.trim());
            }
            let (first, initials) = given_and_initials(&given);
            return ParsedName {
                first,
                last: head.trim().to_string(),
                initials,
            };
        }

        parse_direct(name)
    }
}

fn parse_direct(name: &str) -> ParsedName {
    let mut tokens: Vec<&str> = name.split_whitespace().collect();

    while tokens.len() > 1 && SALUTATION.is_match(tokens[0]) {
        tokens.remove(0);
    }
    while tokens.len() > 1 && SUFFIX.is_match(tokens[tokens.len() - 1]) {
        tokens.pop();
    }

    if tokens.len() <= 1 {
        return ParsedName {
            last: tokens.first().copied().unwrap_or_default().to_string(),
            ..Default::default()
        };
    }

    let mut last_start = tokens.len() - 1;
    while last_start > 1 && PARTICLE.is_match(tokens[last_start - 1]) {
        last_start -= 1;
    }

    let (first, initials) = given_and_initials(&tokens[..last_start]);
    ParsedName {
        first,
        last: tokens[last_start..].join(" "),
        initials,
    }
}

/// First token is the given name; every later token reduces to an initial.
fn given_and_initials(tokens: &[&str]) -> (String, String) {
    let first = tokens.first().copied().unwrap_or_default().to_string();
    let initials = tokens[1..]
        .iter()
        .filter_map(|token| token.chars().next())
        .map(|c| format!("{}.", c.to_uppercase()))
        .collect::<Vec<_>>()
        .join(" ");
    (first, initials)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(name: &str) -> ParsedName {
        FullNameParser::new().parse(name)
    }

    #[test]
    fn test_direct_form() {
        let name = parse("Jane Q. Public");
        assert_eq!(name.first, "Jane");
        assert_eq!(name.initials, "Q.");
        assert_eq!(name.last, "Public");
    }

    #[test]
    fn test_inverted_form() {
        let name = parse("Public, Jane Q.");
        assert_eq!(name.first, "Jane");
        assert_eq!(name.initials, "Q.");
        assert_eq!(name.last, "Public");

        let name = parse("Tolkien, J.");
        assert_eq!(name.first, "J.");
        assert_eq!(name.last, "Tolkien");

        // dotted initial, not a roman-numeral suffix
        let name = parse("Doe, John V.");
        assert_eq!(name.initials, "V.");
        assert_eq!(name.last, "Doe");
    }

    #[test]
    fn test_salutation_and_suffix() {
        let name = parse("Dr. Martin Luther King III");
        assert_eq!(name.first, "Martin");
        assert_eq!(name.initials, "L.");
        assert_eq!(name.last, "King");

        let name = parse("John Doe, Jr.");
        assert_eq!(name.first, "John");
        assert_eq!(name.last, "Doe");
    }

    #[test]
    fn test_surname_particles() {
        let name = parse("Ludwig van Beethoven");
        assert_eq!(name.first, "Ludwig");
        assert_eq!(name.last, "van Beethoven");
        assert_eq!(name.initials, "");

        let name = parse("Oscar de la Hoya");
        assert_eq!(name.first, "Oscar");
        assert_eq!(name.last, "de la Hoya");
    }

    #[test]
    fn test_middle_names_reduce_to_initials() {
        let name = parse("George Herbert Walker Bush");
        assert_eq!(name.first, "George");
        assert_eq!(name.initials, "H. W.");
        assert_eq!(name.last, "Bush");
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(parse("").is_empty());
        assert!(parse("   ").is_empty());

        let name = parse("Anonymous");
        assert_eq!(name.last, "Anonymous");
        assert_eq!(name.first, "");
    }
}
