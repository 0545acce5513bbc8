//! Identifier module - validated email addresses naming users
//!
//! Users are identified by email address throughout the system. Validation is
//! purely syntactic (no DNS or mailbox lookup) and the address is stored as
//! given: case is preserved and no normalization is applied.

use std::fmt;

/// Characters permitted in the local part of an address, besides
/// ASCII letters and digits.
const LOCAL_SPECIALS: &str = ".!#$%&'*+/=?^_`{|}~-";

/// Maximum length of a single domain label.
const MAX_LABEL_LEN: usize = 63;

/// A syntactically valid email address identifying a user.
///
/// Construction goes through [`Identifier::parse`], so holding an
/// `Identifier` is proof the string passed validation. The inner string is
/// kept exactly as supplied.
///
/// # Examples
///
/// ```
/// use friendgraph_domain::Identifier;
///
/// let id = Identifier::parse("andy@example.com").unwrap();
/// assert_eq!(id.as_str(), "andy@example.com");
/// assert!(Identifier::parse("not-an-email").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Parse and validate an email address.
    pub fn parse(s: &str) -> Result<Self, String> {
        if is_valid_email(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(format!("invalid email address: {}", s))
        }
    }

    /// Get the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Check whether a string is a syntactically valid email address.
///
/// Accepts the standard `local@domain` shape: the local part draws from the
/// RFC 5322 permitted character set (letters, digits, and
/// ``. ! # $ % & ' * + / = ? ^ _ ` { | } ~ -``), followed by `@`, followed by
/// one or more dot-separated DNS-style labels. Each label starts and ends
/// with an alphanumeric, may contain interior hyphens, and is at most 63
/// characters long.
///
/// Purely syntactic: no network lookup, no side effects.
pub fn is_valid_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };

    if local.is_empty() || !local.chars().all(is_local_char) {
        return false;
    }

    // A second '@' would land in the domain and fail label validation.
    !domain.is_empty() && domain.split('.').all(is_valid_label)
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || LOCAL_SPECIALS.contains(c)
}

fn is_valid_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    if bytes.is_empty() || bytes.len() > MAX_LABEL_LEN {
        return false;
    }
    if !bytes[0].is_ascii_alphanumeric() || !bytes[bytes.len() - 1].is_ascii_alphanumeric() {
        return false;
    }
    bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_addresses() {
        assert!(is_valid_email("andy@example.com"));
        assert!(is_valid_email("john@example.com"));
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("user@localhost"));
    }

    #[test]
    fn test_accepts_local_part_specials() {
        assert!(is_valid_email("first.last@example.com"));
        assert!(is_valid_email("user+tag@example.com"));
        assert!(is_valid_email("o'brien@example.com"));
        assert!(is_valid_email("weird!#$%&'*+/=?^_`{|}~-@example.com"));
    }

    #[test]
    fn test_accepts_hyphenated_domains() {
        assert!(is_valid_email("user@my-host.example.com"));
        assert!(is_valid_email("user@a-b-c.d"));
    }

    #[test]
    fn test_rejects_missing_parts() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("andy@"));
        assert!(!is_valid_email("andy"));
        assert!(!is_valid_email("andy.example.com"));
    }

    #[test]
    fn test_rejects_bad_labels() {
        assert!(!is_valid_email("user@-example.com"));
        assert!(!is_valid_email("user@example-.com"));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("user@example.com."));
        assert!(!is_valid_email("user@exa mple.com"));
    }

    #[test]
    fn test_rejects_double_at() {
        assert!(!is_valid_email("a@b@example.com"));
    }

    #[test]
    fn test_rejects_overlong_label() {
        let long_label = "a".repeat(64);
        assert!(!is_valid_email(&format!("user@{}.com", long_label)));
        let max_label = "a".repeat(63);
        assert!(is_valid_email(&format!("user@{}.com", max_label)));
    }

    #[test]
    fn test_identifier_preserves_case() {
        let id = Identifier::parse("Andy@Example.COM").unwrap();
        assert_eq!(id.as_str(), "Andy@Example.COM");
    }

    #[test]
    fn test_identifier_display() {
        let id = Identifier::parse("andy@example.com").unwrap();
        assert_eq!(id.to_string(), "andy@example.com");
    }

    #[test]
    fn test_identifier_parse_invalid() {
        let err = Identifier::parse("nope").unwrap_err();
        assert!(err.contains("nope"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: well-formed local@domain addresses are accepted
        #[test]
        fn test_wellformed_addresses_accepted(
            local in "[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]{1,20}",
            label_a in "[a-z0-9]([a-z0-9-]{0,10}[a-z0-9])?",
            label_b in "[a-z0-9]([a-z0-9-]{0,10}[a-z0-9])?",
        ) {
            let addr = format!("{}@{}.{}", local, label_a, label_b);
            prop_assert!(is_valid_email(&addr), "rejected {}", addr);
        }

        /// Property: strings without an '@' are never valid
        #[test]
        fn test_no_at_sign_rejected(s in "[a-zA-Z0-9.]{0,30}") {
            prop_assert!(!is_valid_email(&s));
        }

        /// Property: parse succeeds exactly when validation does
        #[test]
        fn test_parse_matches_validation(s in "\\PC{0,40}") {
            prop_assert_eq!(Identifier::parse(&s).is_ok(), is_valid_email(&s));
        }
    }
}
