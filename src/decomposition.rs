use std::borrow::Cow;
use unicode_normalization::{is_nfc_quick, is_nfd_quick, IsNormalized, UnicodeNormalization};

/// Canonical composition. Suitable as a `NameContext::normalize` transform,
/// and for preparing input to match.
pub fn nfc(string: &str) -> Cow<str> {
    if is_nfc_quick(string.chars()) == IsNormalized::Yes {
        Cow::Borrowed(string)
    } else {
        Cow::Owned(string.nfc().collect())
    }
}

/// Canonical decomposition. Suitable as a `NameContext::normalize`
/// transform, and for preparing input to match.
pub fn nfd(string: &str) -> Cow<str> {
    if is_nfd_quick(string.chars()) == IsNormalized::Yes {
        Cow::Borrowed(string)
    } else {
        Cow::Owned(string.nfd().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composition() {
        assert_eq!("Ó hUiginn", nfc("O\u{301} hUiginn"));
        assert!(matches!(nfc("Ó hUiginn"), Cow::Borrowed(_)));
    }

    #[test]
    fn decomposition() {
        assert_eq!("O\u{301} hUiginn", nfd("Ó hUiginn"));
        assert!(matches!(nfd("O hUiginn"), Cow::Borrowed(_)));
    }
}
