use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static SPACE_AFTER_DASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\p{Pd}) ").unwrap());

static SPACE_BEFORE_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" (,|\p{Pd})").unwrap());

static COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r", ?").unwrap());

/// Collapse whitespace and tidy spacing around commas and dashes.
///
/// Leading and trailing whitespace is removed, internal runs become a
/// single space, dashes lose the spaces on either side, commas lose the
/// space before them and get exactly one after.
///
/// ```
/// use human_namecase::nametrim;
///
/// assert_eq!("Peter Smith-Jones", nametrim("  Peter Smith - Jones  "));
/// assert_eq!("Smith-Jones, Peter", nametrim(" Smith - Jones ,Peter "));
/// ```
pub fn nametrim(name: &str) -> String {
    let result = WHITESPACE.replace_all(name.trim(), " ");
    let result = SPACE_AFTER_DASH.replace_all(&result, "$1");
    let result = SPACE_BEFORE_PUNCTUATION.replace_all(&result, "$1");
    let result = COMMA.replace_all(&result, ", ");
    result.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace() {
        assert_eq!("Peter Smith", nametrim("Peter Smith"));
        assert_eq!("Peter Smith", nametrim(" \tPeter\n\n Smith\u{3000}"));
        assert_eq!("", nametrim("   "));
        assert_eq!("", nametrim(""));
    }

    #[test]
    fn dashes() {
        assert_eq!("Smith-Jones", nametrim("Smith - Jones"));
        assert_eq!("Smith–Jones", nametrim("Smith – Jones"));
        assert_eq!("Smith-Jones", nametrim("Smith-  Jones"));
    }

    #[test]
    fn commas() {
        assert_eq!("Smith, Peter", nametrim("Smith,Peter"));
        assert_eq!("Smith, Peter", nametrim("Smith ,  Peter"));
        assert_eq!("Smith, Peter", nametrim("Smith, Peter"));
    }
}
