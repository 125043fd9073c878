use once_cell::sync::Lazy;
use regex::Regex;

// Character classes are defined through the regex engine so that explicit
// boundary checks agree exactly with `\w` and `\b` in the rewrite patterns.

static WORD_CHAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w$").unwrap());

static DASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\p{Pd}$").unwrap());

static HANGUL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{Hangul}").unwrap());

// Combining marks are allowed after each base character, so that
// NFD-decomposed kana and Hangul jamo sequences still qualify
static CJK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[\p{Han}\p{Hangul}\p{Hiragana}\p{Katakana}]\p{M}*)+$").unwrap()
});

static JAPANESE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[\p{Han}\p{Hiragana}\p{Katakana}]\p{M}*)+$").unwrap());

static KANA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{Hiragana}\p{Katakana}]").unwrap());

#[inline]
fn matches_char(re: &Regex, c: char) -> bool {
    let mut buf = [0; 4];
    re.is_match(c.encode_utf8(&mut buf))
}

pub fn is_word_char(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphanumeric() || c == '_'
    } else {
        matches_char(&WORD_CHAR, c)
    }
}

pub fn is_dash(c: char) -> bool {
    if c.is_ascii() {
        c == '-'
    } else {
        matches_char(&DASH, c)
    }
}

/// Whether there is a word boundary (in the `\b` sense) at byte offset `i`
pub fn is_boundary(text: &str, i: usize) -> bool {
    let before = text[..i].chars().next_back().map_or(false, is_word_char);
    let after = text[i..].chars().next().map_or(false, is_word_char);
    before != after
}

pub fn has_hangul(text: &str) -> bool {
    HANGUL.is_match(text)
}

/// Entirely Han, Hangul, Hiragana or Katakana (the scripts written without
/// spaces between family and given names)
pub fn is_cjk(text: &str) -> bool {
    CJK.is_match(text)
}

/// Entirely Han, Hiragana or Katakana
pub fn is_japanese(text: &str) -> bool {
    JAPANESE.is_match(text)
}

/// Whether a grapheme is a kana character (possibly with combining marks)
pub fn is_kana(grapheme: &str) -> bool {
    KANA.is_match(grapheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_chars() {
        assert!(is_word_char('a'));
        assert!(is_word_char('é'));
        assert!(is_word_char('\u{301}'));
        assert!(is_word_char('ʻ'));
        assert!(is_word_char('习'));
        assert!(!is_word_char('\''));
        assert!(!is_word_char('’'));
        assert!(!is_word_char('-'));
        assert!(!is_word_char(' '));
    }

    #[test]
    fn dashes() {
        assert!(is_dash('-'));
        assert!(is_dash('‐'));
        assert!(is_dash('–'));
        assert!(is_dash('—'));
        assert!(is_dash('־'));
        assert!(!is_dash('_'));
        assert!(!is_dash('\''));
    }

    #[test]
    fn boundaries() {
        assert!(is_boundary("O'Brian", 0));
        assert!(is_boundary("O'Brian", 1));
        assert!(is_boundary("O'Brian", 2));
        assert!(!is_boundary("O'Brian", 3));
        assert!(is_boundary("O'Brian", 7));
        assert!(!is_boundary("", 0));
    }

    #[test]
    fn scripts() {
        assert!(is_cjk("习近平"));
        assert!(is_cjk("이영호"));
        assert!(is_cjk("佐藤あけみ"));
        assert!(!is_cjk("习 近平"));
        assert!(!is_cjk("Xi Jinping"));
        assert!(!is_cjk(""));

        assert!(is_japanese("佐々木順平"));
        assert!(is_japanese("長谷川ミツキ"));
        assert!(!is_japanese("이영호"));

        assert!(is_kana("あ"));
        assert!(is_kana("カ"));
        assert!(is_kana("か\u{3099}"));
        assert!(!is_kana("佐"));
        assert!(!is_kana("々"));

        assert!(has_hangul("남궁"));
        assert!(!has_hangul("南宮"));
    }
}
