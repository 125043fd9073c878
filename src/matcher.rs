use crate::features::is_boundary;
use crate::fold::Folder;
use ahash::AHashMap;
use compact_str::CompactString;
use std::borrow::Cow;
use tracing::{debug, trace};

const ROOT: u32 = 0;

/// Finds whole-word occurrences of any family exception and replaces them
/// with the canonical spelling.
///
/// Keys are stored as a prefix tree over fold-key characters, and the
/// input is folded one character at a time as we walk it, so matching is
/// insensitive to case and to the choice of apostrophe or dash without
/// ever building a folded copy of the input. Where several keys match at
/// the same position, the longest wins.
#[derive(Clone, Debug)]
pub struct ExceptionMatcher {
    edges: AHashMap<(u32, char), u32>,
    replacements: AHashMap<u32, CompactString>,
    version: u64,
}

impl ExceptionMatcher {
    pub fn new<'a, I>(exceptions: I, version: u64) -> ExceptionMatcher
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut edges = AHashMap::new();
        let mut replacements = AHashMap::new();
        let mut nodes = ROOT;

        for (key, replacement) in exceptions {
            if key.is_empty() {
                continue;
            }

            let mut node = ROOT;
            for c in key.chars() {
                node = *edges.entry((node, c)).or_insert_with(|| {
                    nodes += 1;
                    nodes
                });
            }
            replacements.insert(node, CompactString::from(replacement));
        }

        debug!(
            exceptions = replacements.len(),
            nodes = nodes + 1,
            version,
            "Built family exception matcher"
        );

        ExceptionMatcher {
            edges,
            replacements,
            version,
        }
    }

    /// Exception-store version this matcher was built from
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn replace_all<'t>(&self, text: &'t str, folder: &Folder) -> Cow<'t, str> {
        let mut result: Option<String> = None;
        let mut copied = 0;
        let mut i = 0;

        while i < text.len() {
            if let Some((end, replacement)) = self.longest_match(text, i, folder) {
                trace!(found = &text[i..end], replacement, "Family exception");
                let result = result.get_or_insert_with(|| String::with_capacity(text.len()));
                result.push_str(&text[copied..i]);
                result.push_str(replacement);
                copied = end;
                i = end;
            } else {
                i += text[i..].chars().next().map_or(1, char::len_utf8);
            }
        }

        match result {
            Some(mut result) => {
                result.push_str(&text[copied..]);
                Cow::Owned(result)
            }
            None => Cow::Borrowed(text),
        }
    }

    fn longest_match(&self, text: &str, start: usize, folder: &Folder) -> Option<(usize, &str)> {
        if !is_boundary(text, start) {
            return None;
        }

        let mut node = ROOT;
        let mut longest = None;

        for (offset, c) in text[start..].char_indices() {
            for k in folder.fold_char(c) {
                match self.edges.get(&(node, k)) {
                    Some(next) => node = *next,
                    None => return longest,
                }
            }

            if let Some(replacement) = self.replacements.get(&node) {
                let end = start + offset + c.len_utf8();
                if is_boundary(text, end) {
                    longest = Some((end, replacement.as_str()));
                }
            }
        }

        longest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(folder: &Folder, exceptions: &[&str]) -> ExceptionMatcher {
        let keys: Vec<(String, &str)> = exceptions.iter().map(|e| (folder.fold(e), *e)).collect();
        ExceptionMatcher::new(keys.iter().map(|(k, v)| (k.as_str(), *v)), 0)
    }

    #[test]
    fn whole_words_only() {
        let folder = Folder::default();
        let matcher = matcher(&folder, &["MacDonald", "Mac"]);
        assert_eq!("MacDonald", matcher.replace_all("Macdonald", &folder));
        assert_eq!("Mac Smith", matcher.replace_all("Mac Smith", &folder));
        assert_eq!("Macdonalds", matcher.replace_all("Macdonalds", &folder));
        assert_eq!("Amacdonald", matcher.replace_all("Amacdonald", &folder));
        assert_eq!(
            "Jane MacDonald-Smith",
            matcher.replace_all("Jane Macdonald-Smith", &folder)
        );
    }

    #[test]
    fn longest_match_wins() {
        let folder = Folder::default();
        let matcher = matcher(&folder, &["de la", "De La Cruz"]);
        assert_eq!("De La Cruz", matcher.replace_all("de la cruz", &folder));
        assert_eq!("de la Rosa", matcher.replace_all("De La Rosa", &folder));
    }

    #[test]
    fn apostrophes_and_dashes_are_interchangeable() {
        let folder = Folder::default();
        let matcher = matcher(&folder, &["d'Unienville", "Nom–Nom"]);
        assert_eq!(
            "Marrier d'Unienville",
            matcher.replace_all("Marrier D’unienville", &folder)
        );
        assert_eq!("Nom–Nom", matcher.replace_all("Nom-nom", &folder));
    }

    #[test]
    fn unchanged_text_is_borrowed() {
        let folder = Folder::default();
        let matcher = matcher(&folder, &["MacDonald"]);
        assert!(matches!(
            matcher.replace_all("Peter Smith", &folder),
            Cow::Borrowed(_)
        ));
    }
}
