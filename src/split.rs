use crate::features::{is_cjk, is_japanese};
use crate::japanese;
use crate::namecase::Mode;
use crate::trim::nametrim;
use crate::NameContext;
use smallvec::SmallVec;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

// Conjunctions in Spanish, Catalan and Portuguese double-barrelled family
// names ("Ortega y Gasset"), which belong with the word before them
const CONJUNCTIONS: [&str; 3] = ["y", "i", "e"];

impl NameContext {
    /// Rewrite a full name as "Family, Given", guessing which words make up
    /// the family name, with the case corrected.
    ///
    /// Names which already have a comma are taken to be in that form. Names
    /// which can't be split reliably need a split exception.
    ///
    /// ```
    /// use human_namecase::NameContext;
    ///
    /// let context = NameContext::new();
    /// assert_eq!("Smith, John Peter", context.namesplit("JOHN PETER SMITH"));
    /// assert_eq!("de Groot, John", context.namesplit("john de groot"));
    /// assert_eq!("Xi, Jinping", context.namesplit("Xi Jinping"));
    /// assert_eq!("习, 近平", context.namesplit("习近平"));
    /// assert_eq!("佐藤, 明実", context.namesplit("佐藤明実"));
    /// ```
    pub fn namesplit(&self, name: &str) -> String {
        let name = nametrim(name);
        if name.is_empty() {
            return name;
        }

        if let Some(exception) = self.exceptions.split(&name, &self.folder.fold(&name)) {
            debug!(name = name.as_str(), exception, "Split exception");
            return exception.to_string();
        }

        if name.contains(',') {
            return self.namecase(&name, Mode::Full, None);
        }

        let words: SmallVec<[&str; 6]> = name.split(' ').collect();

        // Before multi-word family names, since Vietnamese names can
        // contain "Van"
        if let Some((family, given)) = self.vietnamese_split(&words) {
            debug!(name = name.as_str(), rule = "vietnamese", "Split");
            return self.sorted(&family, &given);
        }

        if words.len() < 2 && !is_cjk(&name) {
            return self.namecase(&name, Mode::Full, None);
        }

        if let Some(i) = self.family_name_start(&name, &words) {
            debug!(name = name.as_str(), rule = "starter", "Split");
            return self.sorted(&words[i..].join(" "), &words[..i].join(" "));
        }

        if let Some(i) = self.native_family_name_end(&name) {
            debug!(name = name.as_str(), rule = "native", "Split");
            return self.sorted(&name[..i], &name[i..]);
        }

        // Romanized Chinese given names are usually one word, but Korean ones
        // are often two, each of which may look like a family name. The
        // first match wins, so Korean names with the family name last need
        // split exceptions.
        if let Some((family, given)) = self.romanized_split(&words) {
            debug!(name = name.as_str(), rule = "romanized", "Split");
            return self.sorted(&family, &given);
        }

        if is_japanese(&name) {
            debug!(name = name.as_str(), rule = "japanese", "Split");
            return match japanese::split_point(&name, &self.tables.japanese_family_probabilities) {
                Some(i) => self.sorted(&name[..i], &name[i..]),
                None => self.namecase(&name, Mode::Full, None),
            };
        }

        // Unhyphenated multi-word family names that get here need split
        // exceptions
        match words.split_last() {
            Some((family, given)) if !given.is_empty() => {
                debug!(name = name.as_str(), rule = "last word", "Split");
                self.sorted(family, &given.join(" "))
            }
            _ => self.namecase(&name, Mode::Full, None),
        }
    }

    /// Like `namesplit`, but returns the family name and the given names
    /// separately. Empty input gives an empty list, and input that can't
    /// be split (a single word) gives a single element.
    ///
    /// ```
    /// use human_namecase::NameContext;
    ///
    /// let context = NameContext::new();
    /// assert_eq!(vec!["Smith", "John Peter"], context.nameparts("John Peter Smith"));
    /// assert_eq!(vec!["Smith"], context.nameparts("SMITH"));
    /// assert!(context.nameparts(" ").is_empty());
    /// ```
    pub fn nameparts(&self, name: &str) -> Vec<String> {
        let split = self.namesplit(name);
        if split.is_empty() {
            return Vec::new();
        }

        match split.split_once(',') {
            Some((family, given)) => {
                let given = given.strip_prefix(' ').unwrap_or(given);
                vec![family.to_string(), given.to_string()]
            }
            None => vec![split],
        }
    }

    fn sorted(&self, family: &str, given: &str) -> String {
        self.namecase(&format!("{}, {}", family, given), Mode::Full, None)
    }

    fn is_vietnamese_family_name(&self, word: &str) -> bool {
        self.tables
            .vietnamese_family_names
            .contains(self.folder.fold(word).as_str())
    }

    fn is_romanized_family_name(&self, word: &str) -> bool {
        self.tables
            .roman_family_names
            .contains(self.folder.fold(word).as_str())
    }

    fn vietnamese_split(&self, words: &[&str]) -> Option<(String, String)> {
        let (first, rest) = words.split_first()?;
        if rest.is_empty() {
            return None;
        }
        if self.is_vietnamese_family_name(first) {
            return Some((first.to_string(), rest.join(" ")));
        }

        let (last, rest) = words.split_last()?;
        if self.is_vietnamese_family_name(last) {
            return Some((last.to_string(), rest.join(" ")));
        }

        None
    }

    fn romanized_split(&self, words: &[&str]) -> Option<(String, String)> {
        let (first, rest) = words.split_first()?;
        if rest.is_empty() {
            return None;
        }
        if self.is_romanized_family_name(first) {
            return Some((first.to_string(), rest.join(" ")));
        }

        let (last, rest) = words.split_last()?;
        if self.is_romanized_family_name(last) {
            return Some((last.to_string(), rest.join(" ")));
        }

        None
    }

    /// Index of the word that starts a multi-word family name, such as the
    /// "de" in "John de Groot". The family name must come after at least
    /// one given name, and the starter can't be the last word.
    fn family_name_start(&self, name: &str, words: &[&str]) -> Option<usize> {
        for i in 1..words.len().saturating_sub(1) {
            let key = self.folder.fold(words[i]);
            if !self.tables.split_starters.contains(key.as_str()) {
                continue;
            }

            // "Ben" is also a given name
            if key == "ben" && !self.case_rules.is_hebrew_patronymic(name) {
                continue;
            }

            // "Bean" (wife of) only when followed by Uí or Mhic
            if key == "bean" {
                let next = self.folder.fold(words[i + 1]);
                if !self.tables.irish_post_bean.contains(next.as_str()) {
                    continue;
                }
            }

            if i > 1 && CONJUNCTIONS.contains(&key.as_str()) {
                return Some(i - 1);
            }
            return Some(i);
        }

        None
    }

    /// Byte offset just past the longest native-script family name that
    /// starts the name, leaving at least one character for the given name.
    /// Offsets are grapheme boundaries, so decomposed Hangul syllables are
    /// never split between their jamo.
    fn native_family_name_end(&self, name: &str) -> Option<usize> {
        let offsets: SmallVec<[usize; 8]> = name
            .grapheme_indices(true)
            .map(|(i, _)| i)
            .skip(1)
            .take(self.tables.longest_native_family_name)
            .collect();

        offsets
            .into_iter()
            .rev()
            .find(|i| self.tables.native_family_names.contains(&name[..*i]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn western() {
        let context = NameContext::new();
        assert_eq!("Smith, John Peter", context.namesplit("John Peter Smith"));
        assert_eq!("Smith, John", context.namesplit("  JOHN   SMITH "));
        assert_eq!("Smith", context.namesplit("smith"));
        assert_eq!("", context.namesplit("  "));
    }

    #[test]
    fn existing_comma() {
        let context = NameContext::new();
        assert_eq!("Smith, John Peter", context.namesplit("smith,john peter"));
        assert_eq!("ben Joseph, David", context.namesplit("ben Joseph, David"));
    }

    #[test]
    fn multi_word_family_names() {
        let context = NameContext::new();
        assert_eq!("de Groot, John", context.namesplit("John de Groot"));
        assert_eq!("van der Berg, Jan", context.namesplit("JAN VAN DER BERG"));
        assert_eq!(
            "Ortega y Gasset, José",
            context.namesplit("José Ortega y Gasset")
        );
    }

    #[test]
    fn ben_and_bean() {
        let context = NameContext::new();
        assert_eq!("Peters, John Ben", context.namesplit("John Ben Peters"));
        assert_eq!("Joseph, David Ben", context.namesplit("David ben Joseph"));
        assert_eq!(
            "ben Joseph ha-Kohein, David",
            context.namesplit("David ben Joseph ha-Kohein")
        );
        assert_eq!("Bean, Mary", context.namesplit("Mary Bean"));
    }

    #[test]
    fn chinese_and_korean() {
        let context = NameContext::new();
        assert_eq!("习, 近平", context.namesplit("习近平"));
        assert_eq!("Xi, Jinping", context.namesplit("Xi Jinping"));
        assert_eq!("Xi, Jinping", context.namesplit("Jinping Xi"));
        assert_eq!("이, 영호", context.namesplit("이영호"));
        assert_eq!("Lee, Young Ho", context.namesplit("Lee Young Ho"));
    }

    #[test]
    fn vietnamese() {
        let context = NameContext::new();
        assert_eq!("Nguyễn, Kim", context.namesplit("Nguyễn Kim"));
        assert_eq!("Tran, Van Man", context.namesplit("Van Man Tran"));
    }

    #[test]
    fn parts() {
        let context = NameContext::new();
        assert_eq!(vec!["de Groot", "John"], context.nameparts("john de groot"));
        assert_eq!(vec!["习", "近平"], context.nameparts("习近平"));
        assert_eq!(vec!["佐"], context.nameparts("佐"));
        assert!(context.nameparts("").is_empty());
    }
}
