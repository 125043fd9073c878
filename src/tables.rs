use crate::features::has_hangul;
use crate::fold::Folder;
use ahash::{AHashMap, AHashSet};
use compact_str::CompactString;
use unicode_segmentation::UnicodeSegmentation;

static FAMILY_EXCEPTIONS: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/family_exceptions.rs"));

static SPLIT_STARTERS: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/split_starters.rs"));

static IRISH_O: &[&str] = include!(concat!(env!("OUT_DIR"), "/irish_o.rs"));

static IRISH_VOWELS: &[&str] = include!(concat!(env!("OUT_DIR"), "/irish_vowels.rs"));

static IRISH_POST_BEAN: &[&str] = include!(concat!(env!("OUT_DIR"), "/irish_post_bean.rs"));

static CHINESE_FAMILY_NAMES: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/chinese_family_names.rs"));

// Includes Hanja entries, which we skip; Han-script names go through the
// Chinese set or the Japanese splitter
static KOREAN_FAMILY_NAMES: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/korean_family_names.rs"));

static CK_ROMAN_FAMILY_NAMES: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/ck_roman_family_names.rs"));

static VIETNAMESE_FAMILY_NAMES: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/vietnamese_family_names.rs"));

static JAPANESE_FAMILY_PROBABILITIES: phf::Map<&'static str, f64> =
    include!(concat!(env!("OUT_DIR"), "/japanese_family_probabilities.rs"));

/// Built-in family-wide case exceptions, in their canonical spelling.
pub fn builtin_family_exceptions() -> impl Iterator<Item = &'static str> {
    FAMILY_EXCEPTIONS.iter().copied()
}

/// Working copy of the static name data, keyed the way lookups need it.
///
/// Everything here is rewritten in place by `NameContext::normalize`, so
/// the compiled-in tables are only read once, at construction.
#[derive(Clone, Debug)]
pub struct Tables {
    /// Fold keys of words that can start a multi-word family name
    pub split_starters: AHashSet<CompactString>,
    pub irish_o: Vec<CompactString>,
    pub irish_vowels: Vec<CompactString>,
    /// Fold keys
    pub irish_post_bean: AHashSet<CompactString>,
    /// Literal native-script (Han, Hangul) family names
    pub native_family_names: AHashSet<CompactString>,
    /// Length in graphemes of the longest native family name, bounding prefix
    /// lookups
    pub longest_native_family_name: usize,
    /// Fold keys of romanized Chinese and Korean family names, minus any
    /// which are also split starters
    pub roman_family_names: AHashSet<CompactString>,
    /// Fold keys
    pub vietnamese_family_names: AHashSet<CompactString>,
    pub japanese_family_probabilities: AHashMap<CompactString, f64>,
}

impl Tables {
    pub fn builtin(folder: &Folder) -> Tables {
        let fold = |s: &&str| CompactString::from(folder.fold(s));

        let split_starters: AHashSet<CompactString> = SPLIT_STARTERS.iter().map(fold).collect();

        let native_family_names: AHashSet<CompactString> = CHINESE_FAMILY_NAMES
            .iter()
            .chain(KOREAN_FAMILY_NAMES.iter().filter(|n| has_hangul(n)))
            .map(|n| CompactString::from(*n))
            .collect();

        let roman_family_names = CK_ROMAN_FAMILY_NAMES
            .iter()
            .map(fold)
            .filter(|n| !split_starters.contains(n))
            .collect();

        let longest_native_family_name = longest(&native_family_names);

        Tables {
            irish_o: IRISH_O.iter().map(|s| CompactString::from(*s)).collect(),
            irish_vowels: IRISH_VOWELS.iter().map(|s| CompactString::from(*s)).collect(),
            irish_post_bean: IRISH_POST_BEAN.iter().map(fold).collect(),
            native_family_names,
            longest_native_family_name,
            roman_family_names,
            vietnamese_family_names: VIETNAMESE_FAMILY_NAMES.iter().map(fold).collect(),
            japanese_family_probabilities: JAPANESE_FAMILY_PROBABILITIES
                .entries()
                .map(|(k, v)| (CompactString::from(*k), *v))
                .collect(),
            split_starters,
        }
    }

    pub fn normalize<F>(&mut self, transform: &F)
    where
        F: Fn(&str) -> String,
    {
        remap_set(&mut self.split_starters, transform);
        remap_list(&mut self.irish_o, transform);
        remap_list(&mut self.irish_vowels, transform);
        remap_set(&mut self.irish_post_bean, transform);
        remap_set(&mut self.native_family_names, transform);
        self.longest_native_family_name = longest(&self.native_family_names);
        remap_set(&mut self.roman_family_names, transform);
        remap_set(&mut self.vietnamese_family_names, transform);
        self.japanese_family_probabilities = self
            .japanese_family_probabilities
            .drain()
            .map(|(k, v)| (CompactString::from(transform(&k)), v))
            .collect();
    }
}

fn longest(set: &AHashSet<CompactString>) -> usize {
    set.iter().map(|n| n.graphemes(true).count()).max().unwrap_or(0)
}

fn remap_set<F>(set: &mut AHashSet<CompactString>, transform: &F)
where
    F: Fn(&str) -> String,
{
    *set = set
        .drain()
        .map(|s| CompactString::from(transform(&s)))
        .collect();
}

fn remap_list<F>(list: &mut Vec<CompactString>, transform: &F)
where
    F: Fn(&str) -> String,
{
    for s in list.iter_mut() {
        *s = CompactString::from(transform(s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_are_folded() {
        let tables = Tables::builtin(&Folder::default());
        assert!(tables.split_starters.contains("de'"));
        assert!(tables.split_starters.contains("st."));
        assert!(tables.vietnamese_family_names.contains("nguyễn"));
        assert!(tables.roman_family_names.contains("xi"));
        assert!(tables.irish_post_bean.contains("uí"));
    }

    #[test]
    fn roman_names_exclude_split_starters() {
        let tables = Tables::builtin(&Folder::default());
        assert!(!tables.roman_family_names.contains("le"));
        assert!(!tables.roman_family_names.contains("san"));
    }

    #[test]
    fn native_names_skip_hanja() {
        let tables = Tables::builtin(&Folder::default());
        assert!(tables.native_family_names.contains("이"));
        assert!(tables.native_family_names.contains("남궁"));
        assert!(tables.native_family_names.contains("欧阳"));
        assert_eq!(2, tables.longest_native_family_name);
    }

    #[test]
    fn japanese_probabilities() {
        let tables = Tables::builtin(&Folder::default());
        assert_eq!(Some(&0.1658), tables.japanese_family_probabilities.get("一"));
        assert!(!tables.japanese_family_probabilities.contains_key("々"));
    }
}
