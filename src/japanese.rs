//! Splits unspaced Japanese names by estimating, character by character,
//! the probability that each kanji belongs to the family name.
//!
//! The approach and the probability data are from Lingua::JA::Name::Splitter
//! by Ben Bullock (https://github.com/benkasminbullock/Lingua-JA-Name-Splitter).

use crate::features::is_kana;
use ahash::AHashMap;
use compact_str::CompactString;
use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;

/// Weight given to position over the per-kanji data
const LENGTH_WEIGHT: f64 = 0.735;

const SPLIT_CUTOFF: f64 = 0.5;

/// Repeats the previous kanji (as in 佐々木)
const ITERATION_MARK: &str = "々";

/// Returns the byte offset where the given name starts, or `None` if the
/// name is a single character and can't be split.
pub fn split_point(name: &str, probabilities: &AHashMap<CompactString, f64>) -> Option<usize> {
    let graphemes: SmallVec<[(usize, &str); 8]> = name.grapheme_indices(true).collect();
    let length = graphemes.len();

    if length < 2 {
        return None;
    }

    // The first character is certainly part of the family name, and the
    // last certainly part of the given name
    let mut probability: SmallVec<[f64; 8]> = (0..length)
        .map(|i| 1.0 - i as f64 / (length - 1) as f64)
        .collect();

    for i in 1..length - 1 {
        let (offset, grapheme) = graphemes[i];

        if is_kana(grapheme) {
            probability[i] = 0.0;
        } else if let Some(p) = probabilities.get(grapheme) {
            probability[i] = LENGTH_WEIGHT * probability[i] + (1.0 - LENGTH_WEIGHT) * p;
        } else if grapheme == ITERATION_MARK {
            probability[i] = probability[i - 1];
        }

        if probability[i] < SPLIT_CUTOFF {
            return Some(offset);
        }
    }

    Some(graphemes[length - 1].0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fold::Folder;
    use crate::tables::Tables;

    fn split(name: &str) -> (&str, &str) {
        let tables = Tables::builtin(&Folder::default());
        match split_point(name, &tables.japanese_family_probabilities) {
            Some(i) => (&name[..i], &name[i..]),
            None => (name, ""),
        }
    }

    #[test]
    fn kanji() {
        assert_eq!(("佐藤", "明実"), split("佐藤明実"));
        assert_eq!(("鈴木", "大全"), split("鈴木大全"));
        assert_eq!(("林", "圭司"), split("林圭司"));
        assert_eq!(("長谷川", "光月"), split("長谷川光月"));
        assert_eq!(("佐佐木", "順平"), split("佐佐木順平"));
        assert_eq!(("原", "彩子"), split("原彩子"));
    }

    #[test]
    fn kana_starts_the_given_name() {
        assert_eq!(("佐藤", "あけみ"), split("佐藤あけみ"));
        assert_eq!(("佐张", "ケイ"), split("佐张ケイ"));
    }

    #[test]
    fn iteration_mark() {
        assert_eq!(("佐々木", "順平"), split("佐々木順平"));
    }

    #[test]
    fn short_names() {
        assert_eq!(("佐", ""), split("佐"));
        assert_eq!(("佐", "じ"), split("佐じ"));
        assert_eq!(("", ""), split(""));
    }
}
