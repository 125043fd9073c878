/// Titlecase mapping of `c`, one to three chars. Empty where the data
/// has no mapping, meaning the char maps to itself.
fn titlecase(c: char) -> impl Iterator<Item = char> {
    IntoIterator::into_iter(unicode_case_mapping::to_titlecase(c))
        .take_while(|&x| x != 0)
        .filter_map(char::from_u32)
}

/// Titlecase (not uppercase) the first character and leave the rest
/// alone, so that digraphs like "ǆ" become "ǅ" rather than "Ǆ".
pub fn titlecase_first(word: &str) -> String {
    let mut chars = word.chars();
    let mut result = String::with_capacity(word.len());

    if let Some(c) = chars.next() {
        let len = result.len();
        result.extend(titlecase(c));
        if result.len() == len {
            result.push(c);
        }
    }

    result.push_str(chars.as_str());
    result
}

/// Lowercase the first character and titlecase the second, leaving the
/// rest alone ("'S" + "g" and similar elisions)
pub fn lowercase_then_titlecase(first: &str, second: &str) -> String {
    let mut result = first.to_lowercase();
    result.push_str(&titlecase_first(second));
    result
}
