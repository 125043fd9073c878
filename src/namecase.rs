use crate::case::{lowercase_then_titlecase, titlecase_first};
use crate::features::{is_boundary, is_word_char};
use crate::fold::Folder;
use crate::tables::Tables;
use crate::trim::nametrim;
use crate::NameContext;
use once_cell::sync::Lazy;
use regex::{Captures, Match, Regex};
use tracing::trace;

/// Which part of a name is being case-corrected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// A full name, in either order
    #[default]
    Full,
    /// Given names only; family-name particles are left alone
    Given,
    /// A family name only
    Family,
}

// Particles which are lowercase in family names when followed by another
// word: Romance, Germanic, Scandinavian, Welsh, Arabic, Hebrew, Malay,
// Zulu and English. "de", "de la" and "de'" are handled separately because
// of the apostrophe class. Order matters: longer alternatives which share a
// prefix must come first.
const PARTICLES: &[&str] = &[
    "del",
    "dela",
    "dels",
    "della",
    "delle",
    "dal",
    "dalla",
    "degli",
    "di",
    "du",
    "da",
    "do",
    "dos",
    "das",
    "y",
    "i",
    "e",
    "von und zu",
    "von",
    "zu",
    "van het",
    "van",
    "der",
    "ter",
    "den",
    "tot",
    "af",
    "av",
    "til",
    "ap",
    "ab",
    "ferch",
    "verch",
    "ibn",
    "bin",
    "bint",
    "binti",
    "binte",
    "bat",
    "mibeit",
    "mimishpachat",
    "ka",
    "of",
];

static WORD_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w").unwrap());

static MC_FITZ: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(Mc|Fitz)(\w)").unwrap());

static LEADING_BEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^ben\s").unwrap());

static INNER_BEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\s)ben(\s)").unwrap());

static COMMA_VAN: Lazy<Regex> = Lazy::new(|| Regex::new(r", van\b").unwrap());

static LEADING_VAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^van\b").unwrap());

/// Patterns which depend on the (normalizable) apostrophe class and Irish
/// tables, compiled once per context.
#[derive(Clone, Debug)]
pub struct CaseRules {
    apostrophe_letter: Regex,
    particles: Regex,
    italian_elision: Regex,
    dutch_elision: Regex,
    irish_aspiration: Regex,
    hyphenated_particle: Regex,
    hebrew_conjunction: Regex,
    hebrew_marker: Regex,
}

impl CaseRules {
    pub fn new(folder: &Folder, tables: &Tables) -> CaseRules {
        let apostrophe = folder.apostrophe_class();
        let alternation = |items: &[compact_str::CompactString]| {
            items
                .iter()
                .map(|s| regex::escape(s))
                .collect::<Vec<_>>()
                .join("|")
        };

        let build = |pattern: String| {
            // Built from literals and escaped table entries
            Regex::new(&pattern).unwrap()
        };

        CaseRules {
            apostrophe_letter: build(format!(r"{}\w", apostrophe)),
            particles: build(format!(
                r"(?i)\b(d{a}|(?:de(?: la|{a})?|{p})\s)",
                a = apostrophe,
                p = PARTICLES.join("|")
            )),
            italian_elision: build(format!(r"(?i)\b(dall|dell)({})(\w)", apostrophe)),
            dutch_elision: build(format!(r"(?i)((?:^|\s){})([st])(\w)", apostrophe)),
            irish_aspiration: build(format!(
                r"(?i)\b((?:{}) )(h)({})",
                alternation(&tables.irish_o),
                alternation(&tables.irish_vowels)
            )),
            hyphenated_particle: build(r"(?i)\b(el|al|ut|ha)(\p{Pd})".to_string()),
            hebrew_conjunction: build(format!(r"(?i)\b(v)({})", apostrophe)),
            hebrew_marker: build(format!(
                r"(?i) v{}| ha\p{{Pd}}(?:Kohein|Levi|Rav)\b",
                apostrophe
            )),
        }
    }

    /// Whether the name has a Hebrew marker (v' or ha-Kohein and the like)
    /// that makes "ben" a patronymic rather than a given name
    pub fn is_hebrew_patronymic(&self, name: &str) -> bool {
        self.hebrew_marker.is_match(name)
    }
}

/// Rewrites each match of `re` for which `rewrite` gives a replacement.
/// The callback sees the whole text, for checks on what precedes a match.
fn rewrite_matches<F>(text: &str, re: &Regex, mut rewrite: F) -> String
where
    F: FnMut(&str, Match) -> Option<String>,
{
    let mut result = String::with_capacity(text.len());
    let mut copied = 0;
    for m in re.find_iter(text) {
        if let Some(replacement) = rewrite(text, m) {
            result.push_str(&text[copied..m.start()]);
            result.push_str(&replacement);
            copied = m.end();
        }
    }
    result.push_str(&text[copied..]);
    result
}

fn lowercase_first_group(caps: &Captures) -> String {
    format!("{}{}", caps[1].to_lowercase(), &caps[2])
}

fn lowercase_then_titlecase_groups(caps: &Captures) -> String {
    format!(
        "{}{}",
        &caps[1],
        lowercase_then_titlecase(&caps[2], &caps[3])
    )
}

impl NameContext {
    /// Fix the capitalization of a name.
    ///
    /// In `Mode::Family`, `given_names` lets individual case exceptions
    /// registered in "Family, Given" form apply; it is ignored otherwise.
    ///
    /// ```
    /// use human_namecase::{Mode, NameContext};
    ///
    /// let context = NameContext::new();
    /// assert_eq!("John Peter Smith", context.namecase("JOHN PETER SMITH", Mode::Full, None));
    /// assert_eq!("O'Brian, Sean", context.namecase("o'brian, sean", Mode::Full, None));
    /// assert_eq!("de Groot", context.namecase("DE GROOT", Mode::Family, None));
    /// assert_eq!("De Groot", context.namecase("DE GROOT", Mode::Given, None));
    /// ```
    pub fn namecase(&self, name: &str, mode: Mode, given_names: Option<&str>) -> String {
        let rules = &self.case_rules;

        let name = nametrim(name).to_lowercase();
        let name = WORD_START.replace_all(&name, |caps: &Captures| titlecase_first(&caps[0]));

        // Lowercase after apostrophes that follow two word characters, or a
        // word character after another apostrophe (Oso'ese, Sh'mu'el)
        let name = rewrite_matches(&name, &rules.apostrophe_letter, |text, m| {
            let mut before = text[..m.start()].chars().rev();
            match (before.next(), before.next()) {
                (Some(c1), Some(c2))
                    if is_word_char(c1) && (is_word_char(c2) || self.folder.is_apostrophe(c2)) =>
                {
                    Some(m.as_str().to_lowercase())
                }
                _ => None,
            }
        });

        // Lowercase after a single leading character other than O, D or V
        // (T'ang but not O'Brian, d'Iapico or v'Rachel)
        let name = rewrite_matches(&name, &rules.apostrophe_letter, |text, m| {
            let prefix = &text[..m.start()];
            match prefix.chars().next_back() {
                Some(c)
                    if !matches!(c, 'O' | 'D' | 'V')
                        && is_boundary(text, m.start() - c.len_utf8()) =>
                {
                    Some(m.as_str().to_lowercase())
                }
                _ => None,
            }
        });

        // "Mac" is left to the exceptions, since too many names only look
        // like they start with it
        let mut name = MC_FITZ
            .replace_all(&name, |caps: &Captures| {
                format!("{}{}", &caps[1], titlecase_first(&caps[2]))
            })
            .into_owned();

        if mode != Mode::Given {
            name = self.lowercase_particles(&name, mode);

            if mode == Mode::Full {
                if let Some(exception) = self.exceptions.individual(&self.folder.fold(&name)) {
                    trace!(name = name.as_str(), exception, "Individual case exception");
                    name = exception.to_string();
                }
            }

            if let (Mode::Family, Some(given_names)) = (mode, given_names) {
                let key = self
                    .folder
                    .fold(&format!("{}, {}", name, nametrim(given_names)));
                if let Some(exception) = self.exceptions.individual_family(&key) {
                    trace!(name = name.as_str(), exception, "Individual case exception");
                    name = exception.to_string();
                }
            }
        }

        // "Van" is also a Vietnamese given name, which comes after the comma
        // or at the start
        if mode == Mode::Full {
            let van = if name.contains(',') {
                COMMA_VAN.replace(&name, ", Van")
            } else {
                LEADING_VAN.replace(&name, "Van")
            };
            name = van.into_owned();
        }

        self.family_matcher()
            .replace_all(&name, &self.folder)
            .into_owned()
    }

    fn lowercase_particles(&self, name: &str, mode: Mode) -> String {
        let rules = &self.case_rules;

        let name = rules
            .particles
            .replace_all(name, |caps: &Captures| caps[0].to_lowercase());
        // dall'Agnese
        let name = rules
            .italian_elision
            .replace_all(&name, |caps: &Captures| {
                format!(
                    "{}{}{}",
                    caps[1].to_lowercase(),
                    &caps[2],
                    titlecase_first(&caps[3])
                )
            });
        // 'sGravesande
        let name = rules
            .dutch_elision
            .replace_all(&name, lowercase_then_titlecase_groups);
        // Ó hUiginn
        let name = rules
            .irish_aspiration
            .replace_all(&name, lowercase_then_titlecase_groups);
        // el- al- ut- ha-
        let name = rules
            .hyphenated_particle
            .replace_all(&name, lowercase_first_group);
        // v'Rachel
        let mut name = rules
            .hebrew_conjunction
            .replace_all(&name, lowercase_first_group)
            .into_owned();

        // "Ben" is a given name too, so it's only lowercased where it is
        // unambiguously part of the family name
        if mode == Mode::Family || name.contains(',') {
            name = LEADING_BEN
                .replace(&name, |caps: &Captures| caps[0].to_lowercase())
                .into_owned();
        }
        if rules.is_hebrew_patronymic(&name) {
            name = INNER_BEN.replace(&name, "${1}ben${2}").into_owned();
        }

        name
    }

    /// Fix the capitalization of given names. Equivalent to
    /// `namecase(given_names, Mode::Given, None)`.
    pub fn gnamecase(&self, given_names: &str) -> String {
        self.namecase(given_names, Mode::Given, None)
    }

    /// Fix the capitalization of a family name. Equivalent to
    /// `namecase(family_name, Mode::Family, given_names)`.
    pub fn fnamecase(&self, family_name: &str, given_names: Option<&str>) -> String {
        self.namecase(family_name, Mode::Family, given_names)
    }
}
