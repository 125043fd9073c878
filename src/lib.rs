//! Fixes the capitalization of personal names, and works out which part of
//! a full name is the family name.
//!
//! Names from many cultures are handled: grammatical, aristocratic and
//! patronymic particles (de, van der, ibn, ap, ben, Ó...), Mc/Mac/Fitz
//! names, apostrophes in names like O'Brian and T'ang, Chinese, Korean and
//! Vietnamese family names (native script and romanized), and unspaced
//! Japanese names. Whatever the rules get wrong can be fixed with
//! exceptions.
//!
//! ```
//! use human_namecase::{namejoin, Mode, NameContext};
//!
//! let mut context = NameContext::new();
//! assert_eq!("Smith, John Peter", context.namesplit("JOHN PETER SMITH"));
//! assert_eq!("de Groot, John", context.namesplit("john de groot"));
//! assert_eq!("John MacDonald", context.namecase("JOHN MACDONALD", Mode::Full, None));
//!
//! context.namesplit_exception("Bryant Smith, Denise");
//! assert_eq!(
//!     vec!["Bryant Smith", "Denise"],
//!     context.nameparts("Denise Bryant Smith")
//! );
//!
//! assert_eq!(Some("Jintao Hu".to_string()), namejoin(Some("Hu"), Some("Jintao")));
//! assert_eq!(Some("林圭司".to_string()), namejoin(Some("林"), Some("圭司")));
//! ```
//!
//! Exception lookups compare text with case, apostrophe-like characters
//! and dash-like characters folded away, but not Unicode normalization.
//! Input in NFD needs the context's data in NFD too:
//!
//! ```
//! use human_namecase::{nfd, NameContext};
//!
//! let mut context = NameContext::new();
//! context.normalize(|s| nfd(s).into_owned());
//! assert_eq!(nfd("Ó hUiginn, Tadhg"), context.namesplit(&nfd("Ó HUIGINN, TADHG")));
//! ```

#![cfg_attr(feature = "bench", feature(test))]

#[cfg(feature = "bench")]
extern crate test;

mod case;
mod decomposition;
mod exceptions;
mod features;
mod fold;
mod japanese;
mod matcher;
mod namecase;
mod split;
mod tables;
mod trim;

#[cfg(feature = "ffi")]
pub mod external;

#[cfg(feature = "serialization")]
mod serialization;

use exceptions::ExceptionStore;
use fold::Folder;
use matcher::ExceptionMatcher;
use namecase::CaseRules;
use once_cell::sync::{Lazy, OnceCell};
use tables::Tables;
use tracing::debug;

pub use decomposition::{nfc, nfd};
pub use exceptions::ExceptionError;
pub use namecase::Mode;
pub use trim::nametrim;

#[cfg(feature = "serialization")]
pub use serialization::NameParts;

/// Name data and registered exceptions, which all case correction and
/// splitting is done against.
///
/// Registration and normalization need `&mut self`; everything else takes
/// `&self`, so a context can be shared between threads once it's set up.
#[derive(Clone, Debug)]
pub struct NameContext {
    folder: Folder,
    tables: Tables,
    exceptions: ExceptionStore,
    case_rules: CaseRules,
    family_matcher: OnceCell<ExceptionMatcher>,
}

impl Default for NameContext {
    fn default() -> Self {
        let folder = Folder::default();
        let tables = Tables::builtin(&folder);
        let exceptions = ExceptionStore::with_builtins(&folder);
        let case_rules = CaseRules::new(&folder, &tables);

        NameContext {
            folder,
            tables,
            exceptions,
            case_rules,
            family_matcher: OnceCell::new(),
        }
    }
}

impl NameContext {
    /// A context with only the built-in data
    pub fn new() -> NameContext {
        NameContext::default()
    }

    /// Forget all registered exceptions and any normalization.
    ///
    /// ```
    /// use human_namecase::{Mode, NameContext};
    ///
    /// let mut context = NameContext::new();
    /// context.namecase_exception("Macdonald");
    /// assert_eq!("Macdonald", context.namecase("MACDONALD", Mode::Full, None));
    ///
    /// context.reset();
    /// assert_eq!("MacDonald", context.namecase("MACDONALD", Mode::Full, None));
    /// ```
    pub fn reset(&mut self) {
        debug!("Resetting name context");
        *self = NameContext::new();
    }

    /// Incremented by every change to the registered exceptions
    pub fn version(&self) -> u64 {
        self.exceptions.version()
    }

    /// Apply `transform` (typically a Unicode normalization form) to every
    /// table entry and exception. Names passed in afterwards must be
    /// transformed the same way for exceptions and tables to match them.
    ///
    /// Transforms compose, so normalizing to NFD and then NFC leaves data
    /// in NFC.
    pub fn normalize<F>(&mut self, transform: F)
    where
        F: Fn(&str) -> String,
    {
        debug!(version = self.exceptions.version(), "Normalizing name data");
        self.folder.normalize(&transform);
        self.tables.normalize(&transform);
        self.exceptions.normalize(&transform);
        self.case_rules = CaseRules::new(&self.folder, &self.tables);
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.family_matcher.take();
    }

    fn family_matcher(&self) -> &ExceptionMatcher {
        let matcher = self.family_matcher.get_or_init(|| {
            ExceptionMatcher::new(self.exceptions.family(), self.exceptions.version())
        });
        debug_assert_eq!(matcher.version(), self.exceptions.version());
        matcher
    }
}

static DEFAULT_CONTEXT: Lazy<NameContext> = Lazy::new(NameContext::new);

/// Fix the capitalization of a full name, using only the built-in data.
///
/// ```
/// assert_eq!("Mary O'Brian", human_namecase::namecase("MARY O'BRIAN"));
/// ```
pub fn namecase(name: &str) -> String {
    DEFAULT_CONTEXT.namecase(name, Mode::Full, None)
}

/// Rewrite a full name as "Family, Given", using only the built-in data.
///
/// ```
/// assert_eq!("Ortega y Gasset, José", human_namecase::namesplit("José Ortega y Gasset"));
/// ```
pub fn namesplit(name: &str) -> String {
    DEFAULT_CONTEXT.namesplit(name)
}

/// Split a full name into family name and given names, using only the
/// built-in data.
pub fn nameparts(name: &str) -> Vec<String> {
    DEFAULT_CONTEXT.nameparts(name)
}

/// The key exceptions are looked up by: case folded, with apostrophe-like
/// characters replaced by `'` and dash-like characters by `-`.
///
/// ```
/// assert_eq!("marrier d'unienville", human_namecase::fold("MARRIER D’UNIENVILLE"));
/// ```
pub fn fold(text: &str) -> String {
    DEFAULT_CONTEXT.folder.fold(text)
}

/// Join family and given names in the conventional order for their
/// script: family name first with no space for Chinese, Japanese and
/// Korean, given names first otherwise.
///
/// ```
/// use human_namecase::namejoin;
///
/// assert_eq!(Some("John Smith".to_string()), namejoin(Some("Smith"), Some("John")));
/// assert_eq!(Some("习近平".to_string()), namejoin(Some("习"), Some("近平")));
/// assert_eq!(Some("Smith".to_string()), namejoin(Some("Smith"), None));
/// assert_eq!(None, namejoin(None, None));
/// ```
pub fn namejoin(family: Option<&str>, given: Option<&str>) -> Option<String> {
    match (family, given) {
        (Some(family), Some(given)) => {
            let joined = format!("{}{}", family, given);
            if features::is_cjk(&joined) {
                Some(joined)
            } else {
                Some(format!("{} {}", given, family))
            }
        }
        (Some(name), None) | (None, Some(name)) => Some(name.to_string()),
        (None, None) => None,
    }
}
