use crate::features::is_cjk;
use crate::fold::Folder;
use crate::tables::builtin_family_exceptions;
use crate::trim::nametrim;
use crate::NameContext;
use ahash::AHashMap;
use compact_str::CompactString;
use thiserror::Error;
use tracing::debug;

/// Why an exception could not be registered.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExceptionError {
    /// Nothing left after trimming
    #[error("exception is empty")]
    Empty,

    /// Individual and split exceptions must be in "Family, Given" form
    #[error("exception {0:?} has no comma separating family and given names")]
    MissingComma(String),
}

type Map = AHashMap<CompactString, CompactString>;

/// User-registered exceptions, plus the built-in family-wide case
/// exceptions.
///
/// Keys are fold keys except for split exceptions written entirely in
/// CJK scripts, which have no case and are looked up literally.
#[derive(Clone, Debug)]
pub struct ExceptionStore {
    /// Fold key -> canonical family name
    family: Map,
    /// Fold keys of both "Family, Given" and "Given Family" -> "Family, Given"
    individual: Map,
    /// Fold key of "Family, Given" -> "Family"
    individual_family: Map,
    split_folded: Map,
    split_literal: Map,
    version: u64,
}

impl ExceptionStore {
    pub fn with_builtins(folder: &Folder) -> ExceptionStore {
        let family = builtin_family_exceptions()
            .map(|name| (CompactString::from(folder.fold(name)), CompactString::from(name)))
            .collect();

        ExceptionStore {
            family,
            individual: Map::default(),
            individual_family: Map::default(),
            split_folded: Map::default(),
            split_literal: Map::default(),
            version: 0,
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Family-wide exceptions as (fold key, canonical spelling)
    pub fn family(&self) -> impl Iterator<Item = (&str, &str)> {
        self.family.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn individual(&self, key: &str) -> Option<&str> {
        self.individual.get(key).map(CompactString::as_str)
    }

    pub fn individual_family(&self, key: &str) -> Option<&str> {
        self.individual_family.get(key).map(CompactString::as_str)
    }

    /// Looks up a split exception by literal text, then by fold key
    pub fn split(&self, literal: &str, key: &str) -> Option<&str> {
        self.split_literal
            .get(literal)
            .or_else(|| self.split_folded.get(key))
            .map(CompactString::as_str)
    }

    pub fn add_family(&mut self, folder: &Folder, text: &str) -> Result<(), ExceptionError> {
        let text = nametrim(text);
        if text.is_empty() {
            return Err(ExceptionError::Empty);
        }

        debug!(exception = text.as_str(), kind = "family", "Registered case exception");
        self.family.insert(folder.fold(&text).into(), text.into());
        self.version += 1;
        Ok(())
    }

    pub fn add_individual(&mut self, folder: &Folder, text: &str) -> Result<(), ExceptionError> {
        let text = nametrim(text);
        let (family, given) = family_and_given(&text)?;

        let full = CompactString::from(text.as_str());
        let key = CompactString::from(folder.fold(&text));
        let natural = folder.fold(&format!("{} {}", given, family));

        debug!(exception = text.as_str(), kind = "individual", "Registered case exception");
        self.individual_family.insert(key.clone(), family.into());
        self.individual.insert(natural.into(), full.clone());
        self.individual.insert(key, full);
        self.version += 1;
        Ok(())
    }

    pub fn add_split(&mut self, folder: &Folder, text: &str) -> Result<(), ExceptionError> {
        let text = nametrim(text);
        let (family, given) = family_and_given(&text)?;

        let joined = format!("{}{}", family, given);
        let full = CompactString::from(text.as_str());

        if is_cjk(&joined) {
            debug!(exception = text.as_str(), kind = "literal", "Registered split exception");
            self.split_literal.insert(joined.into(), full.clone());
            self.split_literal.insert(text.as_str().into(), full);
        } else {
            let natural = folder.fold(&format!("{} {}", given, family));
            debug!(exception = text.as_str(), kind = "folded", "Registered split exception");
            self.split_folded.insert(natural.into(), full.clone());
            self.split_folded.insert(folder.fold(&text).into(), full);
        }

        self.version += 1;
        Ok(())
    }

    pub fn normalize<F>(&mut self, transform: &F)
    where
        F: Fn(&str) -> String,
    {
        for map in [
            &mut self.family,
            &mut self.individual,
            &mut self.individual_family,
            &mut self.split_folded,
            &mut self.split_literal,
        ] {
            *map = map
                .drain()
                .map(|(k, v)| (transform(&k).into(), transform(&v).into()))
                .collect();
        }
        self.version += 1;
    }
}

/// Splits trimmed "Family, Given" text at the first comma
fn family_and_given(text: &str) -> Result<(&str, &str), ExceptionError> {
    if text.is_empty() {
        return Err(ExceptionError::Empty);
    }

    match text.split_once(',') {
        Some((family, given)) => Ok((family, given.trim_start())),
        None => Err(ExceptionError::MissingComma(text.to_string())),
    }
}

impl NameContext {
    /// Register a case exception.
    ///
    /// Text in "Family, Given" form is an individual exception, which only
    /// applies to that exact person; anything else is a family-wide
    /// exception, which applies wherever the name appears as a whole word.
    ///
    /// ```
    /// use human_namecase::{Mode, NameContext};
    ///
    /// let mut context = NameContext::new();
    /// assert!(context.namecase_exception("DiFrancesco, John"));
    /// assert_eq!("DiFrancesco", context.fnamecase("DIFRANCESCO", Some("John")));
    /// assert_eq!("Difrancesco", context.fnamecase("DIFRANCESCO", Some("Jane")));
    ///
    /// assert!(context.namecase_exception("DiFrancesco"));
    /// assert_eq!("DiFrancesco", context.fnamecase("DIFRANCESCO", Some("Jane")));
    /// assert_eq!(
    ///     "Jane DiFrancesco",
    ///     context.namecase("JANE DIFRANCESCO", Mode::Full, None)
    /// );
    ///
    /// assert!(!context.namecase_exception("  "));
    /// ```
    pub fn namecase_exception(&mut self, text: &str) -> bool {
        let result = if text.contains(',') {
            self.add_individual_exception(text)
        } else {
            self.add_family_exception(text)
        };
        result.is_ok()
    }

    /// Register a family-wide case exception, such as "DiFrancesco"
    pub fn add_family_exception(&mut self, text: &str) -> Result<(), ExceptionError> {
        self.exceptions.add_family(&self.folder, text)?;
        self.invalidate();
        Ok(())
    }

    /// Register an individual case exception, such as "DiFrancesco, John"
    pub fn add_individual_exception(&mut self, text: &str) -> Result<(), ExceptionError> {
        self.exceptions.add_individual(&self.folder, text)?;
        self.invalidate();
        Ok(())
    }

    /// Register a split exception, such as "Bryant Smith, Denise", which
    /// `namesplit` returns verbatim for either name order.
    ///
    /// ```
    /// use human_namecase::NameContext;
    ///
    /// let mut context = NameContext::new();
    /// assert_eq!("Smith, Denise Bryant", context.namesplit("Denise Bryant Smith"));
    ///
    /// assert!(context.namesplit_exception("Bryant Smith, Denise"));
    /// assert_eq!("Bryant Smith, Denise", context.namesplit("DENISE BRYANT SMITH"));
    /// assert_eq!("Bryant Smith, Denise", context.namesplit("bryant smith, denise"));
    ///
    /// assert!(!context.namesplit_exception("Bryant Smith Denise"));
    /// ```
    pub fn namesplit_exception(&mut self, text: &str) -> bool {
        self.add_split_exception(text).is_ok()
    }

    pub fn add_split_exception(&mut self, text: &str) -> Result<(), ExceptionError> {
        self.exceptions.add_split(&self.folder, text)?;
        self.invalidate();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_exceptions() {
        let folder = Folder::default();
        let mut store = ExceptionStore::with_builtins(&folder);
        assert!(store.family().any(|(k, v)| k == "macalister" && v == "MacAlister"));

        assert_eq!(Ok(()), store.add_family(&folder, " DiBona "));
        assert!(store.family().any(|(k, v)| k == "dibona" && v == "DiBona"));
        assert_eq!(1, store.version());

        assert_eq!(Err(ExceptionError::Empty), store.add_family(&folder, " \t"));
        assert_eq!(1, store.version());
    }

    #[test]
    fn individual_exceptions() {
        let folder = Folder::default();
        let mut store = ExceptionStore::with_builtins(&folder);

        assert_eq!(
            Ok(()),
            store.add_individual(&folder, "Marrier D’Unienville ,Jean")
        );
        assert_eq!(
            Some("Marrier D’Unienville, Jean"),
            store.individual("marrier d'unienville, jean")
        );
        assert_eq!(
            Some("Marrier D’Unienville, Jean"),
            store.individual("jean marrier d'unienville")
        );
        assert_eq!(
            Some("Marrier D’Unienville"),
            store.individual_family("marrier d'unienville, jean")
        );
        assert_eq!(None, store.individual("marrier d'unienville"));

        assert_eq!(
            Err(ExceptionError::MissingComma("DiBona John".to_string())),
            store.add_individual(&folder, "DiBona John")
        );
    }

    #[test]
    fn split_exceptions() {
        let folder = Folder::default();
        let mut store = ExceptionStore::with_builtins(&folder);

        assert_eq!(Ok(()), store.add_split(&folder, "Bryant Smith, Denise"));
        assert_eq!(
            Some("Bryant Smith, Denise"),
            store.split("DENISE BRYANT SMITH", "denise bryant smith")
        );
        assert_eq!(
            Some("Bryant Smith, Denise"),
            store.split("Bryant Smith, Denise", "bryant smith, denise")
        );

        assert_eq!(Ok(()), store.add_split(&folder, "习近, 平"));
        assert_eq!(Some("习近, 平"), store.split("习近平", "习近平"));
        assert_eq!(Some("习近, 平"), store.split("习近, 平", "习近, 平"));

        assert_eq!(Err(ExceptionError::Empty), store.add_split(&folder, ""));
        assert_eq!(
            Err(ExceptionError::MissingComma("习近平".to_string())),
            store.add_split(&folder, "习近平")
        );
    }

    #[test]
    fn normalize_rewrites_keys_and_values() {
        let folder = Folder::default();
        let mut store = ExceptionStore::with_builtins(&folder);
        store.add_split(&folder, "Smith, Jane").unwrap();
        let version = store.version();

        store.normalize(&|s: &str| s.to_uppercase());
        assert_eq!(Some("SMITH, JANE"), store.split("", "JANE SMITH"));
        assert_eq!(None, store.split("", "jane smith"));
        assert!(store.version() > version);
    }
}
