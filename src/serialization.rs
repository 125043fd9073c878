use crate::NameContext;
use serde::Serialize;

/// A split name, for serializing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NameParts {
    pub family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given: Option<String>,
}

impl NameParts {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl NameContext {
    /// Like `nameparts`, as a struct. `None` for empty input.
    ///
    /// ```
    /// use human_namecase::NameContext;
    ///
    /// let context = NameContext::new();
    /// let parts = context.split_parts("john de groot").unwrap();
    /// assert_eq!(r#"{"family":"de Groot","given":"John"}"#, parts.to_json());
    /// ```
    pub fn split_parts(&self, name: &str) -> Option<NameParts> {
        let mut parts = self.nameparts(name).into_iter();
        let family = parts.next()?;
        Some(NameParts {
            family,
            given: parts.next(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json() {
        let context = NameContext::new();
        assert_eq!(
            r#"{"family":"习","given":"近平"}"#,
            context.split_parts("习近平").unwrap().to_json()
        );
        assert_eq!(
            r#"{"family":"Smith"}"#,
            context.split_parts("SMITH").unwrap().to_json()
        );
        assert_eq!(None, context.split_parts(""));
    }
}
