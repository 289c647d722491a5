//! Validated storage keys.

use std::fmt;

use camino::{Utf8Component, Utf8Path};

use crate::error::KeyValidationError;

/// Name under which one value is stored.
///
/// ## Invariants
/// - Non-empty and free of surrounding whitespace.
/// - Exactly one normal path component, so a key can never address a file
///   outside the store directory.
///
/// # Examples
/// ```
/// use keyed_store::StoreKey;
///
/// let key = StoreKey::new("sdu_meow_campus").expect("valid key");
/// assert_eq!(key.as_str(), "sdu_meow_campus");
/// assert!(StoreKey::new("nested/key").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoreKey(String);

impl StoreKey {
    /// Validate and wrap a key.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValidationError`] when the key is blank, padded, or not a
    /// plain file name.
    pub fn new(value: impl Into<String>) -> Result<Self, KeyValidationError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(KeyValidationError::Empty);
        }
        if raw.trim() != raw {
            return Err(KeyValidationError::SurroundingWhitespace);
        }

        let mut components = Utf8Path::new(&raw).components();
        match (components.next(), components.next()) {
            (Some(Utf8Component::Normal(name)), None) if name == raw => Ok(Self(raw)),
            _ => Err(KeyValidationError::NotAFileName { key: raw }),
        }
    }

    /// Borrow the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for StoreKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", KeyValidationError::Empty)]
    #[case("   ", KeyValidationError::Empty)]
    #[case(" padded", KeyValidationError::SurroundingWhitespace)]
    #[case("a/b", KeyValidationError::NotAFileName { key: "a/b".to_owned() })]
    #[case("..", KeyValidationError::NotAFileName { key: "..".to_owned() })]
    #[case("/abs", KeyValidationError::NotAFileName { key: "/abs".to_owned() })]
    fn rejects_unusable_keys(#[case] raw: &str, #[case] expected: KeyValidationError) {
        assert_eq!(StoreKey::new(raw), Err(expected));
    }

    #[rstest]
    #[case("sdu_meow_auth")]
    #[case("settings.json")]
    fn accepts_plain_file_names(#[case] raw: &str) {
        let key = StoreKey::new(raw).expect("plain names are valid");
        assert_eq!(key.to_string(), raw);
    }
}
