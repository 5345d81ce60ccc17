//! Identifier casing for namespace keys.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// `-` followed by a lowercase ASCII letter.
static HYPHEN_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-([a-z])").expect("valid hyphen pattern"));

/// Convert a hyphenated segment into a camel-cased key.
///
/// Each `-x` (hyphen + lowercase letter) becomes `X`. Hyphens not followed by
/// a lowercase letter are kept. Borrows when there is nothing to replace.
///
/// # Examples
///
/// - `camelize("string-utils")` -> `"stringUtils"`
/// - `camelize("alreadyThere")` -> `"alreadyThere"`
/// - `camelize("v-2")` -> `"v-2"`
pub fn camelize(name: &str) -> Cow<'_, str> {
    HYPHEN_LETTER.replace_all(name, |caps: &Captures<'_>| caps[1].to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camelize_kebab_case() {
        assert_eq!(camelize("hello-world"), "helloWorld");
        assert_eq!(camelize("some-long-name"), "someLongName");
        assert_eq!(camelize("string-utils"), "stringUtils");
    }

    #[test]
    fn test_camelize_passthrough() {
        assert_eq!(camelize("hello"), "hello");
        assert_eq!(camelize("alreadyThere"), "alreadyThere");
        assert_eq!(camelize(""), "");
        assert!(matches!(camelize("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_camelize_only_lowercase_letters() {
        assert_eq!(camelize("api-v-2"), "apiV-2");
        assert_eq!(camelize("x-Y"), "x-Y");
        assert_eq!(camelize("trailing-"), "trailing-");
    }
}
