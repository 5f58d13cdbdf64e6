use regex::{Captures, Regex};
use std::sync::LazyLock;

static WORD_PARTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<lead>^\w|\b\w)|(?P<inner>[A-Z])|(?P<gap>\s+)").expect("word pattern compiles")
});

/// Convert a feature name into PascalCase for generated identifiers.
///
/// Word starts are uppercased, uppercase letters inside a word are lowercased
/// and whitespace is dropped. Everything else passes through untouched, so
/// `"user-profile"` becomes `"User-Profile"` and `"myFeature"` becomes
/// `"Myfeature"`.
pub fn to_pascal_case(input: &str) -> String {
    WORD_PARTS
        .replace_all(input, |caps: &Captures| {
            if let Some(lead) = caps.name("lead") {
                lead.as_str().to_uppercase()
            } else if let Some(inner) = caps.name("inner") {
                inner.as_str().to_lowercase()
            } else {
                String::new()
            }
        })
        .into_owned()
}
