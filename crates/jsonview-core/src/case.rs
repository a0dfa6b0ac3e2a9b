//! Field-name casing.
//!
//! A name is split into words at three kinds of boundary:
//!
//! 1. lower-case letter followed by an upper-case letter (`fooBar`),
//! 2. upper-case letter followed by an upper-case letter that starts a
//!    capitalized word (`WRMLTest` splits into `WRML` and `Test`),
//! 3. `-` and `_`, which are dropped.
//!
//! The words are then re-joined under one of the [`FieldCase`] presets.

use std::fmt;
use std::str::FromStr;

/// The casing presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldCase {
    /// `SuperWrmlTest` style, acronyms kept: `SuperWRMLTest`.
    Camel,
    /// `superWRMLTest`.
    LowerCamel,
    /// `super_wrml_test`.
    Snake,
    /// `super-wrml-test`.
    Kebab,
    /// Same output as [`FieldCase::Kebab`].
    // TODO: decide whether Train-Case should capitalize each word
    // (`Super-Wrml-Test`); it currently matches kebab-case output.
    Train,
    /// `SUPER_WRML_TEST`.
    ScreamingSnake,
}

impl FieldCase {
    pub const ALL: [FieldCase; 6] = [
        FieldCase::Camel,
        FieldCase::LowerCamel,
        FieldCase::Snake,
        FieldCase::Kebab,
        FieldCase::Train,
        FieldCase::ScreamingSnake,
    ];

    /// Convert `name` to this casing.
    ///
    /// ```
    /// use jsonview_core::FieldCase;
    ///
    /// assert_eq!(FieldCase::Snake.apply("superWRMLTest-aaa"), "super_wrml_test_aaa");
    /// assert_eq!(FieldCase::Camel.apply("superWRMLTest-aaa"), "SuperWRMLTestAaa");
    /// ```
    pub fn apply(self, name: &str) -> String {
        match self {
            FieldCase::Camel => change_field_name_case(name, true, true, false, ""),
            FieldCase::LowerCamel => change_field_name_case(name, false, true, false, ""),
            FieldCase::Snake => change_field_name_case(name, false, false, false, "_"),
            FieldCase::Kebab | FieldCase::Train => {
                change_field_name_case(name, false, false, false, "-")
            }
            FieldCase::ScreamingSnake => change_field_name_case(name, false, false, true, "_"),
        }
    }

    /// The name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            FieldCase::Camel => "camel",
            FieldCase::LowerCamel => "lower-camel",
            FieldCase::Snake => "snake",
            FieldCase::Kebab => "kebab",
            FieldCase::Train => "train",
            FieldCase::ScreamingSnake => "screaming-snake",
        }
    }
}

impl fmt::Display for FieldCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|case| case.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|c| c.name()).collect();
                format!("unknown case '{s}', expected one of: {}", names.join(", "))
            })
    }
}

/// Re-case a field name.
///
/// Each word is capitalized when `camel` is set and lower-cased otherwise,
/// then the words are joined with `joiner`. The first character of the
/// result is upper-cased when `capitalize_first` is set and lower-cased
/// otherwise; finally the whole result is upper-cased when `all_upper` is set.
pub fn change_field_name_case(
    name: &str,
    capitalize_first: bool,
    camel: bool,
    all_upper: bool,
    joiner: &str,
) -> String {
    let joined = split_words(name)
        .into_iter()
        .map(|word| {
            if camel {
                capitalize(word)
            } else {
                word.to_lowercase()
            }
        })
        .collect::<Vec<_>>()
        .join(joiner);
    let cased = if capitalize_first {
        capitalize(&joined)
    } else {
        uncapitalize(&joined)
    };
    if all_upper {
        cased.to_uppercase()
    } else {
        cased
    }
}

/// Split a field name into words.
///
/// Separators produce empty words when doubled or leading (`a--b` gives
/// `a`, ``, `b`); trailing empty words are dropped.
fn split_words(name: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = name.char_indices().collect();
    let mut words = Vec::new();
    let mut start = 0;

    for (pos, &(offset, c)) in chars.iter().enumerate() {
        if c == '-' || c == '_' {
            words.push(&name[start..offset]);
            start = offset + c.len_utf8();
            continue;
        }
        let Some(&(_, prev)) = pos.checked_sub(1).and_then(|p| chars.get(p)) else {
            continue;
        };
        let next = chars.get(pos + 1).map(|&(_, n)| n);
        let lower_to_upper = prev.is_ascii_lowercase() && c.is_ascii_uppercase();
        let acronym_end = prev.is_ascii_uppercase()
            && c.is_ascii_uppercase()
            && next.is_some_and(|n| n.is_ascii_lowercase());
        if (lower_to_upper || acronym_end) && offset > start {
            words.push(&name[start..offset]);
            start = offset;
        }
    }
    words.push(&name[start..]);

    while words.last().is_some_and(|w| w.is_empty()) {
        words.pop();
    }
    words
}

fn capitalize(s: &str) -> String {
    change_first(s, |c| c.to_uppercase().collect())
}

fn uncapitalize(s: &str) -> String {
    change_first(s, |c| c.to_lowercase().collect())
}

fn change_first(s: &str, f: impl FnOnce(char) -> String) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => f(first) + chars.as_str(),
        None => String::new(),
    }
}
