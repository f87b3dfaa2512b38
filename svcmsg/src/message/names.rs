//! Placeholder name canonicalisation.
//!
//! Call sites name their arguments however the host language allows
//! (`_arg`, `user-name`, `1st`). Templates need names that fit the `{$name}`
//! syntax and never collide with each other or with reserved option names.
//! [`PlaceholderNamer`] performs that mapping; the same namer output must be
//! used for both the template text and the argument map.

use std::collections::BTreeSet;

/// Names claimed by the message options object; placeholders never use them.
pub const RESERVED_NAMES: [&str; 4] = ["html", "unescapeHtmlEntities", "example", "original_code"];

const FALLBACK_NAME: &str = "arg";

/// Assigns unique, syntax-safe placeholder names.
///
/// Names are derived from the natural call-site name. When the derived name
/// is reserved or already assigned, the first free `name_1`, `name_2`, …
/// variant is used instead.
///
/// # Examples
///
/// ```rust
/// use svcmsg::PlaceholderNamer;
///
/// let mut namer = PlaceholderNamer::new();
/// assert_eq!(namer.assign("_arg"), "arg");
/// assert_eq!(namer.assign("_arg1"), "arg1");
/// assert_eq!(namer.assign("arg"), "arg_1");
/// assert_eq!(namer.assign("html"), "html_1");
/// ```
#[derive(Debug, Default, Clone)]
pub struct PlaceholderNamer {
    assigned: BTreeSet<String>,
}

impl PlaceholderNamer {
    /// Creates a namer with no names assigned.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            assigned: BTreeSet::new(),
        }
    }

    /// Assigns the canonical name for `natural`.
    pub fn assign(&mut self, natural: &str) -> String {
        let base = surface_name(natural);
        let mut candidate = base.clone();
        let mut index = 0_usize;
        while self.is_taken(&candidate) {
            index += 1;
            candidate = format!("{base}_{index}");
        }
        self.assigned.insert(candidate.clone());
        candidate
    }

    /// Reports whether `name` has already been handed out.
    #[must_use]
    pub fn is_assigned(&self, name: &str) -> bool {
        self.assigned.contains(name)
    }

    fn is_taken(&self, candidate: &str) -> bool {
        RESERVED_NAMES.contains(&candidate) || self.assigned.contains(candidate)
    }
}

/// Canonicalises a sequence of natural names with a fresh
/// [`PlaceholderNamer`], preserving order.
///
/// # Examples
///
/// ```rust
/// use svcmsg::canonicalize_names;
///
/// let names = canonicalize_names(["_arg", "_arg1", "_arg2"]);
/// assert_eq!(names, ["arg", "arg1", "arg2"]);
/// ```
#[must_use]
pub fn canonicalize_names<'a, I>(naturals: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut namer = PlaceholderNamer::new();
    naturals
        .into_iter()
        .map(|natural| namer.assign(natural))
        .collect()
}

/// Returns `true` when `name` can appear between `{$` and `}`.
pub(crate) fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

fn surface_name(natural: &str) -> String {
    let mut name: String = natural
        .trim_start_matches('_')
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect();
    if name.is_empty() {
        return String::from(FALLBACK_NAME);
    }
    if name.starts_with(|ch: char| ch.is_ascii_digit()) {
        name.insert_str(0, "arg_");
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("arg", "arg")]
    #[case("_arg", "arg")]
    #[case("__var1", "var1")]
    #[case("user-name", "user_name")]
    #[case("caf\u{e9}", "caf_")]
    #[case("1st", "arg_1st")]
    #[case("", "arg")]
    #[case("___", "arg")]
    fn derives_surface_names(#[case] natural: &str, #[case] expected: &str) {
        let mut namer = PlaceholderNamer::new();
        assert_eq!(namer.assign(natural), expected);
    }

    #[rstest]
    fn collisions_get_index_suffixes() {
        let names = canonicalize_names(["arg", "_arg", "arg", "arg_1"]);
        assert_eq!(names, ["arg", "arg_1", "arg_2", "arg_1_1"]);
    }

    #[rstest]
    #[case("html", "html_1")]
    #[case("example", "example_1")]
    #[case("_original_code", "original_code_1")]
    #[case("unescapeHtmlEntities", "unescapeHtmlEntities_1")]
    #[case("escape_mode", "escape_mode")]
    fn reserved_names_are_avoided(#[case] natural: &str, #[case] expected: &str) {
        let mut namer = PlaceholderNamer::new();
        assert_eq!(namer.assign(natural), expected);
    }

    #[rstest]
    fn assignment_is_deterministic() {
        let naturals = ["_arg", "_arg1", "arg", "html", "x"];
        assert_eq!(canonicalize_names(naturals), canonicalize_names(naturals));
    }

    #[rstest]
    fn assigned_names_are_valid_placeholders() {
        for name in canonicalize_names(["", "9", "-", "a b", "_", "html", "\u{3b1}"]) {
            assert!(is_valid_name(&name), "{name} should be a valid name");
        }
    }

    #[rstest]
    #[case("arg", true)]
    #[case("_x9", true)]
    #[case("", false)]
    #[case("9x", false)]
    #[case("a b", false)]
    #[case("a.b", false)]
    fn validates_placeholder_names(#[case] name: &str, #[case] valid: bool) {
        assert_eq!(is_valid_name(name), valid);
    }
}
