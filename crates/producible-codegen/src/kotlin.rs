//! Kotlin naming utilities.
//!
//! Helpers for turning names read from class metadata into text that is
//! valid in generated Kotlin source.
//!
//! # Examples
//!
//! ```
//! use producible_codegen::kotlin;
//!
//! assert_eq!(kotlin::strip_escaping("com.example.`in`.Session"), "com.example.in.Session");
//! assert_eq!(kotlin::escape_identifier("object"), "`object`");
//! assert!(kotlin::is_identifier("userRepository"));
//! ```

use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Character Kotlin uses to quote identifiers that collide with keywords.
pub const ESCAPE_MARKER: char = '`';

/// Kotlin hard keywords; these need backticks when used as identifiers.
const HARD_KEYWORDS: &[&str] = &[
    "as",
    "break",
    "class",
    "continue",
    "do",
    "else",
    "false",
    "for",
    "fun",
    "if",
    "in",
    "interface",
    "is",
    "null",
    "object",
    "package",
    "return",
    "super",
    "this",
    "throw",
    "true",
    "try",
    "typealias",
    "typeof",
    "val",
    "var",
    "when",
    "while",
];

// Pre-compiled regexes (compiled once, reused)
static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}_][\p{L}\p{Nd}_]*$").expect("valid regex"));
static TYPE_REFERENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}_(][\p{L}\p{Nd}_.<>,?*() :\->]*$").expect("valid regex")
});

/// Removes identifier escaping introduced by the metadata reader.
///
/// Only backtick characters are removed; every other character, including
/// the quoted identifier itself, is preserved.
///
/// # Examples
///
/// ```
/// use producible_codegen::kotlin::strip_escaping;
///
/// assert_eq!(strip_escaping("`fun`.Handler"), "fun.Handler");
/// assert_eq!(strip_escaping("java.util.Calendar"), "java.util.Calendar");
/// ```
#[must_use]
pub fn strip_escaping(raw: &str) -> String {
    raw.replace(ESCAPE_MARKER, "")
}

/// Returns `true` if `word` is a Kotlin hard keyword.
///
/// # Examples
///
/// ```
/// use producible_codegen::kotlin::is_hard_keyword;
///
/// assert!(is_hard_keyword("in"));
/// assert!(!is_hard_keyword("value"));
/// ```
#[must_use]
pub fn is_hard_keyword(word: &str) -> bool {
    HARD_KEYWORDS.contains(&word)
}

/// Returns `true` if `name` is usable as a Kotlin identifier.
///
/// Keywords count as identifiers because they can be emitted escaped.
/// Names made only of underscores are reserved by Kotlin and rejected.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER_REGEX.is_match(name) && !name.chars().all(|c| c == '_')
}

/// Returns `true` if `type_name` looks like a Kotlin type reference.
///
/// Qualified names, type arguments, nullability, star projections and
/// function types are accepted. Braces, semicolons, quotes and line breaks are
/// not, and neither is anything that could close the parameter it is emitted
/// into: brackets must balance and `:` may only label function type
/// parameters.
///
/// # Examples
///
/// ```
/// use producible_codegen::kotlin::is_type_reference;
///
/// assert!(is_type_reference("kotlin.collections.List<kotlin.String>?"));
/// assert!(is_type_reference("(kotlin.Int) -> kotlin.Unit"));
/// assert!(!is_type_reference("Foo; fun evil()"));
/// assert!(!is_type_reference("kotlin.Int) : evil.Base("));
/// assert!(!is_type_reference(""));
/// ```
#[must_use]
pub fn is_type_reference(type_name: &str) -> bool {
    !type_name.trim().is_empty()
        && TYPE_REFERENCE_REGEX.is_match(type_name)
        && has_type_structure(type_name)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Checks the bracket and separator structure of a type reference.
///
/// `()` and `<>` nest, `<` follows a name, `(` never follows a name, `->`
/// only follows a parameter list, `:` sits directly inside parentheses and
/// two words are never separated by bare whitespace.
fn has_type_structure(type_name: &str) -> bool {
    let mut open = Vec::new();
    // Last non-whitespace character; `-` stands for a complete `->`.
    let mut prev: Option<char> = None;
    let mut spaced = false;
    let mut chars = type_name.chars();

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            spaced = true;
            continue;
        }

        let after_word = prev.is_some_and(is_word_char);
        match c {
            '(' => {
                if after_word || matches!(prev, Some(')' | '.' | '?' | '*' | '>')) {
                    return false;
                }
                open.push(c);
            }
            '<' => {
                if !after_word {
                    return false;
                }
                open.push(c);
            }
            ')' => {
                if open.pop() != Some('(') {
                    return false;
                }
            }
            '>' => {
                if open.pop() != Some('<') {
                    return false;
                }
            }
            '-' => {
                if prev != Some(')') || chars.next() != Some('>') {
                    return false;
                }
            }
            ':' => {
                if !after_word || open.last() != Some(&'(') {
                    return false;
                }
            }
            _ if is_word_char(c) => {
                if after_word && spaced {
                    return false;
                }
            }
            _ => {}
        }

        prev = Some(c);
        spaced = false;
    }

    open.is_empty()
        && prev.is_some_and(|c| is_word_char(c) || matches!(c, ')' | '>' | '?' | '*'))
}

/// Quotes `name` with backticks if it is a hard keyword.
#[must_use]
pub fn escape_identifier(name: &str) -> String {
    if is_hard_keyword(name) {
        format!("{ESCAPE_MARKER}{name}{ESCAPE_MARKER}")
    } else {
        name.to_string()
    }
}

/// Escapes every keyword segment of a dotted package name.
///
/// # Examples
///
/// ```
/// use producible_codegen::kotlin::escape_package;
///
/// assert_eq!(escape_package("com.example.in.app"), "com.example.`in`.app");
/// assert_eq!(escape_package(""), "");
/// ```
#[must_use]
pub fn escape_package(package: &str) -> String {
    package_segments(package)
        .map(escape_identifier)
        .collect::<Vec<_>>()
        .join(".")
}

/// Splits a package name into its segments.
///
/// The default package has no segments.
pub fn package_segments(package: &str) -> impl Iterator<Item = &str> {
    package.split('.').filter(|segment| !package.is_empty() || !segment.is_empty())
}

/// Converts a package name into the relative directory holding its sources.
///
/// # Examples
///
/// ```
/// use producible_codegen::kotlin::package_dir;
/// use std::path::PathBuf;
///
/// assert_eq!(package_dir("com.example.app"), PathBuf::from("com/example/app"));
/// assert_eq!(package_dir(""), PathBuf::new());
/// ```
#[must_use]
pub fn package_dir(package: &str) -> PathBuf {
    package_segments(package).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_escaping_removes_only_backticks() {
        assert_eq!(strip_escaping("`object`"), "object");
        assert_eq!(strip_escaping("a.`is`.B<`in`.C>"), "a.is.B<in.C>");
        assert_eq!(strip_escaping("Plain"), "Plain");
    }

    #[test]
    fn test_identifier_rules() {
        assert!(is_identifier("name"));
        assert!(is_identifier("_cache"));
        assert!(is_identifier("année"));
        assert!(is_identifier("object"));
        assert!(!is_identifier("1st"));
        assert!(!is_identifier("with space"));
        assert!(!is_identifier("dotted.name"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("__"));
    }

    #[test]
    fn test_escape_identifier() {
        assert_eq!(escape_identifier("in"), "`in`");
        assert_eq!(escape_identifier("when"), "`when`");
        assert_eq!(escape_identifier("value"), "value");
        // soft keywords stay bare
        assert_eq!(escape_identifier("data"), "data");
    }

    #[test]
    fn test_type_reference_rules() {
        assert!(is_type_reference("retrofit2.Retrofit"));
        assert!(is_type_reference("kotlin.collections.Map<kotlin.String, *>"));
        assert!(!is_type_reference("   "));
        assert!(!is_type_reference("Foo { }"));
        assert!(!is_type_reference("Foo\nBar"));
        assert!(!is_type_reference("\"quoted\""));
    }

    #[test]
    fn test_type_reference_function_types() {
        assert!(is_type_reference("() -> kotlin.Unit"));
        assert!(is_type_reference("((kotlin.Int) -> kotlin.Unit)?"));
        assert!(is_type_reference("(name: kotlin.String, kotlin.Int) -> kotlin.Boolean"));
        assert!(is_type_reference("(kotlin.Int) -> (kotlin.Int) -> kotlin.Unit"));
        assert!(is_type_reference(
            "kotlin.collections.Map<kotlin.String, kotlin.collections.List<kotlin.Int?>>"
        ));
    }

    #[test]
    fn test_type_reference_rejects_unbalanced_structure() {
        for broken in [
            "kotlin.Int) : evil.Base(",
            "kotlin.Int(",
            "kotlin.Int()",
            "kotlin.collections.List<kotlin.Int",
            "kotlin.Int>",
            "(kotlin.Int",
            "kotlin.Int: evil.Base",
            "(kotlin.collections.List<a: kotlin.Int>) -> kotlin.Unit",
            "kotlin.Int -> kotlin.Unit",
            "(kotlin.Int) ->",
            "(kotlin.Int) - kotlin.Unit",
            "kotlin.Int evil.Base",
            "kotlin.",
            "<kotlin.Int>",
        ] {
            assert!(!is_type_reference(broken), "accepted {broken:?}");
        }
    }

    #[test]
    fn test_package_segments() {
        assert_eq!(package_segments("").count(), 0);
        assert_eq!(
            package_segments("com.sxhardha.producibledemo").collect::<Vec<_>>(),
            vec!["com", "sxhardha", "producibledemo"]
        );
    }
}
