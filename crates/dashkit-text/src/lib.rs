//! Positional template formatting.
//!
//! Dashboard asset paths and notice strings are stored as templates with
//! numbered placeholders (`"/static/img/MapMarkers/{0}_{1}.png"`); this
//! crate substitutes positional arguments into them.

use std::fmt::Display;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(\d+)\}").unwrap());

/// Positional `{n}` substitution over template strings.
pub trait PositionalFormat {
    /// Replace every `{n}` placeholder with the n-th argument.
    ///
    /// Placeholders whose index has no matching argument are left
    /// verbatim, so a template can be partially applied without error.
    /// Braced text that is not a non-negative integer is not a
    /// placeholder and passes through untouched.
    fn format_positional(&self, args: &[&dyn Display]) -> String;
}

impl PositionalFormat for str {
    fn format_positional(&self, args: &[&dyn Display]) -> String {
        PLACEHOLDER_REGEX
            .replace_all(self, |caps: &Captures<'_>| {
                // Indices too large for usize fall back to verbatim, same
                // as any other out-of-range placeholder.
                let index: usize = match caps[1].parse() {
                    Ok(index) => index,
                    Err(_) => return caps[0].to_string(),
                };
                match args.get(index) {
                    Some(arg) => arg.to_string(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::PositionalFormat;

    #[test]
    fn test_substitutes_in_order() {
        assert_eq!("{0}-{1}".format_positional(&[&"a", &"b"]), "a-b");
    }

    #[test]
    fn test_out_of_range_left_verbatim() {
        assert_eq!("{2}".format_positional(&[&"a"]), "{2}");
    }

    #[test]
    fn test_no_args_leaves_template() {
        assert_eq!("{0}".format_positional(&[]), "{0}");
    }

    #[test]
    fn test_repeated_placeholder() {
        assert_eq!("{0}{0}".format_positional(&[&1]), "11");
    }

    #[test]
    fn test_surrounding_text_preserved() {
        assert_eq!(
            "machine {0} at {1}%".format_positional(&[&7, &42]),
            "machine 7 at 42%"
        );
    }

    #[test]
    fn test_non_numeric_braces_untouched() {
        assert_eq!("{foo} {0}".format_positional(&[&"x"]), "{foo} x");
    }

    #[test]
    fn test_mixed_display_types() {
        assert_eq!(
            "/static/img/MapMarkers/{0}_{1}.png".format_positional(&[&"blue", &32]),
            "/static/img/MapMarkers/blue_32.png"
        );
    }
}
