//! Terminal control-sequence stripping for captured process output.

use std::sync::LazyLock;

use regex::Regex;

// ESC followed by a single final byte (@-Z, \, ], ^, _), or the CSI form:
// ESC [ , parameter bytes 0x30-0x3F, intermediate bytes 0x20-0x2F, one
// final byte 0x40-0x7E.
static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b(?:[@-Z\\-_]|\[[0-?]*[ -/]*[@-~])").expect("valid regex"));

/// Removes ANSI/VT escape sequences (colors, cursor movement) from text.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    ANSI_RE.replace_all(text, "").into_owned()
}

/// Cleans captured stderr for display: trims, strips escape sequences,
/// and substitutes `"Unknown error"` when nothing readable remains.
#[must_use]
pub fn clean_stderr(raw: &str) -> String {
    let cleaned = strip_ansi(raw.trim());
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        "Unknown error".to_string()
    } else {
        cleaned.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- strip_ansi ---

    #[test]
    fn strips_color_codes() {
        assert_eq!(
            strip_ansi("\x1b[31mError\x1b[0m: not found"),
            "Error: not found"
        );
    }

    #[test]
    fn strips_csi_with_parameters_and_intermediates() {
        assert_eq!(strip_ansi("\x1b[1;38;5;196mbold red\x1b[0m"), "bold red");
        // Intermediate bytes (0x20-0x2F) before the final byte.
        assert_eq!(strip_ansi("a\x1b[0 qb"), "ab");
    }

    #[test]
    fn strips_two_byte_escape() {
        // ESC followed directly by a final byte, e.g. ESC c (full reset).
        assert_eq!(strip_ansi("\x1bM^up\x1b\\done"), "^updone");
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(strip_ansi("nothing to see here"), "nothing to see here");
    }

    #[test]
    fn empty_input() {
        assert_eq!(strip_ansi(""), "");
    }

    // --- clean_stderr ---

    #[test]
    fn clean_trims_and_strips() {
        assert_eq!(
            clean_stderr("  \x1b[31mE: Unable to locate package\x1b[0m \n"),
            "E: Unable to locate package"
        );
    }

    #[test]
    fn clean_empty_becomes_unknown() {
        assert_eq!(clean_stderr(""), "Unknown error");
        assert_eq!(clean_stderr("   \n "), "Unknown error");
    }

    #[test]
    fn clean_only_escape_codes_becomes_unknown() {
        assert_eq!(clean_stderr("\x1b[31m\x1b[0m"), "Unknown error");
    }
}
