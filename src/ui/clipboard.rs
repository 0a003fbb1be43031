//! OSC 52 clipboard escape sequences.
//!
//! Terminals that support OSC 52 place the decoded payload on the system
//! clipboard, which reaches the host even from inside the plugin sandbox.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Builds the escape sequence that asks the terminal to copy `text`.
///
/// # Example
///
/// ```rust
/// use blognest::ui::clipboard::osc52_sequence;
///
/// assert_eq!(osc52_sequence("hi"), "\u{1b}]52;c;aGk=\u{7}");
/// ```
#[must_use]
pub fn osc52_sequence(text: &str) -> String {
    format!("\u{1b}]52;c;{}\u{7}", STANDARD.encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_share_link() {
        let sequence = osc52_sequence("http://localhost:3000/blog/1");
        let payload = sequence
            .strip_prefix("\u{1b}]52;c;")
            .and_then(|rest| rest.strip_suffix('\u{7}'))
            .unwrap();
        assert_eq!(STANDARD.decode(payload).unwrap(), b"http://localhost:3000/blog/1");
    }
}
