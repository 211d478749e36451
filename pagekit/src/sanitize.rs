//! Minimal denylist applied to flash message text.
//!
//! This is not a general sanitizer. It removes exactly three things:
//! - `<script>` elements together with their body
//! - `<img>` elements
//! - `<a>` tags, keeping the link text
//!
//! Every other tag passes through unchanged.

use lazy_static::lazy_static;
use regex::Regex;

/// Body of a tag up to its closing `>`; quoted attribute values may contain `>`.
/// An unbalanced quote falls back to ending at the first `>`.
const TAG_BODY: &str = r#"(?:"[^"]*"|'[^']*'|[^>])*?>"#;

lazy_static! {
    static ref SCRIPT_ELEMENT: Regex = Regex::new(&format!(r"(?is)<script\b{TAG_BODY}.*?</script\s*>"))
        .expect("script pattern is valid");
    // An opening tag left over after whole elements are gone has no end; drop the rest.
    static ref UNCLOSED_SCRIPT: Regex = Regex::new(r"(?is)<script\b.*\z").expect("unclosed script pattern is valid");
    static ref STRAY_SCRIPT_CLOSE: Regex = Regex::new(r"(?i)</script\s*>").expect("script close pattern is valid");
    static ref IMG_ELEMENT: Regex = Regex::new(&format!(r"(?is)<img\b{TAG_BODY}")).expect("img pattern is valid");
    static ref ANCHOR_TAG: Regex = Regex::new(&format!(r"(?is)</?a\b{TAG_BODY}")).expect("anchor pattern is valid");
}

/// Apply the denylist to `text`.
///
/// Removing one tag can splice its neighbours into a new one
/// (`<scr<img>ipt>`), so passes repeat until nothing changes.
///
/// ```
/// use pagekit::sanitize::sanitize_message;
///
/// assert_eq!(sanitize_message("hi<script>alert('XSS')</script>"), "hi");
/// assert_eq!(sanitize_message(r#"see <a href="/x">this page</a>"#), "see this page");
/// ```
pub fn sanitize_message(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = sanitize_pass(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

fn sanitize_pass(text: &str) -> String {
    let text = SCRIPT_ELEMENT.replace_all(text, "");
    let text = UNCLOSED_SCRIPT.replace_all(&text, "");
    let text = STRAY_SCRIPT_CLOSE.replace_all(&text, "");
    let text = IMG_ELEMENT.replace_all(&text, "");
    ANCHOR_TAG.replace_all(&text, "").into_owned()
}
