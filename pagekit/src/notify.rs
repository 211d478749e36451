//! Flash message banners.
//!
//! Each pending message becomes one dismissible Bootstrap-style alert:
//!
//! ```html
//! <div class="alert alert-info fade in"><button type="button" class="close" data-dismiss="alert">x</button>Saved.</div>
//! ```
//!
//! `alert-danger` targets Bootstrap 3 and `alert-error` Bootstrap 2, so error
//! categories carry both.

use log::debug;

use crate::flash::FlashMessages;
use crate::html::{SafeHtml, escape_html};
use crate::sanitize::sanitize_message;

/// Category set by session timeout handling; never shown to the user.
pub const RESERVED_CATEGORY: &str = "timedout";
pub const DEFAULT_BUTTON_CONTENT: &str = "x";
pub const DEFAULT_BUTTON_CLASS: &str = "close";

/// Close button customisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationOptions {
    /// Button label; an empty string renders an empty button.
    pub button_content: String,
    pub button_class: String,
}

impl Default for NotificationOptions {
    fn default() -> Self {
        Self {
            button_content: DEFAULT_BUTTON_CONTENT.to_string(),
            button_class: DEFAULT_BUTTON_CLASS.to_string(),
        }
    }
}

impl NotificationOptions {
    pub fn with_button_content(mut self, content: impl Into<String>) -> Self {
        self.button_content = content.into();
        self
    }

    pub fn with_button_class(mut self, class: impl Into<String>) -> Self {
        self.button_class = class.into();
        self
    }
}

/// CSS class suffix for a message category; unknown categories pass through.
pub fn alert_class(category: &str) -> &str {
    match category {
        "success" => "success",
        "notice" => "info",
        "error" | "alert" => "danger alert-error",
        other => other,
    }
}

/// Render every displayable message as a banner, in insertion order.
///
/// Reserved and blank messages are skipped. The result is empty when nothing
/// qualifies.
pub fn render_notifications(messages: &FlashMessages, options: &NotificationOptions) -> SafeHtml {
    let banners = messages
        .iter()
        .filter(|(category, text)| {
            if *category == RESERVED_CATEGORY {
                debug!("skipping reserved flash category '{RESERVED_CATEGORY}'");
                return false;
            }
            !text.trim().is_empty()
        })
        .map(|(category, text)| render_banner(category, text, options))
        .collect::<Vec<_>>();

    SafeHtml::from_trusted(banners.join("\n"))
}

fn render_banner(category: &str, text: &str, options: &NotificationOptions) -> String {
    format!(
        r#"<div class="alert alert-{class} fade in"><button type="button" class="{button_class}" data-dismiss="alert">{button_content}</button>{body}</div>"#,
        class = escape_html(alert_class(category)),
        button_class = escape_html(&options.button_class),
        button_content = escape_html(&options.button_content),
        body = sanitize_message(text),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_one(category: &str, text: &str) -> String {
        let messages: FlashMessages = [(category, text)].into_iter().collect();
        render_notifications(&messages, &NotificationOptions::default()).into_string()
    }

    #[test]
    fn category_table() {
        let cases = [
            (":success", "alert alert-success"),
            ("success", "alert alert-success"),
            (":notice", "alert alert-info"),
            ("notice", "alert alert-info"),
            (":error", "alert alert-danger alert-error"),
            ("error", "alert alert-danger alert-error"),
            (":alert", "alert alert-danger alert-error"),
            ("alert", "alert alert-danger alert-error"),
            (":custom", "alert alert-custom"),
            ("custom", "alert alert-custom"),
        ];
        for (category, expected) in cases {
            let html = render_one(category, &format!("flash is {category}"));
            assert!(html.contains(expected), "{category}: {html}");
            assert!(html.contains(&format!("flash is {category}")), "{category}: {html}");
        }
    }

    #[test]
    fn banner_markup() {
        assert_eq!(
            render_one("notice", "Saved."),
            r#"<div class="alert alert-info fade in"><button type="button" class="close" data-dismiss="alert">x</button>Saved.</div>"#
        );
    }

    #[test]
    fn button_overrides() {
        let messages: FlashMessages = [("alert", "not important")].into_iter().collect();

        let empty = render_notifications(&messages, &NotificationOptions::default().with_button_content(""));
        assert!(empty.as_str().contains(r#"button type="button" class="close""#));
        assert!(empty.as_str().contains(r#""alert"></button>"#));

        let classed = render_notifications(&messages, &NotificationOptions::default().with_button_class("abc def"));
        assert!(classed.as_str().contains(r#"button type="button" class="abc def""#));
        assert!(classed.as_str().contains(">x</button>"));
    }

    #[test]
    fn reserved_category_is_never_rendered() {
        assert_eq!(render_one("timedout", "not important"), "");
        assert_eq!(render_one(":timedout", "not important"), "");
    }

    #[test]
    fn blank_messages_are_skipped() {
        assert_eq!(render_one("notice", "   "), "");
    }

    #[test]
    fn empty_store_renders_empty_safe_html() {
        let html = render_notifications(&FlashMessages::new(), &NotificationOptions::default());
        assert!(html.is_empty());
    }

    #[test]
    fn banners_follow_insertion_order() {
        let messages: FlashMessages = [("success", "one"), ("timedout", "skip"), ("error", "two")].into_iter().collect();
        let html = render_notifications(&messages, &NotificationOptions::default()).into_string();
        let lines: Vec<_> = html.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("alert-success") && lines[0].contains("one"));
        assert!(lines[1].contains("alert-danger alert-error") && lines[1].contains("two"));
    }

    #[test]
    fn message_text_is_sanitized() {
        let html = render_one("alert", "<script>alert('XSS')</script>");
        assert!(!html.contains("<script>"));
        assert!(!html.contains("alert('XSS')"));

        let html = render_one("alert", "<a href=\"https://example.org\">example page</a>");
        assert!(!html.contains("<a href"));
        assert!(html.contains("example page"));

        let html = render_one("alert", "<img src=\"https://example.org/image.jpg\" />");
        assert!(!html.contains("<img"));
    }

    #[test]
    fn category_and_button_attributes_are_escaped() {
        let html = render_one("x\" onclick=\"boom", "hi");
        assert!(html.contains("alert-x&quot; onclick=&quot;boom"));

        let messages: FlashMessages = [("notice", "hi")].into_iter().collect();
        let html = render_notifications(&messages, &NotificationOptions::default().with_button_content("<b>close</b>"));
        assert!(html.as_str().contains("&lt;b&gt;close&lt;/b&gt;</button>"));
    }
}
