//! Client-side initialization hooks.
//!
//! A page calls into the client application's namespace from the outside in:
//!
//! ```text
//! App.init();
//! App.anime.init();
//! App.anime.edit.init();
//! ```
//!
//! plus one optional call named by the page itself.

use crate::action::hook_action;
use crate::html::SafeHtml;

/// Build the init statements for one page, one per line.
///
/// `controller_id` must be a valid JS property name (the underscored form).
/// `override_token` is trimmed; a blank one emits no fourth statement.
pub fn build_hooks(namespace: &str, controller_id: &str, action: &str, override_token: Option<&str>) -> String {
    let mut statements = vec![
        format!("{namespace}.init();"),
        format!("{namespace}.{controller_id}.init();"),
        format!("{namespace}.{controller_id}.{}.init();", hook_action(action)),
    ];

    if let Some(token) = override_token.map(str::trim).filter(|token| !token.is_empty()) {
        statements.push(format!("{namespace}.{controller_id}.{token}.init();"));
    }

    statements.join("\n")
}

/// Wrap a script in a `<script>` element with a CDATA guard.
pub fn javascript_tag(script: &str) -> SafeHtml {
    SafeHtml::from_trusted(format!("<script>\n//<![CDATA[\n{script}\n//]]>\n</script>"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_action_produces_three_statements() {
        let script = build_hooks("Dummy", "awesome_anime", "custom", None);
        assert_eq!(
            script,
            "Dummy.init();\nDummy.awesome_anime.init();\nDummy.awesome_anime.custom.init();"
        );
    }

    #[test]
    fn submission_actions_are_remapped() {
        assert!(build_hooks("Dummy", "awesome_anime", "create", None).contains("Dummy.awesome_anime.new.init();"));
        assert!(build_hooks("Dummy", "awesome_anime", "update", None).contains("Dummy.awesome_anime.edit.init();"));
    }

    #[test]
    fn override_adds_fourth_statement() {
        let script = build_hooks("Dummy", "awesome_anime", "update", Some("custom"));
        assert!(script.contains("Dummy.awesome_anime.edit.init();"));
        assert!(script.ends_with("Dummy.awesome_anime.custom.init();"));
        assert_eq!(script.lines().count(), 4);
    }

    #[test]
    fn override_is_trimmed() {
        let script = build_hooks("Dummy", "awesome_anime", "show", Some(" custom "));
        assert_eq!(script.lines().last(), Some("Dummy.awesome_anime.custom.init();"));
    }

    #[test]
    fn blank_override_is_ignored() {
        for token in [None, Some(""), Some("  ")] {
            let script = build_hooks("Dummy", "awesome_anime", "update", token);
            assert!(!script.contains("Dummy.awesome_anime..init();"));
            assert_eq!(script.lines().count(), 3);
        }
    }

    #[test]
    fn script_tag_wraps_statements() {
        let tag = javascript_tag("Dummy.init();");
        assert_eq!(tag.as_str(), "<script>\n//<![CDATA[\nDummy.init();\n//]]>\n</script>");
    }
}
