//! Action verb remapping.
//!
//! Form submissions re-render the form they came from, so `create` pages are
//! `new` pages and `update` pages are `edit` pages for titles, selectors and
//! client hooks alike.

/// Submission verbs and the page verb they render.
const ACTION_ALIASES: &[(&str, &str)] = &[("create", "new"), ("update", "edit")];

/// Canonical page verb used for identifiers and title lookup.
///
/// ```
/// use pagekit::action::page_action;
///
/// assert_eq!(page_action("create"), "new");
/// assert_eq!(page_action("update"), "edit");
/// assert_eq!(page_action("destroy"), "destroy");
/// ```
pub fn page_action(raw: &str) -> &str {
    canonical_action(raw)
}

/// Verb used for the action segment of client init hooks.
pub fn hook_action(raw: &str) -> &str {
    canonical_action(raw)
}

fn canonical_action(raw: &str) -> &str {
    ACTION_ALIASES
        .iter()
        .find(|(from, _)| *from == raw)
        .map_or(raw, |(_, to)| *to)
}
