//! Keyboard actions and their default bindings.

use gpui::{Action, App, KeyBinding, actions};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domain::Page;

/// Context set on the application shell
pub const SHELL_CONTEXT: &str = "Academy";
/// Context set on pages with a step sequencer or position carousel
pub const LESSON_CONTEXT: &str = "Lesson";

actions!(
    academy,
    [NextStep, PreviousStep, TogglePlayback, ResetSteps, ToggleTheme]
);

/// Switch the shell to another page
#[derive(Clone, Debug, PartialEq, Deserialize, JsonSchema, Action)]
#[action(namespace = academy)]
pub struct Navigate {
    pub page: Page,
}

pub fn bind_keys(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("right", NextStep, Some(LESSON_CONTEXT)),
        KeyBinding::new("left", PreviousStep, Some(LESSON_CONTEXT)),
        KeyBinding::new("space", TogglePlayback, Some(LESSON_CONTEXT)),
        KeyBinding::new("home", ResetSteps, Some(LESSON_CONTEXT)),
        KeyBinding::new("alt-t", ToggleTheme, Some(SHELL_CONTEXT)),
        KeyBinding::new(
            "alt-h",
            Navigate {
                page: Page::Landing,
            },
            Some(SHELL_CONTEXT),
        ),
        KeyBinding::new("alt-l", Navigate { page: Page::Learn }, Some(SHELL_CONTEXT)),
        KeyBinding::new("alt-p", Navigate { page: Page::Play }, Some(SHELL_CONTEXT)),
        KeyBinding::new(
            "alt-c",
            Navigate {
                page: Page::Contact,
            },
            Some(SHELL_CONTEXT),
        ),
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TopicId;

    #[test]
    fn test_navigate_deserializes_from_keymap_json() {
        let action: Navigate = serde_json::from_str(r#"{"page":"learn"}"#).unwrap();
        assert_eq!(action.page, Page::Learn);

        let action: Navigate =
            serde_json::from_str(r#"{"page":{"topic":"planning"}}"#).unwrap();
        assert_eq!(action.page, Page::Topic(TopicId::Planning));
    }
}
