use super::super::super::messages::Message;
use super::super::super::state::App;
use iced::keyboard::{Key, Modifiers, key};

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = match key.as_ref() {
            Key::Named(key::Named::ArrowLeft) => "arrowleft".to_string(),
            Key::Named(key::Named::ArrowRight) => "arrowright".to_string(),
            Key::Named(key::Named::Space) => "space".to_string(),
            Key::Character(ch) => ch.to_ascii_lowercase(),
            _ => return None,
        };

        if Self::shortcut_matches(&self.config.key_prev_image, "arrowleft", &pressed, modifiers) {
            Some(Message::PreviousImage)
        } else if Self::shortcut_matches(
            &self.config.key_next_image,
            "arrowright",
            &pressed,
            modifiers,
        ) {
            Some(Message::NextImage)
        } else {
            None
        }
    }

    pub(super) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &str,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = Self::normalize_shortcut_token(raw, fallback);

        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        for token in normalized
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                key => required_key = Some(key),
            }
        }

        let Some(required_key) = required_key else {
            return false;
        };
        if pressed != required_key {
            return false;
        }

        modifiers.control() == required_ctrl
            && modifiers.alt() == required_alt
            && modifiers.logo() == required_logo
            && modifiers.shift() == required_shift
    }

    pub(super) fn normalize_shortcut_token(raw: &str, fallback: &str) -> String {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            fallback.to_string()
        } else {
            normalized
                .split('+')
                .map(|token| match token.trim() {
                    "spacebar" => "space",
                    "left" => "arrowleft",
                    "right" => "arrowright",
                    other => other,
                })
                .collect::<Vec<_>>()
                .join("+")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::test_app;

    #[test]
    fn arrow_aliases_normalize() {
        assert_eq!(App::normalize_shortcut_token(" Left ", "x"), "arrowleft");
        assert_eq!(App::normalize_shortcut_token("ArrowRight", "x"), "arrowright");
        assert_eq!(App::normalize_shortcut_token("", "arrowleft"), "arrowleft");
    }

    #[test]
    fn rejects_unexpected_modifier() {
        assert!(App::shortcut_matches("arrowleft", "x", "arrowleft", Modifiers::empty()));
        assert!(!App::shortcut_matches(
            "arrowleft",
            "x",
            "arrowleft",
            Modifiers::SHIFT
        ));
    }

    #[test]
    fn arrow_keys_map_to_navigation() {
        let app = test_app(&["a.jpg", "b.jpg"]);
        let message = app.shortcut_message_for_key(
            Key::Named(key::Named::ArrowRight),
            Modifiers::empty(),
        );
        assert!(matches!(message, Some(Message::NextImage)));
        let message =
            app.shortcut_message_for_key(Key::Character("x".into()), Modifiers::empty());
        assert!(message.is_none());
    }
}
