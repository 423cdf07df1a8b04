use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Root class of the component; every other class is derived from it
pub const BASE_CLASS: &str = "sg-modal-lib";
/// Theme used when the caller does not pick one
pub const DEFAULT_THEME: &str = "light";
pub const DEFAULT_FADE_DURATION_MS: u32 = 0;
/// `aria-describedby` value when there is no title to point at
pub const DEFAULT_DESCRIBED_BY: &str = "modal";

/// Open/closed state as seen by the markup. The state itself always belongs
/// to the caller; this only maps it onto classes and ARIA values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalVisibility {
    Open,
    Closed,
}

impl From<bool> for ModalVisibility {
    fn from(is_open: bool) -> Self {
        if is_open {
            ModalVisibility::Open
        } else {
            ModalVisibility::Closed
        }
    }
}

impl ModalVisibility {
    pub fn is_open(self) -> bool {
        matches!(self, ModalVisibility::Open)
    }

    /// Modifier class for the root element
    pub fn class(self) -> String {
        match self {
            ModalVisibility::Open => format!("{}--open", BASE_CLASS),
            ModalVisibility::Closed => format!("{}--closed", BASE_CLASS),
        }
    }

    /// Value of the root `aria-hidden` attribute
    pub fn aria_hidden(self) -> &'static str {
        match self {
            ModalVisibility::Open => "false",
            ModalVisibility::Closed => "true",
        }
    }
}

/// Everything that configures a modal except its open state, the toggle
/// callback and its children.
///
/// Applications can keep presets in JSON; missing fields take the defaults:
///
/// ```
/// let options: sg_modal_shared::ModalOptions =
///     serde_json::from_str(r#"{ "styleTheme": "dark", "fadeDuration": 300 }"#).unwrap();
/// assert!(options.escape_close);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModalOptions {
    /// Heading text, rendered only when non-empty
    pub title: Option<String>,
    /// Secondary action button label, rendered only when non-empty
    pub btn_text: Option<String>,
    /// Suffix of the theme class (`sg-modal-lib--{theme}`)
    pub style_theme: String,
    pub escape_close: bool,
    pub overlay_click_close: bool,
    pub show_close: bool,
    /// Fade transition length in milliseconds
    pub fade_duration: u32,
}

impl Default for ModalOptions {
    fn default() -> Self {
        Self {
            title: None,
            btn_text: None,
            style_theme: DEFAULT_THEME.to_string(),
            escape_close: true,
            overlay_click_close: true,
            show_close: true,
            fade_duration: DEFAULT_FADE_DURATION_MS,
        }
    }
}

impl ModalOptions {
    pub fn title_text(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }

    pub fn button_text(&self) -> Option<&str> {
        non_empty(self.btn_text.as_deref())
    }

    /// Target of `aria-describedby`: the title when there is one
    pub fn described_by(&self) -> &str {
        self.title_text().unwrap_or(DEFAULT_DESCRIBED_BY)
    }

    pub fn theme_class(&self) -> Option<String> {
        if self.style_theme.is_empty() {
            None
        } else {
            Some(format!("{}--{}", BASE_CLASS, self.style_theme))
        }
    }

    /// Full class attribute of the root element
    pub fn root_class(&self, visibility: ModalVisibility) -> String {
        let mut classes = vec![BASE_CLASS.to_string()];
        classes.extend(self.theme_class());
        classes.push(visibility.class());
        classes.join(" ")
    }

    /// Inline style of the overlay. The visibility flip waits for the fade
    /// only when closing, so the dialog fades out before the overlay hides.
    pub fn overlay_style(&self, visibility: ModalVisibility) -> String {
        let delay = if visibility.is_open() { 0 } else { self.fade_duration };
        format!("transition: visibility 0ms linear {}ms;", delay)
    }

    /// Inline style of the dialog panel
    pub fn dialog_style(&self) -> String {
        format!(
            "transition: opacity {d}ms ease-in-out, transform {d}ms ease-in-out;",
            d = self.fade_duration
        )
    }

    /// Whether the document keydown listener should be attached
    pub fn listens_for_escape(&self, visibility: ModalVisibility) -> bool {
        visibility.is_open() && self.escape_close
    }

    /// Development-time checks, the equivalent of prop-type warnings.
    /// Nothing here stops rendering.
    pub fn validate(&self) -> Vec<PropWarning> {
        let mut warnings = Vec::new();

        if self.style_theme.is_empty() {
            warnings.push(PropWarning::EmptyTheme);
        } else if !is_class_suffix(&self.style_theme) {
            warnings.push(PropWarning::InvalidTheme(self.style_theme.clone()));
        }

        if is_blank(self.title.as_deref()) {
            warnings.push(PropWarning::BlankTitle);
        }
        if is_blank(self.btn_text.as_deref()) {
            warnings.push(PropWarning::BlankButtonText);
        }

        warnings
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropWarning {
    #[error("style_theme is empty, no theme class will be applied")]
    EmptyTheme,
    #[error("style_theme {0:?} is not a valid CSS class suffix")]
    InvalidTheme(String),
    #[error("title contains only whitespace but will still be rendered")]
    BlankTitle,
    #[error("btn_text contains only whitespace but will still be rendered")]
    BlankButtonText,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

fn is_blank(value: Option<&str>) -> bool {
    matches!(value, Some(s) if !s.is_empty() && s.trim().is_empty())
}

fn is_class_suffix(theme: &str) -> bool {
    theme
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
