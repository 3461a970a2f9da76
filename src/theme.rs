//! Visual themes for the tour.
//!
//! Two palettes (light/dark) drive all UI chrome. The code pullout keeps a
//! fixed dark palette in both themes, matching the library's documentation
//! styling. `ThemeApplier` is the consumer that turns the store's `theme`
//! field into the single active root marker the renderer reads.

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

use crate::store::{Field, Subscription, UiStore};

/// Visual mode. Strictly two-valued; toggling never cycles further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}

/// Color tokens for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub surface: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub text_muted: Color,
    pub border: Color,
    pub accent: Color,
    pub primary: Color,
    pub danger: Color,
    pub buy: Color,
    pub sell: Color,
}

pub const DARK: Palette = Palette {
    bg: Color::Rgb(25, 28, 38),
    surface: Color::Rgb(33, 36, 47),
    text: Color::Rgb(214, 222, 235),
    text_dimmed: Color::Rgb(130, 139, 158),
    text_muted: Color::Rgb(86, 92, 108),
    border: Color::Rgb(58, 63, 79),
    accent: Color::Rgb(243, 3, 126),
    primary: Color::Rgb(82, 139, 255),
    danger: Color::Rgb(239, 83, 80),
    buy: Color::Rgb(38, 166, 154),
    sell: Color::Rgb(239, 83, 80),
};

pub const LIGHT: Palette = Palette {
    bg: Color::Rgb(250, 250, 252),
    surface: Color::Rgb(240, 241, 245),
    text: Color::Rgb(36, 41, 54),
    text_dimmed: Color::Rgb(110, 117, 133),
    text_muted: Color::Rgb(158, 163, 176),
    border: Color::Rgb(212, 215, 224),
    accent: Color::Rgb(214, 2, 112),
    primary: Color::Rgb(38, 97, 222),
    danger: Color::Rgb(200, 48, 46),
    buy: Color::Rgb(20, 128, 118),
    sell: Color::Rgb(200, 48, 46),
};

// Code pullout colors are theme-independent (fixed dark panel).
pub const CODE_BG: Color = Color::Rgb(35, 37, 45);

pub fn code_text_style() -> Style {
    Style::default().fg(Color::Rgb(214, 222, 235)).bg(CODE_BG)
}

pub fn code_comment_style() -> Style {
    Style::default()
        .fg(Color::Rgb(99, 119, 119))
        .add_modifier(Modifier::ITALIC)
}

pub fn code_keyword_style() -> Style {
    Style::default().fg(Color::Rgb(199, 146, 234))
}

pub fn code_string_style() -> Style {
    Style::default().fg(Color::Rgb(236, 196, 141))
}

pub fn code_number_style() -> Style {
    Style::default().fg(Color::Rgb(247, 140, 108))
}

pub fn code_function_style() -> Style {
    Style::default().fg(Color::Rgb(130, 170, 255))
}

pub fn code_type_style() -> Style {
    Style::default().fg(Color::Rgb(255, 203, 139))
}

pub fn code_constant_style() -> Style {
    Style::default().fg(Color::Rgb(127, 219, 202))
}

pub fn code_tag_style() -> Style {
    Style::default().fg(Color::Rgb(202, 236, 230))
}

pub fn code_property_style() -> Style {
    Style::default().fg(Color::Rgb(128, 203, 196))
}

pub fn code_operator_style() -> Style {
    Style::default().fg(Color::Rgb(199, 146, 234))
}

pub fn code_punctuation_style() -> Style {
    Style::default().fg(Color::Rgb(127, 219, 202))
}

pub fn code_variable_style() -> Style {
    Style::default().fg(Color::Rgb(214, 222, 235))
}

/// The two mutually exclusive visual-mode markers on the application root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RootMarkers {
    pub light: bool,
    pub dark: bool,
}

/// ThemeConsumer: reads `theme` and applies exactly one root marker.
///
/// Applies on construction (mount) and on every subsequent `theme` change.
/// Setting one marker always clears the other, so re-applying the current
/// theme is idempotent. The renderer picks its palette from the applied
/// marker, not from the raw store field.
pub struct ThemeApplier {
    markers: Rc<RefCell<RootMarkers>>,
    _sub: Subscription,
}

impl ThemeApplier {
    pub fn new(store: &UiStore) -> Self {
        let markers = Rc::new(RefCell::new(RootMarkers::default()));
        apply(&markers, store.with(|s| s.theme));

        let observed = Rc::clone(&markers);
        let sub = store.subscribe(Field::Theme, move |state| {
            apply(&observed, state.theme);
        });

        Self {
            markers,
            _sub: sub,
        }
    }

    /// The theme currently applied to the root.
    pub fn active(&self) -> Theme {
        if self.markers.borrow().light {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn markers(&self) -> RootMarkers {
        *self.markers.borrow()
    }
}

fn apply(markers: &Rc<RefCell<RootMarkers>>, theme: Theme) {
    let mut m = markers.borrow_mut();
    match theme {
        Theme::Light => {
            m.dark = false;
            m.light = true;
        }
        Theme::Dark => {
            m.light = false;
            m.dark = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::UiState;

    #[test]
    fn test_toggled_is_two_valued() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_applier_marks_on_mount() {
        let store = UiStore::new(UiState::default());
        let applier = ThemeApplier::new(&store);
        let m = applier.markers();
        assert!(m.dark && !m.light);
        assert_eq!(applier.active(), Theme::Dark);
    }

    #[test]
    fn test_exactly_one_marker_after_any_toggle_sequence() {
        let store = UiStore::new(UiState::default());
        let applier = ThemeApplier::new(&store);

        for _ in 0..7 {
            let next = store.with(|s| s.theme).toggled();
            store.set_theme(next);
            let m = applier.markers();
            assert_ne!(m.light, m.dark, "exactly one marker must be active");
            assert_eq!(applier.active(), next);
        }
    }

    #[test]
    fn test_reapplying_same_theme_is_idempotent() {
        let store = UiStore::new(UiState::default());
        let applier = ThemeApplier::new(&store);

        store.set_theme(Theme::Light);
        store.set_theme(Theme::Light);
        let m = applier.markers();
        assert!(m.light && !m.dark);
    }
}
