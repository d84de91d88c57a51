//! Theme lookup.
//!
//! A table is styled by a theme identifier. Built-in identifiers map to a
//! fixed [`ThemeDescriptor`] through a lookup table; adding a theme means
//! adding an entry, not a branch. An external stylesheet reference replaces
//! the built-in theme entirely.

use crate::constants::DEFAULT_THEME_ID;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Horizontal alignment of data cells
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

/// Visual parameters of a built-in theme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDescriptor {
    pub id: u8,
    pub name: &'static str,
    pub header_background: &'static str,
    pub header_text: &'static str,
    /// Background of every other data row, if striped
    pub stripe_background: Option<&'static str>,
    /// Background of every data cell, if any
    pub cell_background: Option<&'static str>,
    pub cell_alignment: Alignment,
    /// Rounded search input and buttons
    pub rounded_controls: bool,
}

static BUILTIN_THEMES: Lazy<HashMap<u8, ThemeDescriptor>> = Lazy::new(|| {
    [
        ThemeDescriptor {
            id: 1,
            name: "teal",
            header_background: "#007c77",
            header_text: "white",
            stripe_background: Some("#bbb"),
            cell_background: None,
            cell_alignment: Alignment::Left,
            rounded_controls: false,
        },
        ThemeDescriptor {
            id: 2,
            name: "olive",
            header_background: "#98b653fd",
            header_text: "white",
            stripe_background: Some("#b1d166b6"),
            cell_background: None,
            cell_alignment: Alignment::Center,
            rounded_controls: true,
        },
        ThemeDescriptor {
            id: 3,
            name: "coral",
            header_background: "#f86868fd",
            header_text: "white",
            stripe_background: None,
            cell_background: Some("rgb(241, 198, 198)"),
            cell_alignment: Alignment::Center,
            rounded_controls: false,
        },
    ]
    .into_iter()
    .map(|theme| (theme.id, theme))
    .collect()
});

/// Built-in theme for `id`, falling back to the default theme for unknown ids.
pub fn builtin(id: u8) -> &'static ThemeDescriptor {
    BUILTIN_THEMES
        .get(&id)
        .or_else(|| BUILTIN_THEMES.get(&DEFAULT_THEME_ID))
        .unwrap_or_else(|| unreachable!("default theme is always registered"))
}

/// Ids of every built-in theme, ascending
pub fn builtin_ids() -> Vec<u8> {
    let mut ids: Vec<u8> = BUILTIN_THEMES.keys().copied().collect();
    ids.sort_unstable();
    ids
}

/// The resolved style of a table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Theme {
    Builtin(&'static ThemeDescriptor),
    /// External stylesheet reference, used verbatim by the renderer
    Stylesheet(String),
}

impl Theme {
    /// Resolve the configured style; a stylesheet wins over a built-in id.
    pub fn resolve(default_style: Option<u8>, stylesheet: Option<&str>) -> Self {
        match stylesheet {
            Some(href) => Theme::Stylesheet(href.to_string()),
            None => Theme::Builtin(builtin(default_style.unwrap_or(DEFAULT_THEME_ID))),
        }
    }

    /// Cell alignment; external stylesheets are rendered left-aligned
    pub fn alignment(&self) -> Alignment {
        match self {
            Theme::Builtin(descriptor) => descriptor.cell_alignment,
            Theme::Stylesheet(_) => Alignment::Left,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Theme::Builtin(descriptor) => format!("theme {} ({})", descriptor.id, descriptor.name),
            Theme::Stylesheet(href) => format!("stylesheet {}", href),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Builtin(builtin(DEFAULT_THEME_ID))
    }
}
