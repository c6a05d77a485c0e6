//! Theme Registry
//!
//! The closed set of visual skins the game can render with. Each theme has a
//! display name for menus and diagnostics, and a slug naming its asset folder
//! under `themes/`.

use serde::{Deserialize, Serialize};

/// A visual skin applied uniformly to the game's sprites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Default art style
    #[default]
    Bomberman,
    /// Retro palette
    Classic,
    /// Night-time palette
    Dark,
    /// Pocket monster inspired tiles
    Pokemon,
}

impl Theme {
    /// Number of themes. Sizes the per-theme bundle arena.
    pub const COUNT: usize = 4;

    /// All themes in menu order.
    pub const ALL: [Theme; Theme::COUNT] =
        [Theme::Bomberman, Theme::Classic, Theme::Dark, Theme::Pokemon];

    /// Human-readable name for menus and logs.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Bomberman => "Bomberman",
            Theme::Classic => "Classic",
            Theme::Dark => "Dark",
            Theme::Pokemon => "Pokemon",
        }
    }

    /// Folder name under `<asset_root>/themes/`.
    pub fn slug(&self) -> &'static str {
        match self {
            Theme::Bomberman => "bomberman",
            Theme::Classic => "classic",
            Theme::Dark => "dark",
            Theme::Pokemon => "pokemon",
        }
    }

    /// Position in [`Theme::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Theme::Bomberman => 0,
            Theme::Classic => 1,
            Theme::Dark => 2,
            Theme::Pokemon => 3,
        }
    }

    /// The theme after this one, wrapping around. Used by the settings menu.
    pub fn next(&self) -> Theme {
        Theme::ALL[(self.index() + 1) % Theme::COUNT]
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Returned when a string names no known theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeParseError(pub String);

impl std::fmt::Display for ThemeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown theme: {:?}", self.0)
    }
}

impl std::error::Error for ThemeParseError {}

impl std::str::FromStr for Theme {
    type Err = ThemeParseError;

    /// Accepts either the slug or the display name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Theme::ALL
            .into_iter()
            .find(|t| {
                t.slug().eq_ignore_ascii_case(wanted)
                    || t.display_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ThemeParseError(s.to_string()))
    }
}
