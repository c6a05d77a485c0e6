//! Theme Tests - Registry and Config Round-Trip
//!
//! Covers display names, parsing, and persisting the chosen theme in the
//! sprite config file.

use bomber_engine::{SpriteConfig, Theme};

#[test]
fn test_display_names() {
    let names: Vec<&str> = Theme::ALL.iter().map(|t| t.display_name()).collect();
    assert_eq!(names, vec!["Bomberman", "Classic", "Dark", "Pokemon"]);
}

#[test]
fn test_display_matches_display_name() {
    for theme in Theme::ALL {
        assert_eq!(theme.to_string(), theme.display_name());
    }
}

#[test]
fn test_parse_round_trips_display_name() {
    for theme in Theme::ALL {
        assert_eq!(theme.display_name().parse::<Theme>(), Ok(theme));
        assert_eq!(theme.slug().parse::<Theme>(), Ok(theme));
    }
}

#[test]
fn test_default_theme_is_bomberman() {
    assert_eq!(Theme::default(), Theme::Bomberman);
    assert_eq!(SpriteConfig::default().default_theme, Theme::Bomberman);
}

#[test]
fn test_chosen_theme_survives_restart() {
    let dir = std::env::temp_dir().join("bomber_theme_tests_persist");
    let path = dir.join("sprites.json");

    let mut config = SpriteConfig::default();
    config.default_theme = Theme::Dark;
    config.save(&path).unwrap();

    let reloaded = SpriteConfig::load(&path).unwrap();
    assert_eq!(reloaded.default_theme, Theme::Dark);

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"dark\""));

    let _ = std::fs::remove_dir_all(&dir);
}
