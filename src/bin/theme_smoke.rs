//! Theme Smoke Check
//!
//! Loads the sprite manager against an asset folder, walks every theme and
//! reports what each bundle resolved to. Use it to check a new theme's art
//! before shipping it.
//!
//! ```text
//! theme_smoke [ASSET_ROOT | CONFIG.json] [THEME]
//! RUST_LOG=debug theme_smoke assets/sprites pokemon
//! ```

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use bomber_engine::{SpriteConfig, SpriteManager, Theme};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let mut config = match args.next() {
        Some(arg) if arg.ends_with(".json") => match SpriteConfig::load(Path::new(&arg)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to read config {arg}: {e}");
                return ExitCode::FAILURE;
            }
        },
        Some(root) => SpriteConfig::with_asset_root(root),
        None => SpriteConfig::default(),
    };
    if let Some(name) = args.next() {
        match name.parse::<Theme>() {
            Ok(theme) => config.default_theme = theme,
            Err(e) => {
                eprintln!("{e} (expected one of: bomberman, classic, dark, pokemon)");
                return ExitCode::FAILURE;
            }
        }
    }

    println!("===========================================");
    println!("   Theme Smoke Check");
    println!("===========================================");
    println!("Asset root: {}", config.asset_root.display());
    println!();

    let mut sprites = match SpriteManager::new(config) {
        Ok(sprites) => sprites,
        Err(e) => {
            eprintln!("Base art unavailable, cannot render: {e}");
            return ExitCode::FAILURE;
        }
    };

    let start = sprites.current_theme();
    let start_bundle = sprites.current_sprites().clone();
    println!("Starting theme: {start}");

    for theme in Theme::ALL {
        sprites.set_theme(theme);
        let bundle = sprites.current_sprites();
        let shared_player = Arc::ptr_eq(&bundle.player.down, &start_bundle.player.down);
        let shared_bomb = Arc::ptr_eq(&bundle.bomb[0], &start_bundle.bomb[0]);
        let same_border = Arc::ptr_eq(&bundle.border, &start_bundle.border);
        let placeholders = bundle.placeholder_slots();

        println!("[{}]", theme.display_name());
        println!("  player shared with {start}: {shared_player}");
        println!("  bomb shared with {start}:   {shared_bomb}");
        println!("  border differs:              {}", !same_border);
        if placeholders.is_empty() {
            println!("  placeholders:                none");
        } else {
            println!("  placeholders:                {}", placeholders.join(", "));
        }
    }

    let reads = sprites.load_count();
    sprites.set_theme(start);
    let restored = Arc::ptr_eq(sprites.current_sprites(), &start_bundle);
    println!();
    println!(
        "Back to {start}: same bundle = {restored}, extra reads = {}",
        sprites.load_count() - reads
    );

    if restored {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
