//! Theme Sprite Bundles
//!
//! A [`ThemeSprites`] bundle is everything the renderer needs to draw one
//! theme. Bundles are assembled slot by slot from the table below; each slot
//! declares whether its art is shared base art, base art a theme may
//! override, or art only a theme provides.

use std::path::PathBuf;

use super::sprite::SpriteHandle;
use super::theme::Theme;

// ============================================================================
// SLOTS
// ============================================================================

/// Where a slot's image comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// Always the shared file under `base/`. Required at startup.
    Base,
    /// `themes/<slug>/<file>` if present, otherwise the shared base file.
    Overridable,
    /// `themes/<slug>/<file>` if present, otherwise the placeholder.
    ThemeOnly,
}

/// One named image position in a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSlot {
    pub name: &'static str,
    pub file: &'static str,
    pub kind: SlotKind,
}

impl SpriteSlot {
    const fn new(name: &'static str, file: &'static str, kind: SlotKind) -> Self {
        Self { name, file, kind }
    }

    /// Path of the shared copy, relative to the asset root.
    pub fn base_path(&self) -> PathBuf {
        PathBuf::from("base").join(self.file)
    }

    /// Path of the theme's own copy, relative to the asset root.
    pub fn theme_path(&self, theme: Theme) -> PathBuf {
        PathBuf::from("themes").join(theme.slug()).join(self.file)
    }
}

pub mod slots {
    use super::{SlotKind, SpriteSlot};

    pub const PLAYER_DOWN: SpriteSlot =
        SpriteSlot::new("player_down", "player_down.png", SlotKind::Base);
    pub const PLAYER_UP: SpriteSlot = SpriteSlot::new("player_up", "player_up.png", SlotKind::Base);
    pub const PLAYER_LEFT: SpriteSlot =
        SpriteSlot::new("player_left", "player_left.png", SlotKind::Base);
    pub const PLAYER_RIGHT: SpriteSlot =
        SpriteSlot::new("player_right", "player_right.png", SlotKind::Base);
    pub const BOMB_0: SpriteSlot = SpriteSlot::new("bomb_0", "bomb_0.png", SlotKind::Base);
    pub const BOMB_1: SpriteSlot = SpriteSlot::new("bomb_1", "bomb_1.png", SlotKind::Base);
    pub const BOMB_2: SpriteSlot = SpriteSlot::new("bomb_2", "bomb_2.png", SlotKind::Base);
    pub const EXPLOSION: SpriteSlot = SpriteSlot::new("explosion", "explosion.png", SlotKind::Base);
    pub const FLOOR: SpriteSlot = SpriteSlot::new("floor", "floor.png", SlotKind::Overridable);
    pub const WALL: SpriteSlot = SpriteSlot::new("wall", "wall.png", SlotKind::Overridable);
    pub const BRICK: SpriteSlot = SpriteSlot::new("brick", "brick.png", SlotKind::Overridable);
    pub const BORDER: SpriteSlot = SpriteSlot::new("border", "border.png", SlotKind::ThemeOnly);

    /// Every slot, in bundle order.
    pub const ALL: [SpriteSlot; 12] = [
        PLAYER_DOWN,
        PLAYER_UP,
        PLAYER_LEFT,
        PLAYER_RIGHT,
        BOMB_0,
        BOMB_1,
        BOMB_2,
        EXPLOSION,
        FLOOR,
        WALL,
        BRICK,
        BORDER,
    ];
}

// ============================================================================
// BUNDLE
// ============================================================================

/// Facing direction of the player sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Map tile kinds drawn from the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    /// Walkable ground
    Floor,
    /// Indestructible block
    Wall,
    /// Destructible block
    Brick,
    /// Decoration around the map edge
    Border,
}

/// Player poses.
#[derive(Debug, Clone)]
pub struct PlayerSprites {
    pub down: SpriteHandle,
    pub up: SpriteHandle,
    pub left: SpriteHandle,
    pub right: SpriteHandle,
}

/// Number of frames in the bomb fuse animation.
pub const BOMB_FRAMES: usize = 3;

/// The complete, fully-populated set of sprites for one theme.
#[derive(Debug, Clone)]
pub struct ThemeSprites {
    theme: Theme,
    pub player: PlayerSprites,
    pub bomb: [SpriteHandle; BOMB_FRAMES],
    pub explosion: SpriteHandle,
    pub floor: SpriteHandle,
    pub wall: SpriteHandle,
    pub brick: SpriteHandle,
    pub border: SpriteHandle,
}

impl ThemeSprites {
    /// Build a bundle by resolving every slot. The resolver must return a
    /// usable handle for each slot, so a bundle is never partially filled.
    pub fn assemble(theme: Theme, mut resolve: impl FnMut(&SpriteSlot) -> SpriteHandle) -> Self {
        Self {
            theme,
            player: PlayerSprites {
                down: resolve(&slots::PLAYER_DOWN),
                up: resolve(&slots::PLAYER_UP),
                left: resolve(&slots::PLAYER_LEFT),
                right: resolve(&slots::PLAYER_RIGHT),
            },
            bomb: [
                resolve(&slots::BOMB_0),
                resolve(&slots::BOMB_1),
                resolve(&slots::BOMB_2),
            ],
            explosion: resolve(&slots::EXPLOSION),
            floor: resolve(&slots::FLOOR),
            wall: resolve(&slots::WALL),
            brick: resolve(&slots::BRICK),
            border: resolve(&slots::BORDER),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Player sprite facing `dir`.
    pub fn player(&self, dir: Direction) -> &SpriteHandle {
        match dir {
            Direction::Up => &self.player.up,
            Direction::Down => &self.player.down,
            Direction::Left => &self.player.left,
            Direction::Right => &self.player.right,
        }
    }

    /// Bomb animation frame for a bomb that has been ticking `elapsed_ms`.
    pub fn bomb_frame(&self, elapsed_ms: u64, frame_ms: u32) -> &SpriteHandle {
        let step = elapsed_ms / u64::from(frame_ms.max(1));
        &self.bomb[(step % BOMB_FRAMES as u64) as usize]
    }

    pub fn tile(&self, kind: TileKind) -> &SpriteHandle {
        match kind {
            TileKind::Floor => &self.floor,
            TileKind::Wall => &self.wall,
            TileKind::Brick => &self.brick,
            TileKind::Border => &self.border,
        }
    }

    /// Every slot with its sprite, in [`slots::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &SpriteHandle)> {
        let handles = [
            &self.player.down,
            &self.player.up,
            &self.player.left,
            &self.player.right,
            &self.bomb[0],
            &self.bomb[1],
            &self.bomb[2],
            &self.explosion,
            &self.floor,
            &self.wall,
            &self.brick,
            &self.border,
        ];
        slots::ALL.map(|s| s.name).into_iter().zip(handles)
    }

    /// Names of slots that fell back to the placeholder.
    pub fn placeholder_slots(&self) -> Vec<&'static str> {
        self.iter()
            .filter(|(_, sprite)| sprite.is_placeholder())
            .map(|(name, _)| name)
            .collect()
    }
}
