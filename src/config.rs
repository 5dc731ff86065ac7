use std::env;
use std::path::PathBuf;

use crate::constants::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::geometry::Position;

pub const ASSET_DIR_ENV: &str = "EVADOR_ASSET_DIR";

/// Image assets, one texture each. Entities name their sprite and the
/// renderer owns the loaded textures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    PlayerCar,
    ComputerCar,
    Obstacle,
    Backdrop,
}

impl Sprite {
    pub const ALL: [Sprite; 4] = [
        Sprite::PlayerCar,
        Sprite::ComputerCar,
        Sprite::Obstacle,
        Sprite::Backdrop,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Sprite::PlayerCar => "car_1.png",
            Sprite::ComputerCar => "car_2.png",
            Sprite::Obstacle => "obstacle.png",
            Sprite::Backdrop => "evador.png",
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub asset_dir: PathBuf,
    pub font_file: PathBuf,
    pub font_size: u16,
    pub banner_font_size: u16,
    pub player_start: Position,
    pub computer_start: Position,
    /// Multiplier on frame time when advancing the player car.
    pub player_time_scale: f32,
    pub computer_time_scale: f32,
    pub player_obstacles: Vec<Position>,
    pub computer_obstacles: Vec<Position>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            title: "Evador".to_string(),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            asset_dir: PathBuf::from("assets"),
            font_file: PathBuf::from("fonts/open_sans/OpenSans.ttf"),
            font_size: 24,
            banner_font_size: 34,
            player_start: Position::new(380, 550),
            computer_start: Position::new(580, 550),
            player_time_scale: 20.0,
            computer_time_scale: 1.0,
            player_obstacles: vec![
                Position::new(350, 400),
                Position::new(440, 250),
                Position::new(420, 90),
            ],
            computer_obstacles: vec![
                Position::new(620, 400),
                Position::new(500, 260),
                Position::new(540, 90),
            ],
        }
    }
}

impl GameConfig {
    /// Defaults, with the asset directory taken from `EVADOR_ASSET_DIR`
    /// when set.
    pub fn from_env() -> Self {
        let mut config = GameConfig::default();
        if let Some(dir) = env::var_os(ASSET_DIR_ENV).filter(|dir| !dir.is_empty()) {
            config.asset_dir = PathBuf::from(dir);
        }
        config
    }

    pub fn sprite_path(&self, sprite: Sprite) -> PathBuf {
        self.asset_dir.join(sprite.file_name())
    }

    pub fn font_path(&self) -> PathBuf {
        self.asset_dir.join(&self.font_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_has_three_obstacles_per_lane() {
        let config = GameConfig::default();
        assert_eq!(config.player_obstacles.len(), 3);
        assert_eq!(config.computer_obstacles.len(), 3);
        assert_eq!(config.window_width, 1000);
        assert_eq!(config.window_height, 634);
    }

    #[test]
    fn test_asset_paths() {
        let config = GameConfig {
            asset_dir: PathBuf::from("/opt/evador"),
            ..GameConfig::default()
        };
        assert_eq!(
            config.sprite_path(Sprite::Obstacle),
            PathBuf::from("/opt/evador/obstacle.png")
        );
        assert_eq!(
            config.font_path(),
            PathBuf::from("/opt/evador/fonts/open_sans/OpenSans.ttf")
        );
    }
}
