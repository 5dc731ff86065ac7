use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::config::Sprite;
use crate::constants::{OBSTACLE_HEIGHT, OBSTACLE_WIDTH, VISIBILITY_DISTANCE};
use crate::geometry::{Bounds, Position};

#[derive(Debug, Clone, Copy)]
struct Placement {
    position: Position,
    visible: bool,
}

/// A fixed road block. Starts hidden and is revealed once a car gets close.
#[derive(Debug)]
pub struct Obstacle {
    state: Mutex<Placement>,
}

impl Obstacle {
    pub const WIDTH: u32 = OBSTACLE_WIDTH;
    pub const HEIGHT: u32 = OBSTACLE_HEIGHT;
    /// Every obstacle shares one texture.
    pub const SPRITE: Sprite = Sprite::Obstacle;

    pub fn new(position: Position) -> Obstacle {
        Obstacle {
            state: Mutex::new(Placement {
                position,
                visible: false,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Placement> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn position(&self) -> Position {
        self.lock().position
    }

    #[allow(dead_code)]
    pub fn set_position(&self, x: i32, y: i32) {
        self.lock().position = Position::new(x, y);
    }

    pub fn is_visible(&self) -> bool {
        self.lock().visible
    }

    pub fn set_visible(&self, visible: bool) {
        self.lock().visible = visible;
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.position(), Self::WIDTH, Self::HEIGHT)
    }

    /// True while still hidden and a car driving up the screen has come
    /// within vertical reveal range.
    pub fn is_approaching(&self, car_y: i32) -> bool {
        let state = self.lock();
        !state.visible && car_y <= state.position.y + VISIBILITY_DISTANCE as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let obstacle = Obstacle::new(Position::new(350, 400));
        assert!(!obstacle.is_visible());
        assert_eq!(obstacle.bounds(), Bounds::new(Position::new(350, 400), 42, 42));
    }

    #[test]
    fn test_is_approaching() {
        let obstacle = Obstacle::new(Position::new(350, 400));
        assert!(!obstacle.is_approaching(650));
        assert!(obstacle.is_approaching(600));
        assert!(obstacle.is_approaching(100));

        obstacle.set_visible(true);
        assert!(!obstacle.is_approaching(100));
    }

    #[test]
    fn test_set_position_moves_bounds() {
        let obstacle = Obstacle::new(Position::new(0, 0));
        obstacle.set_position(540, 90);
        assert_eq!(obstacle.position(), Position::new(540, 90));
        assert_eq!(obstacle.bounds().right(), 582);
        assert_eq!(obstacle.bounds().bottom(), 132);
    }
}
