use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::config::Sprite;
use crate::constants::{
    ACCELERATION_RATE, CAR_HEIGHT, CAR_WIDTH, DECELERATION_RATE, LATERAL_STEP, MAX_SPEED,
    START_LINE_Y,
};
use crate::geometry::{Bounds, Position};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Kinematics {
    position: Position,
    speed: f32,
    distance: f32,
}

/// A racing car. All state sits behind one lock so a worker thread can
/// advance the car while the frame loop still holds a shared reference.
#[derive(Debug)]
pub struct Car {
    name: &'static str,
    sprite: Sprite,
    state: Mutex<Kinematics>,
}

impl Car {
    pub const WIDTH: u32 = CAR_WIDTH;
    pub const HEIGHT: u32 = CAR_HEIGHT;

    pub fn new(name: &'static str, position: Position, sprite: Sprite) -> Car {
        Car {
            name,
            sprite,
            state: Mutex::new(Kinematics {
                position,
                speed: 0.0,
                distance: 0.0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Kinematics> {
        // Kinematics stay consistent even if a holder panicked
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn sprite(&self) -> Sprite {
        self.sprite
    }

    pub fn position(&self) -> Position {
        self.lock().position
    }

    pub fn x(&self) -> i32 {
        self.lock().position.x
    }

    pub fn y(&self) -> i32 {
        self.lock().position.y
    }

    pub fn speed(&self) -> f32 {
        self.lock().speed
    }

    pub fn distance(&self) -> f32 {
        self.lock().distance
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.position(), Self::WIDTH, Self::HEIGHT)
    }

    /// Puts the car back on the grid at standstill.
    pub fn start(&self) {
        self.lock().speed = 0.0;
        log::info!("{} car started with speed 0", self.name);
    }

    pub fn accelerate(&self) {
        let mut state = self.lock();
        state.speed = (state.speed + ACCELERATION_RATE).min(MAX_SPEED);
    }

    /// Never goes below zero; cars have no reverse gear.
    pub fn decelerate(&self) {
        let mut state = self.lock();
        state.speed = (state.speed - DECELERATION_RATE).max(0.0);
    }

    /// Drives up the screen by `speed * elapsed` pixels, stopping at the
    /// start/finish line.
    pub fn move_forward(&self, elapsed: f32) {
        let mut state = self.lock();
        let step = (state.speed * elapsed) as i32;
        state.position.y = (state.position.y - step).max(START_LINE_Y);
    }

    pub fn move_left(&self) {
        self.lock().position.x -= LATERAL_STEP;
    }

    pub fn move_right(&self) {
        self.lock().position.x += LATERAL_STEP;
    }

    pub fn record_distance(&self, elapsed: f32) {
        let mut state = self.lock();
        state.distance += state.speed * elapsed;
    }

    /// Repositions the car. Speed and covered distance carry over into the
    /// next round.
    pub fn reset(&self, position: Position) {
        self.lock().position = position;
    }

    pub fn has_finished(&self) -> bool {
        self.y() <= START_LINE_Y
    }
}
