use crate::car::Car;
use crate::config::{GameConfig, Sprite};
use crate::constants::{
    BACKDROP_SCALE_MAX, BACKDROP_SCALE_STEP, BLINK_INTERVAL, IMMINENT_DISTANCE,
    LANE_LEFT_BOUNDARY, LANE_RIGHT_BOUNDARY, MAX_SPEED, VISIBILITY_DISTANCE,
};
use crate::geometry::{Bounds, Position};
use crate::input::InputAction;
use crate::obstacle::Obstacle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Started,
    Running,
    Paused,
    Stopped,
    Reset,
    GameOver,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvoidDirection {
    None,
    Left,
    Right,
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Crashed,
    PlayerFinished,
    ComputerFinished,
}

impl Outcome {
    pub fn banner(&self) -> &'static str {
        match self {
            Outcome::PlayerFinished => "You win!",
            Outcome::Crashed | Outcome::ComputerFinished => "You lost to AI",
        }
    }
}

/// A car together with the obstacles placed on its side of the road.
#[derive(Debug)]
pub struct Lane {
    pub car: Car,
    pub obstacles: Vec<Obstacle>,
    start: Position,
    time_scale: f32,
}

impl Lane {
    pub fn new(car: Car, obstacles: &[Position], time_scale: f32) -> Lane {
        let start = car.position();
        Lane {
            car,
            obstacles: obstacles.iter().copied().map(Obstacle::new).collect(),
            start,
            time_scale,
        }
    }

    /// Reveals hidden obstacles the car has come within range of. Revealed
    /// obstacles stay visible until the lane is reset.
    pub fn reveal_obstacles(&self) {
        let car = self.car.position();
        for obstacle in &self.obstacles {
            if !obstacle.is_approaching(car.y) {
                continue;
            }
            if car.distance_to(&obstacle.position()) < VISIBILITY_DISTANCE {
                obstacle.set_visible(true);
            }
        }
    }

    /// Steers the car one lateral step per visible obstacle that is about
    /// to be hit.
    pub fn steer_around_obstacles(&self) {
        for obstacle in self.obstacles.iter().filter(|o| o.is_visible()) {
            match check_imminent_collision(&self.car.bounds(), &obstacle.position()) {
                AvoidDirection::Left => self.car.move_left(),
                AvoidDirection::Right => self.car.move_right(),
                AvoidDirection::None => {}
            }
        }
    }

    fn reset(&self) {
        self.car.reset(self.start);
        for obstacle in &self.obstacles {
            obstacle.set_visible(false);
        }
    }

    pub fn visible_obstacles(&self) -> usize {
        self.obstacles.iter().filter(|o| o.is_visible()).count()
    }
}

/// Picks a lateral direction for a car about to run into an obstacle.
///
/// Relative position decides first: a car right of the obstacle moves
/// right while it still fits inside the lane, a car left of it moves left
/// while it is still right of the left boundary. Only when neither applies
/// does a car that has left the lane get pushed back inside.
pub fn check_imminent_collision(car: &Bounds, obstacle: &Position) -> AvoidDirection {
    if car.origin.distance_to(obstacle) >= IMMINENT_DISTANCE {
        return AvoidDirection::None;
    }

    let car_x = car.left();
    if car_x > obstacle.x && car.right() < LANE_RIGHT_BOUNDARY {
        AvoidDirection::Right
    } else if car_x < obstacle.x && car_x > LANE_LEFT_BOUNDARY {
        AvoidDirection::Left
    } else if car.right() > LANE_RIGHT_BOUNDARY {
        AvoidDirection::Left
    } else if car_x < LANE_LEFT_BOUNDARY {
        AvoidDirection::Right
    } else {
        AvoidDirection::None
    }
}

pub fn detect_collision(car: &Bounds, obstacle: &Bounds) -> bool {
    car.overlaps(obstacle)
}

/// Half-second on/off toggle for the game-over banner.
#[derive(Debug, Clone, Copy)]
pub struct Blinker {
    elapsed: f32,
    visible: bool,
}

impl Default for Blinker {
    fn default() -> Self {
        Blinker {
            elapsed: 0.0,
            visible: true,
        }
    }
}

impl Blinker {
    pub fn advance(&mut self, elapsed: f32) {
        self.elapsed += elapsed;
        if self.elapsed > BLINK_INTERVAL {
            self.visible = !self.visible;
            self.elapsed = 0.0;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

pub struct Game {
    state: GameState,
    outcome: Option<Outcome>,
    player: Lane,
    computer: Lane,
    accumulated_time: f32,
    backdrop_scale: f32,
    scaling_enabled: bool,
    blinker: Blinker,
}

impl Game {
    pub fn new(config: &GameConfig) -> Game {
        let player = Car::new("You", config.player_start, Sprite::PlayerCar);
        let computer = Car::new("Computer", config.computer_start, Sprite::ComputerCar);

        Game {
            state: GameState::Started,
            outcome: None,
            player: Lane::new(player, &config.player_obstacles, config.player_time_scale),
            computer: Lane::new(
                computer,
                &config.computer_obstacles,
                config.computer_time_scale,
            ),
            accumulated_time: 0.0,
            backdrop_scale: 1.0,
            scaling_enabled: false,
            blinker: Blinker::default(),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn player(&self) -> &Lane {
        &self.player
    }

    pub fn computer(&self) -> &Lane {
        &self.computer
    }

    pub fn backdrop_scale(&self) -> f32 {
        self.backdrop_scale
    }

    pub fn is_quit(&self) -> bool {
        self.state == GameState::Quit
    }

    /// Banner text to draw this frame, if any.
    pub fn banner(&self) -> Option<&'static str> {
        if self.state != GameState::GameOver || !self.blinker.is_visible() {
            return None;
        }
        Some(self.outcome.unwrap_or(Outcome::Crashed).banner())
    }

    pub fn obstacles(&self) -> impl Iterator<Item = &Obstacle> {
        self.player.obstacles.iter().chain(self.computer.obstacles.iter())
    }

    pub fn cars(&self) -> [&Car; 2] {
        [&self.player.car, &self.computer.car]
    }

    pub fn handle_action(&mut self, action: InputAction) {
        match action {
            InputAction::Quit => {
                self.state = GameState::Quit;
                log::info!("Quit requested");
            }
            InputAction::Reset => {
                log::info!("Reset key pressed");
                if self.state != GameState::Running {
                    self.reset_round();
                }
            }
            InputAction::StartStop => match self.state {
                GameState::Running => self.set_state(GameState::Stopped),
                GameState::Paused => self.set_state(GameState::Running),
                _ => self.start_round(),
            },
            InputAction::Pause => {
                if self.state == GameState::Running {
                    self.set_state(GameState::Paused);
                }
            }
            InputAction::Accelerate => self.player.car.accelerate(),
            InputAction::Decelerate => self.player.car.decelerate(),
            InputAction::SteerLeft => self.player.car.move_left(),
            InputAction::SteerRight => self.player.car.move_right(),
            InputAction::None => {}
        }
    }

    fn set_state(&mut self, state: GameState) {
        self.state = state;
        log::info!("Game state changed to {:?}", state);
    }

    fn start_round(&mut self) {
        self.outcome = None;
        self.scaling_enabled = true;
        self.player.car.start();
        self.computer.car.start();
        self.set_state(GameState::Running);
    }

    fn reset_round(&mut self) {
        self.outcome = None;
        self.player.reset();
        self.computer.reset();
        self.set_state(GameState::Reset);
    }

    /// One frame of game time. The simulation only advances while running;
    /// the banner blink keeps ticking regardless.
    pub fn tick(&mut self, elapsed: f32) {
        if self.state == GameState::Running {
            self.update(elapsed);
        }
        self.blinker.advance(elapsed);
    }

    fn update(&mut self, elapsed: f32) {
        if self.scaling_enabled {
            self.backdrop_scale = (self.backdrop_scale + BACKDROP_SCALE_STEP).min(BACKDROP_SCALE_MAX);
        }

        let (player, computer) = (&self.player, &self.computer);
        rayon::join(
            || player.car.move_forward(elapsed * player.time_scale),
            || computer.car.move_forward(elapsed * computer.time_scale),
        );

        self.accumulated_time += elapsed;
        if self.accumulated_time > 0.0 && self.computer.car.speed() < MAX_SPEED {
            self.computer.car.accelerate();
        }

        self.player.car.record_distance(elapsed);
        self.computer.car.record_distance(elapsed);

        self.player.reveal_obstacles();
        self.computer.reveal_obstacles();

        self.computer.steer_around_obstacles();

        let player_bounds = self.player.car.bounds();
        if self
            .obstacles()
            .any(|obstacle| detect_collision(&player_bounds, &obstacle.bounds()))
        {
            self.finish(Outcome::Crashed);
        } else if self.player.car.has_finished() {
            self.finish(Outcome::PlayerFinished);
        } else if self.computer.car.has_finished() {
            self.finish(Outcome::ComputerFinished);
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.state = GameState::GameOver;
        self.outcome = Some(outcome);
        log::info!(
            "Round over: {:?} (you {:.2}, computer {:.2})",
            outcome,
            self.player.car.distance(),
            self.computer.car.distance()
        );
    }

    pub fn log_stats(&self) {
        let player = &self.player.car;
        let computer = &self.computer.car;
        log::debug!(
            "[{:?}/{:?}] you: x {} speed {:.2} distance {:.2} | computer: x {} speed {:.2} distance {:.2} | visible obstacles {}",
            self.state(),
            self.outcome(),
            player.x(),
            player.speed(),
            player.distance(),
            computer.x(),
            computer.speed(),
            computer.distance(),
            self.player.visible_obstacles() + self.computer.visible_obstacles()
        );
    }
}
