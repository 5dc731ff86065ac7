use std::collections::HashMap;
use std::rc::Rc;

use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator, TextureQuery};
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::{Window, WindowContext};

use crate::car::Car;
use crate::config::{GameConfig, Sprite};
use crate::game::Game;
use crate::geometry::Bounds;
use crate::obstacle::Obstacle;

const STATS_COLOR: Color = Color::RGB(255, 255, 255);
const BANNER_COLOR: Color = Color::RGB(255, 0, 0);
const STATS_LINE_GAP: i32 = 10;

/// Draws the current frame. Missing textures or fonts only skip the
/// corresponding draw.
pub struct Renderer<'a> {
    texture_creator: &'a TextureCreator<WindowContext>,
    textures: HashMap<Sprite, Rc<Texture<'a>>>,
    font: Option<Font<'a, 'static>>,
    banner_font: Option<Font<'a, 'static>>,
    width: u32,
    height: u32,
}

impl<'a> Renderer<'a> {
    pub fn new(
        texture_creator: &'a TextureCreator<WindowContext>,
        ttf: &'a Sdl2TtfContext,
        config: &GameConfig,
    ) -> Renderer<'a> {
        let mut textures = HashMap::new();
        for sprite in Sprite::ALL {
            let path = config.sprite_path(sprite);
            match texture_creator.load_texture(&path) {
                Ok(texture) => {
                    textures.insert(sprite, Rc::new(texture));
                }
                Err(e) => log::warn!("Failed to load texture {}: {}", path.display(), e),
            }
        }

        let font_path = config.font_path();
        let load_font = |size: u16| match ttf.load_font(&font_path, size) {
            Ok(font) => Some(font),
            Err(e) => {
                log::warn!("Failed to load font {} ({}pt): {}", font_path.display(), size, e);
                None
            }
        };

        Renderer {
            texture_creator,
            font: load_font(config.font_size),
            banner_font: load_font(config.banner_font_size),
            textures,
            width: config.window_width,
            height: config.window_height,
        }
    }

    /// Shared handle to a sprite's texture; every obstacle draws through the
    /// same one.
    fn texture(&self, sprite: Sprite) -> Option<Rc<Texture<'a>>> {
        self.textures.get(&sprite).cloned()
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, game: &Game) {
        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();

        if let Err(e) = self.draw_backdrop(canvas, game.backdrop_scale()) {
            log::warn!("Backdrop render failed: {}", e);
        }

        for car in game.cars() {
            if let Err(e) = self.draw_car(canvas, car) {
                log::warn!("Render of {} car failed: {}", car.name(), e);
            }
        }

        let player = &game.player().car;
        let computer = &game.computer().car;
        if let Err(e) = self.draw_statistics(canvas, 200, 64, player) {
            log::warn!("Statistics render failed: {}", e);
        }
        if let Err(e) = self.draw_statistics(canvas, 580, 64, computer) {
            log::warn!("Statistics render failed: {}", e);
        }

        if let Some(texture) = self.texture(Obstacle::SPRITE) {
            for obstacle in game.obstacles().filter(|o| o.is_visible()) {
                if let Err(e) = canvas.copy(&texture, None, Some(to_rect(&obstacle.bounds()))) {
                    log::warn!("Obstacle render failed: {}", e);
                }
            }
        }

        if let Some(banner) = game.banner() {
            if let Err(e) = self.draw_banner(canvas, banner) {
                log::warn!("Banner render failed: {}", e);
            }
        }

        canvas.present();
    }

    fn draw_backdrop(&self, canvas: &mut Canvas<Window>, scale: f32) -> Result<(), String> {
        let Some(texture) = self.texture(Sprite::Backdrop) else {
            return Ok(());
        };
        let height = (self.height as f32 * scale) as u32;
        let offset_y = (self.height as i32 - height as i32) / 2;
        canvas.copy(&texture, None, Some(Rect::new(0, offset_y, self.width, height)))
    }

    fn draw_car(&self, canvas: &mut Canvas<Window>, car: &Car) -> Result<(), String> {
        match self.texture(car.sprite()) {
            Some(texture) => canvas.copy(&texture, None, Some(to_rect(&car.bounds()))),
            None => Ok(()),
        }
    }

    fn draw_statistics(
        &self,
        canvas: &mut Canvas<Window>,
        x: i32,
        y: i32,
        car: &Car,
    ) -> Result<(), String> {
        let Some(font) = &self.font else {
            return Ok(());
        };
        let (speed_line, distance_line) = statistics_lines(car.name(), car.speed(), car.distance());

        let speed_height = self.draw_text(canvas, font, &speed_line, STATS_COLOR, x, y)?;
        self.draw_text(
            canvas,
            font,
            &distance_line,
            STATS_COLOR,
            x,
            y + speed_height as i32 + STATS_LINE_GAP,
        )?;
        Ok(())
    }

    fn draw_banner(&self, canvas: &mut Canvas<Window>, text: &str) -> Result<(), String> {
        let Some(font) = &self.banner_font else {
            return Ok(());
        };
        let (width, height) = font.size_of(text).map_err(|e| e.to_string())?;
        let x = (self.width as i32 - width as i32) / 2;
        let y = (self.height as i32 - height as i32) / 2;
        self.draw_text(canvas, font, text, BANNER_COLOR, x, y)?;
        Ok(())
    }

    /// Returns the rendered line height.
    fn draw_text(
        &self,
        canvas: &mut Canvas<Window>,
        font: &Font,
        text: &str,
        color: Color,
        x: i32,
        y: i32,
    ) -> Result<u32, String> {
        let surface = font.render(text).solid(color).map_err(|e| e.to_string())?;
        let texture = self
            .texture_creator
            .create_texture_from_surface(&surface)
            .map_err(|e| e.to_string())?;

        let TextureQuery { width, height, .. } = texture.query();
        canvas.copy(&texture, None, Some(Rect::new(x, y, width, height)))?;
        Ok(height)
    }
}

fn to_rect(bounds: &Bounds) -> Rect {
    Rect::new(bounds.left(), bounds.top(), bounds.width, bounds.height)
}

/// Speed and distance are floored to two decimals before display.
pub fn statistics_lines(name: &str, speed: f32, distance: f32) -> (String, String) {
    let floor2 = |value: f32| (value * 100.0).floor() / 100.0;
    (
        format!("{} Speed: {:.2}", name, floor2(speed)),
        format!("{} Distance: {:.2}", name, floor2(distance)),
    )
}
