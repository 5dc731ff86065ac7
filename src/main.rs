use anyhow::{Context, Result};
use sdl2::image::InitFlag;
use std::time::Instant;

mod car;
mod config;
mod constants;
mod game;
mod geometry;
mod input;
mod obstacle;
mod renderer;

use config::GameConfig;
use constants::{FRAME_DURATION, STATS_LOG_INTERVAL};
use game::Game;
use renderer::Renderer;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::from_env();
    log::info!("Evador starting, assets from {}", config.asset_dir.display());

    let sdl_context = sdl2::init()
        .map_err(anyhow::Error::msg)
        .context("SDL could not initialize")?;
    let video_subsystem = sdl_context
        .video()
        .map_err(anyhow::Error::msg)
        .context("SDL video subsystem could not initialize")?;
    let _image_context = sdl2::image::init(InitFlag::PNG)
        .map_err(anyhow::Error::msg)
        .context("SDL_image could not initialize")?;
    let ttf_context = sdl2::ttf::init().context("SDL_ttf could not initialize")?;

    let window = video_subsystem
        .window(&config.title, config.window_width, config.window_height)
        .position_centered()
        .build()
        .context("Window could not be created")?;

    let mut canvas = window
        .into_canvas()
        .accelerated()
        .present_vsync()
        .build()
        .context("Renderer could not be created")?;
    let texture_creator = canvas.texture_creator();

    let renderer = Renderer::new(&texture_creator, &ttf_context, &config);
    let mut game = Game::new(&config);
    let mut event_pump = sdl_context
        .event_pump()
        .map_err(anyhow::Error::msg)
        .context("SDL event pump unavailable")?;

    input::print_controls();

    let mut last_frame = Instant::now();
    let mut last_stats = Instant::now();

    while !game.is_quit() {
        let now = Instant::now();
        let elapsed = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        for event in event_pump.poll_iter() {
            game.handle_action(input::process_event(&event));
        }

        game.tick(elapsed);
        renderer.render(&mut canvas, &game);

        if last_stats.elapsed() >= STATS_LOG_INTERVAL {
            game.log_stats();
            last_stats = Instant::now();
        }

        let frame_time = now.elapsed();
        if frame_time < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - frame_time);
        }
    }

    log::info!("Evador shutting down");
    Ok(())
}
