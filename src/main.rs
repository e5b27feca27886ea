//! Flip Man entry point
//!
//! Runs the frame loop headless with the demo input script: sample input,
//! tick the sim, hand the state to the render backend, sleep to cadence.
//! A graphical backend slots in by replacing the input source and renderer.

use std::path::Path;
use std::thread;
use std::time::Duration;

use flipman::platform::{FrameClock, InputSource, ScriptedInput};
use flipman::render::{HeadlessRenderer, RenderBackend, render_frame};
use flipman::sim::{InputSampler, SimState, build_level, tick};
use flipman::settings::Settings;

/// Target frame cadence for the headless loop
const FRAME_TIME: Duration = Duration::from_millis(16);

fn main() {
    env_logger::init();
    log::info!("Flip Man starting...");

    let settings = Settings::load(Path::new("flipman.json"));
    let walls = build_level(settings.screen_width, settings.screen_height);
    let mut state = SimState::new(walls, settings.screen_width);
    log::info!(
        "Level built: {} walls, screen {}x{}",
        state.walls.len(),
        settings.screen_width,
        settings.screen_height
    );

    let mut clock = FrameClock::new();
    let mut sampler = InputSampler::new();
    let mut input_source = ScriptedInput::demo();
    let mut renderer = HeadlessRenderer::new();

    run_loop(
        &mut state,
        &mut clock,
        &mut sampler,
        &mut input_source,
        &mut renderer,
    );

    log::info!(
        "Flip Man exiting after {} frames, player at ({:.1}, {:.1})",
        state.frame,
        state.player.rect.pos.x,
        state.player.rect.pos.y
    );
}

fn run_loop(
    state: &mut SimState,
    clock: &mut FrameClock,
    sampler: &mut InputSampler,
    input_source: &mut dyn InputSource,
    renderer: &mut dyn RenderBackend,
) {
    while state.running {
        let keys = input_source.poll();
        let input = sampler.sample(keys);

        // Raw elapsed seconds; tick applies the 50ms clamp itself
        let dt = clock.frame_dt();
        tick(state, &input, dt);

        render_frame(renderer, state);
        thread::sleep(FRAME_TIME);
    }
}
