// What you SEE:
// • A heart-shaped cloud of ~13k tiny squares that swells and contracts.
// • A soft halo of glow particles around the outline, widest at the beat peaks.
// • "LOVE YOU" centered over the heart; a small HUD line with frame + FPS.
// • ESC (or closing the window) quits.

mod config;
mod draw;
mod error;
mod heart;
mod types;

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;

use config::{CANVAS_HEIGHT, CANVAS_WIDTH, FRAME_COUNT, HEART_COLOR, SEED, TICK};
use draw::{Drawer, draw_text_5x7, draw_text_5x7_scaled, fill_square, text_width_5x7};
use error::Error;
use heart::Heart;
use types::FrameBuffer;

fn main() -> Result<(), Error> {
    /* --- Window + screen buffer ---
       Visual: a black 640x480 window appears. */
    let mut drawer = Drawer::new("LOVE", CANVAS_WIDTH, CANVAS_HEIGHT)?;
    let mut screen = FrameBuffer::new(CANVAS_WIDTH, CANVAS_HEIGHT);

    /* --- Precompute the whole animation ---
       All randomness is consumed here; playback is a pure lookup. */
    let mut rng = StdRng::seed_from_u64(SEED);
    let started = Instant::now();
    let heart = Heart::new(FRAME_COUNT, &mut rng)?;
    println!(
        "generated {} frames in {:?}",
        heart.frame_count(),
        started.elapsed()
    );

    /* --- HUD / FPS bookkeeping --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS: 0.0");

    /* --- Animation clock ---
       The display refreshes at ~60 fps; the heart only steps every TICK. */
    let mut frame: usize = 0;
    let mut last_tick = Instant::now();

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();
        if now.duration_since(last_tick) >= TICK {
            frame += 1; // playback wraps modulo FRAME_COUNT inside `frame()`
            last_tick = now;
        }

        /* 1) Current frame of the heart, one filled square per particle. */
        screen.clear();
        for p in heart.frame(frame) {
            fill_square(&mut screen, p.x as i32, p.y as i32, p.size, HEART_COLOR);
        }

        /* 2) Centered label over the heart, double-scale glyphs. */
        let label = "LOVE YOU";
        let lx = (CANVAS_WIDTH as i32 - text_width_5x7(label, 2)) / 2;
        let ly = (CANVAS_HEIGHT as i32 - 7 * 2) / 2;
        draw_text_5x7_scaled(&mut screen, lx, ly, label, HEART_COLOR, 2);

        /* 3) HUD: current frame + FPS, top-left. */
        let hud = format!(
            "FRAME: {:02}/{} | {}",
            frame % FRAME_COUNT,
            FRAME_COUNT,
            hud_fps_text
        );
        draw_text_5x7(&mut screen, 8, 8, &hud, 0x00FF_FFFF);

        /* 4) Present to the window (this is when the on-screen image updates). */
        drawer.present(&screen)?;

        /* 5) FPS counter (prints to terminal + HUD once per second). */
        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            println!("FPS: {fps:.1}");
            hud_fps_text = format!("FPS: {fps:.1}");
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
