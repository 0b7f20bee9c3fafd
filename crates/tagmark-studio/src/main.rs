//! Headless tag demo.
//!
//! Drives one `CheckableTag` through a scripted sequence of clicks, sampling
//! frames at 60 Hz, and logs what each frame would draw. Pass a TTF/OTF path
//! as the first argument to measure with a real font.
//!
//!     RUST_LOG=debug cargo run -p tagmark-studio -- /path/to/font.ttf

use std::time::{Duration, Instant};

use anyhow::Context;
use tagmark_engine::logging::{init_logging, LoggingConfig};
use tagmark_engine::scene::{DrawCmd, DrawList};
use tagmark_engine::time::FrameClock;
use tagmark_ui::prelude::*;

const FRAME: Duration = Duration::from_micros(16_667);
const VIEWPORT: Vec2 = Vec2::new(100.0, 40.0);
/// Frames at which a click lands: check, re-toggle mid-flight, check again.
const CLICKS: [u64; 3] = [2, 5, 14];

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let mut scene = UiScene::new();
    let font = match std::env::args().nth(1) {
        Some(path) => {
            let bytes = std::fs::read(&path).with_context(|| format!("reading font {path}"))?;
            Some(scene.load_font(&bytes).with_context(|| format!("parsing font {path}"))?)
        }
        None => system_font(&mut scene),
    };

    let mut tag = CheckableTag::new("Rust")
        .density(2.0)
        .text_colors(
            ColorStateList::new(Color::from_rgb_hex(0x555555))
                .with(StateSelector::any().checked(true), Color::WHITE),
        )
        .on_change(|v| log::info!("on_change: {v}"));
    if let Some(font) = font {
        tag = tag.font(font);
    }
    let mut root: Element = tag.into();

    let start = Instant::now();
    let mut clock = FrameClock::starting_at(start);
    let last_click = CLICKS.iter().copied().max().unwrap_or(0);

    for i in 0u32.. {
        let ft = clock.tick_at(start + FRAME * i);
        let input = UiInput {
            mouse_pos: Vec2::new(50.0, 20.0),
            mouse_clicked: CLICKS.contains(&ft.frame_index),
            ..UiInput::default()
        };
        let list = scene.frame(&mut root, VIEWPORT, &input, ft.now);
        log_frame(ft.frame_index, list);

        if ft.frame_index > last_click && !scene.needs_redraw() {
            log::info!("settled after {} frames", ft.frame_index + 1);
            break;
        }
    }
    Ok(())
}

fn log_frame(index: u64, list: &mut DrawList) {
    let mut mark = 0.0;
    let mut label_x = None;
    for cmd in list.iter_in_paint_order() {
        match cmd {
            DrawCmd::Stroke(s) => mark = s.path.length(),
            DrawCmd::Text(t) => label_x = Some(t.origin.x),
        }
    }
    match label_x {
        Some(x) => log::info!("frame {index:>3}: label left {x:6.2}  mark {mark:5.2}"),
        None => log::info!("frame {index:>3}: mark {mark:5.2}"),
    }
}

fn system_font(scene: &mut UiScene) -> Option<FontId> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find_map(|p| {
        let bytes = std::fs::read(p).ok()?;
        match scene.load_font(&bytes) {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("{p}: {e}");
                None
            }
        }
    })
    .or_else(|| {
        log::info!("no system font found; measuring with fallback metrics");
        None
    })
}
