//! fxpanel-demo
//!
//! Host simulation of the effect editor. Wires the three library crates
//! into the same tick loop the panel firmware runs:
//!
//! 1. The keypad source scans the key state and turns held keys into
//!    events through its repeaters.
//! 2. The controller folds the batch into the effect and accumulates the
//!    dirty mask.
//! 3. The pending mask is taken and only the dirty regions are redrawn
//!    into a 240×280 RGB565 framebuffer.
//!
//! Keys come from a scripted timeline instead of hardware, and the loop
//! runs on a simulated clock unless `--realtime` is given.

mod chorus;
mod error;
mod framebuffer;
mod script;
mod stats;

use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{debug, info, warn};

use fxpanel::{apply_batch, Effect};
use fxpanel_display::{render_editor, EgCanvas, Theme};
use fxpanel_input::{InputConfig, InputSource, KeypadInput};

use crate::chorus::build_chorus;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::script::{ScriptedKeys, CHORUS_TOUR};
use crate::stats::LoopStats;

#[derive(Debug, Parser)]
#[command(name = "fxpanel-demo", version, about = "Scripted run of the chorus editor")]
struct Args {
    /// Stop after this many ticks even if the script has not quit.
    #[arg(long, default_value_t = 1000)]
    ticks: u32,
    /// Editor frame rate.
    #[arg(long, default_value_t = 15)]
    fps: u32,
    /// Loops per statistics window.
    #[arg(long, default_value_t = 15, value_name = "LOOPS")]
    report_every: u32,
    /// Sleep for the frame period between ticks.
    #[arg(long)]
    realtime: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let theme = Theme {
        fps: args.fps,
        ..Theme::default()
    };
    let frame_ms = theme.frame_period_ms();
    let dt_ms = frame_ms as u32;

    let mut fx = build_chorus()?;
    info!(
        "{}: {} pages, {} parameters, {} fps ({} ms/frame)",
        fx.name,
        fx.page_count(),
        fx.params.len(),
        theme.fps,
        frame_ms
    );

    let config = InputConfig::for_fps(theme.fps as f32);
    let keys = ScriptedKeys::new(CHORUS_TOUR);
    info!("key script spans {} ticks", keys.length());
    let mut input = KeypadInput::new(keys, &config);
    let mut canvas = EgCanvas::new(Framebuffer::new(theme.width as u32, theme.height as u32));
    let mut stats = LoopStats::new(args.report_every);

    let mut tick = 0;
    let mut quit = false;
    while tick < args.ticks {
        tick += 1;

        input.pump()?;
        let events = input.get_events(dt_ms);
        stats.add_events(events.len());
        for event in &events {
            debug!("tick {tick}: {}", event.name());
        }

        let applied = apply_batch(&mut fx, events);

        let dirty = fx.take_dirty();
        if !dirty.is_empty() {
            let t0 = Instant::now();
            render_editor(&mut canvas, &fx, &theme, dirty);
            stats.add_render(t0.elapsed());
            debug!("tick {tick}: redrew {:#010b}", dirty.bits());
            if let Some(fault) = canvas.take_fault() {
                warn!("tick {tick}: {fault}");
            }
        }

        if let Some(report) = stats.tick_loop() {
            info!("{report}");
        }

        if !applied.keep_running {
            info!("quit requested at tick {tick}");
            quit = true;
            break;
        }

        if args.realtime {
            thread::sleep(Duration::from_millis(frame_ms));
        }
    }

    let tail = stats.flush();
    if tail.loops > 0 {
        info!("{tail}");
    }
    let keys = input.scanner();
    if !quit {
        if keys.finished() {
            warn!("key script ran out without a quit");
        } else {
            warn!("stopped after {} scans with the key script unfinished", keys.scans());
        }
    }
    summarize(&fx, &theme, canvas.target());
    Ok(())
}

fn summarize(fx: &Effect, theme: &Theme, fb: &Framebuffer) {
    info!(
        "final: page {} ({}), {}, frame checksum {:08x}, {} background pixels",
        fx.page_index(),
        fx.current_page().title,
        if fx.enabled { "active" } else { "bypassed" },
        fb.checksum(),
        fb.count(theme.palette.background)
    );
    for (key, value) in fx.params.iter() {
        info!("  {key:<7} = {}", value.as_int());
    }
}
