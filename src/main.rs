mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::panic;
use std::rc::Rc;
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind,
        KeyboardEnhancementFlags, MouseEvent, MouseEventKind, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use sprite_explosion::assets::TextureSequence;
use sprite_explosion::audio::{Audio, Bell, Mute};
use sprite_explosion::compute::{drain_sounds, load_explosion_textures_from, setup, shoot, tick};
use sprite_explosion::config::{Settings, FRAME};
use sprite_explosion::entities::World;
use sprite_explosion::input::{self, command_for, Command, Direction};
use sprite_explosion::lighting::LightLayer;

/// Terminals without key-release reporting only repeat held keys.  A
/// direction counts as released once it has not repeated for this many
/// frames, which spans the OS initial key-repeat delay at 60 FPS.
const HOLD_WINDOW: u64 = 30;

fn init_tracing(settings: &Settings) -> Result<()> {
    let file = File::create(&settings.log_file)
        .with_context(|| format!("creating log file {}", settings.log_file.display()))?;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .compact()
        .init();

    // Leave the alternate screen before the default hook prints, so the
    // panic message lands on a usable terminal.
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_terminal(&mut stdout(), true);
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
        default_hook(info);
    }));
    Ok(())
}

/// Undo everything `main` did to the terminal.  Errors are ignored since
/// this also runs while unwinding.
fn restore_terminal<W: Write>(out: &mut W, pop_keyboard_flags: bool) {
    if pop_keyboard_flags {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

fn new_rng(settings: &Settings) -> StdRng {
    match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Everything queued on `rx` without blocking, or `None` once the input
/// thread has gone and nothing is left to read.
fn pending_events<T>(rx: &mpsc::Receiver<T>) -> Option<Vec<T>> {
    let mut events = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(ev) => events.push(ev),
            Err(TryRecvError::Empty) => return Some(events),
            Err(TryRecvError::Disconnected) if events.is_empty() => return None,
            Err(TryRecvError::Disconnected) => return Some(events),
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Key presses and releases are forwarded to the movement rules as they
/// arrive.  On terminals that cannot report releases, `key_frame` records
/// when each direction was last seen and a release is synthesised once it
/// goes stale.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    settings: &Settings,
    textures: Rc<TextureSequence>,
    keyboard_enhanced: bool,
) -> Result<()> {
    let mut rng = new_rng(settings);
    let mut world: World = setup(Rc::clone(&textures), &mut rng);
    let mut audio: Box<dyn Audio> = if settings.sound {
        Box::new(Bell::new(stdout()))
    } else {
        Box::new(Mute)
    };
    let mut light = settings.lighting.then(LightLayer::default);

    let (mut cols, mut rows) = terminal::size()?;
    let mut key_frame: HashMap<Direction, u64> = HashMap::new();
    let mut frame: u64 = 0;
    let mut last_tick = Instant::now();

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        let Some(events) = pending_events(rx) else {
            warn!(score = world.score, "input closed; stopping");
            return Ok(());
        };
        for ev in events {
            match ev {
                Event::Key(KeyEvent { code, kind, modifiers, .. }) => {
                    let Some(command) = command_for(code, modifiers) else {
                        continue;
                    };
                    match (kind, command) {
                        (KeyEventKind::Press, Command::Quit) => {
                            info!(score = world.score, "quit");
                            return Ok(());
                        }
                        (KeyEventKind::Press, Command::Restart) => {
                            info!(score = world.score, "session restarted");
                            world = setup(Rc::clone(&textures), &mut rng);
                            key_frame.clear();
                        }
                        (KeyEventKind::Press, Command::Shoot) => {
                            shoot(&mut world);
                        }
                        (KeyEventKind::Press, Command::Move(dir)) => {
                            key_frame.insert(dir, frame);
                            input::press(&mut world.player, dir);
                        }
                        (KeyEventKind::Repeat, Command::Move(dir)) => {
                            key_frame.insert(dir, frame);
                        }
                        (KeyEventKind::Release, Command::Move(dir)) => {
                            key_frame.remove(&dir);
                            input::release(&mut world.player, dir);
                        }
                        _ => {}
                    }
                }
                Event::Mouse(MouseEvent { kind: MouseEventKind::Down(_), .. }) => {
                    shoot(&mut world);
                }
                Event::Resize(c, r) => {
                    cols = c;
                    rows = r;
                }
                _ => {}
            }
        }

        if !keyboard_enhanced {
            let stale: Vec<Direction> = key_frame
                .iter()
                .filter(|&(_, &last)| frame.saturating_sub(last) > HOLD_WINDOW)
                .map(|(&dir, _)| dir)
                .collect();
            for dir in stale {
                key_frame.remove(&dir);
                input::release(&mut world.player, dir);
            }
        }

        let delta_time = last_tick.elapsed().as_secs_f32();
        last_tick = Instant::now();
        tick(&mut world, delta_time);

        for cue in drain_sounds(&mut world) {
            audio.play(cue);
        }

        if let Some(light) = light.as_mut() {
            light.follow(world.player.body.center_x, world.player.body.center_y);
        }
        display::render(out, &world, cols, rows, light.as_ref())?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    let settings = Settings::from_env();
    init_tracing(&settings)?;
    info!(?settings, "starting");

    // Asset failures abort before the terminal is touched.
    let textures = Rc::new(
        load_explosion_textures_from(&settings.asset_dir).context("loading explosion frames")?,
    );

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    let flags_pushed = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    let keyboard_enhanced =
        flags_pushed && terminal::supports_keyboard_enhancement().unwrap_or(false);
    if !keyboard_enhanced {
        warn!("terminal does not report key releases; using hold window");
    }

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(err) => {
                warn!(error = %err, "input thread stopped");
                break;
            }
        }
    });

    let result = game_loop(&mut out, &rx, &settings, textures, keyboard_enhanced);

    restore_terminal(&mut out, flags_pushed);

    if let Err(err) = &result {
        tracing::error!(error = %err, "game loop failed");
    }
    info!("shutdown");
    result
}
