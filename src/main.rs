//! Type Climber entry point
//!
//! Terminal shell around the engine: raw mode, event thread, 60 FPS render loop.

use std::io::{BufWriter, Write, stdout};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    ExecutableCommand, cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
};

use type_climber::logging;
use type_climber::{DummyEngine, Engine, Game, InputEvent, Settings};

const FRAME: Duration = Duration::from_micros(16_667); // 60 FPS, matches SIM_DT
/// Run the call-logging engine instead of the game
const DUMMY_FLAG: &str = "--dummy";

/// Map a terminal key press to an engine event
fn translate_key(key: &KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Quit)
        }
        KeyCode::Esc => Some(InputEvent::Escape),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            None
        }
        KeyCode::Char(' ') => Some(InputEvent::Space),
        KeyCode::Char(ch) => Some(InputEvent::Type(ch)),
        _ => None,
    }
}

/// Write a frame, turning bare newlines into CR LF for raw mode
fn draw<W: Write>(out: &mut W, frame: &str) -> std::io::Result<()> {
    out.write_all(frame.replace('\n', "\r\n").as_bytes())?;
    out.flush()
}

fn run<W: Write, E: Engine>(out: &mut W, game: &mut E, rx: &mpsc::Receiver<Event>) -> anyhow::Result<()> {
    let (width, height) = terminal::size()?;
    game.start(i32::from(width), i32::from(height));

    while !game.should_quit() {
        let frame_start = Instant::now();

        // Drain all pending input without blocking
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(key) => {
                    if let Some(event) = translate_key(&key) {
                        game.process_input(event);
                    }
                }
                Event::Resize(w, h) => game.update_dimensions(i32::from(w), i32::from(h)),
                _ => {}
            }
            if game.should_quit() {
                return Ok(());
            }
        }

        draw(out, &game.render())?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let settings = Settings::load();

    if let Some(path) = settings.log_file.as_deref() {
        if let Err(e) = logging::init_file_logger(path) {
            eprintln!("Continuing without debug log: {e:#}");
        }
    }
    log::info!("Type Climber starting...");

    if std::env::args().skip(1).any(|arg| arg == DUMMY_FLAG) {
        log::info!("Running call-logging engine");
        let mut engine = DummyEngine::new();
        with_terminal(|out, rx| run(out, &mut engine, rx))?;
        println!("Dummy session ended");
        return Ok(());
    }

    let mut game = Game::new(&settings);
    let result = with_terminal(|out, rx| run(out, &mut game, rx));

    let stats = game.stats();
    log::info!(
        "Exiting: {}",
        serde_json::to_string(&stats).unwrap_or_else(|_| format!("{stats:?}"))
    );

    result?;
    println!("Thanks for playing Type Climber!");
    println!(
        "Final Score: {} ({} words, {:.1} wpm)",
        stats.score, stats.words_typed, stats.wpm
    );
    Ok(())
}

/// Enter raw mode and the alternate screen, feed terminal events to `body`,
/// and restore the terminal however `body` ends
fn with_terminal<F>(body: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut BufWriter<std::io::Stdout>, &mpsc::Receiver<Event>) -> anyhow::Result<()>,
{
    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicated thread for blocking event reads
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = body(&mut out, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    result
}
