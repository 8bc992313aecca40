use std::{
    io::{self, BufRead, IsTerminal, Write},
    path::Path,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};
use podium_core::{
    app::{LoadOutcome, ReaderSession, TickResult},
    input::debounce::{Clock, DEFAULT_DEBOUNCE_MS, DebouncedInput},
    render::find_preset,
    text_policy::{
        already_loaded_message, load_failed_message, loaded_message, reading_time_line,
        word_total_label,
    },
};

use cli::Cli;
use commands::Command;
use keys::{KeyQueue, MonotonicClock};
use terminal::TerminalRenderer;

#[path = "main/cli.rs"]
mod cli;
#[path = "main/commands.rs"]
mod commands;
#[path = "main/files.rs"]
mod files;
#[path = "main/keys.rs"]
mod keys;
#[path = "main/terminal.rs"]
mod terminal;

const TITLE: &str = "Podium";
const LOG_ENV: &str = "PODIUM_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

type Session<C = MonotonicClock> = ReaderSession<DebouncedInput<KeyQueue, C>>;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, DEFAULT_LOG_FILTER))
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let clear_screen = stdout.is_terminal();
    let mut renderer = TerminalRenderer::new(stdout.lock(), clear_screen);

    if cli.list_themes {
        renderer.themes()?;
        return Ok(());
    }

    let clock = MonotonicClock::start();
    let input = DebouncedInput::new(KeyQueue::default(), clock, DEFAULT_DEBOUNCE_MS);
    let mut session = ReaderSession::new(input, cli.reader_config(), TITLE);
    apply_cli_preferences(&mut session, &cli);

    if let Some(path) = cli.file.as_deref() {
        let source = files::read_source(path)?;
        session
            .load_document(&source.name, &source.bytes)
            .with_context(|| format!("Failed to open {}", path.display()))?;
    }

    if cli.summary {
        return print_summary(&session, &mut renderer);
    }

    info!(
        "podium: interactive session segments={} wpm={}",
        session.segment_count(),
        session.preferences().wpm
    );
    run_interactive(&mut session, &mut renderer, &clock, io::stdin().lock())
}

fn apply_cli_preferences(session: &mut Session, cli: &Cli) {
    if let Some(theme) = cli.theme.as_deref() {
        session.select_theme_preset(theme);
    }
    if let Some((background, foreground)) = cli.custom_colors() {
        session.set_custom_colors(background, foreground);
    }
    if let Some(wpm) = cli.wpm {
        session.set_reading_speed(wpm);
    }
    if let Some(px) = cli.font_size {
        session.set_font_size(px);
    }
    session.set_focus_mode(cli.focus);
}

fn print_summary<C, W>(session: &Session<C>, renderer: &mut TerminalRenderer<W>) -> Result<()>
where
    C: Clock,
    W: Write,
{
    renderer.status(&word_total_label(session.word_count()))?;
    renderer.status(&reading_time_line(session.reading_time()))?;
    Ok(())
}

/// What the loop does after a line has been handled.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Flow {
    Continue,
    Quit,
}

fn run_interactive<C, W, R>(
    session: &mut Session<C>,
    renderer: &mut TerminalRenderer<W>,
    clock: &C,
    input: R,
) -> Result<()>
where
    C: Clock,
    W: Write,
    R: BufRead,
{
    render(session, renderer)?;
    let _ = session.tick(clock.now_ms());

    let mut lines = input.lines();
    loop {
        renderer.prompt()?;
        let Some(line) = lines.next() else {
            debug!("podium: stdin closed");
            break;
        };
        let line = line.context("Failed to read from stdin")?;

        if execute(session, renderer, &line)? == Flow::Quit {
            break;
        }

        if session.tick(clock.now_ms()) == TickResult::RenderRequested {
            render(session, renderer)?;
        }
    }

    Ok(())
}

fn execute<C, W>(
    session: &mut Session<C>,
    renderer: &mut TerminalRenderer<W>,
    line: &str,
) -> Result<Flow>
where
    C: Clock,
    W: Write,
{
    let command = match commands::parse(line) {
        Ok(command) => command,
        Err(err) => {
            renderer.status(&err.to_string())?;
            return Ok(Flow::Continue);
        }
    };

    match command {
        Command::Key(event) => session.input_mut().inner_mut().push(event),
        Command::Open(path) => open(session, renderer, &path)?,
        Command::Theme(name) => {
            let known = find_preset(&name).is_some();
            let preset = session.select_theme_preset(&name);
            if !known {
                renderer.status(&format!("Unknown theme {name:?}, using {}.", preset.name))?;
            }
        }
        Command::Wpm(wpm) => {
            session.set_reading_speed(wpm);
        }
        Command::Size(px) => {
            session.set_font_size(px);
        }
        Command::Colors(background, foreground) => {
            session.set_custom_colors(background, foreground);
        }
        Command::Outline => renderer.outline(session.segments(), session.cursor())?,
        Command::Help => renderer.help()?,
        Command::Redraw => session.request_redraw(),
        Command::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

/// Loads another file. Failures are reported and leave the session as it was.
fn open<C, W>(
    session: &mut Session<C>,
    renderer: &mut TerminalRenderer<W>,
    path: &Path,
) -> Result<()>
where
    C: Clock,
    W: Write,
{
    let source = match files::read_source(path) {
        Ok(source) => source,
        Err(err) => {
            warn!("podium: open failed path={} error={err:#}", path.display());
            renderer.status(&format!("{err:#}"))?;
            return Ok(());
        }
    };

    match session.load_document(&source.name, &source.bytes) {
        Ok(LoadOutcome::Loaded { segment_count }) => {
            renderer.status(&loaded_message(&source.name, segment_count))?;
        }
        Ok(LoadOutcome::Unchanged { .. }) => {
            renderer.status(&already_loaded_message(&source.name))?;
        }
        Err(err) => renderer.status(&load_failed_message(&source.name, &err))?,
    }
    Ok(())
}

fn render<C, W>(session: &Session<C>, renderer: &mut TerminalRenderer<W>) -> Result<()>
where
    C: Clock,
    W: Write,
{
    let mut result = Ok(());
    session.with_screen(|screen| result = renderer.render(screen));
    result.context("Failed to write to the terminal")
}

#[cfg(test)]
mod tests {
    use super::*;
    use podium_core::render::{Rgb, ViewMode};
    use std::{cell::Cell, fs, rc::Rc};

    /// Test clock: reads `now`, then moves it forward by `step_ms`.
    #[derive(Clone)]
    struct SteppingClock {
        now: Rc<Cell<u64>>,
        step_ms: u64,
    }

    impl SteppingClock {
        fn frozen() -> Self {
            Self::stepping(0)
        }

        fn stepping(step_ms: u64) -> Self {
            Self {
                now: Rc::new(Cell::new(1_000)),
                step_ms,
            }
        }
    }

    impl Clock for SteppingClock {
        fn now_ms(&self) -> u64 {
            let now = self.now.get();
            self.now.set(now + self.step_ms);
            now
        }
    }

    fn session_with(clock: SteppingClock) -> Session<SteppingClock> {
        let input = DebouncedInput::new(KeyQueue::default(), clock, DEFAULT_DEBOUNCE_MS);
        let mut session = ReaderSession::new(input, Default::default(), TITLE);
        session
            .load_document("show.md", b"One [beat]\n\nTwo\n\nThree")
            .unwrap();
        session
    }

    fn session() -> Session<SteppingClock> {
        session_with(SteppingClock::frozen())
    }

    fn run(session: &mut Session<SteppingClock>, script: &str) -> String {
        let clock = SteppingClock::frozen();
        let mut renderer = TerminalRenderer::new(Vec::new(), false);
        run_interactive(session, &mut renderer, &clock, script.as_bytes()).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn keys_drive_navigation() {
        let mut session = session();
        let output = run(&mut session, "n\nf\n");
        assert_eq!(session.cursor(), 1);
        assert!(output.contains("Segment 1 of 3"));
        assert!(output.contains("Segment 2 of 3"));
        assert_eq!(session.view_mode(), ViewMode::Focus);
    }

    #[test]
    fn rapid_repeats_are_debounced() {
        let mut session = session();
        run(&mut session, "n\nn\nn\n");
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn repeats_outside_window_pass() {
        let mut session = session_with(SteppingClock::stepping(DEFAULT_DEBOUNCE_MS));
        run(&mut session, "n\nn\nn\n");
        assert_eq!(session.cursor(), 2);
    }

    #[test]
    fn argument_commands_update_preferences() {
        let mut session = session();
        let output = run(
            &mut session,
            "wpm 900\nsize 12\ntheme SEPIA\ncolors #000000 #FFFFFF\nbogus\n",
        );
        assert_eq!(session.preferences().wpm, 500);
        assert_eq!(session.style().font_size_px, 12);
        assert_eq!(session.style().theme, "sepia");
        assert_eq!(session.style().colors.background, Rgb::new(0, 0, 0));
        assert!(output.contains("unknown command \"bogus\""));
    }

    #[test]
    fn unknown_theme_is_reported() {
        let mut session = session();
        let output = run(&mut session, "theme neon\n");
        assert!(output.contains("Unknown theme \"neon\", using Light."));
        assert_eq!(session.style().theme, "light");
    }

    #[test]
    fn quit_stops_reading_input() {
        let mut session = session();
        run(&mut session, "quit\nn\n");
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn open_switches_documents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("next.md");
        fs::write(&path, "A\n\nB").unwrap();

        let mut session = session();
        let output = run(&mut session, &format!("n\nopen {}\n", path.display()));
        assert!(output.contains("Loaded 'next.md' (2 segments)."));
        assert_eq!(session.document().map(|doc| doc.name()), Some("next.md"));
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn reopening_same_name_reports_no_change() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("v2");
        fs::create_dir(&nested).unwrap();
        let path = nested.join("show.md");
        fs::write(&path, "New\n\nContent\n\nHere\n\nFour").unwrap();

        let mut session = session();
        let output = run(&mut session, &format!("n\nopen {}\n", path.display()));
        assert!(output.contains("'show.md' is already loaded; nothing changed."));
        assert!(!output.contains("Loaded 'show.md'"));
        assert_eq!(session.segment(0), Some("One [beat]"));
        assert_eq!(session.segment_count(), 3);
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn bad_open_keeps_current_document() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.md");
        fs::write(&bad, [0xC3, 0x28]).unwrap();
        let missing = dir.path().join("missing.md");

        let mut session = session();
        let output = run(
            &mut session,
            &format!("n\nopen {}\nopen {}\n", bad.display(), missing.display()),
        );
        assert!(output.contains("Could not read 'bad.md'"));
        assert!(output.contains("missing.md"));
        assert_eq!(session.document().map(|doc| doc.name()), Some("show.md"));
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn outline_lists_segments() {
        let mut session = session();
        let output = run(&mut session, "outline\n");
        assert!(output.contains(">   1. One [beat]"));
        assert!(output.contains("    3. Three"));
    }

    #[test]
    fn summary_prints_totals() {
        let session = session();
        let mut renderer = TerminalRenderer::new(Vec::new(), false);
        print_summary(&session, &mut renderer).unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(
            output,
            "Total words (annotations excluded): 3\nAbout 2 seconds\n"
        );
    }
}
