use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use ratatui::{backend::TermionBackend, Terminal};
use std::fs::OpenOptions;
use std::io::{self, IsTerminal, Write};
use std::sync::Mutex;
use std::time::Duration;
use termion::raw::{IntoRawMode, RawTerminal};
use termion::screen::{AlternateScreen, IntoAlternateScreen};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use vectorcraft::config::Config;
use vectorcraft::document::{parse_address, project, set_attribute};
use vectorcraft::editor::session::EditorSession;
use vectorcraft::editor::state::{parse_attribute_input, EditorState, MessageLevel};
use vectorcraft::file::external::resolve_editor_command;
use vectorcraft::file::loader::{load_svg_file, load_svg_from_stdin};
use vectorcraft::input::InputHandler;
use vectorcraft::theme::get_builtin_theme;
use vectorcraft::ui::UI;

/// Environment variable holding the log filter, e.g. `VECTORCRAFT_LOG=debug`.
const LOG_ENV: &str = "VECTORCRAFT_LOG";

type Tui = Terminal<TermionBackend<AlternateScreen<RawTerminal<io::Stdout>>>>;

const SAMPLE_DOCUMENT: &str = concat!(
    "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 100 100\">",
    "<rect id=\"background\" x=\"0\" y=\"0\" width=\"100\" height=\"100\" fill=\"#f8fafc\"/>",
    "<g id=\"shapes\">",
    "<circle cx=\"30\" cy=\"30\" r=\"15\" fill=\"#3b82f6\"/>",
    "<path d=\"M 10 80 L 50 60 Q 70 90 90 70\" fill=\"none\" stroke=\"#111827\" stroke-width=\"2\"/>",
    "</g>",
    "</svg>"
);

/// VectorCraft - A terminal-based structural SVG editor
#[derive(Parser)]
#[command(name = "vectorcraft")]
#[command(version)]
#[command(about = "A terminal-based structural SVG editor", long_about = None)]
struct Cli {
    /// SVG file to edit (omit to read from stdin if piped, or open a sample document if interactive)
    file: Option<String>,

    /// Theme name (overrides the config file)
    #[arg(short, long)]
    theme: Option<String>,

    /// Print the structure projection as JSON and exit
    #[arg(long)]
    dump_structure: bool,

    /// Set an attribute without opening the editor: ADDRESS:NAME=VALUE
    /// (e.g. `0.1:fill=#ff0000`, `.:width=200`). Repeatable; the result goes to stdout.
    #[arg(long = "set", value_name = "ADDRESS:NAME=VALUE")]
    set: Vec<String>,
}

/// Set up a panic hook that restores the terminal before displaying panic information.
///
/// This ensures that panics are visible even when the terminal is in raw mode with alternate screen.
fn setup_panic_hook() {
    use std::panic;

    // Take the default panic hook so we can call it after restoration
    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Use stderr to avoid interfering with stdout pipes
        let _ = write!(io::stderr(), "{}", termion::screen::ToMainScreen);
        let _ = write!(io::stderr(), "{}", termion::cursor::Show);
        let _ = io::stderr().flush();

        default_panic(panic_info);
    }));
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Logs to stderr; used when no terminal UI is drawn.
fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .init();
}

/// Logs to `vectorcraft.log` in the config directory while the UI owns the
/// terminal. Logging stays off if the file cannot be opened.
fn init_file_logging() {
    let Some(dir) = Config::config_dir() else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("vectorcraft.log"))
    else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

/// Splits `ADDRESS:NAME=VALUE`.
fn parse_set_arg(arg: &str) -> Result<(Vec<usize>, &str, &str)> {
    let (address, assignment) = arg
        .split_once(':')
        .ok_or_else(|| anyhow!("--set expects ADDRESS:NAME=VALUE, got {:?}", arg))?;
    let address =
        parse_address(address).ok_or_else(|| anyhow!("Invalid address: {:?}", address))?;
    let (name, value) = parse_attribute_input(assignment)?;
    Ok((address, name, value))
}

/// Non-interactive mode: apply `--set` edits and/or dump the structure.
fn run_headless(cli: &Cli, mut text: String) -> Result<()> {
    for arg in &cli.set {
        let (address, name, value) = parse_set_arg(arg)?;
        let updated = set_attribute(&text, &address, name, value);
        if updated == text {
            warn!("--set {} changed nothing", arg);
        }
        text = updated;
    }

    let mut stdout = io::stdout().lock();
    if cli.dump_structure {
        let Some(structure) = project(&text) else {
            bail!("Document is not well-formed markup");
        };
        serde_json::to_writer_pretty(&mut stdout, &structure)?;
        writeln!(stdout)?;
    } else {
        write!(stdout, "{}", text)?;
    }
    stdout.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let headless = cli.dump_structure || !cli.set.is_empty();

    if headless {
        init_stderr_logging();
    } else {
        // Set up panic hook to restore terminal before showing panic info
        setup_panic_hook();
        init_file_logging();
    }

    // Load the document BEFORE terminal setup
    // (stdin might carry the SVG, so it has to be read before taking over the terminal)
    let (text, filename, stdin_was_piped) = if let Some(file_path) = &cli.file {
        let text = load_svg_file(file_path)?;
        (text, Some(file_path.clone()), false)
    } else if !io::stdin().is_terminal() {
        (load_svg_from_stdin()?, None, true)
    } else if headless {
        bail!("No input: pass a file or pipe a document on stdin");
    } else {
        (SAMPLE_DOCUMENT.to_string(), None, false)
    };

    if headless {
        return run_headless(&cli, text);
    }

    let config = Config::load();

    // CLI theme overrides config theme
    let theme_name = cli.theme.clone().unwrap_or_else(|| config.theme.clone());
    let (theme, theme_warning) = match get_builtin_theme(&theme_name) {
        Some(theme) => (theme, None),
        None => {
            let fallback = get_builtin_theme("default-dark")
                .ok_or_else(|| anyhow!("Built-in theme default-dark is missing"))?;
            (
                fallback,
                Some(format!("Theme '{}' not found, using default-dark", theme_name)),
            )
        }
    };

    let mut ui = UI::new(theme);
    let mut input_handler = if stdin_was_piped {
        InputHandler::new_with_tty()
            .context("Failed to open /dev/tty for keyboard input when stdin was piped")?
    } else {
        InputHandler::new()
    };

    let mut state = EditorState::new(EditorSession::new(text), config);
    if let Some(name) = filename {
        info!("opened {}", name);
        state.set_filename(name);
    }
    if cli.theme.is_some() && theme_warning.is_none() {
        // UI already uses it; keep the state's theme name in sync
        state.request_theme_change(theme_name);
        state.take_pending_theme();
    }
    if let Some(warning) = theme_warning {
        state.set_message(warning, MessageLevel::Warning);
    } else if state.session().structure().is_none() {
        state.set_message(
            "Document is not well-formed; structure view is empty".to_string(),
            MessageLevel::Warning,
        );
    }

    // Termion can use /dev/tty directly when stdin is piped, no redirection needed
    let stdout = io::stdout()
        .into_raw_mode()
        .context("Failed to enable raw mode")?;
    let stdout = stdout
        .into_alternate_screen()
        .context("Failed to enter alternate screen")?;

    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_event_loop(&mut terminal, &mut ui, &mut input_handler, &mut state);

    // Termion restores the screen through Drop guards; the cursor needs showing
    write!(terminal.backend_mut(), "{}", termion::cursor::Show)?;
    terminal.backend_mut().flush()?;

    result
}

fn run_event_loop(
    terminal: &mut Tui,
    ui: &mut UI,
    input_handler: &mut InputHandler,
    state: &mut EditorState,
) -> Result<()> {
    loop {
        // Check for pending theme changes
        if let Some(theme_name) = state.take_pending_theme() {
            ui.set_theme(&theme_name);
        }

        if state.take_source_edit_request() {
            edit_source_suspended(terminal, input_handler, state)?;
        }

        ui.render(terminal, state)?;

        if let Some(event) = input_handler.poll_event(Duration::from_millis(100))? {
            let should_quit = input_handler.handle_event(event, state)?;
            if should_quit {
                break;
            }
        }
    }

    Ok(())
}

/// Hands the terminal to the external editor for `:source`, then takes it back.
fn edit_source_suspended(
    terminal: &mut Tui,
    input_handler: &InputHandler,
    state: &mut EditorState,
) -> Result<()> {
    let editor = resolve_editor_command();
    {
        let screen = terminal.backend_mut().writer_mut();
        write!(screen, "{}{}", termion::screen::ToMainScreen, termion::cursor::Show)?;
        screen.flush()?;
        screen.suspend_raw_mode()?;
    }

    input_handler.edit_source(state, &editor);

    {
        let screen = terminal.backend_mut().writer_mut();
        screen.activate_raw_mode()?;
        write!(screen, "{}", termion::screen::ToAlternateScreen)?;
        screen.flush()?;
    }
    terminal.clear()?;
    Ok(())
}
