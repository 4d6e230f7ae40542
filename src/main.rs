//! Recipes - A terminal viewer for plain-text recipe collections.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use recipe_viewer::{
    app::App,
    config::{Config, Theme, DEFAULT_SOURCE},
    data::SourceReader,
    ui,
    view::{RenderPlan, Screen, DEFAULT_LIST_TITLE},
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// UI tick interval; drives the slide-out transition.
const TICK: Duration = Duration::from_millis(50);

#[derive(Parser, Debug)]
#[command(name = "recipes")]
#[command(about = "A terminal viewer for plain-text recipe collections", long_about = None)]
struct Args {
    /// Recipe file to open (`-` reads stdin)
    #[arg(default_value = DEFAULT_SOURCE)]
    source: PathBuf,

    /// Location fragment to open, e.g. `3` or `#3`
    #[arg(short, long)]
    fragment: Option<String>,

    /// Header label for the recipe list
    #[arg(long, default_value = DEFAULT_LIST_TITLE)]
    title: String,

    /// Keep recipes in file order instead of sorting by name
    #[arg(long)]
    no_sort: bool,

    /// Go back immediately on swipe, without the slide-out
    #[arg(long)]
    no_animation: bool,

    /// Start with the light theme
    #[arg(long)]
    light: bool,

    /// Print the list or the selected recipe's markup and exit
    #[arg(long)]
    print: bool,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            source: self.source.clone(),
            fragment: self.fragment.clone(),
            list_title: self.title.clone(),
            sort: !self.no_sort,
            animate: !self.no_animation,
            theme: if self.light {
                Theme::GruvboxLight
            } else {
                Theme::GruvboxDark
            },
            ..Config::default()
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::File::create(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting recipes");
    }

    let config = args.config();

    if args.print {
        return print_mode(config);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(config);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    tracing::info!("Recipes exited");

    Ok(())
}

/// Non-interactive output: header, then list labels or recipe markup.
fn print_mode(config: Config) -> Result<()> {
    let book = SourceReader::read_book(&config.source, config.sort)?;
    let app = App::with_records(config, book.records);

    let mut out = io::stdout().lock();
    out.write_all(plan_text(&app.plan()).as_bytes())?;
    Ok(())
}

fn plan_text(plan: &RenderPlan) -> String {
    let mut text = format!("{}\n", plan.header);
    match &plan.screen {
        Screen::List(entries) => {
            for entry in entries {
                text.push_str(&entry.label);
                text.push('\n');
            }
        },
        Screen::Detail(detail) => {
            text.push('\n');
            text.push_str(&detail.markup);
            text.push('\n');
        },
    }
    text
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if !event::poll(TICK)? {
            app.tick();
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if !handle_key(&mut app, key) {
                    return Ok(());
                }
            },
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                handle_mouse(&mut app, mouse, Rect::new(0, 0, size.width, size.height));
            },
            _ => {},
        }
    }
}

/// Apply a key press. Returns false when the app should quit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let in_detail = app.view().is_detail();

    match (key.modifiers, key.code) {
        // Quit
        (KeyModifiers::NONE, KeyCode::Char('q'))
        | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return false,

        // History
        (KeyModifiers::NONE, KeyCode::Esc)
        | (KeyModifiers::NONE, KeyCode::Backspace)
        | (KeyModifiers::NONE, KeyCode::Left)
        | (KeyModifiers::NONE, KeyCode::Char('h')) => {
            if in_detail {
                app.back();
            }
        },
        (KeyModifiers::SHIFT, KeyCode::Char('L')) | (KeyModifiers::ALT, KeyCode::Right) => {
            app.forward();
        },

        // Open
        (KeyModifiers::NONE, KeyCode::Enter)
        | (KeyModifiers::NONE, KeyCode::Right)
        | (KeyModifiers::NONE, KeyCode::Char('l')) => {
            app.open_selected();
        },

        // Navigation
        (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
            if in_detail {
                app.scroll_up();
            } else {
                app.list.cursor_up();
            }
        },
        (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
            if in_detail {
                app.scroll_down();
            } else {
                app.list.cursor_down();
            }
        },
        (KeyModifiers::NONE, KeyCode::Char('g')) | (KeyModifiers::NONE, KeyCode::Home) => {
            if in_detail {
                app.list.detail_scroll = 0;
            } else {
                app.list.goto_first();
            }
        },
        (KeyModifiers::SHIFT, KeyCode::Char('G')) | (KeyModifiers::NONE, KeyCode::End) => {
            if !in_detail {
                app.list.goto_last();
            }
        },
        (KeyModifiers::CONTROL, KeyCode::Char('d')) => app.scroll_down(),
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => app.scroll_up(),

        // Features
        (KeyModifiers::NONE, KeyCode::Char('y')) => app.copy_current(),
        (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),

        _ => {},
    }

    true
}

fn handle_mouse(app: &mut App, mouse: MouseEvent, area: Rect) {
    let (x, y) = (f64::from(mouse.column), f64::from(mouse.row));

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.view().is_detail() && ui::back_button_at(area, mouse.column, mouse.row) {
                app.back();
                return;
            }

            app.touch_start(x, y);
            if !app.view().is_detail() {
                if let Some(row) = ui::list_row_at(area, mouse.column, mouse.row) {
                    app.open_row(row);
                }
            }
        },
        MouseEventKind::Up(MouseButton::Left) => {
            app.touch_end(x, y);
        },
        MouseEventKind::ScrollDown => app.scroll_down(),
        MouseEventKind::ScrollUp => app.scroll_up(),
        _ => {},
    }
}
