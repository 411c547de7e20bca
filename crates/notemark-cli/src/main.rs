mod render;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use notemark_config::Config;
use notemark_engine::{Cmd, Document, HighlightingOptions};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::{
    env,
    io::stdout,
    path::{Path, PathBuf},
    process,
    time::{Duration, Instant},
};

/// Longest wait for input before the dirty queue is polled again.
const MAX_INPUT_WAIT: Duration = Duration::from_millis(250);

struct App {
    note_path: PathBuf,
    document: Document,
    cursor: usize,
    scroll: usize,
    message: Option<String>,
}

impl App {
    fn new(note_path: PathBuf, config: &Config) -> Result<Self> {
        let text = read_note(&note_path)?;
        let document = Document::with_options(
            &text,
            config.highlighting,
            config.rehighlight_interval(),
        );
        Ok(Self {
            note_path,
            document,
            cursor: 0,
            scroll: 0,
            message: None,
        })
    }

    fn next_block(&mut self) {
        if self.cursor + 1 < self.document.blocks().len() {
            self.cursor += 1;
        }
    }

    fn previous_block(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn reload(&mut self) {
        match read_note(&self.note_path) {
            Ok(text) => {
                if let Err(e) = self.document.apply(Cmd::ReplaceAll { text }) {
                    self.message = Some(format!("Reload failed: {e}"));
                    return;
                }
                self.cursor = self.cursor.min(self.document.blocks().len() - 1);
                self.message = Some(format!("Reloaded {}", self.note_path.display()));
                log::info!("reloaded {}", self.note_path.display());
            }
            Err(e) => self.message = Some(format!("{e:#}")),
        }
    }

    fn toggle_block_quote_style(&mut self) {
        let options = HighlightingOptions {
            fully_highlighted_block_quote: !self.document.options().fully_highlighted_block_quote,
        };
        self.document.set_options(options);
        self.message = Some(format!(
            "Full block quote highlighting {}",
            if options.fully_highlighted_block_quote {
                "on"
            } else {
                "off"
            }
        ));
    }

    fn tick(&mut self, now: Instant) {
        if self.document.tick(now) && self.document.take_highlighting_finished() {
            log::debug!("highlighting finished, {} blocks pending", self.document.pending());
        }
    }

    /// Keeps the cursor inside a viewport of `height` lines.
    fn scroll_into_view(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + height {
            self.scroll = self.cursor + 1 - height;
        }
    }
}

fn read_note(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read note {}", path.display()))
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let (dump, note) = match args.as_slice() {
        [_, note] => (false, note),
        [_, flag, note] if flag == "--dump" => (true, note),
        _ => {
            eprintln!("Usage: {} [--dump] <note.md>", args[0]);
            process::exit(1);
        }
    };

    // The viewer owns the terminal, so it only logs when asked to
    if dump {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    } else if env::var_os("RUST_LOG").is_some() {
        env_logger::Builder::from_default_env().init();
    }

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Fix or remove {}", config_path.display());
            process::exit(1);
        }
    };

    let note_path = config.resolve_note(Path::new(note));
    log::info!("Opening {}", note_path.display());

    if dump {
        let text = read_note(&note_path)?;
        let mut document =
            Document::with_options(&text, config.highlighting, config.rehighlight_interval());
        document.settle();
        println!("{}", render::dump(&document));
        return Ok(());
    }

    let mut app = App::new(note_path, &config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| ui(f, app))?;

        let wait = app
            .document
            .until_next_tick(Instant::now())
            .clamp(Duration::from_millis(10), MAX_INPUT_WAIT);
        if !event::poll(wait)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_block(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_block(),
                KeyCode::Home | KeyCode::Char('g') => app.cursor = 0,
                KeyCode::End | KeyCode::Char('G') => {
                    app.cursor = app.document.blocks().len() - 1;
                }
                KeyCode::Char('r') => app.reload(),
                KeyCode::Char('b') => app.toggle_block_quote_style(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)].as_ref())
        .split(f.area());

    // Note panel, borders take two lines
    let height = chunks[0].height.saturating_sub(2) as usize;
    app.scroll_into_view(height);

    let cursor_style = Style::default().bg(Color::Rgb(40, 40, 60));
    let lines: Vec<Line> = app
        .document
        .blocks()
        .iter()
        .enumerate()
        .skip(app.scroll)
        .take(height)
        .map(|(i, block)| {
            let line = render::block_line(&app.document.line_text(i), &block.spans);
            if i == app.cursor {
                line.patch_style(cursor_style)
            } else {
                line
            }
        })
        .collect();

    let title = app.note_path.display().to_string();
    let content =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(content, chunks[0]);

    // Status bar
    let state = app
        .document
        .blocks()
        .get(app.cursor)
        .map(|block| format!("{:?}", block.state))
        .unwrap_or_default();
    let status = Line::from(vec![
        Span::styled(
            format!(" {}/{} ", app.cursor + 1, app.document.blocks().len()),
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        Span::raw(format!(" {state}")),
        Span::raw(format!(" | pending: {}", app.document.pending())),
        Span::raw(
            app.message
                .as_deref()
                .map(|message| format!(" | {message}"))
                .unwrap_or_default(),
        ),
    ]);
    f.render_widget(Paragraph::new(vec![status]), chunks[1]);

    // Instructions
    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("g/G: Top/Bottom | "),
        Span::raw("r: Reload | b: Block quote style"),
    ]);
    f.render_widget(Paragraph::new(vec![help_text]), chunks[2]);
}
