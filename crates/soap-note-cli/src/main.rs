use anyhow::Result;
use chrono::Utc;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use soap_note_config::Config;
use soap_note_engine::{ClinicalNote, Fragment, StructuredNote, export, io};
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

enum Command {
    View(PathBuf),
    Export(PathBuf),
    CopyText(PathBuf),
    SetExportDir(PathBuf),
}

impl Command {
    fn from_args(args: &[String]) -> Option<Self> {
        match args {
            [_, path] if !path.starts_with("--") => Some(Command::View(PathBuf::from(path))),
            [_, flag, path] if flag == "--export" => Some(Command::Export(PathBuf::from(path))),
            [_, flag, path] if flag == "--copy-text" => {
                Some(Command::CopyText(PathBuf::from(path)))
            }
            [_, flag, dir] if flag == "--set-export-dir" => {
                Some(Command::SetExportDir(PathBuf::from(dir)))
            }
            _ => None,
        }
    }
}

struct App {
    note: ClinicalNote,
    structured: StructuredNote,
    export_dir: PathBuf,
    list_state: ListState,
    status: Option<String>,
}

impl App {
    fn new(note: ClinicalNote, export_dir: PathBuf) -> Self {
        let structured = note.structure();
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            note,
            structured,
            export_dir,
            list_state,
            status: None,
        }
    }

    /// Transcription first, then every section with content.
    fn entry_count(&self) -> usize {
        1 + self.structured.sections.len()
    }

    fn next_entry(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.entry_count(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous_entry(&mut self) {
        let i = match self.list_state.selected() {
            Some(0) | None => self.entry_count() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    fn export(&mut self) {
        self.status = Some(
            match io::write_export(&self.export_dir, &self.note, Utc::now()) {
                Ok(path) => format!("Saved {}", path.display()),
                Err(e) => format!("Export failed: {e}"),
            },
        );
    }

    fn entry_titles(&self) -> Vec<String> {
        let mut titles = vec!["Transcription".to_string()];
        titles.extend(
            self.structured
                .sections
                .iter()
                .map(|section| format!("[{}] {}", section.kind.badge(), section.kind.title())),
        );
        titles
    }

    fn selected_content(&self) -> Vec<Line<'static>> {
        match self.list_state.selected().unwrap_or(0) {
            0 => self
                .structured
                .transcription
                .lines()
                .map(|line| Line::from(line.to_string()))
                .collect(),
            i => self
                .structured
                .sections
                .get(i - 1)
                .map(|section| section.content.fragments().map(fragment_line).collect())
                .unwrap_or_default(),
        }
    }
}

fn fragment_line(fragment: Fragment<'_>) -> Line<'static> {
    match fragment {
        Fragment::Plain(text) => Line::from(text.to_string()),
        Fragment::Heading {
            prefix,
            label,
            rest,
        } => Line::from(vec![
            Span::raw(prefix.to_string()),
            Span::styled(
                label.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(rest.to_string()),
        ]),
    }
}

fn load_note(path: &Path) -> ClinicalNote {
    match io::read_payload(path) {
        Ok(note) => note,
        Err(e) => {
            eprintln!("Error: Failed to process clinical note: {e}");
            process::exit(1);
        }
    }
}

fn export_dir() -> PathBuf {
    match Config::load() {
        Ok(Some(config)) => config.export_dir,
        Ok(None) => PathBuf::from("."),
        Err(e) => {
            log::warn!("Failed to load config file, exporting to current directory: {e}");
            PathBuf::from(".")
        }
    }
}

fn program_name(args: &[String]) -> &str {
    args.first().map_or("soap-note-cli", String::as_str)
}

/// Stores `dir` as the export directory in the config file at `config_path`.
fn set_export_dir(dir: &Path, config_path: &Path) -> Result<()> {
    io::validate_export_dir(dir)?;
    let config = Config {
        export_dir: dir.to_path_buf(),
    };
    config.save_to_path(config_path)?;
    log::info!("Export directory set to {}", dir.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(command) = Command::from_args(&args) else {
        let program = program_name(&args);
        eprintln!("Usage: {program} <note.json>");
        eprintln!("       {program} --export <note.json>");
        eprintln!("       {program} --copy-text <note.json>");
        eprintln!("       {program} --set-export-dir <dir>");
        eprintln!(
            "Exports go to export_dir in {} (default: current directory)",
            Config::config_path().display()
        );
        process::exit(1);
    };

    match command {
        Command::CopyText(path) => {
            let note = load_note(&path);
            print!("{}", export::clipboard_text(&note));
        }
        Command::Export(path) => {
            let note = load_note(&path);
            match io::write_export(&export_dir(), &note, Utc::now()) {
                Ok(written) => println!("{}", written.display()),
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            }
        }
        Command::SetExportDir(dir) => {
            let config_path = Config::config_path();
            if let Err(e) = set_export_dir(&dir, &config_path) {
                eprintln!("Error: Failed to save {}: {e}", config_path.display());
                process::exit(1);
            }
            println!("Exports will be saved to {}", dir.display());
        }
        Command::View(path) => {
            let note = load_note(&path);
            let mut app = App::new(note, export_dir());
            view(&mut app)?;
        }
    }

    Ok(())
}

fn view(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_entry(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_entry(),
                KeyCode::Char('d') => app.export(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(2)].as_ref())
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)].as_ref())
        .split(rows[0]);

    // Section list panel
    let titles = app.entry_titles();
    let selected_title = app
        .list_state
        .selected()
        .and_then(|i| titles.get(i))
        .cloned()
        .unwrap_or_default();
    let items: Vec<ListItem> = titles
        .into_iter()
        .map(|title| ListItem::new(Line::from(title)))
        .collect();

    let sections = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Clinical Note"),
        )
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(sections, columns[0], &mut app.list_state);

    // Content panel
    let content = Paragraph::new(app.selected_content())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(selected_title),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(content, columns[1]);

    // Status and instructions
    let generated = format!("Generated: {}", export::generated_label(&app.note));
    let status = app.status.as_deref().unwrap_or("");
    let footer = vec![
        Line::from(vec![Span::raw(generated), Span::raw("  "), Span::raw(status)]),
        Line::from(vec![
            Span::raw("q: Quit | "),
            Span::raw("↑/k: Previous | "),
            Span::raw("↓/j: Next | "),
            Span::raw("d: Download"),
        ]),
    ];

    f.render_widget(Paragraph::new(footer), rows[1]);
}
