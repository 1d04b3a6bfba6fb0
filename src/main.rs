//! tocspy: heading anchors, sidebar navigation and scrollspy for documentation pages.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use ratatui::crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tocspy::app_state::{AppState, Focus};
use tocspy::document::Document;
use tocspy::export::{self, PageHeader};
use tocspy::formats::markdown::MarkdownFormat;
use tocspy::header::{HeaderChrome, HeaderController};
use tocspy::sidebar::SidebarBuilder;
use tocspy::{config, decorate::Decorator, input, ui};

#[derive(Parser)]
#[command(name = "tocspy")]
#[command(about = "Heading anchors, sidebar contents and scrollspy for documentation pages", long_about = None)]
struct Args {
    /// Files or directories to view
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Show the compact header from the start instead of animating it on scroll
    #[arg(long)]
    static_header: bool,

    /// Print the sidebar as JSON and exit
    #[arg(long)]
    sidebar_json: bool,

    /// Write decorated HTML pages into this directory and exit
    #[arg(long, value_name = "DIR")]
    html: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> tocspy::Result<()> {
    let mut cfg = config::Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }
    if args.static_header {
        cfg.animate_header = false;
    }

    let paths = input::find_documents(args.paths, &cfg.file_extensions)?;
    let format = MarkdownFormat;

    let mut pages = Vec::new();
    for path in &paths {
        match input::load_document(path, &format) {
            Ok(doc) => pages.push((path.clone(), doc)),
            Err(e) => log::warn!("Skipping {}: {e}", path.display()),
        }
    }

    if pages.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }

    if let Some(dir) = args.html {
        return export_pages(&dir, pages, &cfg);
    }

    let mut document = Document::new(pages[0].1.title.clone());
    for (_, page) in pages {
        document.append(page);
    }

    if args.sidebar_json {
        let decorator = Decorator::decorate(&mut document, cfg.heading_levels());
        let sidebar = SidebarBuilder::build(decorator.headings());
        println!("{}", export::sidebar_json(&sidebar)?);
        return Ok(());
    }

    let rows = ratatui::crossterm::terminal::size().map_or(24, |(_, rows)| rows);
    let state = AppState::new(
        document,
        &cfg,
        usize::from(rows.saturating_sub(ui::CHROME_ROWS)),
    );
    run_tui(state)?;
    Ok(())
}

fn export_pages(
    dir: &Path,
    pages: Vec<(PathBuf, Document)>,
    cfg: &config::Config,
) -> tocspy::Result<()> {
    for (path, mut doc) in pages {
        let decorator = Decorator::decorate(&mut doc, cfg.heading_levels());
        let sidebar = SidebarBuilder::build(decorator.headings());

        let mut chrome = HeaderChrome::new(!cfg.logo.is_empty(), !cfg.description.is_empty());
        HeaderController::new(cfg.animate_header, cfg.header_threshold).install(&mut chrome, 0.0);

        let name = path
            .file_stem()
            .map_or_else(|| "index".to_string(), |s| s.to_string_lossy().into_owned());
        let header = PageHeader {
            logo: &cfg.logo,
            description: &cfg.description,
            chrome: &chrome,
        };
        let written = export::write_html(dir, &name, &doc, &sidebar, &header)?;
        println!("{}", written.display());
    }
    Ok(())
}

fn run_tui(mut app: AppState) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.message = None;
                match (key.code, app.focus) {
                    (KeyCode::Char('q'), _) => return Ok(()),
                    (KeyCode::Tab, _) => app.toggle_focus(),
                    (KeyCode::Up, Focus::Sidebar) => app.select_prev(),
                    (KeyCode::Down, Focus::Sidebar) => app.select_next(),
                    (KeyCode::Enter, Focus::Sidebar) => app.follow_selected(),
                    (KeyCode::Char(' '), Focus::Sidebar) => app.toggle_fold_selected(),
                    (KeyCode::Up, Focus::Page) => app.scroll_by_rows(-1),
                    (KeyCode::Down, Focus::Page) => app.scroll_by_rows(1),
                    (KeyCode::PageUp, _) => app.page_up(),
                    (KeyCode::PageDown, _) => app.page_down(),
                    (KeyCode::Home, _) => app.scroll_to(0.0),
                    (KeyCode::End, _) => app.scroll_to(f64::MAX),
                    _ => {}
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => app.scroll_by_rows(3),
                MouseEventKind::ScrollUp => app.scroll_by_rows(-3),
                MouseEventKind::Moved => app.pointer_at(mouse.column, mouse.row),
                _ => {}
            },
            Event::Resize(_, rows) => {
                app.resize(usize::from(rows.saturating_sub(ui::CHROME_ROWS)));
            }
            _ => {}
        }
    }
}
