use std::collections::VecDeque;
use std::io::{self, IsTerminal};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::ViewerConfig;
use crate::prefs::PrefsStore;
use crate::remote::{RemoteClient, load_catalog};
use crate::viewer::Viewer;

use super::{Input, StatusLine};

pub(super) const LOADING_TEXT: &str = "Loading Pokémon...";

pub(super) type Term = Terminal<CrosstermBackend<io::Stdout>>;

pub(super) fn run(opts: crate::tui::TuiRunOptions) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("build tokio runtime")?;

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let mut app = App::new(opts.config, PrefsStore::open(&opts.data_dir));
    let res = runtime.block_on(run_session(&mut terminal, &mut app));

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    res
}

async fn run_session(terminal: &mut Term, app: &mut App) -> Result<()> {
    let client = RemoteClient::new(&app.config)?;

    // Nothing but quit is meaningful before the catalog is in.
    let mut ignored = VecDeque::new();
    let loaded =
        super::event_loop::drive(terminal, app, load_catalog(&client), &mut ignored).await?;
    let Some(loaded) = loaded else {
        // Quit while loading.
        return Ok(());
    };

    match loaded {
        Ok(store) => {
            let prefs = app.prefs.clone();
            let mut viewer = Viewer::from_config(store, client, prefs, &app.config);
            // Cards are rendered by the event loop, one lookup at a time.
            viewer.restore();
            app.input.set(viewer.input());
            let count = viewer.store().len();
            app.phase = Phase::Ready(Box::new(viewer));
            app.status = Some(StatusLine::info(format!("{} entries loaded", count)));
            app.absorb_note();
        }
        Err(err) => {
            tracing::warn!(error = %err, "catalog load failed");
            app.phase = Phase::Failed(format!("An error occurred: {}", err.user_message()));
        }
    }

    super::event_loop::run_loop(terminal, app).await
}

pub(super) enum Phase {
    Loading,
    Ready(Box<Viewer<RemoteClient>>),
    Failed(String),
}

pub(super) struct App {
    pub(super) config: ViewerConfig,
    pub(super) prefs: PrefsStore,
    pub(super) phase: Phase,

    pub(super) input: Input,

    // Row under the cursor. `cards.len()` is the "load more" row when present.
    pub(super) selected: usize,

    pub(super) status: Option<StatusLine>,

    pub(super) quit: bool,
}

impl App {
    pub(super) fn new(config: ViewerConfig, prefs: PrefsStore) -> Self {
        Self {
            config,
            prefs,
            phase: Phase::Loading,
            input: Input::default(),
            selected: 0,
            status: None,
            quit: false,
        }
    }

    pub(super) fn viewer(&self) -> Option<&Viewer<RemoteClient>> {
        match &self.phase {
            Phase::Ready(v) => Some(v.as_ref()),
            _ => None,
        }
    }

    pub(super) fn viewer_mut(&mut self) -> Option<&mut Viewer<RemoteClient>> {
        match &mut self.phase {
            Phase::Ready(v) => Some(v.as_mut()),
            _ => None,
        }
    }

    /// Cards plus the "load more" row, if shown. The row is hidden while a page is
    /// still rendering.
    pub(super) fn row_count(&self) -> usize {
        self.viewer()
            .map(|v| v.pager().cards().len() + usize::from(load_more_shown(v)))
            .unwrap_or(0)
    }

    pub(super) fn on_load_more_row(&self) -> bool {
        self.viewer()
            .is_some_and(|v| load_more_shown(v) && self.selected == v.pager().cards().len())
    }

    pub(super) fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub(super) fn move_down(&mut self) {
        let n = self.row_count();
        if n == 0 {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + 1).min(n - 1);
    }

    pub(super) fn input_changed(&mut self) {
        let buf = self.input.buf.clone();
        if let Some(v) = self.viewer_mut() {
            v.on_input(&buf, Instant::now());
        }
    }

    /// How long the loop may block on input without missing the search deadline.
    pub(super) fn poll_timeout(&self, now: Instant) -> Duration {
        self.viewer()
            .and_then(|v| v.search_deadline())
            .map(|at| at.saturating_duration_since(now).min(POLL_INTERVAL))
            .unwrap_or(POLL_INTERVAL)
    }

    pub(super) fn tick(&mut self) {
        let Some(v) = self.viewer_mut() else {
            return;
        };
        if v.settle_input(Instant::now()).is_some() {
            self.after_reset();
        }
    }

    /// Enter: applies pending input, or loads more on the "load more" row. Otherwise
    /// returns the card whose details should open.
    pub(super) fn submit(&mut self) -> Option<usize> {
        let v = self.viewer_mut()?;
        if v.is_search_pending() {
            if v.flush_input().is_some() {
                self.after_reset();
            }
            return None;
        }
        if self.on_load_more_row() {
            self.load_more();
            return None;
        }
        Some(self.selected)
    }

    pub(super) fn load_more(&mut self) {
        let Some(v) = self.viewer_mut() else {
            return;
        };
        match v.request_more() {
            Some(_) => {
                let pending = v.pager().pending_len();
                let shown = v.pager().cards().len() + pending;
                let total = v.pager().visible_len();
                self.status = Some(StatusLine::info(format!(
                    "+{} (showing {}/{})",
                    pending, shown, total
                )));
            }
            None => {
                self.status = Some(StatusLine::info("nothing more to load"));
            }
        }
        self.clamp_selection();
    }

    pub(super) fn absorb_note(&mut self) {
        if let Some(note) = self.viewer_mut().and_then(|v| v.take_note()) {
            self.status = Some(StatusLine::error(note));
        }
    }

    fn after_reset(&mut self) {
        self.selected = 0;
        if let Some(v) = self.viewer() {
            let total = v.pager().visible_len();
            let q = v.search().query().to_string();
            self.status = Some(StatusLine::info(if q.is_empty() {
                format!("{} entries", total)
            } else {
                format!("{} match {:?}", total, q)
            }));
        }
        self.absorb_note();
    }

    fn clamp_selection(&mut self) {
        let n = self.row_count();
        self.selected = self.selected.min(n.saturating_sub(1));
    }
}

fn load_more_shown(v: &Viewer<RemoteClient>) -> bool {
    v.pager().has_load_more() && !v.is_rendering()
}

pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(50);
