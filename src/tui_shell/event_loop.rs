use std::collections::VecDeque;
use std::future::Future;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use crate::overlay::OverlayClick;

use super::app::{POLL_INTERVAL, Term};
use super::{App, Phase, StatusLine};

/// Keeps drawing while `fut` runs. Input that arrives meanwhile is queued on `backlog`
/// to be handled in order afterwards. `None` if the user quit first.
pub(super) async fn drive<F: Future>(
    terminal: &mut Term,
    app: &App,
    fut: F,
    backlog: &mut VecDeque<Event>,
) -> Result<Option<F::Output>> {
    tokio::pin!(fut);
    loop {
        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;

        tokio::select! {
            out = &mut fut => return Ok(Some(out)),
            _ = tokio::time::sleep(POLL_INTERVAL) => {}
        }

        if collect_events(app, backlog)? {
            return Ok(None);
        }
    }
}

/// Moves every event that is already available onto `backlog`. Returns true on a quit
/// request, which is not queued.
fn collect_events(app: &App, backlog: &mut VecDeque<Event>) -> Result<bool> {
    while event::poll(Duration::ZERO).context("poll")? {
        let ev = event::read().context("read event")?;
        if let Event::Key(k) = &ev
            && k.kind == KeyEventKind::Press
            && (is_quit(k) || (k.code == KeyCode::Esc && matches!(app.phase, Phase::Loading)))
        {
            return Ok(true);
        }
        backlog.push_back(ev);
    }
    Ok(false)
}

pub(super) async fn run_loop(terminal: &mut Term, app: &mut App) -> Result<()> {
    let mut backlog = VecDeque::new();
    loop {
        app.tick();

        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if collect_events(app, &mut backlog)? {
            app.quit = true;
            continue;
        }

        // Queued input first, then one card, then wait for something to happen.
        if let Some(ev) = backlog.pop_front() {
            handle_event(terminal, app, ev, &mut backlog).await?;
        } else if app.viewer().is_some_and(|v| v.is_rendering()) {
            render_one(terminal, app, &mut backlog).await?;
        } else if event::poll(app.poll_timeout(Instant::now())).context("poll")? {
            let ev = event::read().context("read event")?;
            handle_event(terminal, app, ev, &mut backlog).await?;
        }
    }
}

async fn handle_event(
    terminal: &mut Term,
    app: &mut App,
    ev: Event,
    backlog: &mut VecDeque<Event>,
) -> Result<()> {
    match ev {
        Event::Key(k) if k.kind == KeyEventKind::Press => {
            if let Some(idx) = handle_key(app, k) {
                open_card(terminal, app, idx, backlog).await?;
            }
        }
        Event::Mouse(m) => {
            let size = terminal.size().context("terminal size")?;
            handle_mouse(app, m, Rect::new(0, 0, size.width, size.height));
        }
        _ => {}
    }
    Ok(())
}

/// Looks up the name of the next pending card and renders it.
async fn render_one(
    terminal: &mut Term,
    app: &mut App,
    backlog: &mut VecDeque<Event>,
) -> Result<()> {
    let Some(v) = app.viewer() else {
        return Ok(());
    };
    let Some(entry) = v.next_to_render().cloned() else {
        return Ok(());
    };
    let lookup = v.enricher().localized_name(&entry);
    let Some(name) = drive(terminal, app, lookup, backlog).await? else {
        app.quit = true;
        return Ok(());
    };
    if let Some(v) = app.viewer_mut() {
        v.complete_render(&entry, name.as_deref());
    }
    Ok(())
}

async fn open_card(
    terminal: &mut Term,
    app: &mut App,
    idx: usize,
    backlog: &mut VecDeque<Event>,
) -> Result<()> {
    let Some(v) = app.viewer() else {
        return Ok(());
    };
    let Some(entry) = v.pager().entry_at(idx).cloned() else {
        app.status = Some(StatusLine::info("(no selection)"));
        return Ok(());
    };
    let lookup = v.enricher().localize(&entry);
    let Some(info) = drive(terminal, app, lookup, backlog).await? else {
        app.quit = true;
        return Ok(());
    };
    if let Some(v) = app.viewer_mut() {
        v.show_overlay(&entry, &info);
    }
    Ok(())
}

fn is_quit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
}

/// Applies one key press. Returns the card to open when Enter selects one.
fn handle_key(app: &mut App, key: KeyEvent) -> Option<usize> {
    if is_quit(&key) {
        app.quit = true;
        return None;
    }

    if app.viewer().is_some_and(|v| v.overlay().is_visible()) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q'))
            && let Some(v) = app.viewer_mut()
        {
            v.close_overlay();
        }
        return None;
    }

    if !matches!(app.phase, Phase::Ready(_)) {
        if key.code == KeyCode::Esc {
            app.quit = true;
        }
        return None;
    }

    match key.code {
        KeyCode::Esc => {
            if app.input.buf.is_empty() {
                app.quit = true;
            } else {
                app.input.clear();
                app.input_changed();
            }
        }

        KeyCode::Enter => return app.submit(),

        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => app.load_more(),

        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input.clear();
            app.input_changed();
        }

        KeyCode::Up => app.move_up(),
        KeyCode::Down => app.move_down(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),

        KeyCode::Backspace => {
            app.input.backspace();
            app.input_changed();
        }
        KeyCode::Delete => {
            app.input.delete();
            app.input_changed();
        }

        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input.insert_char(c);
            app.input_changed();
        }

        _ => {}
    }
    None
}

fn handle_mouse(app: &mut App, m: MouseEvent, area: Rect) {
    if m.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let Some(v) = app.viewer_mut() else {
        return;
    };
    if !v.overlay().is_visible() {
        return;
    }
    let inside = super::render::overlay_area(area).contains(Position::new(m.column, m.row));
    v.click_overlay(if inside {
        OverlayClick::Content
    } else {
        OverlayClick::Background
    });
}

#[cfg(test)]
#[path = "../tests/tui_shell/event_loop_tests.rs"]
mod tests;
