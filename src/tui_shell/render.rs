use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

use crate::model::{CardDescriptor, OverlayDescriptor};

use super::app::LOADING_TEXT;
use super::{App, Phase, StatusKind};

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);
    draw_search(frame, app, chunks[1]);

    match &app.phase {
        Phase::Loading => {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    LOADING_TEXT,
                    Style::default().fg(Color::Yellow),
                )))
                .block(Block::default().borders(Borders::ALL).title("Pokédex")),
                chunks[2],
            );
        }
        Phase::Failed(msg) => {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    msg.as_str(),
                    Style::default().fg(Color::Red),
                )))
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title("Pokédex")),
                chunks[2],
            );
        }
        Phase::Ready(_) => draw_grid(frame, app, chunks[2]),
    }

    draw_status(frame, app, chunks[3]);

    if let Some(view) = app.viewer().and_then(|v| v.overlay().view()) {
        draw_overlay(frame, view, overlay_area(area));
    }
}

fn draw_header(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            "Pokédex",
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(
            format!("locale={}", app.config.locale),
            Style::default().fg(Color::Gray),
        ),
    ];
    if let Some(v) = app.viewer() {
        spans.push(Span::raw("  "));
        spans.push(Span::raw(format!(
            "{}/{} shown  ({} total)",
            v.pager().cards().len(),
            v.pager().visible_len(),
            v.store().len()
        )));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM)),
        area,
    );
}

fn draw_search(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let pending = app.viewer().is_some_and(|v| v.is_search_pending());
    let title = if pending { "Search …" } else { "Search" };
    frame.render_widget(
        Paragraph::new(app.input.buf.as_str())
            .block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
    let overlay_open = app.viewer().is_some_and(|v| v.overlay().is_visible());
    if !overlay_open {
        let x = (app.input.cursor as u16).min(area.width.saturating_sub(3));
        frame.set_cursor_position((area.x + 1 + x, area.y + 1));
    }
}

fn draw_grid(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let Some(v) = app.viewer() else {
        return;
    };
    let pager = v.pager();
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Pokédex (Enter: details; Ctrl+L: load more; Esc: clear/quit)");

    if let Some(placeholder) = pager.placeholder() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                placeholder,
                Style::default().fg(Color::Gray),
            )))
            .block(block),
            area,
        );
        return;
    }

    let mut rows: Vec<ListItem> = pager.cards().iter().map(card_row).collect();
    if pager.is_rendering() {
        rows.push(
            ListItem::new(format!("… {} more", pager.pending_len()))
                .style(Style::default().fg(Color::Gray)),
        );
    } else if pager.has_load_more() {
        rows.push(
            ListItem::new("[ Load more ]").style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        );
    }

    let mut state = ListState::default();
    let selectable = app.row_count();
    if selectable > 0 {
        state.select(Some(app.selected.min(selectable - 1)));
    }
    let list = List::new(rows)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_stateful_widget(list, area, &mut state);
}

fn card_row(card: &CardDescriptor) -> ListItem<'_> {
    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{: <6}", card.id_label),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("{: <24}", card.title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(card.types_label.as_str()),
    ]))
}

fn draw_status(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let line = match &app.status {
        Some(s) => {
            let style = match s.kind {
                StatusKind::Info => Style::default().fg(Color::White),
                StatusKind::Error => Style::default().fg(Color::Red),
            };
            Line::from(vec![
                Span::styled(format!("{} ", s.ts), Style::default().fg(Color::Gray)),
                Span::styled(s.text.as_str(), style),
            ])
        }
        None => Line::from(""),
    };
    frame.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::TOP)),
        area,
    );
}

/// Centered box used for the detail overlay; clicks outside it close the overlay.
pub(super) fn overlay_area(area: Rect) -> Rect {
    let w = area.width.saturating_sub(6).clamp(20, 80);
    let h = area.height.saturating_sub(6).clamp(8, 18);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect {
        x,
        y,
        width: w.min(area.width),
        height: h.min(area.height),
    }
}

fn draw_overlay(frame: &mut ratatui::Frame, view: &OverlayDescriptor, box_area: Rect) {
    frame.render_widget(Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            view.title.as_str(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let image = if view.image_url.is_empty() {
        "(no image)"
    } else {
        view.image_url.as_str()
    };
    let lines = vec![
        Line::from(view.id_label.as_str()),
        Line::from(view.types_label.as_str()),
        Line::from(Span::styled(image, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(view.description.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "Esc: close",
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
