use std::path::Path;

use super::*;
use crate::catalog::CatalogStore;
use crate::model::{LocalizedInfo, ViewerConfig};
use crate::prefs::PrefsStore;
use crate::remote::RemoteClient;
use crate::test_support::numbered_entries;
use crate::viewer::Viewer;

// Nothing listens here; the tests below never issue a request.
const DEAD_API: &str = "http://127.0.0.1:9";

fn render_all(v: &mut Viewer<RemoteClient>) {
    while let Some(entry) = v.next_to_render().cloned() {
        v.complete_render(&entry, None);
    }
}

/// An app past loading, with the first page of 45 entries on screen.
fn ready_app(dir: &Path) -> App {
    let config = ViewerConfig {
        api_base: DEAD_API.to_string(),
        ..ViewerConfig::default()
    };
    let prefs = PrefsStore::open(dir);
    let client = RemoteClient::new(&config).unwrap();
    let mut viewer = Viewer::from_config(
        CatalogStore::new(numbered_entries(45)),
        client,
        prefs.clone(),
        &config,
    );
    viewer.restore();
    render_all(&mut viewer);

    let mut app = App::new(config, prefs);
    app.phase = Phase::Ready(Box::new(viewer));
    app
}

fn press(app: &mut App, code: KeyCode) -> Option<usize> {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(app: &mut App, c: char) -> Option<usize> {
    handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn open_first_card(app: &mut App) {
    let v = app.viewer_mut().unwrap();
    let entry = v.pager().entry_at(0).cloned().unwrap();
    v.show_overlay(&entry, &LocalizedInfo::default());
}

fn overlay_visible(app: &App) -> bool {
    app.viewer().unwrap().overlay().is_visible()
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[tokio::test]
async fn esc_closes_overlay_then_clears_input_then_quits() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = ready_app(dir.path());
    type_text(&mut app, "mo");
    open_first_card(&mut app);

    press(&mut app, KeyCode::Esc);
    assert!(!overlay_visible(&app));
    assert_eq!(app.input.buf, "mo");
    assert!(!app.quit);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.input.buf, "");
    assert_eq!(app.viewer().unwrap().input(), "");
    assert!(!app.quit);

    press(&mut app, KeyCode::Esc);
    assert!(app.quit);
}

#[tokio::test]
async fn keys_other_than_close_are_ignored_while_overlay_is_open() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = ready_app(dir.path());
    open_first_card(&mut app);

    type_text(&mut app, "x");
    assert_eq!(press(&mut app, KeyCode::Down), None);
    assert_eq!(app.input.buf, "");
    assert_eq!(app.selected, 0);
    assert!(overlay_visible(&app));

    // Enter closes instead of opening another card.
    assert_eq!(press(&mut app, KeyCode::Enter), None);
    assert!(!overlay_visible(&app));
}

#[tokio::test]
async fn enter_on_load_more_row_loads_more() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = ready_app(dir.path());
    assert_eq!(app.row_count(), 21);
    for _ in 0..25 {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.selected, 20);
    assert!(app.on_load_more_row());

    assert_eq!(press(&mut app, KeyCode::Enter), None);
    let v = app.viewer().unwrap();
    assert_eq!(v.search().page(), 2);
    assert!(v.is_rendering());
    assert_eq!(v.pager().pending_len(), 20);
    assert_eq!(
        app.status.as_ref().map(|s| s.text.as_str()),
        Some("+20 (showing 40/45)")
    );

    // The row comes back once the new window is on screen.
    assert_eq!(app.row_count(), 20);
    assert_eq!(app.selected, 19);
    render_all(app.viewer_mut().unwrap());
    assert_eq!(app.row_count(), 41);
}

#[tokio::test]
async fn enter_on_a_card_asks_to_open_it() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = ready_app(dir.path());
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(press(&mut app, KeyCode::Enter), Some(2));
}

#[tokio::test]
async fn enter_flushes_a_pending_search() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = ready_app(dir.path());
    press(&mut app, KeyCode::Down);
    type_text(&mut app, "mon-ce");
    assert!(app.viewer().unwrap().is_search_pending());

    assert_eq!(press(&mut app, KeyCode::Enter), None);
    let v = app.viewer_mut().unwrap();
    assert!(!v.is_search_pending());
    assert_eq!(v.search().query(), "mon-ce");
    render_all(v);
    assert_eq!(v.pager().cards().len(), 1);
    assert_eq!(v.pager().cards()[0].id_label, "#024");
    assert_eq!(app.selected, 0);
}

#[tokio::test]
async fn ctrl_u_clears_the_input() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = ready_app(dir.path());
    type_text(&mut app, "pika");
    assert_eq!(ctrl(&mut app, 'u'), None);
    assert_eq!(app.input.buf, "");
    assert_eq!(app.input.cursor, 0);
    assert_eq!(app.viewer().unwrap().input(), "");
    assert!(!app.quit);
}

#[tokio::test]
async fn ctrl_l_loads_more_from_anywhere() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = ready_app(dir.path());
    ctrl(&mut app, 'l');
    assert_eq!(app.viewer().unwrap().search().page(), 2);
    render_all(app.viewer_mut().unwrap());
    ctrl(&mut app, 'l');
    render_all(app.viewer_mut().unwrap());
    assert_eq!(app.viewer().unwrap().pager().cards().len(), 45);

    ctrl(&mut app, 'l');
    assert_eq!(
        app.status.as_ref().map(|s| s.text.as_str()),
        Some("nothing more to load")
    );
}

#[tokio::test]
async fn ctrl_c_and_ctrl_q_quit() {
    let dir = tempfile::tempdir().unwrap();
    for c in ['c', 'q'] {
        let mut app = ready_app(dir.path());
        open_first_card(&mut app);
        ctrl(&mut app, c);
        assert!(app.quit, "ctrl+{}", c);
    }
}

#[tokio::test]
async fn click_outside_overlay_closes_it() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = ready_app(dir.path());
    let area = Rect::new(0, 0, 100, 40);
    let boxed = super::super::render::overlay_area(area);
    open_first_card(&mut app);

    handle_mouse(&mut app, left_click(boxed.x + 1, boxed.y + 1), area);
    assert!(overlay_visible(&app));

    let right = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        ..left_click(0, 0)
    };
    handle_mouse(&mut app, right, area);
    assert!(overlay_visible(&app));

    handle_mouse(&mut app, left_click(0, 0), area);
    assert!(!overlay_visible(&app));
}

#[tokio::test]
async fn load_more_row_is_hidden_while_a_page_renders() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = ready_app(dir.path());
    type_text(&mut app, "mon");
    press(&mut app, KeyCode::Enter);

    let v = app.viewer().unwrap();
    assert!(v.is_rendering());
    assert!(v.pager().has_load_more());
    assert_eq!(app.row_count(), 0);
    assert!(!app.on_load_more_row());
}

#[tokio::test]
async fn poll_timeout_shrinks_to_the_search_deadline() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = ready_app(dir.path());
    let now = Instant::now();
    assert_eq!(app.poll_timeout(now), POLL_INTERVAL);

    type_text(&mut app, "m");
    assert!(app.poll_timeout(Instant::now()) <= POLL_INTERVAL);
    assert_eq!(app.poll_timeout(now + Duration::from_secs(10)), Duration::ZERO);
}

#[test]
fn esc_while_loading_quits() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = App::new(ViewerConfig::default(), PrefsStore::open(dir.path()));
    type_text(&mut app, "pika");
    assert_eq!(app.input.buf, "");
    assert!(!app.quit);

    press(&mut app, KeyCode::Esc);
    assert!(app.quit);
}
