//! Rendered-screen tests for the full and inline layouts.
//!
//! Apps use ASCII glyphs with motion off so frames are stable, except where a
//! test is about the motion itself.

mod common;

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Frame, Terminal};

use cupid_engine::{
    App, AppSettings, CELEBRATION_DURATION, GlobalCounters, MemoryCounterStore, Rules, UiOptions,
    wording,
};
use cupid_tui::{apply_key, draw, draw_inline};

use common::{reach_proposal, reject, shared_app, still_ascii};
use vt100_backend::ScreenBackend;

type Screen = Terminal<ScreenBackend>;

fn render(app: &App, width: u16, height: u16, view: fn(&mut Frame, &App)) -> Screen {
    let mut terminal = Terminal::new(ScreenBackend::new(width, height)).expect("terminal");
    terminal.draw(|frame| view(frame, app)).expect("draw");
    terminal
}

fn screen(app: &App) -> Screen {
    render(app, 80, 30, draw)
}

fn fresh_app() -> (App, Arc<MemoryCounterStore>) {
    let store = Arc::new(MemoryCounterStore::new());
    (shared_app(Rules::default(), &store), store)
}

fn press(app: &mut App, code: KeyCode) -> bool {
    apply_key(app, KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn counting_screen_shows_instruction_heart_and_counter() {
    let (app, _) = fresh_app();
    let terminal = screen(&app);
    let screen = terminal.backend();
    let text = screen.contents();

    assert!(text.contains("A Special Message >>->"), "{text}");
    assert!(text.contains("Tap the heart 10 times!"), "{text}");
    assert!(text.contains("<3 0 / 10"), "{text}");
    assert!(text.contains("Space/Enter tap the heart"), "{text}");
    assert!(text.contains('#'), "heart sprite missing:\n{text}");

    let title = screen.row_of("A Special Message").expect("title row");
    let counter = screen.row_of("0 / 10").expect("counter row");
    let heart = screen.row_of("#").expect("heart row");
    assert!(title < heart && heart < counter);
}

#[test]
fn taps_update_message_and_grow_the_heart() {
    let (mut app, _) = fresh_app();
    let before = screen(&app).backend().contents().matches('#').count();

    for _ in 0..3 {
        assert!(!press(&mut app, KeyCode::Char(' ')));
    }
    let after = screen(&app);
    let text = after.backend().contents();

    assert!(text.contains("Almost there!"), "{text}");
    assert!(text.contains("<3 3 / 10"), "{text}");
    assert!(text.matches('#').count() > before);
}

#[test]
fn proposal_offers_both_buttons_with_yes_focused() {
    let (mut app, _) = fresh_app();
    for _ in 0..10 {
        press(&mut app, KeyCode::Enter);
    }
    let terminal = screen(&app);
    let screen = terminal.backend();
    let text = screen.contents();

    assert!(text.contains("Will you be my Valentine? @}->-"), "{text}");
    assert!(text.contains("> YES! <3"), "{text}");
    assert!(text.contains("No </3"), "{text}");
    assert!(text.contains("Left/Right focus"), "{text}");

    let row = screen.row_of("YES!").expect("button row");
    let yes_col = screen.col_of(row, "YES!").expect("yes col");
    let no_col = screen.col_of(row, "No </3").expect("no col");
    assert!(yes_col < no_col);
    assert!(screen.is_inverse(yes_col, u16::try_from(row).expect("row")));
}

#[test]
fn focus_moves_to_no_with_arrow_keys() {
    let (mut app, _) = fresh_app();
    reach_proposal(&mut app);
    press(&mut app, KeyCode::Right);

    let text = screen(&app).backend().contents();
    assert!(text.contains("> No </3"), "{text}");
    assert!(!text.contains("> YES!"), "{text}");
}

#[test]
fn yes_button_widens_with_each_rejection() {
    let (mut app, _) = fresh_app();
    reach_proposal(&mut app);

    let width_of_yes = |app: &App| {
        let terminal = screen(app);
        let screen = terminal.backend();
        let row = screen.row_of("YES!").expect("button row");
        let no_col = screen.col_of(row, "No").expect("no col");
        let yes_col = screen.col_of(row, "YES!").expect("yes col");
        no_col - yes_col
    };

    let before = width_of_yes(&app);
    reject(&mut app, 3);
    assert!(width_of_yes(&app) > before);
}

#[test]
fn escalation_toast_appears_at_tenth_rejection() {
    let (mut app, _) = fresh_app();
    reach_proposal(&mut app);

    reject(&mut app, 9);
    assert!(!screen(&app).backend().contents().contains(wording::ESCALATION_NOTICE));

    assert!(!press(&mut app, KeyCode::Char('n')));
    let text = screen(&app).backend().contents();
    assert!(text.contains(wording::ESCALATION_NOTICE), "{text}");
}

#[test]
fn withdrawn_no_is_replaced_by_notice() {
    let (mut app, _) = fresh_app();
    reach_proposal(&mut app);
    reject(&mut app, 14);

    let text = screen(&app).backend().contents();
    assert!(text.contains("No is no longer an option... ;)"), "{text}");
    assert!(!text.contains("No </3"), "{text}");
    assert!(text.contains("> YES! <3"), "{text}");
    assert!(text.contains("Enter/y yes"), "{text}");
    assert!(!text.contains("n no"), "{text}");
}

#[test]
fn answered_screen_shows_global_counts() {
    let store = Arc::new(MemoryCounterStore::with_counters(GlobalCounters::new(41, 7)));
    let mut app = shared_app(Rules::default(), &store);
    reach_proposal(&mut app);
    reject(&mut app, 2);
    press(&mut app, KeyCode::Char('y'));

    let text = screen(&app).backend().contents();
    assert!(text.contains("I knew you'd say yes! :)"), "{text}");
    assert!(text.contains(wording::ANSWERED_SUBTITLE), "{text}");
    assert!(text.contains("<3 Global 'Yes' Count: 42"), "{text}");
    assert!(text.contains("</3 Global 'No' Attempts: 9"), "{text}");
    assert!(!text.contains("YES!"), "{text}");
}

#[test]
fn balloons_rise_after_yes_then_clear() {
    let moving = UiOptions {
        reduced_motion: false,
        ..still_ascii()
    };
    let settings = AppSettings {
        ui_options: moving,
        ..AppSettings::default()
    };
    let mut app = App::new(settings, Box::new(MemoryCounterStore::new()));
    let (mut still, _) = fresh_app();
    for each in [&mut app, &mut still] {
        reach_proposal(each);
        press(each, KeyCode::Char('y'));
    }
    let balloons = |app: &App| screen(app).backend().contents().matches('O').count();

    // Launch frame: nothing has left the ground yet.
    assert!(app.celebration().is_some());
    assert_eq!(balloons(&app), 0);

    app.advance(CELEBRATION_DURATION / 2);
    still.advance(CELEBRATION_DURATION / 2);
    let text = screen(&app).backend().contents();
    assert!(balloons(&app) > 0, "no balloons:\n{text}");
    assert_eq!(balloons(&still), 0);
    assert!(still.celebration().is_none());

    app.advance(CELEBRATION_DURATION);
    assert!(app.celebration().is_none());
    assert_eq!(balloons(&app), 0);
}

#[test]
fn inline_view_tracks_each_stage() {
    let (mut app, _) = fresh_app();
    press(&mut app, KeyCode::Char('h'));
    let text = render(&app, 60, 8, draw_inline).backend().contents();
    assert!(text.contains("A Special Message >>->"), "{text}");
    assert!(text.contains("<3........."), "{text}");
    assert!(text.contains("You can do it!"), "{text}");

    reach_proposal(&mut app);
    let text = render(&app, 60, 8, draw_inline).backend().contents();
    assert!(text.contains("YES! <3"), "{text}");
    assert!(text.contains("No </3"), "{text}");

    press(&mut app, KeyCode::Char('y'));
    let text = render(&app, 60, 8, draw_inline).backend().contents();
    assert!(text.contains("Global 'Yes' Count: 1"), "{text}");
    assert!(text.contains("q quit"), "{text}");

    let terminal = render(&app, 60, 8, draw_inline);
    let title = terminal.backend().row_of(wording::ANSWERED_TITLE).expect("title row");
    let subtitle = terminal.backend().row_of(wording::ANSWERED_SUBTITLE);
    assert_eq!(subtitle, Some(title + 1), "{text}");
}

#[test]
fn tiny_terminal_renders_every_stage() {
    let (mut app, _) = fresh_app();
    for (width, height) in [(20, 6), (4, 3), (1, 1)] {
        render(&app, width, height, draw);
        render(&app, width, height, draw_inline);
    }

    reach_proposal(&mut app);
    reject(&mut app, 10);
    for (width, height) in [(20, 6), (4, 3), (1, 1)] {
        render(&app, width, height, draw);
        render(&app, width, height, draw_inline);
    }

    app.choose_yes();
    for (width, height) in [(20, 6), (4, 3), (1, 1)] {
        render(&app, width, height, draw);
        render(&app, width, height, draw_inline);
    }
}
