use cd_calculator::{
    app::{App, Effect, UiEvent, EMPTY_DISPLAY},
    config::Settings,
    input::handle_key,
    ui::ui,
    NavigationState, TERM_DEFAULT,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

fn press(app: &mut App, code: KeyCode) -> Option<Effect> {
    let event = handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))?;
    app.dispatch(event)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn test_next_refused_until_term_chosen() {
    let mut app = App::default();
    assert_eq!(press(&mut app, KeyCode::Enter), None);
    assert_eq!(press(&mut app, KeyCode::Enter), None);
    assert_eq!(app.screen(), NavigationState::Selection);
    assert_eq!(app.term_label, TERM_DEFAULT);

    press(&mut app, KeyCode::Down);
    assert_eq!(app.term_label, "8-Month");
    assert_eq!(
        press(&mut app, KeyCode::Enter),
        Some(Effect::ShowScreen(NavigationState::Calculation))
    );
}

#[test]
fn test_choosing_sentinel_again_blocks_next() {
    let mut app = App::default();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Up);
    assert_eq!(app.term_label, TERM_DEFAULT);
    assert_eq!(press(&mut app, KeyCode::Enter), None);
}

#[test]
fn test_full_session() {
    let mut app = App::default();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    type_text(&mut app, "1000");
    assert_eq!(
        press(&mut app, KeyCode::Enter),
        Some(Effect::RenderResult {
            mean: "$4.34".into(),
            total: "$1034.72".into(),
        })
    );

    // back, pick 15-Month, recalculate with the same principal
    assert_eq!(
        press(&mut app, KeyCode::Esc),
        Some(Effect::ShowScreen(NavigationState::Selection))
    );
    assert_eq!(app.total_display, "$1034.72");
    assert_eq!(app.principal_input, "1000");

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        press(&mut app, KeyCode::Enter),
        Some(Effect::RenderResult {
            mean: "$4.41".into(),
            total: "$1066.09".into(),
        })
    );

    assert_eq!(press(&mut app, KeyCode::Char('q')), Some(Effect::Shutdown));
}

#[test]
fn test_bad_principal_renders_blank_and_recovers() {
    let mut app = App::default();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.term_label, "29-Month");

    type_text(&mut app, "1..2");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mean_display, EMPTY_DISPLAY);
    assert_eq!(app.total_display, EMPTY_DISPLAY);

    for _ in 0..4 {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "5000");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mean_display, "$17.73");
    assert_eq!(app.total_display, "$5514.09");

    type_text(&mut app, "-");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.total_display, EMPTY_DISPLAY);
}

#[test]
fn test_round_trip_leaves_rates_untouched() {
    let mut app = App::default();
    let before = app.rates.terms().to_vec();

    app.dispatch(UiEvent::TermChosen("15-Month".into()));
    app.dispatch(UiEvent::NavigateForward);
    app.dispatch(UiEvent::CalculateRequested("2500".into()));
    let shown = (app.mean_display.clone(), app.total_display.clone());

    assert_eq!(
        app.dispatch(UiEvent::NavigateBack),
        Some(Effect::ShowScreen(NavigationState::Selection))
    );
    assert_eq!(app.dispatch(UiEvent::NavigateBack), None);
    assert_eq!(app.screen(), NavigationState::Selection);
    assert_eq!(app.rates.terms(), before.as_slice());
    assert_eq!((app.mean_display, app.total_display), shown);
}

fn screen_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

fn line_after<'a>(lines: &'a [String], heading: &str) -> &'a str {
    let index = lines
        .iter()
        .position(|line| line.contains(heading))
        .unwrap_or_else(|| panic!("{heading:?} not rendered"));
    &lines[index + 1]
}

#[test]
fn test_selection_screen_render() {
    let settings = Settings::default();
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    let app = App::default();

    terminal.draw(|f| ui(f, &app, &settings)).unwrap();
    let lines = screen_lines(&terminal);
    let text = lines.join("\n");

    assert!(text.contains("Certificate of Deposit Calculator"));
    assert!(text.contains("Select a term for your CD."));

    let highlighted = lines
        .iter()
        .find(|line| line.contains(TERM_DEFAULT))
        .expect("placeholder row rendered");
    assert!(highlighted.contains('▶'));

    let eight_month = lines
        .iter()
        .find(|line| line.contains("8-Month"))
        .expect("8-Month row rendered");
    assert!(eight_month.contains("5.12% APR"));
    assert!(!eight_month.contains('▶'));
}

#[test]
fn test_calculation_screen_render() {
    let settings = Settings::default();
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    let mut app = App::default();

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "1000");
    press(&mut app, KeyCode::Enter);

    terminal.draw(|f| ui(f, &app, &settings)).unwrap();
    let lines = screen_lines(&terminal);
    let text = lines.join("\n");

    assert!(text.contains("Calculate CD Gains"));
    assert!(text.contains("8-Month at 5.12% annual"));
    assert!(text.contains("$1000"));
    assert!(line_after(&lines, "Total Capital at End of Term:").contains("$1034.72"));
    assert!(line_after(&lines, "Average dividends per month:").contains("$4.34"));
}

#[test]
fn test_failed_calculation_renders_blank() {
    let settings = Settings::default();
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    let mut app = App::default();

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "1000");
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "-");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.total_display, EMPTY_DISPLAY);

    terminal.draw(|f| ui(f, &app, &settings)).unwrap();
    let lines = screen_lines(&terminal);

    for heading in ["Total Capital at End of Term:", "Average dividends per month:"] {
        let shown = line_after(&lines, heading);
        assert!(shown.contains('$'));
        assert!(!shown.chars().any(|c| c.is_ascii_digit()));
    }
    assert!(!lines.join("\n").contains("$1034.72"));
}
