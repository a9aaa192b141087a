use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::App;
use crate::config::Settings;
use crate::navigation::NavigationState;

pub fn ui(f: &mut Frame, app: &App, settings: &Settings) {
    match app.screen() {
        NavigationState::Selection => render_selection_screen(f, app, settings),
        NavigationState::Calculation => render_calculation_screen(f, app),
    }
}

fn render_selection_screen(f: &mut Frame, app: &App, settings: &Settings) {
    let labels = app.rates.labels();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(labels.len() as u16 + 2),
                Constraint::Min(1),
            ]
            .as_ref(),
        )
        .split(f.size());

    let title = Paragraph::new(settings.title.as_str())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    let items: Vec<ListItem> = labels
        .iter()
        .map(|label| match app.rates.lookup(label) {
            Some(term) => ListItem::new(format!(
                "{:<10} {:.2}% APR",
                term.label,
                term.annual_rate * 100.0
            )),
            None => ListItem::new(*label).style(Style::default().fg(Color::DarkGray)),
        })
        .collect();

    let menu = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Select a term for your CD."),
        )
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.menu_cursor));
    f.render_stateful_widget(menu, chunks[1], &mut state);

    let help = Paragraph::new("j/k or ↑/↓: choose term | Enter/l/→: next | Esc/q: exit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[2]);
}

fn render_calculation_screen(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(6),
                Constraint::Min(1),
            ]
            .as_ref(),
        )
        .split(f.size());

    let title = Paragraph::new("Calculate CD Gains")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    let term_text = match app.rates.lookup(&app.term_label) {
        Some(term) => format!(
            "{} at {:.2}% annual, compounded daily",
            term.label,
            term.annual_rate * 100.0
        ),
        None => app.term_label.clone(),
    };
    let term = Paragraph::new(term_text)
        .block(Block::default().borders(Borders::ALL).title("Term"));
    f.render_widget(term, chunks[1]);

    let input = Paragraph::new(format!("${}", app.principal_input))
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Principal to be invested"),
        );
    f.render_widget(input, chunks[2]);

    let text = vec![
        Line::from(Span::styled(
            "Total Capital at End of Term:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.total_display.as_str(),
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            "Average dividends per month:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.mean_display.as_str(),
            Style::default().fg(Color::Green),
        )),
    ];
    let results = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Results"))
        .alignment(Alignment::Right);
    f.render_widget(results, chunks[3]);

    let help = Paragraph::new("Enter: calculate | Esc/←: back | q: exit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[4]);
}
