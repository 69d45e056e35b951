use crate::app::AppState;
use crate::domain::{Mood, UiMode};
use crate::ui::styles::{
    border_style, default_style, error_style, hint_style, modal_title_style, mood_selected_style,
    title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the emotional check-in page
pub fn render_checkin_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" 💜 Emotional Check-in ", title_style()));

    let lines = if app.checkin.submitted {
        success_lines()
    } else {
        form_lines(app)
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn form_lines(app: &AppState) -> Vec<Line<'_>> {
    let mut lines = Vec::new();

    lines.push(Line::raw(""));
    lines.push(Line::raw("  How are you feeling right now?"));
    lines.push(Line::raw(""));

    // Mood picker row
    let mut mood_spans = vec![Span::raw("  ")];
    for (idx, mood) in Mood::all().iter().enumerate() {
        let label = format!(" {} {} {} ", idx + 1, mood.symbol(), mood.name());
        let style = if app.checkin.selected_mood == Some(*mood) {
            mood_selected_style()
        } else {
            default_style()
        };
        mood_spans.push(Span::styled(label, style));
        mood_spans.push(Span::raw(" "));
    }
    lines.push(Line::from(mood_spans));
    lines.push(Line::raw(""));

    // Optional note
    let note_label = if app.ui_mode == UiMode::EditingNote {
        "  Note: (editing)"
    } else {
        "  Note: (press n to edit)"
    };
    lines.push(Line::styled(note_label, hint_style()));

    let mut note_spans = vec![
        Span::raw("  > "),
        Span::styled(app.checkin.note.as_str(), modal_title_style()),
    ];
    if app.ui_mode == UiMode::EditingNote {
        note_spans.push(Span::styled("█", modal_title_style()));
    }
    lines.push(Line::from(note_spans));
    lines.push(Line::raw(""));

    if let Some(prompt) = app.checkin.prompt {
        lines.push(Line::styled(format!("  ⚠ {}", prompt), error_style()));
    } else {
        lines.push(Line::raw(""));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled("  Enter to share how you feel", hint_style()));

    lines
}

fn success_lines() -> Vec<Line<'static>> {
    vec![
        Line::raw(""),
        Line::raw(""),
        Line::styled("  💜 Thank you for checking in!", title_style()),
        Line::raw(""),
        Line::raw("  Sharing how you feel is a big step. +10 points!"),
        Line::raw(""),
        Line::from(vec![
            Span::raw("  Press "),
            Span::styled("Enter", modal_title_style()),
            Span::raw(" when you're done"),
        ]),
    ]
}
