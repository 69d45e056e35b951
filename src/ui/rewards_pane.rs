use crate::app::AppState;
use crate::domain::Achievement;
use crate::ui::styles::{border_style, locked_style, points_style, title_style, unlocked_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Number of badges per grid row
const GRID_COLUMNS: usize = 2;

/// Render the rewards page: point total plus the achievements grid
pub fn render_rewards_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let mut lines = Vec::new();

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::raw("  Total points: "),
        Span::styled(format!("⭐ {}", app.points_total), points_style()),
    ]));
    lines.push(Line::raw(""));
    lines.push(Line::styled("  Achievements", title_style()));
    lines.push(Line::raw(""));

    for row in app.achievements.chunks(GRID_COLUMNS) {
        let mut spans = vec![Span::raw("  ")];
        for achievement in row {
            spans.push(badge_span(achievement));
        }
        lines.push(Line::from(spans));
        lines.push(Line::raw(""));
    }

    let unlocked = app.achievements.iter().filter(|a| a.unlocked).count();
    let title = format!(" 🏆 Rewards — {}/{} unlocked ", unlocked, app.achievements.len());

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(title, title_style())),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

/// One badge cell, padded to line the grid up
fn badge_span(achievement: &Achievement) -> Span<'static> {
    if achievement.unlocked {
        Span::styled(
            format!("{} {:<18}", achievement.icon, achievement.name),
            unlocked_style(),
        )
    } else {
        Span::styled(format!("🔒 {:<18}", achievement.name), locked_style())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::starter_achievements;

    #[test]
    fn test_badge_span_locked_hides_icon() {
        let badges = starter_achievements();
        // "Full Week" is seeded locked
        let locked = badges.iter().find(|a| !a.unlocked).unwrap();
        let span = badge_span(locked);
        assert!(span.content.contains("🔒"));
        assert!(!span.content.contains(locked.icon));
    }

    #[test]
    fn test_badge_span_unlocked_shows_icon() {
        let badges = starter_achievements();
        let unlocked = badges.iter().find(|a| a.unlocked).unwrap();
        let span = badge_span(unlocked);
        assert!(span.content.contains(unlocked.icon));
    }
}
