use crate::app::AppState;
use crate::domain::{routine_sections, task_checkbox, TaskRecord};
use crate::ui::styles::{
    border_style, completed_style, default_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the routine page: tasks grouped by time of day
pub fn render_routine_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let sections = routine_sections(&app.tasks);

    let mut items: Vec<ListItem> = Vec::new();
    let mut row_index = 0;

    for section in &sections {
        let header = format!(" {} {}", section.category.symbol(), section.category.title());
        items.push(ListItem::new(Line::styled(header, title_style())));

        for task in &section.tasks {
            let line = create_task_line(task, app.config.use_emoji);
            let style = if row_index == app.selected_task {
                selected_style()
            } else if task.completed {
                completed_style()
            } else {
                default_style()
            };
            items.push(ListItem::new(line).style(style));
            row_index += 1;
        }
    }

    let title = format!(
        " 📋 My Routine — {} of {} done ",
        app.completed_today, app.total_today
    );
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

/// Create a single routine row
/// Format: [✅] Brush teeth  🕒 07:00
fn create_task_line(task: &TaskRecord, use_emoji: bool) -> Line<'static> {
    let checkbox = task_checkbox(task.completed, use_emoji);
    Line::from(vec![
        Span::raw(format!("   {} ", checkbox)),
        Span::raw(task.title.clone()),
        Span::raw(format!("  🕒 {}", task.time_formatted())),
    ])
}
