use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;

pub struct ButtonsWidget;

impl ButtonsWidget {
    pub fn render(frame: &mut Frame, app: &App) {
        if let Some(area) = app.areas.prev_button {
            Self::render_button(frame, area, "‹", app);
        }
        if let Some(area) = app.areas.next_button {
            Self::render_button(frame, area, "›", app);
        }
    }

    fn render_button(frame: &mut Frame, area: Rect, label: &str, app: &App) {
        let theme = &app.theme;
        let color = if app.carousel.is_animating() {
            theme.grey0
        } else {
            theme.button
        };

        let mut lines = vec![Line::raw(""); usize::from(area.height.saturating_sub(1) / 2)];
        lines.push(Line::styled(
            label.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().style(Style::default().bg(theme.bg1)));
        frame.render_widget(paragraph, area);
    }
}
