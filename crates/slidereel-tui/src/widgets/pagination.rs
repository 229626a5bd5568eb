use ratatui::{
    layout::Rect,
    style::Style,
    text::Span,
    widgets::Block,
    Frame,
};

use crate::app::App;

/// One dot per item; the marked dot follows the carousel's indicator
pub struct PaginationWidget;

impl PaginationWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        frame.render_widget(Block::default().style(Style::default().bg(theme.bg0)), area);

        let count = app.carousel.item_count();
        let active = app.carousel.stage().active_indicator();
        for index in 0..count {
            let Some(column) = app.areas.indicator_column(index, count) else {
                continue;
            };
            let (symbol, color) = if active == Some(index) {
                ("●", theme.indicator_active)
            } else {
                ("○", theme.indicator)
            };
            frame.render_widget(
                Span::styled(symbol, Style::default().fg(color)),
                Rect::new(column, area.y, 1, 1),
            );
        }
    }
}
