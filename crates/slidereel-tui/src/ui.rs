use ratatui::Frame;

use crate::app::App;
use crate::widgets::{ButtonsWidget, CarouselWidget, PaginationWidget, StatusBarWidget};

/// Lay out and draw one frame
pub fn draw(frame: &mut Frame, app: &mut App) {
    app.layout(frame.area());

    CarouselWidget::render(frame, app.areas.mask, app);
    ButtonsWidget::render(frame, app);
    if let Some(area) = app.areas.pagination {
        PaginationWidget::render(frame, area, app);
    }
    StatusBarWidget::render(frame, app.areas.status, app);
}
