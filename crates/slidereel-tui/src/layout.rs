//! Screen areas and hit testing for mouse input.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Width of each navigation button column
const BUTTON_WIDTH: u16 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Areas {
    pub mask: Rect,
    pub prev_button: Option<Rect>,
    pub next_button: Option<Rect>,
    pub pagination: Option<Rect>,
    pub status: Rect,
}

/// What a mouse position points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Mask,
    PrevButton,
    NextButton,
    /// Pagination entry by item index
    Indicator(usize),
    Outside,
}

impl Areas {
    /// Split the frame into mask, optional buttons, pagination row and status bar
    pub fn compute(size: Rect, prev: bool, next: bool, pagination: bool) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(if pagination { 1 } else { 0 }),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(if prev { BUTTON_WIDTH } else { 0 }),
                Constraint::Min(1),
                Constraint::Length(if next { BUTTON_WIDTH } else { 0 }),
            ])
            .split(rows[0]);

        Self {
            mask: columns[1],
            prev_button: prev.then_some(columns[0]),
            next_button: next.then_some(columns[2]),
            pagination: pagination.then_some(rows[1]),
            status: rows[2],
        }
    }

    /// Column of the pagination dot for `index`, laid out centered with
    /// one blank cell between dots
    pub fn indicator_column(&self, index: usize, count: usize) -> Option<u16> {
        let row = self.pagination?;
        let used = (count * 2).saturating_sub(1) as u16;
        let start = row.x + row.width.saturating_sub(used) / 2;
        let column = start + (index as u16) * 2;
        (index < count && column < row.x + row.width).then_some(column)
    }

    pub fn hit(&self, column: u16, row: u16, count: usize) -> Hit {
        let pos = Position::new(column, row);
        if self.prev_button.is_some_and(|r| r.contains(pos)) {
            return Hit::PrevButton;
        }
        if self.next_button.is_some_and(|r| r.contains(pos)) {
            return Hit::NextButton;
        }
        if self.mask.contains(pos) {
            return Hit::Mask;
        }
        if self.pagination.is_some_and(|r| r.contains(pos)) {
            return (0..count)
                .find(|&i| self.indicator_column(i, count) == Some(column))
                .map(Hit::Indicator)
                .unwrap_or(Hit::Outside);
        }
        Hit::Outside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_with_everything_enabled() {
        let areas = Areas::compute(Rect::new(0, 0, 80, 20), true, true, true);
        assert_eq!(areas.mask, Rect::new(5, 0, 70, 18));
        assert_eq!(areas.prev_button, Some(Rect::new(0, 0, 5, 18)));
        assert_eq!(areas.next_button, Some(Rect::new(75, 0, 5, 18)));
        assert_eq!(areas.pagination, Some(Rect::new(0, 18, 80, 1)));
        assert_eq!(areas.status, Rect::new(0, 19, 80, 1));
    }

    #[test]
    fn test_mask_takes_full_width_without_buttons() {
        let areas = Areas::compute(Rect::new(0, 0, 80, 20), false, false, false);
        assert_eq!(areas.mask.width, 80);
        assert!(areas.prev_button.is_none());
        assert!(areas.pagination.is_none());
    }

    #[test]
    fn test_hit_testing() {
        let areas = Areas::compute(Rect::new(0, 0, 80, 20), true, true, true);
        assert_eq!(areas.hit(1, 3, 5), Hit::PrevButton);
        assert_eq!(areas.hit(78, 3, 5), Hit::NextButton);
        assert_eq!(areas.hit(40, 3, 5), Hit::Mask);
        assert_eq!(areas.hit(40, 19, 5), Hit::Outside);

        // 5 dots use 9 columns, centered in 80: start at 35
        assert_eq!(areas.indicator_column(0, 5), Some(35));
        assert_eq!(areas.hit(35, 18, 5), Hit::Indicator(0));
        assert_eq!(areas.hit(39, 18, 5), Hit::Indicator(2));
        assert_eq!(areas.hit(36, 18, 5), Hit::Outside);
    }
}
