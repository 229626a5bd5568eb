use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Block,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::App;
use crate::stage::CaptionState;

pub struct CarouselWidget;

impl CarouselWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        frame.render_widget(Block::default().style(Style::default().bg(theme.bg0)), area);

        let carousel = &app.carousel;
        let stage = carousel.stage();
        let width = stage.item_cells();
        if area.width == 0 || area.height < 3 || width < 3 {
            return;
        }

        let settled = !carousel.is_animating();
        let captions = carousel.config().captions_enabled();
        let buf = frame.buffer_mut();

        for card in stage.cards() {
            let Some(item) = carousel.items().get(card.item) else {
                continue;
            };
            let active = settled && card.item == carousel.current_index();
            let border = if active {
                Style::default().fg(theme.card_active).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.card_border)
            };
            let caption = item
                .caption
                .as_deref()
                .filter(|_| captions)
                .map(|text| (text, stage.caption(card.item)))
                .filter(|(_, state)| state.is_visible());

            let card_area = CardArea {
                clip: area,
                left: i32::from(area.x) + card.offset.round() as i32,
                width,
            };
            card_area.paint_frame(buf, border);
            card_area.paint_centered(
                buf,
                area.y + (area.height - 1) / 2,
                &item.title,
                Style::default().fg(theme.fg1).add_modifier(Modifier::BOLD),
            );
            if let Some((text, state)) = caption {
                if area.height >= 5 {
                    let style = theme.caption(matches!(
                        state,
                        CaptionState::FadingIn(_) | CaptionState::FadingOut(_)
                    ));
                    card_area.paint_centered(buf, area.y + area.height - 2, text, style);
                }
            }
        }
    }
}

/// Horizontal span of one card, clipped to the mask
struct CardArea {
    clip: Rect,
    left: i32,
    width: u16,
}

impl CardArea {
    fn paint_frame(&self, buf: &mut Buffer, style: Style) {
        let inner = usize::from(self.width - 2);
        let top = format!("┌{}┐", "─".repeat(inner));
        let middle = format!("│{}│", " ".repeat(inner));
        let bottom = format!("└{}┘", "─".repeat(inner));

        let last = self.clip.y + self.clip.height - 1;
        for y in self.clip.y..=last {
            let row = if y == self.clip.y {
                &top
            } else if y == last {
                &bottom
            } else {
                &middle
            };
            put(buf, self.clip, self.left, y, row, style);
        }
    }

    fn paint_centered(&self, buf: &mut Buffer, y: u16, text: &str, style: Style) {
        // one cell of padding inside each border
        let room = usize::from(self.width.saturating_sub(4));
        let text = fit(text, room);
        let pad = (room - text.width()) / 2;
        let x = self.left + 2 + pad as i32;
        put(buf, self.clip, x, y, &text, style);
    }
}

/// Truncate `text` to `max` columns, marking the cut with an ellipsis
pub(crate) fn fit(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Write `text` starting at column `x` (possibly off-screen), keeping only
/// the cells inside `clip`
fn put(buf: &mut Buffer, clip: Rect, x: i32, y: u16, text: &str, style: Style) {
    let left = i32::from(clip.x);
    let right = i32::from(clip.x + clip.width);
    let mut x = x;
    for c in text.chars() {
        let w = c.width().unwrap_or(0) as i32;
        if w == 0 {
            continue;
        }
        if x >= left && x + w <= right {
            if let Some(cell) = buf.cell_mut((x as u16, y)) {
                cell.set_char(c).set_style(style);
            }
            for extra in 1..w {
                if let Some(cell) = buf.cell_mut(((x + extra) as u16, y)) {
                    cell.reset();
                }
            }
        }
        x += w;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.x + buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_fit_truncates_with_ellipsis() {
        assert_eq!(fit("lighthouse", 20), "lighthouse");
        assert_eq!(fit("lighthouse", 6), "light…");
        assert_eq!(fit("lighthouse", 0), "");
    }

    #[test]
    fn test_card_is_clipped_to_mask() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        let clip = Rect::new(2, 0, 6, 3);
        let card = CardArea {
            clip,
            left: -2,
            width: 8,
        };
        card.paint_frame(&mut buf, Style::default());
        // columns -2..=5 drawn, only 2..=5 visible
        assert_eq!(row(&buf, 0), "  ───┐    ");
        assert_eq!(row(&buf, 1), "     │    ");
        assert_eq!(row(&buf, 2), "  ───┘    ");
    }

    #[test]
    fn test_title_is_centered() {
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        let card = CardArea {
            clip: area,
            left: 0,
            width: 12,
        };
        card.paint_centered(&mut buf, 1, "abcd", Style::default());
        assert_eq!(row(&buf, 1), "    abcd    ");
    }
}
