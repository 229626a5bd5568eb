use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::keymap::key_label;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let carousel = &app.carousel;
        let config = carousel.config();

        let mode_str = if config.step_by_step { "STEP" } else { "JUMP" };
        let timer_str = match &app.autoplay {
            Some(handle) if handle.is_paused() || app.hovering => " | PAUSED",
            Some(_) => " | AUTO",
            None => "",
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            let event = app
                .last_event
                .as_ref()
                .map(|e| format!(" | {} {}", e.kind.event_name(), e.index))
                .unwrap_or_default();
            format!(
                " {} | {}/{}{}{}",
                mode_str,
                carousel.current_index() + 1,
                carousel.item_count(),
                timer_str,
                event
            )
        };

        let keys = if config.keys {
            format!(
                "{}/{}:slide ",
                labels(&config.prev_key.codes()),
                labels(&config.next_key.codes())
            )
        } else {
            String::new()
        };
        let help_hint = format!(" q:quit {}1-9:goto s:mode ", keys);

        let padding_len = usize::from(area.width)
            .saturating_sub(status_text.chars().count() + help_hint.chars().count());

        let line = Line::from(vec![
            Span::styled(status_text, app.theme.status()),
            Span::styled(" ".repeat(padding_len), app.theme.status()),
            Span::styled(help_hint, app.theme.hint()),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

fn labels(codes: &[u16]) -> String {
    codes
        .iter()
        .map(|&code| key_label(code))
        .collect::<Vec<_>>()
        .join(",")
}
