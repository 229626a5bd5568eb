use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::keymap::Keymap;
use crate::layout::{Areas, Hit};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Next button
    Next,
    /// Previous button
    Prev,
    /// Digit shortcut, by item index
    Goto(usize),
    /// Pagination click, by item index
    Paginate(usize),
    /// Key forwarded to the carousel by key code
    Key(u16),
    ToggleStepByStep,
    /// Pointer moved; true while it is over the mask
    Hover(bool),
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, keymap: &Keymap) -> Action {
    keymap.resolve(key)
}

/// Handle a mouse event against the current screen areas
pub fn handle_mouse_event(mouse: MouseEvent, areas: &Areas, count: usize) -> Action {
    let hit = areas.hit(mouse.column, mouse.row, count);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match hit {
            Hit::PrevButton => Action::Prev,
            Hit::NextButton => Action::Next,
            Hit::Indicator(index) => Action::Paginate(index),
            Hit::Mask | Hit::Outside => Action::None,
        },
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Action::Hover(hit == Hit::Mask),
        _ => Action::None,
    }
}
