pub mod app;
pub mod event;
pub mod input;
pub mod keymap;
pub mod layout;
pub mod stage;
pub mod theme;
pub mod tween;
pub mod ui;
pub mod widgets;

pub use app::App;
pub use stage::TerminalStage;
pub use theme::Theme;
