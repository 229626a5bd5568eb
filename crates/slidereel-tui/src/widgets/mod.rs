mod buttons;
mod carousel;
mod pagination;
mod status_bar;

pub use buttons::ButtonsWidget;
pub use carousel::CarouselWidget;
pub use pagination::PaginationWidget;
pub use status_bar::StatusBarWidget;
