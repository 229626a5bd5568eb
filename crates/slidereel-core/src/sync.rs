//! Caption visibility and pagination marker, kept in step with the index.

use crate::carousel::Carousel;
use crate::events::Lifecycle;
use crate::stage::Stage;

impl<S: Stage> Carousel<S> {
    fn current_has_caption(&self) -> bool {
        self.config.captions_managed()
            && self
                .items
                .get(self.current)
                .is_some_and(|item| item.caption.is_some())
    }

    /// Fade out the caption of the current item
    pub(crate) fn hide_caption(&mut self) {
        if self.current_has_caption() {
            self.stage.hide_caption(self.current);
        }
    }

    /// Fade in the caption of the current item
    pub(crate) fn show_caption(&mut self) {
        if self.current_has_caption() {
            self.stage.show_caption(self.current);
        }
    }

    /// Move the active pagination marker to the current index
    pub(crate) fn update_indicator(&mut self) {
        if self.config.navigation_enabled() {
            self.stage.mark_indicator(self.current);
        }
    }

    /// End-of-transition sync: caption, indicator, then `after`
    pub(crate) fn settle_ui(&mut self) {
        self.show_caption();
        self.update_indicator();
        self.emit(Lifecycle::After);
    }
}
