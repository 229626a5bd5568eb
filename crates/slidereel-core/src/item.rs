use serde::{Deserialize, Serialize};

use crate::config::SlideConfig;

/// One slide of the carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Position in the original item order, assigned once at init
    pub original_index: usize,
    pub title: String,
    #[serde(default)]
    pub caption: Option<String>,
}

impl Item {
    pub fn new(original_index: usize, title: impl Into<String>) -> Self {
        Self {
            original_index,
            title: title.into(),
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Build items from configured slides, numbering them in order
    pub fn from_slides(slides: &[SlideConfig]) -> Vec<Item> {
        slides
            .iter()
            .enumerate()
            .map(|(i, slide)| Item {
                original_index: i,
                title: slide.title.clone(),
                caption: slide.caption.clone(),
            })
            .collect()
    }
}
