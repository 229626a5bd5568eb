//! Host-owned registry giving one carousel per container element.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::carousel::Carousel;
use crate::stage::Stage;

#[derive(Debug)]
pub struct Registry<K, S: Stage> {
    carousels: HashMap<K, Carousel<S>>,
}

impl<K, S: Stage> Default for Registry<K, S> {
    fn default() -> Self {
        Self {
            carousels: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Debug, S: Stage> Registry<K, S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the carousel attached to `key`, building and initializing it
    /// on first use. `build` is not called when one already exists.
    pub fn attach<F>(&mut self, key: K, build: F) -> &mut Carousel<S>
    where
        F: FnOnce() -> Carousel<S>,
    {
        match self.carousels.entry(key) {
            Entry::Occupied(entry) => {
                debug!(
                    "Carousel on {:?} already constructed, returning existing instance",
                    entry.key()
                );
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                let carousel = entry.insert(build());
                carousel.init();
                carousel
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&Carousel<S>> {
        self.carousels.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut Carousel<S>> {
        self.carousels.get_mut(key)
    }

    pub fn detach(&mut self, key: &K) -> Option<Carousel<S>> {
        self.carousels.remove(key)
    }

    pub fn len(&self) -> usize {
        self.carousels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carousels.is_empty()
    }

    /// Drain stage completions for every attached carousel
    pub fn pump_all(&mut self) -> usize {
        self.carousels.values_mut().map(|c| c.pump()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SliderConfig;
    use crate::item::Item;
    use crate::stage::InstantStage;

    fn build() -> Carousel<InstantStage> {
        let items = (0..3).map(|i| Item::new(i, format!("{}", i))).collect();
        Carousel::new(items, SliderConfig::default(), InstantStage::new(200.0, 100.0))
    }

    #[test]
    fn test_attach_is_idempotent_per_key() {
        let mut registry: Registry<&str, InstantStage> = Registry::new();
        registry.attach("#gallery", build).next();
        registry.pump_all();

        let mut built_again = false;
        let carousel = registry.attach("#gallery", || {
            built_again = true;
            build()
        });
        assert_eq!(carousel.current_index(), 1);
        assert!(!built_again);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_attach_initializes_new_instances() {
        let mut registry: Registry<u32, InstantStage> = Registry::new();
        assert!(registry.attach(1, build).is_initialized());
        registry.attach(2, build);
        assert_eq!(registry.len(), 2);
        assert!(registry.detach(&1).is_some());
        assert!(registry.get(&1).is_none());
    }
}
