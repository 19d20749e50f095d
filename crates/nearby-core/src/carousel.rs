// Rust guideline compliant 2026-10-19

//! Bounded, non-wrapping cursor over a listing's media sequence.
//!
//! Each listing owns one `CarouselState`. Navigation stops at both ends;
//! the rendering layer hides the previous/next affordance at a boundary
//! rather than disabling it.

use crate::{Error, Result};
use std::fmt;

/// Notification emitted whenever the current index changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionChanged {
    /// Index before the change.
    pub previous: usize,
    /// Index after the change.
    pub current: usize,
    /// Number of items in the carousel.
    pub item_count: usize,
}

impl PositionChanged {
    /// Whether the previous affordance is shown at the new position.
    #[must_use]
    pub fn show_previous(&self) -> bool {
        self.current > 0
    }

    /// Whether the next affordance is shown at the new position.
    #[must_use]
    pub fn show_next(&self) -> bool {
        self.current + 1 < self.item_count
    }
}

type Observer = Box<dyn FnMut(&PositionChanged)>;

/// Cursor state for one listing's image gallery.
///
/// Inactive when `item_count == 0`: navigation is a no-op and there is no
/// current index.
pub struct CarouselState {
    item_count: usize,
    current_index: usize,
    observer: Option<Observer>,
}

impl fmt::Debug for CarouselState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselState")
            .field("item_count", &self.item_count)
            .field("current_index", &self.current_index)
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

impl CarouselState {
    /// Creates a carousel positioned at the first item.
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            current_index: 0,
            observer: None,
        }
    }

    /// Creates a carousel that reports position changes to `observer`.
    pub fn with_observer<F>(item_count: usize, observer: F) -> Self
    where
        F: FnMut(&PositionChanged) + 'static,
    {
        Self {
            item_count,
            current_index: 0,
            observer: Some(Box::new(observer)),
        }
    }

    /// Replaces the position-changed observer.
    pub fn set_observer<F>(&mut self, observer: F)
    where
        F: FnMut(&PositionChanged) + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    /// Returns the number of media items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Returns true when there is at least one item.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.item_count > 0
    }

    /// Returns the current index, or `None` when inactive.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.is_active().then_some(self.current_index)
    }

    /// Whether the previous affordance is shown.
    #[must_use]
    pub fn show_previous(&self) -> bool {
        self.is_active() && self.current_index > 0
    }

    /// Whether the next affordance is shown.
    #[must_use]
    pub fn show_next(&self) -> bool {
        self.is_active() && self.current_index + 1 < self.item_count
    }

    /// Advances one item unless already at the last one.
    pub fn next(&mut self) -> Option<PositionChanged> {
        if !self.show_next() {
            return None;
        }
        self.move_to(self.current_index + 1)
    }

    /// Steps back one item unless already at the first one.
    pub fn previous(&mut self) -> Option<PositionChanged> {
        if !self.show_previous() {
            return None;
        }
        self.move_to(self.current_index - 1)
    }

    /// Jumps to `index`.
    ///
    /// # Returns
    ///
    /// The emitted notification, or `None` if `index` is already current.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index` is not in `[0, item_count - 1]`.
    pub fn go_to(&mut self, index: usize) -> Result<Option<PositionChanged>> {
        if index >= self.item_count {
            return Err(Error::IndexOutOfRange {
                index,
                item_count: self.item_count,
            });
        }
        Ok(self.move_to(index))
    }

    fn move_to(&mut self, index: usize) -> Option<PositionChanged> {
        if index == self.current_index {
            return None;
        }

        let event = PositionChanged {
            previous: self.current_index,
            current: index,
            item_count: self.item_count,
        };
        self.current_index = index;

        if let Some(observer) = self.observer.as_mut() {
            observer(&event);
        }
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_observer_sees_every_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut carousel =
            CarouselState::with_observer(3, move |event| sink.borrow_mut().push(event.current));

        carousel.next();
        carousel.next();
        carousel.next();
        carousel.previous();

        assert_eq!(*seen.borrow(), vec![1, 2, 1]);
    }

    #[test]
    fn test_single_item_hides_both_affordances() {
        let carousel = CarouselState::new(1);
        assert!(!carousel.show_previous());
        assert!(!carousel.show_next());
    }
}
