use std::rc::Rc;

use log::trace;
use yew::prelude::*;
use yew_hooks::use_interval;

/// Emitted on every tick that moved the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideChange {
    pub deactivate: usize,
    pub activate: usize,
}

/// One rotating set of items. Each carousel owns its own index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_active(&self, index: usize) -> bool {
        !self.is_empty() && index == self.index
    }

    pub fn tick(&mut self) -> Option<SlideChange> {
        if self.is_empty() {
            return None;
        }
        let deactivate = self.index;
        self.index = (self.index + 1) % self.len;
        Some(SlideChange {
            deactivate,
            activate: self.index,
        })
    }
}

pub enum CarouselAction {
    Tick,
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CarouselAction::Tick => {
                let mut next = *self;
                match next.tick() {
                    Some(change) => {
                        trace!("slide {} -> {}", change.deactivate, change.activate);
                        Rc::new(next)
                    }
                    None => self,
                }
            }
        }
    }
}

/// Rotates `len` items every `interval_ms`. The timer is only running
/// while there is something to rotate and stops when the component unmounts.
#[hook]
pub fn use_carousel(len: usize, interval_ms: u32) -> UseReducerHandle<Carousel> {
    let carousel = use_reducer_eq(move || Carousel::new(len));
    {
        let carousel = carousel.clone();
        let millis = if len == 0 { 0 } else { interval_ms };
        use_interval(move || carousel.dispatch(CarouselAction::Tick), millis);
    }
    carousel
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_active_after_ticks() {
        for len in 1..6 {
            let mut carousel = Carousel::new(len);
            for ticks in 0..20 {
                let active: Vec<usize> = (0..len).filter(|i| carousel.is_active(*i)).collect();
                assert_eq!(active, vec![ticks % len]);
                carousel.tick();
            }
        }
    }

    #[test]
    fn test_tick_reports_change() {
        let mut carousel = Carousel::new(3);
        assert_eq!(
            carousel.tick(),
            Some(SlideChange {
                deactivate: 0,
                activate: 1
            })
        );
        carousel.tick();
        assert_eq!(
            carousel.tick(),
            Some(SlideChange {
                deactivate: 2,
                activate: 0
            })
        );
    }

    #[test]
    fn test_empty_carousel_does_nothing() {
        let mut carousel = Carousel::new(0);
        assert_eq!(carousel.tick(), None);
        assert!(!carousel.is_active(0));

        let state = Rc::new(carousel);
        let next = state.clone().reduce(CarouselAction::Tick);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_single_item_stays_active() {
        let mut carousel = Carousel::new(1);
        carousel.tick();
        assert!(carousel.is_active(0));
    }
}
