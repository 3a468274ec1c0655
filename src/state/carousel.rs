use std::time::Duration;

use crate::config::SiteConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// +1 or -1, selects which side the incoming item slides from.
    pub fn sign(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Request for an auto-advance timer. A tick is honoured only while its
/// epoch is still the carousel's current epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTicket {
    pub epoch: u64,
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indicator {
    Dot { index: usize },
    Current { index: usize, label: String },
}

/// Index, direction and hover state of the project gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    len: usize,
    index: usize,
    direction: Direction,
    hovering: bool,
    epoch: u64,
    interval: Duration,
    swipe_threshold: f64,
    swipe_start: Option<f64>,
    outgoing: Option<usize>,
}

impl Carousel {
    pub fn new(len: usize, config: &SiteConfig) -> Self {
        Self {
            len,
            index: 0,
            direction: Direction::Forward,
            hovering: false,
            epoch: 0,
            interval: config.carousel_interval(),
            swipe_threshold: config.swipe_threshold,
            swipe_start: None,
            outgoing: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn hovering(&self) -> bool {
        self.hovering
    }

    fn jump(&mut self, index: usize, direction: Direction) {
        self.direction = direction;
        if index != self.index {
            self.outgoing = Some(self.index);
            self.index = index;
            self.epoch += 1;
        }
    }

    /// Item still playing its exit animation, if any. Only the most recent
    /// departure is kept, so at most two items are ever mounted.
    pub fn outgoing(&self) -> Option<usize> {
        self.outgoing
    }

    /// Exit animation of `index` finished; stale notifications are ignored.
    pub fn finish_exit(&mut self, index: usize) {
        if self.outgoing == Some(index) {
            self.outgoing = None;
        }
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.jump((self.index + 1) % self.len, Direction::Forward);
    }

    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.jump((self.index + self.len - 1) % self.len, Direction::Backward);
    }

    /// Jumps straight to `target`; out-of-range targets are ignored.
    pub fn go_to(&mut self, target: usize) {
        if target >= self.len {
            return;
        }
        let direction = if target > self.index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.jump(target, direction);
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        if self.hovering != hovering {
            self.hovering = hovering;
            self.epoch += 1;
        }
    }

    pub fn touch_start(&mut self, x: f64) {
        self.swipe_start = Some(x);
    }

    /// Finishes a swipe. Leftward swipes beyond the threshold go forward,
    /// rightward ones go back; shorter swipes are ignored.
    pub fn touch_end(&mut self, x: f64) -> Option<Direction> {
        let start = self.swipe_start.take()?;
        let delta = x - start;
        if delta.abs() <= self.swipe_threshold {
            return None;
        }
        if delta > 0.0 {
            self.prev();
            Some(Direction::Backward)
        } else {
            self.next();
            Some(Direction::Forward)
        }
    }

    /// The timer that should be running now, if any.
    pub fn schedule(&self) -> Option<TimerTicket> {
        if self.hovering || self.len < 2 {
            return None;
        }
        Some(TimerTicket {
            epoch: self.epoch,
            delay: self.interval,
        })
    }

    /// Timer callback. Returns whether the carousel advanced.
    pub fn tick(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch || self.schedule().is_none() {
            return false;
        }
        self.next();
        true
    }

    pub fn indicators(&self) -> Vec<Indicator> {
        (0..self.len)
            .map(|index| {
                if index == self.index {
                    Indicator::Current {
                        index,
                        label: format!("{}/{}", index + 1, self.len),
                    }
                } else {
                    Indicator::Dot { index }
                }
            })
            .collect()
    }
}

/// A timer that can be cancelled before it fires.
pub trait Cancel {
    fn cancel(self);
}

/// Holds at most one live timer; arming a new one cancels the previous.
#[derive(Debug)]
pub struct TimerSlot<H: Cancel> {
    handle: Option<H>,
}

impl<H: Cancel> Default for TimerSlot<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H: Cancel> TimerSlot<H> {
    pub fn arm(&mut self, handle: H) {
        self.disarm();
        self.handle = Some(handle);
    }

    pub fn disarm(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn carousel(len: usize) -> Carousel {
        Carousel::new(len, &SiteConfig::default())
    }

    struct FakeTimer {
        alive: Rc<Cell<i32>>,
    }

    impl FakeTimer {
        fn start(alive: &Rc<Cell<i32>>) -> Self {
            alive.set(alive.get() + 1);
            Self {
                alive: Rc::clone(alive),
            }
        }
    }

    impl Cancel for FakeTimer {
        fn cancel(self) {
            self.alive.set(self.alive.get() - 1);
        }
    }

    #[test]
    fn test_next_wraps_and_returns_after_len_steps() {
        for start in 0..3 {
            let mut c = carousel(3);
            c.go_to(start);
            for _ in 0..3 {
                c.next();
                assert!(c.index() < c.len());
            }
            assert_eq!(c.index(), start);
        }
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut c = carousel(3);
        c.prev();
        assert_eq!(c.index(), 2);
        assert_eq!(c.direction(), Direction::Backward);
        assert_eq!(c.direction().sign(), -1);
    }

    #[test]
    fn test_go_to_sets_direction_from_target() {
        let mut c = carousel(4);
        c.go_to(3);
        assert_eq!((c.index(), c.direction()), (3, Direction::Forward));
        c.go_to(1);
        assert_eq!((c.index(), c.direction()), (1, Direction::Backward));
        c.go_to(9);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_swipe_threshold_boundary() {
        let mut c = carousel(3);
        c.touch_start(200.0);
        assert_eq!(c.touch_end(151.0), None);
        assert_eq!(c.index(), 0);

        c.touch_start(200.0);
        assert_eq!(c.touch_end(149.0), Some(Direction::Forward));
        assert_eq!(c.index(), 1);

        c.touch_start(100.0);
        assert_eq!(c.touch_end(151.0), Some(Direction::Backward));
        assert_eq!(c.index(), 0);

        c.touch_start(100.0);
        assert_eq!(c.touch_end(149.0), None);
    }

    #[test]
    fn test_touch_end_without_start_is_ignored() {
        let mut c = carousel(3);
        assert_eq!(c.touch_end(0.0), None);
    }

    #[test]
    fn test_hover_suspends_auto_advance() {
        let mut c = carousel(3);
        let ticket = c.schedule().expect("timer runs while not hovering");
        assert_eq!(ticket.delay, Duration::from_secs(5));
        c.set_hovering(true);
        assert_eq!(c.schedule(), None);
        assert!(!c.tick(ticket.epoch));
        c.set_hovering(false);
        let resumed = c.schedule().expect("timer resumes");
        assert!(c.tick(resumed.epoch));
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_stale_tick_is_ignored() {
        let mut c = carousel(3);
        let stale = c.schedule().expect("timer scheduled");
        c.next();
        assert!(!c.tick(stale.epoch));
        assert_eq!(c.index(), 1);
        let fresh = c.schedule().expect("timer rescheduled");
        assert_ne!(fresh.epoch, stale.epoch);
        assert!(c.tick(fresh.epoch));
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_at_most_one_timer_alive() {
        let alive = Rc::new(Cell::new(0));
        let mut slot = TimerSlot::default();
        let mut c = carousel(3);

        let sync = |c: &Carousel, slot: &mut TimerSlot<FakeTimer>| {
            slot.disarm();
            if c.schedule().is_some() {
                slot.arm(FakeTimer::start(&alive));
            }
        };

        sync(&c, &mut slot);
        for step in 0..12 {
            match step % 4 {
                0 => c.next(),
                1 => c.set_hovering(true),
                2 => c.set_hovering(false),
                _ => c.prev(),
            }
            sync(&c, &mut slot);
            assert!(alive.get() <= 1);
        }
        slot.disarm();
        assert_eq!(alive.get(), 0);
        assert!(!slot.is_armed());
    }

    #[test]
    fn test_indicators_show_position_pill() {
        let mut c = carousel(3);
        c.go_to(1);
        assert_eq!(
            c.indicators(),
            vec![
                Indicator::Dot { index: 0 },
                Indicator::Current {
                    index: 1,
                    label: "2/3".to_string()
                },
                Indicator::Dot { index: 2 },
            ]
        );
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut c = carousel(0);
        c.next();
        c.prev();
        assert!(c.is_empty());
        assert_eq!(c.schedule(), None);
        assert!(c.indicators().is_empty());
    }

    #[test]
    fn test_departing_item_stays_until_exit_finishes() {
        let mut c = carousel(3);
        assert_eq!(c.outgoing(), None);
        c.next();
        assert_eq!(c.outgoing(), Some(0));
        assert_eq!(c.direction(), Direction::Forward);
        c.finish_exit(0);
        assert_eq!(c.outgoing(), None);
    }

    #[test]
    fn test_only_latest_departure_is_kept() {
        let mut c = carousel(3);
        c.next();
        c.next();
        assert_eq!(c.outgoing(), Some(1));
        // the replaced item's animation end arrives late
        c.finish_exit(0);
        assert_eq!(c.outgoing(), Some(1));
        c.prev();
        assert_eq!(c.outgoing(), Some(2));
        assert_eq!(c.direction(), Direction::Backward);
    }

    #[test]
    fn test_jump_to_same_index_has_no_departure() {
        let mut c = carousel(3);
        c.go_to(0);
        assert_eq!(c.outgoing(), None);
        let mut single = carousel(1);
        single.next();
        assert_eq!(single.outgoing(), None);
    }
}
