/// Latches the first time an element becomes visible.
///
/// Progress bars animate from zero to their target once and keep the
/// target afterwards, no matter how often they leave and re-enter the view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn observe(&mut self, visible: bool) -> bool {
        self.revealed |= visible;
        self.revealed
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }
}

/// CSS width of a progress fill. Values are used as written, never clamped.
pub fn bar_width(percentage: i32, revealed: bool) -> String {
    let width = if revealed { percentage } else { 0 };
    format!("{width}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_targets_percentage_exactly() {
        assert_eq!(bar_width(0, true), "0%");
        assert_eq!(bar_width(100, true), "100%");
        assert_eq!(bar_width(87, true), "87%");
        assert_eq!(bar_width(87, false), "0%");
    }

    #[test]
    fn test_latch_reveals_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.revealed());
    }

    #[test]
    fn test_fresh_latch_starts_hidden() {
        let mut latch = RevealLatch::default();
        latch.observe(true);
        let fresh = RevealLatch::default();
        assert!(!fresh.revealed());
    }

    #[test]
    fn test_out_of_range_is_not_normalised() {
        assert_eq!(bar_width(120, true), "120%");
        assert_eq!(bar_width(-5, true), "-5%");
    }
}
