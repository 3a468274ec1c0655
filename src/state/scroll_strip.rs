use crate::config::SiteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Snapshot of a horizontally scrollable viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowVisibility {
    pub left: bool,
    pub right: bool,
}

impl Default for ArrowVisibility {
    // before the first measurement only the right arrow is offered
    fn default() -> Self {
        Self {
            left: false,
            right: true,
        }
    }
}

/// Drag-to-pan and arrow state of the horizontal strip.
#[derive(Debug, Clone, PartialEq)]
pub struct DragScroll {
    dragging: bool,
    start_x: f64,
    start_offset: f64,
    multiplier: f64,
    step_ratio: f64,
    tolerance: f64,
}

impl DragScroll {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            dragging: false,
            start_x: 0.0,
            start_offset: 0.0,
            multiplier: config.drag_multiplier,
            step_ratio: config.scroll_step_ratio,
            tolerance: config.arrow_tolerance,
        }
    }

    pub fn arrows(&self, metrics: ScrollMetrics) -> ArrowVisibility {
        let max_offset = metrics.scroll_width - metrics.client_width - self.tolerance;
        ArrowVisibility {
            left: metrics.offset > 0.0,
            right: metrics.offset < max_offset,
        }
    }

    /// Signed horizontal distance for one arrow click.
    pub fn step(&self, direction: ScrollDirection, client_width: f64) -> f64 {
        let amount = client_width * self.step_ratio;
        match direction {
            ScrollDirection::Left => -amount,
            ScrollDirection::Right => amount,
        }
    }

    pub fn press(&mut self, x: f64, offset: f64) {
        self.dragging = true;
        self.start_x = x;
        self.start_offset = offset;
    }

    /// New scroll offset for a pointer at `x`, or `None` when not dragging.
    pub fn move_to(&self, x: f64) -> Option<f64> {
        if !self.dragging {
            return None;
        }
        let walk = (x - self.start_x) * self.multiplier;
        Some(self.start_offset - walk)
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip() -> DragScroll {
        DragScroll::new(&SiteConfig::default())
    }

    fn metrics(offset: f64) -> ScrollMetrics {
        ScrollMetrics {
            offset,
            scroll_width: 2000.0,
            client_width: 800.0,
        }
    }

    #[test]
    fn test_arrows_at_start() {
        let arrows = strip().arrows(metrics(0.0));
        assert!(!arrows.left);
        assert!(arrows.right);
    }

    #[test]
    fn test_arrows_respect_tolerance_at_end() {
        let s = strip();
        // 2000 - 800 - 10 = 1190
        assert!(s.arrows(metrics(1189.0)).right);
        assert!(!s.arrows(metrics(1190.0)).right);
        assert!(!s.arrows(metrics(1200.0)).right);
        assert!(s.arrows(metrics(1200.0)).left);
    }

    #[test]
    fn test_step_is_eighty_percent_of_width() {
        let s = strip();
        assert_eq!(s.step(ScrollDirection::Right, 1000.0), 800.0);
        assert_eq!(s.step(ScrollDirection::Left, 1000.0), -800.0);
    }

    #[test]
    fn test_drag_amplifies_pointer_delta() {
        let mut s = strip();
        assert_eq!(s.move_to(50.0), None);
        s.press(100.0, 300.0);
        assert_eq!(s.move_to(60.0), Some(380.0));
        assert_eq!(s.move_to(150.0), Some(200.0));
        s.release();
        assert!(!s.is_dragging());
        assert_eq!(s.move_to(0.0), None);
    }

    #[test]
    fn test_drag_is_not_clamped() {
        let mut s = strip();
        s.press(0.0, 10.0);
        assert_eq!(s.move_to(100.0), Some(-190.0));
    }
}
