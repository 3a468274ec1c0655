//! Browser-independent UI state machines.
//!
//! Components own a signal holding one of these values and only mutate it
//! through the methods below, so the page's invariants (one expanded entry,
//! one live carousel timer, reveal-once bars) are checked here.

mod carousel;
mod page;
mod reveal;
mod scroll_strip;
mod timeline;

pub use carousel::{Cancel, Carousel, Direction, Indicator, TimerSlot, TimerTicket};
pub use page::{
    CursorMode, CursorState, PageEvent, PageState, Section, SectionMap, SectionRange,
};
pub use reveal::{bar_width, RevealLatch};
pub use scroll_strip::{ArrowVisibility, DragScroll, ScrollDirection, ScrollMetrics};
pub use timeline::{available_tabs, CardState, DetailTab};
