use leptos::prelude::*;
use leptos_use::{use_mouse, UseMouseReturn};

use crate::state::{CursorMode, PageEvent};

use super::homepage::Page;

/// Enter/leave callbacks handed to hover-capable children.
///
/// Children never touch the page state directly; they report the text the
/// cursor overlay should show and the page decides what to do with it.
#[derive(Clone, Copy)]
pub struct HoverReport {
    on_enter: Callback<String>,
    on_leave: Callback<()>,
}

impl HoverReport {
    pub fn new(on_enter: Callback<String>, on_leave: Callback<()>) -> Self {
        Self { on_enter, on_leave }
    }

    pub fn for_page(page: Page) -> Self {
        Self::new(
            Callback::new(move |text| page.dispatch(PageEvent::HoverEnter(text))),
            Callback::new(move |_| page.dispatch(PageEvent::HoverLeave)),
        )
    }

    pub fn enter(self, text: impl Into<String>) {
        self.on_enter.run(text.into());
    }

    pub fn leave(self) {
        self.on_leave.run(());
    }
}

#[component]
pub fn CursorOverlay() -> impl IntoView {
    let page = expect_context::<Page>();
    let cursor = page.select(|s| s.cursor.clone());
    let UseMouseReturn { x, y, .. } = use_mouse();

    view! {
        <div
            class="pointer-events-none fixed top-0 left-0 z-[100] hidden md:flex items-center justify-center rounded-full transition-[width,height,background-color] duration-200"
            class=("w-4", move || cursor.with(|c| c.mode == CursorMode::Default))
            class=("h-4", move || cursor.with(|c| c.mode == CursorMode::Default))
            class=("bg-white/30", move || cursor.with(|c| c.mode == CursorMode::Default))
            class=("w-16", move || cursor.with(|c| c.mode == CursorMode::Link))
            class=("h-16", move || cursor.with(|c| c.mode == CursorMode::Link))
            class=("bg-white", move || cursor.with(|c| c.mode == CursorMode::Link))
            style:transform=move || format!("translate({}px, {}px) translate(-50%, -50%)", x.get(), y.get())
        >
            <span class="text-xs font-medium text-black whitespace-nowrap">
                {move || cursor.with(|c| c.text.clone())}
            </span>
        </div>
    }
}
