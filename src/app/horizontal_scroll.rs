use leptos::{ev, html, prelude::*};
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config::SiteConfig;
use crate::content::Icon;
use crate::state::{ArrowVisibility, DragScroll, ScrollDirection, ScrollMetrics};

use super::icon::IconGlyph;

fn metrics(el: &HtmlElement) -> ScrollMetrics {
    ScrollMetrics {
        offset: f64::from(el.scroll_left()),
        scroll_width: f64::from(el.scroll_width()),
        client_width: f64::from(el.client_width()),
    }
}

/// Horizontally scrollable strip with arrow buttons and drag-to-pan.
#[component]
pub fn HorizontalScroll(children: Children) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let strip_ref = NodeRef::<html::Div>::new();
    let drag = StoredValue::new(DragScroll::new(&config));
    let arrows = RwSignal::new(ArrowVisibility::default());

    let update_arrows = move || {
        if let Some(el) = strip_ref.get_untracked() {
            let visible = drag.with_value(|d| d.arrows(metrics(&el)));
            arrows.set(visible);
        }
    };

    // first measurement once the strip is mounted
    Effect::new(move |_| {
        if strip_ref.get().is_some() {
            update_arrows();
        }
    });

    let scroll = move |direction: ScrollDirection| {
        let Some(el) = strip_ref.get_untracked() else {
            return;
        };
        let left = drag.with_value(|d| d.step(direction, f64::from(el.client_width())));
        let options = ScrollToOptions::new();
        options.set_left(left);
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_by_with_scroll_to_options(&options);
    };

    let press = move |page_x: i32| {
        if let Some(el) = strip_ref.get_untracked() {
            let x = f64::from(page_x - el.offset_left());
            let offset = f64::from(el.scroll_left());
            drag.update_value(|d| d.press(x, offset));
        }
    };

    // returns whether the strip was panned
    let pan = move |page_x: i32| -> bool {
        let Some(el) = strip_ref.get_untracked() else {
            return false;
        };
        let x = f64::from(page_x - el.offset_left());
        match drag.with_value(|d| d.move_to(x)) {
            Some(offset) => {
                el.set_scroll_left(offset.round() as i32);
                true
            }
            None => false,
        }
    };

    let release = move || drag.update_value(|d| d.release());

    view! {
        <div class="relative group">
            <Show when=move || arrows.get().left>
                <button
                    class="absolute left-4 top-1/2 -translate-y-1/2 z-10 p-3 rounded-full bg-black/60 text-white hover:bg-black/80 opacity-0 group-hover:opacity-100 transition-opacity animate-fade-in"
                    aria-label="上一个"
                    on:click=move |_| scroll(ScrollDirection::Left)
                >
                    <IconGlyph icon=Icon::ChevronLeft class="text-xl" />
                </button>
            </Show>
            <Show when=move || arrows.get().right>
                <button
                    class="absolute right-4 top-1/2 -translate-y-1/2 z-10 p-3 rounded-full bg-black/60 text-white hover:bg-black/80 opacity-0 group-hover:opacity-100 transition-opacity animate-fade-in"
                    aria-label="下一个"
                    on:click=move |_| scroll(ScrollDirection::Right)
                >
                    <IconGlyph icon=Icon::ChevronRight class="text-xl" />
                </button>
            </Show>
            <div
                node_ref=strip_ref
                class="flex overflow-x-auto hide-scrollbar py-8 px-6 cursor-grab active:cursor-grabbing select-none"
                on:scroll=move |_| update_arrows()
                on:mousedown=move |ev: ev::MouseEvent| press(ev.page_x())
                on:mousemove=move |ev: ev::MouseEvent| {
                    if pan(ev.page_x()) {
                        ev.prevent_default();
                    }
                }
                on:mouseup=move |_| release()
                on:mouseleave=move |_| release()
                on:touchstart=move |ev: ev::TouchEvent| {
                    if let Some(touch) = ev.touches().get(0) {
                        press(touch.page_x());
                    }
                }
                // vertical page scrolling stays native on touch
                on:touchmove=move |ev: ev::TouchEvent| {
                    if let Some(touch) = ev.touches().get(0) {
                        pan(touch.page_x());
                    }
                }
                on:touchend=move |_| release()
            >
                <div class="flex gap-8">{children()}</div>
            </div>
        </div>
    }
}
