use leptos::prelude::*;

use crate::content::Icon;
use crate::state::{PageEvent, Section};

use super::cursor::HoverReport;
use super::homepage::{scroll_to_section, Page};
use super::icon::IconGlyph;

#[component]
pub fn Header(name: String, hover: HoverReport) -> impl IntoView {
    let page = expect_context::<Page>();
    let solid = page.select(|s| s.header_is_solid());
    let active = page.select(|s| s.active_section);
    let menu_open = page.select(|s| s.mobile_menu_open);

    let nav_link = move |section: Section, mobile: bool| {
        let class = move || {
            let is_active = active.get() == section;
            match (mobile, is_active) {
                (false, true) => "relative text-sm font-medium text-white transition-colors",
                (false, false) => {
                    "relative text-sm font-medium text-gray-400 hover:text-white transition-colors"
                }
                (true, true) => "block py-2 text-lg font-medium text-white",
                (true, false) => "block py-2 text-lg font-medium text-gray-400",
            }
        };
        view! {
            <a
                href=format!("#{}", section.id())
                class=class
                on:click=move |ev| {
                    ev.prevent_default();
                    scroll_to_section(page, section);
                }
                on:mouseenter=move |_| hover.enter(section.label())
                on:mouseleave=move |_| hover.leave()
            >
                {section.label()}
                <Show when=move || !mobile && active.get() == section>
                    <span class="absolute -bottom-1 left-0 w-full h-0.5 bg-white animate-fade-in" />
                </Show>
            </a>
        }
    };

    view! {
        <header class=move || {
            if solid.get() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-black/80 backdrop-blur-md py-3"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent py-6"
            }
        }>
            <div class="container mx-auto px-6 flex justify-between items-center">
                <a
                    href="#home"
                    class="text-2xl font-bold tracking-tighter"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_section(page, Section::Home);
                    }
                    on:mouseenter=move |_| hover.enter("首页")
                    on:mouseleave=move |_| hover.leave()
                >
                    {name}
                </a>
                <nav class="hidden md:flex space-x-8">
                    {Section::ALL.into_iter().map(|section| nav_link(section, false)).collect_view()}
                </nav>
                <button
                    class="md:hidden text-white"
                    aria-label="菜单"
                    on:click=move |_| page.dispatch(PageEvent::ToggleMobileMenu)
                    on:mouseenter=move |_| hover.enter("菜单")
                    on:mouseleave=move |_| hover.leave()
                >
                    {move || {
                        let icon = if menu_open.get() { Icon::Close } else { Icon::Menu };
                        view! { <IconGlyph icon class="text-2xl" /> }
                    }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-black/95 backdrop-blur-md animate-expand">
                    <nav class="container mx-auto px-6 py-4 flex flex-col space-y-2">
                        {Section::ALL.into_iter().map(|section| nav_link(section, true)).collect_view()}
                    </nav>
                </div>
            </Show>
        </header>
    }
}
