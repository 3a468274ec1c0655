use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config::SiteConfig;
use crate::content::SiteContent;
use crate::state::{PageEvent, PageState, Section, SectionMap};

use super::about::About;
use super::contact::Contact;
use super::cursor::{CursorOverlay, HoverReport};
use super::education::Education;
use super::experience::ExperienceSection;
use super::footer::Footer;
use super::header::Header;
use super::hero::{Hero, VideoDivider};

/// Handle to the page-level state shared through context.
#[derive(Clone, Copy)]
pub struct Page(RwSignal<PageState>);

impl Page {
    pub fn new(state: PageState) -> Self {
        Self(RwSignal::new(state))
    }

    pub fn dispatch(self, event: PageEvent) {
        self.0.update(|state| state.apply(event));
    }

    /// Memoized slice of the state; subscribers rerun only when it changes.
    pub fn select<T>(self, f: impl Fn(&PageState) -> T + Send + Sync + 'static) -> Memo<T>
    where
        T: Clone + PartialEq + Send + Sync + 'static,
    {
        Memo::new(move |_| self.0.with(|state| f(state)))
    }
}

fn section_element(section: Section) -> Option<HtmlElement> {
    document()
        .get_element_by_id(section.id())?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn measure_sections() -> SectionMap {
    SectionMap::from_offsets(Section::ALL.into_iter().filter_map(|section| {
        let el = section_element(section)?;
        Some((
            section,
            f64::from(el.offset_top()),
            f64::from(el.offset_height()),
        ))
    }))
}

/// Closes the mobile menu and smooth-scrolls so the section clears the fixed header.
pub fn scroll_to_section(page: Page, section: Section) {
    page.dispatch(PageEvent::NavigateTo(section));
    let Some(el) = section_element(section) else {
        log::warn!("no element for section #{}", section.id());
        return;
    };
    let top = page
        .0
        .with_untracked(|state| state.scroll_target(f64::from(el.offset_top())));
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

#[component]
pub fn HomePage() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();
    let config = expect_context::<SiteConfig>();

    let page = Page::new(PageState::new(content, &config));
    provide_context(page);
    let hover = HoverReport::for_page(page);

    // removed again when the page unmounts
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let scroll_y = window().scroll_y().unwrap_or_default();
        page.dispatch(PageEvent::Scrolled {
            scroll_y,
            layout: measure_sections(),
        });
    });

    view! {
        <div class="relative min-h-screen bg-black text-white overflow-hidden md:cursor-none">
            <CursorOverlay />
            <Header name=content.profile.name.clone() hover />
            <Hero profile=content.profile.clone() hover />
            <About content hover />
            <ExperienceSection content hover />
            <Education education=content.education.clone() hover />
            <VideoDivider profile=content.profile.clone() />
            <Contact profile=content.profile.clone() hover />
            <Footer profile=content.profile.clone() hover />
        </div>
    }
}
