use leptos::{either::Either, prelude::*};

use crate::config::SiteConfig;
use crate::content::{Icon, Profile, TextRun};
use crate::media::background_video;
use crate::state::Section;

use super::cursor::HoverReport;
use super::homepage::{scroll_to_section, Page};
use super::icon::IconGlyph;

pub fn text_runs(runs: Vec<TextRun>) -> impl IntoView {
    runs.into_iter()
        .map(|run| {
            if run.strong {
                Either::Left(view! { <strong class="text-white">{run.text}</strong> })
            } else {
                Either::Right(run.text)
            }
        })
        .collect_view()
}

#[component]
pub fn Hero(profile: Profile, hover: HoverReport) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let page = expect_context::<Page>();
    let poster = config
        .image_or_placeholder(profile.hero_poster.as_deref())
        .to_string();
    let video = profile.hero_video.as_deref().map(|src| {
        background_video(src, &poster, "absolute inset-0 w-full h-full object-cover")
    });

    view! {
        <section id="home" class="relative h-screen flex items-center justify-center overflow-hidden">
            <div class="absolute inset-0 z-0">
                <div class="absolute inset-0 bg-black/60 z-10" />
                {match video {
                    Some(markup) => Either::Left(view! { <div class="absolute inset-0" inner_html=markup /> }),
                    None => Either::Right(view! {
                        <img src=poster alt="" class="absolute inset-0 w-full h-full object-cover" />
                    }),
                }}
            </div>
            <div class="container mx-auto px-6 relative z-20 text-center animate-rise">
                <h1 class="text-5xl md:text-7xl font-bold tracking-tighter mb-6">{profile.name}</h1>
                <p class="text-xl md:text-2xl text-gray-300 max-w-2xl mx-auto mb-8">{profile.headline}</p>
                <button
                    class="inline-flex items-center px-8 py-3 bg-white text-black rounded-full font-medium hover:bg-gray-200 transition-colors"
                    on:click=move |_| scroll_to_section(page, Section::About)
                    on:mouseenter=move |_| hover.enter("探索")
                    on:mouseleave=move |_| hover.leave()
                >
                    "了解更多"
                    <IconGlyph icon=Icon::ArrowRight class="ml-2" />
                </button>
            </div>
            <button
                class="absolute bottom-10 left-1/2 -translate-x-1/2 z-20 animate-bounce"
                aria-label="滚动"
                on:click=move |_| scroll_to_section(page, Section::About)
                on:mouseenter=move |_| hover.enter("滚动")
                on:mouseleave=move |_| hover.leave()
            >
                <IconGlyph icon=Icon::ChevronDown class="text-3xl text-white/70" />
            </button>
        </section>
    }
}

/// Full-bleed video band between education and contact.
#[component]
pub fn VideoDivider(profile: Profile) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let poster = config.image_or_placeholder(None).to_string();
    let video = profile
        .divider_video
        .as_deref()
        .map(|src| background_video(src, &poster, "w-full h-full object-cover"))
        .unwrap_or_default();

    view! {
        <section class="relative h-[60vh] overflow-hidden">
            <div class="absolute inset-0 bg-black/50 z-10" />
            <div class="absolute inset-0" inner_html=video />
            <div class="absolute inset-0 z-20 flex flex-col items-center justify-center text-center px-6">
                <h2 class="text-4xl md:text-5xl font-bold mb-6 animate-rise">{profile.divider_title}</h2>
                <p class="text-xl text-gray-300 max-w-2xl">{text_runs(profile.divider_lines)}</p>
            </div>
        </section>
    }
}
