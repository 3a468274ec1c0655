use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::content::{Icon, WorkExperience};

use super::cursor::HoverReport;
use super::icon::IconGlyph;

/// Image-backed card shown in the horizontal strip. Hovering brightens the
/// image, unclamps the description and fades in the optional fields.
#[component]
pub fn ExperienceCard(experience: WorkExperience, index: usize, hover: HoverReport) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let image = config
        .image_or_placeholder(experience.image.as_deref())
        .to_string();
    let delay = format!("{}ms", config.stagger(index).as_millis());
    let WorkExperience {
        company,
        position,
        period,
        team_size,
        description,
        accounts,
        models,
        ..
    } = experience;
    let hover_name = company.clone();

    view! {
        <div
            class="group relative flex-shrink-0 w-[320px] md:w-[400px] h-[480px] rounded-xl overflow-hidden bg-zinc-900 animate-rise"
            style:animation-delay=delay
            on:mouseenter=move |_| hover.enter(hover_name.clone())
            on:mouseleave=move |_| hover.leave()
        >
            <img
                src=image
                alt=company.clone()
                draggable="false"
                class="absolute inset-0 w-full h-full object-cover opacity-40 group-hover:opacity-60 group-hover:scale-105 transition-all duration-500"
            />
            <div class="absolute inset-0 bg-gradient-to-t from-black via-black/70 to-transparent" />
            <div class="relative z-10 h-full flex flex-col justify-end p-6">
                <div class="flex flex-wrap items-center gap-3 text-gray-400 text-sm mb-3">
                    <span class="flex items-center gap-1">
                        <IconGlyph icon=Icon::Calendar />
                        {period}
                    </span>
                    {team_size
                        .map(|team| {
                            view! {
                                <span class="flex items-center gap-1">
                                    <IconGlyph icon=Icon::Users />
                                    {team}
                                </span>
                            }
                        })}
                </div>
                <h3 class="text-2xl font-bold text-white mb-1">{company}</h3>
                <p class="text-gray-300 mb-4">{position}</p>
                <p class="text-gray-400 text-sm line-clamp-3 group-hover:line-clamp-none transition-all">
                    {description}
                </p>
                {[accounts, models]
                    .into_iter()
                    .flatten()
                    .map(|text| {
                        view! {
                            <p class="mt-3 text-xs text-gray-300 opacity-0 group-hover:opacity-100 transition-opacity duration-500">
                                {text}
                            </p>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
