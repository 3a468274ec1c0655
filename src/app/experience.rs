use leptos::prelude::*;

use crate::content::SiteContent;
use crate::state::PageEvent;

use super::cursor::HoverReport;
use super::experience_card::ExperienceCard;
use super::homepage::Page;
use super::horizontal_scroll::HorizontalScroll;
use super::project_gallery::ProjectGallery;
use super::summary_tile::SummaryTile;
use super::timeline_card::TimelineCard;

#[component]
pub fn ExperienceSection(content: &'static SiteContent, hover: HoverReport) -> impl IntoView {
    let page = expect_context::<Page>();
    let history = &content.history;

    let timeline = history
        .experiences
        .iter()
        .enumerate()
        .map(|(index, experience)| {
            let id = experience.id;
            let is_expanded = page.select(move |s| s.is_expanded(id));
            let on_toggle = Callback::new(move |_| page.dispatch(PageEvent::ToggleExperience(id)));
            view! {
                <TimelineCard
                    experience=experience.clone()
                    index
                    is_current=experience.current
                    is_expanded
                    on_toggle
                />
            }
        })
        .collect_view();

    view! {
        <section id="experience" class="py-24 bg-black">
            <div class="container mx-auto px-6">
                <h2 class="text-4xl font-bold mb-16 text-center animate-rise">"工作经历"</h2>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-6 mb-16">
                    {history
                        .summary
                        .iter()
                        .map(|stat| view! { <SummaryTile stat=stat.clone() hover /> })
                        .collect_view()}
                </div>
            </div>
            <HorizontalScroll>
                {history
                    .experiences
                    .iter()
                    .enumerate()
                    .map(|(index, experience)| {
                        view! { <ExperienceCard experience=experience.clone() index hover /> }
                    })
                    .collect_view()}
            </HorizontalScroll>
            <div class="container mx-auto px-6 mt-16 max-w-4xl">{timeline}</div>
            <div class="container mx-auto px-6 mt-24">
                <h3 class="text-3xl font-bold mb-10 text-center">"项目案例展示"</h3>
                <ProjectGallery projects=content.projects.clone() hover />
            </div>
        </section>
    }
}
