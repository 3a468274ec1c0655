use leptos::prelude::*;

use crate::content::{Education as EducationRecord, Icon};

use super::cursor::HoverReport;
use super::icon::IconGlyph;

#[component]
pub fn Education(education: EducationRecord, hover: HoverReport) -> impl IntoView {
    let EducationRecord {
        school,
        degree,
        period,
        score,
        courses,
        honours,
    } = education;

    view! {
        <section id="education" class="py-24 bg-zinc-950">
            <div class="container mx-auto px-6 max-w-4xl">
                <h2 class="text-4xl font-bold mb-16 text-center animate-rise">"教育背景"</h2>
                <div
                    class="p-8 rounded-xl bg-zinc-900 border border-zinc-800 animate-rise"
                    on:mouseenter=move |_| hover.enter("")
                    on:mouseleave=move |_| hover.leave()
                >
                    <div class="flex flex-col md:flex-row md:items-center justify-between gap-4 mb-8">
                        <div>
                            <h3 class="text-2xl font-bold text-white">{school}</h3>
                            <p class="text-gray-400 mt-1">{degree}</p>
                        </div>
                        <div class="text-sm text-gray-500 md:text-right">
                            <div class="flex items-center gap-1 md:justify-end">
                                <IconGlyph icon=Icon::Calendar />
                                {period}
                            </div>
                            {score.map(|score| view! { <div class="mt-1 text-gray-300">{score}</div> })}
                        </div>
                    </div>
                    <div class="grid md:grid-cols-2 gap-8">
                        <div>
                            <h4 class="text-lg font-semibold mb-4">"主修科目"</h4>
                            <div class="flex flex-wrap gap-2">
                                {courses
                                    .into_iter()
                                    .map(|course| {
                                        view! {
                                            <span class="px-3 py-1 bg-zinc-800 text-gray-300 rounded-full text-sm">
                                                {course}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <div>
                            <h4 class="text-lg font-semibold mb-4">"在校荣誉"</h4>
                            <ul class="space-y-3">
                                {honours
                                    .into_iter()
                                    .map(|honour| {
                                        view! {
                                            <li class="flex items-start gap-3 text-sm">
                                                <IconGlyph icon=Icon::Award class="text-gray-400 mt-0.5" />
                                                <span class="text-gray-500 whitespace-nowrap">{honour.date}</span>
                                                <span class="text-gray-300">{honour.title}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
