use leptos::prelude::*;

use crate::content::{Icon, SiteContent};
use crate::state::PageEvent;

use super::cursor::HoverReport;
use super::hero::text_runs;
use super::homepage::Page;
use super::icon::IconGlyph;
use super::skill_bar::SkillBar;

#[component]
pub fn About(content: &'static SiteContent, hover: HoverReport) -> impl IntoView {
    let page = expect_context::<Page>();
    let active_category = page.select(|s| s.active_skill_category.clone());
    let profile = &content.profile;

    let facts = [
        (Icon::Users, "姓名", profile.name.clone()),
        (Icon::Calendar, "出生日期", profile.birth_date.clone()),
        (Icon::Phone, "电话", profile.phone.clone()),
        (Icon::Mail, "邮箱", profile.email.clone()),
    ];

    let pills = content
        .skills
        .categories
        .iter()
        .map(|category| {
            let id = category.id.clone();
            let name = category.name.clone();
            let is_active = {
                let id = id.clone();
                move || active_category.with(|active| *active == id)
            };
            view! {
                <button
                    class=move || {
                        if is_active() {
                            "flex items-center gap-2 px-4 py-2 rounded-full text-sm bg-white text-black transition-colors"
                        } else {
                            "flex items-center gap-2 px-4 py-2 rounded-full text-sm bg-zinc-800 text-gray-300 hover:bg-zinc-700 transition-colors"
                        }
                    }
                    on:click=move |_| page.dispatch(PageEvent::SelectSkillCategory(id.clone()))
                    on:mouseenter={
                        let name = name.clone();
                        move |_| hover.enter(name.clone())
                    }
                    on:mouseleave=move |_| hover.leave()
                >
                    <IconGlyph icon=category.icon />
                    {name.clone()}
                </button>
            }
        })
        .collect_view();

    view! {
        <section id="about" class="py-24 bg-zinc-950">
            <div class="container mx-auto px-6">
                <h2 class="text-4xl font-bold mb-16 text-center animate-rise">"关于我"</h2>
                <div class="grid md:grid-cols-2 gap-12">
                    <div class="space-y-8">
                        <div>
                            <h3 class="text-2xl font-semibold mb-6">"个人资料"</h3>
                            <ul class="space-y-4">
                                {facts
                                    .into_iter()
                                    .map(|(icon, label, value)| {
                                        view! {
                                            <li
                                                class="flex items-center gap-4"
                                                on:mouseenter=move |_| hover.enter("")
                                                on:mouseleave=move |_| hover.leave()
                                            >
                                                <span class="p-2 bg-white/10 rounded-full">
                                                    <IconGlyph icon />
                                                </span>
                                                <span class="text-gray-400 w-20">{label}</span>
                                                <span class="text-white">{value}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                        <div>
                            <h3 class="text-2xl font-semibold mb-6">"个人优势"</h3>
                            <div class="space-y-4 text-gray-300 leading-relaxed">
                                {profile
                                    .biography
                                    .iter()
                                    .map(|paragraph| view! { <p>{text_runs(paragraph.clone())}</p> })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                    <div>
                        <h3 class="text-2xl font-semibold mb-6">"专业技能"</h3>
                        <div class="flex flex-wrap gap-3 mb-8">{pills}</div>
                        {move || {
                            let entries = active_category
                                .with(|id| content.skills.category(id).map(|c| c.skills.clone()))
                                .unwrap_or_default();
                            view! {
                                <div class="space-y-6 animate-rise">
                                    {entries
                                        .into_iter()
                                        .map(|entry| view! { <SkillBar entry /> })
                                        .collect_view()}
                                </div>
                            }
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}
