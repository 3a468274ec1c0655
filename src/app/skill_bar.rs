use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::config::SiteConfig;
use crate::content::{Icon, SkillEntry, SubSkill};
use crate::state::{bar_width, RevealLatch};

use super::icon::IconGlyph;

/// Flips to true the first time `target` enters the viewport and stays there.
fn reveal_once(target: NodeRef<html::Div>) -> Signal<bool> {
    let visible = use_element_visibility(target);
    let latch = RwSignal::new(RevealLatch::default());
    Effect::new(move |_| {
        let visible = visible.get();
        if visible && !latch.with_untracked(|l| l.revealed()) {
            latch.update(|l| {
                l.observe(visible);
            });
        }
    });
    Signal::derive(move || latch.with(|l| l.revealed()))
}

#[component]
pub fn SkillBar(entry: SkillEntry) -> impl IntoView {
    let SkillEntry {
        skill,
        percentage,
        description,
        sub_skills,
    } = entry;
    let (expanded, set_expanded) = signal(false);
    let bar_ref = NodeRef::<html::Div>::new();
    let revealed = reveal_once(bar_ref);
    let sub_skills = StoredValue::new(sub_skills);

    view! {
        <div class="space-y-2">
            <div
                class="flex justify-between items-center cursor-pointer group"
                on:click=move |_| set_expanded.update(|e| *e = !*e)
            >
                <div class="flex items-center">
                    <span class=move || {
                        if expanded.get() {
                            "mr-2 transition-transform duration-300 rotate-90"
                        } else {
                            "mr-2 transition-transform duration-300"
                        }
                    }>
                        <IconGlyph icon=Icon::ChevronRight class="text-gray-400 group-hover:text-white" />
                    </span>
                    <span class="text-white font-medium group-hover:text-gray-200 transition-colors">
                        {skill}
                    </span>
                </div>
                <span class="text-gray-400 text-sm">{format!("{percentage}%")}</span>
            </div>
            <div node_ref=bar_ref class="h-2 bg-zinc-800 rounded-full overflow-hidden">
                <div
                    class="h-full bg-white rounded-full transition-[width] duration-1000 ease-out"
                    style:width=move || bar_width(percentage, revealed.get())
                />
            </div>
            {description
                .map(|description| {
                    view! {
                        <Show when=move || expanded.get()>
                            <p class="text-gray-400 text-sm pl-6 animate-expand">{description.clone()}</p>
                        </Show>
                    }
                })}
            <Show when=move || expanded.get() && sub_skills.with_value(|s| !s.is_empty())>
                <div class="mt-3 pl-6 space-y-3 animate-expand">
                    {sub_skills
                        .get_value()
                        .into_iter()
                        .enumerate()
                        .map(|(index, sub)| view! { <SubSkillBar sub index /> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn SubSkillBar(sub: SubSkill, index: usize) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let bar_ref = NodeRef::<html::Div>::new();
    let revealed = reveal_once(bar_ref);
    let delay = format!("{}ms", config.stagger(index).as_millis());
    let level = sub.level;

    view! {
        <div class="space-y-1">
            <div class="flex justify-between items-center">
                <span class="text-gray-300 text-sm">{sub.name}</span>
                <span class="text-gray-500 text-xs">{format!("{level}%")}</span>
            </div>
            <div node_ref=bar_ref class="h-1.5 bg-zinc-800 rounded-full overflow-hidden">
                <div
                    class="h-full bg-gray-400 rounded-full transition-[width] duration-700 ease-out"
                    style:transition-delay=delay
                    style:width=move || bar_width(level, revealed.get())
                />
            </div>
        </div>
    }
}
