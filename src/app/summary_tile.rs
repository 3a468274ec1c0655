use leptos::prelude::*;

use crate::content::SummaryStat;

use super::cursor::HoverReport;
use super::icon::IconGlyph;

#[component]
pub fn SummaryTile(stat: SummaryStat, hover: HoverReport) -> impl IntoView {
    let SummaryStat {
        value,
        label,
        icon,
        hover_text,
    } = stat;

    view! {
        <div
            class="flex flex-col items-center p-4 bg-zinc-800/50 rounded-lg animate-rise"
            on:mouseenter=move |_| hover.enter(hover_text.clone())
            on:mouseleave=move |_| hover.leave()
        >
            <div class="p-3 bg-white/10 rounded-full mb-3">
                <IconGlyph icon class="text-2xl text-white" />
            </div>
            <span class="text-3xl font-bold text-white">{format!("{value}+")}</span>
            <span class="text-gray-400 mt-1">{label}</span>
        </div>
    }
}
