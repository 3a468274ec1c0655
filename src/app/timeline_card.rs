use leptos::{
    either::{Either, EitherOf3},
    prelude::*,
};

use crate::content::{Icon, MetricIcon, WorkExperience};
use crate::state::{available_tabs, CardState, DetailTab};
use crate::text::{detail_line, highlight_segments, DetailLine, FULL_WIDTH_COMMA, HIGHLIGHT_KEYWORDS};

use super::icon::IconGlyph;

fn description(text: &str) -> impl IntoView {
    highlight_segments(text, &HIGHLIGHT_KEYWORDS)
        .into_iter()
        .map(|segment| {
            let delimiter = segment.after_delimiter.then(|| FULL_WIDTH_COMMA.to_string());
            let text = segment.text.to_string();
            if segment.emphasized {
                Either::Left(view! {
                    {delimiter}
                    <span class="text-white font-medium">{text}</span>
                })
            } else {
                Either::Right(view! {
                    {delimiter}
                    {text}
                })
            }
        })
        .collect_view()
}

fn overview(experience: &WorkExperience) -> impl IntoView {
    let callouts = [
        ("管理账号", experience.accounts.clone()),
        ("负责车型", experience.models.clone()),
    ];
    let metrics = experience.key_metrics.clone();

    view! {
        <div class="space-y-6 animate-fade-in">
            <div>
                <h4 class="text-sm text-gray-500 mb-2">"工作描述"</h4>
                <p class="text-gray-300 leading-relaxed">{description(&experience.description)}</p>
            </div>
            {callouts
                .into_iter()
                .filter_map(|(label, text)| text.map(|text| (label, text)))
                .map(|(label, text)| {
                    view! {
                        <div class="p-4 bg-zinc-800/50 rounded-lg">
                            <h4 class="text-sm text-gray-500 mb-1">{label}</h4>
                            <p class="text-gray-300 text-sm">{text}</p>
                        </div>
                    }
                })
                .collect_view()}
            {(!metrics.is_empty())
                .then(|| {
                    view! {
                        <div>
                            <h4 class="text-sm text-gray-500 mb-3">"关键业绩指标"</h4>
                            <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                                {metrics
                                    .into_iter()
                                    .map(|metric| {
                                        let icon = MetricIcon::from_tag(metric.icon.as_deref()).icon();
                                        view! {
                                            <div class="p-4 bg-zinc-800 rounded-lg flex items-center gap-3">
                                                <span class="p-2 bg-white/10 rounded-full">
                                                    <IconGlyph icon />
                                                </span>
                                                <div>
                                                    <div class="text-xl font-bold text-white">{metric.value}</div>
                                                    <div class="text-xs text-gray-400">{metric.label}</div>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })}
        </div>
    }
}

fn achievements(experience: &WorkExperience) -> impl IntoView {
    view! {
        <div class="space-y-6 animate-fade-in">
            {experience
                .achievements
                .iter()
                .map(|achievement| {
                    view! {
                        <div>
                            <h4 class="flex items-center gap-2 text-lg font-semibold text-white mb-3">
                                <IconGlyph icon=achievement.icon() />
                                {achievement.title.clone()}
                            </h4>
                            <ul class="space-y-2 pl-6 list-disc text-gray-300 text-sm leading-relaxed">
                                {achievement
                                    .details
                                    .iter()
                                    .map(|line| match detail_line(line) {
                                        DetailLine::Term { term, rest } => {
                                            Either::Left(view! {
                                                <li>
                                                    <span class="text-white font-medium">{term.to_string()}</span>
                                                    "："
                                                    {rest.to_string()}
                                                </li>
                                            })
                                        }
                                        DetailLine::Plain(text) => {
                                            Either::Right(view! { <li>{text.to_string()}</li> })
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn skills(experience: &WorkExperience) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-3 animate-fade-in">
            {experience
                .skills
                .iter()
                .enumerate()
                .map(|(index, skill)| {
                    view! {
                        <span
                            class="px-4 py-2 bg-zinc-800 text-gray-200 rounded-full text-sm animate-pop"
                            style:animation-delay=format!("{}ms", index * 50)
                        >
                            {skill.clone()}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Timeline entry with a header row and a tabbed detail panel.
///
/// Whether the card is expanded belongs to the page; `on_toggle` asks it to
/// flip. The selected tab is local and resets to the overview every time
/// the card is expanded again.
#[component]
pub fn TimelineCard(
    experience: WorkExperience,
    index: usize,
    is_current: bool,
    #[prop(into)] is_expanded: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    let card = RwSignal::new(CardState::new(is_expanded.get_untracked()));
    Effect::new(move |_| {
        let expanded = is_expanded.get();
        card.update(|c| c.sync_expanded(expanded));
    });

    let tabs = available_tabs(&experience);
    let company = experience.company.clone();
    let position = experience.position.clone();
    let period = experience.period.clone();
    let team_size = experience.team_size.clone();
    let experience = StoredValue::new(experience);

    let tab_bar = move || {
        tabs.iter()
            .copied()
            .map(|tab| {
                view! {
                    <button
                        class=move || {
                            if card.with(|c| c.visible_tab()) == Some(tab) {
                                "px-4 py-2 text-sm font-medium text-white border-b-2 border-white"
                            } else {
                                "px-4 py-2 text-sm font-medium text-gray-500 border-b-2 border-transparent hover:text-gray-300"
                            }
                        }
                        on:click=move |_| {
                            card.update(|c| {
                                experience.with_value(|e| c.select(e, tab));
                            });
                        }
                    >
                        {tab.label()}
                    </button>
                }
            })
            .collect_view()
    };

    let panel = move || {
        card.with(|c| c.visible_tab()).map(|tab| {
            experience.with_value(|e| match tab {
                DetailTab::Overview => EitherOf3::A(overview(e)),
                DetailTab::Achievements => EitherOf3::B(achievements(e)),
                DetailTab::Skills => EitherOf3::C(skills(e)),
            })
        })
    };

    view! {
        <div class="relative pl-8 md:pl-12 pb-12 animate-rise" style:animation-delay=format!("{}ms", index * 100)>
            <div class="absolute left-0 top-2 bottom-0 w-px bg-zinc-800" />
            <div class=if is_current {
                "absolute left-[-6px] top-2 w-3 h-3 rounded-full bg-white animate-pulse"
            } else {
                "absolute left-[-6px] top-2 w-3 h-3 rounded-full bg-zinc-600"
            } />
            <div class=move || {
                if is_expanded.get() {
                    "rounded-xl border border-white/30 bg-zinc-900 transition-colors"
                } else {
                    "rounded-xl border border-zinc-800 bg-zinc-900/50 hover:border-zinc-600 transition-colors"
                }
            }>
                <button
                    class="w-full text-left p-6 flex flex-col md:flex-row md:items-center justify-between gap-4"
                    on:click=move |_| on_toggle.run(())
                >
                    <div>
                        <div class="flex items-center gap-3 mb-1">
                            <h3 class="text-xl font-bold text-white">{company}</h3>
                            {is_current
                                .then(|| {
                                    view! {
                                        <span class="px-2 py-0.5 text-xs bg-white text-black rounded-full">
                                            "至今"
                                        </span>
                                    }
                                })}
                        </div>
                        <p class="text-gray-400">{position}</p>
                        <div class="flex flex-wrap items-center gap-4 mt-2 text-sm text-gray-500">
                            <span class="flex items-center gap-1">
                                <IconGlyph icon=Icon::Calendar />
                                {period}
                            </span>
                            {team_size
                                .map(|team| {
                                    view! {
                                        <span class="flex items-center gap-1">
                                            <IconGlyph icon=Icon::Briefcase />
                                            {team}
                                        </span>
                                    }
                                })}
                        </div>
                    </div>
                    <span class="flex items-center gap-1 text-sm text-gray-300 whitespace-nowrap">
                        {move || if is_expanded.get() { "收起详情" } else { "查看详情" }}
                        <span class=move || {
                            if is_expanded.get() {
                                "transition-transform duration-300 rotate-180"
                            } else {
                                "transition-transform duration-300"
                            }
                        }>
                            <IconGlyph icon=Icon::ChevronDown />
                        </span>
                    </span>
                </button>
                <Show when=move || card.with(|c| c.expanded())>
                    <div class="px-6 pb-6 animate-expand">
                        <div class="flex gap-2 border-b border-zinc-800 mb-6 overflow-x-auto hide-scrollbar">
                            {tab_bar()}
                        </div>
                        {panel}
                    </div>
                </Show>
            </div>
        </div>
    }
}
