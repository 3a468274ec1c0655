use leptos::{either::Either, ev, prelude::*};
use leptos_use::use_media_query;

use crate::config::SiteConfig;
use crate::content::{Icon, Project};
use crate::state::{Cancel, Carousel, Direction, Indicator, TimerSlot};

use super::cursor::HoverReport;
use super::icon::IconGlyph;

impl Cancel for TimeoutHandle {
    fn cancel(self) {
        self.clear();
    }
}

/// Auto-advancing project carousel with arrows, swipe and indicators.
#[component]
pub fn ProjectGallery(projects: Vec<Project>, hover: HoverReport) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let narrow = use_media_query(config.narrow_media_query());
    let carousel = RwSignal::new(Carousel::new(projects.len(), &config));
    let projects = StoredValue::new(projects);
    let timer = StoredValue::new(TimerSlot::<TimeoutHandle>::default());

    // Changes only when the index or the hover state moves.
    let ticket = Memo::new(move |_| carousel.with(|c| c.schedule()));
    let current = Memo::new(move |_| carousel.with(|c| c.index()));
    let outgoing = Memo::new(move |_| carousel.with(|c| c.outgoing()));

    Effect::new(move |_| {
        let ticket = ticket.get();
        timer.update_value(|slot| slot.disarm());
        let Some(ticket) = ticket else {
            return;
        };
        let fire = move || {
            carousel.update(|c| {
                if c.tick(ticket.epoch) {
                    log::debug!("carousel advanced to {}", c.index());
                }
            });
        };
        match set_timeout_with_handle(fire, ticket.delay) {
            Ok(handle) => timer.update_value(|slot| slot.arm(handle)),
            Err(e) => log::warn!("couldn't schedule carousel advance: {e:?}"),
        }
    });
    on_cleanup(move || {
        timer.try_update_value(|slot| slot.disarm());
    });

    let title_of = move |index: usize| {
        projects.with_value(|p| p.get(index).map(|p| p.title.clone()).unwrap_or_default())
    };

    let slide = move || {
        let index = current.get();
        let direction = carousel.with_untracked(|c| c.direction());
        let project = projects.with_value(|p| p.get(index).cloned())?;
        let motion = match direction {
            Direction::Forward => "relative z-10 slide-enter-forward",
            Direction::Backward => "relative z-10 slide-enter-backward",
        };
        Some(view! { <Slide project motion narrow hover /> })
    };

    // The departing item leaves toward the side opposite the incoming one.
    let leaving = move || {
        let index = outgoing.get()?;
        let direction = carousel.with_untracked(|c| c.direction());
        let project = projects.with_value(|p| p.get(index).cloned())?;
        let motion = match direction {
            Direction::Forward => "slide-exit-forward",
            Direction::Backward => "slide-exit-backward",
        };
        Some(view! {
            <div
                class="absolute inset-0 pointer-events-none"
                aria-hidden="true"
                on:animationend=move |_| carousel.update(|c| c.finish_exit(index))
            >
                <Slide project motion narrow hover />
            </div>
        })
    };

    let indicators = move || {
        current.track();
        carousel
            .with_untracked(|c| c.indicators())
            .into_iter()
            .map(|indicator| match indicator {
                Indicator::Dot { index } => Either::Left(view! {
                    <button
                        class="w-2 h-2 md:w-3 md:h-3 rounded-full bg-gray-600 hover:bg-gray-400 transition-all duration-300"
                        aria-label=format!("{}", index + 1)
                        on:click=move |_| carousel.update(|c| c.go_to(index))
                        on:mouseenter=move |_| hover.enter(title_of(index))
                        on:mouseleave=move |_| hover.leave()
                    />
                }),
                Indicator::Current { label, .. } => Either::Right(view! {
                    <span class="px-3 py-1 bg-white text-black rounded-full transition-all duration-300">
                        <span class="text-xs font-medium">{label}</span>
                    </span>
                }),
            })
            .collect_view()
    };

    view! {
        <div
            class="relative rounded-xl overflow-hidden bg-zinc-900"
            on:mouseenter=move |_| carousel.update(|c| c.set_hovering(true))
            on:mouseleave=move |_| carousel.update(|c| c.set_hovering(false))
            on:touchstart=move |ev: ev::TouchEvent| {
                if let Some(touch) = ev.touches().get(0) {
                    carousel.update(|c| c.touch_start(f64::from(touch.client_x())));
                }
            }
            on:touchend=move |ev: ev::TouchEvent| {
                if let Some(touch) = ev.changed_touches().get(0) {
                    carousel.update(|c| {
                        c.touch_end(f64::from(touch.client_x()));
                    });
                }
            }
        >
            <div class="relative overflow-hidden">{leaving} {slide}</div>
            <Show when=move || carousel.with(|c| c.len() > 1)>
                <button
                    class="absolute left-4 top-1/2 -translate-y-1/2 z-10 p-2 md:p-3 rounded-full bg-black/60 text-white hover:bg-black/80 transition-colors"
                    aria-label="上一个"
                    on:click=move |_| carousel.update(|c| c.prev())
                    on:mouseenter=move |_| hover.enter("上一个")
                    on:mouseleave=move |_| hover.leave()
                >
                    <IconGlyph icon=Icon::ChevronLeft />
                </button>
                <button
                    class="absolute right-4 top-1/2 -translate-y-1/2 z-10 p-2 md:p-3 rounded-full bg-black/60 text-white hover:bg-black/80 transition-colors"
                    aria-label="下一个"
                    on:click=move |_| carousel.update(|c| c.next())
                    on:mouseenter=move |_| hover.enter("下一个")
                    on:mouseleave=move |_| hover.leave()
                >
                    <IconGlyph icon=Icon::ChevronRight />
                </button>
            </Show>
            <div class="flex justify-center items-center gap-2 py-4">{indicators}</div>
        </div>
    }
}

#[component]
fn Slide(
    project: Project,
    motion: &'static str,
    narrow: Signal<bool>,
    hover: HoverReport,
) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let Project {
        title,
        description,
        image,
        stats,
        tags,
        ..
    } = project;
    let image = config.image_or_placeholder(image.as_deref()).to_string();

    view! {
        <div class=format!("grid md:grid-cols-2 gap-0 {motion}")>
            <div class="relative h-64 md:h-[420px]">
                <img
                    src=image
                    alt=title.clone()
                    draggable="false"
                    class="absolute inset-0 w-full h-full object-cover"
                />
                <div class="absolute inset-0 bg-gradient-to-r from-transparent to-black/40" />
            </div>
            <div class="p-6 md:p-10 flex flex-col justify-center">
                <h3 class="text-2xl md:text-3xl font-bold text-white mb-4">{title}</h3>
                <p class="text-gray-400 mb-6 line-clamp-3 md:line-clamp-none">{description}</p>
                <div class="grid grid-cols-3 gap-4 mb-6">
                    {stats
                        .into_iter()
                        .map(|stat| {
                            view! {
                                <div class="text-center p-3 bg-zinc-800/50 rounded-lg">
                                    <IconGlyph icon=stat.icon class="text-lg text-gray-400 mb-1" />
                                    <div class="text-lg md:text-xl font-bold text-white">{stat.value}</div>
                                    <div class="text-xs text-gray-500">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex flex-wrap gap-2 mb-6">
                    {move || {
                        tags.iter()
                            .take(config.tag_cap(narrow.get()))
                            .map(|tag| {
                                view! {
                                    <span class="px-3 py-1 bg-zinc-800 text-gray-300 rounded-full text-xs">
                                        {tag.clone()}
                                    </span>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <button
                    class="self-start inline-flex items-center gap-2 text-sm text-white hover:text-gray-300 transition-colors"
                    on:mouseenter=move |_| hover.enter("查看详情")
                    on:mouseleave=move |_| hover.leave()
                >
                    "查看项目详情"
                    <IconGlyph icon=Icon::ExternalLink />
                </button>
            </div>
        </div>
    }
}
