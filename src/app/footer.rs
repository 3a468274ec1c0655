use leptos::prelude::*;

use crate::content::Profile;

use super::cursor::HoverReport;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer(profile: Profile, hover: HoverReport) -> impl IntoView {
    view! {
        <footer class="py-10 bg-zinc-950 border-t border-zinc-900">
            <div class="container mx-auto px-6 flex flex-col md:flex-row justify-between items-center gap-4">
                <p class="text-gray-500 text-sm">
                    {format!("© {BUILD_YEAR} {}. 版权所有.", profile.name)}
                </p>
                <div class="flex gap-6">
                    {profile
                        .social
                        .into_iter()
                        .map(|link| {
                            let label = link.label.clone();
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noreferrer"
                                    class="text-gray-500 hover:text-white transition-colors text-sm"
                                    on:mouseenter=move |_| hover.enter(label.clone())
                                    on:mouseleave=move |_| hover.leave()
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
