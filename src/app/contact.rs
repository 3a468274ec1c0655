use leptos::prelude::*;

use crate::content::{Icon, Profile};

use super::cursor::HoverReport;
use super::icon::IconGlyph;

#[component]
pub fn Contact(profile: Profile, hover: HoverReport) -> impl IntoView {
    let phone_href = format!("tel:{}", profile.phone);
    let mail_href = format!("mailto:{}", profile.email);

    let input_class = "w-full px-4 py-3 bg-zinc-900 border border-zinc-800 rounded-lg text-white placeholder-gray-500 focus:outline-none focus:border-white transition-colors";

    view! {
        <section id="contact" class="py-24 bg-black">
            <div class="container mx-auto px-6">
                <h2 class="text-4xl font-bold mb-16 text-center animate-rise">"联系方式"</h2>
                <div class="grid md:grid-cols-2 gap-12 max-w-5xl mx-auto">
                    <div class="space-y-6">
                        <h3 class="text-2xl font-semibold">"联系信息"</h3>
                        <a
                            href=phone_href
                            class="flex items-center gap-4 text-gray-300 hover:text-white transition-colors"
                            on:mouseenter=move |_| hover.enter("电话")
                            on:mouseleave=move |_| hover.leave()
                        >
                            <span class="p-3 bg-white/10 rounded-full">
                                <IconGlyph icon=Icon::Phone />
                            </span>
                            {profile.phone}
                        </a>
                        <a
                            href=mail_href
                            class="flex items-center gap-4 text-gray-300 hover:text-white transition-colors"
                            on:mouseenter=move |_| hover.enter("邮件")
                            on:mouseleave=move |_| hover.leave()
                        >
                            <span class="p-3 bg-white/10 rounded-full">
                                <IconGlyph icon=Icon::Mail />
                            </span>
                            {profile.email}
                        </a>
                    </div>
                    // presentational only, nothing is sent anywhere
                    <form
                        class="space-y-4"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            log::debug!("contact form submitted");
                        }
                    >
                        <h3 class="text-2xl font-semibold mb-2">"发送邮件"</h3>
                        <input
                            type="text"
                            placeholder="您的姓名"
                            class=input_class
                            on:mouseenter=move |_| hover.enter("输入")
                            on:mouseleave=move |_| hover.leave()
                        />
                        <input
                            type="email"
                            placeholder="您的邮箱"
                            class=input_class
                            on:mouseenter=move |_| hover.enter("输入")
                            on:mouseleave=move |_| hover.leave()
                        />
                        <textarea
                            rows="5"
                            placeholder="您的留言"
                            class=input_class
                            on:mouseenter=move |_| hover.enter("输入")
                            on:mouseleave=move |_| hover.leave()
                        />
                        <button
                            type="submit"
                            class="w-full py-3 bg-white text-black rounded-lg font-medium hover:bg-gray-200 transition-colors"
                            on:mouseenter=move |_| hover.enter("发送")
                            on:mouseleave=move |_| hover.leave()
                        >
                            "发送消息"
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
