mod about;
mod contact;
mod cursor;
mod education;
mod experience;
mod experience_card;
mod footer;
mod header;
mod hero;
mod homepage;
mod horizontal_scroll;
mod icon;
mod project_gallery;
mod skill_bar;
mod summary_tile;
mod timeline_card;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::site_config;
use crate::content::site_content;

use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="zh" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" href="https://unpkg.com/lucide-static@0.469.0/font/lucide.css" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="min-h-screen bg-black font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(site_config().clone());

    match site_content() {
        Ok(content) => {
            provide_context(content);
            Either::Left(view! {
                <Title text=content.profile.page_title.clone() />
                <Meta name="description" content=content.profile.page_description.clone() />
                <Router>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </Router>
            })
        }
        Err(e) => {
            log::error!("site content unavailable: {e}");
            Either::Right(view! {
                <Title text="Unavailable" />
                <main class="flex flex-col justify-center items-center min-h-screen text-white">
                    <h1 class="text-2xl font-bold mb-4">"内容暂时无法加载"</h1>
                    <pre class="text-sm text-gray-400">{e.to_string()}</pre>
                </main>
            })
        }
    }
}
