mod contact;
mod footer;
mod header;
mod homepage;
mod projects;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{FAVICON, OWNER};
use footer::Footer;
use header::Header;
use homepage::HomePage;
pub use theme::ThemeController;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="icon" type="image/svg+xml" href=FAVICON />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-white text-slate-900 dark:bg-slate-950 dark:text-slate-100 transition-colors duration-200">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let theme = ThemeController::new();
    // effects only run in the browser, after hydration
    Effect::watch(|| (), move |_, _, _| theme.initialize(), true);

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />

        <Router>
            <Header theme />
            <main class="flex flex-col flex-grow items-center mx-auto w-full max-w-5xl px-4">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
