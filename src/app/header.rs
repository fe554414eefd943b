use leptos::prelude::*;

use crate::content::{OWNER, SECTIONS};

use super::theme::{ThemeController, ThemeToggle};

#[component]
pub fn Header(theme: ThemeController) -> impl IntoView {
    view! {
        <header class="sticky top-0 z-10 shadow-sm backdrop-blur bg-white/80 dark:bg-slate-950/80">
            <div class="mx-auto max-w-5xl px-4 sm:px-6 lg:px-8 py-4">
                <div class="flex flex-wrap items-center justify-between gap-4">
                    <a href="#top" class="text-xl font-bold">
                        {OWNER}
                    </a>
                    <nav class="flex items-center gap-6">
                        {SECTIONS
                            .iter()
                            .map(|(id, label)| {
                                view! {
                                    <a
                                        href=format!("#{id}")
                                        class="hover:text-cyan-600 dark:hover:text-cyan-400 transition-colors duration-200"
                                    >
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <ThemeToggle theme />
                    </nav>
                </div>
            </div>
        </header>
    }
}
