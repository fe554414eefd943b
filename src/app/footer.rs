use leptos::prelude::*;

use crate::content::{build_year, OWNER, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = match build_year() {
        Some(year) => format!("© {year} {OWNER}"),
        None => format!("© {OWNER}"),
    };
    view! {
        <footer class="mt-16 border-t border-slate-200 dark:border-slate-800">
            <div class="mx-auto max-w-5xl px-4 py-8 flex flex-col sm:flex-row items-center justify-between gap-4 text-sm">
                <span>{copyright}</span>
                <div class="flex gap-4">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-xl hover:text-cyan-600 dark:hover:text-cyan-400"
                                    aria-label=link.label
                                >
                                    <i class=link.icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
