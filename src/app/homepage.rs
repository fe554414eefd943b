use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{ABOUT, CAREER, OWNER, ROLE, TAGLINE};

use super::{contact::ContactSection, projects::ProjectsSection};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div id="top" class="w-full page-content">
            <Hero />
            <About />
            <ProjectsSection />
            <ContactSection />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="flex flex-col items-center text-center py-24 gap-6 section-content">
            <h1 class="text-4xl lg:text-5xl font-bold">"Hi, I'm " {OWNER}</h1>
            <p class="text-xl text-cyan-700 dark:text-cyan-400 font-medium">{ROLE}</p>
            <p class="max-w-2xl text-lg leading-relaxed">{TAGLINE}</p>
            <div class="flex flex-col sm:flex-row gap-4 mt-4">
                <a
                    href="#projects"
                    class="px-6 py-3 rounded-md font-medium bg-cyan-600 text-white hover:bg-cyan-700 transition-all duration-200"
                >
                    "See my work"
                </a>
                <a
                    href="#contact"
                    class="px-6 py-3 rounded-md font-medium border border-cyan-600 text-cyan-700 dark:text-cyan-400 hover:bg-cyan-600/10 transition-all duration-200"
                >
                    "Get in touch"
                </a>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="flex flex-col lg:flex-row gap-8 lg:gap-12 py-16 section-content">
            <div class="w-full lg:max-w-xl">
                <h2 class="text-2xl font-bold mb-6">"About"</h2>
                {ABOUT
                    .iter()
                    .map(|p| view! { <p class="text-base mb-4 leading-relaxed">{*p}</p> })
                    .collect_view()}
            </div>
            <div class="w-full lg:max-w-xl">
                <h2 class="text-2xl font-bold mb-6">"Experience"</h2>
                <ol class="relative border-l border-slate-300 dark:border-slate-700">
                    {CAREER
                        .iter()
                        .map(|entry| {
                            view! {
                                <li class="mb-8 ml-4">
                                    <div class="absolute w-3 h-3 rounded-full -left-1.5 mt-1.5 bg-cyan-600"></div>
                                    <time class="text-sm text-slate-500 dark:text-slate-400">
                                        {entry.period}
                                    </time>
                                    <h3 class="text-lg font-semibold">
                                        {entry.role} " · " {entry.organization}
                                    </h3>
                                    <p class="text-sm leading-relaxed">{entry.summary}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
