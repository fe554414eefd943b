use leptos::prelude::*;

use crate::content::{Project, PROJECTS};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="projects" class="py-16 section-content">
            <h2 class="text-2xl font-bold mb-8">"Projects"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {PROJECTS.iter().map(|p| view! { <ProjectCard project=*p /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="flex flex-col p-6 rounded-lg border border-slate-200 dark:border-slate-800 hover:shadow-lg transition-shadow duration-200">
            <h3 class="text-lg font-semibold mb-2">{project.title}</h3>
            <p class="text-sm leading-relaxed flex-grow">{project.description}</p>
            <div class="mt-4">
                {project
                    .tags
                    .iter()
                    .map(|tag| {
                        view! {
                            <span class="rounded-md px-2 py-1 mr-2 text-xs bg-slate-100 dark:bg-slate-800">
                                {*tag}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex gap-4 mt-4 text-sm font-medium">
                {project
                    .repo
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-cyan-700 dark:text-cyan-400 hover:underline"
                            >
                                <i class="devicon-github-plain mr-1" />
                                "Source"
                            </a>
                        }
                    })}
                {project
                    .live
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-cyan-700 dark:text-cyan-400 hover:underline"
                            >
                                <i class="extra-link mr-1" />
                                "Live"
                            </a>
                        }
                    })}
            </div>
        </article>
    }
}
