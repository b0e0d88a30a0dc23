use leptos::{html, prelude::*};

use super::reveal::use_reveal;
use crate::{
    content::{Project, PROJECTS},
    visibility::{reveal_class, stagger_style, Direction},
};

#[component]
pub fn Projects() -> impl IntoView {
    let grid_ref = NodeRef::<html::Div>::new();
    let shown = use_reveal(grid_ref);

    view! {
        <section
            id="projects"
            class="py-20 bg-gradient-to-br from-indigo-50 via-purple-50 to-pink-50 dark:from-gray-900 dark:via-indigo-900 dark:to-purple-900 transition-colors duration-300"
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class=move || {
                    format!("text-center mb-16 {}", reveal_class(shown.get(), Direction::Up))
                }>
                    <h2 class="text-4xl font-bold bg-gradient-to-r from-indigo-600 via-purple-600 to-pink-600 bg-clip-text text-transparent mb-4">
                        "Featured Projects"
                    </h2>
                    <p class="text-xl text-gray-600 dark:text-gray-300 max-w-3xl mx-auto">
                        "Here are my three major projects that showcase my full-stack development expertise."
                    </p>
                </div>

                <div node_ref=grid_ref class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| view! { <ProjectCard project=*project index=i shown /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize, shown: Signal<bool>) -> impl IntoView {
    let Project {
        title,
        description,
        image,
        technologies,
        repo,
        live,
        gradient,
        ..
    } = project;

    view! {
        <div
            class=move || format!("group {}", reveal_class(shown.get(), Direction::Up))
            style=stagger_style(index, 300, 0)
        >
            <div class="tilt bg-white/90 dark:bg-gray-800/90 backdrop-blur-sm rounded-2xl shadow-xl overflow-hidden border border-white/20 dark:border-gray-700/20">
                <div class="relative overflow-hidden">
                    <img
                        src=image
                        alt=title
                        loading="lazy"
                        class="w-full h-48 object-cover transition-transform duration-500 group-hover:scale-110"
                    />
                    <div class=format!(
                        "absolute inset-0 bg-gradient-to-t {gradient} opacity-20 group-hover:opacity-40 transition-opacity duration-300",
                    )></div>
                    <div class="absolute inset-0 bg-black/50 opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex items-center justify-center">
                        <div class="flex gap-4">
                            <a
                                href=repo
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=format!("{title} source code")
                                class="bg-white/20 backdrop-blur-sm text-white p-3 rounded-full hover:bg-white/30 hover:rotate-[360deg] transition-all duration-300"
                            >
                                <i class="devicon-github-plain"></i>
                            </a>
                            <a
                                href=live
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=format!("{title} live demo")
                                class="bg-white/20 backdrop-blur-sm text-white p-3 rounded-full hover:bg-white/30 hover:rotate-[360deg] transition-all duration-300"
                            >
                                "↗"
                            </a>
                        </div>
                    </div>
                </div>
                <div class="p-6">
                    <h3 class="text-xl font-bold text-gray-800 dark:text-white mb-3">{title}</h3>
                    <p class="text-gray-600 dark:text-gray-300 mb-4 leading-relaxed">
                        {description}
                    </p>
                    <div class="flex flex-wrap gap-2">
                        {technologies
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class=format!(
                                        "bg-gradient-to-r {gradient} text-white px-3 py-1 rounded-full text-sm font-medium shadow-lg hover:scale-110 hover:-translate-y-0.5 transition-transform",
                                    )>{*tech}</span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
