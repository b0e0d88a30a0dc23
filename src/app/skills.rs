use leptos::{html, prelude::*};

use super::reveal::use_reveal;
use crate::{
    content::SKILL_CATEGORIES,
    visibility::{reveal_class, stagger_style, Direction},
};

#[component]
pub fn Skills() -> impl IntoView {
    let grid_ref = NodeRef::<html::Div>::new();
    let shown = use_reveal(grid_ref);

    view! {
        <section
            id="skills"
            class="py-20 bg-gradient-to-br from-purple-50 via-blue-50 to-indigo-50 dark:from-gray-900 dark:via-purple-900 dark:to-gray-800 transition-colors duration-300"
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class=move || {
                    format!("text-center mb-16 {}", reveal_class(shown.get(), Direction::Up))
                }>
                    <h2 class="text-4xl font-bold bg-gradient-to-r from-purple-600 to-blue-600 bg-clip-text text-transparent mb-4">
                        "Skills & Expertise"
                    </h2>
                    <p class="text-xl text-gray-600 dark:text-gray-300 max-w-3xl mx-auto">
                        "Here's my technical stack and the tools I use as a Full Stack Developer."
                    </p>
                </div>

                <div node_ref=grid_ref class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(ci, category)| {
                            view! {
                                <div
                                    class=move || {
                                        format!(
                                            "bg-white/80 dark:bg-gray-800/80 backdrop-blur-sm rounded-2xl p-6 border border-purple-200 dark:border-purple-700 hover:shadow-2xl hover:-translate-y-2 {}",
                                            reveal_class(shown.get(), Direction::Up),
                                        )
                                    }
                                    style=stagger_style(ci, 200, 0)
                                >
                                    <h3 class="text-2xl font-bold mb-6 text-center bg-gradient-to-r from-purple-600 to-blue-600 bg-clip-text text-transparent">
                                        {category.title}
                                    </h3>
                                    <div class="space-y-4">
                                        {category
                                            .skills
                                            .iter()
                                            .enumerate()
                                            .map(|(si, skill)| {
                                                view! {
                                                    <div
                                                        class=move || {
                                                            format!(
                                                                "flex items-center space-x-3 p-3 rounded-lg bg-gradient-to-r from-purple-100 to-blue-100 dark:from-purple-900/30 dark:to-blue-900/30 hover:scale-105 hover:translate-x-1 {}",
                                                                reveal_class(shown.get(), Direction::Left),
                                                            )
                                                        }
                                                        style=stagger_style(si, 100, 0)
                                                    >
                                                        <span class="text-2xl">{skill.icon}</span>
                                                        <span class="text-gray-700 dark:text-gray-300 font-medium">
                                                            {skill.name}
                                                        </span>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
