use leptos::{html, prelude::*};

use super::reveal::use_reveal;
use crate::{
    content::{ABOUT_IMAGE, ABOUT_PARAGRAPHS, ABOUT_TAGS, FEATURES, OWNER_NAME},
    visibility::{reveal_class, stagger_style, Direction},
};

#[component]
pub fn About() -> impl IntoView {
    let features_ref = NodeRef::<html::Div>::new();
    let shown = use_reveal(features_ref);

    view! {
        <section
            id="about"
            class="py-20 bg-gradient-to-br from-emerald-50 via-teal-50 to-cyan-50 dark:from-gray-900 dark:via-emerald-900 dark:to-teal-900 transition-colors duration-300"
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class=move || {
                    format!("text-center mb-16 {}", reveal_class(shown.get(), Direction::Up))
                }>
                    <h2 class="text-4xl font-bold bg-gradient-to-r from-emerald-600 to-teal-600 bg-clip-text text-transparent mb-4">
                        "About Me"
                    </h2>
                    <p class="text-xl text-gray-600 dark:text-gray-300 max-w-3xl mx-auto">
                        "A passionate Full Stack Developer who transforms ideas into digital reality through code and creativity."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 gap-12 items-center mb-16">
                    <div class=move || {
                        format!("relative {}", reveal_class(shown.get(), Direction::Left))
                    }>
                        <div class="glow-pulse absolute inset-0 bg-gradient-to-r from-emerald-400 to-teal-400 rounded-2xl blur-2xl opacity-20"></div>
                        <img
                            src=ABOUT_IMAGE
                            alt=format!("{OWNER_NAME} - Full Stack Developer")
                            class="tilt relative rounded-2xl shadow-2xl border-4 border-white/20 dark:border-gray-700/20"
                        />
                    </div>

                    <div
                        class=move || reveal_class(shown.get(), Direction::Right)
                        style=stagger_style(0, 0, 200)
                    >
                        <h3 class="text-3xl font-bold bg-gradient-to-r from-emerald-600 to-teal-600 bg-clip-text text-transparent mb-6">
                            "Crafting Digital Experiences"
                        </h3>
                        <div class="space-y-4 text-gray-600 dark:text-gray-300 leading-relaxed">
                            <p>
                                "Hi, I'm "
                                <span class="font-bold text-emerald-600 dark:text-emerald-400">
                                    {OWNER_NAME}
                                </span>
                                ", a dedicated Full Stack Developer who believes in the power of technology to transform ideas into reality. With expertise in the MERN stack, I create web applications that are not just functional, but truly exceptional."
                            </p>
                            {ABOUT_PARAGRAPHS.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                        </div>

                        <div class="flex flex-wrap gap-3 mt-6">
                            {ABOUT_TAGS
                                .iter()
                                .enumerate()
                                .map(|(i, tag)| {
                                    view! {
                                        <span
                                            class=move || {
                                                format!(
                                                    "bg-gradient-to-r from-emerald-100 to-teal-100 dark:from-emerald-900/30 dark:to-teal-900/30 text-emerald-800 dark:text-emerald-200 px-4 py-2 rounded-full text-sm font-medium border border-emerald-200 dark:border-emerald-700 hover:scale-110 {}",
                                                    reveal_class(shown.get(), Direction::Zoom),
                                                )
                                            }
                                            style=stagger_style(i, 100, 700)
                                        >
                                            {*tag}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div node_ref=features_ref class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(i, feature)| {
                            view! {
                                <div
                                    class=move || {
                                        format!(
                                            "text-center p-6 rounded-2xl bg-white/60 dark:bg-gray-800/60 backdrop-blur-sm border border-emerald-200 dark:border-emerald-700 hover:shadow-2xl hover:-translate-y-2 {}",
                                            reveal_class(shown.get(), Direction::Up),
                                        )
                                    }
                                    style=stagger_style(i, 200, 0)
                                >
                                    <div class="spin-on-hover bg-gradient-to-r from-emerald-500 to-teal-500 w-16 h-16 rounded-full flex items-center justify-center mx-auto mb-4 shadow-lg text-white text-2xl font-bold">
                                        {feature.icon}
                                    </div>
                                    <h4 class="text-xl font-bold text-gray-800 dark:text-white mb-3">
                                        {feature.title}
                                    </h4>
                                    <p class="text-gray-600 dark:text-gray-300">{feature.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
