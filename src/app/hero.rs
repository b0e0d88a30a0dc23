use leptos::{html, prelude::*};
use leptos_use::use_interval_fn;

use super::reveal::use_reveal;
use crate::{
    content::{next_role, HERO_ROLES, HERO_ROLE_INTERVAL_MS, OWNER_NAME},
    visibility::{reveal_class, stagger_style, Direction},
};

#[component]
pub fn Hero() -> impl IntoView {
    let content_ref = NodeRef::<html::Div>::new();
    let shown = use_reveal(content_ref);
    let (role, set_role) = signal(0usize);

    use_interval_fn(
        move || set_role.update(|i| *i = next_role(*i, HERO_ROLES.len())),
        HERO_ROLE_INTERVAL_MS,
    );

    let reveal = move |direction: Direction| move || reveal_class(shown.get(), direction);

    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center relative overflow-hidden"
        >
            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                <div class="blob-spin absolute -top-40 -right-40 w-80 h-80 bg-purple-300 rounded-full mix-blend-multiply filter blur-xl opacity-70"></div>
                <div class="blob-spin-reverse absolute -bottom-40 -left-40 w-80 h-80 bg-blue-300 rounded-full mix-blend-multiply filter blur-xl opacity-70"></div>
            </div>

            <div node_ref=content_ref class="text-center z-10 px-4">
                <h1 class="text-5xl md:text-7xl font-bold mb-6">
                    <span
                        class=reveal(Direction::Zoom)
                        style=stagger_style(0, 0, 200)
                    >
                        <span class="bg-gradient-to-r from-blue-600 via-purple-600 to-indigo-600 bg-clip-text text-transparent">
                            "Hello, I'm"
                        </span>
                    </span>
                </h1>
                <h2
                    class=move || {
                        format!(
                            "text-4xl md:text-6xl font-bold text-gray-800 dark:text-white mb-4 {}",
                            reveal_class(shown.get(), Direction::Left),
                        )
                    }
                    style=stagger_style(0, 0, 400)
                >
                    {OWNER_NAME}
                </h2>
                <div class="h-16 flex items-center justify-center">
                    {move || {
                        let text = HERO_ROLES[role.get()];
                        view! {
                            <p class="role-swap text-xl md:text-2xl text-gray-600 dark:text-gray-300 font-medium">
                                {text}
                            </p>
                        }
                    }}
                </div>
                <p
                    class=move || {
                        format!(
                            "text-lg text-gray-600 dark:text-gray-300 max-w-2xl mx-auto mb-8 leading-relaxed {}",
                            reveal_class(shown.get(), Direction::Fade),
                        )
                    }
                    style=stagger_style(0, 0, 600)
                >
                    "Passionate MERN stack developer creating beautiful, functional, and user-centered digital experiences. Let's build something amazing together."
                </p>
                <div
                    class=move || {
                        format!(
                            "flex flex-col sm:flex-row gap-4 justify-center {}",
                            reveal_class(shown.get(), Direction::Up),
                        )
                    }
                    style=stagger_style(0, 0, 800)
                >
                    <a
                        href="#projects"
                        class="bg-gradient-to-r from-blue-600 to-purple-600 text-white px-8 py-3 rounded-full font-medium hover:shadow-lg hover:scale-105 active:scale-95 transition-all duration-200"
                    >
                        "View My Work"
                    </a>
                    <a
                        href="#contact"
                        class="border-2 border-gray-300 dark:border-gray-600 text-gray-700 dark:text-gray-300 px-8 py-3 rounded-full font-medium hover:border-blue-600 hover:text-blue-600 hover:scale-105 active:scale-95 transition-all duration-200"
                    >
                        "Get In Touch"
                    </a>
                </div>
            </div>

            <a
                href="#about"
                class="bounce-slow absolute bottom-8 left-1/2 -translate-x-1/2 text-3xl text-gray-400"
                aria-label="Scroll to about"
            >
                "⌄"
            </a>
        </section>
    }
}
