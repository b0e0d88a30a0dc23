use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::theme::use_theme;
use crate::{
    content::{NAV_ITEMS, OWNER_NAME},
    visibility::{is_scrolled, stagger_style},
};

#[component]
pub fn Navigation() -> impl IntoView {
    let theme = use_theme();
    let (_, scroll_y) = use_window_scroll();
    let (menu_open, set_menu_open) = signal(false);

    let nav_class = move || {
        let background = if is_scrolled(scroll_y.get()) {
            "bg-white/90 dark:bg-gray-900/90 backdrop-blur-md shadow-lg"
        } else {
            "bg-transparent"
        };
        format!("nav-drop fixed top-0 w-full z-50 transition-all duration-300 {background}")
    };
    let theme_icon = move || if theme.get().is_dark { "☀" } else { "☾" };
    let theme_label = move || {
        if theme.get().is_dark {
            "Switch to light theme"
        } else {
            "Switch to dark theme"
        }
    };

    view! {
        <nav class=nav_class>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a
                        href="#home"
                        class="font-bold text-xl bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent hover:scale-105 transition-transform"
                    >
                        {OWNER_NAME}
                    </a>

                    <div class="hidden md:flex space-x-8 items-center">
                        {NAV_ITEMS
                            .iter()
                            .enumerate()
                            .map(|(i, item)| {
                                view! {
                                    <a
                                        href=item.href
                                        class="nav-item text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 transition-colors duration-200 font-medium"
                                        style=stagger_style(i, 100, 0)
                                    >
                                        {item.name}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <button
                            class="p-2 rounded-full bg-gray-200 dark:bg-gray-700 text-gray-700 dark:text-gray-300 hover:bg-gray-300 dark:hover:bg-gray-600 transition-colors active:scale-90"
                            aria-label=theme_label
                            on:click=move |_| theme.toggle()
                        >
                            {theme_icon}
                        </button>
                    </div>

                    <div class="md:hidden flex items-center space-x-2">
                        <button
                            class="p-2 rounded-full bg-gray-200 dark:bg-gray-700 text-gray-700 dark:text-gray-300 active:scale-90"
                            aria-label=theme_label
                            on:click=move |_| theme.toggle()
                        >
                            {theme_icon}
                        </button>
                        <button
                            class="text-2xl text-gray-700 dark:text-gray-300 hover:text-blue-600"
                            aria-label="Toggle menu"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>

                {move || {
                    menu_open
                        .get()
                        .then(|| {
                            view! {
                                <div class="menu-drop md:hidden bg-white/95 dark:bg-gray-900/95 backdrop-blur-md rounded-lg mt-2 p-4 shadow-lg">
                                    {NAV_ITEMS
                                        .iter()
                                        .map(|item| {
                                            view! {
                                                <a
                                                    href=item.href
                                                    class="block py-2 text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 transition-colors duration-200"
                                                    on:click=move |_| set_menu_open.set(false)
                                                >
                                                    {item.name}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                }}
            </div>
        </nav>
    }
}
