use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use crate::content::{NAV_ITEMS, OWNER_NAME};

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    let built = DateTime::parse_from_rfc3339(BUILD_TIME).ok();
    let year = built.map(|d| d.year().to_string()).unwrap_or_default();
    let built_on = built
        .map(|d| format!("Last updated {}", d.format("%b %e, %Y")))
        .unwrap_or_default();

    view! {
        <footer class="py-8 bg-white/60 dark:bg-gray-900/80 border-t border-gray-200 dark:border-gray-800 transition-colors duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex flex-col md:flex-row items-center justify-between gap-4 text-sm text-gray-600 dark:text-gray-400">
                <p>{format!("© {year} {OWNER_NAME}")}</p>
                <nav class="flex gap-4">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.href
                                    class="hover:text-blue-600 dark:hover:text-blue-400"
                                >
                                    {item.name}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <p class="text-xs">{built_on}</p>
            </div>
        </footer>
    }
}
