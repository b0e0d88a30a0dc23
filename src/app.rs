mod about;
mod contact;
mod footer;
mod hero;
mod navigation;
mod projects;
mod reveal;
mod skills;
mod theme;
mod toast;

pub use contact::send_contact;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::About;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use navigation::Navigation;
use projects::Projects;
use skills::Skills;
use theme::provide_theme;
use toast::{provide_toaster, Toasts};

use crate::content::OWNER_NAME;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = provide_theme();
    provide_toaster();

    view! {
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />
        <Meta
            name="description"
            content="Portfolio of a full stack developer: projects, skills and a way to get in touch."
        />

        <Router>
            <div class=move || theme.get().root_class()>
                <div class="min-h-screen bg-gradient-to-br from-slate-50 to-blue-50 dark:from-gray-900 dark:to-gray-800 transition-colors duration-300">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </div>
                <Toasts />
            </div>
        </Router>
    }
}

/// The whole site: navigation, then every section in page order.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Navigation />
        <main>
            <Hero />
            <About />
            <Projects />
            <Skills />
            <Contact />
        </main>
        <Footer />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        let resp = expect_context::<leptos_axum::ResponseOptions>();
        resp.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Not Found" />
        <div class="min-h-screen flex flex-col items-center justify-center gap-4 text-gray-800 dark:text-white">
            <h1 class="text-4xl font-bold">"404"</h1>
            <p class="text-lg">"Page not found."</p>
            <a href="/" class="text-blue-600 dark:text-blue-400 hover:underline">
                "Back to the portfolio"
            </a>
        </div>
    }
}
