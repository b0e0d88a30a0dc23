use leptos::{
    either::Either,
    ev::{Event, SubmitEvent},
    html,
    prelude::*,
    task::spawn_local,
};

#[cfg(feature = "ssr")]
use std::sync::OnceLock;

use super::{reveal::use_reveal, toast::use_toaster};
use crate::{
    contact::{ContactFlow, ContactFormInput, Field},
    content::{CONTACT_CHANNELS, OWNER_EMAIL},
    relay::{Relay, RelayError},
    visibility::{reveal_class, Direction},
};
#[cfg(feature = "ssr")]
use crate::{
    config::RelayConfig,
    relay::{EmailJsRelay, RetryingRelay},
};

/// Relay shared by every submission, so the HTTP client and its connection
/// pool are built once. Missing configuration is retried on the next call.
#[cfg(feature = "ssr")]
fn shared_relay() -> Result<&'static RetryingRelay<EmailJsRelay>, ServerFnError> {
    static RELAY: OnceLock<RetryingRelay<EmailJsRelay>> = OnceLock::new();
    if let Some(relay) = RELAY.get() {
        return Ok(relay);
    }
    let config = RelayConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "contact relay is not configured");
        ServerFnError::new("Contact form is unavailable")
    })?;
    let policy = config.retry_policy();
    let relay = RetryingRelay::new(
        EmailJsRelay::new(config).map_err(|e| ServerFnError::new(e.to_string()))?,
        policy,
    );
    Ok(RELAY.get_or_init(|| relay))
}

/// Forwards a contact message to the email relay. Relay credentials only
/// exist on the server.
#[server]
pub async fn send_contact(input: ContactFormInput) -> Result<(), ServerFnError> {
    if !input.is_complete() {
        return Err(ServerFnError::new("All fields are required"));
    }
    shared_relay()?.deliver(&input).await.map_err(|e| {
        tracing::warn!(error = %e, "contact message was not delivered");
        ServerFnError::new(e.to_string())
    })?;
    tracing::info!("contact message delivered");
    Ok(())
}

/// Client side of [`send_contact`].
struct ServerFnRelay;

impl Relay for ServerFnRelay {
    async fn deliver(&self, message: &ContactFormInput) -> Result<(), RelayError> {
        send_contact(message.clone())
            .await
            .map_err(|e| RelayError::Server(e.to_string()))
    }
}

const INPUT_CLASS: &str = "w-full px-4 py-3 border border-rose-300 dark:border-rose-600 dark:bg-gray-700 dark:text-white rounded-lg focus:ring-2 focus:ring-rose-500 focus:border-transparent transition-colors";

#[component]
pub fn Contact() -> impl IntoView {
    let grid_ref = NodeRef::<html::Div>::new();
    let shown = use_reveal(grid_ref);
    let toaster = use_toaster();
    let flow = RwSignal::new(ContactFlow::new());

    let sending = move || flow.with(|f| f.outcome().is_sending());
    let value = move |field: Field| {
        move || {
            flow.with(|f| {
                let input = f.input();
                match field {
                    Field::Name => input.name.clone(),
                    Field::Email => input.email.clone(),
                    Field::Message => input.message.clone(),
                }
            })
        }
    };
    let on_input = move |field: Field| {
        move |ev: Event| {
            let v = event_target_value(&ev);
            flow.update(|f| f.set_field(field, v));
        }
    };

    // Same steps as `ContactFlow::submit`, split around the await so the
    // signal isn't borrowed while the request is in flight.
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(message) = flow.try_update(|f| f.begin()).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = ServerFnRelay.deliver(&message).await;
            let notifications = flow
                .try_update(|f| {
                    f.finish(result);
                    f.take_notifications()
                })
                .unwrap_or_default();
            for n in notifications {
                toaster.push(n);
            }
        });
    };

    view! {
        <section
            id="contact"
            class="py-20 bg-gradient-to-br from-rose-50 via-pink-50 to-purple-50 dark:from-gray-900 dark:via-rose-900 dark:to-purple-900 transition-colors duration-300"
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class=move || {
                    format!("text-center mb-16 {}", reveal_class(shown.get(), Direction::Up))
                }>
                    <h2 class="text-4xl font-bold bg-gradient-to-r from-rose-600 to-purple-600 bg-clip-text text-transparent mb-4">
                        "Let's Work Together"
                    </h2>
                    <p class="text-xl text-gray-600 dark:text-gray-300 max-w-3xl mx-auto">
                        "Have a project in mind? I'd love to hear about it. Let's create something amazing together."
                    </p>
                    <div class="mt-4 p-4 bg-blue-100 dark:bg-blue-900/30 rounded-lg max-w-2xl mx-auto">
                        <p class="text-sm text-blue-800 dark:text-blue-200">
                            "📧 Messages from this form go straight to my inbox: "
                            <strong>{OWNER_EMAIL}</strong>
                        </p>
                    </div>
                </div>

                <div node_ref=grid_ref class="grid md:grid-cols-2 gap-12">
                    <div class=move || reveal_class(shown.get(), Direction::Left)>
                        <h3 class="text-2xl font-semibold text-gray-800 dark:text-white mb-6">
                            "Get In Touch"
                        </h3>
                        <div class="space-y-6">
                            {CONTACT_CHANNELS
                                .iter()
                                .map(|channel| {
                                    let detail = match channel.href {
                                        Some(href) => {
                                            Either::Left(
                                                view! {
                                                    <a href=href class="hover:underline">
                                                        {channel.value}
                                                    </a>
                                                },
                                            )
                                        }
                                        None => Either::Right(channel.value),
                                    };
                                    view! {
                                        <div class="flex items-center hover:translate-x-2 transition-transform">
                                            <div class="bg-gradient-to-r from-rose-500 to-purple-600 p-3 rounded-full mr-4 text-white w-11 h-11 flex items-center justify-center">
                                                {channel.icon}
                                            </div>
                                            <div>
                                                <p class="text-gray-600 dark:text-gray-400 text-sm">
                                                    {channel.label}
                                                </p>
                                                <p class="text-gray-800 dark:text-white font-medium">
                                                    {detail}
                                                </p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class=move || {
                        format!(
                            "bg-white/80 dark:bg-gray-800/80 backdrop-blur-sm rounded-2xl shadow-2xl p-8 border border-rose-200 dark:border-rose-700 hover:scale-[1.02] {}",
                            reveal_class(shown.get(), Direction::Right),
                        )
                    }>
                        <form class="space-y-6" on:submit=on_submit>
                            <div>
                                <label
                                    for="name"
                                    class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2"
                                >
                                    "Name"
                                </label>
                                <input
                                    type="text"
                                    id="name"
                                    name="name"
                                    required
                                    placeholder="Your Name"
                                    class=INPUT_CLASS
                                    prop:value=value(Field::Name)
                                    on:input=on_input(Field::Name)
                                />
                            </div>
                            <div>
                                <label
                                    for="email"
                                    class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2"
                                >
                                    "Email"
                                </label>
                                <input
                                    type="email"
                                    id="email"
                                    name="email"
                                    required
                                    placeholder="your.email@example.com"
                                    class=INPUT_CLASS
                                    prop:value=value(Field::Email)
                                    on:input=on_input(Field::Email)
                                />
                            </div>
                            <div>
                                <label
                                    for="message"
                                    class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2"
                                >
                                    "Message"
                                </label>
                                <textarea
                                    id="message"
                                    name="message"
                                    required
                                    rows="5"
                                    placeholder="Tell me about your project..."
                                    class=format!("{INPUT_CLASS} resize-none")
                                    prop:value=value(Field::Message)
                                    on:input=on_input(Field::Message)
                                ></textarea>
                            </div>
                            <button
                                type="submit"
                                disabled=sending
                                class="w-full bg-gradient-to-r from-rose-600 to-purple-600 text-white py-3 px-6 rounded-lg font-medium hover:shadow-lg transition-all duration-200 flex items-center justify-center disabled:opacity-50"
                            >
                                <span class="mr-2">"➤"</span>
                                {move || if sending() { "Sending..." } else { "Send Message" }}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::config::{PUBLIC_KEY_VAR, SERVICE_ID_VAR, TEMPLATE_ID_VAR};

    #[test]
    fn test_relay_is_built_once() {
        std::env::set_var(SERVICE_ID_VAR, "service_abc");
        std::env::set_var(TEMPLATE_ID_VAR, "template_xyz");
        std::env::set_var(PUBLIC_KEY_VAR, "pk_123");
        let first = shared_relay().unwrap();
        let second = shared_relay().unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.inner().config().service_id, "service_abc");
    }
}
