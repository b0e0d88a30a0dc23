use std::time::Duration;

use leptos::prelude::*;

use crate::notify::{Notification, NotificationKind, ToastQueue, TOAST_DURATION_MS};

#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
}

impl Toaster {
    /// Shows `notification` and schedules its dismissal.
    pub fn push(&self, notification: Notification) {
        let queue = self.queue;
        let Some(id) = queue.try_update(|q| q.push(notification)) else {
            return;
        };
        set_timeout(
            move || {
                queue.update(|q| {
                    q.dismiss(id);
                });
            },
            Duration::from_millis(TOAST_DURATION_MS),
        );
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster {
        queue: RwSignal::new(ToastQueue::default()),
    };
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn Toasts() -> impl IntoView {
    let toaster = use_toaster();
    view! {
        <div class="fixed bottom-4 right-4 z-[100] flex flex-col gap-2 w-full max-w-sm px-4 sm:px-0">
            <For
                each=move || toaster.queue.with(|q| q.toasts().to_vec())
                key=|t| t.id
                children=move |t| {
                    let id = t.id;
                    let n = t.notification;
                    let tone = match n.kind {
                        NotificationKind::Success => {
                            "bg-white dark:bg-gray-800 text-gray-900 dark:text-white border-gray-200 dark:border-gray-700"
                        }
                        NotificationKind::Error => "bg-red-600 text-white border-red-700",
                    };
                    view! {
                        <div
                            role="status"
                            class=format!(
                                "toast-enter relative rounded-lg border p-4 pr-8 shadow-lg {tone}",
                            )
                        >
                            <div class="font-semibold text-sm">{n.title}</div>
                            <div class="text-sm opacity-90">{n.description}</div>
                            <button
                                class="absolute top-2 right-2 text-sm opacity-70 hover:opacity-100"
                                aria-label="Dismiss"
                                on:click=move |_| toaster.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
