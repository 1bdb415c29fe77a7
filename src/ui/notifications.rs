//! Toast notifications
//!
//! Transient messages for auth and submission outcomes. Each toast removes
//! itself after its `auto_dismiss_ms`.

use crate::core::{Notification, NotificationType};
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;
use std::collections::VecDeque;

/// Maximum number of toasts on screen
const MAX_NOTIFICATIONS: usize = 3;

/// Notification with an id for removal
#[derive(Clone, Debug)]
pub struct NotificationItem {
    pub id: u64,
    pub notification: Notification,
}

/// Toast stack, placed once at the page root
#[component]
pub fn NotificationsContainer() -> impl IntoView {
    let manager = use_notifications();
    let notifications = manager.notifications();

    view! {
        <div class="fixed bottom-4 right-4 z-[60] flex flex-col gap-2 w-full max-w-sm" aria-live="polite">
            <For
                each=move || notifications.get()
                key=|item| item.id
                children=move |item| view! { <Toast item=item notifications=notifications /> }
            />
        </div>
    }
}

#[component]
fn Toast(item: NotificationItem, notifications: RwSignal<VecDeque<NotificationItem>>) -> impl IntoView {
    let id = item.id;
    let notification = item.notification;
    let (is_exiting, _set_is_exiting) = signal(false);

    if let Some(_ms) = notification.auto_dismiss_ms {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(_ms).await;
                _set_is_exiting.set(true);
                // Exit animation
                TimeoutFuture::new(300).await;
                notifications.try_update(|n| n.retain(|i| i.id != id));
            });
        }
    }

    let (container_class, icon_name) = match notification.notification_type {
        NotificationType::Success => ("bg-white border-emerald-200", icons::CHECK_CIRCLE),
        NotificationType::Error => ("bg-red-50 border-red-200", icons::ALERT_CIRCLE),
        NotificationType::Info => ("bg-white border-blue-200", icons::INFO),
    };
    let container_class = format!(
        "flex items-start gap-3 p-4 rounded-lg border shadow-lg transition-all duration-300 {}",
        container_class
    );

    view! {
        <div
            class=container_class
            role="status"
            style=move || if is_exiting.get() { "opacity: 0; transform: translateX(1rem);" } else { "opacity: 1; transform: translateX(0);" }
        >
            <Icon name=icon_name class="w-5 h-5 mt-0.5 shrink-0" />
            <div class="flex-1 min-w-0">
                <h4 class="text-sm font-semibold text-gray-900">{notification.title}</h4>
                <p class="text-sm text-gray-600 mt-0.5">{notification.message}</p>
            </div>
            <button
                class="text-gray-400 hover:text-gray-700 transition-colors"
                aria-label="Dismiss"
                on:click=move |_| notifications.update(|n| n.retain(|i| i.id != id))
            >
                <Icon name=icons::X class="w-4 h-4" />
            </button>
        </div>
    }
}

/// Handle for pushing toasts
#[derive(Clone, Copy)]
pub struct NotificationManager {
    notifications: RwSignal<VecDeque<NotificationItem>>,
    next_id: StoredValue<u64>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(VecDeque::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn notifications(&self) -> RwSignal<VecDeque<NotificationItem>> {
        self.notifications
    }

    pub fn notify(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.notifications.update(|n| {
            n.push_back(NotificationItem { id, notification });

            // Drop the oldest past the limit
            while n.len() > MAX_NOTIFICATIONS {
                n.pop_front();
            }
        });
    }

    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notification::info(title, message));
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_notifications() -> NotificationManager {
    let manager = NotificationManager::new();
    provide_context(manager);
    manager
}

pub fn use_notifications() -> NotificationManager {
    expect_context::<NotificationManager>()
}
