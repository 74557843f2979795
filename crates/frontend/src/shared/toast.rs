//! Очередь уведомлений с автозакрытием.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

/// Время показа уведомления, мс.
const DISMISS_AFTER_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastIntent {
    Success,
    Error,
    Info,
}

impl ToastIntent {
    fn class(&self) -> &'static str {
        match self {
            ToastIntent::Success => "toast--success",
            ToastIntent::Error => "toast--error",
            ToastIntent::Info => "toast--info",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub intent: ToastIntent,
}

/// Сервис уведомлений; кладётся в контекст приложения.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn success(&self, title: &str, message: &str) {
        self.push(title, message, ToastIntent::Success);
    }

    pub fn error(&self, title: &str, message: &str) {
        self.push(title, message, ToastIntent::Error);
    }

    pub fn info(&self, title: &str, message: &str) {
        self.push(title, message, ToastIntent::Info);
    }

    fn push(&self, title: &str, message: &str, intent: ToastIntent) {
        let toast = Toast {
            id: Uuid::new_v4(),
            title: title.to_string(),
            message: message.to_string(),
            intent,
        };
        let id = toast.id;
        let toasts = self.toasts;
        toasts.update(|list| list.push(toast));

        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    fn all(&self) -> Vec<Toast> {
        self.toasts.get()
    }
}

/// Hook to access the toast service
pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found in context")
}

/// Контейнер уведомлений, рендерится один раз в корне приложения.
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toast();

    view! {
        <div class="toast-host">
            {move || service.all().into_iter().map(|toast| {
                let id = toast.id;
                view! {
                    <div class=format!("toast {}", toast.intent.class())>
                        <div class="toast__body">
                            <div class="toast__title">{toast.title}</div>
                            <div class="toast__message">{toast.message}</div>
                        </div>
                        <button
                            class="toast__close"
                            on:click=move |_| service.dismiss(id)
                        >
                            {crate::shared::icons::icon("x")}
                        </button>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
