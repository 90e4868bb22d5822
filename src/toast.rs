//! Toast Notifications
//!
//! Transient feedback banners shared by every page through context.

use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays up.
const TOAST_MS: u64 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
}

impl ToastKind {
    fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
            ToastKind::Warning => "toast warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub kind: ToastKind,
}

/// Toast queue provided via context.
#[derive(Clone, Copy)]
pub struct Toasts {
    toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl Toasts {
    /// Show a toast and schedule its auto-dismiss.
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.set_toasts.update(|list| {
            list.push(Toast {
                id,
                message: message.into(),
                kind,
            })
        });

        let set_toasts = self.set_toasts;
        spawn_local(async move {
            sleep(Duration::from_millis(TOAST_MS)).await;
            set_toasts.update(|list| list.retain(|toast| toast.id != id));
        });
    }
}

pub fn provide_toasts() {
    let (toasts, set_toasts) = signal(Vec::<Toast>::new());
    provide_context(Toasts {
        toasts,
        set_toasts,
        next_id: StoredValue::new(0),
    });
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().expect("Toasts should be provided")
}

/// Fixed host rendering the active toasts.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    let list = toasts.toasts;
    view! {
        <div id="toast-container">
            <For
                each=move || list.get()
                key=|toast| toast.id
                children=move |toast| {
                    view! { <div class=toast.kind.css_class()>{toast.message.clone()}</div> }
                }
            />
        </div>
    }
}
