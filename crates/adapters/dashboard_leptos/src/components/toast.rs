//! Failure notices for bridge requests.
//!
//! A notice names the endpoint that failed and, when the bridge answered, its
//! status code. Every notice is also written to the browser console.

use leptos::prelude::*;
use leptos::task::spawn_local;
use salute_console_domain::endpoint::Endpoint;
use salute_console_domain::error::ConsoleError;

use crate::api::describe;

/// How long a notice stays on screen, in milliseconds.
const TOAST_TTL_MS: u32 = 5000;

/// One failed request as shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub endpoint: Endpoint,
    pub status: Option<u16>,
    pub text: String,
}

/// Notices currently on screen, oldest first.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    next_id: u32,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Add a notice for `err` on `endpoint` and return its id.
    pub fn report(&mut self, endpoint: Endpoint, err: &ConsoleError) -> u32 {
        let id = self.next_id;
        self.next_id = id.wrapping_add(1);
        let status = match err {
            ConsoleError::Api(api) => api.status(),
            ConsoleError::Validation(_) | ConsoleError::View(_) => None,
        };
        self.toasts.push(Toast {
            id,
            endpoint,
            status,
            text: describe(err),
        });
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Handle for reporting failures from below a [`ToastContainer`].
#[derive(Clone, Copy)]
pub struct Toasts(RwSignal<ToastQueue>);

impl Toasts {
    /// Log `err` and show it until dismissed or [`TOAST_TTL_MS`] elapse.
    pub fn report(self, endpoint: Endpoint, err: impl Into<ConsoleError>) {
        let err = err.into();
        leptos::logging::warn!("{endpoint}: {}", describe(&err));

        let queue = self.0;
        let Some(id) = queue.try_update(|q| q.report(endpoint, &err)) else {
            return;
        };
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
            queue.try_update(|q| q.dismiss(id));
        });
    }

    fn dismiss(self, id: u32) {
        self.0.update(|q| q.dismiss(id));
    }
}

/// Access the notice handle from Leptos context.
///
/// Must be called within a component tree that has a [`ToastContainer`] ancestor.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().expect("Toasts not found in context")
}

/// Provides the notice handle to `children` and renders active notices.
#[component]
pub fn ToastContainer(children: Children) -> impl IntoView {
    let queue = RwSignal::new(ToastQueue::default());
    let toasts = Toasts(queue);
    provide_context(toasts);

    view! {
        {children()}
        <div class="toast-container">
            {move || {
                queue
                    .with(|q| q.toasts().to_vec())
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let status = toast
                            .status
                            .map(|status| view! { <span class="toast-status">{status}</span> });
                        view! {
                            <div class="toast toast-error">
                                <button
                                    class="toast-dismiss"
                                    title="Закрыть"
                                    on:click=move |_| toasts.dismiss(id)
                                >
                                    "\u{00D7}"
                                </button>
                                <code class="toast-endpoint">{toast.endpoint.path()}</code>
                                {status}
                                <p>{toast.text}</p>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
