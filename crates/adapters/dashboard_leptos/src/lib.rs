use leptos::prelude::*;

pub mod actions;
pub mod api;
mod components;
mod pages;

use components::ToastContainer;
use pages::Console;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ToastContainer>
            <main>
                <Console/>
            </main>
        </ToastContainer>
    }
}
