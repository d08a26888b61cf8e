//! Buttons for the bridge's administrative commands.

use leptos::prelude::*;
use leptos::task::spawn_local;
use salute_console_domain::command::Command;
use salute_console_domain::request::{CommandRequest, Payload};

use crate::api::{self, Outgoing};
use crate::components::use_toasts;

/// One button per built-in command; each click posts the command once.
#[component]
pub fn CommandBar() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="commands">
            {Command::BUILTIN
                .into_iter()
                .map(|command| {
                    let id = command.as_str().to_string();
                    let label = command.label().to_string();
                    let on_click = move |_: leptos::ev::MouseEvent| {
                        match Outgoing::of(&CommandRequest::new(command.clone())) {
                            Ok(request) => spawn_local(async move {
                                if let Err(err) = api::post(request).await {
                                    toasts.report(CommandRequest::ENDPOINT, err);
                                }
                            }),
                            Err(err) => toasts.report(CommandRequest::ENDPOINT, err),
                        }
                    };
                    view! { <button id=id on:click=on_click>{label}</button> }
                })
                .collect_view()}
        </div>
    }
}
