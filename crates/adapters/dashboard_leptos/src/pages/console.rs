use leptos::prelude::*;
use salute_console_domain::table::DeviceTable as TableModel;

use crate::api;
use crate::components::{CommandBar, DeviceTable};

/// Console page: bridge links, command buttons and the device table.
#[component]
pub fn Console() -> impl IntoView {
    let devices = LocalResource::new(api::fetch_devices);

    view! {
        <div>
            <h1>{concat!("SberGate console ", env!("CARGO_PKG_VERSION"))}</h1>
            <p><a href="index.html">"Перейти к настройкам СберАгента"</a></p>
            <p><a href="SberGate.log">"Скачать SberGate.log"</a></p>
            <h2>"Команды:"</h2>
            <CommandBar/>
            <h2 class="alert">"Устройства:"</h2>
            <Suspense fallback=|| view! { <p class="loading">"Загрузка устройств…"</p> }>
                {move || {
                    devices.read().as_ref().map(|result| match result {
                        Ok(records) => {
                            let table = RwSignal::new(TableModel::render(records));
                            view! { <DeviceTable table/> }.into_any()
                        }
                        Err(err) => view! {
                            <p class="error">{"Не удалось загрузить устройства: "} {api::describe(err)}</p>
                        }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
