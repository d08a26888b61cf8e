//! Device table component: one header row, one row per device record.

use leptos::prelude::*;
use leptos::task::spawn_local;
use salute_console_domain::table::{Cell, Column, DeviceRow as RowModel, DeviceTable as TableModel};

use crate::actions::Toggle;
use crate::api;
use crate::components::{Toasts, use_toasts};

/// A table displaying a rendered device snapshot.
///
/// Rows are built once; only checkbox states track the model, so a toggle
/// updates the model optimistically without redrawing the table.
#[component]
pub fn DeviceTable(
    /// The table model, shared with the toggles that update it.
    table: RwSignal<TableModel>,
) -> impl IntoView {
    let rows = table.with_untracked(|t| t.rows().to_vec());

    view! {
        <table id="devices">
            <thead>
                <tr>
                    {Column::ALL
                        .iter()
                        .map(|column| view! { <th>{column.label()}</th> })
                        .collect_view()}
                </tr>
            </thead>
            <tbody>
                {rows.into_iter().map(|row| view! { <DeviceRow row table/> }).collect_view()}
            </tbody>
        </table>
    }
}

/// A single row in the device table.
#[component]
fn DeviceRow(
    /// The row to display.
    row: RowModel,
    table: RwSignal<TableModel>,
) -> impl IntoView {
    view! {
        <tr>
            {row
                .cells()
                .iter()
                .cloned()
                .map(|cell| view! { <td><CellView cell table/></td> })
                .collect_view()}
        </tr>
    }
}

fn checked_in(table: &TableModel, row: usize, column: Column) -> bool {
    table
        .rows()
        .get(row)
        .and_then(|r| r.cell(column).is_checked())
        .unwrap_or(false)
}

/// Apply `toggle` to the table, then post it in the background.
fn submit(table: RwSignal<TableModel>, toggle: &Toggle, toasts: Toasts) {
    let endpoint = toggle.endpoint();
    match table.try_update(|t| toggle.apply(t)) {
        Some(Ok(request)) => spawn_local(async move {
            if let Err(err) = api::post(request).await {
                toasts.report(endpoint, err);
            }
        }),
        Some(Err(err)) => toasts.report(endpoint, err),
        None => {}
    }
}

/// Content of one cell. Text is inserted as a text node, never as markup.
#[component]
fn CellView(cell: Cell, table: RwSignal<TableModel>) -> impl IntoView {
    let toasts = use_toasts();

    match cell {
        Cell::Empty => ().into_any(),
        Cell::Text(text) => text.into_any(),
        Cell::EnabledToggle { row, .. } => {
            let checked = move || table.with(|t| checked_in(t, row, Column::Enabled));
            let on_change = move |ev: leptos::ev::Event| {
                let toggle = Toggle::Enabled {
                    row,
                    checked: event_target_checked(&ev),
                };
                submit(table, &toggle, toasts);
            };
            view! {
                <input
                    type="checkbox"
                    data-id=row.to_string()
                    prop:checked=checked
                    on:change=on_change
                />
            }
            .into_any()
        }
        Cell::FeatureToggle {
            row,
            entity_id,
            feature,
            ..
        } => {
            let input_id = format!("feature-{row}-{feature}");
            let caption = feature.to_string();
            let data_feature = feature.to_string();
            let checked = move || table.with(|t| checked_in(t, row, Column::Features));
            let on_change = move |ev: leptos::ev::Event| {
                let toggle = Toggle::Feature {
                    row,
                    entity_id: entity_id.clone(),
                    feature: feature.clone(),
                    checked: event_target_checked(&ev),
                };
                submit(table, &toggle, toasts);
            };
            view! {
                <input
                    type="checkbox"
                    id=input_id.clone()
                    data-id=row.to_string()
                    data-feature=data_feature
                    prop:checked=checked
                    on:change=on_change
                />
                <label for=input_id>{caption}</label>
            }
            .into_any()
        }
    }
}
