//! Device table model: what the console shows, independent of where.
//!
//! [`DeviceTable::render`] turns a snapshot of [`DeviceRecord`]s into one
//! header plus one row per record, in input order. Front-ends walk the model
//! and draw it (HTML in the browser, text in a terminal).

use crate::device::DeviceRecord;
use crate::feature::Feature;

/// Fixed table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Enabled,
    Home,
    Room,
    Id,
    Name,
    Model,
    State,
    Attributes,
    Features,
}

impl Column {
    pub const ALL: [Column; 9] = [
        Column::Enabled,
        Column::Home,
        Column::Room,
        Column::Id,
        Column::Name,
        Column::Model,
        Column::State,
        Column::Attributes,
        Column::Features,
    ];

    /// Field key of the column.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Home => "home",
            Self::Room => "room",
            Self::Id => "id",
            Self::Name => "name",
            Self::Model => "model",
            Self::State => "state",
            Self::Attributes => "attributes",
            Self::Features => "features",
        }
    }

    /// Header caption.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Enabled => "Включено",
            Self::Home => "Дом",
            Self::Room => "Комната",
            Self::Id => "ID",
            Self::Name => "Имя",
            Self::Model => "Модель",
            Self::State => "Состояние",
            Self::Attributes => "Атрибуты",
            Self::Features => "Функции устройства",
        }
    }

    /// Index into [`Column::ALL`]; variants are declared in display order.
    fn position(self) -> usize {
        self as usize
    }
}

/// Content of a single table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Nothing to show.
    Empty,
    /// Plain text. Never interpreted as markup.
    Text(String),
    /// Enablement checkbox of the device at `row`.
    EnabledToggle { row: usize, checked: bool },
    /// Feature checkbox of the device identified by `entity_id`.
    FeatureToggle {
        row: usize,
        entity_id: String,
        feature: Feature,
        checked: bool,
    },
}

impl Cell {
    fn text_or_empty(value: Option<&str>) -> Self {
        value.map_or(Self::Empty, |v| Self::Text(v.to_string()))
    }

    /// Text content, if this is a text cell.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Checked state, if this is a checkbox cell.
    #[must_use]
    pub fn is_checked(&self) -> Option<bool> {
        match self {
            Self::EnabledToggle { checked, .. } | Self::FeatureToggle { checked, .. } => {
                Some(*checked)
            }
            Self::Empty | Self::Text(_) => None,
        }
    }
}

/// One body row of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRow {
    /// Position of the record in the snapshot.
    pub index: usize,
    cells: Vec<Cell>,
}

impl DeviceRow {
    fn render(index: usize, record: &DeviceRecord) -> Self {
        let cells = Column::ALL
            .iter()
            .map(|column| match column {
                Column::Enabled => Cell::EnabledToggle {
                    row: index,
                    checked: record.is_enabled(),
                },
                Column::Home => Cell::text_or_empty(record.home.as_deref()),
                Column::Room => Cell::text_or_empty(record.room.as_deref()),
                Column::Id => Cell::Text(record.display_id()),
                Column::Name => Cell::Text(record.name.clone()),
                Column::Model => Cell::Text(record.model.clone()),
                Column::State => Cell::Text(record.state.clone()),
                Column::Attributes => Cell::text_or_empty(record.attributes_json().as_deref()),
                Column::Features if record.is_light() => Cell::FeatureToggle {
                    row: index,
                    entity_id: record.entity_id.clone(),
                    feature: Feature::Brightness,
                    checked: record.has_feature(&Feature::Brightness),
                },
                Column::Features => Cell::Empty,
            })
            .collect();
        Self { index, cells }
    }

    /// Cell under `column`.
    #[must_use]
    pub fn cell(&self, column: Column) -> &Cell {
        &self.cells[column.position()]
    }

    fn cell_mut(&mut self, column: Column) -> &mut Cell {
        &mut self.cells[column.position()]
    }

    /// Cells in [`Column::ALL`] order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// Header plus one row per device record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceTable {
    rows: Vec<DeviceRow>,
}

impl DeviceTable {
    /// Build the table for a snapshot, preserving input order.
    #[must_use]
    pub fn render(records: &[DeviceRecord]) -> Self {
        let rows = records
            .iter()
            .enumerate()
            .map(|(index, record)| DeviceRow::render(index, record))
            .collect();
        Self { rows }
    }

    /// Header columns (always exactly one header row).
    #[must_use]
    pub fn header(&self) -> &'static [Column] {
        &Column::ALL
    }

    #[must_use]
    pub fn rows(&self) -> &[DeviceRow] {
        &self.rows
    }

    /// Number of body rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Reflect the operator's own toggle without waiting for the bridge.
    ///
    /// Returns `false` when `row` does not exist.
    pub fn set_enabled(&mut self, row: usize, checked: bool) -> bool {
        let Some(device_row) = self.rows.get_mut(row) else {
            return false;
        };
        if let Cell::EnabledToggle { checked: current, .. } = device_row.cell_mut(Column::Enabled)
        {
            *current = checked;
            return true;
        }
        false
    }

    /// Reflect a feature toggle without waiting for the bridge.
    ///
    /// Returns `false` when `row` has no checkbox for `feature`.
    pub fn set_feature(&mut self, row: usize, feature: &Feature, checked: bool) -> bool {
        let Some(device_row) = self.rows.get_mut(row) else {
            return false;
        };
        match device_row.cell_mut(Column::Features) {
            Cell::FeatureToggle {
                feature: shown,
                checked: current,
                ..
            } if shown == feature => {
                *current = checked;
                true
            }
            _ => false,
        }
    }
}
