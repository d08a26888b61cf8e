//! View port: where the rendered device table ends up.

use salute_console_domain::table::DeviceTable;

/// A container that displays one device table at a time.
pub trait TableView {
    /// Replace whatever table is currently mounted with `table`.
    ///
    /// # Errors
    ///
    /// Returns the IO error of a view that could not display the table.
    fn mount(&self, table: DeviceTable) -> std::io::Result<()>;
}

impl<T: TableView + ?Sized> TableView for std::sync::Arc<T> {
    fn mount(&self, table: DeviceTable) -> std::io::Result<()> {
        (**self).mount(table)
    }
}
