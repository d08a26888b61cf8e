mod command_bar;
mod device_table;
mod toast;

pub use command_bar::CommandBar;
pub use device_table::DeviceTable;
pub use toast::{ToastContainer, Toasts, use_toasts};
