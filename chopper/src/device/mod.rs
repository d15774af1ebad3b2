// Metrea LLC Intellectual Property
// Originally developed by Raw Socket Labs LLC

mod api;
mod hop;
mod interface;
mod traits;

pub use api::{open, start};
pub use hop::*;
pub use interface::find_monitor_interface;
pub use traits::RadioControl;
