mod controller;
mod events;
mod port;

pub use controller::NavigationController;
pub use events::{PerPageEvent, SortEvent};
pub use port::{MemoryLocation, NavigationPort};
