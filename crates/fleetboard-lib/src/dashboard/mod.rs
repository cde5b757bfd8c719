//! Dashboard containers and capacity packing

mod container;
mod manager;
mod registry;

pub use container::Dashboard;
pub use manager::DashboardManager;
pub use registry::{DashboardKey, DashboardRegistry};
