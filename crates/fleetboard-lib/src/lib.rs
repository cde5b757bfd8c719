//! CloudWatch dashboard and alarm generation from discovered resources.
//!
//! The input is a JSON array of tagged resource records (ARN plus
//! optional service-specific metadata). The output is a deterministic
//! plan of named dashboards, each within a configurable widget capacity,
//! and the alarms that belong to them.
//!
//! ```no_run
//! use fleetboard_lib::{generate, GeneratorConfig, ResourceRecord};
//!
//! let resources: Vec<ResourceRecord> = serde_json::from_str("[]")?;
//! let plan = generate(resources, &GeneratorConfig::default())?;
//! for dashboard in &plan.dashboards {
//!     println!("{}: {} widgets", dashboard.name, dashboard.widget_count());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod alarms;
pub mod arn;
pub mod classify;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod generate;
pub mod grouping;
pub mod models;
pub mod render;
pub mod widgets;

pub use alarms::Alarm;
pub use classify::{classify, ServiceKind};
pub use config::GeneratorConfig;
pub use dashboard::Dashboard;
pub use error::GenerateError;
pub use generate::{generate, DashboardPlan};
pub use models::{ResourceRecord, Tag};
