pub mod calendar;
pub mod config;
pub mod error;
pub mod invocation;
pub mod layout;
pub mod model;

pub use calendar::{CalendarSpec, LeadWindow};
pub use config::{DomainExtent, ForecastConfig};
pub use error::AppError;
pub use invocation::{
    BiasCorrectionTask, DisaggregationTask, MemberCopy, TaskInvocation, VariableSpec,
};
pub use layout::ForecastLayout;
pub use model::{EnsembleTopology, NmmeModel};
