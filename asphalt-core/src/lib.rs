pub mod calculations;
pub mod config;
pub mod debounce;
pub mod models;
pub mod session;

pub use config::{ConfigError, EstimatorConfig, NavConfig, PricingConfig, WidgetConfig};
pub use debounce::{Debouncer, Scheduler, Ticket, TimerHandle};
pub use models::*;
pub use session::{EstimateSession, FieldError, Outcome};
