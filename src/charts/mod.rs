//! Chart declarations, trendline fitting and mounting.

mod binding;
pub mod config;
mod trend;

pub use binding::{ChartBinding, mount_on_document};
pub use config::{
	AxisOverride, ChartConfig, ChartKind, ChartTheme, Dataset, OptionsOverride, ScaleKind,
};
pub use trend::{Sample, TrendLine, correlation};
