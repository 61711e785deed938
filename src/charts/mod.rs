//! Render targets and the lifecycle of the charts bound to them.

pub mod board;
pub mod layout;
pub mod registry;
pub mod visual;

pub use board::{Board, ChartInstance, Slot};
pub use layout::{targets, MountPoint, SeriesBinding};
pub use registry::{ChartRegistry, Reconciled, RenderSurface};
pub use visual::{build, TargetView, Visual};
