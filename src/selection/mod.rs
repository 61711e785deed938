pub mod controller;
pub mod state;
pub mod window;

pub use controller::{
    reduce, Epoch, FetchRequest, FetchTicket, SelectionChange, SelectionController,
};
pub use state::{ChartStyle, Device, DeviceLayout, Language, SelectionState, UnknownValue};
pub use window::{InvertedWindow, TimeWindow, WindowPreset};
