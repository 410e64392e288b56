// modulo raiz de trafficlight
// organiza el modelo de luces, la geometria y el control de seleccion

pub mod config;
pub mod control;
pub mod error;
pub mod log;
pub mod model;

// reexports comodos
pub use config::PanelLayout;
pub use control::{LightSelector, SharedLight};
pub use error::SelectorError;
pub use model::{LightState, Rgb, TrafficLight};
