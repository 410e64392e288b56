// reune las piezas del modelo de luces

mod light;
mod panel;

pub use light::{LightState, Rgb, COLOR_OFF};
pub use panel::TrafficLight;
