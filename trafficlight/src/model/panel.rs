// panel de focos: tres circulos dentro de una caja

use crate::config::PanelLayout;

use super::light::{LightState, Rgb, COLOR_OFF};

/// Estado visual del semaforo: un relleno por foco y la luz activa.
/// Al crearse todos los focos quedan en neutro; `set_light` enciende
/// exactamente uno y apaga los otros dos.
#[derive(Debug)]
pub struct TrafficLight {
    layout: PanelLayout,
    fills: [Rgb; 3],
    active: Option<LightState>,
}

impl TrafficLight {
    pub fn new(layout: PanelLayout) -> Self {
        Self {
            layout,
            fills: [COLOR_OFF; 3],
            active: None,
        }
    }

    /// Enciende el foco del estado dado y deja los otros dos en neutro.
    /// Repetir el mismo estado no cambia nada.
    pub fn set_light(&mut self, light: LightState) {
        self.fills = [COLOR_OFF; 3];
        self.fills[light.slot()] = light.on_color();
        self.active = Some(light);
    }

    /// Luz encendida, si ya hubo alguna seleccion
    pub fn active(&self) -> Option<LightState> {
        self.active
    }

    /// Relleno actual del foco correspondiente al estado dado
    pub fn fill(&self, light: LightState) -> Rgb {
        self.fills[light.slot()]
    }

    pub fn layout(&self) -> &PanelLayout {
        &self.layout
    }
}
