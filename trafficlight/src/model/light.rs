// estados del semaforo y sus colores de encendido

/// Color rgb para cairo, componentes en [0, 1]
pub type Rgb = (f64, f64, f64);

// colores elegidos a ojo para que se vean bien en pantalla,
// no los rojo/amarillo/verde puros
const COLOR_RED_ON: Rgb = (1.0, 0.27, 0.0);
const COLOR_YELLOW_ON: Rgb = (1.0, 0.65, 0.0);
const COLOR_GREEN_ON: Rgb = (0.2, 0.8, 0.2);

/// Color neutro compartido por los focos apagados
pub const COLOR_OFF: Rgb = (1.0, 1.0, 1.0);

/// Los tres estados posibles del semaforo
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightState {
    Red,
    Yellow,
    Green,
}

impl LightState {
    /// Orden de arriba hacia abajo en el panel
    pub const ALL: [LightState; 3] = [LightState::Red, LightState::Yellow, LightState::Green];

    /// Etiqueta visible de la opcion correspondiente
    pub fn label(self) -> &'static str {
        match self {
            LightState::Red => "Red",
            LightState::Yellow => "Yellow",
            LightState::Green => "Green",
        }
    }

    /// Mapea una etiqueta de opcion a su estado, sin importar mayusculas
    pub fn from_label(label: &str) -> Option<LightState> {
        LightState::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(label))
    }

    /// Color del foco cuando este estado es el activo
    pub fn on_color(self) -> Rgb {
        match self {
            LightState::Red => COLOR_RED_ON,
            LightState::Yellow => COLOR_YELLOW_ON,
            LightState::Green => COLOR_GREEN_ON,
        }
    }

    // indice del foco dentro del panel
    pub(crate) fn slot(self) -> usize {
        match self {
            LightState::Red => 0,
            LightState::Yellow => 1,
            LightState::Green => 2,
        }
    }
}
