// medidas del semaforo, todas derivadas de una sola altura

// porcentajes de la altura, fijos para que el panel siempre
// se vea proporcionado sin importar el tamano elegido
pub const LAMP_RADIUS_PCT: f64 = 15.0;
pub const LAMP_SPACING_PCT: f64 = 2.0;
pub const LAMP_PADDING_PCT: f64 = 1.0;

/// Factor de la ventana respecto a la altura del panel
pub const WINDOW_SCALE: f64 = 1.3;

/// Altura por defecto del panel; el minimo comodo a la vista es 200
pub const PANEL_HEIGHT: f64 = 300.0;

/// Geometria del panel de luces
#[derive(Debug, Clone, Copy)]
pub struct PanelLayout {
    pub height: f64,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self { height: PANEL_HEIGHT }
    }
}

impl PanelLayout {
    /// Crea la geometria para una altura dada; la altura debe ser positiva
    pub fn new(height: f64) -> Self {
        debug_assert!(height > 0.0, "la altura del panel debe ser positiva");
        Self { height }
    }

    /// Ancho de la caja: la mitad de la altura
    pub fn width(&self) -> f64 {
        self.height / 2.0
    }

    /// Radio de cada foco
    pub fn lamp_radius(&self) -> f64 {
        self.height / 100.0 * LAMP_RADIUS_PCT
    }

    /// Espacio vertical entre focos
    pub fn lamp_spacing(&self) -> f64 {
        self.height / 100.0 * LAMP_SPACING_PCT
    }

    /// Margen interno de la pila de focos
    pub fn lamp_padding(&self) -> f64 {
        self.height / 100.0 * LAMP_PADDING_PCT
    }

    /// Lado preferido (y minimo) de la ventana
    pub fn window_size(&self) -> f64 {
        self.height * WINDOW_SCALE
    }
}
