// seleccion de luz: tres opciones mutuamente excluyentes que manejan un semaforo

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::SelectorError;
use crate::model::{LightState, TrafficLight};
use crate::tl_log;

/// Semaforo compartido entre el selector y quien lo dibuja
pub type SharedLight = Rc<RefCell<TrafficLight>>;

/// Selector de luz con semantica de grupo de radios: a lo sumo una
/// opcion seleccionada, y cada seleccion enciende la luz correspondiente
/// en el semaforo destino.
pub struct LightSelector {
    panel: SharedLight,
    selected: Option<LightState>,
    on_change: Option<Box<dyn Fn(LightState)>>,
}

impl LightSelector {
    /// Fabrica validada: el selector no tiene sentido sin un semaforo
    /// destino, asi que falla antes de que exista interfaz alguna.
    pub fn new(panel: Option<SharedLight>) -> Result<Self, SelectorError> {
        let panel = panel.ok_or(SelectorError::MissingLight)?;
        Ok(Self {
            panel,
            selected: None,
            on_change: None,
        })
    }

    /// Registra el observador de cambios de seleccion; se invoca
    /// sincronicamente con el estado recien seleccionado
    pub fn on_change(&mut self, hook: impl Fn(LightState) + 'static) {
        self.on_change = Some(Box::new(hook));
    }

    /// Aplica una seleccion: reemplaza la anterior, enciende la luz en el
    /// semaforo (una sola vez) y avisa al observador. Reseleccionar el
    /// mismo estado es valido y deja todo igual.
    pub fn select(&mut self, light: LightState) {
        self.selected = Some(light);
        self.panel.borrow_mut().set_light(light);
        tl_log!("💡 Luz seleccionada: {}", light.label());
        if let Some(hook) = &self.on_change {
            hook(light);
        }
    }

    /// Mapea la etiqueta de una opcion a su estado y selecciona.
    /// Las etiquetas vienen del conjunto fijo de opciones; cualquier otra
    /// cosa es un bug del llamador, no un error recuperable.
    pub fn select_label(&mut self, label: &str) {
        let light = LightState::from_label(label)
            .unwrap_or_else(|| panic!("etiqueta de opcion desconocida: {:?}", label));
        self.select(light);
    }

    /// Opcion seleccionada, si ya hubo alguna
    pub fn selected(&self) -> Option<LightState> {
        self.selected
    }
}
