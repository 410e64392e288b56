// Test de integracion del semaforo y su selector

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Mutex;

use trafficlight::model::COLOR_OFF;
use trafficlight::{LightSelector, LightState, PanelLayout, SelectorError, TrafficLight};

fn shared_light() -> trafficlight::SharedLight {
    Rc::new(RefCell::new(TrafficLight::new(PanelLayout::default())))
}

#[test]
fn test_initial_state_all_off() {
    let light = TrafficLight::new(PanelLayout::default());

    assert_eq!(light.active(), None, "al inicio no hay luz activa");
    for state in LightState::ALL {
        assert_eq!(light.fill(state), COLOR_OFF, "al inicio todos los focos van en neutro");
    }

    println!("✓ Panel creado con los tres focos apagados");
}

#[test]
fn test_set_light_exactly_one_on() {
    for chosen in LightState::ALL {
        let mut light = TrafficLight::new(PanelLayout::default());
        light.set_light(chosen);

        assert_eq!(light.active(), Some(chosen));
        for state in LightState::ALL {
            if state == chosen {
                assert_eq!(light.fill(state), chosen.on_color(), "el foco elegido debe encenderse");
            } else {
                assert_eq!(light.fill(state), COLOR_OFF, "los otros focos deben quedar en neutro");
            }
        }
    }

    println!("✓ Cada estado enciende exactamente su foco");
}

#[test]
fn test_set_light_idempotent() {
    let mut light = TrafficLight::new(PanelLayout::default());

    light.set_light(LightState::Yellow);
    let once: Vec<_> = LightState::ALL.iter().map(|s| light.fill(*s)).collect();

    light.set_light(LightState::Yellow);
    let twice: Vec<_> = LightState::ALL.iter().map(|s| light.fill(*s)).collect();

    assert_eq!(once, twice, "repetir el mismo estado no debe cambiar nada");
    assert_eq!(light.active(), Some(LightState::Yellow));

    println!("✓ set_light es idempotente");
}

#[test]
fn test_set_light_switch_resets_previous() {
    let mut light = TrafficLight::new(PanelLayout::default());

    light.set_light(LightState::Red);
    assert_eq!(light.fill(LightState::Red), LightState::Red.on_color());
    assert_eq!(light.fill(LightState::Yellow), COLOR_OFF);

    light.set_light(LightState::Green);
    assert_eq!(light.fill(LightState::Red), COLOR_OFF, "el rojo debe volver a neutro");
    assert_eq!(light.fill(LightState::Green), LightState::Green.on_color());
    assert_eq!(light.fill(LightState::Yellow), COLOR_OFF, "el amarillo nunca se toco");

    println!("✓ Cambiar de luz apaga la anterior");
}

#[test]
fn test_selector_requires_panel() {
    let result = LightSelector::new(None);

    assert!(
        matches!(result, Err(SelectorError::MissingLight)),
        "sin semaforo destino el selector no debe construirse"
    );

    println!("✓ El selector exige un semaforo ya creado");
}

#[test]
fn test_selector_error_message() {
    let err = LightSelector::new(None).err().unwrap();
    let msg = err.to_string();

    assert!(msg.contains("semaforo"), "el mensaje debe explicar que falta el semaforo");

    println!("✓ Mensaje de error: {}", msg);
}

#[test]
fn test_select_label_drives_panel_once() {
    let panel = shared_light();
    let mut selector = LightSelector::new(Some(panel.clone())).unwrap();

    let fired = Rc::new(Cell::new(0u32));
    let fired_hook = Rc::clone(&fired);
    selector.on_change(move |_| fired_hook.set(fired_hook.get() + 1));

    selector.select_label("Yellow");

    assert_eq!(panel.borrow().active(), Some(LightState::Yellow));
    assert_eq!(fired.get(), 1, "una seleccion debe avisar exactamente una vez");
    assert_eq!(selector.selected(), Some(LightState::Yellow));

    println!("✓ La etiqueta Yellow enciende la luz amarilla una sola vez");
}

#[test]
fn test_selector_single_select() {
    let panel = shared_light();
    let mut selector = LightSelector::new(Some(panel.clone())).unwrap();

    assert_eq!(selector.selected(), None, "al inicio no hay seleccion");

    selector.select(LightState::Red);
    selector.select(LightState::Green);

    assert_eq!(selector.selected(), Some(LightState::Green), "la nueva seleccion reemplaza a la anterior");
    assert_eq!(panel.borrow().active(), Some(LightState::Green));
    assert_eq!(panel.borrow().fill(LightState::Red), COLOR_OFF);

    println!("✓ A lo sumo una opcion seleccionada");
}

#[test]
fn test_selector_reselect_same_keeps_state() {
    let panel = shared_light();
    let mut selector = LightSelector::new(Some(panel.clone())).unwrap();

    selector.select(LightState::Red);
    selector.select(LightState::Red);

    assert_eq!(selector.selected(), Some(LightState::Red));
    assert_eq!(panel.borrow().active(), Some(LightState::Red));
    assert_eq!(panel.borrow().fill(LightState::Red), LightState::Red.on_color());

    println!("✓ Reseleccionar la misma opcion deja todo igual");
}

// captura de logs para verificar la redireccion del logger
static CAPTURED: Mutex<Vec<String>> = Mutex::new(Vec::new());

fn capture_log(msg: &str) {
    CAPTURED.lock().unwrap().push(msg.to_string());
}

#[test]
fn test_logger_redirection() {
    trafficlight::log::set_logger(capture_log);

    let panel = shared_light();
    let mut selector = LightSelector::new(Some(panel)).unwrap();
    selector.select(LightState::Red);

    let lines = CAPTURED.lock().unwrap();
    assert!(
        lines.iter().any(|l| l.contains("Red")),
        "la seleccion debe pasar por el logger redirigido"
    );

    println!("✓ Logger redirigido correctamente");
}
