// arma la ventana: titulo arriba, semaforo al centro, radios abajo

use gtk::prelude::*;
use gtk::{
    Application, ApplicationWindow, Box as GtkBox, CheckButton, DrawingArea, Label, Orientation,
};
use std::cell::RefCell;
use std::rc::Rc;

use trafficlight::{tl_log, LightSelector, LightState, PanelLayout, SelectorError, TrafficLight};

use super::drawing;

// Funcion principal que construye toda la interfaz de usuario.
pub fn build_ui(app: &Application) {
    let layout = PanelLayout::default();
    let window_size = layout.window_size() as i32;

    // el semaforo se crea primero; el selector lo exige ya construido
    let panel = Rc::new(RefCell::new(TrafficLight::new(layout)));

    let selector = match LightSelector::new(Some(Rc::clone(&panel))) {
        Ok(selector) => Rc::new(RefCell::new(selector)),
        Err(err) => {
            // orden de construccion incorrecto: aviso modal y salida limpia,
            // sin dejar una ventana a medio armar
            show_order_error(app, &err);
            return;
        }
    };

    let window = ApplicationWindow::builder()
        .application(app)
        .title("Traffic Light Simulator")
        .default_width(window_size)
        .default_height(window_size)
        .build();

    // la ventana nunca se achica por debajo del tamano preferido
    window.set_size_request(window_size, window_size);

    let vbox = GtkBox::new(Orientation::Vertical, 5);

    // --- Titulo ---
    let title = Label::new(None);
    title.set_markup("<span size='x-large' weight='bold'>Traffic Light Simulator</span>");
    vbox.append(&title);

    // --- Semaforo (canvas) ---
    let canvas = DrawingArea::new();
    canvas.set_content_width(layout.width() as i32);
    canvas.set_content_height(layout.height as i32);
    canvas.set_hexpand(true);
    canvas.set_vexpand(true);

    let panel_draw = Rc::clone(&panel);
    canvas.set_draw_func(move |_, cr, width, height| {
        drawing::draw_traffic_light(cr, &panel_draw.borrow(), width, height);
    });
    vbox.append(&canvas);

    // el selector avisa cada cambio; la unica reaccion del ui es redibujar
    {
        let canvas = canvas.clone();
        selector.borrow_mut().on_change(move |_| canvas.queue_draw());
    }

    // --- Radios de control ---
    vbox.append(&build_selector_row(&selector));

    window.set_child(Some(&vbox));
    window.show();

    tl_log!("🚦 Semaforo listo, esperando seleccion");
}

// fila horizontal de radios, una opcion por luz, ninguna activa al inicio
fn build_selector_row(selector: &Rc<RefCell<LightSelector>>) -> GtkBox {
    let controls = GtkBox::new(Orientation::Horizontal, 20);
    controls.set_margin_start(10);
    controls.set_margin_end(10);
    controls.set_margin_top(10);
    controls.set_margin_bottom(10);
    controls.set_halign(gtk::Align::Center);

    let mut group_leader: Option<CheckButton> = None;
    for state in LightState::ALL {
        let radio = CheckButton::with_label(state.label());
        match &group_leader {
            Some(leader) => radio.set_group(Some(leader)),
            None => group_leader = Some(radio.clone()),
        }

        let selector = Rc::clone(selector);
        radio.connect_toggled(move |btn| {
            // toggled tambien se dispara al apagarse el radio anterior;
            // solo reaccionamos cuando este boton queda activo
            if btn.is_active() {
                let label = btn.label().expect("radio sin etiqueta");
                selector.borrow_mut().select_label(&label);
            }
        });

        controls.append(&radio);
    }

    controls
}

// aviso modal de error de orden de construccion; al cerrarse termina el
// programa con salida normal
fn show_order_error(app: &Application, err: &SelectorError) {
    let dialog = gtk::MessageDialog::builder()
        .modal(true)
        .message_type(gtk::MessageType::Error)
        .buttons(gtk::ButtonsType::Ok)
        .text("El semaforo no se armo en el orden correcto.")
        .secondary_text(format!("{}\n\nAl aceptar, el programa se cierra.", err))
        .build();

    let app = app.clone();
    dialog.connect_response(move |dialog, _| {
        dialog.close();
        app.quit();
    });

    dialog.show();
}
