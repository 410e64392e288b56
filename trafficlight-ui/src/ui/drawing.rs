// dibujo del semaforo con cairo

use gtk::cairo::Context;
use trafficlight::{LightState, Rgb, TrafficLight};

// colores de la escena; los rellenos de los focos viven en el modelo
pub const COLOR_HOUSING: Rgb = (0.5, 0.5, 0.5);
pub const COLOR_STROKE: Rgb = (0.0, 0.0, 0.0);

fn set_color(cr: &Context, (r, g, b): Rgb) {
    cr.set_source_rgb(r, g, b);
}

/// Dibuja la caja y los tres focos centrados en el area disponible
pub fn draw_traffic_light(cr: &Context, light: &TrafficLight, width: i32, height: i32) {
    let layout = light.layout();
    let box_w = layout.width();
    let box_h = layout.height;

    // centrar la caja en el area de dibujo
    let x0 = (width as f64 - box_w) / 2.0;
    let y0 = (height as f64 - box_h) / 2.0;

    // caja gris con borde negro
    set_color(cr, COLOR_HOUSING);
    cr.rectangle(x0, y0, box_w, box_h);
    cr.fill().unwrap();
    set_color(cr, COLOR_STROKE);
    cr.rectangle(x0, y0, box_w, box_h);
    cr.stroke().unwrap();

    // pila vertical de focos, centrada dentro de la caja
    let radius = layout.lamp_radius();
    let spacing = layout.lamp_spacing();
    let padding = layout.lamp_padding();
    let stack_h = 6.0 * radius + 2.0 * spacing + 2.0 * padding;

    let cx = x0 + box_w / 2.0;
    let mut cy = y0 + (box_h - stack_h) / 2.0 + padding + radius;

    for state in LightState::ALL {
        set_color(cr, light.fill(state));
        cr.arc(cx, cy, radius, 0.0, std::f64::consts::PI * 2.0);
        cr.fill().unwrap();

        set_color(cr, COLOR_STROKE);
        cr.arc(cx, cy, radius, 0.0, std::f64::consts::PI * 2.0);
        cr.stroke().unwrap();

        cy += 2.0 * radius + spacing;
    }
}
