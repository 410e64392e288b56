// trafficlight-ui/src/main.rs
// Simulador de semaforo: panel de luces y radios para controlarlo.

use gtk::prelude::*;
use gtk::Application;

mod ui;

fn main() {
    let app = Application::builder()
        .application_id("com.trafficlight.ui")
        .build();

    app.connect_activate(ui::layout::build_ui);

    app.run();
}
