// logger minimo del crate; por defecto imprime a consola
// se puede redirigir una sola vez con set_logger(fn(&str)) al arrancar

use once_cell::sync::OnceCell;

type LogFn = fn(&str);

static LOGGER: OnceCell<LogFn> = OnceCell::new();

/// Redirige la salida del logger; solo el primer set tiene efecto
pub fn set_logger(f: LogFn) {
    let _ = LOGGER.set(f);
}

pub fn log_str(s: &str) {
    match LOGGER.get() {
        Some(f) => f(s),
        None => println!("{}", s),
    }
}

#[macro_export]
macro_rules! tl_log {
    ($($arg:tt)*) => {{
        $crate::log::log_str(&format!($($arg)*));
    }};
}
