// errores del crate

use thiserror::Error;

/// El selector solo puede fallar al construirse: necesita un semaforo
/// ya creado como destino antes de armar cualquier interfaz.
#[derive(Debug, Error)]
pub enum SelectorError {
    #[error("el semaforo no existe todavia; hay que crearlo antes que el selector")]
    MissingLight,
}
