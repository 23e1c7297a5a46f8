//! dbflow: orquestación de cambios sobre hosts de base de datos.
//!
//! Este crate reúne los crates del workspace:
//! - `config` carga el ambiente y el ritmo de las operaciones.
//! - `errors` define el error de nivel aplicación.
//! - `flows` arma secuencias de pasos listas para ejecutar.

pub mod config;
pub mod errors;
pub mod flows;

pub use config::AppConfig;
pub use errors::CoreError;
