//! Constantes del motor.

/// Variable inyectada en cada script con el rol del host (`true` si es el
/// primario de la ejecución).
pub const IS_MASTER_VAR: &str = "IS_MASTER";

/// Punto de montaje del volumen de datos en los hosts de base de datos.
pub const DATA_MOUNT_POINT: &str = "/data";

/// Espera fija tras confirmar que todos los hosts arrancados responden.
pub const DEFAULT_START_SETTLE_SECS: u64 = 60;
/// Intentos de alcanzar un host recién arrancado.
pub const DEFAULT_READY_ATTEMPTS: u32 = 5;
/// Pausa entre intentos de alcanzar un host.
pub const DEFAULT_READY_INTERVAL_SECS: u64 = 10;
