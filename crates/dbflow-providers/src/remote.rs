use crate::ProviderError;

/// Resultado de ejecutar un script en un host remoto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteOutput {
    pub exit_code: i32,
    /// stdout + stderr capturados.
    pub output: String,
}

impl RemoteOutput {
    pub fn new(exit_code: i32, output: impl Into<String>) -> Self {
        Self { exit_code, output: output.into() }
    }

    /// El código de salida distinto de cero es la única señal de fallo.
    pub fn succeeded(&self) -> bool { self.exit_code == 0 }
}

/// Transporte de ejecución remota (SSH o equivalente).
pub trait RemoteExecutor: Send + Sync {
    /// Ejecuta `command` en `address`. Un `Err` significa que ni siquiera se
    /// pudo establecer la sesión; un exit code no nulo llega como `Ok`.
    fn exec(&self, address: &str, user: &str, password: &str, command: &str) -> Result<RemoteOutput, ProviderError>;

    /// Un único intento de alcanzar el host. El reintento lo decide quien
    /// llama.
    fn probe(&self, address: &str, user: &str, password: &str) -> bool;
}
