use serde::{Deserialize, Serialize};

/// Oferta de disco: tamaño objetivo de los volúmenes de datos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskOffering {
    pub name: String,
    pub size_kb: u64,
}

/// Infraestructura de base de datos sobre la que actúa una ejecución.
/// Su nombre agrupa los volúmenes en el proveedor de storage y acota los
/// cambios DNS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseInfra {
    pub name: String,
    pub disk_offering: DiskOffering,
}

impl DatabaseInfra {
    pub fn new(name: &str, disk_offering_name: &str, size_kb: u64) -> Self {
        Self { name: name.to_string(),
               disk_offering: DiskOffering { name: disk_offering_name.to_string(),
                                             size_kb } }
    }
}
