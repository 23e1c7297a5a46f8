//! Ciclo de vida del volumen de datos de un host: creación, montaje y
//! resize contra el proveedor de storage.
//!
//! Todos los pasos son no-op exitosos si el host todavía no tiene instancia
//! de base de datos. Un error del proveedor corta el paso antes de tocar el
//! registro local.

use std::sync::Arc;

use dbflow_core::{Step, StepError, WorkflowContext};
use dbflow_domain::{Credential, CredentialKind, Host, Volume};
use dbflow_providers::{CredentialResolver, HostInventory, RemoteExecutor, StorageProvider, StorageTarget,
                       VolumeRepository};
use log::{debug, info};
use once_cell::sync::OnceCell;

use crate::scripts::wipe_data_script;

/// Colaboradores que comparten los pasos de volumen.
#[derive(Clone)]
pub struct VolumeServices {
    pub storage: Arc<dyn StorageProvider>,
    pub volumes: Arc<dyn VolumeRepository>,
    pub inventory: Arc<dyn HostInventory>,
    pub executor: Arc<dyn RemoteExecutor>,
    pub credentials: Arc<dyn CredentialResolver>,
}

// Base común: host, colaboradores y credencial de storage resuelta una sola
// vez por instancia del paso. El id lleva el host para distinguir los pasos
// de una misma ejecución con varios destinos.
struct VolumeStepBase {
    id: String,
    host: Host,
    services: VolumeServices,
    credential: OnceCell<Credential>,
}

impl VolumeStepBase {
    fn new(step: &str, host: Host, services: VolumeServices) -> Self {
        Self { id: format!("{step}:{}", host.id()),
               host,
               services,
               credential: OnceCell::new() }
    }

    fn target(&self, ctx: &WorkflowContext) -> Result<StorageTarget, StepError> {
        let credential = self.credential.get_or_try_init(|| {
                                            self.services
                                                .credentials
                                                .resolve(&ctx.environment, CredentialKind::VolumeProvider)
                                        })?;
        Ok(StorageTarget::new(credential, &ctx.environment))
    }

    /// `false` si el host todavía no tiene workload: el paso no aplica.
    fn applies(&self, step: &str) -> Result<bool, StepError> {
        if self.services.inventory.has_database_instance(&self.host)? {
            return Ok(true);
        }
        debug!("{step}: host {} has no database instance, skipping", self.host.id());
        Ok(false)
    }

    fn active_volume(&self) -> Result<Option<Volume>, StepError> {
        Ok(self.services.volumes.active_for_host(self.host.id())?)
    }

    fn require_volume(&self) -> Result<Volume, StepError> {
        self.active_volume()?
            .ok_or_else(|| StepError::MissingVolume { host: self.host.id().to_string() })
    }

    fn run_script(&self, script: &str) -> Result<(), StepError> {
        let attr = self.services.inventory.host_attr(&self.host)?;
        let output = self.services.executor.exec(self.host.address(), &attr.vm_user, &attr.vm_password, script)?;
        if !output.succeeded() {
            return Err(StepError::RemoteCommand { host: self.host.address().to_string(),
                                                  exit_code: output.exit_code,
                                                  output: output.output });
        }
        Ok(())
    }
}

/// Crea el volumen de datos del host y lo registra como activo. `undo`
/// vacía los datos, borra el volumen en el proveedor y después el registro.
pub struct NewVolume {
    base: VolumeStepBase,
}

impl NewVolume {
    pub fn new(host: Host, services: VolumeServices) -> Self {
        Self { base: VolumeStepBase::new("new_volume", host, services) }
    }
}

impl Step for NewVolume {
    fn id(&self) -> &str { &self.base.id }

    fn name(&self) -> &str { "Creating Volume..." }

    fn run(&self, ctx: &mut WorkflowContext) -> Result<(), StepError> {
        if !self.base.applies(self.id())? {
            return Ok(());
        }
        // Un host tiene a lo sumo un volumen activo: re-ejecutar no crea otro.
        if let Some(volume) = self.base.active_volume()? {
            debug!("host {} already has active volume {}, skipping", self.base.host.id(), volume.identifier());
            return Ok(());
        }
        let target = self.base.target(ctx)?;
        let size_kb = ctx.infra.disk_offering.size_kb;
        let identifier = self.base
                             .services
                             .storage
                             .create_volume(&target, &ctx.infra.name, size_kb, self.base.host.address())?;
        let volume = Volume::new(self.base.host.id(), &identifier, size_kb)?;
        self.base.services.volumes.save(&volume)?;
        info!("volume {identifier} ({size_kb} KB) created for host {}", self.base.host.id());
        Ok(())
    }

    fn undo(&self, ctx: &mut WorkflowContext) -> Result<(), StepError> {
        if !self.base.applies(self.id())? {
            return Ok(());
        }
        let Some(volume) = self.base.active_volume()? else {
            debug!("host {} has no active volume, nothing to remove", self.base.host.id());
            return Ok(());
        };
        // Con datos en el export el proveedor no garantiza el borrado.
        self.base.run_script(&wipe_data_script())?;
        let target = self.base.target(ctx)?;
        self.base.services.storage.delete(&target, volume.identifier())?;
        self.base.services.volumes.delete(volume.id)?;
        info!("volume {} removed from host {}", volume.identifier(), self.base.host.id());
        Ok(())
    }
}

/// Monta el volumen activo en el host con el comando que entrega el
/// proveedor. Sin inversa: la desasignación la hace `NewVolume::undo`.
pub struct MountDataVolume {
    base: VolumeStepBase,
}

impl MountDataVolume {
    pub fn new(host: Host, services: VolumeServices) -> Self {
        Self { base: VolumeStepBase::new("mount_data_volume", host, services) }
    }
}

impl Step for MountDataVolume {
    fn id(&self) -> &str { &self.base.id }

    fn name(&self) -> &str { "Mounting data volume..." }

    fn run(&self, ctx: &mut WorkflowContext) -> Result<(), StepError> {
        if !self.base.applies(self.id())? {
            return Ok(());
        }
        let volume = self.base.require_volume()?;
        let target = self.base.target(ctx)?;
        let command = self.base.services.storage.mount_command(&target, volume.identifier())?;
        self.base.run_script(&command)?;
        info!("volume {} mounted on host {}", volume.identifier(), self.base.host.id());
        Ok(())
    }

    fn undo(&self, _ctx: &mut WorkflowContext) -> Result<(), StepError> { Ok(()) }
}

/// Lleva el volumen activo al tamaño del disk offering de la infra.
pub struct ResizeVolume {
    base: VolumeStepBase,
}

impl ResizeVolume {
    pub fn new(host: Host, services: VolumeServices) -> Self {
        Self { base: VolumeStepBase::new("resize_volume", host, services) }
    }
}

impl Step for ResizeVolume {
    fn id(&self) -> &str { &self.base.id }

    fn name(&self) -> &str { "Resizing data volume..." }

    fn run(&self, ctx: &mut WorkflowContext) -> Result<(), StepError> {
        if !self.base.applies(self.id())? {
            return Ok(());
        }
        let mut volume = self.base.require_volume()?;
        let target = self.base.target(ctx)?;
        let new_size_kb = ctx.infra.disk_offering.size_kb;
        self.base.services.storage.resize(&target, volume.identifier(), new_size_kb)?;
        volume.total_size_kb = new_size_kb;
        self.base.services.volumes.save(&volume)?;
        info!("volume {} resized to {new_size_kb} KB", volume.identifier());
        Ok(())
    }

    // TODO: volver al tamaño anterior cuando el proveedor soporte achicar volúmenes.
    fn undo(&self, _ctx: &mut WorkflowContext) -> Result<(), StepError> { Ok(()) }
}
