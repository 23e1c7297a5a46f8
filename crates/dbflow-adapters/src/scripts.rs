//! Fragmentos de shell usados por los pasos.
//!
//! Los scripts con placeholders se renderizan con `render_script`
//! (`{{ EXPORTPATH }}`, `{{ IS_MASTER }}`, ...).

use dbflow_core::constants::DATA_MOUNT_POINT;

/// Preámbulo con `die_if_error`: corta el script con el exit code del
/// último comando si éste falló.
pub fn bash_error_preamble() -> &'static str {
    r#"
      #!/bin/bash

      die_if_error()
      {
            local err=$?
            if [ "$err" != "0" ];
            then
                echo "$*"
                exit $err
            fi
      }"#
}

/// Agrega el export NFS a fstab y monta el disco de datos.
pub fn mount_disk_script() -> String {
    format!(r#"
        echo ""; echo $(date "+%Y-%m-%d %T") "- Mounting data disk"
        echo "{{{{EXPORTPATH}}}}    {DATA_MOUNT_POINT} nfs defaults,bg,intr,nolock 0 0" >> /etc/fstab
        die_if_error "Error setting fstab"
        mount {DATA_MOUNT_POINT}
        die_if_error "Error setting fstab"
        "#)
}

pub fn start_td_agent_script() -> &'static str {
    r#"
        echo ""; echo $(date "+%Y-%m-%d %T") "- Starting td_agent"
        /etc/init.d/td-agent start
        "#
}

/// Vacía el punto de montaje de datos antes de borrar el volumen.
pub fn wipe_data_script() -> String { format!("rm -rf {DATA_MOUNT_POINT}/*") }

#[cfg(test)]
mod tests {
    use super::*;
    use dbflow_core::{render_script, TemplateVars};
    use serde_json::json;

    #[test]
    fn mount_script_renders_export_path() {
        let mut vars = TemplateVars::new();
        vars.insert("EXPORTPATH".into(), json!("nfs01:/exports/vol-1"));
        let script = format!("{}{}", bash_error_preamble(), mount_disk_script());
        let rendered = render_script(&script, &vars).unwrap();
        assert!(rendered.contains("nfs01:/exports/vol-1    /data nfs"));
        assert!(rendered.contains("die_if_error()"));
    }

    #[test]
    fn wipe_targets_data_directory() {
        assert_eq!(wipe_data_script(), "rm -rf /data/*");
    }
}
