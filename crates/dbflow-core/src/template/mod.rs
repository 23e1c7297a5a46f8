//! Variables de plantilla y renderizado de scripts remotos.

mod merge;
mod render;

pub use merge::merge_vars;
pub use render::render_script;

/// Variables de plantilla; conservan el orden de inserción.
pub type TemplateVars = indexmap::IndexMap<String, serde_json::Value>;
