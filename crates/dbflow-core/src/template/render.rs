use minijinja::Environment;

use super::TemplateVars;
use crate::errors::StepError;

/// Renderiza un script con placeholders `{{ NOMBRE }}`.
///
/// Los nombres no definidos se renderizan vacíos; los booleanos como
/// `true`/`false`.
pub fn render_script(script: &str, vars: &TemplateVars) -> Result<String, StepError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    Ok(env.render_str(script, vars)?)
}
