//! Fusión de variables: las explícitas del llamador pisan a las del
//! contexto inicial cuando la clave coincide.

use super::TemplateVars;

pub fn merge_vars(initial: &TemplateVars, explicit: &TemplateVars) -> TemplateVars {
    let mut out = initial.clone();
    for (k, v) in explicit.iter() {
        out.insert(k.clone(), v.clone());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn explicit_vars_win_on_collision() {
        let mut initial = TemplateVars::new();
        initial.insert("DATABASENAME".into(), json!("orders"));
        initial.insert("PORT".into(), json!(3306));
        let mut explicit = TemplateVars::new();
        explicit.insert("PORT".into(), json!(3307));
        explicit.insert("EXTRA".into(), json!(true));

        let out = merge_vars(&initial, &explicit);

        assert_eq!(out["DATABASENAME"], json!("orders"));
        assert_eq!(out["PORT"], json!(3307));
        assert_eq!(out["EXTRA"], json!(true));
        let keys: Vec<&str> = out.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["DATABASENAME", "PORT", "EXTRA"]);
    }
}
