//! Deep merge of layered YAML configuration.
//!
//! `config.local.yml` is layered over `config.yml`:
//!
//! - Mappings are merged recursively
//! - Sequences are replaced entirely, so a local `majors:` list replaces the
//!   shared one instead of appending to it
//! - A null value in the overlay removes the key
//! - Scalars in the overlay win

use serde_yaml::Value;

/// Deep merge `overlay` into `base`, returning a new value.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }

        (_, overlay) => overlay.clone(),
    }
}

/// Merge configs in order; the last has the highest priority.
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .fold(Value::Mapping(Default::default()), |acc, config| {
            deep_merge(&acc, config)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn nested_keys_survive_partial_override() {
        let base = yaml("settings:\n  parallel: false\n  next_semester: SP25\n");
        let overlay = yaml("settings:\n  parallel: true\n");

        let result = deep_merge(&base, &overlay);
        assert_eq!(result["settings"]["parallel"], true);
        assert_eq!(result["settings"]["next_semester"], "SP25");
    }

    #[test]
    fn sequences_are_replaced() {
        let base = yaml("student:\n  completed: [CS1110, CS2110]\n");
        let overlay = yaml("student:\n  completed: [MATH1910]\n");

        let result = deep_merge(&base, &overlay);
        let completed = result["student"]["completed"].as_sequence().unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0], "MATH1910");
    }

    #[test]
    fn null_removes_key() {
        let base = yaml("catalog: catalog.json\nrequirements: requirements.yml\n");
        let overlay = yaml("catalog: ~\n");

        let result = deep_merge(&base, &overlay);
        assert!(result.get("catalog").is_none());
        assert_eq!(result["requirements"], "requirements.yml");
    }

    #[test]
    fn merge_configs_applies_in_order() {
        let configs = vec![
            yaml("settings:\n  default_output: verbose\n"),
            yaml("settings:\n  default_output: quiet\n"),
        ];
        assert_eq!(merge_configs(&configs)["settings"]["default_output"], "quiet");
    }

    #[test]
    fn merge_of_nothing_is_empty_mapping() {
        assert!(merge_configs(&[]).as_mapping().unwrap().is_empty());
    }
}
