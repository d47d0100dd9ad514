use crate::domain::constants::DATASETS;
use crate::domain::models::DatasetSpec;

#[derive(thiserror::Error, Debug)]
pub enum RegistryError {
    #[error("unknown dataset: {0}")]
    UnknownDataset(String),
}

pub fn find(key: &str) -> anyhow::Result<&'static DatasetSpec> {
    DATASETS
        .iter()
        .find(|d| d.key == key)
        .ok_or_else(|| RegistryError::UnknownDataset(key.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::find;
    use crate::domain::constants::DATASETS;

    #[test]
    fn known_keys_resolve() {
        for spec in DATASETS {
            assert_eq!(find(spec.key).expect("registered key").key, spec.key);
        }
    }

    #[test]
    fn unknown_key_is_an_error() {
        let err = find("street_signs").expect_err("unregistered key");
        assert!(err.to_string().contains("unknown dataset: street_signs"));
    }

    #[test]
    fn registry_order_is_stable() {
        let keys: Vec<&str> = DATASETS.iter().map(|d| d.key).collect();
        assert_eq!(
            keys,
            ["indian_vehicle", "military_vehicles", "military_assets"]
        );
    }
}
