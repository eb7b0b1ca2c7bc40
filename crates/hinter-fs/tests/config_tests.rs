use hinter_fs::{ConfigStore, Error, NormalizedPath};
use serde::{Deserialize, Serialize};
use tempfile::TempDir;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Sample {
    #[serde(rename = "publicKey")]
    public_key: String,
}

#[test]
fn save_then_load_json() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("peer/hinter.config.json"));
    let store = ConfigStore::new();
    let sample = Sample {
        public_key: "ab".repeat(32),
    };

    store.save(&path, &sample).unwrap();

    let raw = std::fs::read_to_string(path.to_native()).unwrap();
    assert!(raw.contains("\n  \"publicKey\""), "expected two-space indent: {raw}");
    assert_eq!(store.load::<Sample>(&path).unwrap(), sample);
}

#[test]
fn load_rejects_invalid_json() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("hinter.config.json"));
    std::fs::write(path.to_native(), "{ not json").unwrap();

    let err = ConfigStore::new().load::<Sample>(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigParse { .. }));
}

#[test]
fn load_rejects_unknown_extension() {
    let path = NormalizedPath::new("/tmp/config.ini");
    let err = ConfigStore::new().load::<Sample>(&path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { .. }));
}
