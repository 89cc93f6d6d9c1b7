use std::fs;

use tempfile::tempdir;
use tubedeck_config::{
    ClientConfig, ConfigLoad, ConfigLoadError, ConfigSource, DeviceClassSetting,
};
use tubedeck_model::{DeviceClass, LanguageTableError};

const SAMPLE: &str = r#"
[device]
class = "auto"

[languages]
default = "de"

[[languages.entries]]
code = "en"
label = "English"

[[languages.entries]]
code = "de"
label = "Deutsch"

[style]
expanded_tokens = false

[store]
path = "/var/lib/tubedeck/settings.json"

[logging]
filter = "tubedeck_core=debug,info"
"#;

#[test]
fn loads_explicit_toml_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("client.toml");
    fs::write(&path, SAMPLE).expect("write config");

    let loaded = ConfigLoad::load(Some(&path)).expect("load config");

    assert_eq!(loaded.source, ConfigSource::File(path.clone()));
    assert_eq!(loaded.config.device.class, DeviceClassSetting::Auto);
    assert_eq!(loaded.config.device_class(true), DeviceClass::Tv);
    assert!(!loaded.config.style.expanded_tokens);
    assert_eq!(loaded.config.logging.filter, "tubedeck_core=debug,info");

    let table = loaded.config.language_table().expect("language table");
    assert_eq!(table.len(), 2);
    assert_eq!(table.default_language().code, "de");
    assert_eq!(table.resolve(Some("fr")).code, "de");
}

#[test]
fn loads_json_by_extension() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("client.json");
    fs::write(&path, r#"{ "device": { "class": "handheld" } }"#)
        .expect("write config");

    let loaded = ConfigLoad::load(Some(&path)).expect("load config");
    assert_eq!(loaded.config.device_class(true), DeviceClass::Handheld);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");

    let err = ConfigLoad::load(Some(&path)).expect_err("missing file");
    assert!(matches!(err, ConfigLoadError::Io { .. }));
}

#[test]
fn invalid_language_table_is_rejected_at_load() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("client.toml");
    fs::write(
        &path,
        "[languages]\ndefault = \"en\"\nentries = []\n",
    )
    .expect("write config");

    let err = ConfigLoad::load(Some(&path)).expect_err("empty table");
    assert!(matches!(err, ConfigLoadError::Languages(_)));
}

#[test]
fn padded_language_code_is_rejected() {
    let contents = r#"
[languages]
default = "en"

[[languages.entries]]
code = "en"
label = "English"

[[languages.entries]]
code = "de "
label = "Deutsch"
"#;
    let err = ClientConfig::from_str_validated(contents, "inline")
        .expect_err("padded code");
    assert!(matches!(
        err,
        ConfigLoadError::Languages(LanguageTableError::PaddedCode(ref code)) if code == "de "
    ));
}
