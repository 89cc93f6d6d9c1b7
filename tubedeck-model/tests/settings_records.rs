use serde_json::json;
use tubedeck_model::{AppSettings, SettingsPatch};

#[test]
fn partially_populated_record_reads_defaults() {
    let settings: AppSettings = serde_json::from_value(json!({
        "ownOverlayEnabled": true,
    }))
    .expect("partial record");

    assert!(settings.own_overlay_enabled);
    assert!(!settings.vlc_enabled);
    assert!(!settings.hls_enabled);
    assert!(!settings.local_hls_enabled);
    assert!(!settings.tracking_enabled);
    assert!(settings.language_selected.is_none());
}

#[test]
fn patch_from_stored_json_applies() {
    let patch: SettingsPatch = serde_json::from_value(json!({
        "hlsEnabled": false,
        "localHlsEnabled": true,
    }))
    .expect("patch json");

    let settings = AppSettings {
        hls_enabled: true,
        ..Default::default()
    }
    .patched(&patch);

    assert!(!settings.hls_enabled);
    assert!(settings.local_hls_enabled);
}

#[test]
fn record_serializes_with_camel_case_names() {
    let settings = AppSettings {
        vlc_enabled: true,
        language_selected: Some("fr".into()),
        ..Default::default()
    };
    let value = serde_json::to_value(&settings).expect("serialize");

    assert_eq!(value["vlcEnabled"], json!(true));
    assert_eq!(value["languageSelected"], json!("fr"));
    assert_eq!(value["trackingEnabled"], json!(false));
}
