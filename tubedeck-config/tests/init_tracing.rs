use tubedeck_config::{LoggingConfig, init_tracing};

// Own test binary: the global subscriber can be installed once per process
#[test]
fn second_install_is_rejected() {
    let config = LoggingConfig {
        filter: "tubedeck_core=debug,info".into(),
    };
    init_tracing(&config).expect("first install");
    tracing::info!("subscriber installed");
    assert!(init_tracing(&LoggingConfig::default()).is_err());
}
