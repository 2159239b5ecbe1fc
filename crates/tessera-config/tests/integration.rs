use tessera_config::{
    Config, ConfigError, DEFAULT_CONFIG_PATH, DatabaseConfig, load_config, validate_config,
};

#[test]
fn loaded_defaults_pass_validation() {
    let config = load_config(DEFAULT_CONFIG_PATH).expect("loader never fails");
    validate_config(&config).expect("defaults should validate");
    assert_eq!(config.bind_address(), "localhost:8080");
}

#[test]
fn loader_output_is_independent_of_disk_contents() {
    let dir = std::env::temp_dir().join(format!("tessera-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join("config.json");
    std::fs::write(&path, r#"{"host":"example.org","port":1,"debug":true,"timeout":1}"#)
        .expect("write config file");

    let loaded = load_config(&path).expect("loader never fails");
    assert_eq!(loaded, Config::default());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn mutated_config_is_rejected() {
    let mut config = load_config("config.json").expect("loader never fails");
    config.port = 0;
    assert_eq!(
        validate_config(&config),
        Err(ConfigError::NonPositivePort { port: 0 })
    );

    config.port = 8080;
    config.host.clear();
    assert_eq!(validate_config(&config), Err(ConfigError::EmptyHost));
}

#[test]
fn database_config_round_trips_through_json() {
    let config = DatabaseConfig::default();
    let encoded = serde_json::to_string(&config).expect("serialise database config");
    let decoded: DatabaseConfig = serde_json::from_str(&encoded).expect("decode database config");
    assert_eq!(decoded, config);
    assert_eq!(decoded.driver, "postgres");
    assert_eq!(decoded.port, 5432);
}
