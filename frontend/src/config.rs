use shared::ClientConfig;

const CLIENT_CONFIG: &str = include_str!("../../config/client.yaml");

/// Embedded `config/client.yaml`, with `API_ENDPOINT` from the build environment on top.
pub fn load_config() -> ClientConfig {
    let config = ClientConfig::from_yaml(CLIENT_CONFIG).unwrap_or_else(|e| {
        log::error!("Falling back to default client config: {}", e);
        ClientConfig::default()
    });

    let config = config.with_endpoint_override(option_env!("API_ENDPOINT"));
    log::info!(
        "Posting uploads to {} ({} models)",
        config.endpoint,
        config.models.len()
    );
    config
}
