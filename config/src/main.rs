use log::error;

fn main() -> std::io::Result<()> {
    // Initialize logging with info level for better visibility
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Resolve configuration from environment variables, once, before
    // anything else starts
    let config = match config::RuntimeConfig::resolve() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
    };

    if let Err(e) = config::install(config.clone()) {
        error!("Failed to install configuration: {}", e);
        return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
    }

    // Hand the resolved record to the framework's configuration loader
    let rendered = serde_json::to_string_pretty(&config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
    println!("{}", rendered);

    Ok(())
}
