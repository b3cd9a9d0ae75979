use serde::Deserialize;

/// Deployment flavor this process was launched as. Development pins the
/// local backend port; Production derives it from the PORT variable.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub enum Environment {
    Development,
    Production,
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "prod" | "production" => Ok(Environment::Production),
            _ => Err(format!("Unknown environment: {}", s)),
        }
    }
}

impl Environment {
    /// Read the deployment environment from RUST_ENV. Absent or unparseable
    /// values select Development.
    pub fn from_process_env() -> Self {
        std::env::var("RUST_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .parse()
            .unwrap_or(Environment::Development)
    }
}
