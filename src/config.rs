use std::env;
use std::path::PathBuf;
use anyhow::{bail, Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub patients_file: PathBuf,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (the environment in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let patients_file = lookup("PATIENTS_FILE")
            .unwrap_or_else(|| "patients.json".to_string());
        if patients_file.trim().is_empty() {
            bail!("PATIENTS_FILE must not be empty");
        }

        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Config {
            patients_file: PathBuf::from(patients_file),
            service_port,
            service_host,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Patients file: {}", self.patients_file.display());
        tracing::info!("  Service listening on: {}", self.bind_addr());
    }
}
