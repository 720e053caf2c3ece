//! Application configuration management.

use serde::Deserialize;

/// Plain variable set by the hosting platform naming the destination container.
pub const STORAGE_CONTAINER_VAR: &str = "STORAGE_CONTAINER";

/// Port an Azure Functions custom handler must listen on.
pub const FUNCTIONS_PORT_VAR: &str = "FUNCTIONS_CUSTOMHANDLER_PORT";

/// Hosting surface a binary runs on. Selects configuration defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeProfile {
    /// Long-running container service (ECS Fargate style).
    Container,
    /// Azure Functions custom handler.
    Function,
    /// AWS Lambda behind API Gateway.
    Lambda,
}

impl RuntimeProfile {
    /// Default listening port for this profile.
    #[must_use]
    pub const fn default_port(self) -> u16 {
        match self {
            Self::Container => 80,
            Self::Function | Self::Lambda => 8080,
        }
    }

    /// Default storage provider tag for this profile.
    #[must_use]
    pub const fn default_provider(self) -> &'static str {
        match self {
            Self::Function => "azure_blob",
            Self::Container | Self::Lambda => "s3",
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Storage configuration.
    pub storage: StorageConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

impl ServerConfig {
    /// Socket address string in `host:port` form.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Destination bucket (S3) or container (Azure Blob).
    pub container: String,
    /// Backend provider settings.
    pub provider: StorageProvider,
}

/// Storage provider configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorageProvider {
    /// AWS S3 or an S3-compatible endpoint.
    S3(S3Settings),
    /// Azure Blob Storage.
    AzureBlob(AzureBlobSettings),
}

impl StorageProvider {
    /// Provider name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::S3(_) => "s3",
            Self::AzureBlob(_) => "azure_blob",
        }
    }
}

/// S3 client settings. Anything left unset is resolved from the ambient
/// AWS environment (region, credentials, instance role).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct S3Settings {
    /// AWS region.
    pub region: Option<String>,
    /// Custom endpoint for S3-compatible services.
    pub endpoint: Option<String>,
    /// Access key ID.
    pub access_key_id: Option<String>,
    /// Secret access key.
    pub secret_access_key: Option<String>,
}

/// Azure Blob Storage client settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AzureBlobSettings {
    /// Storage account name.
    pub account: String,
    /// Blob endpoint, defaults to `https://{account}.blob.core.windows.net`.
    pub endpoint: Option<String>,
    /// Shared account key.
    pub access_key: Option<String>,
    /// SAS token, used when no account key is given.
    pub sas_token: Option<String>,
}

impl AzureBlobSettings {
    /// Blob service endpoint for this account.
    #[must_use]
    pub fn endpoint(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| format!("https://{}.blob.core.windows.net", self.account))
    }
}

impl AppConfig {
    /// Loads configuration from defaults, config files, and environment.
    ///
    /// Precedence, lowest first: profile defaults, `config/default`,
    /// `config/{RUN_MODE}`, `RELAY__*` variables, then the platform variables
    /// `STORAGE_CONTAINER` and (function profile) `FUNCTIONS_CUSTOMHANDLER_PORT`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is incomplete.
    pub fn load(profile: RuntimeProfile) -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        let port_override = match profile {
            RuntimeProfile::Function => std::env::var(FUNCTIONS_PORT_VAR).ok(),
            RuntimeProfile::Container | RuntimeProfile::Lambda => None,
        };

        let config = config::Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(profile.default_port()))?
            .set_default("storage.provider.type", profile.default_provider())?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("RELAY").separator("__"))
            .set_override_option("storage.container", std::env::var(STORAGE_CONTAINER_VAR).ok())?
            .set_override_option("server.port", port_override)?
            .build()?;

        let app: Self = config.try_deserialize()?;
        app.validate()?;
        Ok(app)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.storage.container.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "storage.container must not be empty".to_string(),
            ));
        }
        if let StorageProvider::AzureBlob(settings) = &self.storage.provider
            && settings.account.trim().is_empty()
        {
            return Err(config::ConfigError::Message(
                "storage.provider.account must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
