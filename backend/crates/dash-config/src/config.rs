use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIRECTORY, DatabaseConfig, LoggingConfig, STORAGE_ROOT_ENV, ServerConfig,
    StorageConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for DASH_CONFIG_DIR env var, else use ./.dash/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply DASH_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: DASH_CONFIG_DIR env var > ./.dash/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let config_dir = Self::config_dir()?;

        self.server.validate()?;
        self.database.validate()?;
        self.storage.validate()?;
        self.auth.validate(&config_dir)?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Get the image storage root. Absolute roots are used as-is.
    pub fn storage_root(&self) -> ConfigErrorResult<PathBuf> {
        let root = Path::new(&self.storage.root);
        if root.is_absolute() {
            return Ok(root.to_path_buf());
        }
        Ok(Self::config_dir()?.join(root))
    }

    /// Get log file path, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(filename) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(filename),
            )),
            None => Ok(None),
        }
    }

    /// Read the RS256 public key, if configured.
    pub fn jwt_public_key(&self) -> ConfigErrorResult<Option<String>> {
        let Some(key_path) = &self.auth.jwt_public_key_path else {
            return Ok(None);
        };

        let full_path = Self::config_dir()?.join(key_path);
        std::fs::read_to_string(&full_path)
            .map(Some)
            .map_err(|e| ConfigError::Io {
                path: full_path,
                source: e,
            })
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  storage: root={}, image_access={}, delete_replaced={}, max_upload={}",
            self.storage.root,
            self.storage.image_access,
            self.storage.delete_replaced_images,
            match self.storage.max_upload_bytes {
                0 => "unlimited".to_string(),
                n => format!("{} bytes", n),
            }
        );

        let auth_type = if self.auth.jwt_secret.is_some() {
            "HS256"
        } else if self.auth.jwt_public_key_path.is_some() {
            "RS256"
        } else {
            "none"
        };

        info!(
            "  auth: {} ({})",
            if self.auth.enabled {
                "enabled"
            } else {
                "disabled"
            },
            auth_type
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("DASH_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("DASH_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("DASH_DATABASE_PATH", &mut self.database.path);

        // Storage
        Self::apply_env_string(STORAGE_ROOT_ENV, &mut self.storage.root);
        Self::apply_env_parse("DASH_STORAGE_IMAGE_ACCESS", &mut self.storage.image_access);
        Self::apply_env_bool(
            "DASH_STORAGE_DELETE_REPLACED_IMAGES",
            &mut self.storage.delete_replaced_images,
        );
        Self::apply_env_parse(
            "DASH_STORAGE_MAX_UPLOAD_BYTES",
            &mut self.storage.max_upload_bytes,
        );

        // Auth
        Self::apply_env_bool("DASH_AUTH_ENABLED", &mut self.auth.enabled);
        Self::apply_env_option_string("DASH_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_option_string(
            "DASH_AUTH_JWT_PUBLIC_KEY_PATH",
            &mut self.auth.jwt_public_key_path,
        );
        Self::apply_env_option_string(
            "DASH_AUTH_DEFAULT_USER_ID",
            &mut self.auth.default_user_id,
        );

        // Logging
        Self::apply_env_parse("DASH_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("DASH_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("DASH_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
