/*!
Configuration options loaded from the YAML file `~/.wanderlust-config.yaml` if it exists.
*/

/// Configuration options.
mod config {
    use super::{ContactConfig, GeneralConfig, SearchConfig, StorageConfig};

    use std::fmt::{Display, Formatter, Result as FormatResult};
    use std::fs::File;
    use std::io::{Error as IOError, ErrorKind as IOErrorKind};
    use std::path::{Path, PathBuf};

    use serde::Deserialize;
    use serde_yaml::Error as YamlParseError;

    /// Configuration options.
    #[derive(Deserialize, Debug, Default, Clone, Eq, PartialEq)]
    pub struct Config {
        #[serde(default)]
        general: GeneralConfig,
        #[serde(default)]
        search: SearchConfig,
        #[serde(default)]
        contact: ContactConfig,
        #[serde(default)]
        storage: StorageConfig,
    }

    impl Config {
        /// Return the default path of the file that configuration is loaded from.
        pub fn default_path() -> ConfigDefaultPathResult {
            let mut path: PathBuf = match dirs::home_dir() {
                Some(path) => path,
                None => {
                    return Err(ConfigDefaultPathError::CannotDetermineHomeDirectory);
                }
            };
            path.push(".wanderlust-config.yaml");
            Ok(path)
        }

        /// Return the `Config` loaded from the default file if it exists or the default config if
        /// the file does not exist.
        pub fn load() -> ConfigLoadResult {
            match Self::default_path() {
                Ok(path) => Self::load_from(&path),
                Err(error) => Err(ConfigLoadError::ConfigDefaultPathError(error)),
            }
        }

        /// Return the `Config` loaded from the file at `path`, or the default config if there is
        /// no such file.
        pub fn load_from(path: &Path) -> ConfigLoadResult {
            let file: File = match File::open(path) {
                Ok(file) => file,
                Err(error) => match error.kind() {
                    IOErrorKind::NotFound => {
                        return Ok(Config::default());
                    }
                    IOErrorKind::PermissionDenied => {
                        return Err(ConfigLoadError::PermissionDeniedError(path.to_path_buf()));
                    }
                    _ => {
                        return Err(ConfigLoadError::OtherFileReadError {
                            path: path.to_path_buf(),
                            error,
                        });
                    }
                },
            };

            match serde_yaml::from_reader(file) {
                Ok(config) => Ok(config),
                Err(error) => Err(ConfigLoadError::ParseError {
                    path: path.to_path_buf(),
                    error,
                }),
            }
        }

        pub fn general(&self) -> &GeneralConfig {
            &self.general
        }

        pub fn search(&self) -> &SearchConfig {
            &self.search
        }

        pub fn search_mut(&mut self) -> &mut SearchConfig {
            &mut self.search
        }

        pub fn contact(&self) -> &ContactConfig {
            &self.contact
        }

        pub fn storage(&self) -> &StorageConfig {
            &self.storage
        }

        pub fn storage_mut(&mut self) -> &mut StorageConfig {
            &mut self.storage
        }
    }

    type ConfigDefaultPathResult = Result<PathBuf, ConfigDefaultPathError>;

    #[derive(Debug)]
    pub enum ConfigDefaultPathError {
        CannotDetermineHomeDirectory,
    }

    type ConfigLoadResult = Result<Config, ConfigLoadError>;

    #[derive(Debug)]
    #[allow(clippy::enum_variant_names)]
    pub enum ConfigLoadError {
        ConfigDefaultPathError(ConfigDefaultPathError),
        PermissionDeniedError(PathBuf),
        OtherFileReadError {
            path: PathBuf,
            error: IOError,
        },
        ParseError {
            path: PathBuf,
            error: YamlParseError,
        },
    }

    impl Display for ConfigLoadError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
            match self {
                Self::ConfigDefaultPathError(error) => match error {
                    ConfigDefaultPathError::CannotDetermineHomeDirectory => {
                        write!(f, "Failed to load the configuration because the home directory could not be determined.")
                    }
                },
                Self::PermissionDeniedError(path) => {
                    write!(
                        f,
                        "Failed to load the configuration file \"{}\" because permission was denied.",
                        path.display()
                    )
                }
                Self::OtherFileReadError { path, error } => {
                    write!(
                        f,
                        "Failed to load the configuration file \"{}\" because of an IO error: {}",
                        path.display(),
                        error
                    )
                }
                Self::ParseError { path, error } => {
                    write!(
                        f,
                        "Failed to parse the configuration file \"{}\": {}",
                        path.display(),
                        error
                    )
                }
            }
        }
    }

    impl std::error::Error for ConfigLoadError {}
}
pub use config::{Config, ConfigLoadError};

mod general {
    use serde::Deserialize;

    #[derive(Deserialize, Debug, Clone, Eq, PartialEq)]
    pub struct GeneralConfig {
        /// Whether the bell sound should be made when a form submission is blocked.
        #[serde(default = "default_bell")]
        bell: bool,

        /// Terminals narrower than this many columns get the collapsed navigation menu.
        #[serde(default = "default_mobile_breakpoint")]
        mobile_breakpoint: usize,
    }

    fn default_bell() -> bool {
        true
    }

    fn default_mobile_breakpoint() -> usize {
        80
    }

    impl Default for GeneralConfig {
        fn default() -> Self {
            Self {
                bell: default_bell(),
                mobile_breakpoint: default_mobile_breakpoint(),
            }
        }
    }

    impl GeneralConfig {
        pub fn bell(&self) -> bool {
            self.bell
        }

        pub fn mobile_breakpoint(&self) -> usize {
            self.mobile_breakpoint
        }
    }
}
pub use general::GeneralConfig;

mod search {
    use crate::catalog::{CatalogSource, DEFAULT_SOURCE};

    use std::time::Duration;

    use serde::Deserialize;

    #[derive(Deserialize, Debug, Clone, Eq, PartialEq)]
    pub struct SearchConfig {
        /// A path or an http(s) URL of the destinations document.
        #[serde(default = "default_source")]
        source: String,

        /// How long typing has to pause before suggestions are refreshed.
        #[serde(default = "default_debounce_ms")]
        debounce_ms: u64,

        /// The maximum number of suggestions shown.
        #[serde(default = "default_limit")]
        limit: usize,
    }

    fn default_source() -> String {
        DEFAULT_SOURCE.to_string()
    }

    fn default_debounce_ms() -> u64 {
        300
    }

    fn default_limit() -> usize {
        5
    }

    impl Default for SearchConfig {
        fn default() -> Self {
            Self {
                source: default_source(),
                debounce_ms: default_debounce_ms(),
                limit: default_limit(),
            }
        }
    }

    impl SearchConfig {
        pub fn source(&self) -> CatalogSource {
            match self.source.parse() {
                Ok(source) => source,
                Err(infallible) => match infallible {},
            }
        }

        pub fn set_source(&mut self, source: String) {
            self.source = source;
        }

        pub fn debounce(&self) -> Duration {
            Duration::from_millis(self.debounce_ms)
        }

        pub fn limit(&self) -> usize {
            self.limit
        }
    }
}
pub use search::SearchConfig;

mod contact {
    use std::time::Duration;

    use serde::Deserialize;

    #[derive(Deserialize, Debug, Clone, Eq, PartialEq)]
    pub struct ContactConfig {
        /// How long the success message is shown before the form is reset.
        #[serde(default = "default_reset_delay_ms")]
        reset_delay_ms: u64,
    }

    fn default_reset_delay_ms() -> u64 {
        2000
    }

    impl Default for ContactConfig {
        fn default() -> Self {
            Self {
                reset_delay_ms: default_reset_delay_ms(),
            }
        }
    }

    impl ContactConfig {
        pub fn reset_delay(&self) -> Duration {
            Duration::from_millis(self.reset_delay_ms)
        }
    }
}
pub use contact::ContactConfig;

mod storage {
    use clap::ValueEnum;
    use serde::Deserialize;

    /// Where the selected destination is handed to the destination page through.
    #[derive(Deserialize, ValueEnum, Debug, Clone, Copy, Default, Eq, PartialEq)]
    #[serde(rename_all = "lowercase")]
    pub enum StorageKind {
        /// Kept in memory for the current run only.
        #[default]
        Memory,
        /// Kept in a file so that a separate `destination` invocation can pick it up.
        File,
    }

    #[derive(Deserialize, Debug, Default, Clone, Eq, PartialEq)]
    pub struct StorageConfig {
        #[serde(default)]
        kind: StorageKind,
    }

    impl StorageConfig {
        pub fn kind(&self) -> StorageKind {
            self.kind
        }

        pub fn set_kind(&mut self, kind: StorageKind) {
            self.kind = kind;
        }
    }
}
pub use storage::{StorageConfig, StorageKind};
