/*!
String key-value stores that outlive a single page.
*/
use std::collections::HashMap;

/// A key-value store of strings.
pub trait Storage {
    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError>;

    /// Remove the key, returning the value it had.
    fn remove(&mut self, key: &str) -> Result<Option<String>, StorageError>;
}

/// A store that lives as long as the running application.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.remove(key))
    }
}

mod file_storage {
    use super::{Storage, StorageError};
    use crate::paths::{ensure_dir_exists, WANDERLUST_FILES_PERMS};

    use std::collections::BTreeMap;
    use std::fs::{File, OpenOptions};
    use std::io::ErrorKind as IOErrorKind;
    use std::os::unix::fs::OpenOptionsExt;
    use std::path::{Path, PathBuf};

    use fslock::LockFile;

    const SESSION_FILE_NAME: &str = "session.yaml";
    const LOCK_FILE_NAME: &str = "session.lock";

    type Values = BTreeMap<String, String>;

    /// A store kept in a YAML file so that separate invocations can share it.
    ///
    /// Every operation holds the lock file for the duration of the read (and write).
    pub struct FileStorage {
        path: PathBuf,
        lock_path: PathBuf,
    }

    impl FileStorage {
        /// Open (creating if needed) the store in the directory.
        pub fn open(dir: &Path) -> Result<Self, StorageError> {
            if let Err(error) = ensure_dir_exists(dir) {
                return Err(StorageError::Io {
                    path: dir.to_path_buf(),
                    error,
                });
            }

            Ok(Self {
                path: dir.join(SESSION_FILE_NAME),
                lock_path: dir.join(LOCK_FILE_NAME),
            })
        }

        fn lock(&self) -> Result<LockFile, StorageError> {
            let io_error = |error| StorageError::Io {
                path: self.lock_path.clone(),
                error,
            };
            let mut lock_file = LockFile::open(&self.lock_path).map_err(io_error)?;
            lock_file.lock_with_pid().map_err(io_error)?;
            Ok(lock_file)
        }

        fn read(&self) -> Result<Values, StorageError> {
            let file: File = match File::open(&self.path) {
                Ok(file) => file,
                Err(error) => match error.kind() {
                    IOErrorKind::NotFound => {
                        return Ok(Values::new());
                    }
                    _ => {
                        return Err(StorageError::Io {
                            path: self.path.clone(),
                            error,
                        });
                    }
                },
            };

            match serde_yaml::from_reader(file) {
                Ok(values) => Ok(values),
                Err(error) => Err(StorageError::Parse {
                    path: self.path.clone(),
                    error,
                }),
            }
        }

        fn write(&self, values: &Values) -> Result<(), StorageError> {
            let file: File = match OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(WANDERLUST_FILES_PERMS)
                .open(&self.path)
            {
                Ok(file) => file,
                Err(error) => {
                    return Err(StorageError::Io {
                        path: self.path.clone(),
                        error,
                    });
                }
            };

            serde_yaml::to_writer(file, values).map_err(|error| StorageError::Parse {
                path: self.path.clone(),
                error,
            })
        }

        /// Run `change` on the stored values and write them back if anything changed.
        fn update<T>(
            &mut self,
            change: impl FnOnce(&mut Values) -> (T, bool),
        ) -> Result<T, StorageError> {
            let mut lock_file = self.lock()?;
            let mut values = self.read()?;
            let (result, changed) = change(&mut values);
            if changed {
                self.write(&values)?;
            }
            lock_file.unlock().map_err(|error| StorageError::Io {
                path: self.lock_path.clone(),
                error,
            })?;
            Ok(result)
        }
    }

    impl Storage for FileStorage {
        fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
            self.update(|values| {
                values.insert(key.to_string(), value);
                ((), true)
            })
        }

        fn remove(&mut self, key: &str) -> Result<Option<String>, StorageError> {
            self.update(|values| {
                let removed = values.remove(key);
                let changed = removed.is_some();
                (removed, changed)
            })
        }
    }
}
pub use file_storage::FileStorage;

mod storage_error {
    use std::error::Error;
    use std::fmt::{Display, Formatter, Result as FormatResult};
    use std::io::Error as IOError;
    use std::path::PathBuf;

    use serde_json::Error as JsonError;
    use serde_yaml::Error as YamlError;

    #[derive(Debug)]
    pub enum StorageError {
        Io { path: PathBuf, error: IOError },
        Parse { path: PathBuf, error: YamlError },
        /// A value could not be turned into its stored form.
        Serialize { key: String, error: JsonError },
    }

    impl Display for StorageError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
            match self {
                Self::Io { path, error } => write!(
                    f,
                    "Failed to access the session storage \"{}\": {}",
                    path.display(),
                    error
                ),
                Self::Parse { path, error } => write!(
                    f,
                    "Failed to read or write the session storage \"{}\": {}",
                    path.display(),
                    error
                ),
                Self::Serialize { key, error } => {
                    write!(f, "Failed to serialize the value for {:?}: {}", key, error)
                }
            }
        }
    }

    impl Error for StorageError {}
}
pub use storage_error::StorageError;

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("wanderlust-{}-{}", name, std::process::id()))
    }

    fn exercise(storage: &mut dyn Storage) {
        assert_eq!(storage.remove("selectedDestination").unwrap(), None);

        storage
            .set("selectedDestination", "{\"name\":\"Paris\"}".to_string())
            .unwrap();
        storage
            .set("selectedDestination", "{\"name\":\"Rome\"}".to_string())
            .unwrap();

        assert_eq!(
            storage.remove("selectedDestination").unwrap(),
            Some("{\"name\":\"Rome\"}".to_string())
        );
        assert_eq!(storage.remove("selectedDestination").unwrap(), None);
    }

    #[test]
    fn test_serialize_error_names_the_key() {
        let error = serde_json::from_str::<String>("not json").unwrap_err();

        let message = StorageError::Serialize {
            key: "selectedDestination".to_string(),
            error,
        }
        .to_string();

        assert!(message.starts_with("Failed to serialize the value for \"selectedDestination\": "));
    }

    #[test]
    fn test_memory_storage() {
        exercise(&mut MemoryStorage::new());
    }

    #[test]
    fn test_file_storage() {
        let dir = temp_dir("file-storage");

        exercise(&mut FileStorage::open(&dir).unwrap());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_file_storage_is_shared_between_instances() {
        let dir = temp_dir("file-storage-shared");
        let mut writer = FileStorage::open(&dir).unwrap();
        let mut reader = FileStorage::open(&dir).unwrap();

        writer.set("key", "value".to_string()).unwrap();

        assert_eq!(reader.remove("key").unwrap(), Some("value".to_string()));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
