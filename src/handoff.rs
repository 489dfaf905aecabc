/*!
Passing the selected destination from the search to the destination page.
*/
use crate::catalog::{load_catalog, Catalog, CatalogSource, Destination};
use crate::storage::{Storage, StorageError};

/// The key the selected destination is stored under.
pub const HANDOFF_KEY: &str = "selectedDestination";

/// Hands a single destination from one page to another through a storage.
///
/// A stashed destination is read at most once: taking it removes it.
pub struct Handoff {
    storage: Box<dyn Storage>,
}

impl Handoff {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Store the destination for the next page to take, replacing anything already stashed.
    pub fn stash(&mut self, destination: &Destination) -> Result<(), StorageError> {
        let value: String =
            serde_json::to_string(destination).map_err(|error| StorageError::Serialize {
                key: HANDOFF_KEY.to_string(),
                error,
            })?;
        self.storage.set(HANDOFF_KEY, value)
    }

    /// Remove and return the stashed destination.
    ///
    /// A stashed value that is not a destination is discarded.
    pub fn take(&mut self) -> Result<Option<Destination>, StorageError> {
        let value: String = match self.storage.remove(HANDOFF_KEY)? {
            Some(value) => value,
            None => return Ok(None),
        };

        match serde_json::from_str(&value) {
            Ok(destination) => Ok(Some(destination)),
            Err(error) => {
                log::error!("Discarding a stashed destination that could not be parsed: {}", error);
                Ok(None)
            }
        }
    }
}

/// Work out which destination the destination page should show.
///
/// A stashed destination wins and is consumed without touching the source. Otherwise the catalog
/// is loaded and searched for `name` (ignoring case).
pub fn resolve_destination(
    handoff: &mut Handoff,
    name: Option<&str>,
    source: &CatalogSource,
) -> Option<Destination> {
    match handoff.take() {
        Ok(Some(destination)) => {
            log::debug!("Resolved {:?} from the handoff.", destination.name);
            return Some(destination);
        }
        Ok(None) => {}
        Err(error) => {
            log::error!("{}", error);
        }
    }

    let name: &str = name?;
    let catalog: Catalog = load_catalog(source)?;
    let destination: Option<Destination> = catalog.find_by_name(name).cloned();
    if destination.is_none() {
        log::info!("There is no destination named {:?}.", name);
    }
    destination
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::storage::MemoryStorage;

    use std::path::PathBuf;

    const DOCUMENT: &str = r#"{
        "countries": [{"cities": [{"name": "Kyoto", "description": "Old capital", "imageUrl": "kyoto.jpg"}]}],
        "temples": [{"name": "Borobudur", "description": "A Buddhist temple", "imageUrl": "borobudur.jpg"}],
        "beaches": []
    }"#;

    fn handoff() -> Handoff {
        Handoff::new(Box::new(MemoryStorage::new()))
    }

    fn missing_source() -> CatalogSource {
        CatalogSource::Path(PathBuf::from("/definitely/not/here/wanderlust_api.json"))
    }

    fn document_source(name: &str) -> (CatalogSource, PathBuf) {
        let path = std::env::temp_dir().join(format!(
            "wanderlust-handoff-{}-{}.json",
            name,
            std::process::id()
        ));
        std::fs::write(&path, DOCUMENT).unwrap();
        (CatalogSource::Path(path.clone()), path)
    }

    #[test]
    fn test_round_trip_is_identical() {
        let destination = Destination::new("Rome", "Ancient \"ruins\" & más", "https://img/rome.jpg");
        let mut handoff = handoff();

        handoff.stash(&destination).unwrap();

        assert_eq!(handoff.take().unwrap(), Some(destination));
    }

    #[test]
    fn test_take_is_read_once() {
        let mut handoff = handoff();
        handoff
            .stash(&Destination::new("Rome", "Ancient ruins", "rome.jpg"))
            .unwrap();

        handoff.take().unwrap();

        assert_eq!(handoff.take().unwrap(), None);
    }

    #[test]
    fn test_stash_is_serialized_with_the_image_url_key() {
        let mut storage = MemoryStorage::new();
        let value = serde_json::to_string(&Destination::new("Rome", "Ancient ruins", "rome.jpg")).unwrap();
        storage.set(HANDOFF_KEY, value).unwrap();
        let mut handoff = Handoff::new(Box::new(storage));

        let destination = handoff.take().unwrap().unwrap();

        assert_eq!(destination.image_url, "rome.jpg");
    }

    #[test]
    fn test_malformed_stash_is_discarded() {
        let mut storage = MemoryStorage::new();
        storage.set(HANDOFF_KEY, "not json".to_string()).unwrap();
        let mut handoff = Handoff::new(Box::new(storage));

        assert_eq!(handoff.take().unwrap(), None);
        assert_eq!(handoff.take().unwrap(), None);
    }

    #[test]
    fn test_resolve_prefers_the_handoff_without_loading() {
        let destination = Destination::new("Rome", "Ancient ruins", "rome.jpg");
        let mut handoff = handoff();
        handoff.stash(&destination).unwrap();

        let resolved = resolve_destination(&mut handoff, Some("Kyoto"), &missing_source());

        assert_eq!(resolved, Some(destination));
        assert_eq!(handoff.take().unwrap(), None);
    }

    #[test]
    fn test_resolve_without_handoff_or_name_is_absent() {
        let (source, path) = document_source("no-name");

        let resolved = resolve_destination(&mut handoff(), None, &source);
        std::fs::remove_file(path).unwrap();

        assert_eq!(resolved, None);
    }

    #[test]
    fn test_resolve_by_name_ignores_case() {
        let (source, path) = document_source("by-name");

        let resolved = resolve_destination(&mut handoff(), Some("BOROBUDUR"), &source);
        std::fs::remove_file(path).unwrap();

        assert_eq!(
            resolved,
            Some(Destination::new("Borobudur", "A Buddhist temple", "borobudur.jpg"))
        );
    }

    #[test]
    fn test_resolve_by_unknown_name_is_absent() {
        let (source, path) = document_source("unknown");

        let resolved = resolve_destination(&mut handoff(), Some("Atlantis"), &source);
        std::fs::remove_file(path).unwrap();

        assert_eq!(resolved, None);
    }

    #[test]
    fn test_resolve_when_the_catalog_cannot_load_is_absent() {
        let resolved = resolve_destination(&mut handoff(), Some("Kyoto"), &missing_source());

        assert_eq!(resolved, None);
    }
}
