/*!
The destination catalog: loading it from its source, flattening it, and filtering it.
*/
mod destination {
    use serde::{Deserialize, Serialize};

    /// A place that can be searched for and shown on the destination page.
    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
    pub struct Destination {
        pub name: String,
        pub description: String,
        #[serde(rename = "imageUrl")]
        pub image_url: String,
    }

    impl Destination {
        pub fn new(name: &str, description: &str, image_url: &str) -> Self {
            Self {
                name: name.to_string(),
                description: description.to_string(),
                image_url: image_url.to_string(),
            }
        }
    }
}
pub use destination::Destination;

mod document {
    use super::Destination;

    use serde::Deserialize;

    /// The catalog as it is stored in the data file, grouped by category.
    #[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
    pub struct CatalogDocument {
        pub countries: Vec<Country>,
        pub temples: Vec<Destination>,
        pub beaches: Vec<Destination>,
    }

    #[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
    pub struct Country {
        #[serde(default)]
        pub name: Option<String>,
        pub cities: Vec<Destination>,
    }
}
pub use document::{CatalogDocument, Country};

mod catalog {
    use super::{CatalogDocument, Destination};

    /// Every destination in a fixed order: the cities of each country, then temples, then
    /// beaches.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct Catalog {
        destinations: Vec<Destination>,
    }

    impl Catalog {
        pub fn new(destinations: Vec<Destination>) -> Self {
            Self { destinations }
        }

        pub fn destinations(&self) -> &[Destination] {
            &self.destinations
        }

        pub fn len(&self) -> usize {
            self.destinations.len()
        }

        pub fn is_empty(&self) -> bool {
            self.destinations.is_empty()
        }

        /// Return the first destination whose name matches ignoring case.
        pub fn find_by_name(&self, name: &str) -> Option<&Destination> {
            let name: String = name.to_lowercase();
            self.destinations
                .iter()
                .find(|destination| destination.name.to_lowercase() == name)
        }
    }

    impl From<CatalogDocument> for Catalog {
        fn from(document: CatalogDocument) -> Self {
            let CatalogDocument {
                countries,
                temples,
                beaches,
            } = document;

            let destinations: Vec<Destination> = countries
                .into_iter()
                .flat_map(|country| country.cities)
                .chain(temples)
                .chain(beaches)
                .collect();

            Self { destinations }
        }
    }
}
pub use catalog::Catalog;

mod source {
    use std::convert::Infallible;
    use std::fmt::{Display, Formatter, Result as FormatResult};
    use std::path::PathBuf;
    use std::str::FromStr;

    /// The name of the data file when no other source is given.
    pub const DEFAULT_SOURCE: &str = "wanderlust_api.json";

    /// Where the catalog document is read from.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum CatalogSource {
        Path(PathBuf),
        Url(String),
    }

    impl Default for CatalogSource {
        fn default() -> Self {
            Self::Path(PathBuf::from(DEFAULT_SOURCE))
        }
    }

    impl FromStr for CatalogSource {
        type Err = Infallible;

        fn from_str(string: &str) -> Result<Self, Self::Err> {
            if string.starts_with("http://") || string.starts_with("https://") {
                Ok(Self::Url(string.to_string()))
            } else {
                Ok(Self::Path(PathBuf::from(string)))
            }
        }
    }

    impl Display for CatalogSource {
        fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
            match self {
                Self::Path(path) => write!(formatter, "{}", path.display()),
                Self::Url(url) => write!(formatter, "{}", url),
            }
        }
    }
}
pub use source::{CatalogSource, DEFAULT_SOURCE};

mod load_error {
    use std::error::Error;
    use std::fmt::{Display, Formatter, Result as FormatResult};
    use std::io::Error as IOError;
    use std::path::PathBuf;

    use reqwest::StatusCode;
    use serde_json::Error as JsonParseError;

    /// The reasons a catalog could not be loaded.
    #[derive(Debug)]
    pub enum LoadError {
        Io { path: PathBuf, error: IOError },
        Transport { url: String, error: reqwest::Error },
        Status { url: String, status: StatusCode },
        Parse { source: String, error: JsonParseError },
    }

    impl Display for LoadError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
            match self {
                Self::Io { path, error } => write!(
                    f,
                    "Failed to read the destinations file \"{}\": {}",
                    path.display(),
                    error
                ),
                Self::Transport { url, error } => {
                    write!(f, "Failed to fetch the destinations from \"{}\": {}", url, error)
                }
                Self::Status { url, status } => write!(
                    f,
                    "Failed to fetch the destinations from \"{}\" because the server responded with {}.",
                    url, status
                ),
                Self::Parse { source, error } => {
                    write!(f, "Failed to parse the destinations from \"{}\": {}", source, error)
                }
            }
        }
    }

    impl Error for LoadError {}
}
pub use load_error::LoadError;

mod load {
    use super::{Catalog, CatalogDocument, CatalogSource, LoadError};

    use std::fs;

    /// Read the catalog document from the source and flatten it.
    ///
    /// The source is read exactly once; there are no retries.
    pub fn fetch_catalog(source: &CatalogSource) -> Result<Catalog, LoadError> {
        let body: String = match source {
            CatalogSource::Path(path) => match fs::read_to_string(path) {
                Ok(body) => body,
                Err(error) => {
                    return Err(LoadError::Io {
                        path: path.to_path_buf(),
                        error,
                    });
                }
            },
            CatalogSource::Url(url) => fetch_body(url)?,
        };

        match serde_json::from_str::<CatalogDocument>(&body) {
            Ok(document) => Ok(Catalog::from(document)),
            Err(error) => Err(LoadError::Parse {
                source: source.to_string(),
                error,
            }),
        }
    }

    fn fetch_body(url: &str) -> Result<String, LoadError> {
        let transport = |error: reqwest::Error| LoadError::Transport {
            url: url.to_string(),
            error,
        };

        let response = reqwest::blocking::get(url).map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().map_err(transport)
    }

    /// Load the catalog, logging and swallowing any failure.
    ///
    /// `None` means search is unavailable.
    pub fn load_catalog(source: &CatalogSource) -> Option<Catalog> {
        match fetch_catalog(source) {
            Ok(catalog) => {
                log::info!("Loaded {} destinations from {}.", catalog.len(), source);
                Some(catalog)
            }
            Err(error) => {
                log::error!("{}", error);
                None
            }
        }
    }
}
pub use load::{fetch_catalog, load_catalog};

mod filter {
    use super::{Catalog, Destination};

    /// Queries shorter than this (after trimming) never match anything.
    pub const MIN_QUERY_LEN: usize = 2;

    /// Return the destinations whose name or description contains the query, ignoring case, in
    /// catalog order.
    pub fn filter<'a>(query: &str, catalog: &'a Catalog) -> Vec<&'a Destination> {
        let query: String = query.trim().to_lowercase();
        if query.chars().count() < MIN_QUERY_LEN {
            return Vec::new();
        }

        catalog
            .destinations()
            .iter()
            .filter(|destination| {
                destination.name.to_lowercase().contains(&query)
                    || destination.description.to_lowercase().contains(&query)
            })
            .collect()
    }
}
pub use filter::{filter, MIN_QUERY_LEN};
