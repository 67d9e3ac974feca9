//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the type registry
#[derive(Error, Debug)]
pub enum Error {
    /// No stored instance satisfies the query
    #[error("{query} is not in the registry")]
    NotFound {
        /// The queried type or name
        query: String,
    },

    /// More than one stored instance satisfies the query
    #[error("{query} is in the registry multiple times - {}", .matches.join(", "))]
    Duplicate {
        /// The queried type or name
        query: String,
        /// Stored types that matched, sorted by name
        matches: Vec<String>,
    },

    /// A strict registrar found one of its dependencies absent
    #[error("Registrar '{registrar}' requires {dependency}, which is not in the registry")]
    MissingDependency {
        /// Name of the registrar that failed
        registrar: String,
        /// The dependency that could not be resolved
        dependency: String,
    },

    /// A registrar from the catalog failed for another reason
    #[error("Registrar '{name}' failed: {message}")]
    Registrar {
        /// Name of the registrar that failed
        name: String,
        /// Description of the failure
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Resolution error creation methods
impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(query: S) -> Self {
        Self::NotFound {
            query: query.into(),
        }
    }

    /// Create a duplicate error; the matches are sorted for stable diagnostics
    pub fn duplicate<S: Into<String>>(query: S, mut matches: Vec<String>) -> Self {
        matches.sort();
        Self::Duplicate {
            query: query.into(),
            matches,
        }
    }
}

// Registrar error creation methods
impl Error {
    /// Create a missing dependency error
    pub fn missing_dependency<R: Into<String>, D: Into<String>>(
        registrar: R,
        dependency: D,
    ) -> Self {
        Self::MissingDependency {
            registrar: registrar.into(),
            dependency: dependency.into(),
        }
    }

    /// Create a registrar failure error
    pub fn registrar<N: Into<String>, M: Into<String>>(name: N, message: M) -> Self {
        Self::Registrar {
            name: name.into(),
            message: message.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Classification helpers
impl Error {
    /// Whether the error reports an absent instance
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether the error reports an ambiguous query
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// Whether the error came out of resolution rather than a registrar or config
    pub fn is_resolution(&self) -> bool {
        self.is_not_found() || self.is_duplicate()
    }
}
