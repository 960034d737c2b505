use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for a traceability run.
///
/// This struct holds the default directories to scan and the file
/// extensions that are considered documentation or source code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Directory scanned for `@shirushi` references.
    src_dir: PathBuf,

    /// Directory scanned for `Doc-ID` declarations.
    docs_dir: PathBuf,

    /// Extensions (without the leading dot) of source files.
    code_extensions: Vec<String>,

    /// Extensions (without the leading dot) of documentation files.
    doc_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            docs_dir: default_docs_dir(),
            code_extensions: default_code_extensions(),
            doc_extensions: default_doc_extensions(),
        }
    }
}

/// Errors that can occur while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid configuration TOML.
    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns the source directory.
    #[must_use]
    pub fn src_dir(&self) -> &Path {
        &self.src_dir
    }

    /// Returns the documentation directory.
    #[must_use]
    pub fn docs_dir(&self) -> &Path {
        &self.docs_dir
    }

    /// Returns the source file extensions.
    #[must_use]
    pub fn code_extensions(&self) -> &[String] {
        &self.code_extensions
    }

    /// Returns the documentation file extensions.
    #[must_use]
    pub fn doc_extensions(&self) -> &[String] {
        &self.doc_extensions
    }

    /// Overrides the source directory.
    pub fn set_src_dir(&mut self, dir: PathBuf) {
        self.src_dir = dir;
    }

    /// Overrides the documentation directory.
    pub fn set_docs_dir(&mut self, dir: PathBuf) {
        self.docs_dir = dir;
    }
}

fn default_src_dir() -> PathBuf {
    PathBuf::from("src")
}

fn default_docs_dir() -> PathBuf {
    PathBuf::from("docs")
}

fn default_code_extensions() -> Vec<String> {
    ["ts", "tsx", "js", "jsx", "py", "go", "java", "rs", "rb"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_doc_extensions() -> Vec<String> {
    vec!["md".to_string(), "mdx".to_string()]
}

/// Accept both `rs` and `.rs` in configuration files.
fn normalize_extensions(extensions: Vec<String>) -> Vec<String> {
    extensions
        .into_iter()
        .map(|ext| ext.trim_start_matches('.').to_string())
        .filter(|ext| !ext.is_empty())
        .collect()
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_src_dir")]
        src_dir: PathBuf,

        #[serde(default = "default_docs_dir")]
        docs_dir: PathBuf,

        #[serde(default = "default_code_extensions")]
        code_extensions: Vec<String>,

        #[serde(default = "default_doc_extensions")]
        doc_extensions: Vec<String>,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                src_dir,
                docs_dir,
                code_extensions,
                doc_extensions,
            } => Self {
                src_dir,
                docs_dir,
                code_extensions: normalize_extensions(code_extensions),
                doc_extensions: normalize_extensions(doc_extensions),
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            src_dir: config.src_dir,
            docs_dir: config.docs_dir,
            code_extensions: config.code_extensions,
            doc_extensions: config.doc_extensions,
        }
    }
}
