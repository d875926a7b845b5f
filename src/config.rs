//! Resolved settings for one generate run

use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_FILENAME: &str = "coa.xlsx";
pub const DEFAULT_AUTHOR_AFFILIATIONS_FILENAME: &str = "authorAffiliations.csv";
pub const DEFAULT_TEMPLATE_FILENAME: &str = "coa_template.xlsx";

/// Inputs and output of a generate run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    pub out_filename: PathBuf,
    pub author_affiliations_filename: PathBuf,
    pub template_filename: PathBuf,
    /// Base directory for relative paths
    pub dirname: PathBuf,
    pub verbose: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            out_filename: PathBuf::from(DEFAULT_OUTPUT_FILENAME),
            author_affiliations_filename: PathBuf::from(DEFAULT_AUTHOR_AFFILIATIONS_FILENAME),
            template_filename: PathBuf::from(DEFAULT_TEMPLATE_FILENAME),
            dirname: PathBuf::from("."),
            verbose: false,
        }
    }
}

impl GenerateConfig {
    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.dirname.join(path)
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.out_filename)
    }

    pub fn authors_path(&self) -> PathBuf {
        self.resolve(&self.author_affiliations_filename)
    }

    pub fn template_path(&self) -> PathBuf {
        self.resolve(&self.template_filename)
    }

    /// Only the stock template name may be fetched when it is missing
    pub fn uses_default_template(&self) -> bool {
        self.template_filename == Path::new(DEFAULT_TEMPLATE_FILENAME)
    }
}
