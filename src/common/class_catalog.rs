use crate::data::PostprocessError;
use crate::utils;

/// Ordered list of class names, index-addressed by class id.
///
/// Loaded once per run and read-only afterwards. A catalog can never be
/// empty; constructors reject zero classes so downstream stages only have to
/// deal with out-of-range ids.
#[derive(Debug, Clone)]
pub struct ClassCatalog {
    names: Vec<String>,
}

impl ClassCatalog {
    /// Loads class names from a text file, one name per line.
    ///
    /// Blank lines are ignored; surrounding whitespace is stripped.
    pub fn from_file(path: &str) -> Result<Self, PostprocessError> {
        let names = utils::file_to_vec(path)?;
        Self::from_names(names)
    }

    pub fn from_names(names: Vec<String>) -> Result<Self, PostprocessError> {
        if names.is_empty() {
            return Err(PostprocessError::EmptyCatalog);
        }
        Ok(Self { names })
    }

    pub fn from_slice(names: &[&str]) -> Result<Self, PostprocessError> {
        Self::from_names(names.iter().map(|n| n.to_string()).collect())
    }

    /// Number of classes, i.e. the `K` of the `5 + K` prediction schema.
    pub fn num_classes(&self) -> usize {
        self.names.len()
    }

    /// Resolves a class id to its name.
    pub fn name(&self, class_id: usize) -> Result<&str, PostprocessError> {
        self.names
            .get(class_id)
            .map(|n| n.as_str())
            .ok_or(PostprocessError::UnknownClassId {
                class_id,
                num_classes: self.names.len(),
            })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}
