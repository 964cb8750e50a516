//! The [`ConfigDocument`] model: ordered sections of typed, commented keys.

use crate::decoder;
use crate::encoder;
use crate::error::{CogError, Result};
use crate::types::{Section, Value, DEFAULT_SECTION};
use serde::Serialize;
use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// An in-memory cog configuration.
///
/// Sections are stored in the order they were first seen (on load) or
/// created (on [`set`](Self::set)), with `DEFAULT` always first; each section
/// keeps its keys in insertion order. `save` writes them back in exactly that
/// order, so load → save → load is stable.
///
/// ```
/// use cog_core::{ConfigDocument, Value};
///
/// let mut doc: ConfigDocument = "[Display]\nwidth = 800\nheight = 600 // pixels\n"
///     .parse()
///     .unwrap();
/// assert_eq!(doc.get("width", Some("Display")), Some(&Value::Integer(800)));
///
/// doc.set("width", 1024, Some("Display"));
/// assert_eq!(
///     doc.to_cog_string(),
///     "[Display]\nwidth = 1024\nheight = 600 // pixels\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConfigDocument {
    #[serde(skip)]
    path: Option<PathBuf>,
    sections: Vec<Section>,
}

impl ConfigDocument {
    /// An empty document with no source path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse the file at `path`, remembering it as the save target.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut doc = Self::new();
        doc.load(path)?;
        Ok(doc)
    }

    /// Replace the whole document with the contents of the file at `path`.
    ///
    /// The file is read and parsed before anything is touched; if reading
    /// fails the document is left exactly as it was.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed = decoder::decode(&text);
        tracing::debug!(
            path = %path.display(),
            sections = parsed.sections.len(),
            keys = parsed.sections.iter().map(Section::len).sum::<usize>(),
            "loaded cog document"
        );
        self.sections = parsed.sections;
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Replace the sections with the contents of `text`. The source path is
    /// kept, so a later `save()` still targets the previously loaded file.
    pub fn load_str(&mut self, text: &str) {
        self.sections = decoder::decode(text).sections;
    }

    /// Look up `key` in `section` (`DEFAULT` when `None`).
    ///
    /// Returns `None` for an unknown section or key; a stored `false` or `0`
    /// is always `Some`.
    pub fn get(&self, key: &str, section: Option<&str>) -> Option<&Value> {
        self.section(section.unwrap_or(DEFAULT_SECTION))?.get(key)
    }

    /// Set `key` in `section` (`DEFAULT` when `None`), creating the section
    /// and key as needed. Existing keys keep their position and comment.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>, section: Option<&str>) {
        self.section_or_insert(section.unwrap_or(DEFAULT_SECTION))
            .set(key.into(), value.into());
    }

    /// Write the document to `destination`, or to the path it was loaded
    /// from when `None`. Does not change the document's own path.
    pub fn save(&self, destination: Option<&Path>) -> Result<()> {
        let path = destination
            .or(self.path.as_deref())
            .ok_or(CogError::NoDestination)?;
        let text = self.to_cog_string();
        std::fs::write(path, &text).map_err(|source| CogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "saved cog document");
        Ok(())
    }

    /// Serialize to cog text without touching the filesystem.
    pub fn to_cog_string(&self) -> String {
        encoder::encode(self)
    }

    /// The default save target: the most recently loaded file, or whatever
    /// was set with [`set_path`](Self::set_path).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    /// Sections in document order, `DEFAULT` included when present.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(Section::name)
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name() == name)
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    /// Comment attached to `key` in `section` (`DEFAULT` when `None`).
    pub fn comment(&self, key: &str, section: Option<&str>) -> Option<&str> {
        self.section(section.unwrap_or(DEFAULT_SECTION))?
            .entry(key)?
            .comment()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Find or create a section. New sections are appended, except
    /// `DEFAULT`, which always goes first: it is written without a header, so
    /// anywhere else its keys would read back into the preceding section.
    pub(crate) fn section_or_insert(&mut self, name: &str) -> &mut Section {
        let idx = match self.sections.iter().position(|s| s.name() == name) {
            Some(idx) => idx,
            None if name == DEFAULT_SECTION => {
                self.sections.insert(0, Section::new(name));
                0
            }
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        };
        &mut self.sections[idx]
    }
}

impl FromStr for ConfigDocument {
    type Err = Infallible;

    fn from_str(text: &str) -> std::result::Result<Self, Self::Err> {
        Ok(decoder::decode(text))
    }
}
