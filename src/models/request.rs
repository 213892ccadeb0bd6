use std::io;
use std::path::Path;

/// A user-chosen document held in memory until it is submitted or cleared.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub content: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: String, content: Vec<u8>) -> Self {
        Self { name, content }
    }

    /// Loads a file from disk, keeping only its final path component as the
    /// upload name.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("invalid file path: {}", path.display()),
                )
            })?
            .to_string();
        let content = std::fs::read(path)?;
        Ok(Self::new(name, content))
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// The file-selection input: at most one selected file, replaced wholesale.
///
/// Mirrors a form input that cannot be partially mutated; `reset` swaps in a
/// pristine slot rather than editing the old one in place.
#[derive(Debug, Default)]
pub struct FileSlot {
    selected: Option<SelectedFile>,
}

impl FileSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, file: SelectedFile) {
        self.selected = Some(file);
    }

    pub fn current(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }

    pub fn reset(&mut self) {
        *self = FileSlot::new();
    }
}
