use std::fmt;

use crate::models::ResultRecord;

/// Shown in a field whose record attribute is missing or empty.
pub const PLACEHOLDER: &str = "N/A";

/// Shown in the summary box when the record carries no summary.
pub const SUMMARY_PLACEHOLDER: &str = "Summary not available";

/// The eight labeled metadata fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Author,
    Keywords,
    FileName,
    FilePath,
    FileSize,
    TimeTaken,
    MemoryUsage,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Title,
        Field::Author,
        Field::Keywords,
        Field::FileName,
        Field::FilePath,
        Field::FileSize,
        Field::TimeTaken,
        Field::MemoryUsage,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Author => "Author",
            Field::Keywords => "Keywords",
            Field::FileName => "File name",
            Field::FilePath => "File path",
            Field::FileSize => "File size",
            Field::TimeTaken => "Time taken",
            Field::MemoryUsage => "Memory usage",
        }
    }

    fn index(self) -> usize {
        match self {
            Field::Title => 0,
            Field::Author => 1,
            Field::Keywords => 2,
            Field::FileName => 3,
            Field::FilePath => 4,
            Field::FileSize => 5,
            Field::TimeTaken => 6,
            Field::MemoryUsage => 7,
        }
    }
}

/// The currently rendered values: eight metadata fields, the summary box,
/// and a visibility flag for the results container.
///
/// Mutation happens wholesale through `set` and `clear` only, so the view
/// can never end up half-populated.
#[derive(Debug, Default)]
pub struct DisplayState {
    fields: [String; 8],
    summary: String,
    results_visible: bool,
}

impl DisplayState {
    /// Created empty with the results container hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders one record into every field, substituting placeholders for
    /// anything absent, then unhides the results container. Total: no
    /// record shape can make this fail.
    pub fn set(&mut self, record: &ResultRecord) {
        self.fields[Field::Title.index()] = text_or_placeholder(record.title.as_deref());
        self.fields[Field::Author.index()] = text_or_placeholder(record.author.as_deref());
        self.fields[Field::Keywords.index()] = keywords_or_placeholder(record.keywords.as_deref());
        self.fields[Field::FileName.index()] = text_or_placeholder(record.file_name.as_deref());
        self.fields[Field::FilePath.index()] = text_or_placeholder(record.file_path.as_deref());
        self.fields[Field::FileSize.index()] = record
            .file_size
            .filter(|size| *size != 0)
            .map(|size| format!("{} bytes", size))
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        self.fields[Field::TimeTaken.index()] = record
            .time_taken_sec
            .filter(|t| *t != 0.0)
            .map(|t| format!("{} seconds", t))
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        self.fields[Field::MemoryUsage.index()] = record
            .memory_usage_mb
            .filter(|m| *m != 0.0)
            .map(|m| format!("{} MB", m))
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        self.summary = record
            .summary
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(SUMMARY_PLACEHOLDER)
            .to_string();
        self.results_visible = true;
    }

    /// Returns every field to the empty string, clears the summary, and
    /// hides the results container. Idempotent.
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.summary.clear();
        self.results_visible = false;
    }

    pub fn get(&self, field: Field) -> &str {
        &self.fields[field.index()]
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(|f| f.is_empty()) && self.summary.is_empty()
    }

    /// The rendered file name, usable as a download key. `None` when the
    /// field is empty or holds the placeholder.
    pub fn rendered_file_name(&self) -> Option<&str> {
        let name = self.get(Field::FileName);
        if name.is_empty() || name == PLACEHOLDER {
            None
        } else {
            Some(name)
        }
    }
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.results_visible {
            return writeln!(f, "(no results)");
        }
        for field in Field::ALL {
            writeln!(f, "{}: {}", field.label(), self.get(field))?;
        }
        writeln!(f, "Summary: {}", self.summary)
    }
}

fn text_or_placeholder(value: Option<&str>) -> String {
    value
        .filter(|s| !s.is_empty())
        .unwrap_or(PLACEHOLDER)
        .to_string()
}

fn keywords_or_placeholder(keywords: Option<&[String]>) -> String {
    match keywords {
        Some(words) if !words.is_empty() => words.join(", "),
        _ => PLACEHOLDER.to_string(),
    }
}
