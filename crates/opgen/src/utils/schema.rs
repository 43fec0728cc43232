use std::{
  ffi::OsStr,
  path::{Path, PathBuf},
};

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};
use serde::de::DeserializeOwned;

use crate::generator::errors::GenerationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
  Json,
  Yaml,
}

impl DocumentFormat {
  /// Format of a schema document, or `None` if the file is not one.
  #[must_use]
  pub fn from_path(path: &Path) -> Option<Self> {
    match path.extension().and_then(OsStr::to_str)? {
      "yaml" | "yml" => Some(Self::Yaml),
      "json" => Some(Self::Json),
      _ => None,
    }
  }
}

/// Schema documents found in an input directory.
#[derive(Debug, Default)]
pub struct SchemaDirectory {
  /// Documents in lexicographic file-name order.
  pub documents: Vec<PathBuf>,
  /// Files that are not schema documents.
  pub skipped: Vec<PathBuf>,
}

impl SchemaDirectory {
  /// Lists the regular files of `dir`. Subdirectories are not descended into.
  pub async fn scan(dir: &Path) -> Result<Self, GenerationError> {
    let io_error = |source| GenerationError::Io {
      path: dir.to_path_buf(),
      source,
    };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(io_error)?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
      if entry.file_type().await.map_err(io_error)?.is_file() {
        files.push(entry.path());
      }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let (documents, skipped): (Vec<_>, Vec<_>) = files
      .into_iter()
      .partition(|path| DocumentFormat::from_path(path).is_some());

    Ok(Self { documents, skipped })
  }
}

pub struct DocumentLoader {
  path: PathBuf,
  file: AsyncMmapFile,
  format: DocumentFormat,
}

impl DocumentLoader {
  pub async fn open(path: &Path) -> Result<Self, GenerationError> {
    let format = DocumentFormat::from_path(path)
      .ok_or_else(|| GenerationError::schema(path, "unsupported file extension (expected yaml, yml or json)"))?;

    let file = AsyncMmapFile::open(path)
      .await
      .map_err(|e| GenerationError::schema(path, e.to_string()))?;

    Ok(Self {
      path: path.to_path_buf(),
      file,
      format,
    })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn parse<T: DeserializeOwned>(&self) -> Result<T, GenerationError> {
    let parsed = match self.format {
      DocumentFormat::Json => serde_json::from_slice::<T>(self.file.as_slice()).map_err(|e| e.to_string()),
      DocumentFormat::Yaml => serde_yaml::from_slice::<T>(self.file.as_slice()).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| GenerationError::schema(&self.path, message))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_document_format_from_path() {
    let cases = [
      ("ops.yaml", Some(DocumentFormat::Yaml)),
      ("ops.yml", Some(DocumentFormat::Yaml)),
      ("ops.json", Some(DocumentFormat::Json)),
      ("README.md", None),
      ("operations", None),
    ];

    for (file, expected) in cases {
      assert_eq!(DocumentFormat::from_path(Path::new(file)), expected, "file: {file}");
    }
  }

  #[tokio::test]
  async fn test_scan_sorts_and_skips() {
    let dir = tempfile::tempdir().unwrap();
    for file in ["b.yaml", "a.json", "notes.txt", "c.yml"] {
      std::fs::write(dir.path().join(file), "operations: []\n").unwrap();
    }
    std::fs::create_dir(dir.path().join("nested.yaml")).unwrap();

    let scanned = SchemaDirectory::scan(dir.path()).await.unwrap();
    let names = scanned
      .documents
      .iter()
      .map(|path| path.file_name().unwrap().to_str().unwrap())
      .collect::<Vec<_>>();

    assert_eq!(names, ["a.json", "b.yaml", "c.yml"]);
    assert_eq!(scanned.skipped, [dir.path().join("notes.txt")]);
  }

  #[tokio::test]
  async fn test_scan_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");

    let err = SchemaDirectory::scan(&missing).await.unwrap_err();
    assert!(matches!(err, GenerationError::Io { path, .. } if path == missing));
  }
}
