//! Mock implementations of the outbound ports for integration tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use product_sbom::prelude::*;

/// RecordSource over a fixed in-memory record list.
pub struct MockRecordSource {
    records: Vec<InstalledFileRecord>,
}

impl MockRecordSource {
    pub fn new(records: Vec<InstalledFileRecord>) -> Self {
        Self { records }
    }
}

impl RecordSource for MockRecordSource {
    fn read_records(&self, _metadata_path: &Path) -> Result<Vec<InstalledFileRecord>> {
        Ok(self.records.clone())
    }
}

/// MetadataReader over an in-memory directory map, counting parses.
pub struct MockMetadataReader {
    descriptors: HashMap<PathBuf, MetadataDescriptor>,
    reads: Arc<AtomicUsize>,
}

impl MockMetadataReader {
    pub fn new() -> Self {
        Self {
            descriptors: HashMap::new(),
            reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_descriptor(mut self, dir: &str, toml_text: &str) -> Self {
        let descriptor: MetadataDescriptor = toml::from_str(toml_text).unwrap();
        self.descriptors.insert(PathBuf::from(dir), descriptor);
        self
    }

    /// Handle on the parse counter, usable after the reader moves into the
    /// use case.
    pub fn read_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.reads)
    }
}

impl MetadataReader for MockMetadataReader {
    fn has_descriptor(&self, dir: &Path) -> bool {
        self.descriptors.contains_key(dir)
    }

    fn read_descriptor(&self, dir: &Path) -> Result<MetadataDescriptor> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.descriptors
            .get(dir)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no descriptor in {}", dir.display()))
    }
}

/// ContentAccessor over an in-memory path-to-checksum map.
pub struct MockContentAccessor {
    checksums: HashMap<String, String>,
}

impl MockContentAccessor {
    pub fn new() -> Self {
        Self {
            checksums: HashMap::new(),
        }
    }

    pub fn with_file(mut self, installed_file: &str, checksum: &str) -> Self {
        self.checksums
            .insert(installed_file.to_string(), format!("SHA1: {}", checksum));
        self
    }
}

impl ContentAccessor for MockContentAccessor {
    fn exists(&self, installed_file: &str) -> bool {
        self.checksums.contains_key(installed_file)
    }

    fn checksum(&self, installed_file: &str) -> Result<String> {
        self.checksums
            .get(installed_file)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no such installed file: {}", installed_file))
    }
}

/// ProgressReporter collecting messages for assertions.
pub struct MockProgressReporter {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle on the collected messages, usable after the reporter moves
    /// into the use case.
    pub fn messages(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.messages)
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
