//! Mods directory test utilities

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Temporary mods directory populated with descriptor files
pub struct ModsDir {
    dir: TempDir,
}

impl ModsDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn with_file(self, relative: &str, contents: &str) -> Self {
        let path = self.dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

pub fn local_descriptor(name: &str, master_url: &str, version: (u32, u32, &str)) -> String {
    let (major, minor, patch) = version;
    format!(
        r#"{{
    "modName": "{name}",
    "masterVersionFile": "{master_url}",
    "modThreadId": 1234,
    "modVersion": {{ "major": {major}, "minor": {minor}, "patch": "{patch}" }}
}}"#
    )
}

pub fn master_descriptor(version: (u32, u32, &str)) -> String {
    let (major, minor, patch) = version;
    format!(r#"{{ "modVersion": {{ "major": {major}, "minor": {minor}, "patch": "{patch}" }} }}"#)
}
