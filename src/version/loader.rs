//! Local descriptor loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::version::error::LoadError;

/// File extension of descriptors bundled with installed mods
pub const DESCRIPTOR_EXTENSION: &str = "version";

/// Trait for reading descriptors bundled with installed mods
pub trait DescriptorLoader: Send + Sync {
    /// Lists the units that ship a descriptor
    fn unit_ids(&self) -> Result<Vec<String>, LoadError>;

    /// Reads the raw descriptor of one unit
    fn load_descriptor(&self, unit_id: &str) -> Result<String, LoadError>;
}

/// Loader that discovers `*.version` files below a mods directory.
///
/// The unit id is the descriptor path relative to the mods directory, using
/// `/` as separator (e.g. `LazyLib/data/config/lazylib.version`).
pub struct DirectoryLoader {
    mods_dir: PathBuf,
}

impl DirectoryLoader {
    pub fn new(mods_dir: impl Into<PathBuf>) -> Self {
        Self {
            mods_dir: mods_dir.into(),
        }
    }

    fn unit_id(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.mods_dir).ok()?;
        Some(
            relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/"),
        )
    }
}

impl DescriptorLoader for DirectoryLoader {
    fn unit_ids(&self) -> Result<Vec<String>, LoadError> {
        let mut found = Vec::new();

        // Symlinks are listed but never followed, so link cycles can't repeat a unit
        for entry in WalkDir::new(&self.mods_dir).follow_links(false) {
            let entry = entry?;
            let path = entry.path();

            if entry.file_type().is_file()
                && path.extension().is_some_and(|ext| ext == DESCRIPTOR_EXTENSION)
                && let Some(id) = self.unit_id(path)
            {
                found.push(id);
            }
        }

        found.sort();

        debug!(
            "Found {} descriptors under {:?}",
            found.len(),
            self.mods_dir
        );

        Ok(found)
    }

    fn load_descriptor(&self, unit_id: &str) -> Result<String, LoadError> {
        let relative = Path::new(unit_id);
        if relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            return Err(LoadError::UnknownUnit(unit_id.to_string()));
        }

        let path = self.mods_dir.join(relative);
        fs::read_to_string(&path).map_err(|source| LoadError::Io { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, relative: &str, contents: &str) {
        let path = dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn unit_ids_finds_nested_descriptors_sorted() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "Nexerelin/nex.version", "{}");
        write(temp_dir.path(), "LazyLib/data/config/lazylib.version", "{}");
        write(temp_dir.path(), "LazyLib/mod_info.json", "{}");

        let loader = DirectoryLoader::new(temp_dir.path());

        assert_eq!(
            loader.unit_ids().unwrap(),
            vec![
                "LazyLib/data/config/lazylib.version".to_string(),
                "Nexerelin/nex.version".to_string(),
            ]
        );
    }

    #[test]
    fn unit_ids_fails_for_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let loader = DirectoryLoader::new(temp_dir.path().join("nope"));

        assert!(matches!(loader.unit_ids(), Err(LoadError::Walk(_))));
    }

    #[cfg(unix)]
    #[test]
    fn unit_ids_lists_descriptor_once_despite_symlink_cycle() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "Mod/m.version", "{}");
        std::os::unix::fs::symlink(temp_dir.path(), temp_dir.path().join("Mod/link")).unwrap();

        let loader = DirectoryLoader::new(temp_dir.path());

        assert_eq!(loader.unit_ids().unwrap(), vec!["Mod/m.version".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn unit_ids_skips_symlinked_descriptor_files() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "Real/r.version", "{}");
        std::os::unix::fs::symlink(
            temp_dir.path().join("Real/r.version"),
            temp_dir.path().join("Real/alias.version"),
        )
        .unwrap();

        let loader = DirectoryLoader::new(temp_dir.path());

        assert_eq!(loader.unit_ids().unwrap(), vec!["Real/r.version".to_string()]);
    }

    #[test]
    fn load_descriptor_reads_file_contents() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "LazyLib/lazylib.version", r#"{"modName": "LazyLib"}"#);

        let loader = DirectoryLoader::new(temp_dir.path());

        assert_eq!(
            loader.load_descriptor("LazyLib/lazylib.version").unwrap(),
            r#"{"modName": "LazyLib"}"#
        );
    }

    #[test]
    fn load_descriptor_rejects_paths_outside_mods_dir() {
        let temp_dir = TempDir::new().unwrap();
        let loader = DirectoryLoader::new(temp_dir.path().join("mods"));

        assert!(matches!(
            loader.load_descriptor("../secret.version"),
            Err(LoadError::UnknownUnit(_))
        ));
    }
}
