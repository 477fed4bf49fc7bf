//! Copying an environment file over the destination.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use envswitch_core::{DESTINATION_FILE, SwitchError};

/// Path of the destination file inside a project directory.
pub fn destination_path(directory: &Path) -> PathBuf {
    directory.join(DESTINATION_FILE)
}

/// Copy `source` to `destination`, overwriting any existing content.
///
/// The copy is written next to the destination and renamed over it, so the
/// destination holds either its old content or the whole new file. Returns
/// the number of bytes written.
pub fn copy_env_file(source: &Path, destination: &Path) -> Result<u64, SwitchError> {
    let bytes = replace_with_copy(source, destination).map_err(|e| SwitchError::Copy {
        source_path: source.to_path_buf(),
        destination: destination.to_path_buf(),
        source: e,
    })?;

    tracing::info!(
        source = %source.display(),
        destination = %destination.display(),
        bytes,
        "copied environment file"
    );

    Ok(bytes)
}

fn replace_with_copy(source: &Path, destination: &Path) -> io::Result<u64> {
    let mut reader = File::open(source)?;
    let permissions = reader.metadata()?.permissions();

    let parent = destination
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut temp = NamedTempFile::new_in(parent)?;
    let bytes = io::copy(&mut reader, temp.as_file_mut())?;
    temp.as_file().sync_all()?;
    fs::set_permissions(temp.path(), permissions)?;

    temp.persist(destination).map_err(|e| e.error)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join(".env.prod");
        let content = b"# production\nAPI_URL=https://api.example.com/?a=b\n\nDEBUG=false\n";
        fs::write(&source, content).unwrap();

        let destination = destination_path(dir.path());
        let bytes = copy_env_file(&source, &destination).unwrap();

        assert_eq!(bytes, content.len() as u64);
        assert_eq!(fs::read(&destination).unwrap(), content);
    }

    #[test]
    fn test_copy_overwrites_existing_destination() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join(".env.dev");
        fs::write(&source, "MODE=dev\n").unwrap();
        let destination = destination_path(dir.path());
        fs::write(&destination, "MODE=prod\nEXTRA=this line is longer than the source\n").unwrap();

        copy_env_file(&source, &destination).unwrap();
        assert_eq!(fs::read_to_string(&destination).unwrap(), "MODE=dev\n");
    }

    #[test]
    fn test_copy_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let err = copy_env_file(&dir.path().join(".env.gone"), &destination_path(dir.path()))
            .unwrap_err();

        assert!(matches!(err, SwitchError::Copy { .. }));
        assert!(!destination_path(dir.path()).exists());
    }

    #[test]
    fn test_failed_copy_keeps_previous_destination() {
        let dir = tempfile::tempdir().unwrap();
        let destination = destination_path(dir.path());
        fs::write(&destination, "MODE=prod\n").unwrap();

        // A directory opens but cannot be read as a file
        let source = dir.path().join(".env.dir");
        fs::create_dir(&source).unwrap();

        let err = copy_env_file(&source, &destination).unwrap_err();
        assert!(matches!(err, SwitchError::Copy { .. }));
        assert_eq!(fs::read_to_string(&destination).unwrap(), "MODE=prod\n");

        let mut entries: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        entries.sort();
        assert_eq!(entries, vec![".env", ".env.dir"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_keeps_source_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join(".env.dev");
        fs::write(&source, "A=1\n").unwrap();
        fs::set_permissions(&source, fs::Permissions::from_mode(0o640)).unwrap();

        let destination = destination_path(dir.path());
        copy_env_file(&source, &destination).unwrap();

        let mode = fs::metadata(&destination).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }
}
