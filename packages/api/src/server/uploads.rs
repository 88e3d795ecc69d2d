//! # Profile image storage
//!
//! Uploaded profile images are written flat into one directory on disk. The
//! database keeps a *public path* of the form `profile/<file>`; the browser
//! loads it as `/profile/<file>`, which the router serves from the same
//! directory.
//!
//! File names go through [`secure_filename`] before they touch the disk. Two
//! uploads with the same sanitised name overwrite each other.

use std::io;
use std::path::{Path, PathBuf};

/// URL path segment under which uploads are served.
pub const PUBLIC_PREFIX: &str = "profile";

/// Reduce a client-supplied file name to a safe, flat name.
///
/// Path separators become spaces, runs of whitespace become a single `_`, only
/// ASCII letters, digits, `.`, `_` and `-` survive, and leading or trailing
/// `.`/`_` are stripped. Returns `None` when nothing usable remains.
pub fn secure_filename(name: &str) -> Option<String> {
    let spaced: String = name
        .chars()
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");
    let filtered: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();
    let trimmed = filtered.trim_matches(|c| c == '.' || c == '_');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Directory holding uploaded profile images.
#[derive(Clone, Debug)]
pub struct UploadDir {
    root: PathBuf,
}

impl UploadDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the directory if it does not exist yet.
    pub async fn ensure_exists(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await
    }

    /// Write an upload and return its public path, or `None` when the file
    /// name sanitises to nothing.
    pub async fn save(&self, file_name: &str, bytes: &[u8]) -> io::Result<Option<String>> {
        let Some(name) = secure_filename(file_name) else {
            return Ok(None);
        };
        self.ensure_exists().await?;
        tokio::fs::write(self.root.join(&name), bytes).await?;
        tracing::info!(file = %name, size = bytes.len(), "saved profile image");
        Ok(Some(format!("{PUBLIC_PREFIX}/{name}")))
    }

    /// Delete the file behind a stored public path. A missing file is not an
    /// error; paths outside the upload directory are ignored.
    pub async fn remove(&self, public_path: &str) -> io::Result<()> {
        let Some(path) = self.resolve(public_path) else {
            tracing::warn!(path = public_path, "refusing to remove unrecognised image path");
            return Ok(());
        };
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    fn resolve(&self, public_path: &str) -> Option<PathBuf> {
        let name = public_path
            .trim_start_matches('/')
            .strip_prefix(PUBLIC_PREFIX)?
            .strip_prefix('/')?;
        // Only names that could have been produced by `save`
        (secure_filename(name).as_deref() == Some(name)).then(|| self.root.join(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_filename() {
        assert_eq!(secure_filename("kim.jpg").as_deref(), Some("kim.jpg"));
        assert_eq!(secure_filename("My Photo.png").as_deref(), Some("My_Photo.png"));
        assert_eq!(
            secure_filename("../../etc/passwd").as_deref(),
            Some("etc_passwd")
        );
        assert_eq!(
            secure_filename("C:\\Users\\kim\\face.jpeg").as_deref(),
            Some("C_Users_kim_face.jpeg")
        );
        assert_eq!(secure_filename("프로필.jpg").as_deref(), Some("jpg"));
        assert_eq!(secure_filename("..."), None);
        assert_eq!(secure_filename(""), None);
    }

    #[test]
    fn test_resolve_rejects_foreign_paths() {
        let dir = UploadDir::new("/srv/uploads");
        assert_eq!(
            dir.resolve("profile/kim.jpg"),
            Some(PathBuf::from("/srv/uploads/kim.jpg"))
        );
        assert_eq!(
            dir.resolve("/profile/kim.jpg"),
            Some(PathBuf::from("/srv/uploads/kim.jpg"))
        );
        assert_eq!(dir.resolve("profile/../secret"), None);
        assert_eq!(dir.resolve("other/kim.jpg"), None);
        assert_eq!(dir.resolve("profilekim.jpg"), None);
    }

    #[tokio::test]
    async fn test_save_and_remove() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let dir = UploadDir::new(tmp.path().join("profile"));

        let public = dir
            .save("lee photo.png", b"png-bytes")
            .await
            .expect("save succeeds")
            .expect("name survives sanitising");
        assert_eq!(public, "profile/lee_photo.png");

        let on_disk = tmp.path().join("profile").join("lee_photo.png");
        assert_eq!(std::fs::read(&on_disk).expect("file written"), b"png-bytes");

        dir.remove(&public).await.expect("remove succeeds");
        assert!(!on_disk.exists());

        // Removing again is fine
        dir.remove(&public).await.expect("missing file is not an error");
    }

    #[tokio::test]
    async fn test_save_skips_unusable_names() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let dir = UploadDir::new(tmp.path());
        assert_eq!(dir.save("..", b"x").await.expect("no io error"), None);
    }
}
