//! Upload naming and validation rules for the media directory.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Image extensions accepted by the upload endpoint.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "svg"];

/// Document extensions (curriculum files, resumes).
pub const DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

/// Folder used when the client does not name one.
pub const DEFAULT_FOLDER: &str = "uploads";

/// Default upload size cap (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Lowercased extension of `filename`, if it has one.
pub fn extension(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Validate the upload extension, returning it lowercased.
pub fn validate_extension(filename: &str) -> Result<String, CoreError> {
    let ext = extension(filename).ok_or_else(|| {
        CoreError::Validation(format!("File '{filename}' has no extension"))
    })?;
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) || DOCUMENT_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(CoreError::Validation(format!(
            "Unsupported file type '.{ext}'. Allowed: {}, {}",
            IMAGE_EXTENSIONS.join(", "),
            DOCUMENT_EXTENSIONS.join(", ")
        )))
    }
}

/// Validate a target folder such as `faculty` or `departments/banners`.
///
/// Only lowercase ASCII letters, digits, `-`, `_` and `/` separators are
/// allowed, so the result can never escape the media root.
pub fn validate_folder(folder: &str) -> Result<String, CoreError> {
    let folder = folder.trim().trim_matches('/');
    if folder.is_empty() {
        return Ok(DEFAULT_FOLDER.to_string());
    }
    let ok = folder.split('/').all(|segment| {
        !segment.is_empty()
            && segment != "."
            && segment != ".."
            && segment
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    });
    if ok {
        Ok(folder.to_string())
    } else {
        Err(CoreError::Validation(format!("Invalid media folder '{folder}'")))
    }
}

/// Stored file name: slugified original stem plus a unique token.
///
/// ```
/// use campus_core::media::stored_file_name;
///
/// assert_eq!(stored_file_name("Lab Photo.JPG", "ab12", "jpg"), "lab-photo-ab12.jpg");
/// ```
pub fn stored_file_name(original: &str, token: &str, ext: &str) -> String {
    let stem = original.rsplit_once('.').map_or(original, |(s, _)| s);
    let stem = crate::slug::slugify(stem);
    if stem.is_empty() {
        format!("{token}.{ext}")
    } else {
        format!("{stem}-{token}.{ext}")
    }
}

/// Public URL for a stored relative path.
pub fn public_url(media_url: &str, relative: &str) -> String {
    format!(
        "{}/{}",
        media_url.trim_end_matches('/'),
        relative.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(extension("a.PNG").as_deref(), Some("png"));
        assert_eq!(extension("noext"), None);
        assert_eq!(extension(".hidden"), None);
    }

    #[test]
    fn accepts_images_and_documents() {
        assert_eq!(validate_extension("cv.DOCX").unwrap(), "docx");
        assert_eq!(validate_extension("x.webp").unwrap(), "webp");
    }

    #[test]
    fn rejects_other_types() {
        assert_matches!(validate_extension("run.exe"), Err(CoreError::Validation(_)));
        assert_matches!(validate_extension("README"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn folder_rules() {
        assert_eq!(validate_folder("").unwrap(), DEFAULT_FOLDER);
        assert_eq!(validate_folder("/faculty/banners/").unwrap(), "faculty/banners");
        assert!(validate_folder("../etc").is_err());
        assert!(validate_folder("Faculty").is_err());
        assert!(validate_folder("a//b").is_err());
    }

    #[test]
    fn stored_name_falls_back_to_token() {
        assert_eq!(stored_file_name("###.png", "t1", "png"), "t1.png");
    }

    #[test]
    fn public_url_joins_cleanly() {
        assert_eq!(public_url("/media/", "/faculty/x.png"), "/media/faculty/x.png");
    }
}
