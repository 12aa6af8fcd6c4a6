use std::path::Path;
use stocklens_core::CatalogError;

/// Map catalog loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_file_load_error(error: &anyhow::Error, path: &Path) -> (String, String, String) {
    match error.downcast_ref::<CatalogError>() {
        Some(CatalogError::Read { source, .. }) => map_io_error(source, path),
        Some(CatalogError::Json { source, .. }) => (
            "Invalid JSON".to_string(),
            "The catalog file is not valid JSON.".to_string(),
            format!("{}\n\nPath: {}", source, path.display()),
        ),
        Some(CatalogError::Schema(errors)) => (
            "Schema Error".to_string(),
            "The catalog file does not match the catalog schema.".to_string(),
            errors.join("\n"),
        ),
        Some(CatalogError::Invalid(errors)) => (
            "Validation Error".to_string(),
            "The catalog file has validation errors.".to_string(),
            errors.join("\n"),
        ),
        Some(other) => (
            "Error Loading File".to_string(),
            "Failed to load catalog file.".to_string(),
            other.to_string(),
        ),
        None => (
            "Error Loading File".to_string(),
            "Failed to load catalog file.".to_string(),
            format!("{:#}", error),
        ),
    }
}

/// Map reload errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_reload_error(error: &anyhow::Error, path: Option<&Path>) -> (String, String, String) {
    match path {
        Some(path) => {
            let (title, message, details) = map_file_load_error(error, path);
            if title == "File Not Found" {
                (
                    title,
                    message,
                    format!(
                        "Path: {}\n\nThe file may have been moved or deleted.",
                        path.display()
                    ),
                )
            } else {
                (title, message, details)
            }
        }
        None => (
            "No File Path".to_string(),
            "No catalog file is loaded.".to_string(),
            "Use `open <path>` to load a catalog first.".to_string(),
        ),
    }
}

fn map_io_error(source: &std::io::Error, path: &Path) -> (String, String, String) {
    match source.kind() {
        std::io::ErrorKind::NotFound => (
            "File Not Found".to_string(),
            "The file could not be found.".to_string(),
            format!(
                "Path: {}\n\nPlease verify the file exists and you have permission to read it.",
                path.display()
            ),
        ),
        std::io::ErrorKind::PermissionDenied => (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to read this file:\n{}", path.display()),
        ),
        _ => (
            "Error Loading File".to_string(),
            "Failed to load catalog file.".to_string(),
            source.to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_file_maps_to_not_found() {
        let path = PathBuf::from("/missing/catalog.json");
        let error = anyhow::Error::new(CatalogError::Read {
            path: path.clone(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });

        let (title, _, details) = map_file_load_error(&error, &path);

        assert_eq!(title, "File Not Found");
        assert!(details.contains("/missing/catalog.json"));
    }

    #[test]
    fn test_validation_errors_are_listed() {
        let error = anyhow::Error::new(CatalogError::Invalid(vec![
            "Product #1 ('Mug'): quantity cannot be negative, found -1".to_string(),
        ]));

        let (title, _, details) = map_file_load_error(&error, Path::new("c.json"));

        assert_eq!(title, "Validation Error");
        assert!(details.contains("quantity cannot be negative"));
    }

    #[test]
    fn test_reload_without_path() {
        let error = anyhow::anyhow!("No file path set");
        let (title, _, _) = map_reload_error(&error, None);
        assert_eq!(title, "No File Path");
    }

    #[test]
    fn test_reload_of_deleted_file() {
        let path = PathBuf::from("gone.json");
        let error = anyhow::Error::new(CatalogError::Read {
            path: path.clone(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
        .context("Failed to reload gone.json");

        let (title, _, details) = map_reload_error(&error, Some(&path));

        assert_eq!(title, "File Not Found");
        assert!(details.contains("moved or deleted"));
    }
}
