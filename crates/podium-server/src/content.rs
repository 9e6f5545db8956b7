use podium_model::{parse_roadmap, RoadmapDocument, BUILTIN_ROADMAP_JSON};
use std::fmt::{Display, Formatter};
use std::path::Path;

#[derive(Debug)]
pub struct ContentError(pub String);

impl Display for ContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::error::Error for ContentError {}

/// Loads the roadmap document: a file override when a path is given,
/// otherwise the embedded copy. Either way the document is validated
/// before the server starts; a broken document halts startup.
pub fn load_document(path: Option<&Path>) -> Result<RoadmapDocument, ContentError> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|e| {
                ContentError(format!("content file {} unreadable: {e}", path.display()))
            })?;
            parse_roadmap(&raw).map_err(|e| {
                ContentError(format!("content file {} invalid: {e}", path.display()))
            })
        }
        None => parse_roadmap(BUILTIN_ROADMAP_JSON)
            .map_err(|e| ContentError(format!("embedded roadmap document invalid: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::load_document;
    use std::io::Write;

    #[test]
    fn embedded_document_loads() {
        let document = load_document(None).expect("embedded document");
        assert_eq!(document.title, "Performance Hub Design Development");
    }

    #[test]
    fn missing_override_file_is_an_error() {
        let err = load_document(Some(std::path::Path::new("/nonexistent/roadmap.json")))
            .expect_err("missing file");
        assert!(err.0.contains("unreadable"));
    }

    #[test]
    fn invalid_override_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        file.write_all(b"{\"title\": \"x\"}").expect("write");
        let err = load_document(Some(file.path())).expect_err("invalid document");
        assert!(err.0.contains("invalid"));
    }
}
