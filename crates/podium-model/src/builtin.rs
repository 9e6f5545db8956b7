use crate::document::RoadmapDocument;
use crate::keys::ValidationError;
use once_cell::sync::Lazy;

/// The roadmap document shipped with the workspace.
pub const BUILTIN_ROADMAP_JSON: &str = include_str!("../assets/roadmap.json");

static BUILTIN: Lazy<RoadmapDocument> = Lazy::new(|| {
    parse_roadmap(BUILTIN_ROADMAP_JSON).expect("built-in roadmap document is valid")
});

/// Parses and validates a roadmap document from JSON text.
pub fn parse_roadmap(input: &str) -> Result<RoadmapDocument, ValidationError> {
    let document: RoadmapDocument = serde_json::from_str(input)
        .map_err(|e| ValidationError(format!("roadmap document parse failed: {e}")))?;
    document.validate()?;
    Ok(document)
}

#[must_use]
pub fn builtin_roadmap() -> &'static RoadmapDocument {
    &BUILTIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_document_parses_and_validates() {
        let document = parse_roadmap(BUILTIN_ROADMAP_JSON).expect("builtin valid");
        assert_eq!(document, *builtin_roadmap());
    }
}
