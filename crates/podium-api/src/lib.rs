#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

mod openapi;
mod render;
mod views;

pub use openapi::openapi_v1_spec;
pub use render::{
    cost_impact_view, diagram_view, horizon_view, render, roadmap_view, trajectory_view,
};
pub use views::{
    AxesView, ClusterItemView, ClusterView, CostChartView, CostImpactView, CostStageView,
    DiagramView, ExperienceView, FigureView, FocusArea, HorizonView, ImpactBadge, IntegrationView,
    MetricBadge, NavigatorItem, NumberedHighlight, OperatingView, OverviewView, PersonaCard,
    PersonasView, PillarCard, PreviewView, RoadmapView, RoleCard, RowView, SectionTab, SectionView,
    SeriesView, StageBadge, TargetBand, TechnicalView, TimelineCard, TrajectoryView,
    ValueThemeCard, EMPTY_PERSONAS_NOTICE,
};

pub const CRATE_NAME: &str = "podium-api";

/// Shown verbatim on a failed sign-in attempt.
pub const INCORRECT_CREDENTIALS_MESSAGE: &str = "Incorrect username or password.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ApiErrorCode {
    InvalidCredentials,
    SessionRequired,
    UnknownHorizon,
    UnknownSection,
    InvalidRequestBody,
    NotReady,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub details: Value,
}

impl ApiError {
    #[must_use]
    pub fn invalid_credentials() -> Self {
        Self {
            code: ApiErrorCode::InvalidCredentials,
            message: INCORRECT_CREDENTIALS_MESSAGE.to_string(),
            details: json!({}),
        }
    }

    #[must_use]
    pub fn session_required() -> Self {
        Self {
            code: ApiErrorCode::SessionRequired,
            message: "sign in to view the horizons".to_string(),
            details: json!({}),
        }
    }

    #[must_use]
    pub fn unknown_horizon(key: &str) -> Self {
        Self {
            code: ApiErrorCode::UnknownHorizon,
            message: format!("unknown horizon: {key}"),
            details: json!({"horizon": key}),
        }
    }

    #[must_use]
    pub fn unknown_section(key: &str) -> Self {
        Self {
            code: ApiErrorCode::UnknownSection,
            message: format!("unknown section: {key}"),
            details: json!({"section": key}),
        }
    }

    #[must_use]
    pub fn invalid_body(reason: &str) -> Self {
        Self {
            code: ApiErrorCode::InvalidRequestBody,
            message: "request body could not be read".to_string(),
            details: json!({"reason": reason}),
        }
    }

    #[must_use]
    pub fn not_ready() -> Self {
        Self {
            code: ApiErrorCode::NotReady,
            message: "service is not ready".to_string(),
            details: json!({}),
        }
    }
}

pub mod params {
    use super::ApiError;
    use podium_model::{HorizonKey, SectionKey};

    pub fn parse_horizon_param(raw: &str) -> Result<HorizonKey, ApiError> {
        HorizonKey::parse(raw).map_err(|_| ApiError::unknown_horizon(raw))
    }

    pub fn parse_section_param(raw: &str) -> Result<SectionKey, ApiError> {
        SectionKey::parse(raw).map_err(|_| ApiError::unknown_section(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::params::{parse_horizon_param, parse_section_param};
    use super::{ApiError, ApiErrorCode, INCORRECT_CREDENTIALS_MESSAGE};
    use podium_model::{HorizonKey, SectionKey};

    #[test]
    fn parse_horizon_param_accepts_known_keys() {
        assert_eq!(parse_horizon_param("h1").expect("parse"), HorizonKey::H1);
        assert_eq!(parse_horizon_param(" h3 ").expect("parse"), HorizonKey::H3);
    }

    #[test]
    fn parse_horizon_param_maps_to_api_error() {
        let err = parse_horizon_param("h9").expect_err("unknown key");
        assert_eq!(err.code, ApiErrorCode::UnknownHorizon);
        assert_eq!(err.details["horizon"], "h9");
    }

    #[test]
    fn parse_section_param_maps_to_api_error() {
        assert_eq!(
            parse_section_param("operating").expect("parse"),
            SectionKey::Operating
        );
        let err = parse_section_param("insights").expect_err("unknown section");
        assert_eq!(err.code, ApiErrorCode::UnknownSection);
    }

    #[test]
    fn invalid_credentials_uses_the_static_message() {
        let err = ApiError::invalid_credentials();
        assert_eq!(err.message, INCORRECT_CREDENTIALS_MESSAGE);
        assert_eq!(err.code, ApiErrorCode::InvalidCredentials);
    }
}
