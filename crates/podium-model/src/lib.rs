#![forbid(unsafe_code)]
//! Roadmap content model SSOT.
//!
//! ```compile_fail
//! use podium_model::SectionKey;
//!
//! fn partial_match(s: SectionKey) -> &'static str {
//!     match s {
//!         SectionKey::Overview => "o",
//!         SectionKey::Personas => "p",
//!     }
//! }
//! ```

mod builtin;
mod document;
mod keys;

pub use builtin::{builtin_roadmap, parse_roadmap, BUILTIN_ROADMAP_JSON};
pub use document::{
    Axes, ChartPoint, Cluster, ClusterItem, CostChart, CostFactor, CostImpact, CostStage, Diagram,
    Experience, Figure, Horizon, Impact, ImpactMetric, IntegrationRow, IntegrationTable, MetaEntry,
    OperatingModel, Overview, OverviewMetric, Palette, Persona, PersonaTarget, Pillar,
    RoadmapDocument, Role, Stage, TechnicalEvolution, ThemeKey, TimelineEntry, TrajectoryPoint,
    TrajectorySeries, ValueTheme, ValueTrajectory, THEME_KEYS,
};
pub use keys::{
    parse_horizon_key, parse_section_key, HorizonKey, SectionKey, SourceStatus, StageTheme, Tone,
    TrendIndicator, ValidationError, HORIZON_KEYS, SECTION_KEYS,
};

pub const CRATE_NAME: &str = "podium-model";
