//! Presentational view models: the JSON shapes clients render directly.
//! Pure data; every field is derived from the validated roadmap document.

use podium_model::{
    ChartPoint, HorizonKey, MetaEntry, Palette, SectionKey, SourceStatus, StageTheme, ThemeKey,
    Tone, TrajectoryPoint, TrendIndicator,
};
use serde::{Deserialize, Serialize};

/// Rendered when a horizon's persona list is present but empty.
pub const EMPTY_PERSONAS_NOTICE: &str = "No personas captured for this horizon yet.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoadmapView {
    pub title: String,
    pub strapline: String,
    pub intro: String,
    pub default_horizon: HorizonKey,
    pub default_section: SectionKey,
    pub navigator: Vec<NavigatorItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavigatorItem {
    pub key: HorizonKey,
    pub label: String,
    pub short: String,
    pub summary: String,
    pub stage: StageBadge,
    pub overview_metrics: Vec<MetricBadge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact_metric: Option<ImpactBadge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StageBadge {
    pub theme: StageTheme,
    pub label: String,
    pub descriptor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricBadge {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImpactBadge {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicator: Option<TrendIndicator>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HorizonView {
    pub key: HorizonKey,
    pub title: String,
    pub summary: String,
    pub badges: Vec<String>,
    pub sections: Vec<SectionTab>,
    pub default_section: SectionKey,
    pub timeline: Vec<TimelineCard>,
    pub diagram: DiagramView,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionTab {
    pub value: SectionKey,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimelineCard {
    pub title: String,
    pub description: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", rename_all = "lowercase")]
pub enum SectionView {
    Overview(OverviewView),
    Personas(PersonasView),
    Operating(OperatingView),
    Technical(TechnicalView),
    Experience(ExperienceView),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverviewView {
    pub narrative: String,
    pub highlights: Vec<String>,
    pub value_themes: Vec<ValueThemeCard>,
    pub focus_areas: Vec<FocusArea>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValueThemeCard {
    pub category: String,
    pub statement: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FocusArea {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
    pub expandable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonasView {
    pub target: TargetBand,
    pub cards: Vec<PersonaCard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetBand {
    pub users: String,
    pub organizations: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonaCard {
    pub name: String,
    pub focus: String,
    pub needs: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OperatingView {
    pub name: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<RoleCard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figure: Option<FigureView>,
    pub enablers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoleCard {
    pub title: String,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FigureView {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TechnicalView {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figure: Option<FigureView>,
    pub pillars: Vec<PillarCard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration: Option<IntegrationView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PillarCard {
    pub label: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntegrationView {
    pub title: String,
    pub prompt: String,
    pub columns: Vec<String>,
    pub rows: Vec<RowView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RowView {
    pub functional_block: String,
    pub service: String,
    pub notes: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bom: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExperienceView {
    pub title: String,
    pub description: String,
    pub highlights: Vec<NumberedHighlight>,
    pub palette: Palette,
    pub preview: PreviewView,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NumberedHighlight {
    pub index: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreviewView {
    pub workspace_title: String,
    pub workspace_copy: String,
    pub featured: Vec<String>,
    pub chips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiagramView {
    pub title: String,
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axes: Option<AxesView>,
    pub clusters: Vec<ClusterView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AxesView {
    pub horizontal: String,
    pub vertical: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClusterView {
    pub title: String,
    pub tone: Tone,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub count_label: String,
    pub open: bool,
    pub items: Vec<ClusterItemView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClusterItemView {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub status: SourceStatus,
    pub status_label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<MetaEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrajectoryView {
    pub heading: String,
    pub title: String,
    pub summary: String,
    pub chart_title: String,
    pub chart_summary: String,
    pub axis_label: String,
    pub domain: [f64; 2],
    pub ticks: Vec<f64>,
    pub series: Vec<SeriesView>,
    pub points: Vec<TrajectoryPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesView {
    pub key: ThemeKey,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CostImpactView {
    pub heading: String,
    pub title: String,
    pub description: String,
    pub factors: Vec<PillarCard>,
    pub chart: CostChartView,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CostChartView {
    pub title: String,
    pub summary: String,
    pub x_label: String,
    pub y_label: String,
    pub base: ChartPoint,
    pub manual_future: ChartPoint,
    pub hub_future: ChartPoint,
    pub stage: CostStageView,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CostStageView {
    pub key: HorizonKey,
    pub label: String,
    pub insight: String,
    pub color: String,
    pub point: ChartPoint,
}
