use crate::keys::{
    HorizonKey, SourceStatus, StageTheme, Tone, TrendIndicator, ValidationError, HORIZON_KEYS,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The complete roadmap document: authored once, validated at startup,
/// never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoadmapDocument {
    pub title: String,
    pub strapline: String,
    pub intro: String,
    pub horizons: BTreeMap<HorizonKey, Horizon>,
    pub trajectory: ValueTrajectory,
    pub cost_impact: CostImpact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Horizon {
    pub label: String,
    pub short: String,
    pub summary: String,
    pub stage: Stage,
    pub overview: Overview,
    pub value_themes: Vec<ValueTheme>,
    pub impact: Impact,
    pub personas: Vec<Persona>,
    pub persona_target: PersonaTarget,
    pub operating_model: OperatingModel,
    pub technical_evolution: TechnicalEvolution,
    pub experience: Experience,
    pub diagram: Diagram,
    pub timeline: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stage {
    pub theme: StageTheme,
    pub label: String,
    pub descriptor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Overview {
    pub narrative: String,
    pub highlights: Vec<String>,
    pub metrics: Vec<OverviewMetric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverviewMetric {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValueTheme {
    pub category: String,
    pub statement: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Impact {
    pub description: String,
    pub metrics: Vec<ImpactMetric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImpactMetric {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicator: Option<TrendIndicator>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Persona {
    pub name: String,
    pub focus: String,
    pub needs: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonaTarget {
    pub users: String,
    pub organizations: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OperatingModel {
    pub name: String,
    pub summary: String,
    pub enablers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figure: Option<Figure>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<Role>,
}

/// A static image asset reference; rendering never dereferences `src`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Figure {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Role {
    pub title: String,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TechnicalEvolution {
    pub title: String,
    pub description: String,
    pub pillars: Vec<Pillar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figure: Option<Figure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_table: Option<IntegrationTable>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pillar {
    pub label: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntegrationTable {
    pub title: String,
    pub rows: Vec<IntegrationRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntegrationRow {
    pub functional_block: String,
    pub service: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bom: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Experience {
    pub title: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub palette: Palette,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Palette {
    pub background: String,
    pub accent: String,
    pub grid: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Diagram {
    pub title: String,
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axes: Option<Axes>,
    pub clusters: Vec<Cluster>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Axes {
    pub horizontal: String,
    pub vertical: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cluster {
    pub title: String,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub items: Vec<ClusterItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClusterItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default)]
    pub status: SourceStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<MetaEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetaEntry {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimelineEntry {
    pub title: String,
    pub description: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKey {
    Efficiency,
    Productivity,
    Prediction,
}

pub const THEME_KEYS: [ThemeKey; 3] = [
    ThemeKey::Efficiency,
    ThemeKey::Productivity,
    ThemeKey::Prediction,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValueTrajectory {
    pub heading: String,
    pub title: String,
    pub summary: String,
    pub chart_title: String,
    pub chart_summary: String,
    pub axis_label: String,
    pub domain: [f64; 2],
    pub series: Vec<TrajectorySeries>,
    pub points: Vec<TrajectoryPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrajectorySeries {
    pub key: ThemeKey,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrajectoryPoint {
    pub horizon: HorizonKey,
    pub label: String,
    pub efficiency: f64,
    pub productivity: f64,
    pub prediction: f64,
    pub annotation: String,
}

impl TrajectoryPoint {
    #[must_use]
    pub fn value(&self, key: ThemeKey) -> f64 {
        match key {
            ThemeKey::Efficiency => self.efficiency,
            ThemeKey::Productivity => self.productivity,
            ThemeKey::Prediction => self.prediction,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CostImpact {
    pub heading: String,
    pub title: String,
    pub description: String,
    pub factors: Vec<CostFactor>,
    pub chart: CostChart,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CostFactor {
    pub label: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CostChart {
    pub title: String,
    pub summary: String,
    pub x_label: String,
    pub y_label: String,
    pub base: ChartPoint,
    pub manual_future: ChartPoint,
    pub hub_future: ChartPoint,
    pub stages: BTreeMap<HorizonKey, CostStage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CostStage {
    pub label: String,
    pub insight: String,
    pub color: String,
    pub point: ChartPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

fn require(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError(format!("{field} must not be empty")));
    }
    Ok(())
}

impl RoadmapDocument {
    /// Checks the navigation invariant and every non-empty-text rule the
    /// renderer relies on. Violations are fatal at startup.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("roadmap title", &self.title)?;
        require("roadmap strapline", &self.strapline)?;
        require("roadmap intro", &self.intro)?;

        for key in HORIZON_KEYS {
            let horizon = self.horizons.get(&key).ok_or_else(|| {
                ValidationError(format!("horizon {key} referenced by navigation is missing"))
            })?;
            horizon.validate(key)?;
        }
        if self.horizons.len() != HORIZON_KEYS.len() {
            return Err(ValidationError(format!(
                "expected exactly {} horizons, found {}",
                HORIZON_KEYS.len(),
                self.horizons.len()
            )));
        }

        self.trajectory.validate()?;
        self.cost_impact.validate()?;
        Ok(())
    }

    /// Lookup that cannot fail on a validated document.
    #[must_use]
    pub fn horizon(&self, key: HorizonKey) -> &Horizon {
        self.horizons
            .get(&key)
            .expect("validated document covers every horizon key")
    }
}

impl Horizon {
    fn validate(&self, key: HorizonKey) -> Result<(), ValidationError> {
        let ctx = key.as_str();
        require(&format!("{ctx} label"), &self.label)?;
        require(&format!("{ctx} short name"), &self.short)?;
        require(&format!("{ctx} summary"), &self.summary)?;
        require(&format!("{ctx} stage label"), &self.stage.label)?;
        require(&format!("{ctx} stage descriptor"), &self.stage.descriptor)?;
        require(&format!("{ctx} overview narrative"), &self.overview.narrative)?;
        for metric in &self.overview.metrics {
            require(&format!("{ctx} overview metric label"), &metric.label)?;
        }
        for theme in &self.value_themes {
            require(&format!("{ctx} value theme category"), &theme.category)?;
            require(&format!("{ctx} value theme statement"), &theme.statement)?;
        }
        for persona in &self.personas {
            require(&format!("{ctx} persona name"), &persona.name)?;
            require(&format!("{ctx} persona focus"), &persona.focus)?;
            require(&format!("{ctx} persona needs"), &persona.needs)?;
        }
        require(&format!("{ctx} operating model name"), &self.operating_model.name)?;
        require(
            &format!("{ctx} operating model summary"),
            &self.operating_model.summary,
        )?;
        for role in &self.operating_model.roles {
            require(&format!("{ctx} operating model role title"), &role.title)?;
        }
        require(
            &format!("{ctx} technical evolution title"),
            &self.technical_evolution.title,
        )?;
        for pillar in &self.technical_evolution.pillars {
            require(&format!("{ctx} technical pillar label"), &pillar.label)?;
        }
        if let Some(table) = &self.technical_evolution.integration_table {
            require(&format!("{ctx} integration table title"), &table.title)?;
            for row in &table.rows {
                require(
                    &format!("{ctx} integration row functional block"),
                    &row.functional_block,
                )?;
                require(&format!("{ctx} integration row service"), &row.service)?;
            }
        }
        require(&format!("{ctx} experience title"), &self.experience.title)?;
        require(
            &format!("{ctx} experience palette background"),
            &self.experience.palette.background,
        )?;
        require(
            &format!("{ctx} experience palette accent"),
            &self.experience.palette.accent,
        )?;
        require(
            &format!("{ctx} experience palette grid"),
            &self.experience.palette.grid,
        )?;
        require(&format!("{ctx} diagram title"), &self.diagram.title)?;
        require(&format!("{ctx} diagram caption"), &self.diagram.caption)?;
        for cluster in &self.diagram.clusters {
            require(&format!("{ctx} diagram cluster title"), &cluster.title)?;
            for item in &cluster.items {
                require(&format!("{ctx} diagram item title"), &item.title)?;
            }
        }
        for entry in &self.timeline {
            require(&format!("{ctx} timeline entry title"), &entry.title)?;
            require(
                &format!("{ctx} timeline entry description"),
                &entry.description,
            )?;
        }
        Ok(())
    }
}

impl ValueTrajectory {
    fn validate(&self) -> Result<(), ValidationError> {
        require("trajectory title", &self.title)?;
        require("trajectory axis label", &self.axis_label)?;
        let [lo, hi] = self.domain;
        if lo >= hi {
            return Err(ValidationError(format!(
                "trajectory domain [{lo}, {hi}] is not ascending"
            )));
        }
        let mut seen_series = Vec::new();
        for series in &self.series {
            require("trajectory series label", &series.label)?;
            if seen_series.contains(&series.key) {
                return Err(ValidationError(format!(
                    "duplicate trajectory series {:?}",
                    series.key
                )));
            }
            seen_series.push(series.key);
        }
        if seen_series.len() != THEME_KEYS.len() {
            return Err(ValidationError(format!(
                "expected {} trajectory series, found {}",
                THEME_KEYS.len(),
                seen_series.len()
            )));
        }
        let mut seen_points = Vec::new();
        for point in &self.points {
            require("trajectory point label", &point.label)?;
            if seen_points.contains(&point.horizon) {
                return Err(ValidationError(format!(
                    "duplicate trajectory point for {}",
                    point.horizon
                )));
            }
            seen_points.push(point.horizon);
            for key in THEME_KEYS {
                let value = point.value(key);
                if value < lo || value > hi {
                    return Err(ValidationError(format!(
                        "trajectory value {value} for {} outside domain [{lo}, {hi}]",
                        point.horizon
                    )));
                }
            }
        }
        if seen_points.len() != HORIZON_KEYS.len() {
            return Err(ValidationError(format!(
                "expected a trajectory point per horizon, found {}",
                seen_points.len()
            )));
        }
        Ok(())
    }
}

impl CostImpact {
    fn validate(&self) -> Result<(), ValidationError> {
        require("cost impact heading", &self.heading)?;
        require("cost impact title", &self.title)?;
        for factor in &self.factors {
            require("cost impact factor label", &factor.label)?;
        }
        for key in HORIZON_KEYS {
            let stage = self.chart.stages.get(&key).ok_or_else(|| {
                ValidationError(format!("cost impact stage for {key} is missing"))
            })?;
            require("cost impact stage label", &stage.label)?;
            require("cost impact stage insight", &stage.insight)?;
            require("cost impact stage color", &stage.color)?;
        }
        Ok(())
    }
}
