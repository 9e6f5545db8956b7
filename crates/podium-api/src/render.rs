// SPDX-License-Identifier: Apache-2.0

//! The rendering contract: pure mapping from the validated roadmap
//! document onto view models. Total over every horizon/section pair;
//! absent optional content is omitted, never an error.

use crate::views::{
    AxesView, ClusterItemView, ClusterView, CostChartView, CostImpactView, CostStageView,
    DiagramView, ExperienceView, FigureView, FocusArea, HorizonView, ImpactBadge, IntegrationView,
    MetricBadge, NavigatorItem, NumberedHighlight, OperatingView, OverviewView, PersonaCard,
    PersonasView, PillarCard, PreviewView, RoadmapView, RoleCard, RowView, SectionTab, SectionView,
    SeriesView, StageBadge, TargetBand, TechnicalView, TimelineCard, TrajectoryView,
    ValueThemeCard, EMPTY_PERSONAS_NOTICE,
};
use podium_model::{
    Figure, Horizon, HorizonKey, RoadmapDocument, SectionKey, HORIZON_KEYS, SECTION_KEYS,
};

const INTEGRATION_COLUMNS: [&str; 4] = [
    "Functional block",
    "Potential service",
    "Notes",
    "Bill of materials",
];
const INTEGRATION_EMPTY_CELL: &str = "—";

const PREVIEW_WORKSPACE_TITLE: &str = "Primary workspace";
const PREVIEW_WORKSPACE_COPY: &str =
    "Layout rebalances to spotlight the data and tools unlocked in this horizon.";
const PREVIEW_CHIPS: [&str; 3] = ["Adaptive UI", "Data aware", "Consent aligned"];

const TRAJECTORY_TICK_STEP: f64 = 2.0;

#[must_use]
pub fn roadmap_view(document: &RoadmapDocument) -> RoadmapView {
    RoadmapView {
        title: document.title.clone(),
        strapline: document.strapline.clone(),
        intro: document.intro.clone(),
        default_horizon: HorizonKey::H1,
        default_section: SectionKey::DEFAULT,
        navigator: HORIZON_KEYS
            .into_iter()
            .map(|key| navigator_item(document, key))
            .collect(),
    }
}

fn navigator_item(document: &RoadmapDocument, key: HorizonKey) -> NavigatorItem {
    let horizon = document.horizon(key);
    let impact_metric = horizon
        .impact
        .metrics
        .iter()
        .find(|metric| metric.indicator.is_some())
        .or_else(|| horizon.impact.metrics.first());
    NavigatorItem {
        key,
        label: horizon.label.clone(),
        short: horizon.short.clone(),
        summary: horizon.summary.clone(),
        stage: StageBadge {
            theme: horizon.stage.theme,
            label: horizon.stage.label.clone(),
            descriptor: horizon.stage.descriptor.clone(),
        },
        overview_metrics: horizon
            .overview
            .metrics
            .iter()
            .take(2)
            .map(|metric| MetricBadge {
                label: metric.label.clone(),
                value: metric.value.clone(),
            })
            .collect(),
        impact_metric: impact_metric.map(|metric| ImpactBadge {
            label: metric.label.clone(),
            value: metric.value.clone(),
            indicator: metric.indicator,
        }),
    }
}

#[must_use]
pub fn horizon_view(document: &RoadmapDocument, key: HorizonKey) -> HorizonView {
    let horizon = document.horizon(key);
    let mut badges = vec![
        horizon.short.clone(),
        format!("{} personas", horizon.personas.len()),
    ];
    if !horizon.operating_model.enablers.is_empty() {
        badges.push(format!("{} enablers", horizon.operating_model.enablers.len()));
    }
    if !horizon.operating_model.roles.is_empty() {
        badges.push(format!("{} roles", horizon.operating_model.roles.len()));
    }
    HorizonView {
        key,
        title: format!("{}: {}", horizon.label, horizon.short),
        summary: horizon.summary.clone(),
        badges,
        sections: SECTION_KEYS
            .into_iter()
            .map(|section| SectionTab {
                value: section,
                label: section.label().to_string(),
            })
            .collect(),
        default_section: SectionKey::DEFAULT,
        timeline: horizon
            .timeline
            .iter()
            .map(|entry| TimelineCard {
                title: entry.title.clone(),
                description: entry.description.clone(),
                tone: entry.tone,
            })
            .collect(),
        diagram: diagram_view(document, key),
    }
}

/// Pure function of the two keys and the document; defined for all
/// fifteen horizon/section combinations.
#[must_use]
pub fn render(document: &RoadmapDocument, horizon: HorizonKey, section: SectionKey) -> SectionView {
    let slice = document.horizon(horizon);
    match section {
        SectionKey::Overview => SectionView::Overview(overview_view(slice)),
        SectionKey::Personas => SectionView::Personas(personas_view(slice)),
        SectionKey::Operating => SectionView::Operating(operating_view(slice)),
        SectionKey::Technical => SectionView::Technical(technical_view(slice)),
        SectionKey::Experience => SectionView::Experience(experience_view(slice)),
    }
}

fn overview_view(horizon: &Horizon) -> OverviewView {
    OverviewView {
        narrative: horizon.overview.narrative.clone(),
        highlights: horizon.overview.highlights.clone(),
        value_themes: horizon
            .value_themes
            .iter()
            .map(|theme| ValueThemeCard {
                category: theme.category.clone(),
                statement: theme.statement.clone(),
            })
            .collect(),
        focus_areas: horizon
            .overview
            .metrics
            .iter()
            .map(|metric| FocusArea {
                label: metric.label.clone(),
                value: metric.value.clone(),
                details: metric.details.clone(),
                expandable: !metric.details.is_empty(),
            })
            .collect(),
    }
}

fn personas_view(horizon: &Horizon) -> PersonasView {
    let cards: Vec<PersonaCard> = horizon
        .personas
        .iter()
        .map(|persona| PersonaCard {
            name: persona.name.clone(),
            focus: persona.focus.clone(),
            needs: persona.needs.clone(),
        })
        .collect();
    let empty_notice = cards
        .is_empty()
        .then(|| EMPTY_PERSONAS_NOTICE.to_string());
    PersonasView {
        target: TargetBand {
            users: horizon.persona_target.users.clone(),
            organizations: horizon.persona_target.organizations.clone(),
            summary: horizon.persona_target.summary.clone(),
        },
        cards,
        empty_notice,
    }
}

fn operating_view(horizon: &Horizon) -> OperatingView {
    let model = &horizon.operating_model;
    OperatingView {
        name: model.name.clone(),
        summary: model.summary.clone(),
        roles: model
            .roles
            .iter()
            .map(|role| RoleCard {
                title: role.title.clone(),
                detail: role.detail.clone(),
                allocation: role.allocation.clone(),
            })
            .collect(),
        figure: model.figure.as_ref().map(figure_view),
        enablers: model.enablers.clone(),
    }
}

fn technical_view(horizon: &Horizon) -> TechnicalView {
    let technical = &horizon.technical_evolution;
    TechnicalView {
        title: technical.title.clone(),
        description: technical.description.clone(),
        figure: technical.figure.as_ref().map(figure_view),
        pillars: technical
            .pillars
            .iter()
            .map(|pillar| PillarCard {
                label: pillar.label.clone(),
                detail: pillar.detail.clone(),
            })
            .collect(),
        integration: technical.integration_table.as_ref().map(|table| {
            IntegrationView {
                title: table.title.clone(),
                prompt: format!(
                    "Drill into the {} stack across functional blocks, preferred services, and delivery notes.",
                    horizon.label
                ),
                columns: INTEGRATION_COLUMNS.iter().map(|c| (*c).to_string()).collect(),
                rows: table
                    .rows
                    .iter()
                    .map(|row| RowView {
                        functional_block: row.functional_block.clone(),
                        service: row.service.clone(),
                        notes: row
                            .notes
                            .clone()
                            .unwrap_or_else(|| INTEGRATION_EMPTY_CELL.to_string()),
                        bom: row.bom.clone(),
                    })
                    .collect(),
            }
        }),
    }
}

fn experience_view(horizon: &Horizon) -> ExperienceView {
    let experience = &horizon.experience;
    ExperienceView {
        title: experience.title.clone(),
        description: experience.description.clone(),
        highlights: experience
            .highlights
            .iter()
            .enumerate()
            .map(|(index, text)| NumberedHighlight {
                index: index + 1,
                text: text.clone(),
            })
            .collect(),
        palette: experience.palette.clone(),
        preview: PreviewView {
            workspace_title: PREVIEW_WORKSPACE_TITLE.to_string(),
            workspace_copy: PREVIEW_WORKSPACE_COPY.to_string(),
            featured: experience.highlights.iter().take(2).cloned().collect(),
            chips: PREVIEW_CHIPS.iter().map(|c| (*c).to_string()).collect(),
        },
    }
}

fn figure_view(figure: &Figure) -> FigureView {
    FigureView {
        src: figure.src.clone(),
        alt: figure.alt.clone(),
    }
}

#[must_use]
pub fn diagram_view(document: &RoadmapDocument, key: HorizonKey) -> DiagramView {
    let diagram = &document.horizon(key).diagram;
    DiagramView {
        title: diagram.title.clone(),
        caption: diagram.caption.clone(),
        axes: diagram.axes.as_ref().map(|axes| AxesView {
            horizontal: axes.horizontal.clone(),
            vertical: axes.vertical.clone(),
            summary: axes.summary.clone(),
        }),
        clusters: diagram
            .clusters
            .iter()
            .enumerate()
            .map(|(index, cluster)| ClusterView {
                title: cluster.title.clone(),
                tone: cluster.tone,
                caption: cluster.caption.clone(),
                count_label: format!("{} sources", cluster.items.len()),
                open: index == 0,
                items: cluster
                    .items
                    .iter()
                    .map(|item| ClusterItemView {
                        title: item.title.clone(),
                        detail: item.detail.clone(),
                        status: item.status,
                        status_label: item.status.label().to_string(),
                        tags: item.tags.clone(),
                        metadata: item.metadata.clone(),
                    })
                    .collect(),
            })
            .collect(),
        footer_note: diagram.footer_note.clone(),
    }
}

#[must_use]
pub fn trajectory_view(document: &RoadmapDocument) -> TrajectoryView {
    let trajectory = &document.trajectory;
    let [lo, hi] = trajectory.domain;
    let mut ticks = Vec::new();
    let mut tick = lo;
    while tick <= hi {
        ticks.push(tick);
        tick += TRAJECTORY_TICK_STEP;
    }
    TrajectoryView {
        heading: trajectory.heading.clone(),
        title: trajectory.title.clone(),
        summary: trajectory.summary.clone(),
        chart_title: trajectory.chart_title.clone(),
        chart_summary: trajectory.chart_summary.clone(),
        axis_label: trajectory.axis_label.clone(),
        domain: trajectory.domain,
        ticks,
        series: trajectory
            .series
            .iter()
            .map(|series| SeriesView {
                key: series.key,
                label: series.label.clone(),
            })
            .collect(),
        points: trajectory.points.clone(),
    }
}

#[must_use]
pub fn cost_impact_view(document: &RoadmapDocument, key: HorizonKey) -> CostImpactView {
    let cost = &document.cost_impact;
    let stage = cost
        .chart
        .stages
        .get(&key)
        .expect("validated document covers every cost stage");
    CostImpactView {
        heading: cost.heading.clone(),
        title: cost.title.clone(),
        description: cost.description.clone(),
        factors: cost
            .factors
            .iter()
            .map(|factor| PillarCard {
                label: factor.label.clone(),
                detail: factor.detail.clone(),
            })
            .collect(),
        chart: CostChartView {
            title: cost.chart.title.clone(),
            summary: cost.chart.summary.clone(),
            x_label: cost.chart.x_label.clone(),
            y_label: cost.chart.y_label.clone(),
            base: cost.chart.base,
            manual_future: cost.chart.manual_future,
            hub_future: cost.chart.hub_future,
            stage: CostStageView {
                key,
                label: stage.label.clone(),
                insight: stage.insight.clone(),
                color: stage.color.clone(),
                point: stage.point,
            },
        },
    }
}
