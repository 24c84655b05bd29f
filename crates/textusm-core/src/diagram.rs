//! The catalogue of diagram types.
//!
//! Every diagram kind the editor understands is a [`DiagramType`] variant.
//! The per-kind data (display label, renderer identifier, starter template,
//! export viewport) lives in `match` tables on the enum, so it is immutable
//! and shared by the whole process.

mod templates;

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// Error returned when a string names no known diagram type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown diagram type `{0}`")]
pub struct UnknownDiagramType(pub String);

/// Default raster viewport used when a diagram type has no dedicated size.
pub const DEFAULT_EXPORT_SIZE: (u32, u32) = (1024, 1024);

/// A supported diagram kind.
///
/// # Examples
///
/// ```
/// # use textusm_core::diagram::DiagramType;
/// let kind: DiagramType = "mmp".parse().unwrap();
/// assert_eq!(kind, DiagramType::MindMap);
/// assert_eq!(kind.renderer_name(), "MindMap");
/// assert_eq!(kind.enabled_language(), DiagramType::UserStoryMap);
///
/// let kind: DiagramType = "business_model_canvas".parse().unwrap();
/// assert_eq!(kind.code(), "bmc");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum DiagramType {
    #[default]
    UserStoryMap,
    Table,
    EmpathyMap,
    ImpactMap,
    MindMap,
    SiteMap,
    BusinessModelCanvas,
    OpportunityCanvas,
    HypothesisCanvas,
    UserPersona,
    GanttChart,
    ErDiagram,
    SequenceDiagram,
    UseCaseDiagram,
    Kanban,
    Kpt,
    StartStopContinue,
    FourLs,
    Freeform,
    KeyboardLayout,
}

impl DiagramType {
    /// Every diagram type, in catalogue order.
    pub const ALL: [DiagramType; 20] = [
        Self::UserStoryMap,
        Self::Table,
        Self::EmpathyMap,
        Self::ImpactMap,
        Self::MindMap,
        Self::SiteMap,
        Self::BusinessModelCanvas,
        Self::OpportunityCanvas,
        Self::HypothesisCanvas,
        Self::UserPersona,
        Self::GanttChart,
        Self::ErDiagram,
        Self::SequenceDiagram,
        Self::UseCaseDiagram,
        Self::Kanban,
        Self::Kpt,
        Self::StartStopContinue,
        Self::FourLs,
        Self::Freeform,
        Self::KeyboardLayout,
    ];

    /// Short code used in file names and editor settings.
    pub fn code(self) -> &'static str {
        match self {
            Self::UserStoryMap => "usm",
            Self::Table => "table",
            Self::EmpathyMap => "emm",
            Self::ImpactMap => "imm",
            Self::MindMap => "mmp",
            Self::SiteMap => "smp",
            Self::BusinessModelCanvas => "bmc",
            Self::OpportunityCanvas => "opc",
            Self::HypothesisCanvas => "hpc",
            Self::UserPersona => "persona",
            Self::GanttChart => "gct",
            Self::ErDiagram => "erd",
            Self::SequenceDiagram => "sed",
            Self::UseCaseDiagram => "ucd",
            Self::Kanban => "kanban",
            Self::Kpt => "kpt",
            Self::StartStopContinue => "ssc",
            Self::FourLs => "4ls",
            Self::Freeform => "free",
            Self::KeyboardLayout => "kbd",
        }
    }

    /// Human readable title.
    pub fn label(self) -> &'static str {
        match self {
            Self::UserStoryMap => "User Story Map",
            Self::Table => "Table",
            Self::EmpathyMap => "Empathy Map",
            Self::ImpactMap => "Impact Map",
            Self::MindMap => "Mind Map",
            Self::SiteMap => "Site Map",
            Self::BusinessModelCanvas => "Business Model Canvas",
            Self::OpportunityCanvas => "Opportunity Canvas",
            Self::HypothesisCanvas => "Hypothesis Canvas",
            Self::UserPersona => "User Persona",
            Self::GanttChart => "Gantt Chart",
            Self::ErDiagram => "ER Diagram",
            Self::SequenceDiagram => "Sequence Diagram",
            Self::UseCaseDiagram => "Use Case Diagram",
            Self::Kanban => "Kanban",
            Self::Kpt => "KPT Retrospective",
            Self::StartStopContinue => "Start, Stop, Continue Retrospective",
            Self::FourLs => "4Ls Retrospective",
            Self::Freeform => "Freeform",
            Self::KeyboardLayout => "Keyboard Layout",
        }
    }

    /// Identifier the renderer uses to select a layout.
    pub fn renderer_name(self) -> &'static str {
        match self {
            Self::UserStoryMap => "UserStoryMap",
            Self::Table => "Table",
            Self::EmpathyMap => "EmpathyMap",
            Self::ImpactMap => "ImpactMap",
            Self::MindMap => "MindMap",
            Self::SiteMap => "SiteMap",
            Self::BusinessModelCanvas => "BusinessModelCanvas",
            Self::OpportunityCanvas => "OpportunityCanvas",
            Self::HypothesisCanvas => "HypothesisCanvas",
            Self::UserPersona => "UserPersona",
            Self::GanttChart => "GanttChart",
            Self::ErDiagram => "ER",
            Self::SequenceDiagram => "SequenceDiagram",
            Self::UseCaseDiagram => "UseCaseDiagram",
            Self::Kanban => "Kanban",
            Self::Kpt => "Kpt",
            Self::StartStopContinue => "StartStopContinue",
            Self::FourLs => "4Ls",
            Self::Freeform => "Freeform",
            Self::KeyboardLayout => "KeyboardLayout",
        }
    }

    /// The diagram type whose editor language features apply to this one.
    ///
    /// Canvas-like kinds carry their own language, everything else shares
    /// the user story map language.
    pub fn enabled_language(self) -> DiagramType {
        match self {
            Self::BusinessModelCanvas
            | Self::OpportunityCanvas
            | Self::HypothesisCanvas
            | Self::FourLs
            | Self::EmpathyMap
            | Self::Table => self,
            _ => Self::UserStoryMap,
        }
    }

    /// Long snake-case name accepted on the command line.
    pub fn cli_name(self) -> &'static str {
        match self {
            Self::UserStoryMap => "user_story_map",
            Self::Table => "table",
            Self::EmpathyMap => "empathy_map",
            Self::ImpactMap => "impact_map",
            Self::MindMap => "mind_map",
            Self::SiteMap => "site_map",
            Self::BusinessModelCanvas => "business_model_canvas",
            Self::OpportunityCanvas => "opportunity_canvas",
            Self::HypothesisCanvas => "hypothesis_canvas",
            Self::UserPersona => "userpersona",
            Self::GanttChart => "gantt_chart",
            Self::ErDiagram => "er_diagram",
            Self::SequenceDiagram => "sequence_diagram",
            Self::UseCaseDiagram => "use_case_diagram",
            Self::Kanban => "kanban",
            Self::Kpt => "kpt",
            Self::StartStopContinue => "start_stop_continue",
            Self::FourLs => "4ls",
            Self::Freeform => "free_form",
            Self::KeyboardLayout => "keyboard_layout",
        }
    }

    /// Default raster viewport `(width, height)` in pixels.
    pub fn export_size(self) -> (u32, u32) {
        match self {
            Self::BusinessModelCanvas | Self::OpportunityCanvas => (1500, 940),
            Self::UserPersona => (1500, 640),
            Self::EmpathyMap | Self::Kpt => (1200, 640),
            Self::FourLs => (1250, 1250),
            Self::StartStopContinue => (900, 350),
            _ => DEFAULT_EXPORT_SIZE,
        }
    }

    /// Starter outline shown when a new diagram of this type is created.
    ///
    /// Empty for the impact map and freeform kinds.
    pub fn template(self) -> &'static str {
        match self {
            Self::UserStoryMap => templates::USER_STORY_MAP,
            Self::Table => templates::TABLE,
            Self::EmpathyMap => templates::EMPATHY_MAP,
            Self::ImpactMap => templates::IMPACT_MAP,
            Self::MindMap => templates::MIND_MAP,
            Self::SiteMap => templates::SITE_MAP,
            Self::BusinessModelCanvas => templates::BUSINESS_MODEL_CANVAS,
            Self::OpportunityCanvas => templates::OPPORTUNITY_CANVAS,
            Self::HypothesisCanvas => templates::HYPOTHESIS_CANVAS,
            Self::UserPersona => templates::USER_PERSONA,
            Self::GanttChart => templates::GANTT_CHART,
            Self::ErDiagram => templates::ER_DIAGRAM,
            Self::SequenceDiagram => templates::SEQUENCE_DIAGRAM,
            Self::UseCaseDiagram => templates::USE_CASE_DIAGRAM,
            Self::Kanban => templates::KANBAN,
            Self::Kpt => templates::KPT,
            Self::StartStopContinue => templates::START_STOP_CONTINUE,
            Self::FourLs => templates::FOUR_LS,
            Self::Freeform => templates::FREEFORM,
            Self::KeyboardLayout => templates::KEYBOARD_LAYOUT,
        }
    }
}

impl fmt::Display for DiagramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DiagramType {
    type Err = UnknownDiagramType;

    /// Accepts either the short code (`mmp`) or the CLI name (`mind_map`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == needle || kind.cli_name() == needle)
            .ok_or_else(|| UnknownDiagramType(s.to_string()))
    }
}

impl TryFrom<String> for DiagramType {
    type Error = UnknownDiagramType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
