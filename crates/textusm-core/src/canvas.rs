//! Hypothesis canvas sections.

use std::fmt;

/// One cell of a hypothesis canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanvasSection {
    Purpose,
    Vision,
    Means,
    Advantage,
    Metrics,
    ValueProposition,
    ObviousProblem,
    LatentProblem,
    Alternatives,
    Situation,
    Channel,
    Trend,
    RevenueModel,
    MarketSize,
}

impl CanvasSection {
    /// Every section in canonical order.
    ///
    /// Heading lookup walks this list and stops at the first title match.
    pub const ALL: [CanvasSection; 14] = [
        Self::Purpose,
        Self::Vision,
        Self::Means,
        Self::Advantage,
        Self::Metrics,
        Self::ValueProposition,
        Self::ObviousProblem,
        Self::LatentProblem,
        Self::Alternatives,
        Self::Situation,
        Self::Channel,
        Self::Trend,
        Self::RevenueModel,
        Self::MarketSize,
    ];

    /// Section title as written in canvas headings.
    pub fn title(self) -> &'static str {
        match self {
            Self::Purpose => "目的",
            Self::Vision => "ビジョン",
            Self::Means => "実現手段",
            Self::Advantage => "優位性",
            Self::Metrics => "指標",
            Self::ValueProposition => "提案価値",
            Self::ObviousProblem => "顕在課題",
            Self::LatentProblem => "潜在課題",
            Self::Alternatives => "代替手段",
            Self::Situation => "状況",
            Self::Channel => "チャネル",
            Self::Trend => "傾向",
            Self::RevenueModel => "収益モデル",
            Self::MarketSize => "市場規模",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Purpose => "🎯",
            Self::Vision => "🔭",
            Self::Means => "🔧",
            Self::Advantage => "💪",
            Self::Metrics => "📊",
            Self::ValueProposition => "💎",
            Self::ObviousProblem => "❗",
            Self::LatentProblem => "❓",
            Self::Alternatives => "🔄",
            Self::Situation => "👥",
            Self::Channel => "🚚",
            Self::Trend => "📈",
            Self::RevenueModel => "💰",
            Self::MarketSize => "🌐",
        }
    }

    /// Stable camelCase key used by canvas renderers.
    pub fn key(self) -> &'static str {
        match self {
            Self::Purpose => "purpose",
            Self::Vision => "vision",
            Self::Means => "means",
            Self::Advantage => "advantage",
            Self::Metrics => "metrics",
            Self::ValueProposition => "valueProposition",
            Self::ObviousProblem => "obviousProblem",
            Self::LatentProblem => "latentProblem",
            Self::Alternatives => "alternatives",
            Self::Situation => "situation",
            Self::Channel => "channel",
            Self::Trend => "trend",
            Self::RevenueModel => "revenueModel",
            Self::MarketSize => "marketSize",
        }
    }

    /// Finds the first section whose title occurs in `heading`.
    pub fn from_heading(heading: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| heading.contains(section.title()))
    }
}

impl fmt::Display for CanvasSection {
    /// Formats as `"<emoji> <title>"`, the heading form used in templates.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.title())
    }
}
