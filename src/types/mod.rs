use serde::{Deserialize, Serialize};

/// Image resource or icon glyph shown at the top of a card
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Media {
    Image { src: String },
    Icon { symbol: String },
}

impl Media {
    pub fn image(src: impl Into<String>) -> Self {
        Self::Image { src: src.into() }
    }

    pub fn icon(symbol: impl Into<String>) -> Self {
        Self::Icon { symbol: symbol.into() }
    }
}

/// The data backing one rendered card
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayRecord {
    #[serde(default)]
    pub media: Option<Media>,
    pub primary_label: String,
    #[serde(default)]
    pub secondary_text: Option<String>,
    #[serde(default)]
    pub value_text: Option<String>,
    #[serde(default)]
    pub achieved: Option<bool>,
    #[serde(default)]
    pub action_label: Option<String>,
}

impl DisplayRecord {
    pub fn new(primary_label: impl Into<String>) -> Self {
        Self {
            primary_label: primary_label.into(),
            ..Default::default()
        }
    }

    pub fn with_media(mut self, media: Media) -> Self {
        self.media = Some(media);
        self
    }

    pub fn with_secondary_text(mut self, text: impl Into<String>) -> Self {
        self.secondary_text = Some(text.into());
        self
    }

    pub fn with_value_text(mut self, value: impl Into<String>) -> Self {
        self.value_text = Some(value.into());
        self
    }

    pub fn with_achieved(mut self, achieved: bool) -> Self {
        self.achieved = Some(achieved);
        self
    }

    pub fn with_action_label(mut self, label: impl Into<String>) -> Self {
        self.action_label = Some(label.into());
        self
    }
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardVariant {
    HeroStat,
    ImpactMetric,
    EsgMetric,
    Badge,
    Product,
    #[default]
    Suggestion,
}

impl CardVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HeroStat => "hero_stat",
            Self::ImpactMetric => "impact_metric",
            Self::EsgMetric => "esg_metric",
            Self::Badge => "badge",
            Self::Product => "product",
            Self::Suggestion => "suggestion",
        }
    }

    /// CSS modifier applied to every card of this variant
    pub fn card_class(&self) -> &'static str {
        match self {
            Self::HeroStat => "item-card--hero",
            Self::ImpactMetric => "item-card--impact",
            Self::EsgMetric => "item-card--esg",
            Self::Badge => "item-card--badge",
            Self::Product => "item-card--product",
            Self::Suggestion => "item-card--suggestion",
        }
    }
}

/// How a collection arranges its cards. Fixed per collection.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CollectionLayout {
    /// Horizontally scrollable strip
    #[default]
    Strip,
    Grid { columns: u8 },
    /// Flex row with a fixed number of equal-width cards
    Row,
}

impl CollectionLayout {
    pub fn container_class(&self) -> String {
        match self {
            Self::Strip => "card-collection card-collection--strip".to_string(),
            Self::Grid { columns } => format!(
                "card-collection card-collection--grid card-collection--cols-{}",
                (*columns).max(1)
            ),
            Self::Row => "card-collection card-collection--row".to_string(),
        }
    }
}

/// One named collection of records as it appears in the catalog
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionSpec {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub variant: CardVariant,
    #[serde(default)]
    pub layout: CollectionLayout,
    #[serde(default)]
    pub records: Vec<DisplayRecord>,
}
