//! Achievement highlights: icon metadata, unlock counts and the detail sheet.

use serde::Serialize;

use crate::profile::{Highlight, HighlightIcon, UserProfile};

/// Inventory size shown in the "{unlocked} / {total}" caption. Independent of
/// how many highlights a profile carries.
pub const TOTAL_HIGHLIGHT_SLOTS: usize = 9;

/// Badge colour for locked highlights, whatever their icon.
pub const LOCKED_BADGE_CLASS: &str = "bg-gray-100 text-gray-400 grayscale";

impl HighlightIcon {
    pub const ALL: [HighlightIcon; 7] = [
        HighlightIcon::Crown,
        HighlightIcon::TrendingUp,
        HighlightIcon::Star,
        HighlightIcon::Trophy,
        HighlightIcon::Zap,
        HighlightIcon::Target,
        HighlightIcon::Award,
    ];

    /// Wire tag, e.g. `trending-up`.
    pub fn tag(&self) -> &'static str {
        match self {
            HighlightIcon::Crown => "crown",
            HighlightIcon::TrendingUp => "trending-up",
            HighlightIcon::Star => "star",
            HighlightIcon::Trophy => "trophy",
            HighlightIcon::Zap => "zap",
            HighlightIcon::Target => "target",
            HighlightIcon::Award => "award",
        }
    }

    /// Icon-set glyph name.
    pub fn icon_name(&self) -> &'static str {
        match self {
            HighlightIcon::Crown => "Crown",
            HighlightIcon::TrendingUp => "TrendingUp",
            HighlightIcon::Star => "Star",
            HighlightIcon::Trophy => "Trophy",
            HighlightIcon::Zap => "Zap",
            HighlightIcon::Target => "Target",
            HighlightIcon::Award => "Award",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            HighlightIcon::Crown => "bg-amber-100 text-amber-600",
            HighlightIcon::TrendingUp => "bg-emerald-100 text-emerald-600",
            HighlightIcon::Star => "bg-indigo-100 text-indigo-600",
            HighlightIcon::Trophy => "bg-purple-100 text-purple-600",
            HighlightIcon::Zap => "bg-yellow-100 text-yellow-600",
            HighlightIcon::Target => "bg-rose-100 text-rose-600",
            HighlightIcon::Award => "bg-blue-100 text-blue-600",
        }
    }

    /// Glyph in the detail sheet. Only three icons have their own.
    pub fn emoji(&self) -> &'static str {
        match self {
            HighlightIcon::Crown => "👑",
            HighlightIcon::TrendingUp => "📈",
            HighlightIcon::Star => "⭐️",
            _ => "🏆",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.tag() == tag)
    }
}

impl From<String> for HighlightIcon {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag).unwrap_or_else(|| {
            tracing::warn!(tag = %tag, "unknown highlight icon, using star");
            HighlightIcon::Star
        })
    }
}

impl From<HighlightIcon> for String {
    fn from(icon: HighlightIcon) -> Self {
        icon.tag().to_string()
    }
}

pub fn unlocked_count(highlights: &[Highlight]) -> usize {
    highlights.iter().filter(|h| h.is_unlocked()).count()
}

/// Colour class for a badge tile.
pub fn badge_class(highlight: &Highlight) -> &'static str {
    if highlight.is_unlocked() {
        highlight.icon.badge_class()
    } else {
        LOCKED_BADGE_CLASS
    }
}

/// One tile in the collection grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightBadge {
    pub id: String,
    pub title: String,
    pub icon: &'static str,
    pub color_class: &'static str,
    pub locked: bool,
    /// Date label, or "Tap to see how" while locked
    pub caption: String,
}

impl HighlightBadge {
    pub fn from_highlight(h: &Highlight) -> Self {
        let locked = !h.is_unlocked();
        Self {
            id: h.id.clone(),
            title: h.title.clone(),
            icon: h.icon.icon_name(),
            color_class: badge_class(h),
            locked,
            caption: if locked {
                "Tap to see how".to_string()
            } else {
                h.date_label.clone()
            },
        }
    }
}

/// The "Collection" panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightsPanel {
    pub title: &'static str,
    pub unlocked: usize,
    pub total: usize,
    /// e.g. "3 / 9 unlocked"
    pub summary: String,
    pub badges: Vec<HighlightBadge>,
}

impl HighlightsPanel {
    pub fn build(highlights: &[Highlight], total_slots: usize) -> Self {
        let unlocked = unlocked_count(highlights);
        Self {
            title: "Collection",
            unlocked,
            total: total_slots,
            summary: format!("{unlocked} / {total_slots} unlocked"),
            badges: highlights.iter().map(HighlightBadge::from_highlight).collect(),
        }
    }

    pub fn for_profile(profile: &UserProfile) -> Self {
        Self::build(&profile.highlights, TOTAL_HIGHLIGHT_SLOTS)
    }
}

/// Title of the highlight sheet for the current selection.
pub fn highlight_sheet_title(selected: Option<&Highlight>) -> &'static str {
    match selected {
        Some(h) if h.is_unlocked() => "Why you got this",
        Some(_) => "How to unlock",
        None => "Highlights",
    }
}

/// Body of the highlight sheet when a badge is selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightDetail {
    pub sheet_title: &'static str,
    /// Emoji, or "?" while locked
    pub glyph: &'static str,
    pub title: String,
    pub description: String,
    /// "Earned: {dateLabel}" for unlocked badges
    pub earned_line: Option<String>,
    /// Encouragement shown under locked badges
    pub locked_hint: Option<&'static str>,
}

impl HighlightDetail {
    pub fn of(h: &Highlight) -> Self {
        let unlocked = h.is_unlocked();
        Self {
            sheet_title: highlight_sheet_title(Some(h)),
            glyph: if unlocked { h.icon.emoji() } else { "?" },
            title: h.title.clone(),
            description: h.description.clone(),
            earned_line: unlocked.then(|| format!("Earned: {}", h.date_label)),
            locked_hint: (!unlocked).then_some("Keep learning to unlock this badge!"),
        }
    }
}

/// An entry on the "All Highlights" history screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub date_label: String,
    pub title: String,
    pub description: String,
}

/// The "All Highlights" screen lists every highlight, locked or not.
pub fn history(profile: &UserProfile) -> Vec<HistoryEntry> {
    profile
        .highlights
        .iter()
        .map(|h| HistoryEntry {
            date_label: h.date_label.clone(),
            title: h.title.clone(),
            description: h.description.clone(),
        })
        .collect()
}
