//! View-selection state for one dashboard session.
//!
//! The session is a value: every transition consumes the old state and
//! returns the new one. Nothing here touches profile data.
//!
//! ## Transitions
//!
//! ```text
//! Dashboard -> (History | EffortBreakdown) -> Dashboard
//! no sheet -> (Effort | Level | Highlight) -> no sheet
//! ```

use serde::{Deserialize, Serialize};

use crate::profile::{mock_user_free, mock_user_paid, Highlight, UserProfile};
use crate::progression::carousel_index;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    Dashboard,
    History,
    EffortBreakdown,
}

/// Bottom sheet overlaid on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sheet {
    Effort,
    Level,
    Highlight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionAction {
    Navigate(Screen),
    /// Return to the dashboard from a sub-screen.
    Back,
    OpenSheet(Sheet),
    /// Select a highlight by id and open its sheet.
    SelectHighlight(String),
    /// Close the sheet and clear any highlight selection.
    CloseSheet,
    TogglePaid,
    /// Membership carousel scrolled to this horizontal offset.
    ScrollTiers(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSession {
    pub screen: Screen,
    pub sheet: Option<Sheet>,
    pub selected_highlight: Option<String>,
    pub is_paid: bool,
    pub tier_index: usize,
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self::new(true)
    }
}

impl DashboardSession {
    pub fn new(is_paid: bool) -> Self {
        Self {
            screen: Screen::Dashboard,
            sheet: None,
            selected_highlight: None,
            is_paid,
            tier_index: 0,
        }
    }

    /// Apply one transition.
    pub fn apply(self, action: SessionAction) -> Self {
        tracing::trace!(?action, "session transition");
        match action {
            SessionAction::Navigate(screen) => Self { screen, ..self },
            SessionAction::Back => Self {
                screen: Screen::Dashboard,
                ..self
            },
            SessionAction::OpenSheet(sheet) => Self {
                sheet: Some(sheet),
                ..self
            },
            SessionAction::SelectHighlight(id) => Self {
                sheet: Some(Sheet::Highlight),
                selected_highlight: Some(id),
                ..self
            },
            SessionAction::CloseSheet => Self {
                sheet: None,
                selected_highlight: None,
                ..self
            },
            SessionAction::TogglePaid => Self {
                is_paid: !self.is_paid,
                ..self
            },
            SessionAction::ScrollTiers(offset) => Self {
                tier_index: carousel_index(offset),
                ..self
            },
        }
    }

    /// Apply a sequence of transitions in order.
    pub fn apply_all(self, actions: impl IntoIterator<Item = SessionAction>) -> Self {
        actions.into_iter().fold(self, Self::apply)
    }

    /// Sample profile chosen by the paid flag.
    pub fn active_profile(&self) -> UserProfile {
        if self.is_paid {
            mock_user_paid()
        } else {
            mock_user_free()
        }
    }

    /// The selected highlight, if it exists in `profile`.
    pub fn selected_in<'a>(&self, profile: &'a UserProfile) -> Option<&'a Highlight> {
        let id = self.selected_highlight.as_deref()?;
        profile.highlights.iter().find(|h| h.id == id)
    }
}
