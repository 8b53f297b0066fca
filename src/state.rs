use crate::portfolio::{find_project, PortfolioError, Project};

/// A closed set of tab options. `ALL` defines both membership and display
/// order; the first entry is the initial selection.
pub trait Tab: Copy + PartialEq + Sized + 'static {
    const ALL: &'static [Self];

    fn value(&self) -> &'static str;
    fn label(&self) -> &'static str;

    fn initial() -> Self {
        Self::ALL[0]
    }

    fn try_from_value(value: &str) -> Result<Self, PortfolioError> {
        Self::ALL
            .iter()
            .copied()
            .find(|tab| tab.value() == value)
            .ok_or_else(|| PortfolioError::InvalidSelection(value.to_string()))
    }

    /// Select by string value. Values outside the set leave the current
    /// selection unchanged.
    fn select(self, value: &str) -> Self {
        Self::try_from_value(value).unwrap_or(self)
    }
}

/// Top-level grouping for the skills panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillTab {
    Technical,
    Soft,
}

impl Tab for SkillTab {
    const ALL: &'static [Self] = &[Self::Technical, Self::Soft];

    fn value(&self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Soft => "soft",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Technical => "Technical Skills",
            Self::Soft => "Soft Skills",
        }
    }
}

/// Inner tabs of the project detail overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTab {
    Problem,
    Approach,
    Deliverables,
    Results,
}

impl Tab for DetailTab {
    const ALL: &'static [Self] = &[
        Self::Problem,
        Self::Approach,
        Self::Deliverables,
        Self::Results,
    ];

    fn value(&self) -> &'static str {
        match self {
            Self::Problem => "problem",
            Self::Approach => "approach",
            Self::Deliverables => "deliverables",
            Self::Results => "results",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Problem => "Problem",
            Self::Approach => "Approach",
            Self::Deliverables => "Deliverables",
            Self::Results => "Results",
        }
    }
}

/// Open/closed state of the project detail overlay.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open(String),
}

impl OverlayState {
    /// Open the overlay on `id`. Switching from one open project to another
    /// goes directly to the new target. An id missing from `projects` should
    /// not happen with ids drawn from the same collection; it closes the
    /// overlay and logs a warning instead of panicking.
    pub fn open(self, projects: &[Project], id: &str) -> Self {
        match find_project(projects, id) {
            Ok(project) => Self::Open(project.id.to_string()),
            Err(err) => {
                log::warn!("detail overlay: {err}");
                Self::Closed
            }
        }
    }

    pub fn close(self) -> Self {
        Self::Closed
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn open_id(&self) -> Option<&str> {
        match self {
            Self::Open(id) => Some(id),
            Self::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::FEATURED_PROJECTS;

    #[test]
    fn test_skill_tab_initial_is_technical() {
        assert_eq!(SkillTab::initial(), SkillTab::Technical);
    }

    #[test]
    fn test_select_known_value() {
        let tab = SkillTab::Technical.select("soft");
        assert_eq!(tab, SkillTab::Soft);
    }

    #[test]
    fn test_select_unknown_value_is_noop() {
        let tab = SkillTab::Technical.select("soft").select("bogus");
        assert_eq!(tab, SkillTab::Soft);
    }

    #[test]
    fn test_try_from_value_unknown_is_invalid_selection() {
        let err = SkillTab::try_from_value("bogus").unwrap_err();
        assert_eq!(err, PortfolioError::InvalidSelection("bogus".to_string()));
    }

    #[test]
    fn test_detail_tab_values_round_trip() {
        for tab in DetailTab::ALL {
            assert_eq!(DetailTab::try_from_value(tab.value()), Ok(*tab));
        }
    }

    #[test]
    fn test_overlay_starts_closed() {
        assert_eq!(OverlayState::default(), OverlayState::Closed);
    }

    #[test]
    fn test_overlay_open_known_id() {
        let state = OverlayState::Closed.open(FEATURED_PROJECTS, "analytics-dashboard");
        assert_eq!(state, OverlayState::Open("analytics-dashboard".to_string()));
        assert!(state.is_open());
        assert_eq!(state.open_id(), Some("analytics-dashboard"));
    }

    #[test]
    fn test_overlay_open_switches_target_directly() {
        let state = OverlayState::Closed
            .open(FEATURED_PROJECTS, "analytics-dashboard")
            .open(FEATURED_PROJECTS, "mobile-redesign");
        assert_eq!(state, OverlayState::Open("mobile-redesign".to_string()));
    }

    #[test]
    fn test_overlay_open_unknown_id_closes() {
        let state = OverlayState::Closed
            .open(FEATURED_PROJECTS, "analytics-dashboard")
            .open(FEATURED_PROJECTS, "bogus");
        assert_eq!(state, OverlayState::Closed);
    }

    #[test]
    fn test_overlay_close_is_idempotent() {
        let state = OverlayState::Closed
            .open(FEATURED_PROJECTS, "ecommerce-launch")
            .close()
            .close();
        assert_eq!(state, OverlayState::Closed);
    }
}
