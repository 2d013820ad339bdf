use serde::{Deserialize, Serialize};

use super::category::cycle;

/// Planner panels. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlannerTab {
    #[default]
    Schedule,
    Priority,
    Goals,
}

impl PlannerTab {
    pub const ALL: [PlannerTab; 3] = [PlannerTab::Schedule, PlannerTab::Priority, PlannerTab::Goals];

    pub fn label(self) -> &'static str {
        match self {
            PlannerTab::Schedule => "Schedule",
            PlannerTab::Priority => "Priority Matrix",
            PlannerTab::Goals => "Goal Board",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> PlannerTab {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> PlannerTab {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

/// Infrastructure dashboard panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfraTab {
    #[default]
    Overview,
    Jenkins,
    Docker,
    Monitoring,
    Metrics,
}

impl InfraTab {
    pub const ALL: [InfraTab; 5] = [
        InfraTab::Overview,
        InfraTab::Jenkins,
        InfraTab::Docker,
        InfraTab::Monitoring,
        InfraTab::Metrics,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InfraTab::Overview => "Overview",
            InfraTab::Jenkins => "Jenkins CI/CD",
            InfraTab::Docker => "Docker Containers",
            InfraTab::Monitoring => "System Monitoring",
            InfraTab::Metrics => "Performance Metrics",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> InfraTab {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> InfraTab {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_tabs() {
        assert_eq!(PlannerTab::default(), PlannerTab::Schedule);
        assert_eq!(InfraTab::default(), InfraTab::Overview);
    }

    #[test]
    fn tabs_cycle_both_ways() {
        assert_eq!(PlannerTab::Goals.next(), PlannerTab::Schedule);
        assert_eq!(PlannerTab::Schedule.prev(), PlannerTab::Goals);
        assert_eq!(InfraTab::Metrics.next(), InfraTab::Overview);
        assert_eq!(InfraTab::Overview.prev(), InfraTab::Metrics);
    }

    #[test]
    fn index_matches_position() {
        for (i, tab) in InfraTab::ALL.iter().enumerate() {
            assert_eq!(tab.index(), i);
        }
        assert_eq!(PlannerTab::Goals.index(), 2);
    }
}
