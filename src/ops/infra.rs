use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::model::{InfraConfig, InfraSnapshot, InfraTab};

/// Error from a snapshot source
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("{source_name} unavailable: {reason}")]
    Unavailable {
        source_name: &'static str,
        reason: String,
    },
}

/// Where the dashboard gets its data from.
///
/// The only implementation is [`MockSource`]; CI, container runtime and host
/// metrics providers would plug in here.
pub trait SnapshotSource {
    fn name(&self) -> &'static str;
    fn fetch(&mut self) -> Result<InfraSnapshot, SourceError>;
}

/// Returns the same placeholder snapshot every time
#[derive(Debug, Default)]
pub struct MockSource;

impl SnapshotSource for MockSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn fetch(&mut self) -> Result<InfraSnapshot, SourceError> {
        Ok(InfraSnapshot::mock())
    }
}

/// Read-only infrastructure view state with a simulated refresh
pub struct InfraDashboard {
    snapshot: InfraSnapshot,
    source: Box<dyn SnapshotSource>,
    active_tab: InfraTab,
    last_updated: DateTime<Local>,
    refresh_delay: Duration,
    /// Deadline of the in-flight refresh, if any
    pending: Option<Instant>,
}

impl InfraDashboard {
    pub fn new(config: &InfraConfig) -> Self {
        Self::with_source(config, Box::new(MockSource))
    }

    pub fn with_source(config: &InfraConfig, mut source: Box<dyn SnapshotSource>) -> Self {
        let snapshot = source.fetch().unwrap_or_else(|e| {
            warn!(error = %e, "initial snapshot fetch failed, using placeholders");
            InfraSnapshot::mock()
        });
        InfraDashboard {
            snapshot,
            source,
            active_tab: InfraTab::default(),
            last_updated: Local::now(),
            refresh_delay: Duration::from_millis(config.refresh_delay_ms),
            pending: None,
        }
    }

    pub fn snapshot(&self) -> &InfraSnapshot {
        &self.snapshot
    }

    pub fn active_tab(&self) -> InfraTab {
        self.active_tab
    }

    pub fn set_tab(&mut self, tab: InfraTab) {
        tracing::debug!(tab = ?tab, "select infra tab");
        self.active_tab = tab;
    }

    pub fn last_updated(&self) -> DateTime<Local> {
        self.last_updated
    }

    pub fn is_refreshing(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a refresh. Returns false (and does nothing) if one is already running.
    pub fn refresh(&mut self, now: Instant) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(now + self.refresh_delay);
        info!(source = self.source.name(), "refresh started");
        true
    }

    /// Complete the in-flight refresh once its delay has elapsed.
    /// Returns true when a refresh finished on this call.
    pub fn tick(&mut self, now: Instant, wall: DateTime<Local>) -> bool {
        match self.pending {
            Some(deadline) if now >= deadline => {
                self.pending = None;
                match self.source.fetch() {
                    Ok(snapshot) => {
                        self.snapshot = snapshot;
                        self.last_updated = wall;
                        info!(source = self.source.name(), "refresh finished");
                    }
                    Err(e) => {
                        warn!(error = %e, "refresh failed, keeping previous snapshot");
                    }
                }
                true
            }
            _ => false,
        }
    }
}
