/// Config of the solver.
///
/// Config never changes the order in which states are visited,
/// it only controls what the solver records about the search.
#[derive(Clone, Debug, Default)]
pub struct SolverConfig {
    /// Record search events into [`crate::search::log::Log`].
    pub record_events: bool,

    /// Max number of recorded events, later events are dropped.
    pub max_events: Option<usize>,
}

impl SolverConfig {
    /// Do not record events, only counters.
    pub fn silent() -> Self {
        SolverConfigBuilder::new().build()
    }

    /// Record every event.
    pub fn verbose() -> Self {
        SolverConfigBuilder::new().record_events(true).build()
    }

    pub(crate) fn may_record(&self, recorded: usize) -> bool {
        self.record_events && recorded < self.max_events.unwrap_or(usize::MAX)
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Represents builder for the solver config [`SolverConfig`].
#[derive(Default)]
pub struct SolverConfigBuilder {
    record_events: bool,
    max_events: Option<usize>,
}

impl SolverConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_events(mut self, record_events: bool) -> Self {
        self.record_events = record_events;
        self
    }

    pub fn max_events(mut self, max_events: usize) -> Self {
        self.max_events = Some(max_events);
        self
    }

    pub fn build(self) -> SolverConfig {
        SolverConfig {
            record_events: self.record_events,
            max_events: self.max_events,
        }
    }
}
