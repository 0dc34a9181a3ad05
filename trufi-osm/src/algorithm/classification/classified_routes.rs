use crate::model::route::{DiagnosticLog, RouteFeature, StopNameTable};

/// result of classifying every candidate route of a run.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedRoutes {
    /// accepted routes, ordered by relation id.
    pub features: Vec<RouteFeature>,
    /// merged and finalized stop name candidates.
    pub stop_names: StopNameTable,
    /// sorted by route ref.
    pub log: DiagnosticLog,
}
