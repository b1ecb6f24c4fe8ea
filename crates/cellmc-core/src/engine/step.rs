use crate::core::models::state::SystemState;

/// The outcome of one Monte Carlo step.
///
/// `state` is always a fresh value: the accepted candidate, or a copy of the
/// unchanged current configuration when the move was rejected (the "null
/// move" the driver still appends to keep history and trace aligned).
#[derive(Debug, Clone, PartialEq)]
pub struct McStep {
    pub state: SystemState,
    pub energy: f64,
    pub accepted: bool,
}
