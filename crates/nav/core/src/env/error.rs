use crate::grid::Position;

/// Failures raised by sensing queries.
///
/// Inside the bounded search these degrade to "no answer"; they never escape
/// a `pathfind` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SenseError {
    #[error("cell {position} is outside the sensing radius")]
    OutOfRange { position: Position },

    #[error("cell {position} is off the map")]
    OffMap { position: Position },
}
