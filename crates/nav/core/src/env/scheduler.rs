/// Per-step scheduling facts owned by the outer control loop.
pub trait Scheduler {
    /// Remaining compute budget for the current step, counted in primitive
    /// operations and monotonically decreasing within the step.
    fn remaining_budget(&self) -> u32;

    /// Global step counter. Used only to break symmetric ties when choosing
    /// an initial wall-following sense.
    fn step_parity(&self) -> u64;
}
