use std::time::Instant;

pub struct TimeEstimation;

impl TimeEstimation {
    /// Run an action and return its result with the elapsed milliseconds.
    pub fn estimate<T, F: FnOnce() -> T>(action: F) -> (T, u128) {
        let start = Instant::now();
        let result = action();

        (result, start.elapsed().as_millis())
    }
}
