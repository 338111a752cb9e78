//! Random port - Source of randomness for game tools

/// Uniform random integers, injectable so tools can be tested deterministically
pub trait RandomPort: Send + Sync {
    /// Uniform integer in the inclusive range `min..=max`
    fn gen_range(&self, min: i32, max: i32) -> i32;
}
