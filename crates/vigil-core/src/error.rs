/// Errors raised when a configuration value cannot drive the camera.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("viewport size must be positive, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("{name} must be non-negative, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("fade threshold {threshold} must lie within [0, {max_duration}]")]
    FadeThresholdOutOfRange { threshold: f32, max_duration: f32 },

    #[error("slot count must be at least 1")]
    NoSlots,
}
