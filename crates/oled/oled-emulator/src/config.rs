//! Emulator configuration

/// Configuration for an emulated display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmulatorConfig {
    /// Upscaling factor for exported frames (1 = one image pixel per display pixel)
    pub scale: u32,
    /// What happens to pixel writes outside the plane
    pub bounds_policy: BoundsPolicy,
}

impl EmulatorConfig {
    /// Default configuration: 4x export scaling, silent clipping
    pub const DEFAULT: Self = Self {
        scale: 4,
        bounds_policy: BoundsPolicy::Silent,
    };

    /// No upscaling (1:1 pixel mapping), silent clipping
    pub const NATIVE: Self = Self {
        scale: 1,
        bounds_policy: BoundsPolicy::Silent,
    };

    /// 1:1 export with clipped writes counted, for tests hunting off-screen draws
    pub const TRACKED: Self = Self {
        scale: 1,
        bounds_policy: BoundsPolicy::Track,
    };
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Handling of pixel writes that fall outside the plane
///
/// Neither policy ever fails a draw call; firmware rendering loops rely on
/// off-screen pixels being dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsPolicy {
    /// Drop the write without a trace (device behavior)
    #[default]
    Silent,
    /// Drop the write, count it and emit a `trace` event
    Track,
}
