pub mod volume {
    /// Stored volume on a fresh store.
    pub const DEFAULT_VOLUME: u8 = 100;
    /// Unmute fallback when no nonzero volume is remembered.
    pub const DEFAULT_UNMUTE_VOLUME: u8 = 50;
    /// Keyboard volume step, in percent.
    pub const VOLUME_STEP: f64 = 5.0;
}

pub mod speed {
    pub const SPEED_MIN: f64 = 0.25;
    pub const SPEED_MAX: f64 = 2.0;
    /// Keyboard speed step.
    pub const SPEED_STEP: f64 = 0.25;
}

pub mod shell {
    /// Quiet spell after which fullscreen controls hide.
    pub const CONTROLS_HIDE_DELAY_MS: u64 = 2_500;
}
