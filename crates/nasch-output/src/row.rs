//! Plain data row types written to CSV.

/// One occupied cell in one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameCellRow {
    pub step:       u64,
    pub cell:       u64,
    pub vehicle_id: u32,
    pub velocity:   u32,
    /// Display hue in `[0, 1)`.
    pub hue:        f64,
}

/// One entry of a metric series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityRow {
    pub step:             u64,
    pub average_velocity: f64,
}
