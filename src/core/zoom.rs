//! Editor font size shared by every tab

/// Smallest font size zooming out can reach
pub const MIN_FONT_SIZE: u32 = 6;

/// Change applied by one zoom step
pub const ZOOM_STEP: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomLevel(u32);

impl ZoomLevel {
    /// Start at `size`, raised to the floor if below it
    pub fn new(size: u32) -> Self {
        Self(size.max(MIN_FONT_SIZE))
    }

    pub fn size(self) -> u32 {
        self.0
    }

    /// Size in egui points
    pub fn points(self) -> f32 {
        self.0 as f32
    }

    pub fn zoom_in(&mut self) {
        self.0 = self.0.saturating_add(ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.0 = self.0.saturating_sub(ZOOM_STEP).max(MIN_FONT_SIZE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_steps() {
        let mut zoom = ZoomLevel::new(12);
        for _ in 0..3 {
            zoom.zoom_in();
        }
        zoom.zoom_out();
        assert_eq!(zoom.size(), 12 + 2 * (3 - 1));
    }

    #[test]
    fn test_zoom_out_floor() {
        let mut zoom = ZoomLevel::new(12);
        for _ in 0..10 {
            zoom.zoom_out();
        }
        assert_eq!(zoom.size(), MIN_FONT_SIZE);
    }

    #[test]
    fn test_odd_size_does_not_drop_below_floor() {
        let mut zoom = ZoomLevel::new(7);
        zoom.zoom_out();
        assert_eq!(zoom.size(), 6);
    }

    #[test]
    fn test_initial_size_clamped() {
        assert_eq!(ZoomLevel::new(2).size(), MIN_FONT_SIZE);
    }

    #[test]
    fn test_no_ceiling() {
        let mut zoom = ZoomLevel::new(12);
        for _ in 0..100 {
            zoom.zoom_in();
        }
        assert_eq!(zoom.size(), 212);
    }
}
