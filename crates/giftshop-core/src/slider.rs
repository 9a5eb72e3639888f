//! Horizontal slider state.
//!
//! The slider moves its item strip by a fixed step so that the whole
//! overflow is covered in a configured number of clicks. Offsets are in
//! pixels and never positive: `0` shows the start of the strip and
//! `-overflow` its end.

/// Click counts and the breakpoint that switches between them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderConfig {
    /// Clicks to traverse the strip on wide viewports
    pub clicks: u32,
    /// Clicks to traverse the strip at or below `max_mobile_width`
    pub clicks_mobile: u32,
    /// Breakpoint in pixels
    pub max_mobile_width: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            clicks: 3,
            clicks_mobile: 6,
            max_mobile_width: 768.0,
        }
    }
}

impl SliderConfig {
    pub fn clicks_for(&self, viewport_width: f64) -> u32 {
        if viewport_width <= self.max_mobile_width {
            self.clicks_mobile
        } else {
            self.clicks
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SliderState {
    overflow: f64,
    clicks: u32,
    offset: f64,
}

impl SliderState {
    /// Measure a slider: `content_width` of the strip (including padding)
    /// against `viewport_width` of the visible window
    pub fn measure(config: &SliderConfig, content_width: f64, viewport_width: f64) -> Self {
        Self {
            overflow: (content_width - viewport_width).max(0.0),
            clicks: config.clicks_for(viewport_width).max(1),
            offset: 0.0,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn overflow(&self) -> f64 {
        self.overflow
    }

    /// Pixels moved per click
    pub fn step(&self) -> f64 {
        (self.overflow / f64::from(self.clicks)).ceil()
    }

    /// Reveal content towards the start of the strip
    pub fn scroll_left(&mut self) {
        self.offset = (self.offset + self.step()).min(0.0);
    }

    /// Reveal content towards the end of the strip
    pub fn scroll_right(&mut self) {
        self.offset = (self.offset - self.step()).max(-self.overflow);
    }

    /// Back to the start, used after the viewport is resized
    pub fn reset(&mut self) {
        self.offset = 0.0;
    }

    pub fn at_start(&self) -> bool {
        self.offset >= 0.0
    }

    pub fn at_end(&self) -> bool {
        self.offset.abs() >= self.overflow
    }

    /// Inline style positioning the strip
    pub fn style(&self) -> String {
        format!("left: {}px;", self.offset)
    }
}
