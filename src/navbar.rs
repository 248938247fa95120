use crate::config::InteractionConfig;

pub const SCROLLED_CLASS: &str = "scrolled";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarState {
    pub scrolled: bool,
    pub hidden: bool,
}

impl NavbarState {
    pub fn background(self) -> &'static str {
        if self.scrolled {
            "rgba(255, 255, 255, 0.98)"
        } else {
            "rgba(255, 255, 255, 0.95)"
        }
    }

    pub fn backdrop_filter(self) -> &'static str {
        if self.scrolled {
            "blur(15px)"
        } else {
            "blur(10px)"
        }
    }

    pub fn box_shadow(self) -> &'static str {
        if self.scrolled {
            "0 4px 30px rgba(0, 0, 0, 0.15)"
        } else {
            "0 2px 20px rgba(0, 0, 0, 0.1)"
        }
    }

    pub fn transform(self) -> &'static str {
        if self.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }
}

#[derive(Clone, Debug)]
pub struct NavbarController {
    last_offset: f64,
    scrolled_threshold: f64,
    hide_threshold: f64,
}

impl NavbarController {
    pub fn new(config: &InteractionConfig) -> Self {
        Self {
            last_offset: 0.0,
            scrolled_threshold: config.scrolled_threshold_px,
            hide_threshold: config.hide_threshold_px,
        }
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    pub fn evaluate(&mut self, offset: f64) -> NavbarState {
        let state = NavbarState {
            scrolled: offset > self.scrolled_threshold,
            hidden: offset > self.last_offset && offset > self.hide_threshold,
        };
        self.last_offset = offset;
        state
    }
}
