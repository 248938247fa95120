use crate::{
    config::InteractionConfig,
    navbar::{NavbarController, NavbarState},
    navigation::{active_section, SectionBand},
};

pub const SCROLL_TOP_LABEL: &str = "↑";
pub const SCROLL_TOP_BASE_STYLE: &str = "position: fixed; bottom: 2rem; right: 2rem; \
     width: 50px; height: 50px; background: var(--primary-color); color: white; \
     border: none; border-radius: 50%; font-size: 1.2rem; cursor: pointer; \
     transition: var(--transition); z-index: 999; box-shadow: var(--shadow-lg);";

pub fn scroll_top_style(visible: bool) -> String {
    let (opacity, visibility) = if visible {
        ("1", "visible")
    } else {
        ("0", "hidden")
    };
    format!("{SCROLL_TOP_BASE_STYLE} opacity: {opacity}; visibility: {visibility};")
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollFrame {
    pub navbar: NavbarState,
    pub scroll_top_visible: bool,
    pub active_section: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ScrollController {
    navbar: NavbarController,
    scroll_top_threshold: f64,
    section_lead: f64,
}

impl ScrollController {
    pub fn new(config: &InteractionConfig) -> Self {
        Self {
            navbar: NavbarController::new(config),
            scroll_top_threshold: config.scroll_top_threshold_px,
            section_lead: config.section_lead_px,
        }
    }

    pub fn on_scroll(&mut self, offset: f64, sections: &[SectionBand]) -> ScrollFrame {
        ScrollFrame {
            navbar: self.navbar.evaluate(offset),
            scroll_top_visible: offset > self.scroll_top_threshold,
            active_section: active_section(offset, sections, self.section_lead)
                .map(ToString::to_string),
        }
    }
}
