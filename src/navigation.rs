pub const ACTIVE_CLASS: &str = "active";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBand {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBand {
    fn contains(&self, offset: f64, lead: f64) -> bool {
        let start = self.top - lead;
        offset >= start && offset < start + self.height
    }
}

pub fn active_section(offset: f64, sections: &[SectionBand], lead: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| section.contains(offset, lead))
        .map(|section| section.id.as_str())
}

pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn scroll_destination(section_top: f64, header_offset: f64) -> f64 {
    (section_top - header_offset).max(0.0)
}

pub fn active_flags<S: AsRef<str>>(hrefs: &[S], current: Option<&str>) -> Vec<bool> {
    hrefs
        .iter()
        .map(|href| match (anchor_target(href.as_ref()), current) {
            (Some(target), Some(current)) => target == current,
            _ => false,
        })
        .collect()
}

/// Active flag per link after a click. A click whose target is missing
/// leaves no link active.
pub fn click_flags(link_count: usize, clicked: usize, target_found: bool) -> Vec<bool> {
    (0..link_count)
        .map(|index| target_found && index == clicked)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(id: &str, top: f64, height: f64) -> SectionBand {
        SectionBand {
            id: id.to_string(),
            top,
            height,
        }
    }

    fn page() -> Vec<SectionBand> {
        vec![
            band("home", 0.0, 700.0),
            band("about", 700.0, 600.0),
            band("projects", 1_300.0, 900.0),
            band("contact", 2_200.0, 500.0),
        ]
    }

    #[test]
    fn menu_toggles_and_closes() {
        let mut menu = MenuState::default();

        assert!(menu.toggle());
        assert!(!menu.toggle());
        assert!(menu.toggle());
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn section_band_starts_early_by_the_lead() {
        let sections = page();

        assert_eq!(active_section(0.0, &sections, 100.0), Some("home"));
        assert_eq!(active_section(599.0, &sections, 100.0), Some("home"));
        assert_eq!(active_section(600.0, &sections, 100.0), Some("about"));
        assert_eq!(active_section(2_150.0, &sections, 100.0), Some("contact"));
    }

    #[test]
    fn no_section_matches_past_the_last_band() {
        let sections = page();
        assert_eq!(active_section(2_600.0, &sections, 100.0), None);
        assert_eq!(active_section(0.0, &[], 100.0), None);
    }

    #[test]
    fn overlapping_bands_prefer_the_later_section() {
        let sections = vec![band("outer", 0.0, 1_000.0), band("inner", 200.0, 200.0)];
        assert_eq!(active_section(150.0, &sections, 100.0), Some("inner"));
    }

    #[test]
    fn scroll_destination_subtracts_header_and_clamps() {
        assert_eq!(scroll_destination(700.0, 80.0), 620.0);
        assert_eq!(scroll_destination(40.0, 80.0), 0.0);
    }

    #[test]
    fn anchor_targets_ignore_bare_hash() {
        assert_eq!(anchor_target("#about"), Some("about"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://example.com"), None);
    }

    #[test]
    fn active_flags_mark_only_matching_links() {
        let hrefs = ["#home", "#about", "#", "#about"];

        assert_eq!(
            active_flags(&hrefs, Some("about")),
            vec![false, true, false, true]
        );
        assert_eq!(active_flags(&hrefs, None), vec![false; 4]);
    }

    #[test]
    fn click_leaves_exactly_one_active_link() {
        let flags = click_flags(4, 2, true);

        assert_eq!(flags.iter().filter(|active| **active).count(), 1);
        assert!(flags[2]);
    }

    #[test]
    fn click_on_missing_target_clears_every_link() {
        assert_eq!(click_flags(3, 1, false), vec![false; 3]);
    }
}
