use crate::timeline::{Phase, Sequence};

pub const LOADER_OVERLAY_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100%; \
     height: 100%; background: var(--bg-color); display: flex; justify-content: center; \
     align-items: center; z-index: 9999; transition: opacity 0.5s ease;";

pub const LOADER_SPINNER_CSS: &str = r#"
.loader-spinner {
    width: 50px;
    height: 50px;
    border: 3px solid var(--border-color);
    border-top: 3px solid var(--primary-color);
    border-radius: 50%;
    animation: spin 1s linear infinite;
}

@keyframes spin {
    0% { transform: rotate(0deg); }
    100% { transform: rotate(360deg); }
}
"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderStage {
    Visible,
    Fading,
    Removed,
}

impl LoaderStage {
    pub fn overlay_style(self) -> String {
        let opacity = match self {
            Self::Visible => "1",
            Self::Fading | Self::Removed => "0",
        };
        format!("{LOADER_OVERLAY_STYLE} opacity: {opacity};")
    }
}

#[derive(Clone, Debug)]
pub struct LoaderSequence {
    stage: LoaderStage,
    hold_ms: u32,
    fade_ms: u32,
}

impl LoaderSequence {
    pub fn new(hold_ms: u32, fade_ms: u32) -> Self {
        Self {
            stage: LoaderStage::Visible,
            hold_ms,
            fade_ms,
        }
    }
}

impl Sequence for LoaderSequence {
    type Step = LoaderStage;

    fn phase(&self) -> Phase {
        match self.stage {
            LoaderStage::Visible => Phase::Pending,
            LoaderStage::Fading => Phase::Running,
            LoaderStage::Removed => Phase::Done,
        }
    }

    fn next_delay_ms(&self) -> Option<u32> {
        match self.stage {
            LoaderStage::Visible => Some(self.hold_ms),
            LoaderStage::Fading => Some(self.fade_ms),
            LoaderStage::Removed => None,
        }
    }

    fn advance(&mut self) -> Option<LoaderStage> {
        let next = match self.stage {
            LoaderStage::Visible => LoaderStage::Fading,
            LoaderStage::Fading => LoaderStage::Removed,
            LoaderStage::Removed => return None,
        };
        self.stage = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::testing::record;

    #[tokio::test]
    async fn overlay_fades_after_hold_then_is_removed() {
        let stages = record(LoaderSequence::new(1_000, 500)).await;

        assert_eq!(
            stages,
            vec![(1_000, LoaderStage::Fading), (1_500, LoaderStage::Removed)]
        );
    }

    #[test]
    fn fading_overlay_is_transparent() {
        assert!(LoaderStage::Visible.overlay_style().ends_with("opacity: 1;"));
        assert!(LoaderStage::Fading.overlay_style().ends_with("opacity: 0;"));
    }
}
