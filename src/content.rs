use crate::phase::PhaseId;

/// Sections of the "Scientific Background" panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Overview,
    Validity,
    Interpretation(PhaseId),
    Limitations,
}

impl Topic {
    /// Panel order. Interpretation is shown as one section with three columns.
    pub const SECTIONS: [Topic; 4] = [
        Topic::Overview,
        Topic::Validity,
        Topic::Interpretation(PhaseId::House),
        Topic::Limitations,
    ];

    pub fn heading(self) -> &'static str {
        match self {
            Topic::Overview => "Overview",
            Topic::Validity => "Current Validity Status",
            Topic::Interpretation(_) => "Interpretation Guidelines",
            Topic::Limitations => "Important Limitations",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Topic::Overview => {
                "The House-Tree-Person (HTP) test is a projective psychological assessment developed by John Buck in 1948. It uses drawings to explore personality traits, emotional functioning, and psychological well-being."
            }
            Topic::Validity => {
                "Recent research (2022) shows mixed results regarding the HTP's validity. While some studies find it useful for therapeutic rapport-building, its diagnostic validity is questioned in modern psychological practice."
            }
            Topic::Interpretation(PhaseId::House) => {
                "Represents family relationships, security, and one's relationship with their home environment. Size, details, and placement can indicate feelings about family dynamics."
            }
            Topic::Interpretation(PhaseId::Tree) => {
                "Symbolizes personal growth, life force, and connection to nature. The trunk represents ego strength, while branches may indicate social relationships."
            }
            Topic::Interpretation(PhaseId::Person) => {
                "Reflects self-image, body awareness, and interpersonal relationships. Details like facial features, clothing, and posture provide insights into self-perception."
            }
            Topic::Limitations => {
                "The test lacks standardized scoring and interpretation guidelines. Results should be considered alongside other assessment tools and clinical observations."
            }
        }
    }
}

/// Badges shown next to the validity heading
pub const VALIDITY_BADGES: [&str; 2] = ["Research-Based", "Mixed Evidence"];

/// Visibility of the background panel. That flag is all the state it has.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InfoPanel {
    visible: bool,
}

impl InfoPanel {
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut panel = InfoPanel::default();
        assert!(!panel.is_visible());
        panel.toggle();
        assert!(panel.is_visible());
        panel.toggle();
        assert!(!panel.is_visible());
    }

    #[test]
    fn test_every_topic_has_text() {
        let topics = [
            Topic::Overview,
            Topic::Validity,
            Topic::Interpretation(PhaseId::House),
            Topic::Interpretation(PhaseId::Tree),
            Topic::Interpretation(PhaseId::Person),
            Topic::Limitations,
        ];
        for topic in topics {
            assert!(!topic.text().is_empty());
            assert!(!topic.heading().is_empty());
        }
        assert!(Topic::Overview.text().contains("John Buck in 1948"));
    }
}
