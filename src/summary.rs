use serde::Serialize;
use uuid::Uuid;

use crate::insights::InsightState;
use crate::phase::PhaseId;
use crate::state::SessionState;
use crate::tool::color_hex;

/// What a finished exercise produced, for the log
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub drawings: Vec<DrawingSummary>,
    pub final_insights: InsightState,
    pub color: String,
    pub brush_size: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DrawingSummary {
    pub phase: Option<PhaseId>,
    pub id: Uuid,
    pub width: usize,
    pub height: usize,
    pub png_bytes: usize,
}

impl SessionSummary {
    pub fn from_state(state: &SessionState) -> Self {
        let drawings = state
            .drawings()
            .iter()
            .map(|record| {
                let [width, height] = record.image().size();
                DrawingSummary {
                    phase: record.phase().map(|p| p.id),
                    id: record.id(),
                    width,
                    height,
                    png_bytes: record.image().png().len(),
                }
            })
            .collect();

        Self {
            drawings,
            final_insights: *state.insights(),
            color: color_hex(state.tools().color()),
            brush_size: state.tools().brush_size(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Action;
    use crate::surface::DrawingImage;

    #[test]
    fn test_summary_json() {
        let mut state = SessionState::default();
        state.dispatch(Action::Advance {
            snapshot: Some(DrawingImage::new([600, 400], vec![0; 16])),
        });

        let summary = SessionSummary::from_state(&state);
        assert_eq!(summary.drawings.len(), 1);

        let json: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();
        assert_eq!(json["drawings"][0]["phase"], "house");
        assert_eq!(json["drawings"][0]["png_bytes"], 16);
        assert_eq!(json["color"], "#000000");
        assert_eq!(json["brush_size"], 3);
        assert_eq!(json["final_insights"]["colors_used"], 1);
    }
}
