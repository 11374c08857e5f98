//! Score panel and button labels
//!
//! The panel beside the canvas lists every block skin with its point value.
//! It is rebuilt on each start, never per frame.

use crate::config::GameConfig;
use crate::sim::GameStatus;

/// One row of the score panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelEntry {
    pub skin: String,
    pub points: u32,
}

impl PanelEntry {
    pub fn label(&self) -> String {
        format!("{} pts", self.points)
    }

    /// Attributes of the panel thumbnail
    pub fn image_attributes(&self) -> [(&'static str, &str); 3] {
        [("src", self.skin.as_str()), ("width", "30"), ("height", "30")]
    }
}

/// Panel rows in palette order
pub fn score_panel_entries(config: &GameConfig) -> Vec<PanelEntry> {
    config
        .palette
        .iter()
        .map(|v| PanelEntry {
            skin: v.skin.clone(),
            points: v.points,
        })
        .collect()
}

/// Text for the pause/resume toggle button
pub fn pause_button_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Paused => "Resume",
        _ => "Pause",
    }
}

/// Clear `#scorePanel` and rebuild it from the config (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn render_score_panel(document: &web_sys::Document, config: &GameConfig) {
    let Some(panel) = document.get_element_by_id("scorePanel") else {
        log::warn!("#scorePanel not found");
        return;
    };
    panel.set_text_content(None);

    for entry in score_panel_entries(config) {
        let appended = panel_item(document, &entry).and_then(|item| panel.append_child(&item));
        if let Err(e) = appended {
            log::warn!("Failed to add panel entry {}: {:?}", entry.skin, e);
        }
    }
}

/// `<div><img><br><span>label</span></div>`, built node by node so config
/// strings are never parsed as markup
#[cfg(target_arch = "wasm32")]
fn panel_item(
    document: &web_sys::Document,
    entry: &PanelEntry,
) -> Result<web_sys::Element, wasm_bindgen::JsValue> {
    let item = document.create_element("div")?;

    let img = document.create_element("img")?;
    for (name, value) in entry.image_attributes() {
        img.set_attribute(name, value)?;
    }
    item.append_child(&img)?;
    item.append_child(&document.create_element("br")?)?;

    let label = document.create_element("span")?;
    label.set_text_content(Some(&entry.label()));
    item.append_child(&label)?;

    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_lists_palette() {
        let entries = score_panel_entries(&GameConfig::default());
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].skin, "face2.jpg");
        assert_eq!(entries[0].label(), "1 pts");
        assert_eq!(entries[4].label(), "5 pts");
    }

    #[test]
    fn test_skin_kept_as_plain_attribute() {
        let entry = PanelEntry {
            skin: r#"x.png" onerror="alert(1)"#.to_string(),
            points: 2,
        };
        let attrs = entry.image_attributes();
        assert_eq!(attrs[0], ("src", r#"x.png" onerror="alert(1)"#));
        assert_eq!(attrs[1..], [("width", "30"), ("height", "30")]);
        assert_eq!(entry.label(), "2 pts");
    }

    #[test]
    fn test_pause_label() {
        assert_eq!(pause_button_label(GameStatus::Running), "Pause");
        assert_eq!(pause_button_label(GameStatus::Paused), "Resume");
        assert_eq!(pause_button_label(GameStatus::Over), "Pause");
    }
}
