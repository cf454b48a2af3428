//! Page rendering.

pub mod html;

use crate::Result;
use crate::view::PageView;

pub use html::HtmlRenderer;

/// Turns a built page into the text written to the output file.
pub trait Renderer {
    fn render(&self, page: &PageView) -> Result<String>;
}

/// Output formats selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Html,
    Json,
}

impl Format {
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            Format::Html => Box::new(HtmlRenderer),
            Format::Json => Box::new(JsonRenderer),
        }
    }
}

/// The page view model as pretty-printed JSON.
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, page: &PageView) -> Result<String> {
        let mut json = serde_json::to_string_pretty(page)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::TotalsView;

    #[test]
    fn json_output_carries_totals() {
        let page = PageView {
            title: "t".to_string(),
            font_url: "f.woff2".to_string(),
            font_family: "F".to_string(),
            groups: Vec::new(),
            totals: TotalsView {
                groups: 0,
                glyphs: 0,
            },
        };

        let json = Format::Json.renderer().render(&page).expect("render json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["totals"]["groups"], 0);
        assert_eq!(value["font_url"], "f.woff2");
    }
}
