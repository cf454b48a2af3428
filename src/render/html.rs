use crate::Result;
use crate::render::Renderer;
use crate::view::{CellView, GroupView, KeyView, PageView};

use std::fmt::Write as _;

/// Static grouped viewer page.
pub struct HtmlRenderer;

/// We avoid `format!()` for the page shell because the stylesheet is full of
/// `{}`; placeholders are substituted with `replace` instead.
const HEADER: &str = r#"<!DOCTYPE html>
<html lang="ja">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>__TITLE__</title>
<style>
  @font-face {
    font-family: '__FONT_FAMILY__';
    src: url('__FONT_URL__') format('woff2');
    font-weight: normal;
    font-style: normal;
  }
  body {
    font-family: '__FONT_FAMILY__', sans-serif;
    margin: 20px;
  }
  .grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(100px, 1fr));
    gap: 10px;
  }
  .grid-item {
    text-align: center;
    padding: 20px;
    border: 1px solid #ddd;
    border-radius: 5px;
    background-color: #f9f9f9;
    font-size: 48px;
  }
  .related-item { font-weight: bold; color: #FF6347; }
  .related-item.ivs { border-color: #FF6347; }
  .block { display: contents; }
  .codepoint, .glyph-id, .alternate {
    display: block;
    font-family: ui-monospace, Menlo, Consolas, monospace;
    font-size: 12px;
    font-weight: normal;
    color: #777;
  }
  .alternate { color: #1E90FF; }
  .links { margin-top: 20px; font-size: 16px; }
  .links a { color: #1E90FF; text-decoration: none; }
</style>
</head>
<body>
<h1>__TITLE__</h1>
<div class="links">
  <p><a href="https://www.digitalwidearea.org/dwpi_mincho" target="_blank">DWPI Mincho</a></p>
  <p><a href="https://drive.google.com/file/d/1DZCewoIPi9hccEMAC1PeXFRfx4HMhBMX/view" target="_blank">フォントライセンス</a></p>
</div>
<div class="grid">
"#;

const FOOTER: &str = r#"</div>
</body>
</html>
"#;

impl Renderer for HtmlRenderer {
    fn render(&self, page: &PageView) -> Result<String> {
        let header = HEADER
            .replace("__TITLE__", &escape(&page.title))
            .replace("__FONT_FAMILY__", &css_string(&page.font_family))
            .replace("__FONT_URL__", &css_string(&page.font_url));

        let mut out = String::with_capacity(header.len() + FOOTER.len() + page.groups.len() * 128);
        out.push_str(&header);
        for group in &page.groups {
            render_group(&mut out, group)?;
        }
        out.push_str(FOOTER);

        Ok(out)
    }
}

fn render_group(out: &mut String, group: &GroupView) -> Result<()> {
    out.push_str("<div class=\"block\">\n");
    render_key(out, &group.key)?;
    for cell in &group.cells {
        render_cell(out, cell)?;
    }
    out.push_str("</div>\n");
    Ok(())
}

fn render_key(out: &mut String, key: &KeyView) -> Result<()> {
    let class = if key.ivs {
        "grid-item related-item ivs"
    } else {
        "grid-item related-item"
    };
    write!(out, "<div class=\"{}\">{}", class, escape(&key.text))?;

    if let Some(cp) = &key.codepoints {
        for label in [&cp.primary, &cp.secondary] {
            if !label.is_empty() {
                write!(out, "<span class=\"codepoint\">{}</span>", escape(label))?;
            }
        }
    }

    out.push_str("</div>\n");
    Ok(())
}

fn render_cell(out: &mut String, cell: &CellView) -> Result<()> {
    write!(out, "<div class=\"grid-item\">{}", escape(&cell.glyph))?;
    if let Some(id) = &cell.glyph_id {
        write!(out, "<span class=\"glyph-id\">{}</span>", escape(id))?;
    }
    if let Some(alt) = &cell.alternate {
        write!(out, "<span class=\"alternate\">{}</span>", escape(alt))?;
    }
    out.push_str("</div>\n");
    Ok(())
}

/// Escape text for element content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// Entities are not decoded inside <style>, so values quoted there get CSS escapes.
fn css_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '<' => out.push_str("\\3C "),
            '\n' | '\r' => {}
            _ => out.push(c),
        }
    }
    out
}
