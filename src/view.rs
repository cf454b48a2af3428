//! View models handed to the renderers.

use crate::codepoint::{self, Codepoints};
use crate::group::Group;

use serde::Serialize;

/// Page-level settings that do not come from the table.
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub title: String,
    pub font_url: String,
    pub font_family: String,
    /// Attach codepoints to keys and glyph-id / alternate codes to cells.
    pub annotate: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CellView {
    pub glyph: String,
    pub glyph_id: Option<String>,
    pub alternate: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyView {
    pub text: String,
    /// `None` when annotations are off.
    pub codepoints: Option<Codepoints>,
    pub ivs: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupView {
    pub key: KeyView,
    pub cells: Vec<CellView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub title: String,
    pub font_url: String,
    pub font_family: String,
    pub groups: Vec<GroupView>,
    pub totals: TotalsView,
}

#[derive(Debug, Clone, Serialize)]
pub struct TotalsView {
    pub groups: usize,
    pub glyphs: usize,
}

/// Build the page. Each group becomes a key cell followed by one cell per row.
pub fn build_page(groups: &[Group], options: &PageOptions) -> PageView {
    let groups: Vec<GroupView> = groups
        .iter()
        .map(|group| build_group(group, options.annotate))
        .collect();

    let glyphs = groups.iter().map(|g| g.cells.len()).sum();

    PageView {
        title: options.title.clone(),
        font_url: options.font_url.clone(),
        font_family: options.font_family.clone(),
        totals: TotalsView {
            groups: groups.len(),
            glyphs,
        },
        groups,
    }
}

fn build_group(group: &Group, annotate: bool) -> GroupView {
    let key = KeyView {
        text: group.key.clone(),
        codepoints: annotate.then(|| codepoint::codepoints(&group.key)),
        ivs: codepoint::is_ivs(&group.key),
    };

    let cells = group
        .rows
        .iter()
        .map(|row| CellView {
            glyph: row.glyph.clone(),
            glyph_id: row.glyph_id.clone().filter(|_| annotate),
            alternate: row.correct_form.clone().filter(|_| annotate),
        })
        .collect();

    GroupView { key, cells }
}
