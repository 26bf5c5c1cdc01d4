//! Horizontal compositing of strip snapshots into one image.
//!
//! Each item is parsed back, its definitions are merged into the composite
//! `<defs>` (shared gradient ids collapse into one), and its drawing is
//! wrapped in a translated group.

use log::debug;

use crate::error::{Result, StudioError};
use crate::model::Snapshot;
use super::constants::BACKGROUND_COLOR;
use super::svg_builder::{DiagramSurface, SvgBuilder};

/// Total composite size for items of the given sizes laid out left to right.
/// `None` when the width does not fit a `u32`.
pub(crate) fn composite_size(sizes: &[(u32, u32)], gap: u32) -> Option<(u32, u32)> {
    let gaps = u32::try_from(sizes.len().saturating_sub(1)).ok()?;
    let width = sizes
        .iter()
        .try_fold(gap.checked_mul(gaps)?, |acc, (w, _)| acc.checked_add(*w))?;
    let height = sizes.iter().map(|(_, h)| *h).max().unwrap_or(0);
    Some((width, height))
}

/// Place `items` side by side, `gap` pixels apart, on a white background.
///
/// Returns `Ok(None)` for an empty list.
pub(crate) fn compose_horizontal(items: &[&Snapshot], gap: u32) -> Result<Option<Snapshot>> {
    let sizes: Vec<(u32, u32)> = items.iter().map(|s| (s.width, s.height)).collect();
    let (width, height) = composite_size(&sizes, gap)
        .ok_or(StudioError::CompositeTooWide { items: items.len(), gap })?;

    let Some(mut surface) = DiagramSurface::acquire(width, height) else {
        return Ok(None);
    };
    let svg = surface.svg();
    svg.rect(0.0, 0.0, width as f64, height as f64, BACKGROUND_COLOR, "none", 0.0);

    let mut x = 0u32;
    for (i, item) in items.iter().enumerate() {
        append_item(svg, item, x)
            .map_err(|e| StudioError::InvalidSnapshot(format!("strip item {}: {}", i, e)))?;
        // Only the offset past the last item can exceed the checked width.
        x = x.saturating_add(item.width).saturating_add(gap);
    }

    debug!("composed {} snapshots into {}x{}", items.len(), width, height);
    Ok(Some(surface.into_snapshot()))
}

fn append_item(svg: &mut SvgBuilder, item: &Snapshot, offset_x: u32) -> Result<()> {
    let doc = roxmltree::Document::parse(&item.svg)?;
    let root = doc.root_element();
    if root.tag_name().name() != "svg" {
        return Err(StudioError::InvalidSnapshot(format!(
            "root element is <{}>",
            root.tag_name().name()
        )));
    }

    let source = item.svg.as_str();
    let mut body = format!(r#"<g transform="translate({},0)">"#, offset_x);
    for child in root.children().filter(|n| n.is_element()) {
        if child.tag_name().name() == "defs" {
            for def in child.children().filter(|n| n.is_element()) {
                let markup = &source[def.range()];
                let id = def.attribute("id").unwrap_or(markup);
                svg.raw_def(id, markup);
            }
        } else {
            body.push_str(&source[child.range()]);
        }
    }
    body.push_str("</g>");
    svg.raw(body);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_adds_widths_and_gaps() {
        assert_eq!(composite_size(&[(1000, 1200); 3], 0), Some((3000, 1200)));
        assert_eq!(composite_size(&[(1200, 1400), (1200, 1400)], 50), Some((2450, 1400)));
        assert_eq!(composite_size(&[(10, 5), (10, 9)], 0), Some((20, 9)));
        assert_eq!(composite_size(&[], 50), Some((0, 0)));
        assert_eq!(composite_size(&[(10, 5)], u32::MAX), Some((10, 5)));
    }

    #[test]
    fn oversized_width_is_reported() {
        assert_eq!(composite_size(&[(1000, 1200); 2], u32::MAX - 500), None);
        assert_eq!(composite_size(&[(u32::MAX, 1), (1, 1)], 0), None);
    }

    #[test]
    fn empty_strip_has_no_image() {
        assert!(compose_horizontal(&[], 50).unwrap().is_none());
    }

    #[test]
    fn garbage_is_rejected() {
        let bad = Snapshot { width: 10, height: 10, svg: "<html/>".into() };
        assert!(matches!(
            compose_horizontal(&[&bad], 0),
            Err(StudioError::InvalidSnapshot(_))
        ));
    }
}
