// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use rich_text::{Child, NodeId, NodeKind, RichTextTree, TreeError};
use rich_text_style::{FontWeight, StyleAttributes};

/// Text that overflows a single line at its natural size.
pub const SHRINK_TO_FIT: &str = "Shrinking to fit available space is much better!";

/// Text that overflows several lines at its natural size.
pub const MULTILINE_SHRINK: &str = "Multiline text component shrinking is supported, watch as \
    this reeeeaaaally loooooong teeeeeeext grooooows and then shriiiinks as you add text to me!";

/// The nodes of a sample tree.
#[derive(Clone, Debug)]
pub struct Sample {
    /// The top-level node.
    pub root: NodeId,
    /// Every node below the root, in document order.
    pub descendants: Vec<NodeId>,
}

/// Builds a paragraph with a highlighted entity in the middle.
///
/// `This is `, then a medium weight blue `entity`, then ` in a paragraph.`
pub fn entity_paragraph(tree: &mut RichTextTree) -> Result<Sample, TreeError> {
    let root = tree.create_node(NodeKind::Span);
    let before = tree.create_node(NodeKind::text("This is "));
    let entity = tree.create_node(NodeKind::text("entity"));
    let after = tree.create_node(NodeKind::text(" in a paragraph."));
    tree.set_style(
        entity,
        StyleAttributes::new()
            .with_font_weight(FontWeight::MEDIUM)
            .with_foreground_color(Color::from_rgb8(0x52, 0x7f, 0xe4)),
    )?;
    tree.set_children(
        root,
        [Child::Node(before), Child::Node(entity), Child::Node(after)],
    )?;
    Ok(Sample {
        root,
        descendants: vec![before, entity, after],
    })
}

/// Builds two differently sized runs that shrink together.
pub fn mixed_sizes(tree: &mut RichTextTree) -> Result<Sample, TreeError> {
    let root = tree.create_node(NodeKind::Span);
    let small = tree.create_node(NodeKind::text(
        "Differently sized nested elements will shrink together. ",
    ));
    let large = tree.create_node(NodeKind::text("LARGE TEXT!"));
    tree.set_style(small, StyleAttributes::new().with_font_size(14.0))?;
    tree.set_style(large, StyleAttributes::new().with_font_size(20.0))?;
    tree.set_children(root, [Child::Node(small), Child::Node(large)])?;
    Ok(Sample {
        root,
        descendants: vec![small, large],
    })
}
