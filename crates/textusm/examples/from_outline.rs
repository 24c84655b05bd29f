//! Example: Creating a diagram from the outline model
//!
//! This example demonstrates how to build an outline programmatically,
//! serialize it, and check that it reads back unchanged.

use textusm::{
    DiagramBuilder,
    diagram::DiagramType,
    outline::{Outline, OutlineNode},
    semantic::Diagram,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building story map from outline model...\n");

    let outline = Outline::new(vec![
        OutlineNode::new("Discover", 0)
            .with_child(
                OutlineNode::new("Search", 1)
                    .with_child(OutlineNode::new("Keyword search", 2))
                    .with_child(OutlineNode::new("Filter by tag", 2)),
            )
            .with_child(OutlineNode::new("Browse", 1)),
        OutlineNode::new("Purchase", 0)
            .with_child(OutlineNode::new("Checkout", 1).with_child(OutlineNode::new("Pay by card", 2))),
    ]);
    let diagram = Diagram::new(DiagramType::UserStoryMap, outline);

    let builder = DiagramBuilder::default();
    let text = builder.render_text(diagram.outline());
    println!("{text}\n");

    let reparsed = builder.parse_strict(&text, diagram.kind())?;
    assert_eq!(reparsed, diagram);

    println!(
        "✅ {} nodes, {} activities, depth {}",
        reparsed.outline().len(),
        reparsed.outline().roots().len(),
        reparsed.outline().max_depth().unwrap_or_default()
    );

    Ok(())
}
