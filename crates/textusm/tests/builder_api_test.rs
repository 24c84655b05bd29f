//! Integration tests for the DiagramBuilder API
//!
//! These tests verify that the public API works and honors its configuration.

use textusm::{
    DiagramBuilder, TextUsmError,
    canvas::CanvasSection,
    config::{AppConfig, FormatConfig, OutlineConfig},
    diagram::DiagramType,
    indent::IndentUnit,
};

const STORY_MAP: &str = "\
Discover
  Search catalog
    Filter by tag
  Read reviews
Purchase
  Checkout";

fn four_space_builder() -> DiagramBuilder {
    DiagramBuilder::new(AppConfig::new(
        OutlineConfig::new(IndentUnit::FOUR_SPACES),
        FormatConfig::default(),
    ))
}

#[test]
fn test_parse_keeps_kind() {
    let builder = DiagramBuilder::default();
    let diagram = builder.parse(STORY_MAP, DiagramType::UserStoryMap);

    assert_eq!(diagram.kind(), DiagramType::UserStoryMap);
    assert_eq!(diagram.outline().roots().len(), 2);
    assert_eq!(diagram.outline().len(), 6);
}

#[test]
fn test_parse_strict_accepts_valid_source() {
    let builder = DiagramBuilder::default();
    let diagram = builder
        .parse_strict(STORY_MAP, DiagramType::SiteMap)
        .expect("Failed to parse");

    assert_eq!(diagram.outline().max_depth(), Some(2));
}

#[test]
fn test_parse_strict_rejects_invalid_source() {
    let builder = DiagramBuilder::default();
    let result = builder.parse_strict("Root\n     Child", DiagramType::MindMap);

    match result {
        Err(TextUsmError::Parse { err, src }) => {
            assert_eq!(src, "Root\n     Child");
            assert_eq!(err.diagnostics().len(), 1);
        }
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn test_lenient_parse_reports_warnings() {
    let builder = DiagramBuilder::default();
    let (diagram, warnings) = builder.parse_with_warnings("Root\n      Child", DiagramType::MindMap);

    assert_eq!(diagram.outline().max_depth(), Some(1));
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].severity().is_warning());
}

#[test]
fn test_validate_uses_configured_unit() {
    let source = "Column1\n    Column2\nRow1\n    Column1";

    assert!(DiagramBuilder::default().validate(source).is_err());
    assert!(four_space_builder().validate(source).is_ok());
    assert!(four_space_builder().is_valid(source));
}

#[test]
fn test_render_text_uses_configured_unit() {
    let builder = four_space_builder();
    let diagram = DiagramBuilder::default().parse(STORY_MAP, DiagramType::UserStoryMap);
    let text = builder.render_text(diagram.outline());

    assert!(text.starts_with("Discover\n    Search catalog\n        Filter by tag"));
    assert!(builder.is_valid(&text));
}

#[test]
fn test_format_uses_configured_fence() {
    let source = "```text\nA\n```\n```markdown\nB\n```";
    let builder = DiagramBuilder::new(AppConfig::new(
        OutlineConfig::default(),
        FormatConfig::new("text"),
    ));

    assert_eq!(builder.format(source), "A");
    assert_eq!(DiagramBuilder::default().format(source), "B");
}

#[test]
fn test_templates_parse_under_four_spaces() {
    let builder = four_space_builder();

    for kind in DiagramType::ALL {
        let template = builder.template(kind);
        if template.trim().is_empty() {
            continue;
        }
        assert!(builder.is_valid(template), "{kind} template is invalid");
    }
}

#[test]
fn test_extract_canvas() {
    let builder = DiagramBuilder::default();
    let canvas = builder.extract_canvas("## 🎯 目的\n- Grow revenue\n## 💰 収益モデル\n- Subscriptions");

    assert_eq!(
        canvas.items(CanvasSection::Purpose).collect::<Vec<_>>(),
        ["Grow revenue"]
    );
    assert_eq!(
        canvas.items(CanvasSection::RevenueModel).collect::<Vec<_>>(),
        ["Subscriptions"]
    );

    let text = builder.render_text(&canvas.to_outline());
    assert!(builder.is_valid(&text));
}

#[test]
fn test_config_from_toml() {
    let config: AppConfig =
        toml::from_str("[outline]\nindent_unit = \"tab\"\n[format]\nfence_language = \"md\"\n")
            .expect("Failed to parse config");
    let builder = DiagramBuilder::new(config);

    assert!(builder.is_valid("Root\n\tChild"));
    assert_eq!(builder.format("```md\nA\n```"), "A");
}
