//! Integration tests for the SceneRenderer API
//!
//! These tests verify that the public API works and is usable.

use vellum::{
    SceneRenderer, VellumError,
    color::Rgba,
    config::AppConfig,
    document::Document,
    draw::{Circle, Polyline, Rectangle, SectionBuilder, Styled, Text},
    geometry::Point,
};

const ENVELOPE_START: &str =
    r#"<?xml version="1.0" encoding="UTF-8" ?><svg xmlns="http://www.w3.org/2000/svg" version="1.1">"#;

#[test]
fn test_renderer_api_exists() {
    let _renderer = SceneRenderer::default();
}

#[test]
fn test_render_empty_scene() {
    let renderer = SceneRenderer::default();
    let scene = renderer.parse("").expect("Failed to parse scene");
    let svg = renderer.render_svg(&scene).expect("Failed to render");

    assert_eq!(svg, format!("{ENVELOPE_START}</svg>"));
}

#[test]
fn test_scene_matches_programmatic_document() {
    let source = r#"
        [[objects]]
        kind = "circle"
        center = { x = 20, y = 20 }
        radius = 5
        fill = "red"

        [[objects]]
        kind = "section"

        [[objects.objects]]
        kind = "polyline"
        points = [{ x = -13.4, y = 12.7 }, { x = 41.9231, y = -11.1111 }]

        [[objects.objects]]
        kind = "text"
        data = "label"
        font_weight = "bold"

        [[objects]]
        kind = "rect"
        width = 11
        height = 7
        fill = { red = 3, green = 2, blue = 1, alpha = 0.4 }
    "#;

    let renderer = SceneRenderer::default();
    let scene = renderer.parse(source).expect("Failed to parse scene");
    let svg = renderer.render_svg(&scene).expect("Failed to render");

    let mut doc = Document::new();
    doc.add(
        Circle::new()
            .with_center(Point::new(20.0, 20.0))
            .with_radius(5.0)
            .with_fill_color("red"),
    )
    .add(
        SectionBuilder::new()
            .add(
                Polyline::new()
                    .with_point(Point::new(-13.4, 12.7))
                    .with_point(Point::new(41.9231, -11.1111)),
            )
            .add(Text::new().with_data("label").with_font_weight("bold"))
            .build(),
    )
    .add(
        Rectangle::new()
            .with_width(11.0)
            .with_height(7.0)
            .with_fill_color(Rgba::new(3, 2, 1, 0.4)),
    );

    assert_eq!(svg, doc.render_to_string());
    assert!(svg.contains(r#"points="-13.4,12.7 41.9231,-11.1111""#));
}

#[test]
fn test_parse_invalid_syntax_returns_error() {
    let renderer = SceneRenderer::default();
    let result = renderer.parse("this is not [valid toml");
    assert!(matches!(result, Err(VellumError::Parse { .. })));
}

#[test]
fn test_renderer_reusability() {
    let renderer = SceneRenderer::new(AppConfig::default());

    let first = renderer
        .parse("[[objects]]\nkind = \"circle\"\n")
        .expect("Failed to parse first scene");
    let second = renderer
        .parse("[[objects]]\nkind = \"text\"\ndata = \"two\"\n")
        .expect("Failed to parse second scene");

    let svg1 = renderer.render_svg(&first).expect("Failed to render first");
    let svg2 = renderer.render_svg(&second).expect("Failed to render second");

    assert!(svg1.contains("<circle"));
    assert!(svg2.contains(">two</text>"));
    assert_eq!(svg1, renderer.render_svg(&first).unwrap());
}
