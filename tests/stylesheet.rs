use prisma_styles::compile::{design, Context, DesignKind};
use prisma_styles::editor::EditorDocument;
use prisma_styles::inspect::parse_rules;
use prisma_styles::rules::RuleSet;
use prisma_styles::schema::Schema;
use prisma_styles::{minify, EngineConfig, MemoryStore, StyleAssembler};
use serde_json::json;

fn assembler() -> StyleAssembler {
    StyleAssembler::new(EngineConfig::default()).unwrap()
}

#[test]
fn test_accent_colour_and_derived_shades() {
    let mut store = MemoryStore::new();
    store.set("accent_color", json!("#3857F1"));
    let css = assembler().build(&store).css;

    assert!(css.contains("background-color: #3857F1;"));
    assert!(css.contains("background-color: #5671f4;"));
    assert!(css.contains("background-color: rgba(56,87,241,0.09);"));
    assert!(css.contains("background-color: rgba(56,87,241,0.075);"));
    assert!(css.contains("box-shadow: inset 0 0 0 2px #3857F1;"));
}

#[test]
fn test_disabled_top_bar_emits_nothing() {
    let mut store = MemoryStore::new();
    store.set("top_bar_enable", json!(false));
    store.set("top_bar_background", json!({"background-type": "color", "background-color": "#ff0000"}));
    let css = assembler().build(&store).css;
    assert!(!css.contains("#prisma-core-topbar"));
    assert!(!css.contains("pr-topbar"));

    store.set("top_bar_enable", json!(true));
    let css = assembler().build(&store).css;
    assert!(css.contains("#prisma-core-topbar{background: #ff0000;}"));
    assert!(css.contains(".pr-topbar-widget::after { background-color:#cccccc; }"));
}

#[test]
fn test_user_colours_follow_accent_defaults() {
    let mut store = MemoryStore::new();
    store.set("accent_color", json!("#e91e63"));
    store.set("top_bar_enable", json!(true));
    store.set("top_bar_text_color", json!({"link-color": "#ff0000", "link-hover-color": "#ff0000"}));
    store.set("header_text_color", json!({"link-hover-color": "#00ff00"}));
    store.set("footer_text_color", json!({"link-hover-color": "#0000ff"}));
    let css = assembler().build(&store).css;

    let position = |needle: &str| css.find(needle).unwrap_or_else(|| panic!("missing {needle:?}"));

    let top_bar_accent = position(".pr-topbar-widget__text a,\n#prisma-core-topbar .pr-topbar-widget__text .pr-icon {");
    assert!(top_bar_accent < position("{ color: #ff0000; }"));
    assert!(css.contains(".pr-topbar-widget__text a, .pr-topbar-widget .prisma-core-nav > ul > li > a"));
    assert!(!css.contains("#prisma-core-topbar .pr-topbar-widget__text a,"));

    let header_accent = position("#prisma-core-header-inner .prisma-core-nav > ul > li > a:hover,\n");
    assert!(header_accent < position("{ color: #00ff00; }"));

    let footer_accent = position("#colophon,\n");
    assert!(footer_accent < position("{ color: #0000ff; }"));
}

#[test]
fn test_hosted_font_requested_once() {
    let mut store = MemoryStore::new();
    store.set("body_font", json!({"font-family": "Open Sans", "font-weight": "400"}));
    store.set("h1_font", json!({"font-family": "Open Sans", "font-weight": "700"}));
    store.set("h2_font", json!({"font-family": "Open Sans", "font-style": "italic"}));

    let assembler = assembler();
    let sheet = assembler.build(&store);
    assert_eq!(sheet.fonts.len(), 1);
    assert_eq!(sheet.fonts[0].family, "Open Sans");
    assert_eq!(
        sheet.fonts_url(&assembler.config().fonts).as_deref(),
        Some("https://fonts.googleapis.com/css?family=Open+Sans:400,700,400i,700i")
    );
    assert!(sheet.css.contains("body{font-weight:400;font-family: \"Open Sans\";"));
}

#[test]
fn test_minified_output_is_stable() {
    let mut store = MemoryStore::new();
    store.set("top_bar_enable", json!(true));
    store.set("enable_pre_footer_cta", json!(true));
    store.set("custom_css", json!("/* mine */ .x { margin: 0.5em 0px; }"));
    let minified = assembler().build(&store).minified();

    assert_eq!(minify(&minified), minified);
    assert!(minified.ends_with(".x{margin:.5em 0;}"));
    assert!(!minified.contains("/* mine */"));
}

#[test]
fn test_minified_and_pretty_have_same_rules() {
    let mut store = MemoryStore::new();
    store.set("site_layout", json!("boxed"));
    store.set("header_layout", json!("layout-3"));
    let sheet = assembler().build(&store);

    let key = |css: &str| -> Vec<(Option<String>, String)> {
        parse_rules(css)
            .into_iter()
            .map(|rule| (rule.media, rule.selector))
            .collect()
    };
    let pretty = key(&sheet.css);
    assert!(!pretty.is_empty());
    assert_eq!(pretty, key(&sheet.minified()));
}

#[test]
fn test_background_round_trip() {
    let ctx = Context::default();
    let value = json!({
        "background-type": "image",
        "background-image": "https://example.com/hero.jpg",
        "background-size": "cover",
        "background-position-x": 50,
        "background-position-y": 25.7,
        "background-color-overlay": "rgba(0,0,0,0.5)"
    });
    let rules = parse_rules(&design(&ctx, "#hero", &value, DesignKind::Background));
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].selector, "#hero");
    assert_eq!(rules[0].get("background-image"), Some("url(https://example.com/hero.jpg)"));
    assert_eq!(rules[0].get("background-size"), Some("cover"));
    assert_eq!(rules[0].get("background-attachment"), Some("scroll"));
    assert_eq!(rules[0].get("background-position"), Some("50% 25%"));
    assert_eq!(rules[0].get("background-repeat"), Some("no-repeat"));
    assert_eq!(rules[1].selector, "#hero::after");
    assert_eq!(rules[1].get("background-color"), Some("rgba(0,0,0,0.5)"));
}

#[test]
fn test_image_without_overlay_has_no_pseudo_element() {
    let ctx = Context::default();
    let value = json!({"background-type": "image", "background-image": "a.png"});
    let css = design(&ctx, ".page-header", &value, DesignKind::Background);
    assert!(!css.contains("::after"));
    assert_eq!(parse_rules(&css).len(), 1);
}

#[test]
fn test_layout_derivations() {
    let mut store = MemoryStore::new();
    store.set("sidebar_width", json!(25));
    store.set("container_width", json!(1140));
    store.set("background_color", json!("#1e1e1e"));
    let css = assembler().build(&store).css;

    assert!(css.contains("width: 25%;"));
    assert!(css.contains("max-width: 75%;"));
    assert!(css.contains("max-width: 1140px;"));
    assert!(css.contains("max-width: 1240px;"));
    // Dark backgrounds get a lightened offset colour.
    assert!(css.contains("border-color: #4b4b4b;"));
}

#[test]
fn test_light_background_has_no_offset_block() {
    let css = assembler().build(&MemoryStore::new()).css;
    assert!(!css.contains("prisma-core-sidebar-style-3 #secondary .pr-widget {"));
}

#[test]
fn test_breadcrumbs_design_requires_below_header() {
    let mut store = MemoryStore::new();
    store.set("breadcrumbs_enable", json!(true));
    store.set("breadcrumbs_background", json!({"background-type": "color", "background-color": "#eeeeee"}));
    assert!(!assembler().build(&store).css.contains(".pr-breadcrumbs{background: #eeeeee;}"));

    store.set("breadcrumbs_position", json!("below-header"));
    assert!(assembler().build(&store).css.contains(".pr-breadcrumbs{background: #eeeeee;}"));
}

#[test]
fn test_button_sizes_stored_as_text() {
    let mut store = MemoryStore::new();
    store.set("primary_button_border_width", json!("2px"));
    store.set(
        "primary_button_border_radius",
        json!({"top-left": "4px", "top-right": "4", "bottom-right": "", "bottom-left": 6}),
    );
    store.set("secondary_button_border_width", json!("3px"));
    let css = assembler().build(&store).css;

    assert!(css.contains("border-width: 2px;"));
    assert!(css.contains("border-top-left-radius: 4px;"));
    assert!(css.contains("border-top-right-radius: 4px;"));
    assert!(css.contains("border-bottom-right-radius: 0px;"));
    assert!(css.contains("border-bottom-left-radius: 6px;"));
    assert!(css.contains("border-width: 3px;"));
}

#[test]
fn test_custom_css_comes_last() {
    let mut store = MemoryStore::new();
    store.set("custom_css", json!("body { color: hotpink; }"));
    let sheet = assembler().build(&store);
    assert!(sheet.css.ends_with("body { color: hotpink; }"));
}

#[test]
fn test_misshapen_values_fall_back_to_defaults() {
    let mut store = MemoryStore::new();
    store.set("footer_background", json!("#000"));
    store.set("logo_margin", json!([1, 2, 3]));
    store.set("body_font", json!(12));
    let assembler = assembler();
    let css = assembler.build(&store).css;
    assert_eq!(css, assembler.build(&MemoryStore::new()).css);
}

#[test]
fn test_custom_rule_table_from_yaml() {
    let rules = RuleSet::from_yaml(
        r##"
areas:
  - name: footer
    gate:
      enabled: enable_footer
    rules:
      - rule: design
        selector: "#colophon"
        key: footer_background
        kind: background
      - rule: block
        owner: footer_border
        reads: [footer_border]
        template: |
          #colophon { border-top: {{ footer_border["border-top-width"] | int }}px solid; }
"##,
    )
    .unwrap();
    let assembler =
        StyleAssembler::with_rules(EngineConfig::default(), rules, Schema::builtin().clone()).unwrap();

    let mut store = MemoryStore::new();
    store.set("footer_border", json!({"border-top-width": 3}));
    assert_eq!(
        assembler.build(&store).css,
        "#colophon{background: #23282d;}\n#colophon { border-top: 3px solid; }"
    );

    store.set("enable_footer", json!(false));
    assert!(assembler.build(&store).is_empty());
}

#[test]
fn test_legacy_gradient_prefixes_configurable() {
    let mut store = MemoryStore::new();
    store.set(
        "footer_background",
        json!({
            "background-type": "gradient",
            "gradient-color-1": "#000000",
            "gradient-color-2": "#ffffff",
            "gradient-linear-angle": 90
        }),
    );
    let css = assembler().build(&store).css;
    assert!(css.contains("background: -webkit-linear-gradient(90deg, #000000 0%, #ffffff 100%);"));

    let config = EngineConfig::from_yaml("legacy_gradient_prefixes: false").unwrap();
    let css = StyleAssembler::new(config).unwrap().build(&store).css;
    assert!(!css.contains("-webkit-linear-gradient"));
    assert!(css.contains("#colophon{background: #000000;background: linear-gradient(90deg, #000000 0%, #ffffff 100%);}"));
}

#[test]
fn test_editor_stylesheet_follows_saved_options() {
    let mut store = MemoryStore::new();
    store.set("accent_color", json!("#e91e63"));
    store.set("site_layout", json!("boxed"));
    store.set("headings_color", json!("#111111"));
    store.set("h2_font", json!({"font-family": "Open Sans", "font-weight": "700"}));

    let editor = StyleAssembler::editor(EngineConfig::default()).unwrap();
    let sheet = editor.build(&EditorDocument::new(&store, "post"));

    assert!(sheet.css.contains("background-color: rgba(233,30,99,0.09);"));
    assert!(sheet.css.contains("#editor .editor-styles-wrapper ::selection { background-color: #e91e63; color: #FFF; }"));
    assert!(sheet.css.contains("max-width: 1300px;"));
    assert!(sheet.css.contains("color: #111111;"));
    assert!(sheet.css.contains(":root .editor-styles-wrapper h2.wp-block, :root .editor-styles-wrapper .h2{"));
    assert_eq!(sheet.fonts.len(), 1);
    assert!(!sheet.css.contains("#prisma-core-header"));

    let front = assembler().build(&store).css;
    assert!(!front.contains("editor-styles-wrapper"));
}
