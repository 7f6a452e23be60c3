use prisma_styles::fonts::FontLoads;
use prisma_styles::sink::{LiveSink, MemoryDocument};
use prisma_styles::{EngineConfig, MemoryStore, PreviewSession, StyleAssembler};
use serde_json::{json, Value};

fn assembler() -> StyleAssembler {
    StyleAssembler::new(EngineConfig::default()).unwrap()
}

/// Every style element of `doc` must equal the batch fragments of its slot,
/// and the whole document must equal the batch stylesheet.
fn assert_matches_batch(assembler: &StyleAssembler, store: &MemoryStore, doc: &MemoryDocument) {
    let mut loads = FontLoads::new();
    let fragments = assembler.fragments(store, &mut loads);
    for slot in assembler.slots() {
        let expected: Vec<&str> = fragments
            .iter()
            .filter(|f| f.slot == slot)
            .map(|f| f.css.as_str())
            .collect();
        let id = LiveSink::<MemoryDocument>::style_id(slot);
        assert_eq!(
            doc.style_text(&id).unwrap_or_default(),
            expected.join("\n"),
            "style element {id} differs from the batch build"
        );
    }
    assert_eq!(doc.css(), assembler.build(store).css);
}

#[test]
fn test_incremental_matches_batch_after_changes() {
    let assembler = assembler();
    let mut session = PreviewSession::new(&assembler, MemoryStore::new(), MemoryDocument::new());
    session.render_all();

    let changes: Vec<(&str, Value)> = vec![
        ("accent_color", json!("#e91e63")),
        ("top_bar_enable", json!(true)),
        ("top_bar_border", json!({"border-bottom-width": 2, "border-style": "dashed", "border-color": "#ddd"})),
        ("header_layout", json!("layout-3")),
        ("main_nav_background", json!({"background-type": "color", "background-color": "#222"})),
        ("enable_pre_footer_cta", json!(true)),
        ("pre_footer_cta_style", json!("2")),
        ("footer_text_color", json!({"text-color": "#ffffff"})),
        ("background_color", json!("#121212")),
        ("site_layout", json!("boxed")),
        ("breadcrumbs_enable", json!(true)),
        ("breadcrumbs_position", json!("below-header")),
        ("h1_font", json!({"font-family": "Lato", "font-size-desktop": 4, "font-size-tablet": 3, "font-size-unit": "rem"})),
        ("single_content_width", json!("narrow")),
        ("top_bar_enable", json!(false)),
        ("custom_css", json!(".x{color:red}")),
    ];
    for (key, value) in changes {
        session.on_change(key, value);
        assert_matches_batch(&assembler, session.store(), session.document());
    }
}

#[test]
fn test_full_preview_equals_batch_stylesheet() {
    let assembler = assembler();
    let mut store = MemoryStore::new();
    store.set("top_bar_enable", json!(true));
    store.set("enable_hero", json!(true));
    store.set("accent_color", json!("#e91e63"));
    store.set("top_bar_text_color", json!({"link-color": "#00ff00", "link-hover-color": "#ff0000"}));

    let mut session = PreviewSession::new(&assembler, store.clone(), MemoryDocument::new());
    session.render_all();

    assert_eq!(session.document().css(), assembler.build(&store).css);
}

#[test]
fn test_changes_in_any_order_keep_batch_cascade() {
    let assembler = assembler();
    let mut session = PreviewSession::new(&assembler, MemoryStore::new(), MemoryDocument::new());

    // User colours first, accent last: the accent element still sits before them.
    session.on_change("top_bar_enable", json!(true));
    session.on_change("top_bar_text_color", json!({"link-hover-color": "#ff0000"}));
    session.on_change("footer_text_color", json!({"link-color": "#00ff00"}));
    session.on_change("accent_color", json!("#e91e63"));

    let css = session.document().css();
    assert_eq!(css, assembler.build(session.store()).css);
    let top_bar_accent = css.find(".pr-topbar-widget__text a,\n#prisma-core-topbar").unwrap();
    assert!(top_bar_accent < css.find("color: #ff0000;").unwrap());
    assert!(css.find("#colophon,").unwrap() < css.find("#colophon a{ color: #00ff00; }").unwrap());
}

#[test]
fn test_footer_text_change_updates_copyright_separator() {
    let assembler = assembler();
    let mut session = PreviewSession::new(&assembler, MemoryStore::new(), MemoryDocument::new());

    let touched = session.on_change("footer_text_color", json!({"text-color": "#111111"}));
    assert_eq!(touched, vec!["footer_text_color", "copyright_separator"]);

    let separator = session
        .document()
        .style_text("prisma-core-dynamic-copyright_separator")
        .unwrap();
    assert!(separator.contains("background-color: rgba(0,0,0,0.1);"));

    session.on_change("footer_text_color", json!({"text-color": "#eeeeee"}));
    let separator = session
        .document()
        .style_text("prisma-core-dynamic-copyright_separator")
        .unwrap();
    assert!(separator.contains("background-color: rgba(255,255,255,0.1);"));
}

#[test]
fn test_into_document_renders_html() {
    let assembler = assembler();
    let mut session = PreviewSession::new(&assembler, MemoryStore::new(), MemoryDocument::new());
    session.on_change("hero_hover_slider_height", json!(620));
    session.on_change("enable_hero", json!(true));

    let html = session.into_document().to_html();
    assert!(html.starts_with("<style id=\"prisma-core-dynamic-accent_color\">"));
    assert!(html.contains("<style id=\"prisma-core-dynamic-hero_hover_slider_height\">"));
    assert!(html.contains("height: 620px;"));
}
