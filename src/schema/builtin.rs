//! The theme's built-in option declarations.

use serde_json::{json, Value};

use super::{OptionKind, OptionSpec, Operator, Schema};

fn background_color(color: &str) -> Value {
    json!({"background-type": "color", "background-color": color})
}

fn colors(text: &str, link: &str, hover: &str) -> Value {
    json!({"text-color": text, "link-color": link, "link-hover-color": hover})
}

fn border(top: u32, bottom: u32, color: &str) -> Value {
    json!({
        "border-top-width": top,
        "border-bottom-width": bottom,
        "border-style": "solid",
        "border-color": color,
        "separator-color": "#cccccc",
    })
}

fn sides(top: i64, right: i64, bottom: i64, left: i64) -> Value {
    json!({"top": top, "right": right, "bottom": bottom, "left": left})
}

fn radius(all: i64) -> Value {
    json!({"top-left": all, "top-right": all, "bottom-right": all, "bottom-left": all})
}

fn heading(size: f64, line_height: f64) -> Value {
    json!({"font-size-desktop": size, "font-size-unit": "rem", "line-height-desktop": line_height})
}

fn button(prefix: &str, bg: &str, hover_bg: &str, text: &str, border_color: &str) -> Vec<OptionSpec> {
    vec![
        OptionSpec::color(&format!("{prefix}_bg_color"), bg),
        OptionSpec::color(&format!("{prefix}_hover_bg_color"), hover_bg),
        OptionSpec::color(&format!("{prefix}_text_color"), text),
        OptionSpec::color(&format!("{prefix}_hover_text_color"), text),
        OptionSpec::color(&format!("{prefix}_border_color"), border_color),
        OptionSpec::color(&format!("{prefix}_hover_border_color"), border_color),
        OptionSpec::number(&format!("{prefix}_border_width"), 1),
        OptionSpec::new(format!("{prefix}_border_radius"), OptionKind::Spacing, radius(2)),
        OptionSpec::typography(&format!("{prefix}_typography"), json!({})),
    ]
}

pub(super) fn schema() -> Schema {
    let mut specs = vec![
        // General colours and layout.
        OptionSpec::color("accent_color", "#3857f1"),
        OptionSpec::color("background_color", "#ffffff"),
        OptionSpec::color("boxed_content_background_color", "#ffffff"),
        OptionSpec::color("content_text_color", "#30373e"),
        OptionSpec::color("content_link_hover_color", "#23282d"),
        OptionSpec::color("headings_color", "#23282d"),
        OptionSpec::select("site_layout", "fw-contained"),
        OptionSpec::number("container_width", 1200),
        OptionSpec::number("sidebar_width", 30),
        OptionSpec::select("sidebar_style", "1"),
        // Top bar.
        OptionSpec::toggle("top_bar_enable", false),
        OptionSpec::background("top_bar_background", background_color("#ffffff")),
        OptionSpec::border("top_bar_border", border(0, 1, "rgba(0,0,0,0.085)")),
        OptionSpec::color_group("top_bar_text_color", colors("#30373e", "#30373e", "")),
        // Header.
        OptionSpec::select("header_layout", "layout-1"),
        OptionSpec::background("header_background", background_color("#ffffff")),
        OptionSpec::color_group("header_text_color", colors("#66717f", "#30373e", "")),
        OptionSpec::border("header_border", border(0, 1, "rgba(0,0,0,0.085)")),
        OptionSpec::number("main_nav_mobile_breakpoint", 960),
        OptionSpec::color_group("main_nav_font_color", json!({"link-color": "", "link-hover-color": ""})),
        OptionSpec::background("main_nav_background", background_color("#ffffff"))
            .requires("header_layout", Operator::Eq, "layout-3"),
        OptionSpec::border("main_nav_border", border(1, 0, "rgba(0,0,0,0.085)"))
            .requires("header_layout", Operator::Eq, "layout-3"),
        OptionSpec::range("main_nav_font_size", json!({"value": 0.9375, "unit": "rem"}), &["rem", "px"]),
        // Hero.
        OptionSpec::toggle("enable_hero", false),
        OptionSpec::number("hero_hover_slider_height", 500),
        // Pre-footer call to action.
        OptionSpec::toggle("enable_pre_footer_cta", false),
        OptionSpec::select("pre_footer_cta_style", "1"),
        OptionSpec::background("pre_footer_cta_background", background_color("#3857f1")),
        OptionSpec::color_group("pre_footer_cta_text_color", colors("#ffffff", "#ffffff", "#ffffff")),
        OptionSpec::border("pre_footer_cta_border", border(0, 0, "")),
        OptionSpec::range(
            "pre_footer_cta_font_size",
            json!({"desktop": 35, "tablet": "", "mobile": "", "unit": "px"}),
            &["px", "rem"],
        ),
        // Footer.
        OptionSpec::toggle("enable_footer", true),
        OptionSpec::toggle("enable_copyright", true),
        OptionSpec::background("footer_background", background_color("#23282d")),
        OptionSpec::color_group(
            "footer_text_color",
            json!({
                "text-color": "#9ba1a7",
                "link-color": "#ffffff",
                "link-hover-color": "#3857f1",
                "widget-title-color": "#ffffff",
            }),
        ),
        OptionSpec::border("footer_border", border(0, 0, "rgba(255,255,255,0.1)")),
        OptionSpec::background("copyright_background", background_color("")),
        OptionSpec::color_group("copyright_text_color", colors("#9ba1a7", "#ffffff", "#3857f1")),
        // Logo.
        OptionSpec::range("logo_max_height", json!({"desktop": 30, "unit": "px"}), &["px"]),
        OptionSpec::spacing(
            "logo_margin",
            json!({"desktop": sides(25, 0, 25, 0), "tablet": sides(0, 0, 0, 0), "mobile": sides(0, 0, 0, 0), "unit": "px"}),
        ),
        // Transparent header.
        OptionSpec::range("tsp_logo_max_height", json!({"desktop": 30, "unit": "px"}), &["px"]),
        OptionSpec::spacing(
            "tsp_logo_margin",
            json!({"desktop": sides(25, 0, 25, 0), "unit": "px"}),
        ),
        OptionSpec::background("tsp_header_background", background_color("")),
        OptionSpec::color_group("tsp_header_font_color", colors("", "", "")),
        OptionSpec::border("tsp_header_border", border(0, 0, "")),
        // Page header.
        OptionSpec::toggle("page_header_enable", true),
        OptionSpec::range(
            "page_header_font_size",
            json!({"desktop": 2.5, "tablet": "", "mobile": "", "unit": "rem"}),
            &["rem", "px"],
        ),
        OptionSpec::spacing(
            "page_header_spacing",
            json!({"desktop": sides(30, 0, 30, 0), "tablet": sides(0, 0, 0, 0), "mobile": sides(0, 0, 0, 0), "unit": "px"}),
        ),
        OptionSpec::background("page_header_background", background_color("")),
        OptionSpec::color_group("page_header_text_color", colors("", "", "")),
        OptionSpec::border("page_header_border", border(0, 1, "rgba(0,0,0,0.062)")),
        // Breadcrumbs.
        OptionSpec::toggle("breadcrumbs_enable", false),
        OptionSpec::select("breadcrumbs_position", "in-page-header"),
        OptionSpec::spacing(
            "breadcrumbs_spacing",
            json!({"desktop": sides(15, 0, 15, 0), "unit": "px"}),
        ),
        OptionSpec::background("breadcrumbs_background", background_color(""))
            .requires("breadcrumbs_position", Operator::Eq, "below-header"),
        OptionSpec::border("breadcrumbs_border", border(0, 1, "rgba(0,0,0,0.062)"))
            .requires("breadcrumbs_position", Operator::Eq, "below-header"),
        OptionSpec::color_group("breadcrumbs_text_color", json!({}))
            .requires("breadcrumbs_position", Operator::Eq, "below-header"),
        // Typography.
        OptionSpec::range(
            "html_base_font_size",
            json!({"desktop": 62.5, "tablet": 53, "mobile": 50, "unit": "%"}),
            &["%", "px"],
        ),
        OptionSpec::toggle("font_smoothing", true),
        OptionSpec::typography(
            "body_font",
            json!({
                "font-family": "default",
                "font-weight": "400",
                "font-size-desktop": 1.6,
                "font-size-unit": "rem",
                "line-height-desktop": 1.75,
            }),
        ),
        OptionSpec::typography("headings_font", json!({"font-weight": "600"})),
        OptionSpec::typography("h1_font", heading(4.0, 1.1)),
        OptionSpec::typography("h2_font", heading(3.6, 1.2)),
        OptionSpec::typography("h3_font", heading(2.8, 1.2)),
        OptionSpec::typography("h4_font", heading(2.4, 1.2)),
        OptionSpec::typography("h5_font", heading(2.0, 1.2)),
        OptionSpec::typography("h6_font", heading(1.8, 1.72)),
        OptionSpec::typography("heading_em_font", json!({})),
        OptionSpec::range(
            "logo_text_font_size",
            json!({"desktop": 3, "tablet": "", "mobile": "", "unit": "rem"}),
            &["rem", "px"],
        ),
        OptionSpec::range(
            "sidebar_widget_title_font_size",
            json!({"desktop": 1.8, "unit": "rem"}),
            &["rem", "px"],
        ),
        OptionSpec::range(
            "footer_widget_title_font_size",
            json!({"desktop": 1.8, "unit": "rem"}),
            &["rem", "px"],
        ),
        // Single post.
        OptionSpec::spacing(
            "single_title_spacing",
            json!({"desktop": sides(152, 0, 100, 0), "tablet": sides(90, 0, 55, 0), "mobile": sides(0, 0, 0, 0), "unit": "px"}),
        ),
        OptionSpec::range(
            "single_content_font_size",
            json!({"desktop": 1.6, "unit": "rem"}),
            &["rem", "px"],
        ),
        OptionSpec::select("single_content_width", "wide"),
        OptionSpec::number("single_narrow_container_width", 700),
        // Buttons.
        OptionSpec::color("text_button_text_color", "#23282d"),
        OptionSpec::color("text_button_hover_text_color", ""),
        OptionSpec::typography("text_button_typography", json!({})),
        // Custom CSS.
        OptionSpec::text("custom_css"),
    ];

    specs.extend(button("primary_button", "", "", "#ffffff", "rgba(0,0,0,0.12)"));
    specs.extend(button(
        "secondary_button",
        "#23282d",
        "#3e4750",
        "#ffffff",
        "rgba(0,0,0,0.12)",
    ));

    specs.into_iter().fold(Schema::new(), Schema::option)
}
