//! The block editor's rule table.
//!
//! The editor canvas gets the same options applied to its own wrapper
//! selectors. Two keys describe the document being edited rather than a
//! theme option; the host supplies them through
//! [`EditorDocument`](crate::editor::EditorDocument).

use super::{Area, Condition, Rule, RuleSet};
use crate::editor::{POST_TYPE, SIDEBAR_DISPLAYED};

const ACCENT: &str = r#"
.editor-styles-wrapper .block-editor-rich-text__editable mark,
.editor-styles-wrapper .block-editor-rich-text__editable span.highlight,
.editor-styles-wrapper .block-editor-rich-text__editable code,
.editor-styles-wrapper .block-editor-rich-text__editable kbd,
.editor-styles-wrapper .block-editor-rich-text__editable var,
.editor-styles-wrapper .block-editor-rich-text__editable samp,
.editor-styles-wrapper .block-editor-rich-text__editable tt {
	background-color: {{ accent_color | rgba(0.09) }};
}

.editor-styles-wrapper .wp-block code.block,
.editor-styles-wrapper .block code {
	background-color: {{ accent_color | rgba(0.075) }};
}

.editor-styles-wrapper .wp-block .block-editor-rich-text__editable a,
.editor-styles-wrapper .block-editor-rich-text__editable code,
.editor-styles-wrapper .block-editor-rich-text__editable kbd,
.editor-styles-wrapper .block-editor-rich-text__editable var,
.editor-styles-wrapper .block-editor-rich-text__editable samp,
.editor-styles-wrapper .block-editor-rich-text__editable tt {
	color: {{ accent_color }};
}

#editor .editor-styles-wrapper ::-moz-selection { background-color: {{ accent_color }}; color: #FFF; }
#editor .editor-styles-wrapper ::selection { background-color: {{ accent_color }}; color: #FFF; }

.editor-styles-wrapper blockquote,
.editor-styles-wrapper .wp-block-quote {
	border-color: {{ accent_color }};
}
"#;

// The canvas is the container less its padding, less the sidebar column when
// the document shows one.
const CONTAINER: &str = r#"
{% set base = (container_width | number) - 100 %}
{% set fitted = (base * (100 - (sidebar_width | number)) / 100 - 50) if editor_sidebar_displayed else base %}
{% set boxed = site_layout == "boxed" %}
{% set separated = site_layout == "boxed-separated" %}
{% set style_offset = 15 if (separated and editor_sidebar_displayed and (sidebar_style | number) == 3) else 0 %}
{% set width = fitted + style_offset + (16 if separated else 0) + (200 if boxed else 0) %}
{% if site_layout == "fw-stretched" %}
.editor-styles-wrapper .wp-block {
	max-width: none;
}
{% elif boxed or separated %}
.editor-styles-wrapper {
	max-width: {{ width | number }}px;
	margin: 0 auto;
}

.editor-styles-wrapper .wp-block {
	max-width: none;
}
{% if boxed %}
.editor-styles-wrapper {
	-webkit-box-shadow: 0 0 30px rgba(50, 52, 54, 0.06);
	box-shadow: 0 0 30px rgba(50, 52, 54, 0.06);
	padding-left: 42px;
	padding-right: 42px;
}
{% else %}
.editor-styles-wrapper {
	border-radius: 3px;
	border: 1px solid rgba(0, 0, 0, 0.085);
}
{% endif %}
{% else %}
.editor-styles-wrapper .wp-block {
	max-width: {{ width | number }}px;
}
{% endif %}
"#;

const NARROW: &str = r#"
.editor-styles-wrapper .wp-block {
	max-width: {{ single_narrow_container_width | number }}px;
}
"#;

const BACKGROUND: &str = r##"
{% if site_layout == "boxed" or site_layout == "boxed-separated" %}
:root .edit-post-layout .interface-interface-skeleton__content {
	background-color: #{{ background_color | trim("#") }};
}

:root .editor-styles-wrapper {
	background-color: {{ boxed_content_background_color }};
}
{% else %}
:root .editor-styles-wrapper {
	background-color: #{{ background_color | trim("#") }};
}
{% endif %}
"##;

const TEXT: &str = r#"
:root .editor-styles-wrapper {
	color: {{ content_text_color }};
}
"#;

const HEADINGS: &str = r#"
:root .editor-styles-wrapper h1,
:root .editor-styles-wrapper h2,
:root .editor-styles-wrapper h3,
:root .editor-styles-wrapper h4,
:root .editor-styles-wrapper .h4,
:root .editor-styles-wrapper h5,
:root .editor-styles-wrapper h6,
:root .editor-post-title__block .editor-post-title__input {
	color: {{ headings_color }};
}
"#;

const LINK_HOVER: &str = r#"
.editor-styles-wrapper .wp-block .block-editor-rich-text__editable a:hover {
	color: {{ content_link_hover_color }};
}
"#;

const FONT_SMOOTHING: &str = r#"
.editor-styles-wrapper {
	-moz-osx-font-smoothing: grayscale;
	-webkit-font-smoothing: antialiased;
}
"#;

const BODY_SELECTOR: &str = ":root .editor-styles-wrapper, .editor-styles-wrapper .wp-block, \
.block-editor-default-block-appender textarea.block-editor-default-block-appender__content";

const TITLE_SELECTOR: &str = ":root .editor-styles-wrapper .editor-post-title__block .editor-post-title__input";

const HEADINGS_SELECTOR: &str = ":root .editor-styles-wrapper h1.wp-block, \
:root .editor-styles-wrapper h2.wp-block, :root .editor-styles-wrapper h3.wp-block, \
:root .editor-styles-wrapper h4.wp-block, :root .editor-styles-wrapper h5.wp-block, \
:root .editor-styles-wrapper h6.wp-block, \
:root .editor-styles-wrapper .editor-post-title__block .editor-post-title__input";

const HEADING_EM_SELECTOR: &str = ".editor-styles-wrapper h1.wp-block em, \
.editor-styles-wrapper h2.wp-block em, .editor-styles-wrapper h3.wp-block em, \
.editor-styles-wrapper h4.wp-block em, .editor-styles-wrapper h5.wp-block em, \
.editor-styles-wrapper h6.wp-block em";

pub(super) fn rule_set() -> RuleSet {
    RuleSet::new(vec![
        Area::new("base_typography")
            .rule(Rule::range("html", "font-size", "html_base_font_size", true, "px")),
        Area::new("accent").rule(Rule::block(&["accent_color"], ACCENT)),
        Area::new("container").rule(Rule::owned_block(
            "container_width",
            &[
                "container_width",
                "sidebar_width",
                "sidebar_style",
                "site_layout",
                SIDEBAR_DISPLAYED,
            ],
            CONTAINER,
        )),
        Area::new("single_narrow")
            .gate(Condition::All(vec![
                Condition::equals(POST_TYPE, "post"),
                Condition::equals("single_content_width", "narrow"),
            ]))
            .rule(Rule::block(&["single_narrow_container_width"], NARROW)),
        Area::new("background").rule(Rule::owned_block(
            "background_color",
            &["background_color", "boxed_content_background_color", "site_layout"],
            BACKGROUND,
        )),
        Area::new("body")
            .rule(Rule::typography(BODY_SELECTOR, "body_font"))
            .rule(Rule::block(&["content_text_color"], TEXT)),
        Area::new("single_post")
            .gate(Condition::equals(POST_TYPE, "post"))
            .rule(Rule::range(
                ":root .editor-styles-wrapper .wp-block",
                "font-size",
                "single_content_font_size",
                true,
                "px",
            )),
        Area::new("headings")
            .rule(Rule::typography(HEADINGS_SELECTOR, "headings_font"))
            .rule(Rule::typography(HEADING_EM_SELECTOR, "heading_em_font"))
            .rule(Rule::typography(
                ":root .editor-styles-wrapper h1.wp-block, :root .editor-styles-wrapper .h1, \
:root .editor-styles-wrapper .editor-post-title__block .editor-post-title__input",
                "h1_font",
            ))
            .rule(Rule::typography(
                ":root .editor-styles-wrapper h2.wp-block, :root .editor-styles-wrapper .h2",
                "h2_font",
            ))
            .rule(Rule::typography(
                ":root .editor-styles-wrapper h3.wp-block, :root .editor-styles-wrapper .h3",
                "h3_font",
            ))
            .rule(Rule::typography(":root .editor-styles-wrapper h4.wp-block", "h4_font"))
            .rule(Rule::typography(":root .editor-styles-wrapper h5.wp-block", "h5_font"))
            .rule(Rule::typography(":root .editor-styles-wrapper h6.wp-block", "h6_font"))
            .rule(Rule::block(&["headings_color"], HEADINGS))
            .rule(Rule::range(TITLE_SELECTOR, "font-size", "page_header_font_size", true, "px"))
            .rule(Rule::block(&["content_link_hover_color"], LINK_HOVER)),
        Area::new("font_smoothing")
            .gate(Condition::enabled("font_smoothing"))
            .rule(Rule::owned_block("font_smoothing", &[], FONT_SMOOTHING)),
    ])
}
