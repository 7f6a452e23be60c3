//! The theme's built-in rule table.
//!
//! Areas are listed in output order. Button styles come after every other
//! area and user custom CSS comes last so it wins by source order.

use super::{Area, Condition, Rule, RuleSet};
use crate::compile::DesignKind::{Background, Border, Color, SeparatorColor};

const ACCENT: &str = r#"
#pr-scroll-top:hover::before,
.pr-btn,
input[type=submit],
input[type=reset],
.comment-form input[type=checkbox]:checked,
#comments .bypostauthor-badge,
.single .post-tags a:hover,
.single .post-category .cat-links a:hover,
.tagcloud a:hover,
#main .mejs-controls .mejs-time-rail .mejs-time-current,
.pr-btn.prisma-core-read-more::after,
.post_format-post-format-quote .pr-blog-entry-content .quote-post-bg::after,
.pr-hover-slider .post-category a,
.pr-single-title-in-page-header.single .page-header .post-category a,
.entry-media > a:hover .entry-media-icon::before,
.pr-pre-footer-cta-style-1 #pr-pre-footer .pr-flex-row::after,
.pr-pre-footer-cta-style-2 #pr-pre-footer::after,
.select2-container--default .select2-results__option--highlighted[aria-selected],
.pr-input-supported input[type=radio]:checked::before,
.pr-input-supported input[type=checkbox]:checked,
.prisma-core-sidebar-style-2 #secondary .widget-title::before,
.prisma-core-sidebar-style-2 .elementor-widget-sidebar .widget-title::before,
.widget .cat-item a:hover + span,
.widget_archive li a:hover + span,
.widget .cat-item.current-cat a + span,
#prisma-core-footer .widget .cat-item a:hover + span,
#prisma-core-footer .widget_archive li a:hover + span,
#prisma-core-footer .widget .cat-item.current-cat a + span,
.pr-btn.btn-outline:hover,
#infinite-handle span {
	background-color: {{ accent_color }};
}

.pr-btn:hover,
#infinite-handle span:hover,
input[type=submit]:hover,
input[type=reset]:hover,
input[type=reset]:focus,
.pr-btn:focus,
input[type=submit]:focus,
.pr-hover-slider .post-category a:hover,
.pr-single-title-in-page-header.single .page-header .post-category a:hover {
	background-color: {{ accent_color | luminance(0.15) }};
}

mark,
span.highlight,
code,
kbd,
var,
samp,
tt {
	background-color: {{ accent_color | rgba(0.09) }};
}

code.block {
	background-color: {{ accent_color | rgba(0.075) }};
}

.content-area a:not(.pr-btn):not(.wp-block-button__link),
#secondary .prisma-companion-custom-list-widget .pr-entry a:not(.pr-btn),
#secondary a:not(.pr-btn):hover,
.pr-header-widgets .pr-header-widget.prisma-core-active .pr-icon.pr-search,
.prisma-core-logo .site-title a:hover,
#prisma-core-header-inner .prisma-core-nav > ul > li > a:hover,
#prisma-core-header-inner .prisma-core-nav > ul > li.menu-item-has-children:hover > a,
#prisma-core-header-inner .prisma-core-nav > ul > li.current-menu-item > a,
#prisma-core-header-inner .prisma-core-nav > ul > li.current-menu-ancestor > a,
#prisma-core-header-inner .prisma-core-nav > ul > li.page_item_has_children:hover > a,
#prisma-core-header-inner .prisma-core-nav > ul > li.current_page_item > a,
#prisma-core-header-inner .prisma-core-nav > ul > li.current_page_ancestor > a,
.prisma-core-social-nav > ul > li > a .pr-icon.bottom-icon,
.pr-header-widgets a:not(.pr-btn):hover,
#prisma-core-header-inner .pr-header-widgets .prisma-core-active,
.prisma-core-pagination .navigation .nav-links .page-numbers:hover,
.widget .cat-item.current-cat > a,
.widget ul li.current_page_item > a,
#main .search-form .search-submit:hover,
#colophon .search-form .search-submit:hover,
#cancel-comment-reply-link:hover,
.comment-form .required,
.navigation .nav-links .page-numbers:hover,
#main .entry-meta a:hover,
#main .author-box-title a:hover,
.single .post-category a,
.page-links span:hover,
.site-content .page-links span:hover,
.navigation .nav-links .page-numbers.current,
.page-links > span,
.site-content .page-links > span,
.pr-btn.btn-outline,
code,
kbd,
var,
samp,
tt,
.is-mobile-menu-active .pr-hamburger,
.pr-hamburger:hover,
.single #main .post-nav a:hover {
	color: {{ accent_color }};
}

#page ::-moz-selection { background-color: {{ accent_color }}; color: #FFF; }
#page ::selection { background-color: {{ accent_color }}; color: #FFF; }

#comments .comment-actions .reply a:hover,
.comment-form input[type=checkbox]:checked,
.comment-form input[type=checkbox]:focus,
.comment-form input[type=radio]:checked,
.comment-form input[type=radio]:focus,
.single .post-category a,
#colophon,
#secondary .widget-title,
.elementor-widget-sidebar .widget-title,
.pr-hover-slider .post-category a,
.pr-single-title-in-page-header.single .page-header .post-category a,
.pr-entry blockquote,
.wp-block-quote.is-style-large,
.wp-block-quote.is-large,
.wp-block-quote.has-text-align-right,
.navigation .nav-links .page-numbers.current,
.page-links > span,
.site-content .page-links > span,
.pr-input-supported input[type=radio]:checked,
.pr-input-supported input[type=checkbox]:checked,
.pr-btn.btn-outline {
	border-color: {{ accent_color }};
}

#masthead .pr-header-widgets .dropdown-item::after,
.prisma-core-nav > ul .sub-menu::after,
textarea:focus,
input[type="text"]:focus,
input[type="email"]:focus,
input[type=password]:focus,
input[type=tel]:focus,
input[type=url]:focus,
input[type=search]:focus,
input[type=date]:focus {
	border-bottom-color: {{ accent_color }};
	outline: none !important;
}

.pr-header-widgets .dropdown-item,
.preloader-1 > div,
.prisma-core-nav .sub-menu {
	border-top-color: {{ accent_color }};
}

.prisma-core-animate-arrow:hover .arrow-handle,
.prisma-core-animate-arrow:hover .arrow-bar,
.prisma-core-animate-arrow:focus .arrow-handle,
.prisma-core-animate-arrow:focus .arrow-bar,
.prisma-core-pagination .navigation .nav-links .page-numbers.next:hover .prisma-core-animate-arrow .arrow-handle,
.prisma-core-pagination .navigation .nav-links .page-numbers.prev:hover .prisma-core-animate-arrow .arrow-handle,
.prisma-core-pagination .navigation .nav-links .page-numbers.next:hover .prisma-core-animate-arrow .arrow-bar,
.prisma-core-pagination .navigation .nav-links .page-numbers.prev:hover .prisma-core-animate-arrow .arrow-bar {
	fill: {{ accent_color }};
}

.pr-input-supported input[type=checkbox]:focus:hover {
	box-shadow: inset 0 0 0 2px {{ accent_color }};
}
"#;

const TOP_BAR_ACCENT: &str = r#"
#prisma-core-topbar .prisma-core-nav > ul > li > a:hover,
#prisma-core-topbar .prisma-core-nav > ul > li.menu-item-has-children:hover > a,
#prisma-core-topbar .prisma-core-nav > ul > li.current-menu-item > a,
#prisma-core-topbar .prisma-core-nav > ul > li.current-menu-ancestor > a,
.pr-topbar-widget__text a:hover,
.pr-topbar-widget__text a,
#prisma-core-topbar .pr-topbar-widget__text .pr-icon {
	color: {{ accent_color }};
}
"#;

const TOP_BAR_LINKS: &str = ".pr-topbar-widget__text a, \
.pr-topbar-widget .prisma-core-nav > ul > li > a, \
.pr-topbar-widget__socials .prisma-core-social-nav > ul > li > a, \
#prisma-core-topbar .pr-topbar-widget__text .pr-icon";

const TOP_BAR_LINKS_HOVER: &str = "#prisma-core-topbar .prisma-core-nav > ul > li > a:hover, \
#prisma-core-topbar .prisma-core-nav > ul > li.menu-item-has-children:hover > a, \
#prisma-core-topbar .prisma-core-nav > ul > li.current-menu-item > a, \
#prisma-core-topbar .prisma-core-nav > ul > li.current-menu-ancestor > a, \
#prisma-core-topbar .pr-topbar-widget__text a:hover, \
#prisma-core-topbar .prisma-core-social-nav > ul > li > a .pr-icon.bottom-icon";

const HEADER_LINKS: &str = "#prisma-core-header, \
.pr-header-widgets a:not(.pr-btn), \
.prisma-core-logo a, \
.pr-hamburger";

const HEADER_LINKS_HOVER: &str = ".pr-header-widgets a:not(.pr-btn):hover, \
#prisma-core-header-inner .pr-header-widgets .prisma-core-active, \
.prisma-core-logo .site-title a:hover, \
.pr-hamburger:hover, \
.is-mobile-menu-active .pr-hamburger, \
#prisma-core-header-inner .prisma-core-nav > ul > li > a:hover, \
#prisma-core-header-inner .prisma-core-nav > ul > li.menu-item-has-children:hover > a, \
#prisma-core-header-inner .prisma-core-nav > ul > li.current-menu-item > a, \
#prisma-core-header-inner .prisma-core-nav > ul > li.current-menu-ancestor > a, \
#prisma-core-header-inner .prisma-core-nav > ul > li.page_item_has_children:hover > a, \
#prisma-core-header-inner .prisma-core-nav > ul > li.current_page_item > a, \
#prisma-core-header-inner .prisma-core-nav > ul > li.current_page_ancestor > a";

const NAV_LINKS_HOVER: &str = "#prisma-core-header-inner .prisma-core-nav > ul > li > a:hover, \
#prisma-core-header-inner .prisma-core-nav > ul > li.menu-item-has-children:hover > a, \
#prisma-core-header-inner .prisma-core-nav > ul > li.current-menu-item > a, \
#prisma-core-header-inner .prisma-core-nav > ul > li.current-menu-ancestor > a, \
#prisma-core-header-inner .prisma-core-nav > ul > li.page_item_has_children:hover > a, \
#prisma-core-header-inner .prisma-core-nav > ul > li.current_page_item > a, \
#prisma-core-header-inner .prisma-core-nav > ul > li.current_page_ancestor > a";

const MOBILE_NAV: &str = r#"
@media screen and (max-width: {{ main_nav_mobile_breakpoint | number }}px) {
	#prisma-core-header-inner .prisma-core-nav {
		display: none;
		color: #000;
	}

	.pr-mobile-nav {
		display: inline-flex;
	}

	#prisma-core-header-inner {
		position: relative;
	}

	#prisma-core-header-inner .prisma-core-nav > ul > li > a {
		color: inherit;
	}

	#prisma-core-header-inner .pr-nav-container {
		position: static;
		border: none;
	}

	#prisma-core-header-inner .site-navigation {
		display: none;
		position: absolute;
		top: 100%;
		width: 100%;
		left: 0;
		right: 0;
		margin: -1px 0 0;
		background: #FFF;
		border-top: 1px solid #eaeaea;
		box-shadow: 0 15px 25px -10px rgba(50, 52, 54, 0.125);
		z-index: 999;
		font-size: 1rem;
		padding: 0;
	}

	#prisma-core-header-inner .site-navigation > ul {
		max-height: initial;
		display: block;
	}

	#prisma-core-header-inner .site-navigation > ul li {
		display: block;
		width: 100%;
		padding: 0;
		margin: 0;
		margin-left: 0 !important;
	}

	#prisma-core-header-inner .site-navigation > ul .sub-menu {
		position: static;
		display: none;
		border: 0;
		box-shadow: none;
		opacity: 1;
		visibility: visible;
		transform: none;
		background: #f8f8f8;
		pointer-events: all;
		min-width: initial;
		left: 0;
		padding: 0;
		margin: 0;
		border-radius: 0;
		line-height: inherit;
	}

	#prisma-core-header-inner .site-navigation > ul a {
		padding: 0;
		position: relative;
		border-bottom: 1px solid #eaeaea;
		background: none;
	}

	#prisma-core-header-inner .site-navigation > ul a > span {
		padding: 10px 30px !important;
		width: 100%;
		display: block;
	}

	#prisma-core-header-inner .site-navigation > ul .menu-item-has-children.pr-open > a > .pr-icon {
		transform: rotate(180deg);
	}

	.prisma-core-nav .sub-menu li.current-menu-item > a {
		font-weight: bold;
	}
{% if header_layout == "layout-3" %}
	.prisma-core-header-layout-3 .pr-logo-container > .pr-container {
		flex-wrap: wrap;
	}

	.prisma-core-header-layout-3 .pr-logo-container .prisma-core-logo {
		order: 0;
		align-items: flex-start;
		flex-basis: auto;
		margin-left: 0;
	}

	.prisma-core-header-layout-3 .pr-logo-container .pr-header-element {
		flex-basis: auto;
	}

	.prisma-core-header-layout-3 .pr-logo-container .pr-mobile-nav {
		order: 5;
	}
{% endif %}
}
"#;

const HERO: &str = r#"
#hero .pr-hover-slider .hover-slide-item {
	height: {{ hero_hover_slider_height | number }}px;
}
"#;

const PRE_FOOTER_OVERLAY: &str = r#"
{% set bg = pre_footer_cta_background %}
{% if bg["background-type"] == "image" and bg["background-color-overlay"] %}
.pr-pre-footer-cta-style-1 #pr-pre-footer .pr-flex-row::before,
.pr-pre-footer-cta-style-2 #pr-pre-footer::before {
	background-color: {{ bg["background-color-overlay"] }};
}
{% endif %}
"#;

const FOOTER_BORDER: &str = r#"
{% set b = footer_border %}
{% for side in ["top", "bottom"] %}
{% set width = b["border-" ~ side ~ "-width"] | number %}
{% if width %}
#colophon {
	border-{{ side }}-width: {{ width }}px;
	border-{{ side }}-style: {{ b["border-style"] or "solid" }};
	border-{{ side }}-color: {{ b["border-color"] or "inherit" }};
}
{% endif %}
{% endfor %}
"#;

const SIDEBAR: &str = r#"
#secondary {
	width: {{ sidebar_width | number }}%;
}

body:not(.prisma-core-no-sidebar) #primary {
	max-width: {{ 100 - (sidebar_width | number) }}%;
}
"#;

const BOXED_CONTENT: &str = r#"
.prisma-core-layout__boxed-separated.author .author-box,
.prisma-core-layout__boxed-separated #content,
.prisma-core-layout__boxed-separated.prisma-core-sidebar-style-3 #secondary .pr-widget,
.prisma-core-layout__boxed-separated.prisma-core-sidebar-style-3 .elementor-widget-sidebar .pr-widget,
.prisma-core-layout__boxed-separated.blog .prisma-core-article,
.prisma-core-layout__boxed-separated.search-results .prisma-core-article,
.prisma-core-layout__boxed-separated.category .prisma-core-article {
	background-color: {{ boxed_content_background_color }};
}

@media screen and (max-width: 960px) {
	.prisma-core-layout__boxed-separated #page {
		background-color: {{ boxed_content_background_color }};
	}
}

.prisma-core-layout__boxed #page {
	background-color: {{ boxed_content_background_color }};
}
"#;

const CONTENT_TEXT: &str = r#"
body {
	color: {{ content_text_color }};
}

.comment-form .comment-notes,
#comments .no-comments,
#page .wp-caption .wp-caption-text,
#comments .comment-meta,
.comments-closed,
.entry-meta,
.pr-entry cite,
legend,
.pr-page-header-description,
.page-links em,
.site-content .page-links em,
.single .entry-footer .last-updated,
.single .post-nav .post-nav-title,
#main .widget_recent_comments span,
#main .widget_recent_entries span,
#main .widget_calendar table > caption,
.post-thumb-caption,
.wp-block-image figcaption,
.wp-block-embed figcaption {
	color: {{ content_text_color | rgba(0.73) }};
}

.navigation .nav-links .page-numbers svg {
	fill: {{ content_text_color | rgba(0.73) }};
}
"#;

const CONTENT_OFFSET: &str = r#"
{% if not is_light(background_color) %}
{% set offset = background_color | light_or_dark(background_color | luminance(-0.045), background_color | luminance(0.2)) %}
#content textarea,
#content input[type="text"],
#content input[type="number"],
#content input[type="email"],
#content input[type=password],
#content input[type=tel],
#content input[type=url],
#content input[type=search],
#content input[type=date] {
	background-color: {{ background_color }};
}

.prisma-core-sidebar-style-3 #secondary .pr-widget {
	border-color: {{ offset }};
}

.entry-meta .entry-meta-elements > span:before {
	background-color: {{ offset }};
}
{% endif %}
"#;

const LINK_HOVER: &str = r#"
.content-area a:not(.pr-btn):not(.wp-block-button__link):hover,
#secondary .prisma-companion-custom-list-widget .pr-entry a:not(.pr-btn):hover,
.pr-breadcrumbs a:hover {
	color: {{ content_link_hover_color }};
}
"#;

const HEADINGS: &str = r#"
h1, h2, h3, h4, .h4, h5, h6,
.h1, .h2, .h3,
.prisma-core-logo .site-title,
.error-404 .page-header h1 {
	color: {{ headings_color }};
}
"#;

const CONTAINER: &str = r#"
.pr-container,
.alignfull.pr-wrap-content > div {
	max-width: {{ container_width | number }}px;
}

.prisma-core-layout__boxed #page,
.prisma-core-layout__boxed.pr-sticky-header.prisma-core-is-mobile #prisma-core-header-inner,
.prisma-core-layout__boxed.pr-sticky-header:not(.prisma-core-header-layout-3) #prisma-core-header-inner,
.prisma-core-layout__boxed.pr-sticky-header:not(.prisma-core-is-mobile).prisma-core-header-layout-3 #prisma-core-header-inner .pr-nav-container > .pr-container {
	max-width: {{ (container_width | number) + 100 }}px;
}
"#;

const BOXED_FULLWIDTH: &str = r#"
@media screen and (max-width: {{ container_width | number }}px) {
	body.prisma-core-layout__boxed.prisma-core-no-sidebar .elementor-section.elementor-section-stretched,
	body.prisma-core-layout__boxed.prisma-core-no-sidebar .pr-fw-section,
	body.prisma-core-layout__boxed.prisma-core-no-sidebar .entry-content .alignfull {
		margin-left: -50px !important;
		margin-right: -50px !important;
	}
}
"#;

const TSP_LINKS: &str = ".pr-tsp-header #prisma-core-header, \
.pr-tsp-header .pr-header-widgets a:not(.pr-btn), \
.pr-tsp-header .prisma-core-logo a, \
.pr-tsp-header .pr-hamburger, \
.pr-tsp-header #prisma-core-header-inner .prisma-core-nav > ul > li > a";

const TSP_LINKS_HOVER: &str = ".pr-tsp-header .pr-header-widgets a:not(.pr-btn):hover, \
.pr-tsp-header #prisma-core-header-inner .pr-header-widgets .prisma-core-active, \
.pr-tsp-header .prisma-core-logo .site-title a:hover, \
.pr-tsp-header .pr-hamburger:hover, \
.is-mobile-menu-active .pr-tsp-header .pr-hamburger, \
.pr-tsp-header #prisma-core-header-inner .prisma-core-nav > ul > li > a:hover, \
.pr-tsp-header #prisma-core-header-inner .prisma-core-nav > ul > li.menu-item-has-children:hover > a, \
.pr-tsp-header #prisma-core-header-inner .prisma-core-nav > ul > li.current-menu-item > a, \
.pr-tsp-header #prisma-core-header-inner .prisma-core-nav > ul > li.current-menu-ancestor > a, \
.pr-tsp-header #prisma-core-header-inner .prisma-core-nav > ul > li.page_item_has_children:hover > a, \
.pr-tsp-header #prisma-core-header-inner .prisma-core-nav > ul > li.current_page_item > a, \
.pr-tsp-header #prisma-core-header-inner .prisma-core-nav > ul > li.current_page_ancestor > a";

const PAGE_HEADER_COLORS: &str = r#"
{% set c = page_header_text_color %}
{% if c["text-color"] %}
.page-header .page-title {
	color: {{ c["text-color"] }};
}

.page-header .pr-page-header-description {
	color: {{ c["text-color"] | rgba(0.75) }};
}
{% endif %}
{% if c["link-color"] %}
.page-header .pr-breadcrumbs a {
	color: {{ c["link-color"] }};
}

.page-header .pr-breadcrumbs span,
.page-header .breadcrumb-trail .trail-items li::after,
.page-header .pr-breadcrumbs .separator {
	color: {{ c["link-color"] | rgba(0.75) }};
}
{% endif %}
{% if c["link-hover-color"] %}
.page-header .pr-breadcrumbs a:hover {
	color: {{ c["link-hover-color"] }};
}
{% endif %}
"#;

const COPYRIGHT_LINKS_HOVER: &str = "#prisma-core-copyright a:hover, \
#prisma-core-copyright .prisma-core-social-nav > ul > li > a .pr-icon.bottom-icon, \
#prisma-core-copyright .prisma-core-nav > ul > li.current-menu-item > a, \
#prisma-core-copyright .prisma-core-nav > ul > li.current-menu-ancestor > a, \
#prisma-core-copyright .prisma-core-nav > ul > li:hover > a";

const COPYRIGHT_SEPARATOR: &str = r#"
{% set separator = footer_text_color["text-color"] | light_or_dark("rgba(255,255,255,0.1)", "rgba(0,0,0,0.1)") %}
#prisma-core-copyright.contained-separator > .pr-container::before {
	background-color: {{ separator }};
}

#prisma-core-copyright.fw-separator {
	border-top-color: {{ separator }};
}
"#;

const FONT_SMOOTHING: &str = r#"
* {
	-moz-osx-font-smoothing: grayscale;
	-webkit-font-smoothing: antialiased;
}
"#;

const HEADINGS_SELECTOR: &str = "h1, .h1, .prisma-core-logo .site-title, .page-header .page-title, \
h2, .h2, h3, .h3, h4, .h4, h5, h6";

const HEADING_EM_SELECTOR: &str = "h1 em, h2 em, h3 em, h4 em, h5 em, h6 em, \
.h1 em, .h2 em, .h3 em, .h4 em, .prisma-core-logo .site-title em, .error-404 .page-header h1 em";

const SINGLE_NARROW: &str = r#"
.single-post.narrow-content .entry-content > :not([class*="align"]):not([class*="gallery"]):not(.wp-block-image):not(.quote-inner):not(.quote-post-bg),
.single-post.narrow-content .mce-content-body:not([class*="page-template-full-width"]) > :not([class*="align"]):not([data-wpview-type*="gallery"]):not(blockquote):not(.mceTemp),
.single-post.narrow-content .entry-footer,
.single-post.narrow-content .entry-content > .alignwide,
.single-post.narrow-content p.has-background:not(.alignfull):not(.alignwide),
.single-post.narrow-content .post-nav,
.single-post.narrow-content #prisma-core-comments-toggle,
.single-post.narrow-content #comments,
.single-post.narrow-content .entry-content .aligncenter,
.single-post.narrow-content .pr-narrow-element,
.single-post.narrow-content.pr-single-title-in-content .entry-header,
.single-post.narrow-content.pr-single-title-in-content .entry-meta,
.single-post.narrow-content.pr-single-title-in-content .post-category,
.single-post.narrow-content.prisma-core-no-sidebar .pr-page-header-wrapper,
.single-post.narrow-content.prisma-core-no-sidebar .pr-breadcrumbs nav {
	max-width: {{ single_narrow_container_width | number }}px;
	margin-left: auto;
	margin-right: auto;
}

.single-post.narrow-content .author-box,
.single-post.narrow-content .entry-content > .alignwide,
.single.pr-single-title-in-page-header .page-header.pr-align-center .pr-page-header-wrapper {
	max-width: {{ (single_narrow_container_width | number) + 70 }}px;
}
"#;

const PRIMARY_BUTTON_SELECTOR: &str = ".pr-btn, \
body:not(.wp-customizer) input[type=submit], \
.site-main .woocommerce #respond input#submit, \
.site-main .woocommerce a.button, \
.site-main .woocommerce button.button, \
.site-main .woocommerce input.button, \
.woocommerce ul.products li.product .added_to_cart, \
.woocommerce ul.products li.product .button, \
.woocommerce div.product form.cart .button, \
.woocommerce #review_form #respond .form-submit input, \
#infinite-handle span";

const PRIMARY_BUTTON: &str = r#"
{% set normal = ".pr-btn, body:not(.wp-customizer) input[type=submit], .site-main .woocommerce #respond input#submit, .site-main .woocommerce a.button, .site-main .woocommerce button.button, .site-main .woocommerce input.button, .woocommerce ul.products li.product .added_to_cart, .woocommerce ul.products li.product .button, .woocommerce div.product form.cart .button, .woocommerce #review_form #respond .form-submit input, #infinite-handle span" %}
{% set hover = ".pr-btn:hover, .pr-btn:focus, body:not(.wp-customizer) input[type=submit]:hover, body:not(.wp-customizer) input[type=submit]:focus, .site-main .woocommerce #respond input#submit:hover, .site-main .woocommerce #respond input#submit:focus, .site-main .woocommerce a.button:hover, .site-main .woocommerce a.button:focus, .site-main .woocommerce button.button:hover, .site-main .woocommerce button.button:focus, .site-main .woocommerce input.button:hover, .site-main .woocommerce input.button:focus, .woocommerce ul.products li.product .added_to_cart:hover, .woocommerce ul.products li.product .added_to_cart:focus, .woocommerce ul.products li.product .button:hover, .woocommerce ul.products li.product .button:focus, .woocommerce div.product form.cart .button:hover, .woocommerce div.product form.cart .button:focus, .woocommerce #review_form #respond .form-submit input:hover, .woocommerce #review_form #respond .form-submit input:focus, #infinite-handle span:hover" %}
{% set r = primary_button_border_radius %}
{% if primary_button_bg_color %}
{{ normal }} {
	background-color: {{ primary_button_bg_color }};
}
{% endif %}
{{ normal }} {
	color: {{ primary_button_text_color or "inherit" }};
	border-color: {{ primary_button_border_color or "transparent" }};
	border-width: {{ primary_button_border_width | number }}px;
	border-top-left-radius: {{ r["top-left"] | number }}px;
	border-top-right-radius: {{ r["top-right"] | number }}px;
	border-bottom-right-radius: {{ r["bottom-right"] | number }}px;
	border-bottom-left-radius: {{ r["bottom-left"] | number }}px;
}
{% if primary_button_hover_bg_color %}
{{ hover }} {
	background-color: {{ primary_button_hover_bg_color }};
}
{% endif %}
{{ hover }} {
	color: {{ primary_button_hover_text_color or "inherit" }};
	border-color: {{ primary_button_hover_border_color or "transparent" }};
}
"#;

const SECONDARY_BUTTON_SELECTOR: &str = ".btn-secondary, .pr-btn.btn-secondary";

const SECONDARY_BUTTON: &str = r#"
{% set r = secondary_button_border_radius %}
.btn-secondary,
.pr-btn.btn-secondary {
	color: {{ secondary_button_text_color or "inherit" }};
	border-color: {{ secondary_button_border_color or "transparent" }};
	border-width: {{ secondary_button_border_width | number }}px;
	background-color: {{ secondary_button_bg_color or "transparent" }};
	border-top-left-radius: {{ r["top-left"] | number }}px;
	border-top-right-radius: {{ r["top-right"] | number }}px;
	border-bottom-right-radius: {{ r["bottom-right"] | number }}px;
	border-bottom-left-radius: {{ r["bottom-left"] | number }}px;
}

.btn-secondary:hover,
.btn-secondary:focus,
.pr-btn.btn-secondary:hover,
.pr-btn.btn-secondary:focus {
	color: {{ secondary_button_hover_text_color or "inherit" }};
	border-color: {{ secondary_button_hover_border_color or "transparent" }};
	background-color: {{ secondary_button_hover_bg_color or "transparent" }};
}
"#;

const TEXT_BUTTON: &str = r#"
.pr-btn.btn-text-1, .btn-text-1 {
	color: {{ text_button_text_color }};
}

.pr-btn.btn-text-1:hover, .pr-btn.btn-text-1:focus, .btn-text-1:hover, .btn-text-1:focus {
	color: {{ text_button_hover_text_color or accent_color }};
}

.pr-btn.btn-text-1 > span::before {
	background-color: {{ text_button_hover_text_color or accent_color }};
}
"#;

pub(super) fn rule_set() -> RuleSet {
    RuleSet::new(vec![
        Area::new("accent").rule(Rule::block(&["accent_color"], ACCENT)),
        Area::new("top_bar")
            .gate(Condition::enabled("top_bar_enable"))
            .rule(Rule::block(&["accent_color"], TOP_BAR_ACCENT))
            .rule(Rule::design("#prisma-core-topbar", "top_bar_background", Background))
            .rule(Rule::design("#prisma-core-topbar", "top_bar_border", Border))
            .rule(Rule::design(".pr-topbar-widget", "top_bar_border", SeparatorColor))
            .rule(Rule::colors(
                "top_bar_text_color",
                &[
                    ("text-color", "#prisma-core-topbar"),
                    ("link-color", TOP_BAR_LINKS),
                    ("link-hover-color", TOP_BAR_LINKS_HOVER),
                ],
            )),
        Area::new("header")
            .rule(Rule::design("#prisma-core-header-inner", "header_background", Background))
            .rule(Rule::colors(
                "header_text_color",
                &[
                    ("text-color", ".prisma-core-logo .site-description"),
                    ("link-color", HEADER_LINKS),
                    ("link-hover-color", HEADER_LINKS_HOVER),
                ],
            ))
            .rule(Rule::design("#prisma-core-header-inner", "header_border", Border))
            .rule(Rule::design(".pr-header-widget", "header_border", SeparatorColor)),
        Area::new("mobile_navigation").rule(Rule::block(
            &["main_nav_mobile_breakpoint", "header_layout"],
            MOBILE_NAV,
        )),
        Area::new("main_navigation")
            .rule(Rule::colors(
                "main_nav_font_color",
                &[
                    ("link-color", "#prisma-core-header-inner .prisma-core-nav > ul > li > a"),
                    ("link-hover-color", NAV_LINKS_HOVER),
                ],
            ))
            .rule(Rule::design(
                ".prisma-core-header-layout-3 .pr-nav-container",
                "main_nav_background",
                Background,
            ))
            .rule(Rule::design(
                ".prisma-core-header-layout-3 .pr-nav-container",
                "main_nav_border",
                Border,
            ))
            .rule(Rule::range(
                ".prisma-core-nav.pr-header-element, .prisma-core-header-layout-1 .pr-header-widgets, .prisma-core-header-layout-2 .pr-header-widgets",
                "font-size",
                "main_nav_font_size",
                false,
                "rem",
            )),
        Area::new("hero")
            .gate(Condition::enabled("enable_hero"))
            .rule(Rule::block(&["hero_hover_slider_height"], HERO)),
        Area::new("pre_footer_cta_style_1")
            .gate(Condition::All(vec![
                Condition::enabled("enable_pre_footer_cta"),
                Condition::equals("pre_footer_cta_style", "1"),
            ]))
            .rule(Rule::design(
                ".pr-pre-footer-cta-style-1 #pr-pre-footer .pr-flex-row::after",
                "pre_footer_cta_background",
                Background,
            ))
            .rule(Rule::design(
                ".pr-pre-footer-cta-style-1 #pr-pre-footer .pr-flex-row::before",
                "pre_footer_cta_border",
                Border,
            )),
        Area::new("pre_footer_cta_style_2")
            .gate(Condition::All(vec![
                Condition::enabled("enable_pre_footer_cta"),
                Condition::equals("pre_footer_cta_style", "2"),
            ]))
            .rule(Rule::design(
                ".pr-pre-footer-cta-style-2 #pr-pre-footer::after",
                "pre_footer_cta_background",
                Background,
            ))
            .rule(Rule::design(
                ".pr-pre-footer-cta-style-2 #pr-pre-footer::before",
                "pre_footer_cta_border",
                Border,
            )),
        Area::new("pre_footer_cta")
            .gate(Condition::enabled("enable_pre_footer_cta"))
            .rule(Rule::block(&["pre_footer_cta_background"], PRE_FOOTER_OVERLAY))
            .rule(Rule::design(
                "#pr-pre-footer .h2, #pr-pre-footer .h3, #pr-pre-footer .h4",
                "pre_footer_cta_text_color",
                Color,
            ))
            .rule(Rule::range(
                "#pr-pre-footer .h3",
                "font-size",
                "pre_footer_cta_font_size",
                true,
                "px",
            )),
        Area::new("footer")
            .gate(Condition::Any(vec![
                Condition::enabled("enable_footer"),
                Condition::enabled("enable_copyright"),
            ]))
            .rule(Rule::design("#colophon", "footer_background", Background))
            .rule(Rule::colors(
                "footer_text_color",
                &[
                    ("text-color", "#colophon"),
                    ("link-color", "#colophon a"),
                    (
                        "link-hover-color",
                        "#colophon a:hover, #colophon li.current_page_item > a, #colophon .prisma-core-social-nav > ul > li > a .pr-icon.bottom-icon",
                    ),
                    ("widget-title-color", "#colophon .widget-title"),
                ],
            )),
        Area::new("footer_border")
            .gate(Condition::enabled("enable_footer"))
            .rule(Rule::block(&["footer_border"], FOOTER_BORDER)),
        Area::new("layout")
            .rule(Rule::block(&["sidebar_width"], SIDEBAR))
            .rule(Rule::block(&["boxed_content_background_color"], BOXED_CONTENT))
            .rule(Rule::block(&["content_text_color"], CONTENT_TEXT))
            .rule(Rule::block(&["background_color"], CONTENT_OFFSET))
            .rule(Rule::block(&["content_link_hover_color"], LINK_HOVER))
            .rule(Rule::block(&["headings_color"], HEADINGS))
            .rule(Rule::block(&["container_width"], CONTAINER)),
        Area::new("boxed_layout")
            .gate(Condition::equals("site_layout", "boxed"))
            .rule(Rule::block(&["container_width"], BOXED_FULLWIDTH)),
        Area::new("logo")
            .rule(Rule::range(".prisma-core-logo img", "max-height", "logo_max_height", true, "px"))
            .rule(Rule::range(".prisma-core-logo img.pr-svg-logo", "height", "logo_max_height", true, "px"))
            .rule(Rule::spacing(".prisma-core-logo .logo-inner", "margin", "logo_margin")),
        Area::new("transparent_header")
            .rule(Rule::range(
                ".pr-tsp-header .prisma-core-logo img",
                "max-height",
                "tsp_logo_max_height",
                true,
                "px",
            ))
            .rule(Rule::range(
                ".pr-tsp-header .prisma-core-logo img.pr-svg-logo",
                "height",
                "tsp_logo_max_height",
                true,
                "px",
            ))
            .rule(Rule::spacing(".pr-tsp-header .prisma-core-logo .logo-inner", "margin", "tsp_logo_margin"))
            .rule(Rule::design(".pr-tsp-header #prisma-core-header-inner", "tsp_header_background", Background))
            .rule(Rule::colors(
                "tsp_header_font_color",
                &[
                    ("text-color", ".pr-tsp-header .prisma-core-logo .site-description"),
                    ("link-color", TSP_LINKS),
                    ("link-hover-color", TSP_LINKS_HOVER),
                ],
            ))
            .rule(Rule::design(".pr-tsp-header #prisma-core-header-inner", "tsp_header_border", Border))
            .rule(Rule::design(".pr-tsp-header .pr-header-widget", "tsp_header_border", SeparatorColor)),
        Area::new("page_header")
            .gate(Condition::enabled("page_header_enable"))
            .rule(Rule::range("#page .page-header .page-title", "font-size", "page_header_font_size", true, "px"))
            .rule(Rule::spacing(
                ".pr-page-title-align-left .page-header.pr-has-page-title, .pr-page-title-align-right .page-header.pr-has-page-title, .pr-page-title-align-center .page-header .pr-page-header-wrapper",
                "padding",
                "page_header_spacing",
            ))
            .rule(Rule::design(
                ".pr-tsp-header:not(.pr-tsp-absolute) #masthead",
                "page_header_background",
                Background,
            ))
            .rule(Rule::design(".page-header", "page_header_background", Background))
            .rule(Rule::block(&["page_header_text_color"], PAGE_HEADER_COLORS))
            .rule(Rule::design(".page-header", "page_header_border", Border)),
        Area::new("breadcrumbs")
            .gate(Condition::enabled("breadcrumbs_enable"))
            .rule(Rule::spacing(".pr-breadcrumbs", "padding", "breadcrumbs_spacing"))
            .rule(Rule::design(".pr-breadcrumbs", "breadcrumbs_background", Background))
            .rule(Rule::design(".pr-breadcrumbs", "breadcrumbs_border", Border))
            .rule(Rule::design(".pr-breadcrumbs", "breadcrumbs_text_color", Color)),
        Area::new("copyright")
            .gate(Condition::enabled("enable_copyright"))
            .rule(Rule::design("#prisma-core-copyright", "copyright_background", Background))
            .rule(Rule::colors(
                "copyright_text_color",
                &[
                    ("text-color", "#prisma-core-copyright"),
                    ("link-color", "#prisma-core-copyright a"),
                    ("link-hover-color", COPYRIGHT_LINKS_HOVER),
                ],
            ))
            .rule(Rule::owned_block(
                "copyright_separator",
                &["footer_text_color"],
                COPYRIGHT_SEPARATOR,
            )),
        Area::new("base_typography")
            .rule(Rule::range("html", "font-size", "html_base_font_size", true, "px")),
        Area::new("font_smoothing")
            .gate(Condition::enabled("font_smoothing"))
            .rule(Rule::owned_block("font_smoothing", &[], FONT_SMOOTHING)),
        Area::new("typography")
            .rule(Rule::typography("body", "body_font"))
            .rule(Rule::typography(HEADINGS_SELECTOR, "headings_font"))
            .rule(Rule::typography(
                "h1, .h1, .prisma-core-logo .site-title, .page-header .page-title",
                "h1_font",
            ))
            .rule(Rule::typography("h2, .h2", "h2_font"))
            .rule(Rule::typography("h3, .h3", "h3_font"))
            .rule(Rule::typography("h4, .h4", "h4_font"))
            .rule(Rule::typography("h5", "h5_font"))
            .rule(Rule::typography("h6", "h6_font"))
            .rule(Rule::typography(HEADING_EM_SELECTOR, "heading_em_font"))
            .rule(Rule::range(
                "#prisma-core-header .prisma-core-logo .site-title",
                "font-size",
                "logo_text_font_size",
                true,
                "px",
            ))
            .rule(Rule::range("#main .widget-title", "font-size", "sidebar_widget_title_font_size", true, "px"))
            .rule(Rule::range("#colophon .widget-title", "font-size", "footer_widget_title_font_size", true, "px")),
        Area::new("single_post")
            .rule(Rule::spacing(
                ".pr-single-title-in-page-header #page .page-header .pr-page-header-wrapper",
                "padding",
                "single_title_spacing",
            ))
            .rule(Rule::range(".single-post .entry-content", "font-size", "single_content_font_size", true, "px")),
        Area::new("single_narrow")
            .gate(Condition::equals("single_content_width", "narrow"))
            .rule(Rule::block(&["single_narrow_container_width"], SINGLE_NARROW)),
        Area::new("primary_button")
            .rule(Rule::owned_block(
                "primary_button",
                &[
                    "primary_button_bg_color",
                    "primary_button_hover_bg_color",
                    "primary_button_text_color",
                    "primary_button_hover_text_color",
                    "primary_button_border_color",
                    "primary_button_hover_border_color",
                    "primary_button_border_width",
                    "primary_button_border_radius",
                ],
                PRIMARY_BUTTON,
            ))
            .rule(Rule::typography(PRIMARY_BUTTON_SELECTOR, "primary_button_typography")),
        Area::new("secondary_button")
            .rule(Rule::owned_block(
                "secondary_button",
                &[
                    "secondary_button_bg_color",
                    "secondary_button_hover_bg_color",
                    "secondary_button_text_color",
                    "secondary_button_hover_text_color",
                    "secondary_button_border_color",
                    "secondary_button_hover_border_color",
                    "secondary_button_border_width",
                    "secondary_button_border_radius",
                ],
                SECONDARY_BUTTON,
            ))
            .rule(Rule::typography(SECONDARY_BUTTON_SELECTOR, "secondary_button_typography")),
        Area::new("text_button")
            .rule(Rule::owned_block(
                "text_button",
                &["text_button_text_color", "text_button_hover_text_color", "accent_color"],
                TEXT_BUTTON,
            ))
            .rule(Rule::typography(".pr-btn.btn-text-1, .btn-text-1", "text_button_typography")),
        Area::new("custom").rule(Rule::raw("custom_css")),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;

    #[test]
    fn test_every_read_key_is_declared() {
        let schema = Schema::builtin();
        for (area, rule) in rule_set().rules() {
            for key in rule.reads().into_iter().chain(area.gate.keys()) {
                assert!(schema.contains(key), "{} reads undeclared key {}", area.name, key);
            }
        }
    }

    #[test]
    fn test_templates_never_open_a_comment() {
        for (area, rule) in rule_set().rules() {
            if let Rule::Block { template, .. } = rule {
                assert!(!template.contains("{#"), "{} template contains '{{#'", area.name);
            }
        }
    }

    #[test]
    fn test_top_bar_selectors_only_in_top_bar_area() {
        for (area, rule) in rule_set().rules() {
            if area.name == "top_bar" {
                continue;
            }
            let text = serde_json::to_string(rule).unwrap();
            assert!(!text.contains("topbar"), "{} mentions the top bar", area.name);
        }
    }

    #[test]
    fn test_top_bar_accent_precedes_user_colors() {
        let rules = rule_set();
        let top_bar = rules.areas().iter().find(|a| a.name == "top_bar").unwrap();
        assert_eq!(top_bar.rules[0].owner(), "accent_color");
        assert!(top_bar.rules[1..].iter().all(|r| r.owner() != "accent_color"));
    }

    #[test]
    fn test_custom_css_is_last() {
        let rules = rule_set();
        let last = rules.areas().last().unwrap();
        assert_eq!(last.rules, vec![Rule::raw("custom_css")]);
    }
}
