//! Server-side HTML rendering.
//!
//! Markup is structural only: the document attributes, navigation with the
//! language toggle, translated page content and the footer. All text goes
//! through `escape_html`.

use crate::i18n::{
    lang_link, switch_language, DocumentRoot, Key, LanguageRegistry, LanguageState,
};
use crate::pages::{Page, PAGES};

/// Everything a render needs, passed explicitly from the handler.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Language and direction resolved from the request path
    pub state: LanguageState,

    /// Request path and query, used to build the language toggle
    pub current_path: &'a str,

    /// Year printed in the footer
    pub year: i32,
}

impl RenderContext<'_> {
    fn text(&self, key: Key) -> &'static str {
        key.text(self.state.language)
    }
}

/// Render a routed page.
pub fn render_page(ctx: &RenderContext<'_>, page: &Page) -> String {
    let mut body = format!(
        "<h1 data-key=\"{}\">{}</h1>\n",
        page.title.as_str(),
        escape_html(ctx.text(page.title))
    );
    for key in page.body_keys() {
        body.push_str(&format!(
            "<p data-key=\"{}\">{}</p>\n",
            key.as_str(),
            escape_html(ctx.text(key))
        ));
    }

    layout(ctx, ctx.text(page.title), Some(page), &body)
}

/// Render the not-found page in the resolved language.
pub fn render_not_found(ctx: &RenderContext<'_>) -> String {
    let home = lang_link(ctx.state.language, "/");
    let body = format!(
        "<h1 data-key=\"{}\">{}</h1>\n<p data-key=\"{}\">{}</p>\n<a href=\"{}\">{}</a>\n",
        Key::NotFoundTitle.as_str(),
        escape_html(ctx.text(Key::NotFoundTitle)),
        Key::NotFoundDescription.as_str(),
        escape_html(ctx.text(Key::NotFoundDescription)),
        escape_attr(&home),
        escape_html(ctx.text(Key::NotFoundBack)),
    );

    layout(ctx, ctx.text(Key::NotFoundTitle), None, &body)
}

fn layout(ctx: &RenderContext<'_>, title: &str, page: Option<&Page>, main: &str) -> String {
    let root = DocumentRoot::for_language(ctx.state.language);

    let mut html = format!(
        "<!DOCTYPE html>\n<html {}>\n<head>\n<meta charset=\"utf-8\">\n<title>{} | {}</title>\n",
        root.html_attributes(),
        escape_html(title),
        escape_html(ctx.text(Key::PanelTitle))
    );
    if let Some(page) = page {
        for config in LanguageRegistry::get().list_enabled() {
            html.push_str(&format!(
                "<link rel=\"alternate\" hreflang=\"{}\" href=\"{}\">\n",
                config.code,
                escape_attr(&lang_link(config.language, &page.route()))
            ));
        }
    }
    html.push_str("</head>\n<body>\n");
    html.push_str(&navigation(ctx));
    html.push_str(&format!("<main>\n{}</main>\n", main));
    html.push_str(&footer(ctx));
    html.push_str("</body>\n</html>\n");
    html
}

fn navigation(ctx: &RenderContext<'_>) -> String {
    let mut nav = String::from("<nav>\n<ul>\n");
    for page in PAGES {
        nav.push_str(&format!(
            "<li><a href=\"{}\" data-key=\"{}\">{}</a></li>\n",
            escape_attr(&lang_link(ctx.state.language, &page.route())),
            page.label.as_str(),
            escape_html(ctx.text(page.label))
        ));
    }
    nav.push_str("</ul>\n");

    for config in LanguageRegistry::get().list_enabled() {
        let language = config.language;
        if let Some(target) = switch_language(ctx.current_path, language) {
            let (history, method) = if target.replace {
                ("replace", "replace")
            } else {
                ("push", "assign")
            };
            nav.push_str(&format!(
                "<a class=\"language-toggle\" href=\"{}\" hreflang=\"{}\" lang=\"{}\" data-history=\"{}\" onclick=\"location.{}(this.href);return false;\">{}</a>\n",
                escape_attr(&target.to),
                language.code(),
                language.code(),
                history,
                method,
                escape_html(language.native_name())
            ));
        }
    }
    nav.push_str("</nav>\n");
    nav
}

fn footer(ctx: &RenderContext<'_>) -> String {
    let language = ctx.state.language;
    let mut footer = format!(
        "<footer>\n<p>{}</p>\n",
        escape_html(ctx.text(Key::FooterDescription))
    );

    let quick_links = [
        (Key::FooterLinksHome, "/"),
        (Key::FooterLinksServices, "/services"),
        (Key::FooterLinksAbout, "/about"),
        (Key::FooterLinksContact, "/contact"),
    ];
    footer.push_str(&format!(
        "<h4>{}</h4>\n<ul>\n",
        escape_html(ctx.text(Key::FooterQuickLinks))
    ));
    for (key, route) in quick_links {
        footer.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            escape_attr(&lang_link(language, route)),
            escape_html(ctx.text(key))
        ));
    }
    footer.push_str("</ul>\n");

    let services = [
        Key::ServiceDropdownStorage,
        Key::ServiceDropdownLogistics,
        Key::ServiceDropdownStation,
        Key::ServiceDropdownConsulting,
    ];
    footer.push_str(&format!(
        "<h4>{}</h4>\n<ul>\n",
        escape_html(ctx.text(Key::FooterServices))
    ));
    for key in services {
        footer.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            escape_attr(&lang_link(language, "/services")),
            escape_html(ctx.text(key))
        ));
    }
    footer.push_str("</ul>\n");

    footer.push_str(&format!(
        "<h4>{}</h4>\n<p>{}</p>\n<p>{}</p>\n",
        escape_html(ctx.text(Key::FooterContact)),
        escape_html(ctx.text(Key::ContactInfoPhoneValue1)),
        escape_html(ctx.text(Key::ContactInfoEmailValue1))
    ));
    footer.push_str(&format!(
        "<p>&copy; {} Petra Oil Services. {}</p>\n</footer>\n",
        ctx.year,
        escape_html(ctx.text(Key::FooterRights))
    ));
    footer
}

/// Escape text for an HTML text node.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape text for a double-quoted attribute value.
pub fn escape_attr(text: &str) -> String {
    escape_html(text)
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{resolve_path, Language};

    fn ctx(path: &str) -> RenderContext<'_> {
        RenderContext {
            state: resolve_path(path),
            current_path: path,
            year: 2025,
        }
    }

    // ==================== Escape Tests ====================

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Oil & Gas <b>"), "Oil &amp; Gas &lt;b&gt;");
        assert_eq!(escape_html("اكتشف بترا"), "اكتشف بترا");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr(r#"/en?q="x"&y='z'"#), "/en?q=&quot;x&quot;&amp;y=&#39;z&#39;");
    }

    // ==================== Document Tests ====================

    #[test]
    fn test_arabic_page_is_rtl() {
        let html = render_page(&ctx("/ar/about"), Page::from_route("about").unwrap());
        assert!(html.contains(r#"<html lang="ar" dir="rtl">"#));
        assert!(html.contains(Key::AboutHeroTitle.text(Language::Arabic)));
    }

    #[test]
    fn test_english_page_is_ltr() {
        let html = render_page(&ctx("/en/about"), Page::from_route("about").unwrap());
        assert!(html.contains(r#"<html lang="en" dir="ltr">"#));
        assert!(html.contains("Discover Petra"));
    }

    #[test]
    fn test_unsupported_language_renders_default() {
        let html = render_page(&ctx("/xx/about"), Page::from_route("about").unwrap());
        assert!(html.contains(r#"<html lang="ar" dir="rtl">"#));
        assert!(html.contains(Key::AboutHeroTitle.text(Language::Arabic)));
    }

    #[test]
    fn test_body_contains_every_section_key() {
        let page = Page::from_route("contact").unwrap();
        let html = render_page(&ctx("/en/contact"), page);
        for key in page.body_keys() {
            assert!(html.contains(&format!(r#"data-key="{}""#, key.as_str())));
        }
    }

    // ==================== Navigation Tests ====================

    #[test]
    fn test_nav_links_carry_language() {
        let html = render_page(&ctx("/en/services"), Page::from_route("services").unwrap());
        assert!(html.contains(r#"href="/en/about""#));
        assert!(html.contains(r#"href="/en""#));
        assert!(!html.contains(r#"href="/ar/about""#));
    }

    #[test]
    fn test_language_toggle_points_at_same_page() {
        let html = render_page(&ctx("/en/services?tab=1"), Page::from_route("services").unwrap());
        assert!(html.contains(r#"class="language-toggle" href="/ar/services?tab=1""#));
        assert!(html.contains(r#"data-history="replace""#));
        assert!(html.contains("location.replace(this.href)"));
    }

    #[test]
    fn test_language_toggle_omits_active_language() {
        let html = render_page(&ctx("/ar/services"), Page::from_route("services").unwrap());
        assert!(html.contains(r#"hreflang="en" lang="en""#));
        assert!(!html.contains(r#"hreflang="ar" lang="ar""#));
    }

    #[test]
    fn test_language_toggle_uses_native_name() {
        let html = render_page(&ctx("/en/about"), Page::from_route("about").unwrap());
        assert!(html.contains(">العربية</a>"));

        let html = render_page(&ctx("/ar/about"), Page::from_route("about").unwrap());
        assert!(html.contains(">English</a>"));
    }

    #[test]
    fn test_alternate_links() {
        let html = render_page(&ctx("/ar/safety"), Page::from_route("safety").unwrap());
        assert!(html.contains(r#"<link rel="alternate" hreflang="en" href="/en/safety">"#));
        assert!(html.contains(r#"<link rel="alternate" hreflang="ar" href="/ar/safety">"#));
    }

    // ==================== Footer Tests ====================

    #[test]
    fn test_footer_rights_line() {
        let html = render_page(&ctx("/en"), Page::home());
        assert!(html.contains("&copy; 2025 Petra Oil Services. All rights reserved."));
    }

    // ==================== Not Found Tests ====================

    #[test]
    fn test_not_found_in_resolved_language() {
        let html = render_not_found(&ctx("/en/careers"));
        assert!(html.contains("Page Not Found"));
        assert!(html.contains(r#"<a href="/en">Return to Home</a>"#));
        assert!(!html.contains("rel=\"alternate\""));
    }
}
