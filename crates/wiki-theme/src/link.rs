//! Anchor rendering for optional structured links.

use std::fmt::Write;

use wiki_content::LinkField;

use crate::html::escape_html;

/// Placeholder href for a link whose URL is empty: the anchor stays
/// clickable-safe without navigating anywhere.
const NOOP_HREF: &str = "javascript:void(0);";

/// Render an optional structured link as a single anchor element.
///
/// Returns an empty string when the link is absent. When present, the
/// anchor is always emitted: an empty URL falls back to a no-op
/// placeholder href. The `target` attribute appears only if the link
/// carries a non-empty target, and the `class` attribute only if a
/// non-empty class is supplied. Title, URL, target, and class are all
/// HTML-escaped.
///
/// # Example
///
/// ```
/// use wiki_content::LinkField;
/// use wiki_theme::link_anchor;
///
/// let link = LinkField {
///     title: "Leer más".to_owned(),
///     url: "/tema/redes".to_owned(),
///     target: None,
/// };
/// assert_eq!(
///     link_anchor(Some(&link), Some("boton")),
///     r#"<a href="/tema/redes" class="boton">Leer más</a>"#
/// );
/// assert_eq!(link_anchor(None, None), "");
/// ```
#[must_use]
pub fn link_anchor(link: Option<&LinkField>, class: Option<&str>) -> String {
    let Some(link) = link else {
        return String::new();
    };

    let href = if link.url.is_empty() {
        NOOP_HREF
    } else {
        &link.url
    };

    let mut out = String::new();
    write!(out, r#"<a href="{}""#, escape_html(href)).unwrap();
    if let Some(class) = class
        && !class.is_empty()
    {
        write!(out, r#" class="{}""#, escape_html(class)).unwrap();
    }
    if let Some(target) = link.target.as_deref()
        && !target.is_empty()
    {
        write!(out, r#" target="{}""#, escape_html(target)).unwrap();
    }
    write!(out, ">{}</a>", escape_html(&link.title)).unwrap();
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn link(title: &str, url: &str, target: Option<&str>) -> LinkField {
        LinkField {
            title: title.to_owned(),
            url: url.to_owned(),
            target: target.map(str::to_owned),
        }
    }

    #[test]
    fn test_absent_link_renders_nothing() {
        assert_eq!(link_anchor(None, None), "");
        assert_eq!(link_anchor(None, Some("boton")), "");
    }

    #[test]
    fn test_empty_url_uses_noop_href() {
        let l = link("Pronto", "", Some("_blank"));
        assert_eq!(
            link_anchor(Some(&l), None),
            r#"<a href="javascript:void(0);" target="_blank">Pronto</a>"#
        );
    }

    #[test]
    fn test_class_omitted_when_empty() {
        let l = link("Inicio", "/", None);
        assert_eq!(link_anchor(Some(&l), Some("")), r#"<a href="/">Inicio</a>"#);
    }

    #[test]
    fn test_target_omitted_when_empty() {
        let l = link("Inicio", "/", Some(""));
        assert_eq!(link_anchor(Some(&l), None), r#"<a href="/">Inicio</a>"#);
    }

    #[test]
    fn test_all_attributes() {
        let l = link("Docs", "https://example.com", Some("_blank"));
        assert_eq!(
            link_anchor(Some(&l), Some("boton")),
            r#"<a href="https://example.com" class="boton" target="_blank">Docs</a>"#
        );
    }

    #[test]
    fn test_title_and_url_are_escaped() {
        let l = link("<b>¡Hola!</b>", "/buscar?a=1&b=2", None);
        assert_eq!(
            link_anchor(Some(&l), None),
            r#"<a href="/buscar?a=1&amp;b=2">&lt;b&gt;¡Hola!&lt;/b&gt;</a>"#
        );
    }
}
