//! Homepage body: greeting block and topic card grid.
//!
//! Renders from snapshots the caller already fetched. Iteration happens
//! over the locally-owned query result, so there is no shared cursor
//! state and nothing to reset afterwards.

use std::fmt::Write;

use wiki_content::{GreetingContent, TopicEntry};

use crate::html::escape_html;

/// Fallback alt text when the greeting image carries none.
const GREETING_IMAGE_ALT: &str = "Greeting Image";

/// Message shown in place of the grid when no topics exist.
const NO_TOPICS_MESSAGE: &str = "No se han encontrado tópicos aún.";

/// Render the homepage body.
///
/// The greeting section always renders its containers; image, title,
/// and text appear independently iff present. The topics grid holds one
/// card per entry in query order, or the empty-state message when the
/// query returned nothing.
#[must_use]
pub fn render_body(greeting: &GreetingContent, topics: &[TopicEntry]) -> String {
    let mut out = String::new();
    out.push_str("<main class=\"wiki-main-content\"><div class=\"wiki-container\">\n");
    render_greeting(greeting, &mut out);
    render_topics(topics, &mut out);
    out.push_str("</div></main>\n");
    out
}

fn render_greeting(greeting: &GreetingContent, out: &mut String) {
    out.push_str(r#"<section class="wiki-greeting-block"><div class="wiki-greeting-box">"#);
    if let Some(image) = &greeting.image {
        let alt = image.alt_text.as_deref().unwrap_or(GREETING_IMAGE_ALT);
        write!(
            out,
            r#"<div class="wiki-greeting-img"><img src="{}" alt="{}"></div>"#,
            escape_html(&image.url),
            escape_html(alt)
        )
        .unwrap();
    }
    out.push_str(r#"<div class="wiki-greeting-content">"#);
    if let Some(title) = &greeting.title {
        write!(out, "<h2>{}</h2>", escape_html(title)).unwrap();
    }
    if let Some(text) = &greeting.text {
        write!(out, "<p>{}</p>", escape_html(text)).unwrap();
    }
    out.push_str("</div></div></section>\n");
}

fn render_topics(topics: &[TopicEntry], out: &mut String) {
    out.push_str(
        "<section class=\"wiki-topics-block\"><h3 class=\"section-title\">Tópicos Generales</h3>\
         <div class=\"wiki-topics-grid\">",
    );
    if topics.is_empty() {
        write!(out, "<p>{NO_TOPICS_MESSAGE}</p>").unwrap();
    } else {
        for topic in topics {
            render_card(topic, out);
        }
    }
    out.push_str("</div></section>\n");
}

fn render_card(topic: &TopicEntry, out: &mut String) {
    out.push_str(r#"<div class="wiki-topic-card">"#);
    if let Some(icon) = &topic.icon {
        write!(
            out,
            r#"<div class="wiki-topic-icon"><img src="{}" alt="Ícono de {}"></div>"#,
            escape_html(&icon.url),
            escape_html(&topic.title)
        )
        .unwrap();
    }
    write!(
        out,
        r#"<div class="wiki-topic-info"><h4><a href="{}">{}</a></h4>"#,
        escape_html(&topic.permalink),
        escape_html(&topic.title)
    )
    .unwrap();
    if let Some(summary) = &topic.summary {
        write!(out, "<p>{}</p>", escape_html(summary)).unwrap();
    }
    out.push_str("</div></div>\n");
}
