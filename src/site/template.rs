//! The page template every rendered fragment is embedded into.

use crate::config::{NavLink, TemplateConfig};
use crate::utils::escape_html;

const STYLE: &str = r#"        * { margin: 0; padding: 0; box-sizing: border-box; }
        :root { --ink: #1a1a1a; --paper: #fafafa; --ghost: #999; --line: #e5e5e5; }
        @media (prefers-color-scheme: dark) {
            :root { --ink: #e5e5e5; --paper: #111; --ghost: #666; --line: #333; }
        }
        body {
            font: 16px/1.7 'SF Mono', 'Fira Code', 'JetBrains Mono', monospace;
            background: var(--paper);
            color: var(--ink);
            max-width: 680px;
            margin: 0 auto;
            padding: 4rem 2rem;
        }
        nav { margin-bottom: 4rem; font-size: 14px; }
        nav a { color: var(--ghost); text-decoration: none; margin-right: 1.5rem; }
        nav a:hover { color: var(--ink); }
        h1 { font-size: 14px; font-weight: 400; text-transform: uppercase; letter-spacing: 0.1em;
             margin-bottom: 3rem; padding-bottom: 1rem; border-bottom: 1px solid var(--line); }
        h2 { font-size: 14px; font-weight: 600; margin: 3rem 0 1.5rem; }
        h3 { font-size: 14px; font-weight: 400; color: var(--ghost); margin: 2rem 0 1rem; }
        p { margin-bottom: 1.5rem; }
        a { color: var(--ink); text-decoration: underline; text-underline-offset: 2px; }
        ul, ol { margin: 0 0 1.5rem 1.5rem; }
        li { margin-bottom: 0.5rem; }
        code { font-family: inherit; background: var(--line); padding: 0.1em 0.3em; font-size: 0.9em; }
        pre { background: var(--line); padding: 1.5rem; margin: 1.5rem 0; overflow-x: auto;
              font-size: 13px; line-height: 1.5; }
        pre code { background: none; padding: 0; }
        table { width: 100%; border-collapse: collapse; margin: 1.5rem 0; font-size: 14px; }
        th, td { text-align: left; padding: 0.75rem 1rem 0.75rem 0; border-bottom: 1px solid var(--line); }
        th { font-weight: 600; }
        blockquote { border-left: 2px solid var(--line); padding-left: 1rem; margin: 1.5rem 0; color: var(--ghost); }
        hr { border: none; border-top: 1px solid var(--line); margin: 3rem 0; }
        footer { margin-top: 6rem; padding-top: 2rem; border-top: 1px solid var(--line);
                 font-size: 13px; color: var(--ghost); }"#;

/// Fixed page layout parameterized by title and content
#[derive(Debug, Clone)]
pub struct PageTemplate {
    site_name: String,
    footer: String,
    nav: Vec<NavLink>,
}

impl Default for PageTemplate {
    fn default() -> Self {
        Self::from_config(&TemplateConfig::default())
    }
}

impl PageTemplate {
    pub fn from_config(config: &TemplateConfig) -> Self {
        Self {
            site_name: config.site_name.clone(),
            footer: config.footer.clone(),
            nav: config.nav.clone(),
        }
    }

    fn render_nav(&self) -> String {
        let mut links = vec![format!("<a href=\"/\">{}</a>", escape_html(&self.site_name))];
        links.extend(
            self.nav
                .iter()
                .map(|link| format!("<a href=\"{}\">{}</a>", escape_html(&link.href), escape_html(&link.label))),
        );
        links
            .iter()
            .map(|link| format!("        {link}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Embed an HTML fragment into a full page.
    ///
    /// The title is escaped; `content` is inserted as-is.
    pub fn render(&self, title: &str, content: &str) -> String {
        let footer = if self.footer.is_empty() {
            String::new()
        } else {
            format!("\n    <footer>\n        {}\n    </footer>\n", escape_html(&self.footer))
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{style}
    </style>
</head>
<body>
    <nav>
{nav}
    </nav>

    <main>
        {content}
    </main>
{footer}</body>
</html>
"#,
            title = escape_html(title),
            style = STYLE,
            nav = self.render_nav(),
            content = content,
            footer = footer,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_embeds_title_and_content() {
        let page = PageTemplate::default().render("Quickstart", "<h1>Quickstart</h1>\n<p>Hi</p>");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Quickstart</title>"));
        assert!(page.contains("<main>\n        <h1>Quickstart</h1>\n<p>Hi</p>\n    </main>"));
        assert!(!page.contains("<footer>"));
    }

    #[test]
    fn test_title_is_escaped_content_is_not() {
        let page = PageTemplate::default().render("A <b> & C", "<p>x</p>");
        assert!(page.contains("<title>A &lt;b&gt; &amp; C</title>"));
        assert!(page.contains("<p>x</p>"));
    }

    #[test]
    fn test_braces_in_content_survive() {
        let page = PageTemplate::default().render("T", "<p>{title} {content}</p>");
        assert!(page.contains("<p>{title} {content}</p>"));
    }

    #[test]
    fn test_nav_and_footer_from_config() {
        let config = TemplateConfig {
            site_name: "_b".to_string(),
            footer: "MIT License".to_string(),
            nav: vec![NavLink {
                label: "faq".to_string(),
                href: "/faq.html".to_string(),
            }],
        };
        let page = PageTemplate::from_config(&config).render("T", "");
        assert!(page.contains("<a href=\"/\">_b</a>"));
        assert!(page.contains("<a href=\"/faq.html\">faq</a>"));
        assert!(page.contains("<footer>\n        MIT License\n    </footer>"));
    }
}
