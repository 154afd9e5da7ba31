use std::fmt::Write;

use super::RenderError;
use crate::html::escape;
use crate::models::Profile;
use crate::nav::{ActiveTarget, SectionTracker};
use crate::scene::Palette;
use crate::theme::Theme;

/// Primary navigation, in display order.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/projects", "Projects"),
    ("/experience", "Experience"),
    ("/blog", "Blog"),
    ("/scholarships", "Scholarships"),
    ("/contact", "Contact"),
];

/// Observable sections of the home page.
pub const HOME_SECTIONS: &[&str] = &["about", "skills", "featured", "certifications"];

/// Per-request page chrome.
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    pub profile: &'a Profile,
    pub theme: Theme,
    /// Request path, used for navigation highlighting.
    pub path: &'a str,
    /// Raw query string, kept on links back to this page.
    pub query: Option<&'a str>,
}

impl<'a> Layout<'a> {
    pub fn new(profile: &'a Profile, theme: Theme, path: &'a str) -> Self {
        Self {
            profile,
            theme,
            path,
            query: None,
        }
    }

    pub fn with_query(mut self, query: Option<&'a str>) -> Self {
        self.query = query.filter(|q| !q.is_empty());
        self
    }

    /// Path and query of the current request.
    pub fn current_url(&self) -> String {
        match self.query {
            Some(query) => format!("{}?{}", self.path, query),
            None => self.path.to_string(),
        }
    }

    /// Navigation target to highlight for this request.
    pub fn active_target(&self) -> ActiveTarget {
        let sections: &[&str] = if self.path == "/" { HOME_SECTIONS } else { &[] };
        SectionTracker::new(sections.iter().copied()).active(self.path)
    }

    fn is_active(&self, href: &str) -> bool {
        let active = self.active_target();
        let current = active.as_str();
        if href == "/" {
            current == "/"
        } else {
            current == href || current.starts_with(&format!("{}/", href))
        }
    }

    /// Wrap `body` in the document shell.
    pub fn render(&self, title: &str, body: &str) -> Result<String, RenderError> {
        let palette = Palette::for_theme(self.theme);
        let name = escape(&self.profile.name);
        let full_title = if title.is_empty() {
            name.clone()
        } else {
            format!("{} · {}", escape(title), name)
        };

        let mut html = String::new();
        write!(
            html,
            "<!DOCTYPE html>\n<html lang=\"en\" data-theme=\"{theme}\">\n<head>\
             <meta charset=\"utf-8\">\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
             <meta name=\"description\" content=\"{headline}\">\
             <title>{title}</title>\
             <style>:root{{--bg:{bg};--fg:{fg};--accent:{accent}}}\
             body{{margin:0;background:var(--bg);color:var(--fg);font-family:system-ui,sans-serif}}\
             .ambient{{position:fixed;inset:0;width:100%;height:100%;z-index:-1;object-fit:cover}}\
             @media (prefers-reduced-motion: reduce){{*{{animation:none!important;transition:none!important}}}}\
             </style></head>\n<body>",
            theme = self.theme.as_str(),
            headline = escape(&self.profile.headline),
            title = full_title,
            bg = palette.background.hex(),
            fg = palette.particle.hex(),
            accent = palette.node.hex(),
        )?;

        write!(
            html,
            "<img class=\"ambient\" src=\"/background.svg?theme={}\" alt=\"\" aria-hidden=\"true\">",
            self.theme.as_str()
        )?;

        html.push_str("<header data-scroll-hide><nav><ul>");
        for (href, label) in NAV_LINKS {
            let current = if self.is_active(href) {
                " aria-current=\"page\""
            } else {
                ""
            };
            write!(html, "<li><a href=\"{}\"{}>{}</a></li>", href, current, label)?;
        }
        write!(
            html,
            "</ul><form method=\"post\" action=\"/theme/toggle\">\
             <input type=\"hidden\" name=\"back\" value=\"{back}\">\
             <button type=\"submit\" aria-label=\"Switch to {next} theme\">{current}</button>\
             </form></nav></header>\n",
            back = escape(&self.current_url()),
            next = self.theme.next(),
            current = self.theme,
        )?;

        write!(html, "<main>{}</main>\n<footer><ul>", body)?;
        for social in &self.profile.socials {
            write!(
                html,
                "<li><a href=\"{}\" rel=\"noopener\">{}</a></li>",
                escape(&social.url),
                escape(&social.label)
            )?;
        }
        write!(
            html,
            "</ul><p>&copy; {}</p></footer>\n</body>\n</html>\n",
            name
        )?;

        Ok(html)
    }
}
