use std::fmt::Write;

use super::{Layout, RenderError};
use crate::content::ContentStore;
use crate::filter::{self, FilterState};
use crate::html::escape;
use crate::models::*;

/// Feedback shown on the contact page after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactNotice {
    Sent,
    Error(String),
}

fn tag_list(html: &mut String, tags: &[String]) -> Result<(), RenderError> {
    html.push_str("<ul class=\"tags\">");
    for tag in tags {
        write!(html, "<li>{}</li>", escape(tag))?;
    }
    html.push_str("</ul>");
    Ok(())
}

fn project_card(html: &mut String, project: &Project) -> Result<(), RenderError> {
    write!(
        html,
        "<article class=\"project\"><h3><a href=\"/projects/{}\">{}</a></h3><p>{}</p>",
        escape(&project.slug),
        escape(&project.title),
        escape(&project.summary)
    )?;
    tag_list(html, &project.tags)?;
    html.push_str("</article>");
    Ok(())
}

/// Link to the projects page with `state` applied.
pub fn filter_href(state: &FilterState) -> String {
    let mut params = Vec::new();
    let query = state.search_text.trim();
    if !query.is_empty() {
        params.push(format!("q={}", urlencoding::encode(query)));
    }
    if !state.selected_tags.is_empty() {
        let tags: Vec<&str> = state.selected_tags.iter().map(String::as_str).collect();
        params.push(format!("tags={}", urlencoding::encode(&tags.join(","))));
    }
    if params.is_empty() {
        "/projects".to_string()
    } else {
        format!("/projects?{}", params.join("&"))
    }
}

pub fn home_page(store: &ContentStore, layout: &Layout<'_>) -> Result<String, RenderError> {
    let profile = &store.profile;
    let mut body = String::new();

    write!(
        body,
        "<section id=\"about\" data-section><h1>{}</h1><p class=\"headline\">{}</p>\
         <p class=\"typewriter\" data-phrases=\"{}\">{}</p><p>{}</p></section>",
        escape(&profile.name),
        escape(&profile.headline),
        escape(&profile.taglines.join("|")),
        escape(profile.taglines.first().map(String::as_str).unwrap_or_default()),
        escape(&profile.bio)
    )?;

    body.push_str("<section id=\"skills\" data-section><h2>Skills</h2>");
    for (category, skills) in store.skills_by_category() {
        write!(body, "<h3>{}</h3><ul>", category.as_str())?;
        for skill in skills {
            write!(
                body,
                "<li data-level=\"{}\">{}</li>",
                skill.level,
                escape(&skill.name)
            )?;
        }
        body.push_str("</ul>");
    }
    body.push_str("</section>");

    body.push_str("<section id=\"featured\" data-section><h2>Featured projects</h2>");
    for project in store.featured_projects() {
        project_card(&mut body, project)?;
    }
    body.push_str("<p><a href=\"/projects\">All projects</a></p></section>");

    body.push_str("<section id=\"certifications\" data-section><h2>Certifications</h2><ul>");
    for cert in &store.certifications {
        write!(
            body,
            "<li>{} <span>{}, {}</span></li>",
            escape(&cert.title),
            escape(&cert.issuer),
            cert.issued.format("%b %Y")
        )?;
    }
    body.push_str("</ul></section>");

    layout.render("", &body)
}

pub fn projects_page(
    store: &ContentStore,
    layout: &Layout<'_>,
    state: &FilterState,
) -> Result<String, RenderError> {
    let matches = store.filter_projects(state);
    let mut body = String::new();

    write!(
        body,
        "<h1>Projects</h1><form method=\"get\" action=\"/projects\" role=\"search\">\
         <input type=\"search\" name=\"q\" value=\"{}\" placeholder=\"Search projects\">",
        escape(&state.search_text)
    )?;
    if !state.selected_tags.is_empty() {
        let tags: Vec<&str> = state.selected_tags.iter().map(String::as_str).collect();
        write!(
            body,
            "<input type=\"hidden\" name=\"tags\" value=\"{}\">",
            escape(&tags.join(","))
        )?;
    }
    body.push_str("</form><ul class=\"tag-filter\">");

    for tag in filter::all_tags(&store.projects) {
        let mut toggled = state.clone();
        let selected = toggled.toggle_tag(&tag);
        // `selected` is the state after clicking, so the chip is currently on when it is false.
        write!(
            body,
            "<li><a href=\"{}\" aria-pressed=\"{}\">{}</a></li>",
            escape(&filter_href(&toggled)),
            !selected,
            escape(&tag)
        )?;
    }
    body.push_str("</ul>");

    if matches.is_empty() {
        body.push_str("<p class=\"empty\">No projects match your filters.</p>");
    } else {
        write!(body, "<p class=\"count\">{} of {}</p>", matches.len(), store.projects.len())?;
        for project in matches {
            project_card(&mut body, project)?;
        }
    }

    layout.render("Projects", &body)
}

pub fn project_page(
    store: &ContentStore,
    layout: &Layout<'_>,
    slug: &str,
) -> Result<String, RenderError> {
    let project = store
        .project(slug)
        .ok_or_else(|| RenderError::NotFound(format!("project {}", slug)))?;

    let mut body = String::new();
    write!(
        body,
        "<article><h1>{}</h1><p class=\"year\">{}</p><p>{}</p>",
        escape(&project.title),
        project.year,
        escape(&project.summary)
    )?;
    tag_list(&mut body, &project.tags)?;
    body.push_str("<h2>Built with</h2>");
    tag_list(&mut body, &project.tech)?;
    if let Some(url) = &project.repo_url {
        write!(body, "<p><a href=\"{}\">Source</a></p>", escape(url))?;
    }
    if let Some(url) = &project.demo_url {
        write!(body, "<p><a href=\"{}\">Live demo</a></p>", escape(url))?;
    }
    body.push_str("</article>");

    layout.render(&project.title, &body)
}

pub fn experience_page(store: &ContentStore, layout: &Layout<'_>) -> Result<String, RenderError> {
    let mut body = String::from("<h1>Experience</h1><ol class=\"timeline\">");
    for role in &store.experience {
        write!(
            body,
            "<li{}><h2>{} · {}</h2><p class=\"period\">{}</p><p>{}</p><ul>",
            if role.is_current() { " class=\"current\"" } else { "" },
            escape(&role.title),
            escape(&role.company),
            escape(&role.period()),
            escape(&role.summary)
        )?;
        for highlight in &role.highlights {
            write!(body, "<li>{}</li>", escape(highlight))?;
        }
        body.push_str("</ul>");
        tag_list(&mut body, &role.tags)?;
        body.push_str("</li>");
    }
    body.push_str("</ol>");

    layout.render("Experience", &body)
}

pub fn blog_page(store: &ContentStore, layout: &Layout<'_>) -> Result<String, RenderError> {
    let mut body = String::from("<h1>Blog</h1>");
    for post in store.posts_newest_first() {
        write!(
            body,
            "<article><h2><a href=\"/blog/{}\">{}</a></h2>\
             <p class=\"meta\"><time datetime=\"{}\">{}</time> · {} min read</p><p>{}</p>",
            escape(&post.slug),
            escape(&post.title),
            post.published,
            post.published.format("%B %-d, %Y"),
            post.reading_minutes,
            escape(&post.summary)
        )?;
        tag_list(&mut body, &post.tags)?;
        body.push_str("</article>");
    }

    layout.render("Blog", &body)
}

pub fn post_page(
    store: &ContentStore,
    layout: &Layout<'_>,
    slug: &str,
) -> Result<String, RenderError> {
    let post = store
        .post(slug)
        .ok_or_else(|| RenderError::NotFound(format!("post {}", slug)))?;

    let mut body = String::new();
    write!(
        body,
        "<article><h1>{}</h1><p class=\"meta\"><time datetime=\"{}\">{}</time> · {} min read</p>\
         <p class=\"lead\">{}</p>",
        escape(&post.title),
        post.published,
        post.published.format("%B %-d, %Y"),
        post.reading_minutes,
        escape(&post.summary)
    )?;
    if let Some(updated) = post.updated {
        write!(body, "<p class=\"updated\">Updated {}</p>", updated.format("%B %-d, %Y"))?;
    }
    tag_list(&mut body, &post.tags)?;
    body.push_str("</article>");

    layout.render(&post.title, &body)
}

pub fn scholarships_page(store: &ContentStore, layout: &Layout<'_>) -> Result<String, RenderError> {
    let mut body = String::from("<h1>Scholarships &amp; awards</h1>");
    for award in &store.scholarships {
        write!(
            body,
            "<article><h2>{}</h2><p class=\"meta\">{} · {}</p><p>{}</p></article>",
            escape(&award.title),
            escape(&award.awarder),
            award.year,
            escape(&award.summary)
        )?;
    }

    layout.render("Scholarships", &body)
}

pub fn contact_page(
    layout: &Layout<'_>,
    notice: Option<&ContactNotice>,
) -> Result<String, RenderError> {
    let mut body = String::from("<h1>Get in touch</h1>");
    match notice {
        Some(ContactNotice::Sent) => {
            body.push_str("<p role=\"status\">Thanks! Your message has been sent.</p>")
        }
        Some(ContactNotice::Error(message)) => {
            write!(body, "<p role=\"alert\">{}</p>", escape(message))?
        }
        None => {}
    }
    write!(
        body,
        "<form method=\"post\" action=\"/contact\">\
         <label>Name <input name=\"name\" required></label>\
         <label>Email <input name=\"email\" type=\"email\" required></label>\
         <label>Message <textarea name=\"message\" required></textarea></label>\
         <button type=\"submit\">Send</button></form>\
         <p>Or email <a href=\"mailto:{email}\">{email}</a>.</p>",
        email = escape(&layout.profile.email)
    )?;

    layout.render("Contact", &body)
}

pub fn not_found_page(layout: &Layout<'_>) -> Result<String, RenderError> {
    layout.render(
        "Not found",
        "<h1>Page not found</h1><p>That page doesn't exist.</p><p><a href=\"/\">Go home</a></p>",
    )
}

/// Page-level fallback with a retry link back to the failed page.
pub fn error_page(layout: &Layout<'_>) -> Result<String, RenderError> {
    let body = format!(
        "<h1>Something went wrong</h1><p>This page failed to load.</p>\
         <p><a href=\"{}\">Try again</a></p>",
        escape(&layout.current_url())
    );
    layout.render("Error", &body)
}
