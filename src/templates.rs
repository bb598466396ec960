//! Tera template engine setup and shared render context.

use tera::Tera;

use crate::config::{SITE_DESCRIPTION, SITE_LANG, SITE_TITLE, TEMPLATE_GLOB};
use crate::error::AppError;

/// Initialize the Tera template engine from the template directory.
pub fn init_templates() -> Result<Tera, AppError> {
    let tera = Tera::new(TEMPLATE_GLOB)?;
    Ok(tera)
}

/// Build the context every page shares: the document metadata the base
/// layout injects into the head.
pub fn site_context() -> tera::Context {
    let mut context = tera::Context::new();
    context.insert("lang", SITE_LANG);
    context.insert("title", SITE_TITLE);
    context.insert("description", SITE_DESCRIPTION);
    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HEALTH_PATH;

    fn render_home() -> String {
        let tera = init_templates().unwrap();
        tera.render("home.html", &site_context()).unwrap()
    }

    #[test]
    fn test_document_language_is_english() {
        let html = render_home();
        assert!(html.contains(r#"<html lang="en">"#));
    }

    #[test]
    fn test_document_title_metadata() {
        let html = render_home();
        assert!(html.contains("<title>Next.js on ECS</title>"));
        assert!(html.contains(r#"content="Simple Next.js app deployed on AWS ECS""#));
    }

    #[test]
    fn test_home_links_to_health_endpoint() {
        let html = render_home();
        assert!(html.contains(&format!(r#"href="{}""#, HEALTH_PATH)));
        // The link text shows the probe path too
        assert!(html.contains(">/api/health</a>"));
    }

    #[test]
    fn test_home_greeting_and_description() {
        let html = render_home();
        assert!(html.contains("Hello from Next.js on ECS!!!!!"));
        assert!(html.contains("This app is running on AWS ECS Fargate."));
    }

    #[test]
    fn test_render_is_deterministic() {
        // No dynamic input anywhere in the pipeline, so repeated renders
        // must be byte-identical
        assert_eq!(render_home(), render_home());
    }

    #[test]
    fn test_page_content_rendered_inside_body() {
        let html = render_home();
        let body_start = html.find("<body>").unwrap();
        let body_end = html.find("</body>").unwrap();
        let greeting = html.find("Hello from Next.js on ECS").unwrap();
        assert!(body_start < greeting && greeting < body_end);
    }
}
