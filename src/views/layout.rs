use common::{Page, ids};
use maud::{DOCTYPE, Markup, PreEscaped, html};

pub const APP_NAME: &str = "Campus Energy Dashboard";

const PLOTLY_SCRIPT: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";
const FONT_AWESOME: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";
const STYLESHEET: &str = "/static/css/dashboard.css";

/// wasm-bindgen output of the frontend crate, served from the static directory.
pub const FRONTEND_MODULE: &str = "/static/pkg/frontend.js";

/// What the shell needs to know about the page being rendered.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    /// `None` for pages the frontend has no controller for (404).
    pub page: Option<Page>,
    pub title: &'a str,
    pub api_base_url: &'a str,
}

impl<'a> PageContext<'a> {
    pub fn for_page(page: Page, api_base_url: &'a str) -> Self {
        Self {
            page: Some(page),
            title: page.title(),
            api_base_url,
        }
    }
}

fn sidebar(active: Option<Page>) -> Markup {
    html! {
        aside id=(ids::SIDEBAR) class="sidebar" {
            div class="sidebar-brand" {
                i class="fa-solid fa-bolt" {}
                span { (APP_NAME) }
            }
            nav {
                ul class="nav-list" {
                    @for page in Page::ALL {
                        li {
                            a.nav-link.active[active == Some(page)] href=(page.path()) {
                                i class={ "fa-solid " (page.icon()) } {}
                                span { (page.title()) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Wrap page content in the shared document: sidebar, header, scripts.
///
/// `<body>` carries the page key and the API base URL for the frontend, and
/// starts with the `preload` class so the restored sidebar state does not
/// animate in.
pub fn shell(ctx: &PageContext, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (ctx.title) " | " (APP_NAME) }
                link rel="stylesheet" href=(FONT_AWESOME);
                link rel="stylesheet" href=(STYLESHEET);
                script src=(PLOTLY_SCRIPT) charset="utf-8" {}
            }
            body class=(ids::CLASS_PRELOAD) data-page=[ctx.page.map(|p| p.key())] data-api-base=(ctx.api_base_url) {
                (sidebar(ctx.page))
                main id=(ids::MAIN_CONTENT) class="main-content" {
                    header class="page-header" {
                        button id=(ids::SIDEBAR_TOGGLE) type="button" class="sidebar-toggle toggled" aria-label="Toggle navigation" {
                            i class="fa-solid fa-bars" {}
                        }
                        h1 { (ctx.title) }
                    }
                    (content)
                }
                script type="module" {
                    (PreEscaped(format!("import init from '{}';\ninit();", FRONTEND_MODULE)))
                }
            }
        }
    }
}

pub fn not_found_page(path: &str, api_base_url: &str) -> Markup {
    let ctx = PageContext {
        page: None,
        title: "Page not found",
        api_base_url,
    };
    shell(
        &ctx,
        html! {
            section class="panel not-found" {
                h2 { "404" }
                p { "There is no page at " code { (path) } "." }
                a href=(Page::Overview.path()) { "Back to the overview" }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_marks_body_and_active_tab() {
        let ctx = PageContext::for_page(Page::Report, "http://api.local:8000");
        let markup = shell(&ctx, html! { p { "content" } }).into_string();

        assert!(markup.contains(r#"data-page="report""#));
        assert!(markup.contains(r#"data-api-base="http://api.local:8000""#));
        assert!(markup.contains(r#"class="preload""#));
        assert_eq!(markup.matches("nav-link active").count(), 1);
        let active = markup.find("nav-link active").unwrap();
        assert!(markup[active..active + 40].contains(r#"href="/report""#));
        assert!(markup.contains(FRONTEND_MODULE));
    }

    #[test]
    fn test_not_found_page_has_no_page_key() {
        let markup = not_found_page("/settings", "http://api.local").into_string();

        assert!(!markup.contains("data-page="));
        assert!(markup.contains("<code>/settings</code>"));
    }
}
