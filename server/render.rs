/// Template renderer for the figure server.
///
/// Each page is a static HTML file under `server/assets/` with placeholder
/// tokens like `{{TOKEN}}`, loaded at compile time. Callers substitute
/// their tokens in a closure; anything left over is blanked so raw
/// `{{TOKEN}}` strings never reach the browser.

const FIGURE_TEMPLATE: &str = include_str!("assets/figure.html");
const REPORT_TEMPLATE: &str = include_str!("assets/report.html");

#[derive(Clone, Copy)]
pub enum Page {
    Figure,
    Report,
}

pub fn render_page<F>(page: Page, fill: F) -> String
where
    F: FnOnce(String) -> String,
{
    let html = match page {
        Page::Figure => FIGURE_TEMPLATE,
        Page::Report => REPORT_TEMPLATE,
    };
    blank_remaining(fill(html.to_owned()))
}

fn blank_remaining(mut html: String) -> String {
    while let Some(start) = html.find("{{") {
        if let Some(end) = html[start..].find("}}") {
            let abs_end = start + end + 2;
            html.replace_range(start..abs_end, "");
        } else {
            break;
        }
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfilled_tokens_are_blanked() {
        let html = render_page(Page::Figure, |t| t.replace("{{SIDE}}", "7"));
        assert!(!html.contains("{{"));
        assert!(html.contains("7"));
    }
}
