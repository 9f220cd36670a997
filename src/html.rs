//! Markup helpers for generated pages.
//!
//! Every helper wraps its argument in one tag and terminates the result with
//! [`CRLF`], so fragments can be concatenated directly.

/// Line terminator used on the wire and in generated markup.
pub const CRLF: &str = "\r\n";

pub fn title(text: &str) -> String {
    format!("<title>{CRLF}{text}</title>{CRLF}")
}

pub fn head(inner: &str) -> String {
    format!("<head>{CRLF}{inner}</head>{CRLF}")
}

pub fn body(inner: &str) -> String {
    format!("<body>{CRLF}{inner}</body>{CRLF}")
}

pub fn paragraph(text: &str) -> String {
    format!("<p>{CRLF}{text}</p>{CRLF}")
}

pub fn heading(text: &str) -> String {
    format!("<h1>{text}</h1>{CRLF}")
}

/// A link followed by a line break.
pub fn anchor(name: &str, href: &str) -> String {
    format!("<a href=\"{href}\">{name}</a><br>{CRLF}")
}

pub fn preformatted(inner: &str) -> String {
    format!("<pre>{CRLF}{inner}</pre>{CRLF}")
}

/// Wraps `inner` as a complete `<html>` document.
pub fn document(inner: &str) -> String {
    format!("<html>{CRLF}{inner}</html>{CRLF}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_page_shape() {
        let page = document(&(head(&title("404 Not Found")) + &body(&heading("Not Found"))));
        assert_eq!(
            page,
            "<html>\r\n<head>\r\n<title>\r\n404 Not Found</title>\r\n</head>\r\n\
             <body>\r\n<h1>Not Found</h1>\r\n</body>\r\n</html>\r\n"
        );
    }

    #[test]
    fn anchor_has_line_break() {
        assert_eq!(anchor("docs/", "docs/"), "<a href=\"docs/\">docs/</a><br>\r\n");
    }
}
