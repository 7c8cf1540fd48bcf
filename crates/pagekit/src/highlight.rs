// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Keyword highlighting for source listings.
//!
//! Highlighting is plain token-for-token string substitution over fixed
//! keyword tables. A line is HTML-escaped once, then keyword shapes are
//! replaced with `<font>` markup depending on the [`Classification`].
//!
//! # Ordering
//!
//! Every substitution scans the line as modified by the previous ones, so
//! table order is significant: a later token can match inside markup that
//! an earlier token inserted. For HTML-family sources the passes run as
//! tag keywords, then templating directives, then `$`.

use lazy_static::lazy_static;

use crate::source::Classification;

/// HTML (and JSP) tag names, in substitution order.
pub const HTML_KEYWORDS: &[&str] = &[
    "html", "head", "style", "script", "title", "link", "body", "h1", "h2", "h3", "h4", "h5",
    "h6", "p", "hr", "br", "span", "table", "tr", "th", "td", "a", "b", "i", "u", "ul", "ol",
    "li", "form", "div", "input", "fieldset", "pre", "tt", "ajax-response", "response", "%@",
    "%@taglib", "jsp:include", "c:forEach", "c:choose", "c:when", "c:otherwise",
    "fmt:formatNumber", "fmt:formatDate", "center",
];

/// XML element names, in substitution order.
pub const XML_KEYWORDS: &[&str] = &[
    "click-app", "pages", "page", "excludes", "headers", "header", "format", "mode", "type",
    "filter-name", "filter-class", "filter-mapping", "filter", "web-app", "display-name",
    "description", "servlet-mapping", "servlet-name", "servlet-class", "init-param",
    "param-name", "param-value", "servlet", "load-on-startup", "security-constraint",
    "web-resource-collection", "auth-constraint", "role-name", "login-config", "auth-method",
    "realm-name", "security-role", "url-pattern", "welcome-file-list", "welcome-file", "Context",
    "ResourceLink", "menu", "?xml", "controls", "control", "listener-class", "listener",
];

/// Templating directives, in substitution order.
pub const TEMPLATE_KEYWORDS: &[&str] = &[
    "#if", "#if(", "#elseif", "#elseif(", "#else", "#else(", "#end", "#set", "#set(",
    "#include", "#include(", "#parse", "#parse(", "#stop", "#macro", "#macro(", "#foreach",
    "#foreach(", "##", "#*", "*#", "#",
];

/// Color of tag names.
pub const TAG_COLOR: &str = "#00029F";
/// Color of templating directives and `$`.
pub const DIRECTIVE_COLOR: &str = "red";

/// A literal search/replace pair.
#[derive(Debug, Clone)]
struct Substitution {
    search: String,
    replace: String,
}

/// A templating token with its rendered markup.
#[derive(Debug, Clone)]
struct DirectiveRule {
    token: &'static str,
    markup: String,
    spaced_search: String,
    spaced_replace: String,
}

lazy_static! {
    static ref HTML_TAG_RULES: Vec<Substitution> = tag_rules(HTML_KEYWORDS);
    static ref XML_TAG_RULES: Vec<Substitution> = tag_rules(XML_KEYWORDS);
    static ref DIRECTIVE_RULES: Vec<DirectiveRule> = TEMPLATE_KEYWORDS
        .iter()
        .map(|&token| {
            let markup = colorize(DIRECTIVE_COLOR, token);
            DirectiveRule {
                token,
                spaced_search: format!(" {} ", token),
                spaced_replace: format!(" {} ", markup),
                markup,
            }
        })
        .collect();
    static ref RENDERED_DOLLAR: String = colorize(DIRECTIVE_COLOR, "$");
}

fn colorize(color: &str, token: &str) -> String {
    format!("<font color=\"{}\">{}</font>", color, token)
}

// Four escaped shapes per tag: <kw>, <kw/>, </kw>, "<kw "
fn tag_rules(keywords: &[&str]) -> Vec<Substitution> {
    let mut rules = Vec::with_capacity(keywords.len() * 4);
    for keyword in keywords {
        let rendered = colorize(TAG_COLOR, keyword);
        for (prefix, suffix) in [("&lt;", "&gt;"), ("&lt;", "/&gt;"), ("&lt;/", "&gt;"), ("&lt;", " ")] {
            rules.push(Substitution {
                search: format!("{}{}{}", prefix, keyword, suffix),
                replace: format!("{}{}{}", prefix, rendered, suffix),
            });
        }
    }
    rules
}

/// Escapes `&`, `<`, `>`, `"` and `'` for inclusion in HTML.
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len() + s.len() / 8);
    for ch in s.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn apply_substitutions(mut line: String, rules: &[Substitution]) -> String {
    for rule in rules {
        if line.contains(&rule.search) {
            line = line.replace(&rule.search, &rule.replace);
        }
    }
    line
}

fn apply_directives(mut line: String) -> String {
    for rule in DIRECTIVE_RULES.iter() {
        if line.contains(&rule.spaced_search) {
            line = line.replace(&rule.spaced_search, &rule.spaced_replace);
        }
        if let Some(rest) = line.strip_prefix(rule.token) {
            line = format!("{}{}", rule.markup, rest);
        }
        if let Some(head) = line.strip_suffix(rule.token) {
            line = format!("{}{}", head, rule.markup);
        }
    }
    line
}

/// Renders one source line as highlighted HTML.
///
/// The line is escaped exactly once. Java and plain sources are only
/// escaped; XML sources get tag highlighting; HTML-family sources get tag,
/// templating directive and `$` highlighting.
///
/// # Examples
///
/// ```rust
/// use pagekit::{render_line, Classification};
///
/// assert_eq!(
///     render_line("<table>", Classification::HtmlFamily),
///     "&lt;<font color=\"#00029F\">table</font>&gt;"
/// );
/// ```
pub fn render_line(line: &str, classification: Classification) -> String {
    let escaped = escape_html(line);
    match classification {
        Classification::Java | Classification::Plain => escaped,
        Classification::Xml => apply_substitutions(escaped, &XML_TAG_RULES),
        Classification::HtmlFamily => {
            let line = apply_substitutions(escaped, &HTML_TAG_RULES);
            let line = apply_directives(line);
            line.replace('$', RENDERED_DOLLAR.as_str())
        }
    }
}
