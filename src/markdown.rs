//! Inline Markdown fragments: links, badges, headings, images, quotes, spoilers and code fences.
//! Every function is a plain string template; blank inputs are handled, nothing errors.

/// `[title](url)`, falling back to the bare title, or to the url as its own title
pub fn url(title: Option<&str>, url: Option<&str>) -> String {
    let title = title.unwrap_or_default().trim();
    let url = url.unwrap_or_default().trim();

    match (title.is_empty(), url.is_empty()) {
        (true, true) => String::new(),
        (true, false) => format!("[{url}]({url})"),
        (false, true) => title.to_string(),
        (false, false) => format!("[{title}]({url})"),
    }
}

/// an image link, as used by CI and coverage status badges
pub fn badge(name: &str, svg_url: &str, service_url: &str) -> String {
    url(Some(&image(Some(svg_url), Some(name))), Some(service_url))
}

/// heading line, `level` is clamped to 1..=6
pub fn title(text: &str, level: i32) -> String {
    let level = level.clamp(1, 6) as usize;
    format!("{} {text}\n", "#".repeat(level))
}

/// `![alt](url)`, blank alt text becomes `Image`
pub fn image(url: Option<&str>, alt_text: Option<&str>) -> String {
    let alt_text = match alt_text.unwrap_or_default().trim() {
        "" => "Image",
        alt_text => alt_text,
    };
    let url = url.unwrap_or_default().trim();

    format!("![{alt_text}]({url})")
}

/// Quotes every line. Entries with embedded line breaks are split, trimmed and stripped of
/// blank lines first.
/// ```
/// use mdgen::markdown::blockquote;
///
/// assert_eq!(blockquote(["one\ntwo"]), "> one\n> two\n");
/// ```
pub fn blockquote<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = String::new();

    for line in lines {
        let line = line.as_ref();

        if line.contains('\n') {
            for part in split_lines(line) {
                result.push_str(&format!("> {part}\n"));
            }
        } else {
            result.push_str(&format!("> {line}\n"));
        }
    }

    result
}

/// `blockquote()` for a single piece of text, which may span several lines
/// ```
/// use mdgen::markdown::blockquote_text;
///
/// assert_eq!(blockquote_text("Quote Text"), "> Quote Text\n");
/// ```
pub fn blockquote_text(text: &str) -> String {
    blockquote([text])
}

/// collapsible `<details>` block
pub fn spoiler(title: &str, body: &str) -> String {
    [
        "<details>".to_string(),
        format!("  <summary>{title}</summary>"),
        "  ".to_string(),
        format!("  {body}"),
        "  ".to_string(),
        "</details>".to_string(),
        String::new(),
    ]
    .join("\n")
}

/// fenced code block with an optional language
pub fn code(content: &str, language: Option<&str>) -> String {
    let language = language.unwrap_or_default();
    format!("```{language}\n{content}\n```\n")
}

fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .flat_map(|line| line.split('\r'))
        .map(str::trim)
        .filter(|line| !line.is_empty())
}
