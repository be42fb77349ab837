/// HTML building blocks shared by the views
use std::fmt::Write;

/// Escape text for use in element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Navigation targets of the app shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Apod,
    Mars,
    Epic,
    Neos,
}

impl Section {
    const ALL: [Section; 4] = [Section::Apod, Section::Mars, Section::Epic, Section::Neos];

    fn href(self) -> &'static str {
        match self {
            Section::Apod => "/apod",
            Section::Mars => "/mars",
            Section::Epic => "/epic",
            Section::Neos => "/neos",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Section::Apod => "APOD",
            Section::Mars => "Mars Rover",
            Section::Epic => "EPIC",
            Section::Neos => "Near Earth Objects",
        }
    }
}

/// Wrap a view fragment in the full page with navigation
pub fn page(active: Section, content: &str) -> String {
    let mut nav = String::new();
    for section in Section::ALL {
        let class = if section == active { " class=\"active\"" } else { "" };
        let _ = write!(
            nav,
            "<a href=\"{}\"{}>{}</a>",
            section.href(),
            class,
            section.label()
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>NASA Explorer</title>
<style>{STYLE}</style>
</head>
<body>
<nav><div class="brand">NASA Explorer</div><div class="links">{nav}</div></nav>
<main>{content}</main>
</body>
</html>"#
    )
}

/// Placeholder cards shown while a fetch is in flight
pub fn skeleton(count: usize, class: &str) -> String {
    let card = format!(
        "<div class=\"skeleton {}\"><div class=\"bar wide\"></div><div class=\"bar\"></div><div class=\"bar short\"></div></div>",
        escape(class)
    );
    format!("<div class=\"loading\">{}</div>", card.repeat(count))
}

pub fn error_message(error: &str, hint: &str) -> String {
    format!(
        "<div class=\"error\">{}. {}</div>",
        escape(error),
        escape(hint)
    )
}

pub fn empty_message(message: &str) -> String {
    format!("<div class=\"empty\">{}</div>", escape(message))
}

/// Date picker that resubmits its form on change
pub fn date_input(name: &str, value: &str, max: Option<&str>) -> String {
    let max = max
        .map(|m| format!(" max=\"{}\"", escape(m)))
        .unwrap_or_default();
    format!(
        "<input type=\"date\" name=\"{}\" value=\"{}\"{} onchange=\"this.form.submit()\">",
        escape(name),
        escape(value),
        max
    )
}

/// Select box that resubmits its form on change
pub fn select(name: &str, options: &[&str], selected: &str) -> String {
    let mut out = format!(
        "<select name=\"{}\" onchange=\"this.form.submit()\">",
        escape(name)
    );
    for option in options {
        let marker = if *option == selected { " selected" } else { "" };
        let _ = write!(
            out,
            "<option value=\"{0}\"{1}>{0}</option>",
            escape(option),
            marker
        );
    }
    out.push_str("</select>");
    out
}

/// Format a number with thousands separators, rounded to whole units
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if rounded < 0 {
        out.insert(0, '-');
    }
    out
}

const STYLE: &str = "
body { font-family: system-ui, sans-serif; background: #f4f6fa; margin: 0; min-height: 100vh; }
nav { background: #222; color: #fff; padding: 1rem 2rem; display: flex; justify-content: space-between; align-items: center; }
nav .brand { font-weight: bold; font-size: 20px; }
nav a { color: #fff; margin-left: 24px; text-decoration: none; font-weight: 500; }
nav a.active { text-decoration: underline; }
main { padding: 2rem 0; }
.view { max-width: 900px; margin: 2rem auto; padding: 24px; background: #fff; border-radius: 12px; box-shadow: 0 2px 16px rgba(0,0,0,0.08); }
.view h2 { text-align: center; margin-bottom: 16px; }
.controls { display: flex; justify-content: center; gap: 16px; margin-bottom: 24px; flex-wrap: wrap; }
.controls input, .controls select { padding: 6px; border-radius: 4px; border: 1px solid #ccc; }
.grid, .loading { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px; }
.card { background: #f4f6fa; border-radius: 8px; padding: 8px; box-shadow: 0 1px 8px rgba(0,0,0,0.05); }
.card img, .apod img { width: 100%; border-radius: 6px; }
.apod iframe { width: 100%; min-height: 400px; border: 0; border-radius: 8px; }
.skeleton { background: #f4f6fa; border-radius: 8px; padding: 12px; }
.skeleton .bar { height: 14px; background: #eee; border-radius: 4px; margin-top: 8px; width: 70%; }
.skeleton .bar.wide { height: 160px; width: 100%; }
.skeleton .bar.short { width: 50%; }
.error { color: red; text-align: center; }
.empty { color: #888; text-align: center; }
.neo { background: #f4f6fa; border-left: 5px solid #1890ff; border-radius: 8px; padding: 16px; margin-bottom: 16px; }
.neo.hazardous { background: #fff0f0; border-left-color: #ff4d4f; }
.neo .hazard { color: #ff4d4f; font-weight: bold; }
.copyright { font-size: 12px; color: #888; text-align: right; }
.muted { font-size: 13px; color: #888; }
.subtitle { text-align: center; color: #666; margin-bottom: 24px; }
";
