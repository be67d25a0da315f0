use std::collections::HashMap;

use crate::client::form::{FEATURE_LABELS, FEATURE_NAMES};

/// Escape text for interpolation into HTML content or attribute values
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

/// Render the feature form, optionally with prior values and a result line
pub fn render_page(values: &HashMap<String, String>, prediction: Option<&str>) -> String {
    let mut fields = String::new();
    for (name, label) in FEATURE_NAMES.iter().zip(FEATURE_LABELS.iter()) {
        let value = values.get(*name).map(String::as_str).unwrap_or("");
        fields.push_str(&format!(
            r#"      <div class="field">
        <label for="{name}">{label}</label>
        <input type="text" id="{name}" name="{name}" value="{value}" required>
      </div>
"#,
            name = name,
            label = escape_html(label),
            value = escape_html(value),
        ));
    }

    let result = prediction
        .map(|p| format!(r#"    <div class="prediction">{}</div>
"#, escape_html(p)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Loan Approval Prediction</title>
  </head>
  <body>
    <h1>Loan Approval Prediction</h1>
    <form method="post" action="/">
{fields}      <button type="submit">Predict</button>
    </form>
{result}  </body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape_html("plain 1.5"), "plain 1.5");
    }

    #[test]
    fn test_render_lists_every_field() {
        let page = render_page(&HashMap::new(), None);
        for name in FEATURE_NAMES {
            assert!(page.contains(&format!(r#"name="{}""#, name)));
        }
        assert!(!page.contains("class=\"prediction\""));
    }

    #[test]
    fn test_render_echoes_escaped_values_and_prediction() {
        let mut values = HashMap::new();
        values.insert("feature_2".to_string(), "\"><script>".to_string());

        let page = render_page(&values, Some("Approved"));
        assert!(page.contains(r#"value="&quot;&gt;&lt;script&gt;""#));
        assert!(page.contains(r#"<div class="prediction">Approved</div>"#));
        assert!(!page.contains("<script>"));
    }
}
