//! Server-rendered HTML for the form and the results page.
//!
//! Every value that did not come from a literal in this file is escaped.

use crate::catalog::{known_genres, DrumKit, KitType, SkillLevel, Space};
use crate::recommend::service::{Advice, Recommendation};

const DEFAULT_BUDGET: u32 = 1000;

const STYLE: &str = r#"
    body {
      font-family: system-ui, -apple-system, Segoe UI, Roboto, sans-serif;
      margin: 2rem;
      max-width: 860px;
    }
    pre {
      white-space: pre-wrap;
      background: #f6f6f6;
      padding: 1rem;
      border-radius: 12px;
    }
    pre.failed { background: #fdecea; }
    table { border-collapse: collapse; margin-top: 1rem; }
    td, th { padding: 0.25rem 0.75rem; text-align: left; }
    a { display: inline-block; margin-top: 1rem; }
"#;

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html>\n<head>\n  <meta charset=\"utf-8\"/>\n  <title>{}</title>\n  <style>{STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        escape_html(title)
    )
}

fn select(name: &str, label: &str, options: &[(&str, &str)]) -> String {
    let mut html = format!("  <label>{}</label><br/>\n  <select name=\"{name}\" required>\n", escape_html(label));
    for (value, text) in options {
        html.push_str(&format!(
            "    <option value=\"{}\">{}</option>\n",
            escape_html(value),
            escape_html(text)
        ));
    }
    html.push_str("  </select><br/><br/>\n");
    html
}

/// GET / — the preference form. Genre options come from the catalog.
pub fn index_page(catalog: &[DrumKit]) -> String {
    let kit_types: Vec<(&str, &str)> = KitType::ALL.iter().map(|t| (t.as_str(), t.label())).collect();
    let spaces: Vec<(&str, &str)> = Space::ALL.iter().map(|s| (s.as_str(), s.label())).collect();
    let skills: Vec<(&str, &str)> = SkillLevel::ALL
        .iter()
        .map(|s| (s.as_str(), s.label()))
        .collect();
    let genre_names = known_genres(catalog);
    let genres: Vec<(&str, &str)> = genre_names.iter().map(|g| (*g, *g)).collect();

    let mut body = String::from("<h1>Drum Kit Picker</h1>\n<form action=\"/recommend\" method=\"post\">\n");
    body.push_str(&select("kit_type", "Kit Type", &kit_types));
    body.push_str(&format!(
        "  <label>Budget (USD)</label><br/>\n  <input type=\"number\" name=\"budget\" min=\"0\" value=\"{DEFAULT_BUDGET}\" required/><br/><br/>\n"
    ));
    body.push_str(&select("space", "Space", &spaces));
    body.push_str(&select("skill", "Skill", &skills));
    body.push_str(&select("genre", "Genre", &genres));
    body.push_str(&select("quiet_priority", "Quiet Priority", &[("yes", "Yes"), ("no", "No")]));
    body.push_str("  <button type=\"submit\">Get recommendation</button>\n</form>\n");

    page("Drum Kit Picker", &body)
}

/// POST /recommend — advice text followed by the scored shortlist.
pub fn results_page(rec: &Recommendation<'_>) -> String {
    let class = match rec.advice {
        Advice::Generated { .. } => "",
        Advice::Failed { .. } => " class=\"failed\"",
    };

    let mut body = String::from("<h1>Your recommendations</h1>\n");
    body.push_str(&format!(
        "<pre{class}>{}</pre>\n",
        escape_html(&rec.advice.display_text())
    ));

    body.push_str("<h2>Shortlist</h2>\n<table>\n<tr><th>Kit</th><th>Type</th><th>Price</th><th>Score</th></tr>\n");
    for scored in &rec.shortlist {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>${}-${}</td><td>{}</td></tr>\n",
            escape_html(scored.kit.name),
            scored.kit.kit_type,
            scored.kit.price_min,
            scored.kit.price_max,
            scored.score
        ));
    }
    body.push_str("</table>\n<a href=\"/\">&larr; Back</a>\n");

    page("Recommendations", &body)
}

/// Shown when the submitted form cannot be turned into preferences.
pub fn error_page(message: &str) -> String {
    let body = format!(
        "<h1>Invalid preferences</h1>\n<pre class=\"failed\">{}</pre>\n<a href=\"/\">&larr; Back</a>\n",
        escape_html(message)
    );
    page("Invalid preferences", &body)
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
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

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::catalog::{Preferences, ScoredKit, KITS};
    use crate::llm_client::FailureKind;

    fn recommendation(advice: Advice) -> Recommendation<'static> {
        Recommendation {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            preferences: Preferences {
                kit_type: KitType::Electronic,
                budget: 400,
                space: Space::Apartment,
                skill: SkillLevel::Beginner,
                genre: "pop".to_string(),
                quiet_priority: true,
            },
            shortlist: vec![ScoredKit {
                kit: &KITS[1],
                score: 110,
            }],
            advice,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_index_page_has_every_field() {
        let html = index_page(KITS);
        for field in ["kit_type", "budget", "space", "skill", "genre", "quiet_priority"] {
            assert!(html.contains(&format!("name=\"{field}\"")), "missing {field}");
        }
        assert!(html.contains("<option value=\"studio\">Studio / Practice Space</option>"));
        assert!(html.contains("<option value=\"country\">country</option>"));
        assert!(html.contains("value=\"1000\""));
    }

    #[test]
    fn test_results_page_escapes_model_output() {
        let html = results_page(&recommendation(Advice::Generated {
            text: "<script>alert(1)</script>".to_string(),
        }));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<td>Alesis Nitro Max</td>"));
        assert!(html.contains("<td>110</td>"));
    }

    #[test]
    fn test_results_page_shows_failure_text() {
        let html = results_page(&recommendation(Advice::Failed {
            kind: FailureKind::Timeout,
            message: "request timed out after 30s".to_string(),
        }));
        assert!(html.contains("<pre class=\"failed\">AI call failed: timeout: request timed out after 30s</pre>"));
    }

    #[test]
    fn test_error_page_escapes_message() {
        let html = error_page("unknown kit_type '<x>'");
        assert!(html.contains("unknown kit_type &#39;&lt;x&gt;&#39;"));
    }
}
