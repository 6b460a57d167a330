//! Standalone HTML rendering of a prediction, images inlined as data URIs.

use crate::domain::housing::{FeatureRecord, PredictionResult};
use crate::infrastructure::assets::EmbeddedImage;
use crate::interfaces::content;
use crate::interfaces::view_models::PredictionViewModel;
use std::fmt::Write;

const STYLE: &str = "body{font-family:'Segoe UI',Tahoma,Geneva,Verdana,sans-serif;max-width:860px;\
margin:40px auto;color:#333;padding:0 16px}\
.success{background:#e8f5e9;padding:12px;border-radius:6px}\
.info{background:#e3f2fd;padding:12px;border-radius:6px}\
.note{font-size:10px}.muted{text-align:center;font-size:0.8em;color:grey}\
.banner{width:100%}.caption{font-size:0.8em;color:#6c757d}\
.photo{width:330px;height:330px;border-radius:50%;object-fit:cover;display:block;\
margin:40px auto 0;box-shadow:0 0 50px 6px #ff69b4}\
.greeting{text-align:center;font-size:0.8rem;color:#6c757d;font-style:italic}";

/// Renders the full page for one prediction.
pub fn render_report(
    record: &FeatureRecord,
    result: &PredictionResult,
    banner: Option<&EmbeddedImage>,
    profile: Option<&EmbeddedImage>,
) -> String {
    let view = PredictionViewModel::build(record, result);
    let mut html = String::new();

    // Writing into a String cannot fail
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n",
        escape(content::PAGE_TITLE),
        STYLE
    );

    let _ = writeln!(html, "<h1>{}</h1>", escape(content::APP_HEADING));
    let _ = writeln!(html, "<p>{}</p>", escape(content::INTRO));
    let _ = writeln!(
        html,
        "<p><strong>How it works:</strong> (<a href=\"{}\">data source</a>)</p>\n<ul>",
        content::DATA_SOURCE_URL
    );
    for item in content::HOW_IT_WORKS {
        let _ = writeln!(html, "<li>{}</li>", escape(item));
    }
    let _ = writeln!(html, "</ul>\n<hr>\n<p class=\"note\">{}</p>", escape(content::BASELINE_NOTE));

    if let Some(banner) = banner {
        let _ = writeln!(
            html,
            "<img class=\"banner\" src=\"{}\" alt=\"HDB flats\">",
            banner.to_data_uri()
        );
    }
    let _ = writeln!(html, "<p class=\"caption\">{}</p>", escape(content::BANNER_CAPTION));

    let _ = writeln!(html, "<h2>{}</h2>\n<ul>", escape(content::RESULTS_HEADING));
    for (label, value) in &view.inputs {
        let _ = writeln!(
            html,
            "<li><strong>{}:</strong> {}</li>",
            escape(label),
            escape(value)
        );
    }
    let _ = writeln!(html, "</ul>");
    let _ = writeln!(
        html,
        "<p class=\"success\"><strong>Predicted Real Price (Inflation-adjusted):</strong> {}</p>",
        escape(&view.real_price)
    );
    let _ = writeln!(
        html,
        "<p class=\"info\"><strong>Predicted Nominal Price:</strong> {} (using forecasted CPI: {})</p>",
        escape(&view.nominal_price),
        escape(&view.cpi)
    );

    let _ = writeln!(html, "<hr>\n<h3>About this Model</h3>\n<ul>");
    for (label, text) in content::ABOUT_MODEL {
        let _ = writeln!(
            html,
            "<li><strong>{}:</strong> {}</li>",
            escape(label),
            escape(text)
        );
    }
    let _ = writeln!(html, "</ul>");
    let _ = writeln!(html, "<p class=\"muted\"><em>{}</em></p>", escape(content::DISCLAIMER));

    if let Some(profile) = profile {
        let _ = writeln!(
            html,
            "<img class=\"photo\" src=\"{}\" alt=\"Profile photo\">",
            profile.to_data_uri()
        );
    }
    let _ = writeln!(html, "<p class=\"greeting\">{}</p>", escape(content::GREETING));

    let _ = writeln!(
        html,
        "<hr>\n<h1>{}</h1>\n<p>{}</p>\n<ul>",
        escape(content::PORTFOLIO_HEADING),
        escape(content::PORTFOLIO_INTRO)
    );
    for (name, url) in content::PORTFOLIO_LINKS {
        let _ = writeln!(
            html,
            "<li><a href=\"{}\">{}</a></li>",
            escape(url),
            escape(name)
        );
    }
    let _ = writeln!(html, "</ul>");
    let _ = writeln!(
        html,
        "<hr>\n<p><em>{}</em></p>\n<p class=\"note\"><a href=\"{}\">Email Me!</a></p>",
        escape(content::OUTRO),
        content::CONTACT_EMAIL
    );
    let _ = writeln!(
        html,
        "<p class=\"caption\"><em>{} <a href=\"{}\" target=\"_blank\">See why here</a>.</em></p>",
        escape(content::MODEL_CAVEAT),
        content::MODEL_CAVEAT_URL
    );
    let _ = writeln!(html, "</body>\n</html>");

    html
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("GitHub Projects & Code"), "GitHub Projects &amp; Code");
        assert_eq!(escape("<b>\"x\"</b>"), "&lt;b&gt;&quot;x&quot;&lt;/b&gt;");
    }
}
