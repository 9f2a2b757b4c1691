//! HTML rendering for the conversion form

use std::fmt::Write;

use crate::application::services::Conversion;
use crate::domain::Direction;

const STYLE: &str = r#"            table {
                text-align: center;
                border-collapse: collapse;
                width: 30%;
            }

            td, th {
                border: solid 1px black;
                padding: 5px;
            }

            .invalid, .error {
                color: #b00020;
            }
"#;

/// What to show below the form after a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Converted(Conversion),
    Rejected(String),
}

/// Everything needed to render the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPage<'a> {
    pub title: &'a str,
    /// Submitted temperature text, echoed back into the input
    pub temp: Option<&'a str>,
    /// Submitted direction, keeps its radio checked
    pub direction: Option<Direction>,
    pub outcome: Option<Outcome>,
}

impl<'a> FormPage<'a> {
    pub fn empty(title: &'a str) -> Self {
        Self {
            title,
            ..Self::default()
        }
    }

    pub fn render(&self) -> String {
        let title = escape_html(self.title);
        let mut html = String::with_capacity(2048);

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n    <head>\n");
        let _ = writeln!(html, "        <meta charset=\"utf-8\" />");
        let _ = writeln!(html, "        <title>{}</title>", title);
        let _ = writeln!(html, "        <style type=\"text/css\">\n{}        </style>", STYLE);
        html.push_str("    </head>\n    <body>\n");
        let _ = writeln!(html, "    <h2>{}</h2>", title);
        self.render_form(&mut html);
        self.render_outcome(&mut html);
        html.push_str("    </body>\n</html>\n");
        html
    }

    fn render_form(&self, html: &mut String) {
        html.push_str("        <div>\n            <form method=\"post\" action=\"\">\n");
        html.push_str("                <table>\n                    <tbody>\n");
        html.push_str("                        <tr>\n");
        html.push_str("                            <td width=\"30%\">Temperature:</td>\n");
        let value = self
            .temp
            .map(|t| format!(" value=\"{}\"", escape_html(t)))
            .unwrap_or_default();
        let _ = writeln!(
            html,
            "                            <td width=\"70%\"><input type=\"text\" name=\"temp\" size=\"34\"{} /></td>",
            value
        );
        html.push_str("                        </tr>\n");
        html.push_str("                        <tr>\n                            <td colspan=\"2\">\n");
        for (i, direction) in Direction::ALL.iter().enumerate() {
            let id = match direction {
                Direction::ToFahrenheit => "ctof",
                Direction::ToCelsius => "ftoc",
            };
            let checked = if self.direction == Some(*direction) {
                " checked"
            } else {
                ""
            };
            if i > 0 {
                html.push_str("                                <br />\n");
            }
            let _ = writeln!(
                html,
                "                                <input type=\"radio\" id=\"{id}\" name=\"type\" value=\"{}\"{checked} />",
                direction.form_value()
            );
            let _ = writeln!(
                html,
                "                                <label for=\"{id}\">{}</label>",
                direction.label()
            );
        }
        html.push_str("                            </td>\n                        </tr>\n");
        html.push_str("                        <tr>\n");
        html.push_str(
            "                            <td colspan=\"2\"><input type=\"submit\" value=\"Convert!\" /></td>\n",
        );
        html.push_str("                        </tr>\n");
        html.push_str("                    </tbody>\n                </table>\n");
        html.push_str("            </form>\n        </div>\n");
    }

    fn render_outcome(&self, html: &mut String) {
        match &self.outcome {
            None => {}
            Some(Outcome::Converted(conversion)) => {
                let class = if conversion.is_valid() {
                    "result"
                } else {
                    "result invalid"
                };
                let _ = writeln!(
                    html,
                    "        <div>\n            <h1 class=\"{}\">{}</h1>\n        </div>",
                    class,
                    escape_html(&conversion.summary())
                );
            }
            Some(Outcome::Rejected(message)) => {
                let _ = writeln!(
                    html,
                    "        <div>\n            <p class=\"error\">{}</p>\n        </div>",
                    escape_html(message)
                );
            }
        }
    }
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
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
