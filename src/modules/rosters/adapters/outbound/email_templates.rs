use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

pub struct ScheduleEmail<'a> {
    pub app_name: &'a str,
    pub driver_name: &'a str,
    pub dates: &'a [NaiveDate],
    pub week_start: NaiveDate,
    pub is_change: bool,
}

pub fn render_schedule_email(email: &ScheduleEmail<'_>) -> RenderedEmail {
    let week = email.week_start.format("%B %-d, %Y").to_string();
    let app_name = escape_html(email.app_name);
    let name = escape_html(email.driver_name);
    let brand = email.app_name;

    let (subject, heading, intro) = if email.is_change {
        (
            format!("{brand}: your schedule changed for the week of {week}"),
            "Your schedule has changed",
            format!(
                "Hi {name}, your assignments for the week of {week} were updated. \
                 You are now scheduled on:"
            ),
        )
    } else {
        (
            format!("{brand}: your schedule for the week of {week}"),
            "Your schedule is ready",
            format!(
                "Hi {name}, the roster for the week of {week} has been published. \
                 You are scheduled on:"
            ),
        )
    };

    let items: String = email
        .dates
        .iter()
        .map(|date| format!("<li>{}</li>", date.format("%A, %B %-d")))
        .collect();

    let html = format!(
        "<!DOCTYPE html>\
<html><body style=\"font-family:sans-serif\">\
<h2>{heading}</h2>\
<p>{intro}</p>\
<ul>{items}</ul>\
<p>Please contact your dispatcher if you cannot make one of these days.</p>\
<p style=\"color:#888\">{app_name}</p>\
</body></html>"
    );

    RenderedEmail { subject, html }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
