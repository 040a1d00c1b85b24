//! Server-rendered HTML for the list and form views.
//!
//! Both views render the same `SampleAppListData`. The form names its inputs
//! so that `SampleAppForm` can bind them back (`sampleAppList[N].field`).

use std::fmt::Write;

use crate::domains::sample_app::{Job, SampleAppData, SampleAppForm, SampleAppListData};

const UPDATE_ACTION: &str = "/sampleapp/form/update";

/// Read-only table of every record
pub fn render_list(list: &SampleAppListData) -> String {
    let mut rows = String::new();
    for record in &list.sample_app_list {
        let _ = write!(
            rows,
            "<tr data-id=\"{}\"><td>{}</td><td>{}</td>",
            record.id,
            record.id,
            escape(&record.name)
        );
        for job in Job::ALL {
            let _ = write!(
                rows,
                "<td class=\"flag\" data-job=\"{}\">{}</td>",
                job,
                if record.flag(job) { "ON" } else { "OFF" }
            );
        }
        rows.push_str("</tr>\n");
    }

    page(
        "Sample App List",
        &format!(
            "{}<p><a href=\"/sampleapp/form\">Edit</a></p>\n",
            table(&rows)
        ),
    )
}

/// Editable table; each flag is a checkbox preceded by a hidden `false`
pub fn render_form(list: &SampleAppListData) -> String {
    let mut rows = String::new();
    for (index, record) in list.sample_app_list.iter().enumerate() {
        render_form_row(&mut rows, index, record);
    }

    page(
        "Sample App Form",
        &format!(
            "<form method=\"post\" action=\"{}\">\n{}\
             <button type=\"submit\">Update</button>\n</form>\n\
             <p><a href=\"/sampleapp/list\">Back to list</a></p>\n",
            UPDATE_ACTION,
            table(&rows)
        ),
    )
}

fn render_form_row(out: &mut String, index: usize, record: &SampleAppData) {
    let _ = write!(
        out,
        "<tr data-id=\"{id}\">\
         <td>{id}<input type=\"hidden\" name=\"{id_field}\" value=\"{id}\"></td>\
         <td>{name}<input type=\"hidden\" name=\"{name_field}\" value=\"{name}\"></td>",
        id = record.id,
        id_field = SampleAppForm::field_name(index, "id"),
        name = escape(&record.name),
        name_field = SampleAppForm::field_name(index, "name"),
    );
    for job in Job::ALL {
        let field = SampleAppForm::field_name(index, job.form_field());
        let _ = write!(
            out,
            "<td class=\"flag\" data-job=\"{job}\">\
             <input type=\"hidden\" name=\"{field}\" value=\"false\">\
             <input type=\"checkbox\" name=\"{field}\" value=\"true\"{checked}></td>",
            checked = if record.flag(job) { " checked" } else { "" },
        );
    }
    out.push_str("</tr>\n");
}

fn table(rows: &str) -> String {
    let mut header = String::from("<tr><th>ID</th><th>Name</th>");
    for job in Job::ALL {
        let _ = write!(header, "<th>{}</th>", job);
    }
    header.push_str("</tr>");

    format!(
        "<table>\n<thead>{}</thead>\n<tbody>\n{}</tbody>\n</table>\n",
        header, rows
    )
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n\
         <body>\n<h1>{title}</h1>\n{body}</body>\n</html>\n"
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
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
