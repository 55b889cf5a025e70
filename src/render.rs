//! HTML rendering for the list endpoints.

use crate::model::{Good, Order, User};

/// A row that can be rendered into the listing table.
pub trait TableRow {
    /// Table name as stored, used (uppercased) for the page heading.
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

impl TableRow for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &["id", "username", "sur_name", "email", "password"];
    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.username.clone(),
            self.sur_name.clone(),
            self.email.clone(),
            self.password.clone(),
        ]
    }
}

impl TableRow for Good {
    const TABLE: &'static str = "goods";
    const COLUMNS: &'static [&'static str] = &["id", "name", "description", "price"];
    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.description.clone(),
            self.price.to_string(),
        ]
    }
}

impl TableRow for Order {
    const TABLE: &'static str = "orders";
    const COLUMNS: &'static [&'static str] = &["id", "user_id", "good_id", "date", "status"];
    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.user_id.to_string(),
            self.good_id.to_string(),
            self.date.clone(),
            self.status.to_string(),
        ]
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render a full HTML page: uppercased table name as heading, then one
/// table with every row. Unbounded on purpose; there is no pagination.
pub fn table_page<T: TableRow>(rows: &[T]) -> String {
    let heading = T::TABLE.to_ascii_uppercase();
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head><title>");
    out.push_str(&heading);
    out.push_str("</title></head>\n<body>\n<h1>");
    out.push_str(&heading);
    out.push_str("</h1>\n<table border=\"1\">\n<thead><tr>");
    for col in T::COLUMNS {
        out.push_str("<th>");
        out.push_str(col);
        out.push_str("</th>");
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for row in rows {
        out.push_str("<tr>");
        for cell in row.cells() {
            out.push_str("<td>");
            out.push_str(&escape(&cell));
            out.push_str("</td>");
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    out
}
