use crate::models::HistoryRecord;

pub(crate) const EXPORT_HEADER: &str =
    "searched_at,category,query,result_count,results,latency_us";

/// Renders history rows as CSV. Fields containing a comma, quote, or line
/// break are quoted with doubled-quote escaping.
pub(crate) fn render_history_csv(rows: &[HistoryRecord]) -> String {
    let mut out = String::with_capacity(EXPORT_HEADER.len() + 1 + rows.len() * 64);
    out.push_str(EXPORT_HEADER);
    out.push('\n');
    for row in rows {
        push_field(&mut out, &row.searched_at);
        out.push(',');
        push_field(&mut out, &row.category);
        out.push(',');
        push_field(&mut out, &row.query);
        out.push(',');
        out.push_str(&row.result_count.to_string());
        out.push(',');
        push_field(&mut out, &row.results_text);
        out.push(',');
        out.push_str(&row.latency_us.to_string());
        out.push('\n');
    }
    out
}

fn push_field(out: &mut String, field: &str) {
    if field.contains(['"', ',', '\n', '\r']) {
        out.push('"');
        for ch in field.chars() {
            if ch == '"' {
                out.push('"');
            }
            out.push(ch);
        }
        out.push('"');
    } else {
        out.push_str(field);
    }
}
