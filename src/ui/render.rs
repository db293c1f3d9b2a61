use crate::state::PaletteSession;

pub const NO_MATCHES: &str = "No matches";
pub const QUERY_PROMPT: &str = "? ";

pub fn render(session: &PaletteSession) -> String {
    if !session.is_open() {
        return "(palette closed)\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!("{}{}\n", QUERY_PROMPT, session.query()));

    if session.no_matches() {
        out.push_str(&format!("  {}\n", NO_MATCHES));
        return out;
    }

    for (i, entry) in session.results().iter().enumerate() {
        let marker = if i == session.selected_index() { '>' } else { ' ' };
        let external = if entry.external { " ↗" } else { "" };
        out.push_str(&format!("{} {}{} - {}\n", marker, entry.title, external, entry.description));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::FuzzyMatcher;
    use crate::model::CatalogEntry;

    fn session() -> PaletteSession {
        PaletteSession::new(
            vec![
                CatalogEntry::new("Home", "start", "/"),
                CatalogEntry::new("GitHub", "code", "https://github.com/"),
            ],
            FuzzyMatcher::new(),
        )
    }

    #[test]
    fn closed_palette() {
        assert_eq!(render(&session()), "(palette closed)\n");
    }

    #[test]
    fn marks_selected_row() {
        let mut s = session();
        s.open();
        s.move_selection(1);
        assert_eq!(render(&s), "? \n  Home - start\n> GitHub ↗ - code\n");
    }

    #[test]
    fn query_line_is_distinct_from_cursor_row() {
        let mut s = session();
        s.open();
        s.set_query("home");
        let text = render(&s);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["? home", "> Home - start"]);
        assert_eq!(lines.iter().filter(|l| l.starts_with("> ")).count(), 1);
    }

    #[test]
    fn shows_no_matches() {
        let mut s = session();
        s.open();
        s.set_query("xyz123");
        assert_eq!(render(&s), "? xyz123\n  No matches\n");
    }
}
