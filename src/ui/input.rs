#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteInput {
    Open,
    Close,
    Toggle,
    Move(i32),
    Confirm,
    Quit,
    Query(String),
}

/// Maps one line of terminal input to a palette event. Slash commands drive
/// the palette, anything else replaces the query.
pub fn parse_line(line: &str) -> PaletteInput {
    let line = line.trim_end_matches(['\r', '\n']);
    match line.trim() {
        "" | "/go" => PaletteInput::Confirm,
        "/open" => PaletteInput::Open,
        "/close" | "/esc" => PaletteInput::Close,
        "/toggle" => PaletteInput::Toggle,
        "/up" | "/k" => PaletteInput::Move(-1),
        "/down" | "/j" => PaletteInput::Move(1),
        "/quit" => PaletteInput::Quit,
        _ => PaletteInput::Query(line.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands() {
        assert_eq!(parse_line("/open\n"), PaletteInput::Open);
        assert_eq!(parse_line("/esc"), PaletteInput::Close);
        assert_eq!(parse_line("/close"), PaletteInput::Close);
        assert_eq!(parse_line("/toggle"), PaletteInput::Toggle);
        assert_eq!(parse_line("/k"), PaletteInput::Move(-1));
        assert_eq!(parse_line("/down"), PaletteInput::Move(1));
        assert_eq!(parse_line("/quit\r\n"), PaletteInput::Quit);
    }

    #[test]
    fn blank_line_confirms() {
        assert_eq!(parse_line("\n"), PaletteInput::Confirm);
        assert_eq!(parse_line("/go"), PaletteInput::Confirm);
    }

    #[test]
    fn other_text_is_a_query() {
        assert_eq!(parse_line("resume\n"), PaletteInput::Query("resume".to_string()));
        assert_eq!(parse_line("/about"), PaletteInput::Query("/about".to_string()));
    }
}
