use std::io::{BufRead, Write};
use anyhow::Result;
use crate::config::GeneralConfig;
use crate::executor;
use crate::state::PaletteSession;
use crate::ui::input::{parse_line, PaletteInput};
use crate::ui::render::render;

/// Drives the palette from line input until `/quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    session: &mut PaletteSession,
    general: &GeneralConfig,
    input: R,
    output: &mut W,
) -> Result<()> {
    session.open();
    write!(output, "{}", render(session))?;

    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            PaletteInput::Quit => break,
            PaletteInput::Open => session.open(),
            PaletteInput::Close => session.close(),
            PaletteInput::Toggle => session.toggle(),
            PaletteInput::Move(delta) => session.move_selection(delta),
            PaletteInput::Query(query) => session.set_query(&query),
            PaletteInput::Confirm => {
                if let Some(entry) = session.confirm() {
                    let destination = executor::resolve(&entry, general);
                    if let Err(e) = executor::open(&destination, general, &mut *output) {
                        log::error!("Failed to open {}: {}", entry.title, e);
                    }
                }
            }
        }
        write!(output, "{}", render(session))?;
        output.flush()?;
    }

    Ok(())
}
