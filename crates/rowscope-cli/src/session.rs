//! Interactive command loop.
//!
//! Reads one command per line, applies it to the engine and prints the
//! refreshed view. Bad commands are reported and the loop carries on.

use std::io::{BufRead, Write};

use rowscope_engine::{SortField, ViewEngine};

use crate::command::{Command, CommandError, Edit, ModeArg, HELP};
use crate::render::render_view;

/// Drive `engine` from `input` until EOF or `quit`, writing to `output`.
///
/// `page_sizes` is the list offered in the help text.
pub fn run<R: BufRead, W: Write>(
    engine: &mut ViewEngine,
    page_sizes: &[usize],
    input: R,
    mut output: W,
) -> std::io::Result<()> {
    write!(output, "{}", render_view(engine.view()))?;

    for line in input.lines() {
        let line = line?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "error: {err}")?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(output, "{HELP}")?;
                writeln!(output, "sort fields: {}", join(SortField::ALL.as_slice()))?;
                writeln!(output, "page sizes: {}", join(page_sizes))?;
            }
            Command::Show { json: true } => {
                let json = serde_json::to_string_pretty(engine.view())
                    .map_err(std::io::Error::other)?;
                writeln!(output, "{json}")?;
            }
            Command::Show { json: false } => write!(output, "{}", render_view(engine.view()))?,
            Command::Edit(edit) => match apply(engine, edit) {
                Ok(true) => write!(output, "{}", render_view(engine.view()))?,
                Ok(false) => {
                    writeln!(output, "(nothing to do in this mode or position)")?;
                    write!(output, "{}", render_view(engine.view()))?;
                }
                Err(err) => writeln!(output, "error: {err}")?,
            },
        }
        output.flush()?;
    }
    Ok(())
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Apply one edit. Returns `false` when the engine had nothing to do.
pub fn apply(engine: &mut ViewEngine, edit: Edit) -> Result<bool, CommandError> {
    let applied = match edit {
        Edit::Filter(inputs) => {
            engine.apply_filter_inputs(&inputs);
            true
        }
        Edit::Reset => {
            engine.reset_filters();
            true
        }
        Edit::Sort(field) => {
            engine.set_sort(field);
            true
        }
        Edit::Mode(ModeArg::Set(kind)) => {
            engine.set_mode(kind);
            true
        }
        Edit::Mode(ModeArg::Toggle) => {
            engine.toggle_mode();
            true
        }
        Edit::Page(number) => engine.set_page(number - 1),
        Edit::Next => engine.next_page(),
        Edit::Prev => engine.previous_page(),
        Edit::First => engine.first_page(),
        Edit::Last => engine.last_page(),
        Edit::Size(size) => engine.set_page_size(size)?,
        Edit::Select(id) => {
            engine.toggle_selection(&id)?;
            true
        }
        Edit::SelectAll => {
            engine.toggle_select_all_visible();
            true
        }
        Edit::Clear => {
            engine.clear_selection();
            true
        }
    };
    Ok(applied)
}
