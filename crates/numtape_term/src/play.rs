use std::io::{BufRead, Write};

use numtape::prelude::*;
use tracing::info;

use crate::error::TermError;
use crate::text_surface::TextSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub step: Step,
    /// Lines committed, right or wrong.
    pub commits: u32,
}

/// Drive `widget` from line-oriented input until it is done or input runs out.
///
/// Each line is typed into the active field one key at a time (so the key
/// filter applies) and then committed.
pub fn play<R: BufRead, W: Write>(
    widget: &mut Widget<TextSurface>,
    input: R,
    out: &mut W,
) -> Result<Outcome, TermError> {
    widget.start();
    writeln!(out, "{}\n", widget.surface().render())?;

    let mut commits = 0u32;
    let mut lines = input.lines();

    while let Some(field) = widget.step().active_field() {
        write!(out, "{}> ", field.slot())?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let mut typed = String::new();
        for ch in line.chars() {
            let key = ch.to_string();
            if widget.on_key_press(field, &key).allows() {
                typed.push(ch);
            }
        }

        commits += 1;
        if widget.on_field_commit(field, &typed) {
            writeln!(out, "\n{}\n", widget.surface().render())?;
        }
    }

    let step = widget.step();
    if step.is_done() {
        info!(commits, "solved");
    } else {
        info!(commits, step = step.label(), "input ended early");
    }
    Ok(Outcome { step, commits })
}
