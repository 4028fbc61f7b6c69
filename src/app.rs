//! Menu loop.
//!
//! The loop owns nothing: it borrows the session, the input reader and the
//! renderer, so tests can drive it with scripted input and capture output.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, info};

use crate::core::{PieceGenerator, Session};
use crate::input::{should_quit, InputEvent, MenuReader};
use crate::term::TextRenderer;

/// Counters reported when the loop ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub applied: u32,
    pub rejected: u32,
    pub invalid: u32,
}

pub fn run<G, R, W>(
    session: &mut Session<G>,
    input: &mut MenuReader<R>,
    renderer: &mut TextRenderer<W>,
) -> Result<RunSummary>
where
    G: PieceGenerator,
    R: BufRead,
    W: Write,
{
    let mut summary = RunSummary::default();
    renderer.draw_state(&session.snapshot())?;

    loop {
        renderer.draw_menu()?;
        renderer.flush()?;

        let choice = match input.next_event()? {
            InputEvent::Eof => {
                debug!("input closed");
                break;
            }
            InputEvent::Invalid(line) => {
                summary.invalid += 1;
                renderer.draw_invalid(&line)?;
                continue;
            }
            InputEvent::Choice(choice) => choice,
        };

        if should_quit(choice) {
            break;
        }

        match session.apply(choice) {
            Ok(outcome) => {
                summary.applied += 1;
                renderer.draw_outcome(&outcome)?;
            }
            Err(err) => {
                summary.rejected += 1;
                debug!(?choice, %err, "action rejected");
                renderer.draw_error(&err)?;
            }
        }
        renderer.draw_state(&session.snapshot())?;
    }

    renderer.flush()?;
    info!(
        applied = summary.applied,
        rejected = summary.rejected,
        invalid = summary.invalid,
        "session finished"
    );
    Ok(summary)
}
