//! Interactive read-eval-print loop over any line source.

use std::io::{self, BufRead, Write};

use chrono::NaiveDateTime;

use crate::command::Command;
use crate::context::{AppContext, Session};
use crate::errors::AppError;
use crate::handlers::{self, Outcome};
use crate::views;

const PROMPT: &str = "lemonpos> ";

/// Run commands from `input` until `quit` or end of input.
///
/// Command errors are written to `output` and the loop carries on; only IO
/// errors on the terminal itself end the session early.
pub fn run_shell<R, W, C>(
    ctx: &AppContext,
    session: &mut Session,
    input: R,
    mut output: W,
    clock: C,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    C: Fn() -> NaiveDateTime,
{
    let span = tracing::info_span!("session", id = %session.id());
    let _guard = span.enter();
    tracing::info!(data_file = %ctx.log().path().display(), "shell session started");

    output.write_all(views::render_welcome().as_bytes())?;
    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let result = Command::parse(&line)
            .map_err(AppError::from)
            .and_then(|command| handlers::handle(ctx, session, command, clock()));
        match result {
            Ok(Outcome::Reply(text)) => output.write_all(text.as_bytes())?,
            Ok(Outcome::Quit) => break,
            Err(e) => {
                tracing::debug!(error = %e, "command failed");
                writeln!(output, "error: {e}")?;
            }
        }
    }

    writeln!(output, "Goodbye!")?;
    tracing::info!("shell session ended");
    Ok(())
}
