//! Headless Tile Words driver (default binary).
//!
//! Reads host commands line by line (stdin, or `--script FILE`), applies them
//! to a game session, and writes every outbound message as a JSON line on
//! stdout. Logs go to stderr; filter them with `RUST_LOG`.
//!
//! ```text
//! $ printf 'down 0 0\nmove 0 1\nmove 0 2\nup\nstate\n' | tile-words --level wordcount
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use tile_words::adapter::{encode_line, Flow, GameSession, Outbound};
use tile_words::cli::DriverConfig;
use tile_words::input::{parse_command, parse_script, HostCommand};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = DriverConfig::from_env().with_args(&args)?;

    let mut session = GameSession::from_config(&config.session).with_context(|| {
        format!(
            "failed to start session from {} and {}",
            config.session.level_dir.display(),
            config.session.dictionary_path.display()
        )
    })?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    flush(&mut session, &mut out)?;

    match &config.script {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read script {}", path.display()))?;
            let commands = parse_script(&text)
                .map_err(|(line, err)| anyhow!("{}:{}: {}", path.display(), line, err))?;
            for command in commands {
                if apply(&mut session, command, &mut out)? == Flow::Quit {
                    break;
                }
            }
        }
        None => {
            for (index, line) in io::stdin().lock().lines().enumerate() {
                let line = line.context("failed to read command")?;
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    continue;
                }
                match parse_command(trimmed) {
                    Ok(command) => {
                        if apply(&mut session, command, &mut out)? == Flow::Quit {
                            break;
                        }
                    }
                    Err(err) => {
                        tracing::warn!(line = index + 1, %err, "ignoring command");
                        write_line(&mut out, &Outbound::notice(format!("line {}: {}", index + 1, err)))?;
                    }
                }
            }
        }
    }

    write_line(
        &mut out,
        &Outbound::Snapshot {
            snapshot: session.snapshot(),
        },
    )?;
    out.flush()?;
    Ok(())
}

/// Run one command and write whatever it produced.
///
/// Level loading failures are reported as notices; the session keeps going.
fn apply(session: &mut GameSession, command: HostCommand, out: &mut impl Write) -> Result<Flow> {
    let flow = match session.handle(command) {
        Ok(flow) => flow,
        Err(err) => {
            tracing::warn!(%err, "command failed");
            write_line(out, &Outbound::notice(err.to_string()))?;
            Flow::Continue
        }
    };
    flush(session, out)?;
    Ok(flow)
}

fn flush(session: &mut GameSession, out: &mut impl Write) -> Result<()> {
    for message in session.take_outbound() {
        write_line(out, &message)?;
    }
    Ok(())
}

fn write_line(out: &mut impl Write, message: &Outbound) -> Result<()> {
    let line = encode_line(message).context("failed to encode message")?;
    writeln!(out, "{}", line)?;
    Ok(())
}
