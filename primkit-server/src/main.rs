//! PrimKit Server
//!
//! JSON-RPC server exposing the PrimKit primitives.
//! Communicates via stdin/stdout, one JSON object per line.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use primkit_core::protocol::{Id, RpcMessage};
use primkit_core::{Request, Response};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod handler;

fn main() -> Result<()> {
    // Logs go to stderr, stdout is reserved for responses
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("primkit-server starting...");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let served = serve(stdin.lock(), stdout.lock(), &handler::Handler::new())?;

    info!(requests = served, "primkit-server shutting down");
    Ok(())
}

/// Answer requests until `shutdown` or end of input; returns how many were answered.
///
/// Every non-blank line gets exactly one response, including lines that are
/// not valid UTF-8. A read error ends the loop.
fn serve<R: BufRead, W: Write>(mut input: R, mut output: W, handler: &handler::Handler) -> Result<u64> {
    let mut served = 0;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                error!("Failed to read line: {}", e);
                break;
            }
        }

        let mut stop = false;
        let response = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => {
                debug!("Received: {}", line.trim_end());
                match serde_json::from_str::<RpcMessage<Request>>(line) {
                    Ok(msg) => {
                        stop = msg.content == Request::Shutdown;
                        RpcMessage::new(msg.id.unwrap_or_default(), handler.handle(&msg.content))
                    }
                    Err(e) => {
                        RpcMessage::new(Id::default(), Response::error(format!("Parse error: {}", e)))
                    }
                }
            }
            Err(e) => {
                warn!("Rejected {} byte line: {}", buf.len(), e);
                RpcMessage::new(
                    Id::default(),
                    Response::error(format!("Parse error: invalid UTF-8 ({})", e)),
                )
            }
        };

        let response_json =
            serde_json::to_string(&response).context("failed to encode response")?;
        debug!("Sending: {}", response_json);
        writeln!(output, "{}", response_json).context("failed to write response")?;
        output.flush()?;
        served += 1;

        if stop {
            break;
        }
    }

    Ok(served)
}
