use super::config::AnalyzerConfig;
use crate::error::AnalyzerFailure;
use crate::parser::decode_utf8;
use std::io::{self, Read};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Something that turns a source file into a raw result stream.
pub trait AnalyzerCollaborator {
    fn invoke(&self, source: &Path) -> Result<String, AnalyzerFailure>;
}

/// Runs the analyzer as a child process: `program [args..] <source>`.
pub struct ProcessAnalyzer {
    config: AnalyzerConfig,
}

impl ProcessAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }
}

impl AnalyzerCollaborator for ProcessAnalyzer {
    fn invoke(&self, source: &Path) -> Result<String, AnalyzerFailure> {
        debug!(program = %self.config.program, source = %source.display(), "starting analyzer");

        let mut child = Command::new(&self.config.program)
            .args(&self.config.args)
            .arg(source)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| AnalyzerFailure::Spawn {
                program: self.config.program.clone(),
                message: e.to_string(),
            })?;

        // One deadline covers both the wait and draining the pipes: a grandchild
        // can keep a pipe open after the analyzer itself has exited.
        let deadline = self.config.timeout.map(|limit| Deadline {
            at: Instant::now() + limit,
            limit,
        });

        // Drain both pipes while waiting so the child never blocks on a full pipe.
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = match deadline {
            Some(deadline) => wait_until(&mut child, deadline)?,
            None => child.wait().map_err(io_failure)?,
        };

        let stdout = collect(&stdout, deadline)?;
        let stderr = collect(&stderr, deadline)?;
        debug!(status = ?status.code(), stdout_bytes = stdout.len(), "analyzer finished");

        if !status.success() {
            return Err(AnalyzerFailure::Exited {
                status: status.code(),
                stderr: decode_utf8(stderr, "analyzer stderr"),
            });
        }

        Ok(decode_utf8(stdout, "analyzer stdout"))
    }
}

#[derive(Debug, Clone, Copy)]
struct Deadline {
    at: Instant,
    limit: Duration,
}

impl Deadline {
    fn timed_out(self) -> AnalyzerFailure {
        AnalyzerFailure::TimedOut { after: self.limit }
    }
}

type PipeOutput = io::Result<Vec<u8>>;

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Receiver<PipeOutput> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        let read = match pipe {
            Some(mut pipe) => pipe.read_to_end(&mut buf).map(|_| buf),
            None => Ok(buf),
        };
        // Nobody is listening any more once the call has timed out.
        let _ = tx.send(read);
    });
    rx
}

fn collect(rx: &Receiver<PipeOutput>, deadline: Option<Deadline>) -> Result<Vec<u8>, AnalyzerFailure> {
    let received = match deadline {
        Some(deadline) => {
            let left = deadline.at.saturating_duration_since(Instant::now());
            rx.recv_timeout(left).map_err(|e| match e {
                RecvTimeoutError::Timeout => {
                    warn!(
                        timeout = ?deadline.limit,
                        "analyzer exited but its output pipe is still open"
                    );
                    deadline.timed_out()
                }
                RecvTimeoutError::Disconnected => reader_gone(),
            })?
        }
        None => rx.recv().map_err(|_| reader_gone())?,
    };
    received.map_err(io_failure)
}

fn wait_until(child: &mut Child, deadline: Deadline) -> Result<ExitStatus, AnalyzerFailure> {
    loop {
        if let Some(status) = child.try_wait().map_err(io_failure)? {
            return Ok(status);
        }

        if Instant::now() >= deadline.at {
            warn!(timeout = ?deadline.limit, "analyzer timed out, killing it");
            if let Err(e) = child.kill() {
                warn!(error = %e, "failed to kill analyzer");
            }
            if let Err(e) = child.wait() {
                warn!(error = %e, "failed to reap analyzer");
            }
            return Err(deadline.timed_out());
        }

        thread::sleep(POLL_INTERVAL);
    }
}

fn reader_gone() -> AnalyzerFailure {
    AnalyzerFailure::Io("pipe reader thread panicked".to_string())
}

fn io_failure(e: io::Error) -> AnalyzerFailure {
    AnalyzerFailure::Io(e.to_string())
}
