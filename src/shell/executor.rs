/*!
 * Shell Executor
 * Dispatches commands to the memory manager and renders their output
 */

use super::command::Command;
use super::normalize::{normalize_line, trim_line_ending};
use crate::config::SimConfig;
use crate::core::errors::ShellError;
use crate::core::limits::MAX_READ_DEPTH;
use crate::memory::MemoryManager;
use crate::monitoring::CommandSpan;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, info};

/// Whether the command loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Command interpreter around one simulation
///
/// Output (prompts, echoes, `Show` renderings and error reports) goes to `W`.
pub struct Shell<W: Write> {
    manager: MemoryManager,
    config: SimConfig,
    out: W,
    read_depth: usize,
    executed: u64,
}

impl<W: Write> Shell<W> {
    pub fn new(config: SimConfig, out: W) -> Self {
        let manager = MemoryManager::with_capacity(config.capacity);
        Self::with_manager(manager, config, out)
    }

    pub fn with_manager(manager: MemoryManager, config: SimConfig, out: W) -> Self {
        Self {
            manager,
            config,
            out,
            read_depth: 0,
            executed: 0,
        }
    }

    pub fn manager(&self) -> &MemoryManager {
        &self.manager
    }

    /// Number of commands executed so far, including those from files
    pub fn executed(&self) -> u64 {
        self.executed
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Execute a parsed command
    pub fn execute(&mut self, command: Command) -> Result<Flow, ShellError> {
        self.executed += 1;
        let span = CommandSpan::new(command.name(), self.executed);
        let result = {
            let _entered = span.enter();
            self.dispatch(command)
        };

        match &result {
            Ok(_) => span.record_success(),
            Err(err) => span.record_error(&err.to_string(), err.log_level()),
        }
        result
    }

    fn dispatch(&mut self, command: Command) -> Result<Flow, ShellError> {
        match command {
            Command::Allocate {
                owner,
                size,
                strategy,
            } => {
                self.manager.request(owner, size, strategy)?;
            }
            Command::Free { owner } => {
                let freed = self.manager.release(owner);
                debug!(owner = %owner, freed, "free");
            }
            Command::Show => {
                writeln!(self.out, "{}", self.manager.show())?;
            }
            Command::Compact => {
                let report = self.manager.compact();
                debug!(
                    relocated = report.relocated,
                    free_from = report.free_from,
                    "compact"
                );
            }
            Command::Read { path } => return self.run_file(&path),
            Command::Exit => return Ok(Flow::Exit),
            Command::Empty => {}
        }
        Ok(Flow::Continue)
    }

    /// Normalize, parse and execute one raw input line
    ///
    /// Recoverable errors are written to the output and the loop continues;
    /// only output/input failures are returned.
    pub fn run_line(&mut self, raw: &str) -> Result<Flow, ShellError> {
        let line = normalize_line(trim_line_ending(raw));
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                debug!(line = %line, "invalid command");
                return self.report(err);
            }
        };

        match self.execute(command) {
            Ok(flow) => Ok(flow),
            Err(err) if err.is_recoverable() => self.report(err),
            Err(err) => Err(err),
        }
    }

    /// Prompt, read and execute lines until `Exit` or end of input
    pub fn run_interactive<R: BufRead>(&mut self, mut input: R) -> Result<(), ShellError> {
        let mut buffer = String::new();
        loop {
            write!(self.out, "{}", self.config.prompt)?;
            self.out.flush()?;

            buffer.clear();
            if input.read_line(&mut buffer)? == 0 {
                // End of input ends the session; nothing is replayed
                writeln!(self.out)?;
                info!(commands = self.executed, "End of input, leaving command loop");
                return Ok(());
            }

            let line = trim_line_ending(&buffer);
            if self.config.echo {
                writeln!(self.out, "{}", normalize_line(line))?;
            }
            if self.run_line(line)? == Flow::Exit {
                info!(commands = self.executed, "Exit requested, leaving command loop");
                return Ok(());
            }
        }
    }

    fn run_file(&mut self, path: &Path) -> Result<Flow, ShellError> {
        if self.read_depth >= MAX_READ_DEPTH {
            return Err(ShellError::ReadDepthExceeded {
                path: path.to_path_buf(),
                depth: self.read_depth,
            });
        }

        let file = File::open(path).map_err(|source| ShellError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), depth = self.read_depth + 1, "Reading command file");

        self.read_depth += 1;
        let result = self.run_script(path, BufReader::new(file));
        self.read_depth -= 1;
        result
    }

    // Each line is echoed as written in the file before it runs
    fn run_script<R: BufRead>(&mut self, path: &Path, script: R) -> Result<Flow, ShellError> {
        for line in script.lines() {
            let line = line.map_err(|source| ShellError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
            writeln!(self.out, "{line}")?;
            if self.run_line(&line)? == Flow::Exit {
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, err: ShellError) -> Result<Flow, ShellError> {
        writeln!(self.out, "{err}")?;
        Ok(Flow::Continue)
    }
}
