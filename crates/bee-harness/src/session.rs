//! Run context shared by the test and bench runners.

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::output::Output;
use crate::structured_log::{LogEmitter, LogEntry, default_run_id};

/// Configuration, output sink and optional structured log for one run.
#[derive(Debug)]
pub struct Session {
    pub config: HarnessConfig,
    pub output: Output,
    log: Option<LogEmitter>,
}

impl Session {
    /// Session printing to stdout, without a structured log.
    #[must_use]
    pub fn new(config: HarnessConfig) -> Self {
        Self {
            config,
            output: Output::stdout(),
            log: None,
        }
    }

    /// Like [`Session::new`], but also opens `config.log_path` when it is set.
    pub fn open(config: HarnessConfig) -> Result<Self, HarnessError> {
        let log = match &config.log_path {
            Some(path) => Some(LogEmitter::to_file(path, &default_run_id())?),
            None => None,
        };
        Ok(Self {
            log,
            ..Self::new(config)
        })
    }

    #[must_use]
    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    #[must_use]
    pub fn with_log(mut self, emitter: LogEmitter) -> Self {
        self.log = Some(emitter);
        self
    }

    #[must_use]
    pub fn has_log(&self) -> bool {
        self.log.is_some()
    }

    /// Append `entry` to the structured log, if one is attached.
    ///
    /// The first write error detaches the log and is reported on stderr; the
    /// run itself carries on.
    pub fn log(&mut self, entry: LogEntry) {
        let Some(emitter) = self.log.as_mut() else {
            return;
        };
        if let Err(err) = emitter.emit_entry(entry) {
            eprintln!("bee-harness: structured log disabled: {err}");
            self.log = None;
        }
    }

    /// Flush the output sink and the structured log.
    pub fn flush(&mut self) -> Result<(), HarnessError> {
        use std::io::Write;

        self.output.flush()?;
        if let Some(emitter) = self.log.as_mut() {
            emitter.flush()?;
        }
        Ok(())
    }
}
