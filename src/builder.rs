//! Builder for creating ProcessLogger instances.

use std::sync::Arc;

use crate::config::{DestinationSpec, FileExistsPolicy, LoggerConfig, resolve_destination};
use crate::error::LogError;
use crate::io::{OutputTarget, StderrOutput, StdoutOutput};
use crate::logger::{ProcessExit, ProcessLogger, Terminator};
use crate::phase::{PhaseCell, PhaseSource, RunPhase};

pub struct ProcessLoggerBuilder {
    destination_arg: Option<String>,
    destination_spec: Option<DestinationSpec>,
    error_stream_arg: Option<String>,
    error_stream: Option<Arc<dyn OutputTarget>>,
    phases: Option<Arc<dyn PhaseSource>>,
    initial_phase: RunPhase,
    terminator: Arc<dyn Terminator>,
    file_exists_policy: FileExistsPolicy,
}

impl ProcessLoggerBuilder {
    pub fn new() -> Self {
        Self {
            destination_arg: None,
            destination_spec: None,
            error_stream_arg: None,
            error_stream: None,
            phases: None,
            initial_phase: RunPhase::default(),
            terminator: Arc::new(ProcessExit),
            file_exists_policy: FileExistsPolicy::default(),
        }
    }

    /// Seed a builder from deserialized settings.
    pub fn from_config(config: &LoggerConfig) -> Result<Self, LogError> {
        let mut builder = Self::new()
            .with_file_exists_policy(config.policy()?)
            .with_initial_phase(config.phase()?);
        if let Some(raw) = &config.destination {
            builder = builder.destination(raw.clone());
        }
        if let Some(raw) = &config.error_stream {
            builder = builder.error_stream(raw.clone());
        }
        Ok(builder)
    }

    /// Destination as a raw argument: "-", "stdout", "stderr" or a path.
    pub fn destination(mut self, arg: impl Into<String>) -> Self {
        self.destination_arg = Some(arg.into());
        self.destination_spec = None;
        self
    }

    pub fn destination_spec(mut self, spec: DestinationSpec) -> Self {
        self.destination_spec = Some(spec);
        self.destination_arg = None;
        self
    }

    pub fn destination_target(self, target: Arc<dyn OutputTarget>) -> Self {
        let policy = self.file_exists_policy;
        let spec = DestinationSpec::new(target.id().to_string(), target)
            .with_file_exists_policy(policy);
        self.destination_spec(spec)
    }

    /// Error stream as a raw argument, same grammar as `destination`.
    pub fn error_stream(mut self, arg: impl Into<String>) -> Self {
        self.error_stream_arg = Some(arg.into());
        self.error_stream = None;
        self
    }

    pub fn error_stream_target(mut self, target: Arc<dyn OutputTarget>) -> Self {
        self.error_stream = Some(target);
        self.error_stream_arg = None;
        self
    }

    /// Use an external phase source instead of a fresh `PhaseCell`.
    pub fn with_phases(mut self, phases: Arc<dyn PhaseSource>) -> Self {
        self.phases = Some(phases);
        self
    }

    /// Phase for the `PhaseCell` created when no source is supplied.
    pub fn with_initial_phase(mut self, phase: RunPhase) -> Self {
        self.initial_phase = phase;
        self
    }

    pub fn with_terminator(mut self, terminator: Arc<dyn Terminator>) -> Self {
        self.terminator = terminator;
        self
    }

    /// Policy for destinations given as arguments, or as targets added after
    /// this call.
    pub fn with_file_exists_policy(mut self, policy: FileExistsPolicy) -> Self {
        self.file_exists_policy = policy;
        self
    }

    pub fn build(self) -> Result<ProcessLogger, LogError> {
        let destination = self.resolve_destination_spec()?;
        let error_stream = self.resolve_error_stream()?;
        let phases: Arc<dyn PhaseSource> = match self.phases {
            Some(phases) => phases,
            None => Arc::new(PhaseCell::new(self.initial_phase)),
        };

        ProcessLogger::from_parts(&destination, phases, error_stream, self.terminator)
    }

    fn resolve_destination_spec(&self) -> Result<DestinationSpec, LogError> {
        if let Some(spec) = &self.destination_spec {
            return Ok(spec.clone());
        }
        let spec = match &self.destination_arg {
            Some(raw) => DestinationSpec::parse(raw.clone())?,
            None => DestinationSpec::new("-", Arc::new(StdoutOutput::new())),
        };
        Ok(spec.with_file_exists_policy(self.file_exists_policy))
    }

    fn resolve_error_stream(&self) -> Result<Arc<dyn OutputTarget>, LogError> {
        if let Some(target) = &self.error_stream {
            return Ok(target.clone());
        }
        match &self.error_stream_arg {
            Some(raw) => resolve_destination(raw),
            None => Ok(Arc::new(StderrOutput::new())),
        }
    }
}

impl Default for ProcessLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
