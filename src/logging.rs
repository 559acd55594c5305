//! Diagnostic logging for the demonstration binaries.
//!
//! Stdout carries the demonstration transcript and nothing else, so the
//! binaries install a subscriber that writes to stderr. The filter comes from
//! [`LogSettings`] only; the environment is never consulted.

use crate::error::{DemoError, Result};
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Code-level logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Filter directive, e.g. `"warn"` or `"design_patterns=debug"`.
    pub level: String,
    pub ansi: bool,
    pub with_target: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            ansi: false,
            with_target: false,
        }
    }
}

impl LogSettings {
    pub fn filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_new(&self.level)
            .map_err(|err| DemoError::Logging(format!("invalid filter '{}': {err}", self.level)))
    }
}

/// Builds a fmt subscriber for `settings` that writes through `make_writer`.
pub fn subscriber<M>(settings: &LogSettings, make_writer: M) -> Result<impl Subscriber + Send + Sync>
where
    M: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    Ok(tracing_subscriber::fmt()
        .with_env_filter(settings.filter()?)
        .with_writer(make_writer)
        .with_ansi(settings.ansi)
        .with_target(settings.with_target)
        .finish())
}

/// Installs the global stderr subscriber. Fails if one is already installed.
pub fn init(settings: &LogSettings) -> Result<()> {
    tracing::subscriber::set_global_default(subscriber(settings, std::io::stderr)?)
        .map_err(|err| DemoError::Logging(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_factory;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    const ABSTRACT_FACTORY_TRANSCRIPT: &str = "\
Client: Testing client code with the first factory type:
Meow.
White Meow.
The black animals come here and speak ( Meow. )

Client: Testing the same client code with the second factory type:
Woof.
White Woof.
the black animals come here and speak ( Woof. )
";

    fn run_with(settings: &LogSettings) -> (String, String) {
        let logs = SharedBuffer::default();
        let sink = logs.clone();
        let subscriber = subscriber(settings, move || sink.clone()).unwrap();

        let mut stdout = Vec::new();
        tracing::subscriber::with_default(subscriber, || abstract_factory::demo(&mut stdout))
            .unwrap();
        (String::from_utf8(stdout).unwrap(), logs.contents())
    }

    #[test]
    fn test_default_settings_are_quiet() {
        let settings = LogSettings::default();
        assert_eq!(settings.level, "warn");
        assert!(!settings.ansi);
        assert!(!settings.with_target);
    }

    #[test]
    fn test_default_level_logs_nothing_during_demo() {
        let (stdout, logs) = run_with(&LogSettings::default());
        assert_eq!(stdout, ABSTRACT_FACTORY_TRANSCRIPT);
        assert!(logs.is_empty(), "unexpected log output: {logs}");
    }

    #[test]
    fn test_debug_events_go_to_log_writer_not_stdout() {
        let settings = LogSettings {
            level: "design_patterns=debug".to_string(),
            ..LogSettings::default()
        };
        let (stdout, logs) = run_with(&settings);
        assert_eq!(stdout, ABSTRACT_FACTORY_TRANSCRIPT);
        assert!(logs.contains("variant="));
        assert!(logs.contains("creating black animal"));
        assert!(!stdout.contains("variant"));
    }

    // Sole owner of the global subscriber in this test binary.
    #[test]
    fn test_init_installs_once() {
        assert!(init(&LogSettings::default()).is_ok());
        assert!(init(&LogSettings::default()).is_err());
    }
}
