//! Recording command runner for testing.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex},
};

use slate_core::{
    application::ports::{CommandRunner, CommandStatus, Invocation, OutputMode},
    error::SlateResult,
};

/// Test double that records every invocation instead of spawning anything.
///
/// Every command succeeds with exit code 0 unless scripted otherwise via
/// [`RecordingRunner::fail_program`]. Clones share state, so a test can keep
/// a handle for assertions while the service owns a boxed copy.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    inner: Arc<Mutex<RecordingRunnerInner>>,
}

#[derive(Debug, Default)]
struct RecordingRunnerInner {
    invocations: Vec<Invocation>,
    failures: HashMap<String, i32>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script every future invocation of `program` to exit with `code`.
    pub fn fail_program(&self, program: &str, code: i32) {
        let mut inner = self.inner.lock().unwrap();
        inner.failures.insert(program.to_string(), code);
    }

    /// All invocations recorded so far, in order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.inner.lock().unwrap().invocations.clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        cwd: Option<&Path>,
        output: OutputMode,
    ) -> SlateResult<CommandStatus> {
        let mut inner = self.inner.lock().unwrap();
        inner.invocations.push(Invocation {
            program: program.to_string(),
            args: args.to_vec(),
            cwd: cwd.map(Path::to_path_buf),
            output,
        });

        match inner.failures.get(program) {
            Some(&code) => Ok(CommandStatus {
                success: false,
                code: Some(code),
            }),
            None => Ok(CommandStatus {
                success: true,
                code: Some(0),
            }),
        }
    }
}
