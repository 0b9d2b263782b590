// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{anyhow, bail, Context};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::config::consts::{ENGINE_COMMAND_KEY, JOB_ID_ENV_VAR};
use crate::config::JobDescriptor;
use crate::traits::{ComputationEngine, EngineFactory};

/// Engine that runs the job in an external program.
///
/// The program receives the descriptor as a single JSON document on stdin
/// and the job id in `RUNJOB_JOB_ID`. Its stdout is passed through; its
/// stderr is captured so a failure diagnostic can include it. There is no
/// timeout: a program that never exits keeps the job running.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandEngine {
    program: String,
    args: Vec<String>,
}

impl CommandEngine {
    /// Build from `config.engine_command`, either a command string split on
    /// whitespace or an array of strings (program, then arguments).
    pub fn from_config(config: &Map<String, Value>) -> anyhow::Result<Self> {
        let value = config
            .get(ENGINE_COMMAND_KEY)
            .ok_or_else(|| anyhow!("config has no '{}' entry", ENGINE_COMMAND_KEY))?;

        let mut parts: Vec<String> = match value {
            Value::String(command) => command.split_whitespace().map(str::to_string).collect(),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        anyhow!("'{}' must contain only strings, found {}", ENGINE_COMMAND_KEY, item)
                    })
                })
                .collect::<anyhow::Result<_>>()?,
            other => bail!(
                "'{}' must be a string or an array of strings, found {}",
                ENGINE_COMMAND_KEY,
                other
            ),
        };

        if parts.is_empty() || parts[0].is_empty() {
            bail!("'{}' is empty", ENGINE_COMMAND_KEY);
        }

        let program = parts.remove(0);
        Ok(Self {
            program,
            args: parts,
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

#[async_trait]
impl ComputationEngine for CommandEngine {
    async fn run_job(&self, job: &JobDescriptor) -> anyhow::Result<()> {
        let payload = serde_json::to_vec(job).context("failed to serialize job descriptor")?;

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .env(JOB_ID_ENV_VAR, &job.id)
            .stdin(Stdio::piped())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to start '{}'", self.program))?;

        let stdin = child.stdin.take();
        let feed = async move {
            if let Some(mut stdin) = stdin {
                // A program that exits without reading its input is judged by its exit status.
                match stdin.write_all(&payload).await {
                    Err(e) if e.kind() != ErrorKind::BrokenPipe => return Err(e),
                    _ => {}
                }
            }
            Ok::<(), std::io::Error>(())
        };

        let (fed, output) = tokio::join!(feed, child.wait_with_output());
        let output = output.with_context(|| format!("failed to wait for '{}'", self.program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "'{}' exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            );
        }

        fed.with_context(|| format!("failed to send job descriptor to '{}'", self.program))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "command"
    }
}

/// Factory for [`CommandEngine`]
pub struct CommandEngineFactory;

impl EngineFactory for CommandEngineFactory {
    fn create_engine(
        &self,
        config: &Map<String, Value>,
    ) -> anyhow::Result<Box<dyn ComputationEngine>> {
        Ok(Box::new(CommandEngine::from_config(config)?))
    }
}
