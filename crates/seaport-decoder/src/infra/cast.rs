//! Foundry's `cast` as the source of calldata and as the ABI decoder.

use {
    crate::domain::pipeline::{AbiDecoder, CalldataSource, ToolError},
    std::{
        path::PathBuf,
        process::{Command, Stdio},
    },
    url::Url,
};

#[derive(Clone, Debug)]
pub struct Cast {
    program: PathBuf,
    rpc_url: Option<Url>,
}

impl Cast {
    pub fn new(program: PathBuf, rpc_url: Option<Url>) -> Self {
        Self { program, rpc_url }
    }

    /// Runs `cast` to completion and returns what it printed to stdout.
    fn run(&self, args: &[&str]) -> Result<String, ToolError> {
        let command = format!("{} {}", self.program.display(), args.join(" "));
        tracing::debug!(%command, "running");
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ToolError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;
        if !output.status.success() {
            return Err(ToolError::Failed {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }
        String::from_utf8(output.stdout).map_err(|source| ToolError::Utf8 { command, source })
    }
}

impl CalldataSource for Cast {
    fn transaction(&self, id: &str) -> Result<String, ToolError> {
        match &self.rpc_url {
            Some(url) => self.run(&["tx", id, "--rpc-url", url.as_str()]),
            None => self.run(&["tx", id]),
        }
    }
}

impl AbiDecoder for Cast {
    fn decode(&self, calldata: &str) -> Result<String, ToolError> {
        self.run(&["4byte-decode", calldata])
    }
}
