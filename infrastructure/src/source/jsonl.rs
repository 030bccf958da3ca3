//! JSONL reader for tool invocation records.
//!
//! Each non-blank line holds one [`ToolInvocation`] object. Lines that do not
//! decode are logged and skipped unless strict mode is on.

use async_trait::async_trait;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, warn};
use uigen_application::ports::invocation_source::{InvocationSource, SourceError};
use uigen_domain::ToolInvocation;

/// Line-delimited JSON invocation source.
pub struct JsonlInvocationSource<R> {
    lines: Lines<R>,
    line_no: usize,
    skipped: usize,
    strict: bool,
}

impl<R: AsyncBufRead + Unpin + Send> JsonlInvocationSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            skipped: 0,
            strict: false,
        }
    }

    /// Fail on the first undecodable line instead of skipping it.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Number of lines skipped so far because they failed to decode.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl JsonlInvocationSource<BufReader<File>> {
    /// Open a JSONL file.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        debug!("Opening invocation log {}", path.display());
        let file = File::open(path).await?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl JsonlInvocationSource<BufReader<Stdin>> {
    /// Read records from standard input.
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> InvocationSource for JsonlInvocationSource<R> {
    async fn next_invocation(&mut self) -> Result<Option<ToolInvocation>, SourceError> {
        while let Some(line) = self.lines.next_line().await? {
            self.line_no += 1;
            let record = line.trim();
            if record.is_empty() {
                continue;
            }

            match serde_json::from_str::<ToolInvocation>(record) {
                Ok(invocation) => return Ok(Some(invocation)),
                Err(e) if self.strict => {
                    return Err(SourceError::Decode {
                        line: self.line_no,
                        message: e.to_string(),
                    });
                }
                Err(e) => {
                    self.skipped += 1;
                    warn!("Skipping line {}: {}", self.line_no, e);
                }
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use uigen_domain::InvocationState;

    fn source(input: &'static str) -> JsonlInvocationSource<BufReader<&'static [u8]>> {
        JsonlInvocationSource::new(BufReader::new(input.as_bytes()))
    }

    async fn drain<R: AsyncBufRead + Unpin + Send>(
        source: &mut JsonlInvocationSource<R>,
    ) -> Vec<ToolInvocation> {
        let mut out = Vec::new();
        while let Some(invocation) = source.next_invocation().await.unwrap() {
            out.push(invocation);
        }
        out
    }

    #[tokio::test]
    async fn test_reads_records_and_skips_blank_lines() {
        let mut src = source(concat!(
            r#"{"toolCallId":"c1","toolName":"str_replace_editor","args":{"command":"create","path":"/src/Card.jsx"},"state":"call"}"#,
            "\n\n   \n",
            r#"{"tool_call_id":"c1","tool_name":"str_replace_editor","args":{"command":"create","path":"/src/Card.jsx"},"state":"result"}"#,
            "\n",
        ));

        let records = drain(&mut src).await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].state, InvocationState::Pending);
        assert_eq!(records[1].state, InvocationState::Complete);
        assert_eq!(records[1].display_text(), "Creating Card.jsx");
        assert_eq!(src.skipped(), 0);
    }

    #[tokio::test]
    async fn test_skips_malformed_lines() {
        let mut src = source(concat!(
            "not json\n",
            r#"{"args":{}}"#,
            "\n",
            r#"{"toolName":"file_manager","args":{"command":"delete","path":"/old-file.ts"}}"#,
            "\n",
        ));

        let records = drain(&mut src).await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].display_text(), "Deleting old-file.ts");
        assert_eq!(src.skipped(), 2);
    }

    #[tokio::test]
    async fn test_strict_mode_reports_line() {
        let mut src = source("\n{\"toolName\": \"file_manager\"}\n{oops\n").with_strict(true);

        assert!(src.next_invocation().await.unwrap().is_some());
        let err = src.next_invocation().await.unwrap_err();
        match err {
            SourceError::Decode { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"toolName":"unknown_tool","args":{{"path":"/file.js"}},"state":"result"}}"#
        )
        .unwrap();

        let mut src = JsonlInvocationSource::from_path(file.path()).await.unwrap();
        let records = drain(&mut src).await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].display_text(), "unknown_tool");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = JsonlInvocationSource::from_path(dir.path().join("missing.jsonl")).await;
        assert!(matches!(result, Err(SourceError::Io(_))));
    }
}
