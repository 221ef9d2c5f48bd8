//! Command line
//!
//! `shell <text|url|file|get> <value> [--download <dir>]`

use std::path::PathBuf;
use thiserror::Error;

pub const USAGE: &str = "usage: shell <text|url|file|get> <value> [--download <dir>]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Text(String),
    Url(String),
    File(PathBuf),
    /// Open a past check by id
    Get(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub download: Option<PathBuf>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("missing command")]
    MissingCommand,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("{0} needs a value")]
    MissingValue(&'static str),

    #[error("unexpected argument: {0}")]
    Unexpected(String),
}

impl Invocation {
    pub fn parse<I>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let name = args.next().ok_or(UsageError::MissingCommand)?;
        let mut value = None;
        let mut download = None;

        while let Some(arg) = args.next() {
            if arg == "--download" {
                let dir = args.next().ok_or(UsageError::MissingValue("--download"))?;
                download = Some(PathBuf::from(dir));
            } else if value.is_none() {
                value = Some(arg);
            } else {
                return Err(UsageError::Unexpected(arg));
            }
        }

        // Text may legitimately be blank; validation reports it.
        let command = match name.as_str() {
            "text" => Command::Text(value.unwrap_or_default()),
            "url" => Command::Url(value.ok_or(UsageError::MissingValue("url"))?),
            "file" => Command::File(value.ok_or(UsageError::MissingValue("file"))?.into()),
            "get" => Command::Get(value.ok_or(UsageError::MissingValue("get"))?),
            _ => return Err(UsageError::UnknownCommand(name)),
        };

        Ok(Self { command, download })
    }
}

/// MIME type guessed from the file extension
pub fn mime_for(path: &std::path::Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "md" => "text/markdown",
        "html" | "htm" => "text/html",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn parse(args: &[&str]) -> Result<Invocation, UsageError> {
        Invocation::parse(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse(&["text", "Vaccines contain microchips"]).unwrap().command,
            Command::Text("Vaccines contain microchips".into())
        );
        let inv = parse(&["get", "chk_1", "--download", "out"]).unwrap();
        assert_eq!(inv.command, Command::Get("chk_1".into()));
        assert_eq!(inv.download, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse(&[]), Err(UsageError::MissingCommand));
        assert_eq!(
            parse(&["scan", "x"]),
            Err(UsageError::UnknownCommand("scan".into()))
        );
        assert_eq!(parse(&["url"]), Err(UsageError::MissingValue("url")));
        assert_eq!(
            parse(&["text", "a", "--download"]),
            Err(UsageError::MissingValue("--download"))
        );
        assert_eq!(
            parse(&["text", "a", "b"]),
            Err(UsageError::Unexpected("b".into()))
        );
    }

    #[test]
    fn test_mime_for() {
        assert_eq!(mime_for(Path::new("shot.PNG")), "image/png");
        assert_eq!(mime_for(Path::new("report.pdf")), "application/pdf");
        assert_eq!(mime_for(Path::new("archive.zip")), "application/octet-stream");
    }
}
