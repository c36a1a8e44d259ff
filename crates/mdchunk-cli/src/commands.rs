//! Subcommand implementations.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use mdchunk_content::{extract_from_file, BatchExtraction, Chunk};
use mdchunk_core::find_files;
use tokio::task::JoinSet;

use crate::cli::{Cli, Command};
use crate::config::{MdchunkConfig, OutputFormat};
use crate::Result;

/// Run the parsed command line against a loaded configuration.
pub async fn run(cli: Cli, mut config: MdchunkConfig) -> Result<ExitCode> {
    match cli.command {
        Command::Extract {
            paths,
            format,
            strict,
        } => {
            config.apply_overrides(cli.content_dir, cli.pattern, format, strict);
            cmd_extract(&paths, &config).await
        }
        Command::List { dir } => {
            config.apply_overrides(cli.content_dir, cli.pattern, None, false);
            cmd_list(dir.as_deref(), &config)
        }
    }
}

/// Extract chunks and print them to stdout.
///
/// Failed files are reported on stderr through the log output; with
/// `strict` set they also make the exit code non-zero.
pub async fn cmd_extract(paths: &[PathBuf], config: &MdchunkConfig) -> Result<ExitCode> {
    let stdout = std::io::stdout();
    extract_to(paths, config, &mut stdout.lock()).await
}

async fn extract_to<W: Write>(
    paths: &[PathBuf],
    config: &MdchunkConfig,
    out: &mut W,
) -> Result<ExitCode> {
    let inputs = if paths.is_empty() {
        vec![config.content_dir.clone()]
    } else {
        paths.to_vec()
    };

    let files = collect_files(&inputs, &config.pattern)?;
    tracing::debug!(files = files.len(), "Collected input files");

    let batch = extract_concurrently(files).await?;

    write_chunks(out, &batch.chunks, config.format)?;
    out.flush()?;

    tracing::info!(
        chunks = batch.chunks.len(),
        files = batch.files_processed,
        failed = batch.files_failed(),
        "Extraction finished"
    );

    if config.strict && !batch.is_complete() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Print the files a directory run would process.
pub fn cmd_list(dir: Option<&Path>, config: &MdchunkConfig) -> Result<ExitCode> {
    let dir = dir.unwrap_or(config.content_dir.as_path());
    for path in find_files(dir, &config.pattern)? {
        println!("{}", path.display());
    }
    Ok(ExitCode::SUCCESS)
}

/// Expand inputs into a file list: directories contribute their files
/// matching `pattern`, anything else is taken as a file.
pub fn collect_files(inputs: &[PathBuf], pattern: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            files.extend(find_files(input, pattern)?);
        } else {
            files.push(input.clone());
        }
    }
    Ok(files)
}

/// Extract every file on the blocking pool, one task per file.
///
/// Results are recorded in input order regardless of completion order.
pub async fn extract_concurrently(files: Vec<PathBuf>) -> Result<BatchExtraction> {
    let mut tasks = JoinSet::new();
    for (index, path) in files.into_iter().enumerate() {
        tasks.spawn_blocking(move || {
            let result = extract_from_file(&path);
            (index, path, result)
        });
    }

    let mut outcomes = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        outcomes.push(joined?);
    }
    outcomes.sort_by_key(|(index, _, _)| *index);

    let mut batch = BatchExtraction::default();
    for (_, path, result) in outcomes {
        batch.record(path, result);
    }
    Ok(batch)
}

/// Write chunks in the requested format.
///
/// Output is serialized in full before anything is written, so a
/// serialization error leaves `out` untouched.
pub fn write_chunks<W: Write>(out: &mut W, chunks: &[Chunk], format: OutputFormat) -> Result<()> {
    let mut buf = Vec::new();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut buf, chunks)?;
            buf.push(b'\n');
        }
        OutputFormat::Jsonl => {
            for chunk in chunks {
                serde_json::to_writer(&mut buf, chunk)?;
                buf.push(b'\n');
            }
        }
    }
    out.write_all(&buf)?;
    Ok(())
}
