//! Where a request is read from and where its report is written.

use crate::CliError;
use anyhow::Context as _;
use clap::Args;
use serde::Serialize;
use smartload_core::models::OptimizationRequest;
use std::{
    convert::Infallible,
    fs::File,
    io::{BufReader, BufWriter, Write, stdin, stdout},
    path::PathBuf,
};

#[derive(Args)]
pub struct IOArgs {
    /// The request JSON file ("-" implies stdin)
    #[arg(value_parser = stream)]
    input: Stream,

    /// The report file ("-" implies stdout)
    #[arg(short, long, default_value = "-", value_parser = stream)]
    output: Stream,
}

impl IOArgs {
    /// Read the request, refusing one that names no truck.
    pub fn request(&self) -> anyhow::Result<OptimizationRequest> {
        let request: OptimizationRequest = match &self.input {
            Stream::File(path) => {
                let file = File::open(path)
                    .with_context(|| format!("cannot open {}", path.display()))?;
                serde_json::from_reader(BufReader::new(file))
                    .with_context(|| format!("{} is not a valid request", path.display()))?
            }
            Stream::Std => serde_json::from_reader(stdin().lock())
                .context("stdin is not a valid request")?,
        };

        if request.truck.id.is_empty() {
            return Err(CliError::MissingTruckId.into());
        }
        Ok(request)
    }

    /// Write `report` as pretty-printed JSON.
    pub fn report(&self, report: &impl Serialize) -> anyhow::Result<()> {
        match &self.output {
            Stream::File(path) => {
                let file = File::create(path)
                    .with_context(|| format!("cannot create {}", path.display()))?;
                emit(BufWriter::new(file), report)
            }
            Stream::Std => emit(stdout().lock(), report),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Stream {
    File(PathBuf),
    Std,
}

fn stream(arg: &str) -> Result<Stream, Infallible> {
    Ok(match arg {
        "-" => Stream::Std,
        path => Stream::File(PathBuf::from(path)),
    })
}

// Reports end with a newline so they behave on a terminal and in pipelines
fn emit(mut writer: impl Write, report: &impl Serialize) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
