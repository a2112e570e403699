use std::{
    fs::File,
    io::{self, BufReader, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;

/// Destination of a JSON report: stdout unless `--output` names a file.
#[derive(Debug)]
pub enum Output {
    Stdout(StdoutLock<'static>),
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    /// Writes `value` as pretty JSON followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns error if the output file cannot be created or written
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize + ?Sized,
    {
        let mut output = match output_path {
            Some(path) => {
                let file = File::create(&path).with_context(|| {
                    format!("Failed to create output file: {}", path.display())
                })?;
                Output::File {
                    writer: BufWriter::new(file),
                    path,
                }
            }
            None => Output::Stdout(io::stdout().lock()),
        };

        serde_json::to_writer_pretty(&mut output, value)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(output))
            .and_then(|()| output.flush())
            .with_context(|| format!("Failed to write JSON to {}", output.target()))?;

        if let Output::File { path, .. } = &output {
            eprintln!("Saved to {}", path.display());
        }
        Ok(())
    }

    fn target(&self) -> String {
        match self {
            Output::Stdout(_) => "stdout".to_owned(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    fn writer(&mut self) -> &mut dyn io::Write {
        match self {
            Output::Stdout(writer) => writer,
            Output::File { writer, .. } => writer,
        }
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer().flush()
    }
}

/// Read a sample from a JSON file holding an array of numbers
///
/// # Errors
///
/// Returns error if the file cannot be opened or is not a JSON array of numbers
pub fn read_values_file<P>(path: P) -> anyhow::Result<Vec<f64>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open values file: {}", path.display()))?;
    let values: Vec<f64> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse values JSON file: {}", path.display()))?;
    eprintln!("Read {} values from {}", values.len(), path.display());
    Ok(values)
}
