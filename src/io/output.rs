//! Trajectory output and logging setup.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};

use crate::sampling::DescentStep;

/// Initialize the tracing subscriber for terminal output.
pub fn setup_logging() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();
}

/// Path of the convergence table for a named system.
pub fn convergence_path(output_dir: &Path, system_name: &str) -> PathBuf {
    output_dir.join(format!("{}_convergence.txt", system_name))
}

/// Write the trajectory as whitespace-separated columns with a header row.
pub fn write_trajectory<W: Write>(writer: &mut W, trajectory: &[DescentStep]) -> Result<()> {
    writeln!(writer, "iteration alpha energy stdev")?;
    for step in trajectory {
        writeln!(
            writer,
            "{} {} {} {}",
            step.iteration, step.alpha, step.energy, step.stdev
        )?;
    }
    Ok(())
}

/// Write the trajectory to `<output_dir>/<system>_convergence.txt`,
/// creating the directory if needed. Returns the written path.
pub fn write_trajectory_file(
    output_dir: &Path,
    system_name: &str,
    trajectory: &[DescentStep],
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .wrap_err_with(|| format!("unable to create output directory {}", output_dir.display()))?;
    let path = convergence_path(output_dir, system_name);
    let file = File::create(&path)
        .wrap_err_with(|| format!("unable to create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_trajectory(&mut writer, trajectory)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convergence_path_naming() {
        let path = convergence_path(Path::new("output"), "helium");
        assert_eq!(path, PathBuf::from("output/helium_convergence.txt"));
    }

    #[test]
    fn test_trajectory_table_format() {
        let trajectory = vec![
            DescentStep {
                iteration: 1,
                alpha: 1.2,
                energy: 0.7,
                stdev: 0.3,
            },
            DescentStep {
                iteration: 2,
                alpha: 0.8,
                energy: 0.55,
                stdev: 0.1,
            },
        ];
        let mut buffer = Vec::new();
        write_trajectory(&mut buffer, &trajectory).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("iteration alpha energy stdev"));
        assert_eq!(lines.next(), Some("1 1.2 0.7 0.3"));
        assert_eq!(lines.next(), Some("2 0.8 0.55 0.1"));
        assert_eq!(lines.next(), None);
    }
}
