use anyhow::Result;
use tracing::info;

use wavcarve::config::ConfigValue;
use wavcarve::extract::Extractor;
use wavcarve::{cli, logging};

fn main() -> Result<()> {
    logging::init_logging();

    let cli_opts = cli::parse();
    let mut extractor = Extractor::new(&cli_opts.input_file)?;

    let mut overrides: Vec<(&str, ConfigValue)> = Vec::new();
    if let Some(dir) = cli_opts.output_dir {
        overrides.push(("out_dir", dir.into()));
    }
    if let Some(prefix) = cli_opts.prefix {
        overrides.push(("out_file_name_prefix", prefix.into()));
    }
    if let Some(extension) = cli_opts.extension {
        overrides.push(("out_file_extension", extension.into()));
    }
    if cli_opts.skip_write {
        overrides.push(("debug_skip_write", true.into()));
    }
    if cli_opts.quiet {
        overrides.push(("debug_enable_log", false.into()));
    }
    extractor.configure(overrides)?;

    info!("scanning {}", extractor.resource_path().display());
    let stats = extractor.extract()?;
    info!(
        "run_summary hits_found={} chunks_found={} out_of_bounds={} files_written={} bytes_written={}",
        stats.hits_found,
        stats.chunks_found,
        stats.out_of_bounds,
        stats.files_written,
        stats.bytes_written
    );
    Ok(())
}
