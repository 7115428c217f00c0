use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use pcm_bandpass::audio::{
    PcmSink, PcmSource, RawPcmSink, RawPcmSource, WavPcmSink, WavPcmSource,
};
use pcm_bandpass::output::{ReportFormat, create_formatter};
use pcm_bandpass::{FilterConfig, StreamFormat, StreamProcessor, StreamingFir};

#[derive(Parser, Debug)]
#[command(name = "pcm-bandpass")]
#[command(about = "Band-pass filter 16-bit mono PCM audio in fixed-size chunks", long_about = None)]
struct Args {
    /// Input file
    input: PathBuf,

    /// Output file
    output: PathBuf,

    /// TOML configuration file (chunk_size, sample_rate, format, taps)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sample format: raw, wav (overrides config)
    #[arg(short = 'f', long, value_enum)]
    format: Option<StreamFormat>,

    /// Samples per engine call (overrides config)
    #[arg(short = 'n', long)]
    chunk_size: Option<usize>,

    /// Summary format: text, json
    #[arg(short = 'r', long, value_enum, default_value = "text")]
    report: ReportFormat,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = match &args.config {
        Some(path) => FilterConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => FilterConfig::default(),
    };
    if let Some(format) = args.format {
        config.format = format;
    }
    if let Some(chunk_size) = args.chunk_size {
        config.chunk_size = chunk_size;
    }
    let coeffs = config
        .validated_coefficients()
        .context("Invalid configuration")?;
    log::info!(
        "{} taps, group delay {} samples, DC gain {:.4}, symmetric: {}",
        coeffs.len(),
        coeffs.group_delay_samples(),
        coeffs.dc_gain(),
        coeffs.is_symmetric()
    );

    let mut source = open_source(&args.input, config.format)
        .with_context(|| format!("Couldn't open {}", args.input.display()))?;
    let sample_rate = source.sample_rate().unwrap_or(config.sample_rate);
    let mut sink = create_sink(&args.output, config.format, sample_rate)
        .with_context(|| format!("Couldn't create {}", args.output.display()))?;

    let mut processor = StreamProcessor::new(StreamingFir::new(coeffs, config.chunk_size)?);
    let report = processor
        .run(source.as_mut(), sink.as_mut())
        .with_context(|| format!("Failed filtering {}", args.input.display()))?;

    let formatter = create_formatter(args.report, args.verbose > 0);
    println!("{}", formatter.format(&report)?);

    Ok(())
}

fn open_source(path: &Path, format: StreamFormat) -> pcm_bandpass::Result<Box<dyn PcmSource>> {
    let source: Box<dyn PcmSource> = match format {
        StreamFormat::Raw => Box::new(RawPcmSource::open(path)?),
        StreamFormat::Wav => Box::new(WavPcmSource::open(path)?),
    };
    Ok(source)
}

fn create_sink(
    path: &Path,
    format: StreamFormat,
    sample_rate: u32,
) -> pcm_bandpass::Result<Box<dyn PcmSink>> {
    let sink: Box<dyn PcmSink> = match format {
        StreamFormat::Raw => Box::new(RawPcmSink::create(path)?),
        StreamFormat::Wav => Box::new(WavPcmSink::create(path, sample_rate)?),
    };
    Ok(sink)
}
