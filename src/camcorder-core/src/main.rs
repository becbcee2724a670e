//! Camcorder - configure, inspect and run FFmpeg-backed recordings

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

use camcorder_core::colored_logger::{init_component_logger, Component};
use camcorder_core::config::Config;
use camcorder_core::session::{output_file_name, RecordSession};
use camcorder_media::ffmpeg::{check_encoder, check_ffmpeg, default_audio_input, required_encoders};
use camcorder_media::{CapturePreset, FfmpegRecorderFactory, Quality, RecorderBuilder};

#[derive(Parser)]
#[command(name = "camcorder")]
#[command(about = "Slow-motion and time-lapse recording through FFmpeg")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Named profile from the configuration file
    #[arg(short, long, global = true)]
    profile: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Overrides for the configured recording settings
#[derive(Args, Debug, Default)]
struct RecordingArgs {
    /// Quality level (low, cif, 480p, 720p, 1080p, 2160p)
    #[arg(short, long)]
    quality: Option<Quality>,

    /// Capture preset (ultraslowmo, slowmo, normal, timelapse, ultratimelapse)
    #[arg(long)]
    preset: Option<CapturePreset>,

    /// Record microphone audio
    #[arg(long)]
    audio: bool,

    /// Orientation hint in degrees
    #[arg(long)]
    orientation: Option<i32>,

    /// Output file (defaults to a timestamped file in the output directory)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the recorder configuration calls without recording
    Plan {
        #[command(flatten)]
        recording: RecordingArgs,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Record a test pattern
    Record {
        #[command(flatten)]
        recording: RecordingArgs,

        /// Recording length in seconds
        #[arg(short, long)]
        duration: Option<u64>,
    },

    /// List capture presets
    Presets,

    /// Check dependencies (FFmpeg, encoders)
    Check {
        /// Quality level whose encoders to check
        #[arg(short, long)]
        quality: Option<Quality>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let component = match cli.command {
        Commands::Plan { .. } => Component::Plan,
        Commands::Record { .. } => Component::Record,
        Commands::Check { .. } => Component::Check,
        Commands::Presets => Component::Main,
    };
    init_component_logger(component, cli.verbose)?;

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(ref name) = cli.profile {
        config = config.apply_profile(name)?;
    }

    match cli.command {
        Commands::Plan { recording, json } => {
            cmd_plan(config, recording, json)?;
        }
        Commands::Record { recording, duration } => {
            cmd_record(config, recording, duration)?;
        }
        Commands::Presets => {
            cmd_presets(&config);
        }
        Commands::Check { quality } => {
            cmd_check(&config, quality);
        }
    }

    Ok(())
}

/// Merge command-line overrides into the configuration
fn apply_overrides(config: &mut Config, args: &RecordingArgs) {
    let recording = &mut config.recording;
    if let Some(quality) = args.quality {
        recording.quality = quality;
        recording.encoding = None;
    }
    if let Some(preset) = args.preset {
        recording.preset = preset;
    }
    if args.audio {
        recording.audio = true;
    }
    if let Some(orientation) = args.orientation {
        recording.orientation = orientation;
    }
}

fn builder_for(config: &Config, output: PathBuf) -> RecorderBuilder<FfmpegRecorderFactory> {
    let factory = FfmpegRecorderFactory {
        program: config.resolve_ffmpeg(),
        audio_input: default_audio_input(),
    };
    let recording = &config.recording;

    RecorderBuilder::with_factory(recording.capture_profile(), output, recording.preset, factory)
        .enable_audio(recording.audio)
        .orientation(recording.orientation)
}

fn resolve_output(config: &Config, args: &RecordingArgs) -> PathBuf {
    args.output.clone().unwrap_or_else(|| {
        let format = config.recording.capture_profile().file_format;
        config
            .resolve_output_dir()
            .join(output_file_name(chrono::Local::now(), config.recording.preset, format))
    })
}

fn cmd_plan(mut config: Config, args: RecordingArgs, json: bool) -> Result<()> {
    apply_overrides(&mut config, &args);
    let output = resolve_output(&config, &args);
    let builder = builder_for(&config, output);
    let plan = builder.plan();

    if json {
        let value = serde_json::json!({
            "settings": builder.settings(),
            "calls": plan,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    info!(
        "{} calls for preset {} ({} quality)",
        plan.len(),
        config.recording.preset,
        config.recording.quality
    );
    for (i, op) in plan.iter().enumerate() {
        println!("{:2}. {}", i + 1, op);
    }
    println!("{:2}. prepare()", plan.len() + 1);

    Ok(())
}

fn cmd_record(mut config: Config, args: RecordingArgs, duration: Option<u64>) -> Result<()> {
    apply_overrides(&mut config, &args);
    if let Some(duration) = duration {
        config.recording.duration_secs = duration;
    }

    let ffmpeg = config.resolve_ffmpeg();
    if !check_ffmpeg(&ffmpeg) {
        error!("ffmpeg not found at {:?} - please install FFmpeg", ffmpeg);
        return Err(anyhow::anyhow!("FFmpeg not found"));
    }

    let output = resolve_output(&config, &args);
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {:?}", parent))?;
    }

    info!("starting camcorder recorder");
    info!("output file: {:?}", output);

    let profile = config.recording.capture_profile();
    let recorder = builder_for(&config, output.clone())
        .build()
        .context("Failed to prepare recorder")?;

    // Setup signal handler
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    ctrlc::set_handler(move || {
        info!("received shutdown signal");
        r.store(false, Ordering::SeqCst);
    })?;

    let session = RecordSession::new(
        recorder,
        profile.video_frame_width,
        profile.video_frame_height,
        Duration::from_secs(config.recording.duration_secs),
    );
    let frames = session.run(running)?;

    if frames == 0 {
        warn!("no frames were recorded");
    }
    info!("saved {:?}", output);
    Ok(())
}

fn cmd_presets(config: &Config) {
    let frame_rate = config.recording.capture_profile().video_frame_rate;

    println!("capture presets at {} fps playback:\n", frame_rate);
    for preset in CapturePreset::all() {
        println!(
            "  {:15} factor {:<5} capture {} fps",
            preset.as_str(),
            preset.factor(),
            preset.capture_rate(frame_rate)
        );
    }
    println!("\nunrecognized names record as 'normal'");
}

/// Names of the checks that failed
fn failed_checks<'a>(results: &[(&'a str, bool)]) -> Vec<&'a str> {
    results
        .iter()
        .filter(|(_, ok)| !ok)
        .map(|(name, _)| *name)
        .collect()
}

fn cmd_check(config: &Config, quality: Option<Quality>) {
    println!("checking dependencies...\n");

    let ffmpeg = config.resolve_ffmpeg();
    let ffmpeg_ok = check_ffmpeg(&ffmpeg);
    println!(
        "  ffmpeg: {}",
        if ffmpeg_ok { "OK" } else { "NOT FOUND" }
    );

    let mut encoders = Vec::new();
    if ffmpeg_ok {
        let profile = match quality {
            Some(quality) => camcorder_media::CaptureProfile::for_quality(quality),
            None => config.recording.capture_profile(),
        };
        for encoder in required_encoders(profile.video_codec, Some(profile.audio_codec)) {
            let ok = check_encoder(&ffmpeg, encoder);
            println!("  {}: {}", encoder, if ok { "OK" } else { "not available" });
            encoders.push((encoder, ok));
        }
    }

    println!();

    let missing = failed_checks(&encoders);
    if !ffmpeg_ok {
        println!("WARNING: FFmpeg is required for recording.");
        println!("Please install FFmpeg and ensure it's in your PATH.");
        println!("Download: https://ffmpeg.org/download.html");
    } else if !missing.is_empty() {
        println!("WARNING: missing encoders: {}", missing.join(", "));
        println!("Recording with this quality will fail.");
        println!("Pick another --quality or use an FFmpeg build that includes them.");
    } else {
        println!("all checks passed!");
    }
}
