//! Lossy Channel Example
//!
//! A remote entity circles the origin and broadcasts its position at a fixed
//! rate over a channel that delays, jitters, drops and reorders packets. The
//! receiver feeds every packet into an `Estimator` and renders at 60 Hz,
//! comparing the estimate against the true position.
//!
//! Run with `RUST_LOG=debug` to see rejected out-of-order packets, or
//! `RUST_LOG=trace` for every accepted sample.

mod channel;
mod rng;

use anyhow::{Context, Result};
use clap::Parser;
use reckon_core::Vec3;
use reckon_netcode::{Estimator, EstimatorConfig};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::channel::{ChannelParams, LossyChannel};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Estimator config (RON); defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seconds of simulated time
    #[arg(long, default_value_t = 10.0)]
    duration: f64,

    /// Sender update rate in Hz
    #[arg(long, default_value_t = 10.0)]
    send_rate: f64,

    /// Fixed one-way delay in seconds
    #[arg(long, default_value_t = 0.08)]
    base_delay: f64,

    /// Maximum additional random delay in seconds
    #[arg(long, default_value_t = 0.06)]
    jitter: f64,

    /// Probability that a packet is dropped
    #[arg(long, default_value_t = 0.1)]
    loss: f64,

    /// Seed for the channel
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

const RENDER_STEP: f64 = 1.0 / 60.0;
const RADIUS: f64 = 5.0;
const ANGULAR_SPEED: f64 = 0.8;

fn true_position(t: f64) -> Vec3 {
    let angle = t * ANGULAR_SPEED;
    Vec3::new(RADIUS * angle.cos(), RADIUS * angle.sin(), 0.0)
}

#[derive(Debug, Default)]
struct Stats {
    accepted: usize,
    stale: usize,
    frames: usize,
    out_of_range: usize,
    total_error: f64,
    max_error: f64,
}

fn run(cli: &Cli) -> Result<Stats> {
    let config = match &cli.config {
        Some(path) => EstimatorConfig::load(path)
            .with_context(|| format!("loading estimator config from {}", path.display()))?,
        None => EstimatorConfig::default(),
    };
    anyhow::ensure!(cli.send_rate > 0.0, "send rate must be positive");

    let mut estimator = Estimator::<Vec3>::with_config(config)?;
    estimator.reset(0.0, 0.0, true_position(0.0))?;

    let mut channel = LossyChannel::new(
        ChannelParams {
            base_delay: cli.base_delay,
            jitter: cli.jitter,
            loss: cli.loss,
        },
        cli.seed,
    );

    let send_interval = 1.0 / cli.send_rate;
    let mut next_send = send_interval;
    let mut stats = Stats::default();
    let mut now = 0.0;

    while now < cli.duration {
        now += RENDER_STEP;

        while next_send <= now {
            channel.send(next_send, true_position(next_send));
            next_send += send_interval;
        }

        for packet in channel.receive(now) {
            match estimator.add_sample(packet.sent_at, now, packet.pos) {
                Ok(()) => stats.accepted += 1,
                Err(e) if e.is_stale() => {
                    debug!(sent_at = packet.sent_at, "dropping out-of-order packet");
                    stats.stale += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }

        let reading = estimator.read_position(now);
        let error = reading.pos.distance(true_position(now));
        stats.frames += 1;
        stats.total_error += error;
        stats.max_error = stats.max_error.max(error);
        if !reading.in_range {
            stats.out_of_range += 1;
        }
    }

    info!(
        latency = estimator.estimate_latency(),
        update_time = estimator.estimate_update_time(),
        dropped = channel.dropped(),
        "final estimates"
    );
    Ok(stats)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .try_init()
        .ok();

    let cli = Cli::parse();
    println!("=== Reckon Lossy Channel Example ===\n");

    match run(&cli) {
        Ok(stats) => {
            println!("Accepted samples:     {}", stats.accepted);
            println!("Out-of-order dropped: {}", stats.stale);
            println!("Frames rendered:      {}", stats.frames);
            println!("Frames out of range:  {}", stats.out_of_range);
            if stats.frames > 0 {
                println!(
                    "Mean error:           {:.4}",
                    stats.total_error / stats.frames as f64
                );
            }
            println!("Max error:            {:.4}", stats.max_error);
        }
        Err(err) => {
            eprintln!("error: {err:?}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(loss: f64) -> Cli {
        Cli {
            config: None,
            duration: 5.0,
            send_rate: 10.0,
            base_delay: 0.08,
            jitter: 0.06,
            loss,
            seed: 7,
        }
    }

    #[test]
    fn test_clean_channel_tracks_closely() {
        let stats = run(&cli(0.0)).unwrap();
        assert!(stats.accepted > 40);
        assert!((299..=301).contains(&stats.frames));
        // Delay of ~0.1s on a 4 units/s path, plus overshoot on curves
        assert!(stats.total_error / (stats.frames as f64) < 2.0);
    }

    #[test]
    fn test_lossy_channel_still_runs() {
        let stats = run(&cli(0.5)).unwrap();
        assert!(stats.accepted > 0);
        assert!(stats.max_error.is_finite());
    }

    #[test]
    fn test_missing_config_is_error() {
        let mut cli = cli(0.0);
        cli.config = Some(PathBuf::from("/nonexistent/estimator.ron"));
        assert!(run(&cli).is_err());
    }
}
