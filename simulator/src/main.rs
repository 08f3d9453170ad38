//! HUD system diagnostics panel simulator for desktop.
//!
//! Runs the panel against the real address and CPU temperature probes and a
//! scripted CO detector, in an `embedded-graphics-simulator` window.
//!
//! Keys: `S` attaches/detaches the CO sensor, `R` forces both probes to
//! refresh, `D` toggles the debug overlay.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod cli;
mod overlay;
mod sensor;
mod timing;

use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use clap::Parser;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use hud_diagnostics_common::colors::BLACK;
use hud_diagnostics_common::layout::{PANEL_FONT, co_alert_origin};
use hud_diagnostics_common::profiling::{DebugLog, TaskTimer};
use hud_diagnostics_common::{CoAlert, DiagnosticsSampler, HudConfig, MetricId, StatusPresenter, SystemInfoPanel};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::overlay::draw_overlay;
use crate::sensor::ScriptedSensor;
use crate::timing::{FRAME_TIME, TIME_STEP};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = match args.config.as_deref() {
        Some(path) => match HudConfig::load(path) {
            Ok(config) => {
                info!(path = %path.display(), "loaded config");
                config
            }
            Err(err) => {
                error!(error = %err, "config rejected");
                return ExitCode::FAILURE;
            }
        },
        None => HudConfig::default(),
    };

    run(&args, config);
    ExitCode::SUCCESS
}

fn run(
    args: &Args,
    config: HudConfig,
) {
    let size = Size::new(args.width, args.height);
    let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(size);
    let output_settings = OutputSettingsBuilder::new().scale(args.scale).build();
    let mut window = Window::new("HUD System Info", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let mut sampler = DiagnosticsSampler::with_system_probes(&config);
    let presenter = StatusPresenter::new(config, size);
    let panel = SystemInfoPanel::new(size, PANEL_FONT);
    let alert_origin = co_alert_origin(size, PANEL_FONT);
    let mut co_alert = CoAlert::new();

    let mut sensors: Option<ScriptedSensor> = (!args.no_sensor).then(ScriptedSensor::new);

    let mut show_overlay = false;
    let mut render_timer = TaskTimer::new("panel");
    let mut debug_log = DebugLog::new();
    debug_log.push("Simulator started");
    debug_log.push(if sensors.is_some() { "Sensor: attached" } else { "Sensor: detached" });

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::S => {
                            sensors = match sensors {
                                Some(_) => None,
                                None => Some(ScriptedSensor::new()),
                            };
                            let msg = if sensors.is_some() { "Sensor: attached" } else { "Sensor: detached" };
                            info!("{msg}");
                            debug_log.push(msg);
                        }
                        Keycode::R => {
                            sampler.force_refresh(MetricId::Address);
                            sampler.force_refresh(MetricId::CpuTemp);
                            info!("forced refresh");
                            debug_log.push("Refresh: address, cpu_temp");
                        }
                        Keycode::D => {
                            show_overlay = !show_overlay;
                            debug_log.push(if show_overlay { "Overlay: ON" } else { "Overlay: OFF" });
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        if let Some(sensor) = sensors.as_mut() {
            sensor.advance(TIME_STEP);
        }
        sampler.tick();

        render_timer.start();
        display.clear(BLACK).ok();

        let rows = presenter.build_rows(&sampler, &mut sensors);
        panel.draw(&mut display, &rows);

        if let Some((text, color)) = co_alert.update(&mut sensors, presenter.config().aithre_enabled) {
            panel.draw_text(&mut display, &text, alert_origin, color);
        }
        render_timer.stop();

        if show_overlay {
            draw_overlay(&mut display, &render_timer, &sampler, &debug_log);
        }

        window.update(&display);

        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}
