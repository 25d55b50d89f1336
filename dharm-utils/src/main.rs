// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use std::path::{Path, PathBuf};

use ansi_term::Colour::{Blue, Green, Purple, Red, Yellow};
use clap::{Parser, ValueEnum};
use dharm::app::{App, Presenter, Readout};
use dharm::dharm_core::nalgebra::Point3;
use dharm::dharm_core::{JointPose, DEFAULT_DOF};
use dharm::scene::{Scene, Segment};
use dharm::table::{Column, JointTable};
use dharm::{ArmConfig, Configurable};
use serde_derive::Serialize;

mod config;

/// Presenter retaining the last presented poses and scene.
struct Capture {
    poses: Vec<JointPose>,
    scene: Scene,
}

impl Default for Capture {
    fn default() -> Self {
        Self {
            poses: vec![],
            scene: Scene::idle(),
        }
    }
}

impl Presenter for Capture {
    fn show(&mut self, poses: &[JointPose], scene: &Scene) {
        self.poses = poses.to_vec();
        self.scene = scene.clone();
    }

    fn reset_to_idle(&mut self) {
        self.poses.clear();
        self.scene = Scene::idle();
    }
}

#[derive(Default)]
struct TcpReadout(Option<Point3<f64>>);

impl Readout for TcpReadout {
    fn display(&mut self, position: Point3<f64>) {
        self.0 = Some(position);
    }
}

/// Result of evaluating a single arm.
#[derive(Serialize)]
struct Report {
    name: String,
    poses: Vec<JointPose>,
    tcp: Option<Point3<f64>>,
    #[serde(skip)]
    scene: Scene,
}

impl Report {
    fn evaluate(name: String, table: &JointTable) -> Self {
        let mut app = App::new(Capture::default(), TcpReadout::default());
        app.calculate(table);

        let (capture, readout) = app.into_inner();

        Self {
            name,
            poses: capture.poses,
            tcp: readout.0,
            scene: capture.scene,
        }
    }
}

/// Arm source.
enum Input {
    Preset(usize),
    File(PathBuf),
}

impl Input {
    fn from_args(file: Option<PathBuf>, preset: Option<usize>) -> Self {
        match (file, preset) {
            (Some(path), _) => Input::File(path),
            (None, Some(count)) => Input::Preset(count),
            (None, None) => {
                let path = Path::new(dharm::consts::DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Input::File(path.to_path_buf())
                } else {
                    Input::Preset(DEFAULT_DOF)
                }
            }
        }
    }

    /// Load the arm as a named joint table.
    fn load(&self) -> anyhow::Result<(String, JointTable)> {
        match self {
            Input::Preset(count) => Ok((
                format!("preset ({} joints)", count),
                JointTable::from_preset(*count),
            )),
            Input::File(path) if path.extension().is_some_and(|ext| ext == "toml") => {
                let config: ArmConfig = dharm::from_file(path)?;
                Ok((config.name().to_string(), JointTable::from(config.joint_list())))
            }
            Input::File(path) => {
                let file = std::fs::File::open(path)?;
                Ok((path.display().to_string(), JointTable::read_csv(file)?))
            }
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ColumnArg {
    Theta,
    A,
    D,
    Alpha,
}

impl From<ColumnArg> for Column {
    fn from(value: ColumnArg) -> Self {
        match value {
            ColumnArg::Theta => Column::Theta,
            ColumnArg::A => Column::A,
            ColumnArg::D => Column::D,
            ColumnArg::Alpha => Column::Alpha,
        }
    }
}

/// Convert a row number as shown to the user into a table index.
fn row_index(row: usize) -> anyhow::Result<usize> {
    row.checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("row numbers start at 1"))
}

fn format_point(point: &Point3<f64>) -> String {
    format!("[{:.3}, {:.3}, {:.3}]", point.x, point.y, point.z)
}

fn format_segment(segment: &Option<Segment>) -> String {
    match segment {
        Some(segment) => format!(
            "{} -> {} ({:.3} m)",
            format_point(&segment.start),
            format_point(&segment.end()),
            segment.length
        ),
        None => "-".to_string(),
    }
}

fn print_report(report: &Report) {
    println!("{}", Purple.bold().paint(&report.name));

    let names = dharm::dharm_core::joint_names(report.poses.len());
    for (name, pose) in names.iter().zip(&report.poses) {
        println!("  {} {}", Blue.paint(format!("{:<10}", name)), pose);
    }

    match report.tcp {
        Some(tcp) => println!("  {} {}", Green.paint(format!("{:<10}", "TCP")), format_point(&tcp)),
        None => println!("  {}", Yellow.paint("No joints")),
    }
}

fn print_scene(report: &Report) {
    let scene = &report.scene;

    println!("{}", Purple.bold().paint(&report.name));
    println!("  Base axis length: {:.3}", scene.base_axis_length);
    println!("  Axis radius:      {:.3}", scene.axis_radius);
    println!("  Tube radius:      {:.3}", scene.tube_radius);
    println!("  Base link:        {}", format_segment(&scene.base_link));

    let names = dharm::dharm_core::joint_names(scene.frames.len());
    for (name, frame) in names.iter().zip(&scene.frames) {
        println!("  {}", Blue.paint(name));
        println!("    Origin: {}", format_point(&frame.pose.position));
        println!(
            "    Axes:   X {} Y {:.3} Z {:.3}",
            frame
                .x_axis_length
                .map_or("-".to_string(), |length| format!("{:.3}", length)),
            frame.y_axis_length,
            frame.z_axis_length
        );
        println!("    X link: {}", format_segment(&frame.x_link));
        println!("    Z link: {}", format_segment(&frame.z_link));
    }

    if let Some(tcp) = scene.tcp {
        println!("  {} {}", Green.paint("TCP"), format_point(&tcp));
    }
}

#[derive(Parser)]
#[command(author = "Copyright (C) 2024 Laixer Equipment B.V.")]
#[command(version, propagate_version = true)]
#[command(about = "Denavit-Hartenberg forward kinematics", long_about = None)]
struct Args {
    /// Run as daemon.
    #[arg(long)]
    daemon: bool,
    /// Log with journal priority prefixes.
    #[arg(long)]
    systemd: bool,
    /// Write JSON output.
    #[arg(long, global = true)]
    json: bool,
    /// Level of verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Commands.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Compute joint poses.
    Compute {
        /// Arm configuration (.toml) or joint table (.csv) files.
        files: Vec<PathBuf>,
        /// Number of joints taken from the reference arm.
        #[arg(long)]
        preset: Option<usize>,
    },
    /// Show the reference arm.
    Preset {
        /// Number of joints.
        #[arg(default_value_t = DEFAULT_DOF)]
        count: usize,
        /// Write CSV.
        #[arg(long)]
        csv: bool,
    },
    /// Edit a joint table.
    Table {
        /// Joint table file.
        file: PathBuf,
        #[command(subcommand)]
        command: TableCommand,
    },
    /// Show the scene geometry.
    Scene {
        /// Arm configuration (.toml) or joint table (.csv) file.
        file: Option<PathBuf>,
        /// Number of joints taken from the reference arm.
        #[arg(long)]
        preset: Option<usize>,
    },
}

#[derive(clap::Subcommand)]
enum TableCommand {
    /// Print the table.
    Show,
    /// Insert a zero joint below a row.
    Insert { row: usize },
    /// Remove a row.
    Remove { row: usize },
    /// Replace the table by a single zero joint.
    Clear,
    /// Replace the table by the reference arm.
    Reset,
    /// Set a single cell.
    Set {
        row: usize,
        #[arg(value_enum)]
        column: ColumnArg,
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
}

async fn compute(inputs: Vec<Input>, config: &config::UtilsConfig) -> anyhow::Result<()> {
    let handles: Vec<_> = inputs
        .into_iter()
        .map(|input| {
            tokio::task::spawn_blocking(move || -> anyhow::Result<Report> {
                let (name, table) = input.load()?;
                log::debug!("Loaded {} with {} joints", name, table.len());
                Ok(Report::evaluate(name, &table))
            })
        })
        .collect();

    let mut reports = Vec::with_capacity(handles.len());
    for handle in handles {
        reports.push(handle.await??);
    }

    if config.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    Ok(())
}

fn edit_table(path: &Path, command: TableCommand) -> anyhow::Result<()> {
    let mut table = if path.exists() {
        JointTable::read_csv(std::fs::File::open(path)?)?
    } else {
        log::info!("Creating {}", path.display());
        JointTable::default()
    };

    let mut app = App::new(Capture::default(), TcpReadout::default());

    match command {
        TableCommand::Show => {
            print!("{}", table);
            println!();
            for column in Column::ALL {
                println!("  {:<12} {}", column.header(), Yellow.paint(column.tooltip()));
            }
            return Ok(());
        }
        TableCommand::Insert { row } => table.insert_below(row_index(row)?)?,
        TableCommand::Remove { row } => {
            let joint = table.remove(row_index(row)?)?;
            log::info!("Removed {}", Red.paint(joint.to_string()));
        }
        TableCommand::Clear => app.clear(&mut table),
        TableCommand::Reset => app.reset(&mut table),
        TableCommand::Set { row, column, value } => {
            let column = Column::from(column);
            table.set(row_index(row)?, column, value)?;
            log::info!("Set {} of row {} to {}", column, row, value);
        }
    }

    table.write_csv(std::fs::File::create(path)?)?;

    print!("{}", table);

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let bin_name = env!("CARGO_BIN_NAME");

    let mut config = config::UtilsConfig {
        global: dharm::GlobalConfig::default(),
        json: args.json,
    };

    config.global.bin_name = bin_name.to_string();
    config.global.daemon = args.daemon;

    let log_level = if config.global().daemon {
        log::LevelFilter::Info
    } else {
        match args.verbose {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };

    if args.systemd {
        dharm::logger::SystemdLogger::init(log_level)?;
    } else {
        let mut log_config = simplelog::ConfigBuilder::new();
        if config.global().daemon {
            log_config.set_time_level(log::LevelFilter::Off);
            log_config.set_thread_level(log::LevelFilter::Off);
        } else {
            log_config.set_time_offset_to_local().ok();
            log_config.set_time_format_rfc2822();
        }

        log_config.set_target_level(log::LevelFilter::Off);
        log_config.set_location_level(log::LevelFilter::Off);

        let color_choice = if config.global().daemon {
            simplelog::ColorChoice::Never
        } else {
            simplelog::ColorChoice::Auto
        };

        simplelog::TermLogger::init(
            log_level,
            log_config.build(),
            simplelog::TerminalMode::Mixed,
            color_choice,
        )?;
    }

    log::trace!("{:#?}", config);

    match args.command {
        Command::Compute { files, preset } => {
            let inputs = if files.is_empty() {
                vec![Input::from_args(None, preset)]
            } else {
                files.into_iter().map(Input::File).collect()
            };

            compute(inputs, &config).await?;
        }
        Command::Preset { count, csv } => {
            let table = JointTable::from_preset(count);
            if csv {
                table.write_csv(std::io::stdout())?;
            } else {
                print!("{}", table);
            }
        }
        Command::Table { file, command } => edit_table(&file, command)?,
        Command::Scene { file, preset } => {
            let (name, table) = Input::from_args(file, preset).load()?;
            let report = Report::evaluate(name, &table);

            if config.json {
                println!("{}", serde_json::to_string_pretty(&report.scene)?);
            } else {
                print_scene(&report);
            }
        }
    }

    Ok(())
}
