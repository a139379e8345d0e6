//! Clock display commands.

use std::path::PathBuf;
use std::sync::mpsc;

use clap::{Subcommand, ValueEnum};
use etime_core::clock::face::hand_angles;
use etime_core::{ClockFace, ClockTime, DigitalReadout, Shell, SvgCanvas, TimeSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Digital,
    Analog,
}

#[derive(Subcommand)]
pub enum ClockAction {
    /// Print the current time once
    Show {
        /// Display mode
        #[arg(long, value_enum, default_value_t = Mode::Digital)]
        mode: Mode,
        /// For analog mode, write the rendered SVG here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the time every second until interrupted
    Watch {
        /// Display mode
        #[arg(long, value_enum, default_value_t = Mode::Digital)]
        mode: Mode,
        /// Stop after this many ticks
        #[arg(long)]
        ticks: Option<u64>,
    },
}

pub fn run(action: ClockAction) -> Result<(), Box<dyn std::error::Error>> {
    let shell = Shell::open()?;
    let use_24_hour = shell.settings().use_24_hour();

    match action {
        ClockAction::Show { mode, out } => match mode {
            Mode::Digital => {
                let readout = DigitalReadout::format(&ClockTime::now(), use_24_hour);
                println!("{}", readout.time_line());
                println!("{}", readout.date_line);
            }
            Mode::Analog => {
                let time = ClockTime::now();
                let face = ClockFace::default();
                let mut canvas = SvgCanvas::new(face.size());
                face.render(&time, &mut canvas);
                let svg = canvas.finish();
                match out {
                    Some(path) => {
                        std::fs::write(&path, svg)?;
                        println!("Wrote {}", path.display());
                    }
                    None => print!("{svg}"),
                }
            }
        },
        ClockAction::Watch { mode, ticks } => {
            let (tx, rx) = mpsc::channel();
            let subscription = TimeSource::new().subscribe(move |time| {
                let _ = tx.send(time);
            });

            let mut seen = 0u64;
            for time in rx {
                match mode {
                    Mode::Digital => {
                        println!("{}", DigitalReadout::format(&time, use_24_hour).time_line());
                    }
                    Mode::Analog => {
                        let angles = hand_angles(&time);
                        println!(
                            "hour {:6.1}  minute {:6.1}  second {:6.1}",
                            angles.hour_deg, angles.minute_deg, angles.second_deg
                        );
                    }
                }
                seen += 1;
                if ticks.is_some_and(|limit| seen >= limit) {
                    break;
                }
            }
            subscription.cancel();
        }
    }
    Ok(())
}
