//! Serial Register Bridge Simulator CLI.
//!
//! Runs scripted register transactions through the simulated bridge and
//! prints the results.
//!
//! # Usage
//!
//! With no script, a built-in demo writes a word, reads it back, and
//! reads a never-written register. With `--script`, a JSON transaction
//! list is replayed instead.

use clap::Parser;
use std::process;

extern crate regbridge;

use regbridge::config::Config;
use regbridge::sim::{load_script, Controller, ScriptOp};
use regbridge::system::Bridge;

/// Command-line arguments for the bridge simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "Serial Register Bridge Simulator")]
struct Args {
    #[arg(short, long, default_value = "configs/default.toml")]
    config: String,

    /// JSON transaction script to replay.
    #[arg(short, long)]
    script: Option<String>,
}

/// Main entry point.
///
/// 1. Parses command-line arguments and loads the TOML configuration.
/// 2. Constructs the bridge and the link controller.
/// 3. Replays the script (or the built-in demo) over the link.
/// 4. Prints the statistics report.
fn main() {
    let args = Args::parse();
    let config_content =
        std::fs::read_to_string(&args.config).expect("Failed to read config");
    let config: Config = toml::from_str(&config_content).expect("Failed to parse config");

    let mut bridge = Bridge::new(&config);
    let controller = Controller::new(&config);

    let ops = match args.script {
        Some(path) => match load_script(&path) {
            Ok(ops) => ops,
            Err(e) => {
                eprintln!("Error: failed to load script: {}", e);
                process::exit(1);
            }
        },
        None => vec![
            ScriptOp::Write {
                addr: 0x12,
                value: 0xDEAD_BEEF,
            },
            ScriptOp::Read { addr: 0x12 },
            ScriptOp::Read { addr: 0x45 },
        ],
    };

    println!("[*] Replaying {} transactions", ops.len());
    for op in ops {
        match op {
            ScriptOp::Write { addr, value } => {
                controller.write_word(&mut bridge, addr, value);
                println!("[Link] write {:#04x} <= {:#010x}", addr, value);
            }
            ScriptOp::Read { addr } => {
                let word = controller.read_word(&mut bridge, addr);
                println!("[Link] read  {:#04x} => {:#010x}", addr, word);
            }
        }
    }

    bridge.print_stats();
}
