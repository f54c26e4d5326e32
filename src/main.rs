//! memSim - demand-paging simulator
//!
//! Usage: memsim <reference-sequence-file> <frame-count> <FIFO|LRU|OPT>
//!
//! Translates each logical address in the reference file through a 5-entry
//! TLB, a 256-entry page table, and a backing store, printing one line per
//! address followed by the fault/hit summary.

use std::env;
use std::process;

use memsim_error::errconfig;
use sim::{read_reference_trace, Algorithm, BackingStore, Translator};

/// The on-disk image of the logical address space, expected in the working
/// directory.
const BACKING_STORE_FILE: &str = "BACKING_STORE.bin";

struct Config {
    trace_file: String,
    frame_count: usize,
    algorithm: Algorithm,
}

fn main() {
    env_logger::init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn print_usage(program: &str) {
    eprintln!(
        "Usage: {} <reference-sequence-file> <frame-count> <FIFO|LRU|OPT>",
        program
    );
}

fn parse_args() -> sim::Result<Config> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 4 {
        print_usage(args.first().map(String::as_str).unwrap_or("memsim"));
        return errconfig!("expected 3 arguments, got {}", args.len().saturating_sub(1));
    }

    let frame_count: usize = match args[2].parse() {
        Ok(n) => n,
        Err(_) => return errconfig!("frame count must be a positive integer: {:?}", args[2]),
    };
    if frame_count == 0 {
        return errconfig!("frame count must be at least 1");
    }

    Ok(Config {
        trace_file: args[1].clone(),
        frame_count,
        algorithm: args[3].parse()?,
    })
}

fn run(config: &Config) -> sim::Result<()> {
    let trace = read_reference_trace(&config.trace_file)?;
    let backing_store = BackingStore::open(BACKING_STORE_FILE)?;
    let replacer = config.algorithm.build(config.frame_count, &trace);
    let mut translator = Translator::new(config.frame_count, replacer, backing_store);

    for &address in &trace {
        let translation = translator.translate(address)?;
        println!("{}", translation);
    }

    println!("{}", translator.stats());
    Ok(())
}
