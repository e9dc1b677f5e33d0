// mkmbr - create an MBR partition table from the command line
//
// Usage: mkmbr <dev> <p1_start> <p1_sectors> [<p2_start> <p2_sectors> [...]]

mod device;

use std::env;
use std::path::Path;
use std::process;

use device::FileDevice;
use mkmbr::{resolve_token_pairs, write_mbr, MbrError};

const USAGE: &str = "\
Usage:

    mkmbr dev p1_start p1_sectors [p2_start p2_sectors [...]]

Where:
    dev        - block device path
    pX_start   - first sector number or \"auto\" to use next free sector
    pX_sectors - partition's sectors count or \"auto\" to use all free space
";

// Exit codes, one per failure class
const EXIT_BAD_ARGS: i32 = 1;
const EXIT_OPEN_FAILURE: i32 = 2;
const EXIT_STAT_FAILURE: i32 = 3;
const EXIT_BAD_NUMBER: i32 = 4;
const EXIT_GEOMETRY: i32 = 5;
const EXIT_WRITE_FAILURE: i32 = 6;

/// Program name + device path + 1..4 (start, sectors) pairs
fn valid_arg_count(argc: usize) -> bool {
    argc >= 4 && argc <= 10 && argc % 2 == 0
}

fn report(err: MbrError) -> i32 {
    eprintln!("mkmbr: {}", err);
    match err {
        MbrError::BadNumber => EXIT_BAD_NUMBER,
        MbrError::IoError => EXIT_WRITE_FAILURE,
        // Overlap, OutOfRange, EmptyPartition, NoSpaceLeft,
        // TooManyPartitions, InvalidSignature
        _ => EXIT_GEOMETRY,
    }
}

fn run(args: &[String]) -> i32 {
    let device_path = Path::new(&args[1]);

    // Device open strictly precedes the size query, which strictly
    // precedes every allocator decision that consumes "auto". The handle
    // drops at the end of this function on success and failure alike.
    let file = match FileDevice::open(device_path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("mkmbr: {}: {}", args[1], err);
            return EXIT_OPEN_FAILURE;
        }
    };

    let mut device = match FileDevice::with_size(file) {
        Ok(device) => device,
        Err(err) => {
            eprintln!("mkmbr: {}: {}", args[1], err);
            return EXIT_STAT_FAILURE;
        }
    };

    // Pairs parse and resolve in order; the first failing pair decides the
    // exit code, later pairs are never examined.
    let pairs: Vec<(&str, &str)> = args[2..]
        .chunks(2)
        .map(|pair| (pair[0].as_str(), pair[1].as_str()))
        .collect();

    let capacity = device.num_blocks();
    let table = match resolve_token_pairs(&pairs, capacity) {
        Ok(table) => table,
        Err(err) => return report(err),
    };

    match write_mbr(&mut device, &table) {
        Ok(()) => 0,
        Err(err) => report(err),
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if !valid_arg_count(args.len()) {
        eprint!("{}", USAGE);
        process::exit(EXIT_BAD_ARGS);
    }

    process::exit(run(&args));
}
