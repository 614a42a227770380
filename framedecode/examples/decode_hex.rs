//! Decodes a captured frame given as a hex string and prints its layers.
//!
//! ```text
//! cargo run --example decode_hex -- --level warn ffffffffffff0200000000010806...
//! ```
//!
//! Reads the hex string from stdin when it is not given as an argument.
use std::io::{self, Read};
use std::process;

use structopt::StructOpt;

use framedecode::{format, Config, Decoder, Layer, Level};

#[derive(Clone, StructOpt)]
struct Options {
    /// Minimum level of diagnostics that are logged.
    #[structopt(short = "l", long = "level", default_value = "warn")]
    level: Level,
    /// Do not print the payload bytes of the innermost layer.
    #[structopt(short = "q", long = "quiet")]
    quiet: bool,
    /// The frame, starting at its Ethernet header.
    hex: Option<String>,
}

fn main() {
    let options = Options::from_args();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace"))
        .init();

    let input = options.hex.clone().unwrap_or_else(read_stdin);
    let bytes = format::from_hex(&input).unwrap_or_else(|err| {
        eprintln!("Invalid hex input: {}", err);
        process::exit(1);
    });

    let decoder = Decoder::new(Config::default().threshold(options.level));
    let frame = decoder.decode(&bytes).unwrap_or_else(|err| {
        eprintln!("Can not decode {} bytes: {}", bytes.len(), err);
        process::exit(1);
    });

    println!("{}", frame.stack().join(" > "));
    for layer in frame.layers() {
        println!("  {}", layer);
        print_details(layer, options.quiet);
    }

    for diagnostic in frame.diagnostics() {
        println!("{:>5}: {}", diagnostic.level(), diagnostic);
    }
}

fn print_details(layer: &Layer, quiet: bool) {
    match layer {
        Layer::Ipv4(ip) if !ip.options().is_empty() => {
            println!("    options {}", format::to_hex(ip.options().as_bytes()));
        },
        Layer::Tcp(tcp) => {
            if !tcp.options().is_empty() {
                println!("    options {}", format::to_hex(tcp.options().as_bytes()));
            }
            if !quiet {
                println!("    payload {}", format::to_hex(tcp.payload().as_bytes()));
            }
        },
        Layer::Udp(udp) if !quiet => {
            println!("    payload {}", format::to_hex(udp.payload().as_bytes()));
        },
        Layer::Arp(arp) if !arp.padding().is_empty() => {
            println!("    padding {} bytes", arp.padding().len());
        },
        Layer::Raw(raw) if !quiet => {
            println!("    {}", format::to_hex(raw.as_bytes()));
        },
        _ => {},
    }
}

fn read_stdin() -> String {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input).unwrap_or_else(|err| {
        eprintln!("Can not read stdin: {}", err);
        process::exit(1);
    });
    input
}
