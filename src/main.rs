//! # em5820 CLI
//!
//! Command-line interface for the EM5820 receipt printer.
//!
//! ## Usage
//!
//! ```bash
//! # Print a receipt stamped with today's date
//! em5820 print "took the long way home today"
//!
//! # Backdate a receipt
//! em5820 print --date 2025-06-07 "finally fixed the bike"
//!
//! # Print a QR code rendered by the printer firmware
//! em5820 qr "https://example.com"
//!
//! # Diagnostic: print the first ten code tables
//! em5820 test-page
//! ```

use clap::{Parser, Subcommand};

use em5820::{
    Em5820Error,
    printer::{Printer, PrinterConfig},
    receipt::Receipt,
    timestamp,
    transport::{SerialTransport, serial},
};

/// em5820 - EM5820 thermal receipt printer utility
#[derive(Parser, Debug)]
#[command(name = "em5820")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Printer device path
    #[arg(long, global = true, default_value = serial::DEFAULT_DEVICE)]
    device: String,

    /// Serial baud rate
    #[arg(long, global = true, default_value_t = serial::DEFAULT_BAUD)]
    baud: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a receipt: wrapped upside-down body plus timestamp banner
    Print {
        /// The receipt message
        message: String,

        /// Custom date for the banner (YYYY-MM-DD or DD/MM/YYYY);
        /// defaults to today. Invalid dates fall back to today.
        #[arg(long)]
        date: Option<String>,

        /// Heat level override (0-9; firmware accepts up to 15)
        #[arg(long)]
        heat: Option<u8>,

        /// Speed override (0-9)
        #[arg(long)]
        speed: Option<u8>,
    },

    /// Print a QR code (rendered by the printer firmware)
    Qr {
        /// Data to encode
        data: String,
    },

    /// Print a diagnostic page for each of the first ten code tables
    TestPage,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Em5820Error> {
    let cli = Cli::parse();

    let transport = SerialTransport::open(&cli.device, cli.baud)?;
    let mut printer = Printer::new(transport);

    match cli.command {
        Commands::Print {
            message,
            date,
            heat,
            speed,
        } => {
            let mut config = PrinterConfig::EM5820;
            if let Some(heat) = heat {
                config.heat = heat;
            }
            if let Some(speed) = speed {
                config.speed = speed;
            }

            printer.initialize(&config)?;

            let stamp = match date.as_deref() {
                Some(date) => timestamp::custom_or_current(date),
                None => timestamp::current(),
            };

            println!("Printing receipt ({})...", stamp);
            Receipt::new(message, stamp).print(&mut printer)?;
            println!("Printed successfully!");
        }

        Commands::Qr { data } => {
            printer.initialize(&PrinterConfig::EM5820)?;

            println!("Printing QR code ({} bytes)...", data.len());
            printer.print_qr_code(data.as_bytes())?;
            printer.feed(5)?;
            println!("Printed successfully!");
        }

        Commands::TestPage => {
            println!("Printing code page test (takes ~20s)...");
            printer.print_code_pages()?;
            printer.feed(5)?;
            println!("Printed successfully!");
        }
    }

    Ok(())
}
