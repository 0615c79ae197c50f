//! # thermal-serial CLI
//!
//! Command-line interface for serial thermal receipt printers.
//!
//! ## Usage
//!
//! ```bash
//! # Print the printer's self-test page
//! thermal-serial test-page
//!
//! # Print a centered bold line on another port
//! thermal-serial --device /dev/serial0 print --align middle --bold "HELLO"
//!
//! # Feed 10mm of paper
//! thermal-serial feed --mm 10
//!
//! # Show the bytes a job would send without opening the device
//! thermal-serial --dry-run run job.json
//!
//! # Ask the printer for its raw status report
//! thermal-serial status
//! ```
//!
//! Set `RUST_LOG=debug` to see rejected commands, `RUST_LOG=trace` for
//! every byte sent.

use std::io::{ErrorKind, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use thermal_serial::{
    PrinterError,
    job::Job,
    printer::{Delay, Outcome, PrinterConfig, ThermalPrinter},
    protocol::text::AlignMode,
    transport::{ByteTransport, MemoryTransport, hex_dump, serial::DEFAULT_DEVICE},
};

/// Largest status reply we wait for
const STATUS_REPLY_MAX: usize = 64;

/// thermal-serial - Serial thermal printer utility
#[derive(Parser, Debug)]
#[command(name = "thermal-serial")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Serial device wired to the printer
    #[arg(long, global = true, default_value = DEFAULT_DEVICE)]
    device: String,

    /// Line speed in baud
    #[arg(long, global = true, default_value_t = PrinterConfig::CSN_A2.baud_rate)]
    baud: u32,

    /// Print the bytes as hex instead of sending them
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the built-in self-test page
    TestPage,

    /// Print one line of text
    Print {
        /// Text to print
        text: String,

        /// Line alignment
        #[arg(long, value_enum)]
        align: Option<AlignArg>,

        /// Bold text
        #[arg(long)]
        bold: bool,

        /// Underline weight (0 none, 1 thin, 2 thick)
        #[arg(long)]
        underline: Option<u8>,

        /// Double-width characters
        #[arg(long)]
        double_width: bool,

        /// Extra lines to feed after the text
        #[arg(long, default_value = "0")]
        feed: u8,
    },

    /// Feed paper
    Feed {
        /// Number of lines
        #[arg(long, conflicts_with = "mm")]
        lines: Option<u8>,

        /// Distance in millimeters
        #[arg(long)]
        mm: Option<f32>,
    },

    /// Request the status report and print the raw reply
    Status,

    /// Sleep this many seconds after printing (1-255)
    Sleep { seconds: u8 },

    /// Wake a sleeping printer
    Wake,

    /// Restore factory defaults
    Reset,

    /// Run a JSON job script
    Run {
        /// Job file
        file: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AlignArg {
    Left,
    Middle,
    Right,
}

impl From<AlignArg> for AlignMode {
    fn from(arg: AlignArg) -> Self {
        match arg {
            AlignArg::Left => AlignMode::Left,
            AlignArg::Middle => AlignMode::Middle,
            AlignArg::Right => AlignMode::Right,
        }
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PrinterError> {
    let cli = Cli::parse();

    if cli.dry_run {
        let mut printer = ThermalPrinter::new(MemoryTransport::new());
        execute(&mut printer, &cli.command)?;
        println!("{}", hex_dump(printer.transport().bytes()));
        return Ok(());
    }

    let mut printer = ThermalPrinter::open(&cli.device, cli.baud)?;
    execute(&mut printer, &cli.command)?;

    if let Commands::Status = cli.command {
        let reply = read_reply(printer.transport_mut())?;
        if reply.is_empty() {
            eprintln!("No reply from printer");
        } else {
            println!("{}", String::from_utf8_lossy(&reply));
        }
    }

    Ok(())
}

fn execute<T, D>(printer: &mut ThermalPrinter<T, D>, command: &Commands) -> Result<(), PrinterError>
where
    T: ByteTransport,
    D: Delay,
{
    match command {
        Commands::TestPage => {
            printer.wake()?;
            printer.print_test_page()?;
        }
        Commands::Print {
            text,
            align,
            bold,
            underline,
            double_width,
            feed,
        } => {
            printer.wake()?;
            if let Some(align) = align {
                printer.set_alignment((*align).into())?;
            }
            if *bold {
                printer.set_bold(true)?;
            }
            let underlined = match underline {
                Some(weight) => warn_rejected("underline", printer.set_underline(*weight)?),
                None => false,
            };
            if *double_width {
                printer.set_double_width(true)?;
            }

            printer.write_str(text)?;
            printer.line_feed()?;
            if *feed > 0 {
                printer.line_feeds(*feed)?;
            }

            // Put back anything we changed
            if *double_width {
                printer.set_double_width(false)?;
            }
            if underlined {
                printer.set_underline(0)?;
            }
            if *bold {
                printer.set_bold(false)?;
            }
            if align.is_some() {
                printer.set_alignment(AlignMode::Left)?;
            }
        }
        Commands::Feed { lines, mm } => match (lines, mm) {
            (Some(lines), _) => {
                printer.line_feeds(*lines)?;
            }
            (None, Some(mm)) => {
                let dots = PrinterConfig::CSN_A2.mm_to_feed_dots(*mm);
                printer.dot_feed(dots)?;
            }
            (None, None) => {
                printer.line_feed()?;
            }
        },
        Commands::Status => {
            printer.request_status()?;
        }
        Commands::Sleep { seconds } => {
            warn_rejected("sleep", printer.sleep_after(*seconds)?);
        }
        Commands::Wake => {
            printer.wake()?;
        }
        Commands::Reset => {
            printer.reset()?;
        }
        Commands::Run { file } => {
            let job = Job::from_file(file)?;
            let report = job.run(printer)?;
            println!("Sent {} command(s)", report.sent);
            for index in &report.rejected {
                eprintln!(
                    "Skipped command {} ({:?}): parameter out of range",
                    index, job.commands[*index]
                );
            }
        }
    }

    Ok(())
}

/// Report a dropped command; returns whether it was sent.
fn warn_rejected(what: &str, outcome: Outcome) -> bool {
    if !outcome.is_sent() {
        eprintln!("Skipped {}: parameter out of range", what);
    }
    outcome.is_sent()
}

/// Read whatever the printer sends back until the line goes quiet.
fn read_reply<R: Read>(reader: &mut R) -> Result<Vec<u8>, PrinterError> {
    let mut reply = Vec::new();
    let mut buf = [0u8; STATUS_REPLY_MAX];

    while reply.len() < STATUS_REPLY_MAX {
        let n = match reader.read(&mut buf[..STATUS_REPLY_MAX - reply.len()]) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::TimedOut => break,
            Err(e) => return Err(e.into()),
        };
        reply.extend_from_slice(&buf[..n]);
    }

    Ok(reply)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use thermal_serial::printer::RecordingDelay;

    fn dry_run(command: Commands) -> Vec<u8> {
        let mut printer = ThermalPrinter::with_delay(MemoryTransport::new(), RecordingDelay::new());
        execute(&mut printer, &command).unwrap();
        printer.close().into_bytes()
    }

    fn print(text: &str, underline: Option<u8>) -> Commands {
        Commands::Print {
            text: text.to_string(),
            align: None,
            bold: false,
            underline,
            double_width: false,
            feed: 0,
        }
    }

    #[test]
    fn test_print_restores_underline() {
        assert_eq!(
            dry_run(print("HI", Some(1))),
            vec![0xFF, 0x1B, 0x2D, 0x01, b'H', b'I', 0x0A, 0x1B, 0x2D, 0x00]
        );
    }

    #[test]
    fn test_print_skips_restore_of_rejected_underline() {
        assert_eq!(dry_run(print("HI", Some(7))), vec![0xFF, b'H', b'I', 0x0A]);
    }

    #[test]
    fn test_print_restores_styles_in_reverse() {
        let bytes = dry_run(Commands::Print {
            text: "A".to_string(),
            align: Some(AlignArg::Right),
            bold: true,
            underline: None,
            double_width: true,
            feed: 2,
        });
        assert_eq!(
            bytes,
            vec![
                0xFF, 0x1B, 0x61, 0x02, 0x1B, 0x45, 0x01, 0x1B, 0x0E, b'A', 0x0A, 0x1B, 0x64,
                0x02, 0x1B, 0x14, 0x1B, 0x45, 0x00, 0x1B, 0x61, 0x00,
            ]
        );
    }

    #[test]
    fn test_feed_mm_uses_dot_feed() {
        let bytes = dry_run(Commands::Feed {
            lines: None,
            mm: Some(5.0),
        });
        assert_eq!(bytes, vec![0x1B, 0x4A, 40]);
    }

    /// Yields its bytes, then reports a read timeout.
    struct QuietAfter(Vec<u8>);

    impl Read for QuietAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.0.is_empty() {
                return Err(io::Error::new(ErrorKind::TimedOut, "timed out"));
            }
            let n = buf.len().min(self.0.len());
            buf[..n].copy_from_slice(&self.0[..n]);
            self.0.drain(..n);
            Ok(n)
        }
    }

    #[test]
    fn test_read_reply_stops_on_timeout() {
        let reply = read_reply(&mut QuietAfter(b"P1V68".to_vec())).unwrap();
        assert_eq!(reply, b"P1V68");
    }

    #[test]
    fn test_read_reply_empty_on_silence() {
        assert!(read_reply(&mut QuietAfter(Vec::new())).unwrap().is_empty());
    }
}
