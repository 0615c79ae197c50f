//! # Job Scripts
//!
//! A job is a JSON list of printer operations, one object per session
//! method, run in order against a [`ThermalPrinter`](crate::printer::ThermalPrinter).
//!
//! ## Example
//!
//! ```
//! use thermal_serial::job::Job;
//! use thermal_serial::printer::{RecordingDelay, ThermalPrinter};
//! use thermal_serial::transport::MemoryTransport;
//!
//! let json = r#"{
//!     "commands": [
//!         {"op": "wake"},
//!         {"op": "set_alignment", "mode": "middle"},
//!         {"op": "set_bold", "on": true},
//!         {"op": "text", "content": "HELLO"},
//!         {"op": "line_feed"},
//!         {"op": "set_underline", "weight": 5}
//!     ]
//! }"#;
//!
//! let job = Job::from_json(json)?;
//! let mut printer = ThermalPrinter::with_delay(MemoryTransport::new(), RecordingDelay::new());
//! let report = job.run(&mut printer)?;
//!
//! assert_eq!(report.sent, 5);
//! assert_eq!(report.rejected, vec![5]);
//! # Ok::<(), thermal_serial::PrinterError>(())
//! ```
//!
//! Parameters wider than a byte fail to parse. Parameters that fit in a
//! byte but are outside a command's range are rejected at run time and
//! listed in the [`JobReport`]; they never stop the job.

mod run;
mod schema;

pub use run::JobReport;
pub use schema::{Job, JobCommand};
