//! Executing job scripts against a printer session.

use std::fs;
use std::path::Path;

use log::debug;

use super::schema::{Job, JobCommand};
use crate::error::PrinterError;
use crate::printer::{Delay, Outcome, ThermalPrinter};
use crate::transport::ByteTransport;

/// What happened when a job ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobReport {
    /// Commands whose bytes were written
    pub sent: usize,
    /// Indices of commands dropped by parameter validation
    pub rejected: Vec<usize>,
}

impl Job {
    /// Parse a job from JSON text.
    pub fn from_json(json: &str) -> Result<Self, PrinterError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a job file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PrinterError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            PrinterError::Job(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    /// Run every command in order. Rejected commands are recorded in the
    /// report; a transport error stops the job.
    pub fn run<T, D>(&self, printer: &mut ThermalPrinter<T, D>) -> Result<JobReport, PrinterError>
    where
        T: ByteTransport,
        D: Delay,
    {
        let mut report = JobReport::default();
        for (index, command) in self.commands.iter().enumerate() {
            match command.apply(printer)? {
                Outcome::Sent => report.sent += 1,
                Outcome::Rejected => {
                    debug!("job step {} rejected: {:?}", index, command);
                    report.rejected.push(index);
                }
            }
        }
        Ok(report)
    }
}

impl JobCommand {
    /// Issue this command on a session.
    pub fn apply<T, D>(&self, printer: &mut ThermalPrinter<T, D>) -> Result<Outcome, PrinterError>
    where
        T: ByteTransport,
        D: Delay,
    {
        match self {
            JobCommand::SetHeatingProfile {
                max_dots,
                heat_time,
                interval,
            } => printer.set_heating_profile(*max_dots, *heat_time, *interval),
            JobCommand::FinePrintProfile => printer.fine_print_profile(),
            JobCommand::SetDensity { value } => printer.set_density(*value),
            JobCommand::SleepAfter { seconds } => printer.sleep_after(*seconds),
            JobCommand::Wake => printer.wake(),
            JobCommand::DefaultLineSpacing => printer.default_line_spacing(),
            JobCommand::SetLineSpacing { dots } => printer.set_line_spacing(*dots),
            JobCommand::SetAlignment { mode } => printer.set_alignment(*mode),
            JobCommand::SetLeftMargin { chars } => printer.set_left_margin(*chars),
            JobCommand::SetStyleFlags { flags } => printer.set_style_flags(*flags),
            JobCommand::SetEnlargeMode { value } => printer.set_enlarge_mode(*value),
            JobCommand::SetDoubleWidth { on } => printer.set_double_width(*on),
            JobCommand::SetBold { on } => printer.set_bold(*on),
            JobCommand::SetUnderline { weight } => printer.set_underline(*weight),
            JobCommand::SetUpdown { on } => printer.set_updown(*on),
            JobCommand::SetReverse { on } => printer.set_reverse(*on),
            JobCommand::SetCharacterSet { set } => printer.set_character_set(*set),
            JobCommand::SetCodeTable { table } => printer.set_code_table(*table),
            JobCommand::Tab => printer.tab(),
            JobCommand::SetOnline { on } => printer.set_online(*on),
            JobCommand::LineFeed => printer.line_feed(),
            JobCommand::LineFeeds { lines } => printer.line_feeds(*lines),
            JobCommand::DotFeed { dots } => printer.dot_feed(*dots),
            JobCommand::Reset => printer.reset(),
            JobCommand::RequestStatus => printer.request_status(),
            JobCommand::SetAutoStatusBack { mode } => printer.set_auto_status_back(*mode),
            JobCommand::PrintTestPage => printer.print_test_page(),
            JobCommand::Text { content } => printer.write_str(content),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::RecordingDelay;
    use crate::protocol::text::AlignMode;
    use crate::transport::MemoryTransport;

    #[test]
    fn test_parse_tagged_commands() {
        let job = Job::from_json(
            r#"{"commands": [
                {"op": "wake"},
                {"op": "set_alignment", "mode": "middle"},
                {"op": "text", "content": "hi"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(
            job.commands,
            vec![
                JobCommand::Wake,
                JobCommand::SetAlignment {
                    mode: AlignMode::Middle
                },
                JobCommand::Text {
                    content: "hi".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_unknown_op_is_job_error() {
        let result = Job::from_json(r#"{"commands": [{"op": "cut"}]}"#);
        assert!(matches!(result, Err(PrinterError::Job(_))));
    }

    #[test]
    fn test_parameter_wider_than_a_byte_is_job_error() {
        let result = Job::from_json(r#"{"commands": [{"op": "line_feeds", "lines": 300}]}"#);
        assert!(matches!(result, Err(PrinterError::Job(_))));
    }

    #[test]
    fn test_missing_file_is_job_error() {
        let result = Job::from_file("/nonexistent/thermal-serial-job.json");
        assert!(matches!(result, Err(PrinterError::Job(_))));
    }

    #[test]
    fn test_run_reports_rejected_steps() {
        let job = Job {
            commands: vec![
                JobCommand::Reset,
                JobCommand::SetUnderline { weight: 9 },
                JobCommand::LineFeed,
                JobCommand::SleepAfter { seconds: 0 },
            ],
        };
        let mut printer =
            ThermalPrinter::with_delay(MemoryTransport::new(), RecordingDelay::new());

        let report = job.run(&mut printer).unwrap();

        assert_eq!(report.sent, 2);
        assert_eq!(report.rejected, vec![1, 3]);
        assert_eq!(printer.transport().bytes(), &[0x1B, 0x40, 0x0A]);
    }

    #[test]
    fn test_wake_step_waits() {
        let job = Job {
            commands: vec![JobCommand::Wake],
        };
        let mut printer =
            ThermalPrinter::with_delay(MemoryTransport::new(), RecordingDelay::new());
        job.run(&mut printer).unwrap();
        assert_eq!(printer.delay().calls().len(), 1);
    }
}
