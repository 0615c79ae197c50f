//! JSON schema types for job scripts.

use serde::{Deserialize, Serialize};

use crate::protocol::text::AlignMode;

/// Top-level job document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Commands to run, in order.
    pub commands: Vec<JobCommand>,
}

/// One printer operation. The `op` tag names the session method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum JobCommand {
    // ========== Configuration ==========
    SetHeatingProfile {
        max_dots: u8,
        heat_time: u8,
        interval: u8,
    },
    FinePrintProfile,
    SetDensity {
        value: u8,
    },
    SleepAfter {
        seconds: u8,
    },
    Wake,

    // ========== Layout ==========
    DefaultLineSpacing,
    SetLineSpacing {
        dots: u8,
    },
    SetAlignment {
        mode: AlignMode,
    },
    SetLeftMargin {
        chars: u8,
    },

    // ========== Character Style ==========
    SetStyleFlags {
        flags: u8,
    },
    SetEnlargeMode {
        value: u8,
    },
    SetDoubleWidth {
        on: bool,
    },
    SetBold {
        on: bool,
    },
    SetUnderline {
        weight: u8,
    },
    SetUpdown {
        on: bool,
    },
    SetReverse {
        on: bool,
    },
    SetCharacterSet {
        set: u8,
    },
    SetCodeTable {
        table: u8,
    },

    // ========== Print / Control ==========
    Tab,
    SetOnline {
        on: bool,
    },
    LineFeed,
    LineFeeds {
        lines: u8,
    },
    DotFeed {
        dots: u8,
    },
    Reset,
    RequestStatus,
    SetAutoStatusBack {
        mode: u8,
    },
    PrintTestPage,
    /// UTF-8 text passed through as raw bytes
    Text {
        content: String,
    },
}
