use ic_canister_log::{declare_log_buffer, export, GlobalBuffer, LogEntry, Sink};

declare_log_buffer!(name = INFO_BUF, capacity = 1000);
declare_log_buffer!(name = DEBUG_BUF, capacity = 1000);

pub const INFO: PrintProxySink = PrintProxySink("INFO", &INFO_BUF);
pub const DEBUG: PrintProxySink = PrintProxySink("DEBUG", &DEBUG_BUF);

/// Appends entries to a log buffer and echoes them to stderr for local runs.
pub struct PrintProxySink(&'static str, &'static GlobalBuffer);

impl Sink for PrintProxySink {
    fn append(&self, entry: LogEntry) {
        eprintln!("{} {}:{} {}", self.0, entry.file, entry.line, entry.message);
        self.1.append(entry)
    }
}

pub fn export_info() -> Vec<LogEntry> {
    export(&INFO_BUF)
}

pub fn export_debug() -> Vec<LogEntry> {
    export(&DEBUG_BUF)
}
