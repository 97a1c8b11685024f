use indicatif::{ProgressBar, ProgressStyle};
use once_cell::sync::Lazy;
use std::io::LineWriter;
use std::sync::{Mutex, MutexGuard, PoisonError};

pub static PROGRESS_BAR: Lazy<Mutex<Option<ProgressBar>>> = Lazy::new(|| Mutex::new(None));

fn progress_bar() -> MutexGuard<'static, Option<ProgressBar>> {
    PROGRESS_BAR.lock().unwrap_or_else(PoisonError::into_inner)
}

pub fn increment_progress(amount: u64) {
    let pb = progress_bar();
    if let Some(pb) = pb.as_ref() {
        pb.inc(amount);
    }
}

pub fn create_progress_bar(total_edges: u64) {
    finish_progress_bar();
    let pb = ProgressBar::new(total_edges);
    pb.enable_steady_tick(100);
    pb.set_style(ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} edges {msg} ({eta_precise} remaining)")
        .progress_chars("=>-"));
    *progress_bar() = Some(pb);
}

pub fn finish_progress_bar() {
    let mut pb = progress_bar();
    if let Some(pb) = pb.as_ref() {
        pb.finish();
    }
    *pb = None;
}

/// Routes log lines above the progress bar while one is shown, to stderr otherwise.
pub struct PBWriter {}

impl PBWriter {
    pub fn new() -> Self {
        PBWriter {}
    }
}

impl Default for PBWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::io::Write for PBWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let pb = progress_bar();
        if let Some(pb) = pb.as_ref() {
            pb.println(String::from_utf8_lossy(buf).trim_end_matches('\n'));
            Ok(buf.len())
        } else {
            std::io::stderr().write(buf)
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stderr().flush()
    }
}

pub fn setup_logging(log_filter: Option<String>) {
    tracing_subscriber::fmt::fmt()
        .with_writer(move || -> Box<dyn std::io::Write> {
            Box::new(LineWriter::new(PBWriter::new()))
        })
        .with_env_filter(log_filter.unwrap_or_else(|| std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())))
        .init();
}
