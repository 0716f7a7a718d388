use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config,
};

use crate::filter::Kernel;

const CONFIG_FILE: &str = "log4rs.yaml";
const FALLBACK_APPENDER: &str = "stderr";
const FALLBACK_PATTERN: &str = "{l} {t} - {m}{n}";

#[ctor::ctor]
fn init() {
    if log4rs::init_file(CONFIG_FILE, Default::default()).is_ok() {
        return;
    }
    if let Err(e) = init_fallback() {
        eprintln!("Logging could not be initialized: {}", e);
    }
}

fn init_fallback() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build(FALLBACK_APPENDER, Box::new(stderr)))
        .build(
            Root::builder()
                .appender(FALLBACK_APPENDER)
                .build(LevelFilter::Warn),
        )?;
    log4rs::init_config(config)?;
    Ok(())
}

pub fn log_kernel(kernel: &Kernel) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    let rows: Vec<String> = kernel
        .rows()
        .map(|row| {
            row.iter()
                .map(|weight| format!("{:.6}", weight))
                .collect::<Vec<String>>()
                .join(" ")
        })
        .collect();
    log::debug!(
        "Gaussian kernel {0}x{0}:\n{1}",
        kernel.side_length(),
        rows.join("\n")
    );
}
