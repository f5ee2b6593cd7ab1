use std::sync::Once;

use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

static LOGGER_INIT: Once = Once::new();

/// Initializes the `log4rs` logger from `log4rs.yaml`, falling back to a
/// basic console appender when the file is missing or malformed. Safe to
/// call more than once within a process.
pub fn init() {
    LOGGER_INIT.call_once(|| {
        if let Err(e) = log4rs::init_file("log4rs.yaml", Default::default()) {
            eprintln!(
                "Failed to initialize logger from log4rs.yaml: {e}. Falling back to stdout logging."
            );
            init_fallback();
            return;
        }
        log::info!("railib logging initialized from log4rs.yaml.");
    });
}

fn init_fallback() {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{h({d(%Y-%m-%d %H:%M:%S)(utc)} - {l}: {m}{n})}",
        )))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(
            Root::builder()
                .appender("stdout")
                .build(log::LevelFilter::Debug),
        );

    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                eprintln!(
                    "Failed to initialize fallback logger: {e}. No logging will be available."
                );
            } else {
                log::warn!(
                    "railib logging initialized using stdout fallback."
                );
            }
        }
        Err(e) => {
            eprintln!(
                "Failed to build fallback logging configuration: {e}. No logging will be available."
            );
        }
    }
}
