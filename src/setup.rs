//! Logger initialization
//!
//! Same line layout as the gallery indexer: a header line with timestamp,
//! level and target, then the message prefixed by a right-aligned
//! `duration` column when the record carries one.

use anstyle::{AnsiColor, Style};
use env_logger::{Builder, Target, WriteStyle};
use log::{LevelFilter, kv::Key};
use std::{fmt::Display, io::Write};

const DURATION_WIDTH: usize = 10;

fn paint(style: Style, text: impl Display) -> String {
    format!("{}{}{}", style.render(), text, style.render_reset())
}

/// Turn a `Debug`-formatted duration such as `1.234567ms` into `1.23 ms`.
/// Anything that does not look like `<number><unit>` is returned unchanged.
pub fn format_duration_field(raw: &str) -> String {
    if let Some(idx) = raw.find(|c: char| c.is_alphabetic()) {
        let (num, unit) = (&raw[..idx], &raw[idx..]);
        if let Ok(val) = num.parse::<f32>() {
            return format!("{:.2} {}", val, unit);
        }
    }
    raw.to_string()
}

/// Install the global logger on stderr. Calling it twice keeps the first logger.
pub fn initialize_logger(level: LevelFilter) {
    let result = Builder::new()
        .write_style(WriteStyle::Auto)
        .format(|buf, record| {
            let dim = Style::new().dimmed();
            let ts = paint(dim, buf.timestamp());

            let level_style = buf.default_level_style(record.level());
            let lvl = paint(level_style, record.level());

            let tgt = paint(dim, record.target());

            let dur_raw = record
                .key_values()
                .get(Key::from("duration"))
                .map(|v| format_duration_field(&v.to_string()))
                .unwrap_or_default();

            let dur = if dur_raw.is_empty() {
                " ".repeat(DURATION_WIDTH)
            } else {
                paint(
                    AnsiColor::Cyan.on_default(),
                    format!("{:>width$}", dur_raw, width = DURATION_WIDTH),
                )
            };

            writeln!(buf, "{} {} {}", ts, lvl, tgt)?;

            let message = record.args().to_string();
            let subsequent_indent = " ".repeat(DURATION_WIDTH + 1);
            let mut lines = message.lines();

            if let Some(first_line) = lines.next() {
                writeln!(buf, "{} {}", dur, first_line)?;
            }
            for line in lines {
                writeln!(buf, "{}{}", subsequent_indent, line)?;
            }

            Ok(())
        })
        .target(Target::Stderr)
        .filter(None, level)
        .try_init();

    if result.is_err() {
        log::debug!("Logger already initialized");
    }
}
