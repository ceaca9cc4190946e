//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → RotatingFile
//! ```
//!
//! Spans are written as OTLP JSON, one batch per line, to
//! `~/.local/share/zellij/fleetview/fleetview-otlp.json`. The file rotates at
//! 10 MB and the three newest backups are kept.
//!
//! The level comes from the `trace_level` plugin option and defaults to
//! `info`. It accepts any `EnvFilter` directive, e.g. `fleetview=debug`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: Span exporter and OTLP JSON formatting
//! - [`rotating`]: Size-rotated append-only file

mod exporter;
mod init;
mod rotating;

pub use init::init_tracing;
