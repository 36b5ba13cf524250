//! Structured logging and optional OpenTelemetry trace export.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter ─┬→ fmt layer → stderr
//!                             └→ tracing-opentelemetry → OtlpFileExporter → JSON lines
//! ```
//!
//! # Features
//!
//! - **Console logs**: always on, written to stderr so stdout stays free for
//!   rendered pages
//! - **File export**: OTLP JSON, one batch per line, enabled by `trace_file`
//! - **Rotation**: the export file rotates at 10MB with 3 numbered backups
//!
//! # Configuration
//!
//! Level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: subscriber setup and the export guard
//! - [`exporter`]: OTLP JSON encoding and the span exporter
//! - [`rotating`]: size-rotated line file

pub mod exporter;
mod init;
pub mod rotating;

pub use init::{init_tracing, TracingGuard};
