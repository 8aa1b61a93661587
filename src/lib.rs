// Library root
// -----------
// This crate exposes a small library surface for the seeding CLI. The
// binary (`main.rs`) wires these modules together.
//
// Module responsibilities:
// - `config`: the seed configuration (target base URL, collection specs,
//   record payloads) and the embedded demo data set.
// - `api`: the blocking HTTP client that talks to the backend's REST API.
// - `seed`: the ordered call plan, outcome classification and the driver
//   that executes the plan against a log sink.
// - `ui`: terminal presentation (confirmation prompt, console log sink).
//
// Keeping `seed` free of terminal concerns means the integration tests can
// drive the full sequence against an in-process server with a recording
// log sink.
pub mod api;
pub mod config;
pub mod seed;
pub mod ui;
