// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) wires these modules together into the interactive session.
//
// Module responsibilities:
// - `api`: blocking HTTP calls against the Dog CEO API (breed catalog,
//   random breed image, random sub-breed image).
// - `catalog`: the breed -> sub-breeds mapping and name normalization.
// - `view`: plain-text rendering of the catalog.
// - `ui`: the menu state machine, input prompting and result reporting.
// - `error`: failure types for requests and for user input.
pub mod api;
pub mod catalog;
pub mod error;
pub mod ui;
pub mod view;
