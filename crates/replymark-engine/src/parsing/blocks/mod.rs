//! # Block Parsing
//!
//! Two-phase block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified
//!    independently into local facts (blank status, closing-fence status)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` state machine
//!    consumes classified lines, dispatching block openers through
//!    `try_open_leaf` while outside a fence and buffering verbatim lines
//!    while inside one
//!
//! ## Modules
//!
//! - **`types`**: the [`Block`] output type
//! - **`kinds`**: marker detection for fences, headings, and list items
//! - **`classify`**: `LineClassifier` produces a `LineClass` per line
//! - **`open`**: `try_open_leaf` dispatch, strict first-match precedence
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Every input line is consumed by exactly one block; fence delimiter
//!   lines are consumed by the `CodeBlock` they delimit
//! - Fenced code is a raw zone: no block or inline parsing inside
//! - Input ending inside a fence still emits the accumulated `CodeBlock`

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier};
pub use types::Block;
