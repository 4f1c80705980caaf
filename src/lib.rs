#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod contract;
pub mod error;
pub mod render;
pub mod report;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use contract::Debuggable;
pub use error::Error;
pub use render::{Section, bullet_list, render};
pub use report::{Kind, Report, ReportBuilder};
pub use types::Branding;
