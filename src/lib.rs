pub mod config;
pub mod design;
pub mod error;
pub mod filter;
pub mod golden;
pub mod power;
pub mod quantize;
pub mod synth;
