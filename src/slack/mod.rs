//! Slack-facing parsing and rendering

pub mod blocks;
pub mod command_parser;
pub mod normalizer;

pub use blocks::{build_summary_blocks, create_in_channel_payload};
pub use command_parser::{SlashCommandPayload, parse_form_data};
pub use normalizer::normalize;
