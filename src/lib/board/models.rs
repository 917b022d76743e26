use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;
use serde_json::Value;

pub mod activity_model;

/// A model for describing ARGS of the tool.
/// Consists of:
/// 1. Path to config.json, that tells where the activity service lives.
/// 2. A switch for printing the board once and exiting instead of reading commands.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_name = "FILE", default_value = "config.json")]
    pub config_json_path: PathBuf,
    #[arg(long)]
    pub once: bool,
}

/// A model for describing configuration of the tool.
/// Consists of:
/// 1. Base URL of the activity service, e.g. `http://127.0.0.1:8000`
/// 2. Timeout for every request, in seconds
#[derive(Deserialize, Debug)]
pub struct Config {
    pub base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    10
}

/// How the backend answered a signup or unregister request that did complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiReply {
    Accepted { message: Option<String> },
    Rejected { status: u16, detail: Option<String> },
}

/// JSON body of signup and unregister responses. Success carries `message`,
/// failure carries `detail`.
#[derive(Deserialize, Debug, Default)]
pub struct ReplyBody {
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub detail: Option<Value>,
}
