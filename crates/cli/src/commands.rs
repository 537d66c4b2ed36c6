use anyhow::{bail, Context};
use clap::Subcommand;
use cotendo_dns_application::{CotendoCdn, CotendoDns, MarkupCodec, RecordDiff};
use cotendo_dns_domain::{
    is_valid_name, ProviderResponse, RecordType, ResultEntry, ZoneConfig, ZoneRecord,
};
use std::fmt::Write as _;
use std::io::{Read, Write};
use std::sync::Arc;
use tracing::{info, warn};

const STDIN_PATH: &str = "-";

#[derive(Subcommand)]
pub enum Command {
    /// Show the visible records
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one record
    Get {
        record_type: RecordType,
        host: String,
        #[arg(long)]
        json: bool,
    },
    /// Add or replace a record, then print the configuration to upload
    Set {
        record_type: RecordType,
        host: String,
        /// One result as comma separated key=value pairs; repeatable
        #[arg(short = 'r', long = "result", value_parser = parse_result, required = true)]
        results: Vec<ResultEntry>,
    },
    /// Delete a record, then print the configuration to upload
    Delete {
        record_type: RecordType,
        host: String,
    },
    /// Compare the stored record with the given results
    Diff {
        record_type: RecordType,
        host: String,
        #[arg(short = 'r', long = "result", value_parser = parse_result, required = true)]
        results: Vec<ResultEntry>,
        #[arg(long)]
        json: bool,
    },
    /// Print the configuration as it would be uploaded
    Render,
    /// Print a CDN configuration as decoded
    Cdn,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::List { .. } => "list",
            Command::Get { .. } => "get",
            Command::Set { .. } => "set",
            Command::Delete { .. } => "delete",
            Command::Diff { .. } => "diff",
            Command::Render => "render",
            Command::Cdn => "cdn",
        }
    }
}

/// Runs `command` against the response and returns what should be printed.
pub fn execute(
    command: &Command,
    response: ProviderResponse,
    codec: Arc<dyn MarkupCodec>,
    options: &ZoneConfig,
) -> anyhow::Result<String> {
    match command {
        Command::List { json } => {
            let dns = load_zone(response, codec, options)?;
            if *json {
                return to_json(dns.entries());
            }
            Ok(dns.show())
        }
        Command::Get {
            record_type,
            host,
            json,
        } => {
            let dns = load_zone(response, codec, options)?;
            let Some(record) = dns.get_record(*record_type, host) else {
                bail!("no {record_type} record for host {host:?}");
            };
            if *json {
                return to_json(record);
            }
            Ok(format!("{record}\n"))
        }
        Command::Set {
            record_type,
            host,
            results,
        } => {
            ensure_storable(*record_type, options)?;
            let mut dns = load_zone(response, codec, options)?;
            let record = build_record(*record_type, host, results)?;
            let change = dns.add_record(record);
            info!(%record_type, host = %host, ?change, "Record stored");
            Ok(dns.config()?)
        }
        Command::Delete { record_type, host } => {
            let mut dns = load_zone(response, codec, options)?;
            if dns.del_record(*record_type, host).is_none() {
                warn!(%record_type, host = %host, "No such record, nothing deleted");
            }
            Ok(dns.config()?)
        }
        Command::Diff {
            record_type,
            host,
            results,
            json,
        } => {
            let dns = load_zone(response, codec, options)?;
            let record = build_record(*record_type, host, results)?;
            let Some(diff) = dns.diff_record(&record) else {
                bail!("no {record_type} record for host {host:?}");
            };
            if *json {
                return to_json(&diff);
            }
            Ok(render_diff(&diff))
        }
        Command::Render => Ok(load_zone(response, codec, options)?.config()?),
        Command::Cdn => {
            let cdn =
                CotendoCdn::new(response, codec).context("failed to decode CDN configuration")?;
            Ok(cdn.entries()?)
        }
    }
}

fn load_zone(
    response: ProviderResponse,
    codec: Arc<dyn MarkupCodec>,
    options: &ZoneConfig,
) -> anyhow::Result<CotendoDns> {
    CotendoDns::with_options(response, codec, options.clone())
        .context("failed to decode zone configuration")
}

/// Sorting drops SOA, NS and, unless retained, SRV records, so setting
/// one would report success and then lose it.
fn ensure_storable(record_type: RecordType, options: &ZoneConfig) -> anyhow::Result<()> {
    if record_type.is_hidden() {
        bail!("{record_type} records are managed by the provider and cannot be set");
    }
    if record_type == RecordType::Srv && !options.retain_srv {
        bail!("srv records are dropped from the zone unless --retain-srv is given");
    }
    Ok(())
}

fn build_record(
    record_type: RecordType,
    host: &str,
    results: &[ResultEntry],
) -> anyhow::Result<ZoneRecord> {
    Ok(CotendoDns::create_record(
        record_type.as_tag(),
        host,
        results.iter().cloned(),
    )?)
}

fn render_diff(diff: &RecordDiff) -> String {
    let mut out = String::new();
    for entry in &diff.removed {
        let _ = writeln!(out, "- {entry}");
    }
    for entry in &diff.added {
        let _ = writeln!(out, "+ {entry}");
    }
    out
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// Parses `key=value,key=value` into one result.
pub fn parse_result(raw: &str) -> Result<ResultEntry, String> {
    let mut entry = ResultEntry::new();
    for pair in raw.split(',').map(str::trim).filter(|pair| !pair.is_empty()) {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(format!("expected key=value, got {pair:?}"));
        };
        let key = key.trim().to_ascii_lowercase();
        if key.is_empty() {
            return Err(format!("empty key in {pair:?}"));
        }
        if !is_valid_name(&key) {
            return Err(format!("invalid key {key:?}: use letters, digits, '-', '_' or '.'"));
        }
        entry.insert(key, value.trim());
    }

    if entry.is_empty() {
        return Err("a result needs at least one key=value pair".to_string());
    }
    Ok(entry)
}

pub fn read_input(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        None | Some(STDIN_PATH) => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read configuration from stdin")?;
            Ok(raw)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration from {path}")),
    }
}

pub fn write_output(path: Option<&str>, output: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, output).with_context(|| format!("failed to write {path}"))
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
