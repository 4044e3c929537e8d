//! Command-line arguments and the single-shot run.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use clap::Parser;

use crate::citybus::{Company, DEFAULT_BASE_URL, EtaClient, EtaConfig, EtaQuery};
use crate::display::{write_report, write_stop_list};
use crate::lookup::{LookupError, list_stops, lookup};

/// Check Hong Kong Citybus/NWFB ETAs.
#[derive(Debug, Parser)]
#[command(name = "bus-eta", version, about = "Check Hong Kong Citybus/NWFB ETAs")]
pub struct Cli {
    /// Bus route number (e.g., 10)
    #[arg(long)]
    pub route: Option<String>,

    /// Bus stop ID (e.g., 001032)
    #[arg(long)]
    pub stop_id: Option<String>,

    /// Bus company
    #[arg(long, value_enum, ignore_case = true, default_value_t = Company::Ctb)]
    pub company: Company,

    /// List the stops of --route with their stop IDs instead of ETAs
    #[arg(long)]
    pub list_stops: bool,

    /// API base URL
    #[arg(long, hide = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

impl Cli {
    pub fn query(&self) -> EtaQuery {
        EtaQuery {
            route: self.route.clone(),
            stop_id: self.stop_id.clone(),
            company: self.company,
        }
    }

    pub fn config(&self) -> EtaConfig {
        EtaConfig::new().with_base_url(&self.base_url)
    }
}

/// Perform one lookup (or stop listing) and write the report to `out`.
///
/// Lookup failures are part of the report; only write errors are returned.
pub async fn run<W: Write>(cli: &Cli, out: &mut W, now: DateTime<Utc>) -> io::Result<()> {
    let client = match EtaClient::new(cli.config()) {
        Ok(client) => client,
        Err(e) => {
            let err = LookupError::Api(e);
            return if cli.list_stops {
                write_stop_list(out, &Err(err))
            } else {
                write_report(out, &Err(err), now)
            };
        }
    };

    let query = cli.query();
    if cli.list_stops {
        write_stop_list(out, &list_stops(&client, &query).await)
    } else {
        write_report(out, &lookup(&client, &query).await, now)
    }
}
