use anyhow::{bail, Context, Result};
use boston311_api::{Client, RequestsQuery};
use chrono::Utc;
use clap::Args;

use crate::output::{print_requests, OutputFormat};
use crate::validation;

#[derive(Args)]
pub struct RequestsArgs {
    /// Filter by service code (e.g. 4f389210e75084437f0001ce)
    #[arg(long, conflicts_with = "service_name")]
    pub service_code: Option<String>,

    /// Filter by exact service name, resolved to a code via the service catalog
    #[arg(long)]
    pub service_name: Option<String>,

    /// Requests made on or after this date (YYYY-MM-DD or RFC 3339)
    #[arg(long, conflicts_with = "days")]
    pub since: Option<String>,

    /// Requests made on or before this date (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub until: Option<String>,

    /// Requests made in the last N days
    #[arg(long)]
    pub days: Option<i64>,

    /// Filter by status: open or closed
    #[arg(long)]
    pub status: Option<String>,
}

pub fn run(args: &RequestsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = RequestsQuery::default();

    if let Some(ref code) = args.service_code {
        let validated = validation::validate_identifier(code, "service code")?;
        query = query.with_service_code(&validated);
    }

    if let Some(ref name) = args.service_name {
        let services = client
            .list_services()
            .context("failed to load service catalog")?;
        let Some(code) = services.get_service_code(name.trim()) else {
            bail!("no service named '{}'", name.trim());
        };
        tracing::info!("Resolved service '{}' to code {}", name.trim(), code);
        query = query.with_service_code(code);
    }

    if let Some(ref since) = args.since {
        query = query.with_start_date(validation::validate_date(since)?);
    }

    if let Some(days) = args.days {
        let days = validation::validate_days(days)?;
        query = query.with_start_date(validation::days_ago(days, Utc::now()));
    }

    if let Some(ref until) = args.until {
        query = query.with_end_date(validation::validate_date(until)?);
    }

    if let Some(ref status) = args.status {
        query = query.with_status(validation::validate_status(status)?);
    }

    let requests = client.list_requests(&query)?;

    eprintln!("{} service requests", requests.len());

    print_requests(requests.as_slice(), format)
}
