use anyhow::Result;
use boston311_api::Client;
use clap::Args;

use crate::output::{print_requests, OutputFormat};
use crate::validation;

#[derive(Args)]
pub struct RequestArgs {
    /// Service request ID (e.g. 101003914012)
    pub id: String,
}

pub fn run(args: &RequestArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let id = validation::validate_identifier(&args.id, "request ID")?;

    match client.get_request_by_id(&id)? {
        Some(request) => print_requests(std::slice::from_ref(&request), format),
        None => {
            eprintln!("Service request {} not found", id);
            Ok(())
        }
    }
}
