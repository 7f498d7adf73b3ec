use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use rand::thread_rng;
use tracing::info;

use crate::assignment;
use crate::output;
use crate::plan::ReassignmentPlan;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Broker id list, comma separated with no spaces
    #[arg(short, long, value_delimiter = ',', required = true)]
    brokers: Vec<u32>,

    /// Topic name
    #[arg(short, long)]
    topic: String,

    /// The number of partitions for the topic
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    partitions: u32,

    /// The replication factor for each partition in the topic being created
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    replication_factor: u32,

    /// Write the plan to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Format the output json with 2 space indent
    #[arg(short = 'f', long)]
    pretty: bool,
}

impl Cli {
    pub fn run() -> Result<()> {
        let cli = Cli::parse();

        if cli.topic.is_empty() {
            bail!("Topic name must not be empty");
        }

        let table = assignment::assign(
            &cli.brokers,
            cli.partitions,
            cli.replication_factor,
            &mut thread_rng(),
        )?;
        info!(
            "Assigned {} partition(s) across {} broker(s)",
            cli.partitions,
            cli.brokers.len()
        );

        let plan = ReassignmentPlan::from_table(&cli.topic, &table);
        let document = plan.render(cli.pretty)?;
        output::write_plan(&document, cli.output.as_deref())
    }
}
