use clap::Parser;
use std::path::PathBuf;

pub fn args_checks() -> Args {
    Args::parse()
}

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the sqlite database
    #[arg(short = 'd', long, value_name = "FILE", default_value = "rating.db")]
    pub db_path: String,

    /// Address the web server binds to
    #[arg(long, default_value = "0.0.0.0:8081")]
    pub bind: String,

    /// Base url the calculator fetches layout options from; defaults to the bound address
    #[arg(long)]
    pub api_base: Option<String>,

    /// Json file to populate the database from at startup
    #[arg(long, value_name = "FILE")]
    pub db_seed_json: Option<PathBuf>,

    /// Minimum rated player-rounds an aggregated layout needs before it is returned
    #[arg(long, default_value_t = 10)]
    pub min_rounds: i64,

    /// Largest gap in feet between layout total distances grouped into one aggregate
    #[arg(long, default_value_t = 200)]
    pub cluster_gap: i64,

    /// Log state transitions and query detail
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Base url the layout fetch should target, derived from the bind
    /// address when `--api-base` is not given.
    #[must_use]
    pub fn api_base_url(&self) -> String {
        self.api_base
            .clone()
            .unwrap_or_else(|| format!("http://{}", self.bind.replace("0.0.0.0", "127.0.0.1")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregation_defaults() {
        let args = Args::parse_from(["rusty-disc"]);
        assert_eq!(args.cluster_gap, 200);
        assert_eq!(args.min_rounds, 10);
    }
}
