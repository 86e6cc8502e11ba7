mod cli;

use clap::Parser;
use tortoise_maps::demo;

use cli::Cli;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose)?;

    let scenario = cli.scenario();
    tracing::debug!(?scenario, "starting demonstration");

    for (i, report) in demo::run_all(&scenario, cli.variant.into()).iter().enumerate() {
        if i > 0 {
            println!("\n");
        }
        println!("{report}");
    }

    Ok(())
}

fn setup_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("tortoise_maps=debug")
        } else {
            EnvFilter::new("tortoise_maps=info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::setup_tracing;

    #[test]
    fn second_subscriber_is_an_error() {
        // The first call may lose to another test in this binary; the second never wins.
        let _ = setup_tracing(false);
        assert!(setup_tracing(true).is_err());
    }
}
