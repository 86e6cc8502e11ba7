use clap::{Parser, ValueEnum};
use tortoise_maps::Tortoise;
use tortoise_maps::demo::{Scenario, Variants};

/// Runs the tortoise owner map demonstration over a `HashMap` and an
/// insertion-ordered map.
#[derive(Debug, Parser)]
#[clap(version, about)]
pub(crate) struct Cli {
    /// Nickname of the tortoise looked up and then removed by key.
    #[clap(long, value_name = "NICKNAME", default_value = "Броня")]
    pub(crate) search_nickname: String,

    /// Shell thickness of the tortoise looked up and then removed by key.
    #[clap(long, value_name = "THICKNESS", default_value_t = 3.1)]
    pub(crate) search_thickness: f64,

    /// Nickname of the tortoise added to each map.
    #[clap(long, value_name = "NICKNAME", default_value = "Казка")]
    pub(crate) add_nickname: String,

    /// Shell thickness of the tortoise added to each map.
    #[clap(long, value_name = "THICKNESS", default_value_t = 3.3)]
    pub(crate) add_thickness: f64,

    /// Owner looked up and then removed by value.
    #[clap(long, value_name = "OWNER", default_value = "Микола")]
    pub(crate) search_owner: String,

    /// Owner of the added tortoise.
    #[clap(long, value_name = "OWNER", default_value = "Аркадій")]
    pub(crate) add_owner: String,

    /// Which map variants to run.
    #[clap(long, value_enum, default_value_t = VariantArg::Both)]
    pub(crate) variant: VariantArg,

    /// Log engine operations at debug level. `RUST_LOG` takes precedence.
    #[clap(short, long)]
    pub(crate) verbose: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub(crate) enum VariantArg {
    /// The unordered `HashMap`.
    Hash,
    /// The insertion-ordered map.
    Linked,
    /// Both maps, one after the other.
    Both,
}

impl From<VariantArg> for Variants {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Hash => Variants::Hash,
            VariantArg::Linked => Variants::Linked,
            VariantArg::Both => Variants::Both,
        }
    }
}

impl Cli {
    pub(crate) fn scenario(&self) -> Scenario {
        Scenario {
            key_to_search_and_delete: Tortoise::with_shell_thickness(self.search_nickname.clone(), self.search_thickness),
            key_to_add: Tortoise::with_shell_thickness(self.add_nickname.clone(), self.add_thickness),
            value_to_search_and_delete: self.search_owner.clone(),
            value_to_add: self.add_owner.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_default_scenario() {
        let cli = Cli::parse_from(["tortoise_maps"]);
        assert_eq!(cli.scenario(), Scenario::default());
        assert_eq!(Variants::from(cli.variant), Variants::Both);
        assert!(!cli.verbose);
    }

    #[test]
    fn flags_override_scenario() {
        let cli = Cli::parse_from([
            "tortoise_maps",
            "--search-nickname",
            "Гном",
            "--search-thickness",
            "1.8",
            "--search-owner",
            "Аліна",
            "--variant",
            "linked",
            "-v",
        ]);
        let scenario = cli.scenario();
        assert_eq!(scenario.key_to_search_and_delete, Tortoise::with_shell_thickness("Гном", 1.8));
        assert_eq!(scenario.value_to_search_and_delete, "Аліна");
        assert_eq!(cli.variant, VariantArg::Linked);
        assert!(cli.verbose);
    }

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
