use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use starfield_config::schema::ProfileOverride;

/// Starfield: a GPU-rendered animated space backdrop.
#[derive(Parser, Debug)]
#[command(name = "starfield", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive (e.g. "starfield=debug").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Force a device profile instead of detecting one.
    #[arg(long, value_enum)]
    pub profile: Option<ProfileArg>,

    /// Seed for scene generation; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileArg {
    Auto,
    Full,
    Constrained,
}

impl From<ProfileArg> for ProfileOverride {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Auto => ProfileOverride::Auto,
            ProfileArg::Full => ProfileOverride::Full,
            ProfileArg::Constrained => ProfileOverride::Constrained,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() {
        let args = Args::try_parse_from(["starfield"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.profile.is_none());
        assert!(args.seed.is_none());
        assert!(!args.print_config);
    }

    #[test]
    fn all_arguments() {
        let args = Args::try_parse_from([
            "starfield",
            "--config",
            "/tmp/sf.toml",
            "--log-level",
            "starfield=debug",
            "--profile",
            "constrained",
            "--seed",
            "42",
            "--print-config",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/sf.toml")));
        assert_eq!(args.log_level.as_deref(), Some("starfield=debug"));
        assert_eq!(args.profile, Some(ProfileArg::Constrained));
        assert_eq!(args.seed, Some(42));
        assert!(args.print_config);
    }

    #[test]
    fn unknown_profile_rejected() {
        assert!(Args::try_parse_from(["starfield", "--profile", "tablet"]).is_err());
    }

    #[test]
    fn profile_arg_maps_to_override() {
        assert_eq!(ProfileOverride::from(ProfileArg::Full), ProfileOverride::Full);
        assert_eq!(ProfileOverride::from(ProfileArg::Auto), ProfileOverride::Auto);
    }
}
