//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "zone-sync",
    about = "Compare the Route53 managed block of a local zone file with Route53",
    version
)]
pub struct Cli {
    /// Only render hosted zones with these names (implies --all-zones)
    pub domains: Vec<String>,

    /// Render every hosted zone instead of the configured one
    #[arg(short, long)]
    pub all_zones: bool,

    /// Directory containing zone.json or zone.ini
    #[arg(short = 'C', long, default_value = ".")]
    pub config_dir: PathBuf,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn all_zones_mode(&self) -> bool {
        self.all_zones || !self.domains.is_empty()
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_single_zone() {
        let cli = Cli::try_parse_from(["zone-sync"]).unwrap();
        assert!(!cli.all_zones_mode());
        assert_eq!(cli.config_dir, PathBuf::from("."));
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn domains_imply_all_zones() {
        let cli = Cli::try_parse_from(["zone-sync", "example.com", "Other.org."]).unwrap();
        assert!(cli.all_zones_mode());
        assert_eq!(cli.domains, ["example.com", "Other.org."]);
    }

    #[test]
    fn flags() {
        let cli = Cli::try_parse_from(["zone-sync", "-a", "-C", "/etc/zone", "-vv"]).unwrap();
        assert!(cli.all_zones_mode());
        assert!(cli.domains.is_empty());
        assert_eq!(cli.config_dir, PathBuf::from("/etc/zone"));
        assert_eq!(cli.log_level(), "debug");
    }
}
