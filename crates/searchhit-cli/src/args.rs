use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for searchhit
#[derive(Debug, Parser)]
#[command(
    name = "searchhit",
    version,
    about = "Inspect search hits: identifiers, wire bytes, location names and info entries"
)]
pub struct CliArgs {
    /// JSON file with codec settings (min_free, mid_write_free, grow_by, max_batch_size)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse an identifier string and print the hit as JSON
    Parse {
        /// Identifier, e.g. s:20:10:0:5 or C:664000000:131000000:1:Lund
        id: String,
    },

    /// Print the identifier of a JSON hit
    Format {
        /// JSON file, or - for stdin
        #[arg(default_value = "-")]
        input: String,
    },

    /// Encode a JSON hit and print the wire bytes as hex
    Encode {
        /// Use the compact form
        #[arg(long)]
        compact: bool,

        /// JSON file, or - for stdin
        #[arg(default_value = "-")]
        input: String,
    },

    /// Decode hex wire bytes and print the hit as JSON
    Decode {
        /// The bytes were written in compact form
        #[arg(long)]
        compact: bool,

        /// Hex-encoded record
        hex: String,
    },

    /// Print the location name of a JSON hit
    Location {
        /// Comma-separated kind characters of eligible regions (default a,b,d)
        #[arg(short = 'k', long = "kinds", value_delimiter = ',')]
        kinds: Vec<char>,

        /// JSON file, or - for stdin
        #[arg(default_value = "-")]
        input: String,
    },

    /// Merge the address entries of a JSON hit and print the entries as JSON
    Normalize {
        /// Top region id selecting the address format
        #[arg(long = "top-region", default_value_t = 0)]
        top_region: u32,

        /// Language of the generated entry keys
        #[arg(long, default_value = "en")]
        lang: String,

        /// JSON file, or - for stdin
        #[arg(default_value = "-")]
        input: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_takes_the_identifier_verbatim() {
        let args = CliArgs::try_parse_from(["searchhit", "parse", "s:20:10:0:5"]).unwrap();
        assert!(matches!(args.command, Commands::Parse { id } if id == "s:20:10:0:5"));
        assert!(args.config.is_none());
    }

    #[test]
    fn input_defaults_to_stdin() {
        let args = CliArgs::try_parse_from(["searchhit", "format"]).unwrap();
        assert!(matches!(args.command, Commands::Format { input } if input == "-"));
    }

    #[test]
    fn kinds_split_on_commas() {
        let args =
            CliArgs::try_parse_from(["searchhit", "location", "--kinds", "a,b,l", "hit.json"])
                .unwrap();
        match args.command {
            Commands::Location { kinds, input } => {
                assert_eq!(kinds, vec!['a', 'b', 'l']);
                assert_eq!(input, "hit.json");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_config_and_compact_flag() {
        let args = CliArgs::try_parse_from([
            "searchhit",
            "encode",
            "--compact",
            "--config",
            "codec.json",
            "hit.json",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("codec.json")));
        assert!(matches!(args.command, Commands::Encode { compact: true, .. }));
    }

    #[test]
    fn normalize_defaults() {
        let args = CliArgs::try_parse_from(["searchhit", "normalize"]).unwrap();
        match args.command {
            Commands::Normalize {
                top_region,
                lang,
                input,
            } => {
                assert_eq!(top_region, 0);
                assert_eq!(lang, "en");
                assert_eq!(input, "-");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn decode_requires_hex() {
        assert!(CliArgs::try_parse_from(["searchhit", "decode"]).is_err());
    }
}
