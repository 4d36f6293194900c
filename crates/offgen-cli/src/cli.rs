use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use offgen::LineEnding;

#[derive(Parser, Debug)]
#[command(name = "offgen", version, about = "Offset header generator for reflected game types")]
pub struct Cli {
    /// TOML configuration file (defaults to ./offgen.toml when present)
    #[arg(short, long, global = true, env = "OFFGEN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the definitions against a type snapshot and write offsets.h
    Generate {
        #[command(flatten)]
        paths: PathArgs,

        /// Game process the snapshot was taken from
        #[arg(long, env = "OFFGEN_PROCESS")]
        process: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Write a readable listing of every type in a snapshot
    Dump {
        #[arg(short, long, env = "OFFGEN_SNAPSHOT")]
        snapshot: Option<PathBuf>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only list types whose full name contains this text
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Check a definitions file without resolving it
    Validate {
        #[arg(short, long, env = "OFFGEN_DEFINITIONS")]
        definitions: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct PathArgs {
    /// Game install directory containing ConsistencyInfo
    #[arg(short, long, env = "OFFGEN_GAME_DIR")]
    pub game_dir: Option<PathBuf>,

    /// JSON type snapshot produced by the inspector
    #[arg(short, long, env = "OFFGEN_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    /// JSON definitions file
    #[arg(short, long, env = "OFFGEN_DEFINITIONS")]
    pub definitions: Option<PathBuf>,

    /// Directory receiving offsets.h and dump.txt
    #[arg(short, long, env = "OFFGEN_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct OutputArgs {
    /// Emit a commented placeholder for offsets that did not resolve
    #[arg(long, overrides_with = "no_mark_unresolved")]
    pub mark_unresolved: bool,

    /// Drop offsets that did not resolve from the header
    #[arg(long, overrides_with = "mark_unresolved")]
    pub no_mark_unresolved: bool,

    /// Line terminator of the generated header (lf, crlf)
    #[arg(long)]
    pub line_ending: Option<LineEnding>,

    /// Write dump.txt next to the header
    #[arg(long, overrides_with = "no_dump")]
    pub dump: bool,

    /// Skip writing dump.txt
    #[arg(long, overrides_with = "dump")]
    pub no_dump: bool,
}

impl OutputArgs {
    pub fn mark_unresolved(&self) -> Option<bool> {
        switch(self.mark_unresolved, self.no_mark_unresolved)
    }

    pub fn write_dump(&self) -> Option<bool> {
        switch(self.dump, self.no_dump)
    }
}

/// Resolve an `--x` / `--no-x` pair; `None` leaves the configured value
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "offgen",
            "generate",
            "--game-dir",
            "C:/EFT",
            "--snapshot",
            "snap.json",
            "--line-ending",
            "crlf",
            "--mark-unresolved",
        ])
        .unwrap();

        match cli.command {
            Command::Generate { paths, output, .. } => {
                assert_eq!(paths.game_dir, Some(PathBuf::from("C:/EFT")));
                assert_eq!(paths.snapshot, Some(PathBuf::from("snap.json")));
                assert_eq!(output.line_ending, Some(LineEnding::CrLf));
                assert_eq!(output.mark_unresolved(), Some(true));
                assert_eq!(output.write_dump(), None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_dump_with_global_config() {
        let cli = Cli::try_parse_from(["offgen", "dump", "-f", "Player", "--config", "my.toml"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
        assert!(matches!(
            cli.command,
            Command::Dump { filter: Some(ref f), .. } if f == "Player"
        ));
    }

    #[test]
    fn test_rejects_unknown_line_ending() {
        assert!(
            Cli::try_parse_from(["offgen", "generate", "--line-ending", "cr"]).is_err()
        );
    }

    fn output_args(args: &[&str]) -> OutputArgs {
        let cli = Cli::try_parse_from(["offgen", "generate"].iter().chain(args)).unwrap();
        match cli.command {
            Command::Generate { output, .. } => output,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_negative_flags_and_last_one_wins() {
        assert_eq!(output_args(&[]).mark_unresolved(), None);
        assert_eq!(
            output_args(&["--no-mark-unresolved"]).mark_unresolved(),
            Some(false)
        );
        assert_eq!(
            output_args(&["--no-mark-unresolved", "--mark-unresolved"]).mark_unresolved(),
            Some(true)
        );
        assert_eq!(
            output_args(&["--mark-unresolved", "--no-mark-unresolved"]).mark_unresolved(),
            Some(false)
        );
        assert_eq!(output_args(&["--dump"]).write_dump(), Some(true));
        assert_eq!(output_args(&["--no-dump"]).write_dump(), Some(false));
    }
}
