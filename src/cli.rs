use clap::Parser;
use std::path::PathBuf;

pub const FILES_FLAG: &str = "-f";

/// Print a directory as an indented tree.
#[derive(Debug, Parser)]
#[command(name = "dirtree", disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Root directory to render.
    #[arg(allow_hyphen_values = true)]
    pub path: PathBuf,

    /// Pass `-f` to include files with their sizes.
    #[arg(value_name = "-f", allow_hyphen_values = true)]
    pub files_flag: Option<String>,
}

impl Cli {
    pub fn include_files(&self) -> bool {
        self.files_flag.as_deref() == Some(FILES_FLAG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_only_renders_directories() {
        let cli = Cli::try_parse_from(["dirtree", "."]).unwrap();
        assert_eq!(cli.path, PathBuf::from("."));
        assert!(!cli.include_files());
    }

    #[test]
    fn files_flag_as_second_positional() {
        let cli = Cli::try_parse_from(["dirtree", "some/dir", "-f"]).unwrap();
        assert!(cli.include_files());
    }

    #[test]
    fn other_second_argument_is_ignored() {
        let cli = Cli::try_parse_from(["dirtree", ".", "-x"]).unwrap();
        assert!(!cli.include_files());
    }

    #[test]
    fn help_and_version_are_plain_second_arguments() {
        for arg in ["-h", "--help", "-V", "--version"] {
            let cli = Cli::try_parse_from(["dirtree", ".", arg]).unwrap();
            assert_eq!(cli.files_flag.as_deref(), Some(arg));
            assert!(!cli.include_files());
        }
    }

    #[test]
    fn hyphenated_root_is_a_path() {
        let cli = Cli::try_parse_from(["dirtree", "-dir", "-f"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("-dir"));
        assert!(cli.include_files());
    }

    #[test]
    fn wrong_argument_count_is_a_usage_error() {
        assert!(Cli::try_parse_from(["dirtree"]).is_err());
        assert!(Cli::try_parse_from(["dirtree", ".", "-f", "extra"]).is_err());
    }
}
