//! Shell completion scripts for `bindata --completions <shell>`.

use std::io;

use clap::Command;
use clap_complete::{generate, shells};

/// Supported shells for completion generation
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

impl std::fmt::Display for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shell::Bash => write!(f, "bash"),
            Shell::Zsh => write!(f, "zsh"),
            Shell::Fish => write!(f, "fish"),
            Shell::PowerShell => write!(f, "powershell"),
            Shell::Elvish => write!(f, "elvish"),
        }
    }
}

/// Write the completion script for `shell` into `out`.
pub fn write_completions(shell: Shell, cmd: &mut Command, out: &mut dyn io::Write) {
    let name = cmd.get_name().to_string();
    match shell {
        Shell::Bash => generate(shells::Bash, cmd, name, out),
        Shell::Zsh => generate(shells::Zsh, cmd, name, out),
        Shell::Fish => generate(shells::Fish, cmd, name, out),
        Shell::PowerShell => generate(shells::PowerShell, cmd, name, out),
        Shell::Elvish => generate(shells::Elvish, cmd, name, out),
    }
}

/// Generate completions and write to stdout.
pub fn run(shell: Shell, cmd: &mut Command) -> anyhow::Result<()> {
    write_completions(shell, cmd, &mut io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_command() -> Command {
        Command::new("bindata").arg(
            clap::Arg::new("dir")
                .short('d')
                .long("dir")
                .action(clap::ArgAction::Append),
        )
    }

    #[test]
    fn test_shell_display() {
        assert_eq!(Shell::Bash.to_string(), "bash");
        assert_eq!(Shell::Zsh.to_string(), "zsh");
        assert_eq!(Shell::Fish.to_string(), "fish");
        assert_eq!(Shell::PowerShell.to_string(), "powershell");
        assert_eq!(Shell::Elvish.to_string(), "elvish");
    }

    #[test]
    fn test_write_completions_mentions_binary() {
        let mut buf = Vec::new();
        write_completions(Shell::Bash, &mut sample_command(), &mut buf);

        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("bindata"));
        assert!(script.contains("--dir"));
    }
}
