use crate::config::LaunchSettings;
use crate::error::LaunchError;
use log::info;
use std::process::{Command, Stdio};

/// Spawns `command` without a shell and returns the child's pid.
///
/// The first whitespace-separated token is the program, the rest are its
/// arguments. The child is not waited on.
pub fn launch(command: &str, settings: &LaunchSettings) -> Result<u32, LaunchError> {
    let cmd_parts: Vec<&str> = command.split_whitespace().collect();
    let Some((program, args)) = cmd_parts.split_first() else {
        return Err(LaunchError::EmptyCommand);
    };

    let mut process = Command::new(program);
    process
        .args(args)
        .envs(&settings.env)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    let child = process.spawn().map_err(|source| LaunchError::Spawn {
        command: command.to_string(),
        source,
    })?;

    info!("Launched {:?} (pid {})", command, child.id());
    Ok(child.id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_command_is_rejected() {
        let settings = LaunchSettings::default();
        assert!(matches!(launch("", &settings), Err(LaunchError::EmptyCommand)));
        assert!(matches!(launch("   \t", &settings), Err(LaunchError::EmptyCommand)));
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let settings = LaunchSettings::default();
        let err = launch("/nonexistent/shelf-test-binary --flag", &settings).unwrap_err();
        match err {
            LaunchError::Spawn { command, .. } => {
                assert_eq!(command, "/nonexistent/shelf-test-binary --flag")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_spawns_with_arguments() {
        let settings = LaunchSettings::default();
        let pid = launch("true --ignored argument", &settings).unwrap();
        assert!(pid > 0);
    }
}
