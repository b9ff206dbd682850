//! Paths inside a virtual environment directory.

use std::path::{Path, PathBuf};

/// Directory holding the interpreter and scripts.
pub fn scripts_dir(env_dir: &Path) -> PathBuf {
    if cfg!(windows) {
        env_dir.join("Scripts")
    } else {
        env_dir.join("bin")
    }
}

/// The environment's own interpreter.
pub fn interpreter(env_dir: &Path) -> PathBuf {
    if cfg!(windows) {
        scripts_dir(env_dir).join("python.exe")
    } else {
        scripts_dir(env_dir).join("python")
    }
}

/// Activation script inside the environment.
pub fn activate_script(env_dir: &Path) -> PathBuf {
    scripts_dir(env_dir).join("activate")
}

/// What the user types to activate the environment behind `activate_script`.
///
/// POSIX shells source the script. On Windows the script is run directly,
/// which cmd resolves to `activate.bat` and PowerShell to `Activate.ps1`.
pub fn activation_command(activate_script: &Path) -> String {
    if cfg!(windows) {
        activate_script.display().to_string()
    } else {
        format!("source {}", activate_script.display())
    }
}

/// Resolve a configured environment directory against the project root.
pub fn resolve_env_dir(project_root: &Path, env_dir: &Path) -> PathBuf {
    if env_dir.is_absolute() || project_root == Path::new(".") {
        env_dir.to_path_buf()
    } else {
        project_root.join(env_dir)
    }
}
