use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Metricmap configuration

[engine]
# Depth bound for tree traversals; deeper trees are reported as errors.
recursion_limit = 512

[lint]
# Run the external linter on every analysis and include its report.
enabled = false
command = "pylint"
args = []
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");

    Ok(())
}
