use anyhow::Context;
use dnsresolver_domain::config::DataFiles;
use dnsresolver_infrastructure::repositories::ensure_default_files;

/// Make sure the data directory exists and holds all four documents.
/// Returns how many default files were written.
pub fn prepare_data_dir(files: &DataFiles) -> anyhow::Result<usize> {
    if let Some(dir) = files.settings.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating data directory {}", dir.display()))?;
    }
    Ok(ensure_default_files(files)?)
}
