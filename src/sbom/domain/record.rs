use serde::Deserialize;

/// One row of build attribution for an installed file, as emitted by the
/// build system into sbom-metadata.csv. Produced externally, consumed
/// read-only; one record per installed file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct InstalledFileRecord {
    /// Path of the file inside the product output directory
    pub installed_file: String,
    /// Source path of the module that produced the file, empty if unknown
    #[serde(default)]
    pub module_path: String,
    /// Build-system module kind string (e.g. "cc_prebuilt_library")
    #[serde(default)]
    pub soong_module_type: String,
    /// Set for make-level modules that are externally imported prebuilts
    #[serde(default, deserialize_with = "bool_from_flag")]
    pub is_prebuilt_make_module: bool,
    /// `<source path>:<dest path>` for product-level file copies
    #[serde(default)]
    pub product_copy_files: String,
    /// `<source path>:<dest path>` for kernel module copies
    #[serde(default)]
    pub kernel_module_copy_files: String,
    /// Set for files generated by the platform build itself
    #[serde(default, deserialize_with = "bool_from_flag")]
    pub is_platform_generated: bool,
}

impl InstalledFileRecord {
    /// Source half of the kernel module copy specification, if any.
    pub fn kernel_module_copy_source(&self) -> Option<&str> {
        if self.kernel_module_copy_files.is_empty() {
            return None;
        }
        Some(
            self.kernel_module_copy_files
                .split(':')
                .next()
                .unwrap_or(&self.kernel_module_copy_files),
        )
    }
}

/// The build writes booleans as `Y`/empty or true/false depending on the
/// producing makefile, so accept the common spellings.
fn bool_from_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "true" | "1"
    ))
}
