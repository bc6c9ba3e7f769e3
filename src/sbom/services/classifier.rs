//! Classification of installed files into Source / Prebuilt / Platform.

use crate::sbom::domain::InstalledFileRecord;

/// Exactly one class applies to every record. Source and Prebuilt are tested
/// first; Platform is the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageClass {
    /// Internal fork of upstream code built from an external/ source tree
    Source,
    /// Prebuilt artifact imported into the build
    Prebuilt,
    /// First-party platform code
    Platform,
}

/// Build-system module kinds that produce prebuilt artifacts. A file owned by
/// any of these kinds is a prebuilt regardless of where its module lives.
const PREBUILT_MODULE_TYPES: &[&str] = &[
    "android_app_import",
    "android_library_import",
    "cc_prebuilt_binary",
    "cc_prebuilt_library",
    "cc_prebuilt_library_headers",
    "cc_prebuilt_library_shared",
    "cc_prebuilt_library_static",
    "cc_prebuilt_object",
    "dex_import",
    "java_import",
    "java_sdk_library_import",
    "java_system_modules_import",
    "libclang_rt_prebuilt_library_static",
    "libclang_rt_prebuilt_library_shared",
    "llvm_prebuilt_library_static",
    "ndk_prebuilt_object",
    "ndk_prebuilt_shared_stl",
    "nkd_prebuilt_static_stl",
    "prebuilt_apex",
    "prebuilt_bootclasspath_fragment",
    "prebuilt_dsp",
    "prebuilt_firmware",
    "prebuilt_kernel_modules",
    "prebuilt_rfsa",
    "prebuilt_root",
    "rust_prebuilt_dylib",
    "rust_prebuilt_library",
    "rust_prebuilt_rlib",
    "vndk_prebuilt_shared",
];

/// Marker prefixing kernel-module copy sources that the build generated
/// itself rather than importing.
const GENERATED_SOURCE_MARKER: &str = "ANDROID-GEN:";

/// Classify one installed-file record. Total: every record gets exactly one
/// class.
pub fn classify(record: &InstalledFileRecord) -> PackageClass {
    if is_source(record) {
        PackageClass::Source
    } else if is_prebuilt(record) {
        PackageClass::Prebuilt
    } else {
        PackageClass::Platform
    }
}

fn is_source(record: &InstalledFileRecord) -> bool {
    record.module_path.starts_with("external/") && !is_prebuilt(record)
}

fn is_prebuilt(record: &InstalledFileRecord) -> bool {
    if !record.module_path.is_empty() {
        return record.module_path.starts_with("prebuilts/")
            || is_prebuilt_module_type(&record.soong_module_type)
            || record.is_prebuilt_make_module;
    }

    // Kernel modules without an owning module: the copy source tells prebuilt
    // apart from build-generated. This rule is a source-tree convention and is
    // deliberately kept separate from the path-prefix tests above.
    match record.kernel_module_copy_source() {
        Some(_) => !kernel_module_copy_is_generated(record),
        None => false,
    }
}

fn is_prebuilt_module_type(module_type: &str) -> bool {
    !module_type.is_empty() && PREBUILT_MODULE_TYPES.contains(&module_type)
}

/// Whether a kernel-module copy specification carries the reserved
/// generation marker, which makes the file platform-generated rather than
/// prebuilt. The marker prefixes the whole `src:dest` specification, so the
/// test runs over the full field and not its source half (splitting at the
/// first `:` would cut the marker's own colon off).
pub fn kernel_module_copy_is_generated(record: &InstalledFileRecord) -> bool {
    record
        .kernel_module_copy_files
        .starts_with(GENERATED_SOURCE_MARKER)
}
