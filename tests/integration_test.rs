/// Integration tests for the generation use case over mock ports.
mod test_utilities;

use product_sbom::prelude::*;
use test_utilities::mocks::*;

fn request() -> GenerateRequest {
    GenerateRequest::new(
        "sbom-metadata.csv",
        "out/product",
        "build-2024.1",
        "ACME",
        "out/product/sbom.spdx",
    )
}

fn record(installed_file: &str, module_path: &str) -> InstalledFileRecord {
    InstalledFileRecord {
        installed_file: installed_file.to_string(),
        module_path: module_path.to_string(),
        ..Default::default()
    }
}

fn use_case(
    records: Vec<InstalledFileRecord>,
    reader: MockMetadataReader,
    accessor: MockContentAccessor,
) -> GenerateSbomUseCase<MockRecordSource, MockMetadataReader, MockContentAccessor, MockProgressReporter>
{
    GenerateSbomUseCase::new(
        MockRecordSource::new(records),
        reader,
        accessor,
        MockProgressReporter::new(),
    )
}

#[test]
fn test_source_file_round_trip() {
    let reader = MockMetadataReader::new().with_descriptor(
        "external/foo",
        r#"
name = "Foo"

[third_party]
version = "1.2"
"#,
    );
    let accessor = MockContentAccessor::new().with_file("system/lib/libfoo.so", "aa11");

    let mut use_case = use_case(
        vec![record("system/lib/libfoo.so", "external/foo")],
        reader,
        accessor,
    );
    let response = use_case.execute(&request()).unwrap();
    let doc = &response.document;

    let source = doc
        .packages
        .iter()
        .find(|p| p.id == "SPDXRef-SOURCE-Foo")
        .expect("source package");
    assert_eq!(source.name, "Foo");
    assert_eq!(source.version.as_deref(), Some("build-2024.1"));

    let upstream = doc
        .packages
        .iter()
        .find(|p| p.id == "SPDXRef-UPSTREAM-Foo")
        .expect("upstream package");
    assert_eq!(upstream.name, "Foo");
    assert_eq!(upstream.version.as_deref(), Some("1.2"));

    assert!(doc.relationships.iter().any(|r| {
        r.id1 == "SPDXRef-SOURCE-Foo"
            && r.kind == RelationshipKind::VariantOf
            && r.id2 == "SPDXRef-UPSTREAM-Foo"
    }));
    assert!(doc.relationships.iter().any(|r| {
        r.id1 == "SPDXRef-system-lib-libfoo.so"
            && r.kind == RelationshipKind::GeneratedFrom
            && r.id2 == "SPDXRef-SOURCE-Foo"
    }));
    assert!(doc.resolves_all_relationships());
}

#[test]
fn test_prebuilt_without_descriptor() {
    let accessor = MockContentAccessor::new().with_file("system/app/widget.apk", "bb22");
    let mut use_case = use_case(
        vec![record("system/app/widget.apk", "prebuilts/foo/bar")],
        MockMetadataReader::new(),
        accessor,
    );
    let response = use_case.execute(&request()).unwrap();
    let doc = &response.document;

    let prebuilt = doc
        .packages
        .iter()
        .find(|p| p.id == "SPDXRef-PREBUILT-foo-bar")
        .expect("prebuilt package");
    assert_eq!(prebuilt.name, "foo-bar");
    assert_eq!(prebuilt.version.as_deref(), Some("build-2024.1"));
    assert_eq!(prebuilt.download_location, DownloadLocation::Withheld);

    assert_eq!(
        response.report.messages(IssueCategory::NoMetadataFile).len(),
        1
    );
}

#[test]
fn test_platform_file_attaches_to_platform_package() {
    let accessor = MockContentAccessor::new().with_file("system/framework/svc.jar", "cc33");
    let mut use_case = use_case(
        vec![record("system/framework/svc.jar", "frameworks/base")],
        MockMetadataReader::new(),
        accessor,
    );
    let response = use_case.execute(&request()).unwrap();

    assert!(response.document.relationships.iter().any(|r| {
        r.id1 == "SPDXRef-system-framework-svc.jar"
            && r.kind == RelationshipKind::GeneratedFrom
            && r.id2 == "SPDXRef-PLATFORM"
    }));
    // Platform files add no fork packages
    assert_eq!(response.document.packages.len(), 2);
}

#[test]
fn test_record_without_attribution_is_diagnosed_and_skipped() {
    let accessor = MockContentAccessor::new().with_file("system/etc/mystery", "dd44");
    let mut use_case = use_case(
        vec![record("system/etc/mystery", "")],
        MockMetadataReader::new(),
        accessor,
    );
    let response = use_case.execute(&request()).unwrap();

    assert_eq!(
        response.report.messages(IssueCategory::NoMetadata),
        ["system/etc/mystery"]
    );
    assert!(response.document.files.is_empty());
    assert!(response.document.relationships.is_empty());
}

#[test]
fn test_missing_installed_file_is_diagnosed_and_skipped() {
    let mut use_case = use_case(
        vec![record("system/bin/ghost", "frameworks/base")],
        MockMetadataReader::new(),
        MockContentAccessor::new(),
    );
    let response = use_case.execute(&request()).unwrap();

    assert_eq!(
        response.report.messages(IssueCategory::FileNotExist),
        ["system/bin/ghost"]
    );
    assert!(response.document.files.is_empty());
}

#[test]
fn test_descriptor_parsed_once_for_two_files() {
    let reader = MockMetadataReader::new().with_descriptor(
        "external/zlib",
        r#"
name = "zlib"

[third_party]
version = "1.3.1"
"#,
    );
    let reads = reader.read_counter();
    let accessor = MockContentAccessor::new()
        .with_file("system/lib/libz.so", "ee55")
        .with_file("system/bin/minigzip", "ff66");

    let mut use_case = use_case(
        vec![
            record("system/lib/libz.so", "external/zlib"),
            record("system/bin/minigzip", "external/zlib/contrib"),
        ],
        reader,
        accessor,
    );
    use_case.execute(&request()).unwrap();

    assert_eq!(reads.load(std::sync::atomic::Ordering::SeqCst), 1);
}

#[test]
fn test_progress_is_reported_per_pass() {
    let reporter = MockProgressReporter::new();
    let messages = reporter.messages();
    let accessor = MockContentAccessor::new().with_file("system/bin/toybox", "9f9f");

    let mut use_case = GenerateSbomUseCase::new(
        MockRecordSource::new(vec![record("system/bin/toybox", "external/toybox")]),
        MockMetadataReader::new(),
        accessor,
        reporter,
    );
    use_case.execute(&request()).unwrap();

    let messages = messages.lock().unwrap();
    assert!(messages
        .iter()
        .any(|m| m.contains("Loaded 1 attribution record(s)")));
    assert!(messages.iter().any(|m| m.starts_with("Assembled ")));
}

#[test]
fn test_security_tag_becomes_cpe23_external_ref() {
    let reader = MockMetadataReader::new().with_descriptor(
        "external/bar",
        r#"
name = "bar"

[third_party]
version = "1.0"

[third_party.security]
tag = ["NVD-CPE2.3:cpe:2.3:a:foo:bar:1.0"]
"#,
    );
    let accessor = MockContentAccessor::new().with_file("system/lib/libbar.so", "0a0b");

    let mut use_case = use_case(
        vec![record("system/lib/libbar.so", "external/bar")],
        reader,
        accessor,
    );
    let response = use_case.execute(&request()).unwrap();

    let source = response
        .document
        .packages
        .iter()
        .find(|p| p.id == "SPDXRef-SOURCE-bar")
        .unwrap();
    assert_eq!(source.external_refs.len(), 1);
    assert_eq!(source.external_refs[0].locator, "cpe:2.3:a:foo:bar:1.0");
}

#[test]
fn test_verification_code_invariant_under_record_order() {
    let records = vec![
        record("system/a", "frameworks/a"),
        record("system/b", "frameworks/b"),
        record("system/c", "frameworks/c"),
    ];
    let mut reversed = records.clone();
    reversed.reverse();

    let accessor = || {
        MockContentAccessor::new()
            .with_file("system/a", "1111")
            .with_file("system/b", "2222")
            .with_file("system/c", "3333")
    };

    let mut forward_case = use_case(records, MockMetadataReader::new(), accessor());
    let mut reversed_case = use_case(reversed, MockMetadataReader::new(), accessor());

    let forward = forward_case.execute(&request()).unwrap();
    let reversed = reversed_case.execute(&request()).unwrap();

    let code = |response: &GenerateResponse| {
        response
            .document
            .packages
            .iter()
            .find(|p| p.id == "SPDXRef-PRODUCT")
            .unwrap()
            .verification_code
            .clone()
            .unwrap()
    };
    assert_eq!(code(&forward), code(&reversed));
}

#[test]
fn test_product_package_owns_file_list() {
    let accessor = MockContentAccessor::new()
        .with_file("system/a", "1111")
        .with_file("system/b", "2222");
    let mut use_case = use_case(
        vec![
            record("system/a", "frameworks/a"),
            record("system/b", "frameworks/b"),
        ],
        MockMetadataReader::new(),
        accessor,
    );
    let response = use_case.execute(&request()).unwrap();

    let product = response
        .document
        .packages
        .iter()
        .find(|p| p.id == "SPDXRef-PRODUCT")
        .unwrap();
    assert!(product.files_analyzed);
    assert_eq!(product.file_ids, ["SPDXRef-system-a", "SPDXRef-system-b"]);
    assert!(product.verification_code.is_some());
    assert_eq!(response.document.describes.as_deref(), Some("SPDXRef-PRODUCT"));
}

#[test]
fn test_prebuilt_with_external_sbom_ref() {
    let reader = MockMetadataReader::new().with_descriptor(
        "vendor/widevine",
        r#"
name = "widevine"

[third_party]
version = "17"

[third_party.sbom_ref]
url = "https://example.org/widevine.spdx"
checksum = "SHA1: deadbeef"
element_id = "SPDXRef-PACKAGE-widevine"
"#,
    );
    let accessor = MockContentAccessor::new().with_file("vendor/lib/libwv.so", "abcd");

    let mut record = record("vendor/lib/libwv.so", "vendor/widevine");
    record.is_prebuilt_make_module = true;

    let mut use_case = use_case(vec![record], reader, accessor);
    let response = use_case.execute(&request()).unwrap();
    let doc = &response.document;

    assert_eq!(doc.external_refs.len(), 1);
    assert_eq!(doc.external_refs[0].id, "DocumentRef-UPSTREAM-widevine");
    assert!(doc.relationships.iter().any(|r| {
        r.id1 == "SPDXRef-PREBUILT-widevine"
            && r.kind == RelationshipKind::VariantOf
            && r.id2 == "DocumentRef-UPSTREAM-widevine:SPDXRef-PACKAGE-widevine"
    }));
    assert!(doc.resolves_all_relationships());
}

#[test]
fn test_two_source_files_one_package() {
    let reader = MockMetadataReader::new().with_descriptor(
        "external/zlib",
        r#"
name = "zlib"

[third_party]
version = "1.3.1"
"#,
    );
    let accessor = MockContentAccessor::new()
        .with_file("system/lib/libz.so", "ee55")
        .with_file("system/lib64/libz.so", "ff66");

    let mut use_case = use_case(
        vec![
            record("system/lib/libz.so", "external/zlib"),
            record("system/lib64/libz.so", "external/zlib"),
        ],
        reader,
        accessor,
    );
    let response = use_case.execute(&request()).unwrap();

    // PRODUCT, PLATFORM, SOURCE-zlib, UPSTREAM-zlib - no duplicates
    assert_eq!(response.document.packages.len(), 4);
    assert_eq!(response.document.files.len(), 2);
}

#[test]
fn test_unbundled_mode_emits_single_file_fragment() {
    let accessor = MockContentAccessor::new()
        .with_file("system/app/bundle.apk", "aaaa")
        .with_file("system/app/other.apk", "bbbb");
    let mut use_case = use_case(
        vec![
            record("system/app/bundle.apk", "packages/apps/Bundle"),
            record("system/app/other.apk", "packages/apps/Other"),
        ],
        MockMetadataReader::new(),
        accessor,
    );

    let request = GenerateRequest::new(
        "sbom-metadata.csv",
        "out/product",
        "build-2024.1",
        "ACME",
        "out/product/system/app/bundle.apk.spdx",
    );
    let response = use_case.execute_unbundled(&request).unwrap();
    let doc = &response.document;

    assert_eq!(doc.packages.len(), 1);
    assert_eq!(doc.packages[0].name, "packages/apps/Bundle");
    assert_eq!(doc.files.len(), 1);
    assert_eq!(doc.files[0].name, "system/app/bundle.apk");
    assert_eq!(
        doc.describes.as_deref(),
        Some("SPDXRef-system-app-bundle.apk")
    );
    assert_eq!(doc.relationships.len(), 1);
    assert_eq!(doc.relationships[0].kind, RelationshipKind::GeneratedFrom);
}
