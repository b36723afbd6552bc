//! Local component source over a temporary checkout.

use std::fs;
use std::path::Path;

use tokenbridge_analysis::source::{ComponentSource, LocalComponentSource};
use tokenbridge_core::config::ScanConfig;
use tokenbridge_core::errors::{SourceError, TransformError};

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn checkout() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "src/components/Button/Button.tsx", "<button className=\"rounded-lg\" />");
    write(root, "src/components/Button/index.ts", "export * from './Button';");
    write(root, "src/components/Button/Button.module.css", ".b { color: #25C9D0; }");
    write(root, "src/components/Button/parts/Icon.jsx", "<i style={{ color: '#25C9D0' }} />");
    write(root, "src/components/Button/node_modules/dep/index.js", "module.exports = 1;");
    write(root, "src/components/Button/types.d.ts", "export type A = string;");
    write(root, "src/components/Card/Card.tsx", "<div />");
    write(root, "src/components/Card/Card.stories.tsx", "export default {};");
    write(root, "src/components/README.md", "# components");
    dir
}

#[test]
fn test_lists_component_directories() {
    let dir = checkout();
    let source = LocalComponentSource::new(dir.path(), &ScanConfig::default()).unwrap();
    assert_eq!(source.list_components().unwrap(), vec!["Button", "Card"]);
}

#[test]
fn test_reads_source_files_recursively() {
    let dir = checkout();
    let source = LocalComponentSource::new(dir.path(), &ScanConfig::default()).unwrap();
    let batch = source.component_files("Button").unwrap();
    assert!(batch.is_clean());
    let paths: Vec<_> = batch.data.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["Button.tsx", "index.ts", "parts/Icon.jsx"]);
    assert_eq!(batch.data[2].name, "Icon.jsx");
    assert_eq!(batch.data[0].content, "<button className=\"rounded-lg\" />");
}

#[test]
fn test_gitignore_and_extra_patterns() {
    let dir = checkout();
    write(dir.path(), ".gitignore", "parts/\n");
    let config = ScanConfig {
        extra_ignore: vec!["*.stories.tsx".to_string()],
        ..Default::default()
    };
    let source = LocalComponentSource::new(dir.path(), &config).unwrap();

    let button: Vec<_> = source
        .component_files("Button")
        .unwrap()
        .data
        .into_iter()
        .map(|f| f.path)
        .collect();
    assert_eq!(button, vec!["Button.tsx", "index.ts"]);

    let card: Vec<_> = source
        .component_files("Card")
        .unwrap()
        .data
        .into_iter()
        .map(|f| f.path)
        .collect();
    assert_eq!(card, vec!["Card.tsx"]);
}

#[test]
fn test_oversized_and_binary_files_are_collected_errors() {
    let dir = checkout();
    write(dir.path(), "src/components/Button/Big.tsx", &"x".repeat(64));
    fs::write(
        dir.path().join("src/components/Button/Bad.tsx"),
        [0xff_u8, 0xfe, 0x00],
    )
    .unwrap();
    let config = ScanConfig {
        max_file_size: Some(48),
        ..Default::default()
    };
    let source = LocalComponentSource::new(dir.path(), &config).unwrap();
    let batch = source.component_files("Button").unwrap();

    assert_eq!(batch.error_count(), 2);
    assert!(batch.errors.iter().any(|e| matches!(
        e,
        TransformError::Source(SourceError::FileTooLarge { size: 64, max: 48, .. })
    )));
    assert!(batch
        .errors
        .iter()
        .any(|e| matches!(e, TransformError::Source(SourceError::NotUtf8 { .. }))));
    assert!(batch.data.iter().any(|f| f.path == "Button.tsx"));
}

#[test]
fn test_custom_pattern() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "packages/ui/Tabs/src/Tabs.tsx", "<div />");
    write(dir.path(), "packages/ui/Tabs/package.json", "{}");
    let config = ScanConfig {
        component_pattern: Some("packages/ui/{componentName}/src".to_string()),
        ..Default::default()
    };
    let source = LocalComponentSource::new(dir.path(), &config).unwrap();
    assert_eq!(source.list_components().unwrap(), vec!["Tabs"]);
    let files = source.component_files("Tabs").unwrap().data;
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, "Tabs.tsx");
}

#[test]
fn test_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let source = LocalComponentSource::new(dir.path(), &ScanConfig::default()).unwrap();
    assert!(matches!(
        source.list_components(),
        Err(SourceError::ComponentDirMissing { .. })
    ));
    assert!(matches!(
        source.component_files("Nope"),
        Err(SourceError::ComponentDirMissing { .. })
    ));
}
