use super::*;

#[test]
fn parse_port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_accepts_valid_numbers() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert_eq!(parse_port(Some(" 4000 ")).unwrap(), 4000);
}

#[test]
fn parse_port_rejects_garbage_and_overflow() {
    assert!(matches!(parse_port(Some("abc")), Err(ConfigError::InvalidPort(v)) if v == "abc"));
    assert!(matches!(parse_port(Some("70000")), Err(ConfigError::InvalidPort(_))));
}

#[test]
fn resolve_docs_dir_prefers_explicit_value() {
    assert_eq!(resolve_docs_dir(Some("/srv/docs")), PathBuf::from("/srv/docs"));
}

#[test]
fn resolve_docs_dir_defaults_to_workspace_content() {
    let dir = resolve_docs_dir(None);
    assert!(dir.ends_with("content"));
    assert_eq!(resolve_docs_dir(Some("")), dir);
}

#[test]
fn ensure_dir_reports_missing_directory() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(ensure_dir(tmp.path()).is_ok());

    let missing = tmp.path().join("nope");
    let err = ensure_dir(&missing).unwrap_err();
    assert!(matches!(&err, ConfigError::MissingDocsDir(p) if p == &missing));
    assert!(err.to_string().starts_with("content directory not found: "));
}

#[test]
fn bind_addr_joins_host_and_port() {
    let cfg = ServerConfig { host: "127.0.0.1".to_owned(), port: 3001, docs_dir: PathBuf::from("content") };
    assert_eq!(cfg.bind_addr(), "127.0.0.1:3001");
}
