//! Configuration file loading tests

#[cfg(test)]
mod tests {
    use inventory_ops::{Config, ServiceError};
    use std::io::Write;

    #[tokio::test]
    async fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "insights:\n  timeout: 45\n  user_agent: probe/1.0\n  credentials:\n    4:\n      username: rhn-user\n      password: s3cret\nlogging:\n  level: warn\n"
        )
        .unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.insights.timeout, 45);
        assert_eq!(config.insights.user_agent, "probe/1.0");
        assert!(config.insights.credentials.contains_key(&4));
    }

    #[tokio::test]
    async fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(dir.path().join("absent.yaml"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Config(_)));
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[tokio::test]
    async fn test_invalid_credential_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "insights:\n  credentials:\n    1:\n      username: ''\n      password: x\n"
        )
        .unwrap();

        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("Credential 1: Username cannot be empty"));
    }
}
