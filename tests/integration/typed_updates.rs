//! Dedicated updates: kubernetes, minimum CPUs, and failure handling

use super::fixtures::{client, expected_post, legacy_client};
use dockset::settings::lookup_map_at;
use dockset::{MemoryTransport, SettingPath, SettingsClient, SettingsError, TransportError};

#[tokio::test]
async fn test_enable_kubernetes() {
    let client = client();
    assert!(client.set_kubernetes_enabled(true).await.unwrap());
    assert_eq!(client.transport().writes().len(), 1);
    assert_eq!(
        client.transport().last_written().unwrap(),
        expected_post(
            r#""kubernetes":{"enabled":false,"#,
            r#""kubernetes":{"enabled":true,"#
        )
    );
}

#[tokio::test]
async fn test_enable_kubernetes_old_format() {
    let client = legacy_client();
    assert!(client.set_kubernetes_enabled(true).await.unwrap());
    assert_eq!(
        client.transport().last_written().unwrap(),
        expected_post(
            r#""kubernetes":{"enabled":false,"#,
            r#""kubernetes":{"enabled":true,"#
        )
    );
}

#[tokio::test]
async fn test_enable_kubernetes_twice_is_noop() {
    let client = client();
    let mut settings = client.settings().await.unwrap();
    assert!(dockset::settings::set_kubernetes_enabled(&mut settings, true).unwrap());
    assert!(!dockset::settings::set_kubernetes_enabled(&mut settings, true).unwrap());
    assert_eq!(settings["vm"]["kubernetes"]["stackOrchestrator"], serde_json::json!(false));
    assert_eq!(
        settings["vm"]["kubernetes"]["showSystemContainers"],
        serde_json::json!(false)
    );
}

#[tokio::test]
async fn test_min_cpus() {
    let client = client();
    assert!(client.ensure_min_cpus(4).await.unwrap());
    assert_eq!(
        client.transport().last_written().unwrap(),
        expected_post(r#""cpus":2"#, r#""cpus":4"#)
    );
}

#[tokio::test]
async fn test_max_cpus() {
    let client = client();
    let err = client.ensure_min_cpus(40).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"setting value "vm.resources.cpus": 40 greater than max allowed (8)"#
    );
    assert!(client.transport().writes().is_empty());
}

#[tokio::test]
async fn test_lookup_map() {
    let client = client();
    let settings = client.settings().await.unwrap();
    let path = SettingPath::parse("vm.kubernetes.honk").unwrap();
    let err = lookup_map_at(&settings, &path).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"nothing found at DockerDesktop setting "vm.kubernetes.honk""#
    );
}

#[tokio::test]
async fn test_fetch_failure_aborts_without_write() {
    let client = SettingsClient::new(MemoryTransport::unavailable("connection refused"));
    let err = client
        .set_setting_value("vm.resources.cpus", "4")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SettingsError::Transport(TransportError::Unavailable(_))
    ));
    assert!(client.transport().writes().is_empty());
}

#[tokio::test]
async fn test_malformed_document() {
    let client = SettingsClient::new(MemoryTransport::new("[1, 2, 3]"));
    let err = client.settings().await.unwrap_err();
    assert!(matches!(err, SettingsError::Decode(_)));
}
