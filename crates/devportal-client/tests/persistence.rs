//! File-backed cache and configuration loading.

use std::time::Duration;

use devportal_client::{ClientError, MemoCache, NetworkConfig, PersistentCache};
use devportal_model::FlowNetwork;

#[test]
fn persistent_cache_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache").join("avatars.json");

    let mut cache: PersistentCache<String, String> =
        PersistentCache::open(&path, 10, Duration::from_secs(3600));
    assert!(cache.is_empty());
    cache.set("flowdev".to_string(), "https://avatars.example/flowdev.png".to_string());
    cache.set("alice".to_string(), "https://avatars.example/alice.png".to_string());
    cache.save().unwrap();

    let mut reopened: PersistentCache<String, String> =
        PersistentCache::open(&path, 10, Duration::from_secs(3600));
    assert_eq!(reopened.len(), 2);
    assert_eq!(
        reopened.get(&"flowdev".to_string()).as_deref(),
        Some("https://avatars.example/flowdev.png")
    );
}

#[test]
fn corrupt_cache_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("avatars.json");
    std::fs::write(&path, "not json").unwrap();

    let cache: PersistentCache<String, String> =
        PersistentCache::open(&path, 10, Duration::from_secs(3600));
    assert!(cache.is_empty());
    cache.save().unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn config_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("devportal.toml");
    std::fs::write(
        &path,
        "access_node = \"http://localhost:8888\"\n\n[contracts]\nGoldStar = \"0x0123456789abcdef\"\n",
    )
    .unwrap();

    let config = NetworkConfig::load(&path, FlowNetwork::Testnet).unwrap();
    assert_eq!(config.network, FlowNetwork::Testnet);
    assert_eq!(config.access_node, "http://localhost:8888");
    assert_eq!(config.contract_address("GoldStar").unwrap(), "0x0123456789abcdef");
}

#[test]
fn config_rejects_unknown_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("devportal.toml");
    std::fs::write(&path, "acess_node = \"typo\"\n").unwrap();

    let err = NetworkConfig::load(&path, FlowNetwork::Testnet).unwrap_err();
    assert!(matches!(err, ClientError::Config(_)));
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = NetworkConfig::load(&dir.path().join("absent.toml"), FlowNetwork::Mainnet)
        .unwrap_err();
    assert!(matches!(err, ClientError::Io(_)));
}
