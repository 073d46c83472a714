use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_vivace_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("VIVACE_CONFIG_PATH", "/tmp/vivace-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/vivace-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("vivace")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("vivace")
            .join("config.toml")
    );
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[catalog]
path = "/tmp/elsewhere.json"

[search]
instance = "https://invidious.example"
timeout_secs = 3

[artwork]
enabled = false
columns = 40
width_ratio = 1.5

[ui]
prompt = "> "
refresh_ms = 250
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("VIVACE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("VIVACE__SEARCH__TIMEOUT_SECS");

    let s = Settings::load().unwrap();
    assert_eq!(s.catalog.path, "/tmp/elsewhere.json");
    assert_eq!(s.search.instance, "https://invidious.example");
    assert_eq!(s.search.timeout_secs, 3);
    assert!(!s.artwork.enabled);
    assert_eq!(s.artwork.columns, 40);
    assert_eq!(s.artwork.width_ratio, 1.5);
    assert_eq!(s.ui.prompt, "> ");
    assert_eq!(s.ui.refresh_ms, 250);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[search]
timeout_secs = 3
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("VIVACE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("VIVACE__SEARCH__TIMEOUT_SECS", "30");

    let s = Settings::load().unwrap();
    assert_eq!(s.search.timeout_secs, 30);
}

#[test]
fn validate_rejects_degenerate_values() {
    let mut s = Settings::default();
    assert!(s.validate().is_ok());

    s.artwork.columns = 0;
    assert!(s.validate().is_err());

    s = Settings::default();
    s.artwork.width_ratio = 0.0;
    assert!(s.validate().is_err());

    s = Settings::default();
    s.ui.refresh_ms = 0;
    assert!(s.validate().is_err());

    s = Settings::default();
    s.search.timeout_secs = 0;
    assert!(s.validate().is_err());
}
