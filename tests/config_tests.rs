#[cfg(test)]
pub mod config_tests {
    use std::collections::HashMap;
    use std::net::SocketAddr;
    use std::path::PathBuf;

    use wasteloop::common::ConfigError;
    use wasteloop::config::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.bind_addr, default_bind_addr());
        assert_eq!(config.bind_addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
    }

    #[test]
    fn test_values_are_read_and_trimmed() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("BIND_ADDR", " 127.0.0.1:3000 "),
            ("CATALOG_PATH", "/etc/wasteloop/catalog.json"),
            ("STATIC_DIR", "/srv/static"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/etc/wasteloop/catalog.json"))
        );
        assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
    }

    #[test]
    fn test_blank_catalog_path_means_builtin() {
        let config = ServerConfig::from_lookup(lookup(&[("CATALOG_PATH", "  ")])).unwrap();
        assert_eq!(config.catalog_path, None);
    }

    #[test]
    fn test_malformed_bind_addr_is_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
        match err {
            ConfigError::InvalidVar { name, value } => {
                assert_eq!(name, "BIND_ADDR");
                assert_eq!(value, "localhost");
            }
        }
    }
}
