#[cfg(test)]
mod integration_tests {
    use std::path::Path;

    use crate::config::candidate_id::ids;
    use crate::config::consts::HIGHEST_PRECEDENCE;
    use crate::config::{load_and_validate_config, load_and_validate_index, CandidateId};
    use crate::errors::OrderingError;
    use crate::ordering::{order_candidates, CandidateGraph};
    use crate::traits::MetadataSource;

    /// Test that the web index loads and keeps declared attributes
    #[test]
    fn test_web_index_yaml_loading() {
        let index = load_and_validate_index("configs/web-index.yaml").unwrap();

        assert_eq!(index.len(), 9);
        assert_eq!(
            index.order(&"app.core.PropertySourcesConfig".into()),
            HIGHEST_PRECEDENCE
        );
        assert_eq!(
            index.deprecated_replacements(&"app.web.LegacyJacksonConfig".into()),
            ids(["app.web.JsonConfig"])
        );
    }

    /// Test that a run file merges its indexes with later files winning
    #[test]
    fn test_web_run_yaml_loading() {
        let config = load_and_validate_config("configs/web-run.yaml").unwrap();
        let index = config.load_indexes(Path::new("configs")).unwrap();

        assert_eq!(config.candidates.len(), 8);
        assert_eq!(index.order(&"app.ops.MetricsConfig".into()), 100);
        assert_eq!(
            index.after(&"app.ops.MetricsConfig".into()),
            ids(["app.web.ServerConfig"])
        );
    }

    /// Order the full web stack end to end
    #[test]
    fn test_web_run_ordering() {
        let config = load_and_validate_config("configs/web-run.yaml").unwrap();
        let index = config.load_indexes(Path::new("configs")).unwrap();

        let ordered = order_candidates(&config.candidates, &index).unwrap();

        assert_eq!(
            ordered,
            ids([
                "app.core.PropertySourcesConfig",
                "app.cache.CacheConfig",
                "app.data.DataSourceConfig",
                "app.security.SecurityConfig",
                "app.web.JsonConfig",
                "app.web.HttpMessageConvertersConfig",
                "app.web.ServerConfig",
                "app.ops.MetricsConfig",
            ])
        );
        assert!(!ordered.contains(&CandidateId::from("app.web.LegacyJacksonConfig")));
    }

    /// The unknown cache candidate is ordered with defaults, not dropped
    #[test]
    fn test_web_run_unknown_candidate_is_kept() {
        let config = load_and_validate_config("configs/web-run.yaml").unwrap();
        let index = config.load_indexes(Path::new("configs")).unwrap();

        let graph = CandidateGraph::build(&config.candidates, &index).unwrap();

        let cache = graph.record("app.cache.CacheConfig").unwrap();
        assert!(!cache.available);
        assert!(graph.is_primary("app.web.JsonConfig"));
        assert!(graph.is_deprecated("app.web.LegacyJacksonConfig"));
    }

    /// Test that a cyclic TOML index fails ordering with both ids named
    #[test]
    fn test_cycle_run_fails() {
        let config = load_and_validate_config("configs/cycle-run.yaml").unwrap();
        let index = config.load_indexes(Path::new("configs")).unwrap();

        let err = order_candidates(&config.candidates, &index).unwrap_err();

        assert_eq!(
            err,
            OrderingError::cycle("app.b.BetaConfig", "app.a.AlphaConfig")
        );
    }
}
