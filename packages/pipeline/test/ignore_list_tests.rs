use devmap_pipeline::codec::RawSourceMap;
use devmap_pipeline::logging::Logger;
use devmap_pipeline::sourcemaps::{apply_ignore_list_option, apply_sourcemap_ignore_list};
use devmap_pipeline::testing::RecordingLogger;
use devmap_pipeline::IgnoreListOption;
use serde_json::{json, Value};
use std::sync::Mutex;

fn map_with_sources(sources: &[Option<&str>]) -> RawSourceMap {
    let mut map = RawSourceMap::new(None);
    map.sources = sources.iter().map(|s| s.map(str::to_string)).collect();
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_flag_every_source_when_always_true() {
        let mut map = map_with_sources(&[Some("a.ts"), Some("b.ts"), Some("c.ts")]);
        apply_sourcemap_ignore_list(&mut map, "/proj/dist/a.js.map", |_: &str, _: &str| true, None);
        assert_eq!(map.x_google_ignore_list, Some(vec![0, 1, 2]));

        // a second pass must not duplicate anything
        apply_sourcemap_ignore_list(&mut map, "/proj/dist/a.js.map", |_: &str, _: &str| true, None);
        assert_eq!(map.x_google_ignore_list, Some(vec![0, 1, 2]));
    }

    #[test]
    fn should_not_add_the_field_when_always_false() {
        let mut map = map_with_sources(&[Some("a.ts"), Some("b.ts")]);
        apply_sourcemap_ignore_list(&mut map, "/proj/dist/a.js.map", |_: &str, _: &str| false, None);
        assert_eq!(map.x_google_ignore_list, None);
        assert!(!map.to_json().unwrap().contains("x_google_ignoreList"));
    }

    #[test]
    fn should_preserve_existing_entries() {
        let mut map = map_with_sources(&[Some("a.ts"), Some("node_modules/b.js"), Some("c.ts")]);
        map.x_google_ignore_list = Some(vec![2]);

        apply_sourcemap_ignore_list(
            &mut map,
            "/proj/dist/a.js.map",
            |source: &str, _: &str| source.contains("node_modules"),
            None,
        );
        assert_eq!(map.x_google_ignore_list, Some(vec![2, 1]));
    }

    #[test]
    fn should_keep_an_existing_empty_list() {
        let mut map = map_with_sources(&[Some("a.ts")]);
        map.x_google_ignore_list = Some(Vec::new());
        apply_sourcemap_ignore_list(&mut map, "/proj/a.js.map", |_: &str, _: &str| false, None);
        assert_eq!(map.x_google_ignore_list, Some(Vec::new()));
    }

    #[test]
    fn should_pass_absolute_paths_to_the_classifier() {
        let seen = Mutex::new(Vec::new());
        let mut map = map_with_sources(&[
            Some("../src/a.ts"),
            Some("/abs/b.ts"),
            None,
            Some(""),
        ]);

        apply_sourcemap_ignore_list(
            &mut map,
            "/proj/dist/a.js.map",
            |source: &str, map_path: &str| {
                seen.lock()
                    .unwrap()
                    .push((source.to_string(), map_path.to_string()));
                false
            },
            None,
        );

        assert_eq!(
            seen.into_inner().unwrap(),
            vec![
                ("/proj/src/a.ts".to_string(), "/proj/dist/a.js.map".to_string()),
                ("/abs/b.ts".to_string(), "/proj/dist/a.js.map".to_string()),
            ]
        );
    }

    #[test]
    fn should_warn_about_non_boolean_results_and_use_truthiness() {
        let mut map = map_with_sources(&[Some("a.ts"), Some("b.ts"), Some("c.ts")]);
        let logger = RecordingLogger::new();

        apply_sourcemap_ignore_list(
            &mut map,
            "/proj/a.js.map",
            |source: &str, _: &str| -> Value {
                match source {
                    "/proj/a.ts" => json!("yes"),
                    "/proj/b.ts" => json!(0),
                    _ => json!(true),
                }
            },
            Some(&logger as &dyn Logger),
        );

        assert_eq!(map.x_google_ignore_list, Some(vec![0, 2]));
        assert_eq!(
            logger.warnings(),
            vec![
                "sourcemapIgnoreList function must return a boolean.",
                "sourcemapIgnoreList function must return a boolean.",
            ]
        );
    }

    #[test]
    fn should_not_warn_for_boolean_results() {
        let mut map = map_with_sources(&[Some("a.ts")]);
        let logger = RecordingLogger::new();
        apply_sourcemap_ignore_list(
            &mut map,
            "/proj/a.js.map",
            |_: &str, _: &str| true,
            Some(&logger as &dyn Logger),
        );
        assert!(logger.warnings().is_empty());
    }

    #[test]
    fn should_apply_the_default_node_modules_policy() {
        let mut map = map_with_sources(&[Some("src/a.ts"), Some("../node_modules/vue/index.js")]);
        apply_ignore_list_option(&mut map, "/proj/dist/a.js", &IgnoreListOption::default(), None);
        assert_eq!(map.x_google_ignore_list, Some(vec![1]));
    }

    #[test]
    fn should_leave_the_map_alone_when_disabled() {
        let mut map = map_with_sources(&[Some("../node_modules/vue/index.js")]);
        apply_ignore_list_option(&mut map, "/proj/dist/a.js", &IgnoreListOption::Disabled, None);
        assert_eq!(map.x_google_ignore_list, None);
    }

    #[test]
    fn should_apply_custom_classifiers() {
        let mut map = map_with_sources(&[Some("a.ts"), Some("generated/b.ts")]);
        let option = IgnoreListOption::custom(|source: &str, _: &str| source.contains("/generated/"));
        apply_ignore_list_option(&mut map, "/proj/a.js", &option, None);
        assert_eq!(map.x_google_ignore_list, Some(vec![1]));
    }

    #[test]
    fn should_report_custom_classifiers_returning_non_booleans() {
        let mut map = map_with_sources(&[Some("a.ts")]);
        let logger = RecordingLogger::new();
        let option = IgnoreListOption::custom(|_: &str, _: &str| None::<bool>);
        apply_ignore_list_option(&mut map, "/proj/a.js", &option, Some(&logger as &dyn Logger));
        assert_eq!(map.x_google_ignore_list, None);
        assert_eq!(logger.warnings().len(), 1);
    }
}
