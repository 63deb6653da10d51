use devmap_pipeline::codec::{RawSourceMap, SourceMapConsumer};
use devmap_pipeline::sourcemaps::flatten_source_map;
use devmap_pipeline::Error;

fn raw_map(sources: &[&str], mappings: &str) -> RawSourceMap {
    let mut map = RawSourceMap::new(Some("out.js".to_string()));
    map.sources = sources.iter().map(|s| Some(s.to_string())).collect();
    map.mappings = mappings.to_string();
    map
}

fn sources_of(map: &RawSourceMap) -> Vec<&str> {
    map.sources.iter().filter_map(|s| s.as_deref()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_preserve_a_consistent_map() {
        let mut input = raw_map(&["a.ts", "b.ts"], "AAAA,EAAE;ACAA,GAAG");
        input.sources_content = Some(vec![Some("a".to_string()), Some("b".to_string())]);

        let output = flatten_source_map(&input).unwrap();
        assert_eq!(output.version, 3);
        assert_eq!(output.file.as_deref(), Some("out.js"));
        assert_eq!(sources_of(&output), vec!["a.ts", "b.ts"]);
        assert_eq!(
            output.sources_content,
            Some(vec![Some("a".to_string()), Some("b".to_string())])
        );
        assert_eq!(output.mappings, input.mappings);

        let before = SourceMapConsumer::new(&input).unwrap();
        let after = SourceMapConsumer::new(&output).unwrap();
        for mapping in before.iter() {
            let (line, column) = (mapping.generated.line, mapping.generated.column);
            assert_eq!(
                before.original_position_for(line, column),
                after.original_position_for(line, column)
            );
        }
    }

    #[test]
    fn should_drop_records_without_a_source() {
        let output = flatten_source_map(&raw_map(&["a.ts"], "AAAA,C;A")).unwrap();
        assert_eq!(output.mappings, "AAAA");
    }

    #[test]
    fn should_drop_generated_only_records_sharing_a_position() {
        let output = flatten_source_map(&raw_map(&["a.ts"], "A,AAAA")).unwrap();
        assert_eq!(output.mappings, "AAAA");
    }

    #[test]
    fn should_canonicalize_the_source_of_colliding_records() {
        // two records at 0:0, pointing at a.ts and b.ts
        let output = flatten_source_map(&raw_map(&["a.ts", "b.ts"], "AAAA,ACAA")).unwrap();
        assert_eq!(sources_of(&output), vec!["a.ts", "b.ts"]);
        assert_eq!(output.mappings, "AAAA");
    }

    #[test]
    fn should_fold_the_source_root_into_names() {
        let mut input = raw_map(&["./a.ts"], "AAAA");
        input.source_root = Some("src/".to_string());

        let output = flatten_source_map(&input).unwrap();
        assert_eq!(sources_of(&output), vec!["src/a.ts"]);
        assert_eq!(output.source_root, None);
    }

    #[test]
    fn should_produce_an_empty_map_from_no_mappings() {
        let output = flatten_source_map(&raw_map(&[], "")).unwrap();
        assert!(output.sources.is_empty());
        assert_eq!(output.sources_content, None);
        assert_eq!(output.mappings, "");
    }

    #[test]
    fn should_keep_sources_and_content_when_nothing_resolves() {
        let mut input = raw_map(&["a.ts"], "A,C");
        input.sources_content = Some(vec![Some("x".to_string())]);

        let output = flatten_source_map(&input).unwrap();
        assert_eq!(sources_of(&output), vec!["a.ts"]);
        assert_eq!(output.sources_content, Some(vec![Some("x".to_string())]));
        assert_eq!(output.mappings, "");
    }

    #[test]
    fn should_not_carry_names_or_ignore_list() {
        let mut input = raw_map(&["a.ts"], "AAAAA");
        input.names = vec!["foo".to_string()];
        input.x_google_ignore_list = Some(vec![0]);

        let output = flatten_source_map(&input).unwrap();
        assert!(output.names.is_empty());
        assert_eq!(output.mappings, "AAAA");
        assert_eq!(output.x_google_ignore_list, None);
    }

    #[test]
    fn should_accept_a_string_version() {
        let input = RawSourceMap::from_json(
            r#"{"version":"3","sources":["a.ts"],"sourcesContent":[null],"mappings":"AAAA"}"#,
        )
        .unwrap();
        let output = flatten_source_map(&input).unwrap();
        assert_eq!(output.mappings, "AAAA");
        assert_eq!(output.sources_content, None);
    }

    #[test]
    fn should_reject_malformed_mappings() {
        let result = flatten_source_map(&raw_map(&["a.ts"], "AA!A"));
        assert!(matches!(result, Err(Error::SourceMap(_))));
    }
}
