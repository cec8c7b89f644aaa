#[cfg(test)]
mod tests {
    use std::path::Path;

    use test_case::test_case;

    use pcb_seg::geometry::primitives::Point;
    use seg_probe::config::ProbeConfig;
    use seg_probe::io;
    use seg_probe::io::ext_repr::ExtQueryBatch;
    use seg_probe::io::report::ProbeReport;
    use seg_probe::io::svg_export::batch_to_svg;
    use seg_probe::probe;

    #[test_case("assets/crossings.json"; "crossings")]
    #[test_case("assets/tracks.json"; "tracks")]
    fn parallel_and_sequential_runs_agree(batch_path: &str) {
        let batch = io::read_query_batch(Path::new(batch_path)).unwrap();
        let sequential = ProbeConfig {
            parallel: false,
            ..ProbeConfig::default()
        };
        let parallel = ProbeConfig {
            parallel: true,
            ..ProbeConfig::default()
        };
        let r_seq = probe::run(&batch, sequential);
        let r_par = probe::run(&batch, parallel);

        assert_eq!(r_seq.results, r_par.results);
        assert_eq!(r_seq.results.len(), batch.queries.len());
        for (q, r) in batch.queries.iter().zip(&r_seq.results) {
            assert_eq!(q.id, r.id);
            assert_eq!(r.collide, r.violation_at.is_some());
            if r.intersection.is_some() {
                assert!(r.collide);
            }
        }
    }

    #[test]
    fn crossings_report() {
        let batch = io::read_query_batch(Path::new("assets/crossings.json")).unwrap();
        let report = probe::run(&batch, ProbeConfig::default());
        let r = &report.results;

        assert_eq!(r[0].intersection, Some(Point::new(5, 0)));
        assert_eq!(r[0].violation_at, Some(Point::new(5, 0)));
        assert_eq!(r[0].side_of_b, (-1, 1));

        assert_eq!(r[1].intersection, None);
        assert_eq!(r[1].line_intersection, Some(Point::new(20, 0)));
        assert_eq!(r[1].distance, 10);
        assert!(!r[1].collide);

        assert_eq!(r[2].intersection, Some(Point::new(10, 0)));

        assert!(r[3].collide);
        assert_eq!(r[3].clearance, 5);
        assert_eq!(r[3].violation_at, Some(Point::new(0, 0)));
        assert!(!r[4].collide);

        assert_eq!((r[5].sq_distance, r[5].distance), (25, 5));
        assert_eq!(r[5].side_of_b, (0, 0));

        assert_eq!(r[6].intersection, None);
        assert_eq!(r[6].sq_distance, 0);
        assert!(r[6].collide && r[6].collinear);
        assert_eq!(r[6].violation_at, Some(Point::new(5, 0)));

        assert_eq!(report.n_colliding, 4);
    }

    #[test]
    fn config_file_ignores_touching_endpoints() {
        let config = io::read_config(Path::new("assets/config.json")).unwrap();
        assert!(config.ignore_endpoints);
        assert!(!config.parallel);
        assert_eq!(config.svg_draw_options.stroke_width, 500.0);

        let batch = io::read_query_batch(Path::new("assets/crossings.json")).unwrap();
        let report = probe::run(&batch, config);
        assert_eq!(report.results[2].intersection, None);
        assert!(report.results[2].collide);
    }

    #[test]
    fn tracks_clearances() {
        let batch = io::read_query_batch(Path::new("assets/tracks.json")).unwrap();
        let report = probe::run(&batch, ProbeConfig::default());
        let verdicts = report.results.iter().map(|r| r.collide).collect::<Vec<_>>();
        assert_eq!(verdicts, vec![true, false, true, true, true]);
        assert_eq!(report.results[2].intersection, Some(Point::new(50_000, 50_000)));
        assert_eq!(report.results[3].distance, 20_000);
        assert_eq!(report.results[4].distance, 1);
    }

    #[test]
    fn report_and_svg_are_written() {
        let batch = io::read_query_batch(Path::new("assets/tracks.json")).unwrap();
        let config = ProbeConfig::default();
        let report = probe::run(&batch, config);

        let folder = std::env::temp_dir().join("seg_probe_test_output");
        std::fs::create_dir_all(&folder).unwrap();

        let json_path = folder.join("report_tracks.json");
        io::write_json(&report, &json_path).unwrap();
        let reread: ProbeReport = serde_json::from_reader(std::fs::File::open(&json_path).unwrap()).unwrap();
        assert_eq!(reread.results, report.results);

        let document = batch_to_svg(&batch, &report.results, config.svg_draw_options);
        let svg_string = document.to_string();
        assert!(svg_string.contains("query_4"));
        assert!(svg_string.contains("#D00000"));
        io::write_svg(&document, &folder.join("report_tracks.svg")).unwrap();
    }

    #[test]
    fn queries_at_the_edge_of_the_coordinate_range() {
        let json = r#"{
            "name": "board_edge",
            "queries": [
                { "id": 0, "a": { "start": [-2147483648, 0], "end": [2147483647, 0] }, "b": { "start": [0, -5], "end": [0, 5] } },
                { "id": 1, "a": { "start": [-2147483648, -2147483648], "end": [-2147483648, -2147483648] }, "b": { "start": [2147483647, 2147483647], "end": [2147483647, 2147483647] }, "clearance": 2147483647 }
            ]
        }"#;
        let batch: ExtQueryBatch = serde_json::from_str(json).unwrap();
        let report = probe::run(&batch, ProbeConfig::default());
        let r = &report.results;

        assert_eq!(r[0].intersection, Some(Point::new(0, 0)));
        assert!(r[0].collide);
        assert_eq!(r[0].side_of_b, (-1, 1));

        let span = 4_294_967_295_i128;
        assert_eq!(r[1].sq_distance, 2 * span * span);
        assert_eq!(r[1].distance, 6_074_000_998);
        assert!(!r[1].collide);

        let reread: ProbeReport = serde_json::from_str(&serde_json::to_string(&report).unwrap()).unwrap();
        assert_eq!(reread.results, report.results);
    }

    #[test]
    fn missing_files_are_reported() {
        assert!(io::read_query_batch(Path::new("assets/does_not_exist.json")).is_err());
        assert!(io::read_config(Path::new("assets/crossings.json")).is_err());
    }
}
