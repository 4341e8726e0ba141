use seq::{Error, Field, SequenceParams, SequenceSpec, sequence_to_string, write_sequence};

fn seq_default(tokens: &[&str]) -> seq::Result<String> {
    sequence_to_string(tokens, &SequenceParams::default())
}

fn lines(out: &str) -> Vec<&str> {
    out.strip_suffix('\n')
        .expect("output must end with a newline")
        .split('\n')
        .collect()
}

#[test]
fn test_single_argument_defaults() {
    let out = seq_default(&["5"]).unwrap();
    assert_eq!(out, "1\n2\n3\n4\n5\n");
}

#[test]
fn test_explicit_range() {
    let out = seq_default(&["2", "6"]).unwrap();
    assert_eq!(lines(&out), vec!["2", "3", "4", "5", "6"]);
}

#[test]
fn test_explicit_step_excludes_overshoot() {
    let out = seq_default(&["1", "2", "10"]).unwrap();
    assert_eq!(lines(&out), vec!["1", "3", "5", "7", "9"]);
}

#[test]
fn test_fractional_step_infers_precision() {
    let out = seq_default(&["1", "0.5", "3"]).unwrap();
    assert_eq!(lines(&out), vec!["1.0", "1.5", "2.0", "2.5", "3.0"]);

    let out = seq_default(&["0", "0.25", "0.5"]).unwrap();
    assert_eq!(lines(&out), vec!["0.00", "0.25", "0.50"]);
}

#[test]
fn test_zero_step_writes_nothing() {
    let mut sink = Vec::new();
    let result = write_sequence(&mut sink, &["1", "0", "5"], &SequenceParams::default());
    assert!(matches!(result, Err(Error::ZeroStep)));
    assert!(sink.is_empty());
}

#[test]
fn test_equal_width_pads_with_zeros() {
    let params = SequenceParams {
        equal_width: true,
        ..SequenceParams::default()
    };
    let out = sequence_to_string(&["100"], &params).unwrap();
    let values = lines(&out);
    assert_eq!(values.len(), 100);
    assert_eq!(values[0], "001");
    assert_eq!(values[41], "042");
    assert_eq!(values[99], "100");
    assert!(values.iter().all(|v| v.len() == 3));
}

#[test]
fn test_equal_width_with_fractional_step() {
    let params = SequenceParams {
        equal_width: true,
        ..SequenceParams::default()
    };
    let out = sequence_to_string(&["8", "0.5", "10"], &params).unwrap();
    assert_eq!(lines(&out), vec!["08.0", "08.5", "09.0", "09.5", "10.0"]);
}

#[test]
fn test_descending_request_prints_only_newline() {
    assert_eq!(seq_default(&["5", "1"]).unwrap(), "\n");
    assert_eq!(seq_default(&["5", "-1", "1"]).unwrap(), "\n");
}

#[test]
fn test_count_matches_closed_form() {
    let cases: [(f64, f64, f64); 6] = [
        (1.0, 1.0, 10.0),
        (0.0, 3.0, 20.0),
        (-7.0, 2.0, 7.0),
        (2.5, 0.5, 9.0),
        (0.0, 0.1, 1.0),
        (10.0, 4.0, 10.0),
    ];
    for (start, step, end) in cases {
        let tokens = [start.to_string(), step.to_string(), end.to_string()];
        let spec = SequenceSpec::from_args(&tokens, &SequenceParams::default()).unwrap();
        let expected = ((end - start) / step + 1e-9).floor() as usize + 1;
        assert_eq!(
            spec.values().count(),
            expected,
            "start={} step={} end={}",
            start,
            step,
            end
        );
    }
}

#[test]
fn test_separator_placement() {
    let params = SequenceParams {
        separator: " -- ".to_string(),
        ..SequenceParams::default()
    };
    let out = sequence_to_string(&["3"], &params).unwrap();
    assert_eq!(out, "1 -- 2 -- 3\n");

    let out = sequence_to_string(&["9", "3"], &params).unwrap();
    assert_eq!(out, "\n");
}

#[test]
fn test_trailing_newline_is_independent_of_separator() {
    let params = SequenceParams {
        separator: "\n".to_string(),
        ..SequenceParams::default()
    };
    let out = sequence_to_string(&["2"], &params).unwrap();
    assert_eq!(out, "1\n2\n");
    assert!(!out.ends_with("\n\n"));
}

#[test]
fn test_argument_count_errors() {
    let none: [&str; 0] = [];
    assert!(matches!(
        seq_default(&none),
        Err(Error::ArgumentCount { count: 0 })
    ));
    assert!(matches!(
        seq_default(&["1", "2", "3", "4"]),
        Err(Error::ArgumentCount { count: 4 })
    ));
}

#[test]
fn test_parse_error_identifies_token() {
    match seq_default(&["1", "2", "ten"]) {
        Err(Error::Parse { field, token }) => {
            assert_eq!(field, Field::End);
            assert_eq!(token, "ten");
        }
        other => panic!("expected parse error, got {:?}", other),
    }
    let message = seq_default(&["one", "2"]).unwrap_err().to_string();
    assert!(message.contains("start"), "{}", message);
}

#[test]
fn test_custom_format() {
    let params = SequenceParams {
        format: "item %g%%".to_string(),
        separator: ",".to_string(),
        ..SequenceParams::default()
    };
    let out = sequence_to_string(&["1", "0.5", "2"], &params).unwrap();
    assert_eq!(out, "item 1%,item 1.5%,item 2%\n");
}

#[test]
fn test_invalid_format_is_rejected() {
    let params = SequenceParams {
        format: "%q".to_string(),
        ..SequenceParams::default()
    };
    assert!(matches!(
        sequence_to_string(&["3"], &params),
        Err(Error::InvalidFormat { .. })
    ));
}

#[test]
fn test_negative_range() {
    let out = seq_default(&["-2", "1"]).unwrap();
    assert_eq!(lines(&out), vec!["-2", "-1", "0", "1"]);
}

#[test]
fn test_equal_width_measures_end_only() {
    let params = SequenceParams {
        separator: " ".to_string(),
        equal_width: true,
        ..SequenceParams::default()
    };
    let out = sequence_to_string(&["-3", "2"], &params).unwrap();
    assert_eq!(out, "-3 -2 -1 0 1 2\n");
}

#[test]
fn test_equal_width_counts_template_text() {
    let params = SequenceParams {
        format: "x%v".to_string(),
        separator: " ".to_string(),
        equal_width: true,
    };
    let out = sequence_to_string(&["8", "10"], &params).unwrap();
    assert_eq!(out, "x008 x009 x010\n");

    let params = SequenceParams {
        format: "%5v".to_string(),
        ..params
    };
    let out = sequence_to_string(&["8", "10"], &params).unwrap();
    assert_eq!(out, "08 09 10\n");
}

#[test]
fn test_zero_step_wins_over_bad_end() {
    assert!(matches!(seq_default(&["1", "0", "x"]), Err(Error::ZeroStep)));
}
