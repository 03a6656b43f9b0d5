// unit tests

use super::*;

use std::io::Cursor;

// tokenizer

#[test]
fn trim_strips_only_ignorable_characters() {
    for s in ["", " ", "\t\n", "''", "\"\"", " \t'\"\n "] {
        assert_eq!(trim(s), "", "input {s:?}");
    }

    assert_eq!(trim("  \"a b.jpg\"\n"), "a b.jpg");
    assert_eq!(trim("'x'"), "x");
}

#[test]
fn split_and_trim_preserves_order_and_duplicates() {
    let tokens = split_and_trim(" a.jpg, 'b.jpg' ,a.jpg", ',');
    assert_eq!(tokens, vec!["a.jpg", "b.jpg", "a.jpg"]);
}

#[test]
fn split_and_trim_inverts_join() {
    let lists: [&[&str]; 3] = [&["a"], &["a.jpg", "b.png"], &["x/y.jpg", "z.jpg", "x/y.jpg"]];
    for list in lists {
        let joined = list.join(",");
        assert_eq!(split_and_trim(&joined, ','), list);
    }
}

#[test]
fn split_and_trim_is_idempotent_on_single_token() {
    let once = split_and_trim("  photo.jpg ", ',');
    assert_eq!(once, vec!["photo.jpg"]);
    assert_eq!(split_and_trim(&once[0], ','), once);
}

#[test]
fn split_and_trim_keeps_blank_pieces() {
    assert_eq!(split_and_trim("a,, b", ','), vec!["a", "", "b"]);
    // quoted delimiters are not protected
    assert_eq!(split_and_trim("\"a,b\"", ','), vec!["a", "b"]);
}

#[test]
fn input_list_rejects_empty() {
    assert!(matches!(
        parse_list("", ListRole::Input),
        Err(ConfigError::InvalidInputFormat)
    ));
    assert!(matches!(
        parse_list(" , ,", ListRole::Input),
        Err(ConfigError::InvalidInputFormat)
    ));
    assert_eq!(
        parse_list("a.jpg,,b.jpg", ListRole::Input).unwrap(),
        vec!["a.jpg", "b.jpg"]
    );
}

#[test]
fn output_list_empty_means_skip_all() {
    assert!(parse_list("", ListRole::Output).unwrap().is_empty());
    assert!(matches!(
        parse_list(" , ", ListRole::Output),
        Err(ConfigError::InvalidOutputFormat)
    ));
    assert_eq!(
        parse_list("a.png,,c.png", ListRole::Output).unwrap(),
        vec!["a.png", "", "c.png"]
    );
}

// method

#[test]
fn method_tokens() {
    assert_eq!(Method::from_token("e").unwrap(), Method::EdgeDetect);
    assert_eq!(Method::from_token("E").unwrap(), Method::EdgeDetect);
    assert_eq!(Method::from_token("s").unwrap(), Method::FeaturePoints);
    assert_eq!(Method::from_token("S").unwrap(), Method::FeaturePoints);

    for bad in ["x", "", "edge", " e"] {
        assert!(matches!(
            Method::from_token(bad),
            Err(ConfigError::InvalidMethod(_))
        ));
    }
}

// run config

#[test]
fn pad_policy_fills_missing_outputs() {
    let config = RunConfig::new(
        Method::EdgeDetect,
        vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()],
        vec!["a_out.png".into(), "".into()],
        &AcquireOptions::default(),
    )
    .unwrap();

    assert_eq!(config.output_for(0), Some("a_out.png"));
    assert_eq!(config.output_for(1), None);
    assert_eq!(config.output_for(2), None);

    let jobs: Vec<_> = config.jobs().collect();
    assert_eq!(jobs[0], ("a.jpg", Some("a_out.png")));
    assert_eq!(jobs[2], ("c.jpg", None));
}

#[test]
fn strict_policy_rejects_mismatch_but_allows_skip_all() {
    let strict = AcquireOptions {
        length_policy: LengthPolicy::Strict,
        ..AcquireOptions::default()
    };
    let inputs = vec!["a.jpg".to_string(), "b.jpg".to_string()];

    let err = RunConfig::new(
        Method::EdgeDetect,
        inputs.clone(),
        vec!["a.png".into()],
        &strict,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::OutputCountMismatch {
            inputs: 2,
            outputs: 1
        }
    ));

    let config = RunConfig::new(Method::EdgeDetect, inputs, vec![], &strict).unwrap();
    assert!(config.skips_all_outputs());
}

// flag strategy

fn flags(args: &[&str]) -> Result<Acquisition> {
    let mut argv = vec!["image_detect"];
    argv.extend_from_slice(args);
    acquire_from_args(argv, &AcquireOptions::default())
}

#[test]
fn flags_empty_output_is_skip_all() {
    let acquired = flags(&["-m", "e", "-i", "a.jpg, b.jpg", "-o", ""]).unwrap();
    assert_eq!(
        acquired,
        Acquisition::Ready(
            RunConfig::new(
                Method::EdgeDetect,
                vec!["a.jpg".into(), "b.jpg".into()],
                vec![],
                &AcquireOptions::default(),
            )
            .unwrap()
        )
    );
}

#[test]
fn flags_long_forms() {
    let acquired = flags(&[
        "--method",
        "S",
        "--input",
        "a.jpg",
        "--output",
        "a_points.png",
    ])
    .unwrap();

    let Acquisition::Ready(config) = acquired else {
        panic!("expected a config");
    };
    assert_eq!(config.method(), Method::FeaturePoints);
    assert_eq!(config.output_for(0), Some("a_points.png"));
}

#[test]
fn flags_invalid_method_fails_first() {
    let err = flags(&["-m", "x", "-i", "a.jpg"]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidMethod(ref m) if m == "x"));
}

#[test]
fn flags_empty_input_fails() {
    let err = flags(&["-m", "e", "-i", ""]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidInputFormat));
}

#[test]
fn flags_missing_arguments() {
    let err = flags(&["-m", "e", "-i", "a.jpg"]).unwrap_err();
    match err {
        ConfigError::MissingArguments(missing) => assert_eq!(missing, vec!["--output"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn flags_help_suppresses_missing_arguments() {
    assert_eq!(flags(&["-h"]).unwrap(), Acquisition::HelpRequested);
    assert_eq!(flags(&["--help", "-m", "e"]).unwrap(), Acquisition::HelpRequested);
    assert!(usage().contains("--method"));
}

#[test]
fn flags_unknown_or_incomplete_is_usage_error() {
    assert!(matches!(flags(&["-x"]).unwrap_err(), ConfigError::Usage(_)));
    assert!(matches!(flags(&["-m", "e", "-i"]).unwrap_err(), ConfigError::Usage(_)));
}

#[test]
fn flags_help_wins_over_parser_errors() {
    assert_eq!(flags(&["-h", "-x"]).unwrap(), Acquisition::HelpRequested);
    assert_eq!(flags(&["-m", "e", "-h", "-i"]).unwrap(), Acquisition::HelpRequested);
}

#[test]
fn flags_repeated_flag_keeps_last_value() {
    let acquired = flags(&["-m", "e", "-i", "a.jpg", "-i", "b.jpg", "-o", ""]).unwrap();
    let Acquisition::Ready(config) = acquired else {
        panic!("expected a config");
    };
    assert_eq!(config.inputs(), ["b.jpg"]);
}

#[test]
fn usage_error_holds_only_the_reason() {
    let err = flags(&["-x"]).unwrap_err();
    let ConfigError::Usage(reason) = err else {
        panic!("expected a usage error");
    };
    assert!(reason.contains("-x"));
    assert_eq!(reason.lines().count(), 1);
    assert!(!reason.starts_with("error:"));
}

#[test]
fn config_requires_an_input() {
    let err = RunConfig::new(Method::EdgeDetect, vec![], vec![], &AcquireOptions::default())
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidInputFormat));
}

#[test]
fn strategy_follows_argument_count() {
    assert_eq!(Strategy::for_args(&["image_detect"]), Strategy::Interactive);
    assert_eq!(Strategy::for_args(&["image_detect", "-h"]), Strategy::Flags);
}

// interactive strategy

fn dialogue(script: &str, options: AcquireOptions) -> (Result<RunConfig>, String) {
    let mut out = Vec::new();
    let result = acquire_interactive(Cursor::new(script), &mut out, &options);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn interactive_happy_path() {
    let (result, _) = dialogue("e\na.jpg, b.jpg\na.png,b.png\n", AcquireOptions::default());
    let config = result.unwrap();
    assert_eq!(config.method(), Method::EdgeDetect);
    assert_eq!(config.inputs(), ["a.jpg", "b.jpg"]);
    assert_eq!(config.outputs(), ["a.png", "b.png"]);
}

#[test]
fn interactive_blank_output_accepted_first_time() {
    let (result, transcript) = dialogue("s\na.jpg\n\n", AcquireOptions::default());
    let config = result.unwrap();
    assert!(config.outputs().is_empty());
    assert!(!transcript.contains("try again"));
}

#[test]
fn interactive_reprompts_until_valid() {
    let (result, transcript) = dialogue(
        "x\n\nE\n\n , \nin.jpg\n , \nout.jpg\n",
        AcquireOptions::default(),
    );
    let config = result.unwrap();
    assert_eq!(config.method(), Method::EdgeDetect);
    assert_eq!(config.inputs(), ["in.jpg"]);
    assert_eq!(config.outputs(), ["out.jpg"]);
    assert_eq!(transcript.matches("try again").count(), 5);
}

#[test]
fn interactive_quit_in_any_phase_cancels() {
    for script in ["q\n", "x\ny\nQ\n", "e\nq\n", "e\na.jpg\nq\n"] {
        let (result, _) = dialogue(script, AcquireOptions::default());
        let err = result.unwrap_err();
        assert!(err.is_cancellation(), "script {script:?} gave {err}");
    }
}

#[test]
fn interactive_without_quit_treats_q_as_data() {
    let options = AcquireOptions {
        allow_quit: false,
        ..AcquireOptions::default()
    };
    let (result, transcript) = dialogue("q\ne\nq\n\n", options);
    let config = result.unwrap();
    assert_eq!(config.inputs(), ["q"]);
    assert!(transcript.contains("invalid method 'q'"));
}

#[test]
fn interactive_end_of_input_cancels() {
    let (result, _) = dialogue("e\n", AcquireOptions::default());
    assert!(result.unwrap_err().is_cancellation());
}

#[test]
fn interactive_strict_lengths_reprompt_output() {
    let options = AcquireOptions {
        length_policy: LengthPolicy::Strict,
        ..AcquireOptions::default()
    };
    let (result, transcript) = dialogue("e\na.jpg,b.jpg\na.png\na.png,b.png\n", options);
    assert_eq!(result.unwrap().outputs(), ["a.png", "b.png"]);
    assert!(transcript.contains("got 1 output paths for 2 input files"));
}

#[test]
fn acquire_picks_interactive_without_flags() {
    let args = vec!["image_detect".to_string()];
    let mut out = Vec::new();
    let acquired = acquire(
        &args,
        Cursor::new("s\nimg.png\n\n"),
        &mut out,
        &AcquireOptions::default(),
    )
    .unwrap();

    assert!(matches!(acquired, Acquisition::Ready(ref c) if c.method() == Method::FeaturePoints));
}
