use linsys::{SolveError, SolverConfig, parse_equations, parse_equations_with};

#[test]
fn variables_follow_discovery_order() {
    let parsed = parse_equations("y+x=1\nz-x=2\n2w=3").expect("parse system");
    assert_eq!(parsed.variables, vec!["y", "x", "z", "w"]);
}

#[test]
fn rows_are_index_aligned_but_unpadded() {
    let parsed = parse_equations("x+y=3\nx-y+z=1").expect("parse system");
    assert_eq!(parsed.rows, vec![vec![1.0, 1.0, 3.0], vec![1.0, -1.0, 1.0, 1.0]]);
}

#[test]
fn whitespace_is_insignificant() {
    let spaced = parse_equations("  2 x -  3.5 y = 1 \r\n x\t+ y = 0").expect("parse spaced");
    let compact = parse_equations("2x-3.5y=1\nx+y=0").expect("parse compact");
    assert_eq!(spaced, compact);
}

#[test]
fn blank_lines_produce_no_rows() {
    let parsed = parse_equations("\nx=1\n   \n\ny=2\n").expect("parse system");
    assert_eq!(parsed.rows.len(), 2);
}

#[test]
fn implicit_coefficients() {
    let parsed = parse_equations("-x+y-z=0").expect("parse system");
    assert_eq!(parsed.rows[0], vec![-1.0, 1.0, -1.0, 0.0]);
}

#[test]
fn decimal_and_signed_coefficients() {
    let parsed = parse_equations("-2.5a+.5b+10c=-7.25").expect("parse system");
    assert_eq!(parsed.rows[0], vec![-2.5, 0.5, 10.0, -7.25]);
}

#[test]
fn repeated_variable_keeps_last_coefficient() {
    let parsed = parse_equations("2x+3x=5").expect("parse system");
    assert_eq!(parsed.variables, vec!["x"]);
    assert_eq!(parsed.rows[0], vec![3.0, 5.0]);
}

#[test]
fn variable_names_are_case_sensitive_letter_runs() {
    let parsed = parse_equations("X+x+abc=1").expect("parse system");
    assert_eq!(parsed.variables, vec!["X", "x", "abc"]);
}

#[test]
fn chunks_without_terms_are_skipped_and_recorded() {
    let parsed = parse_equations("x+5-y=2\ny+*=1").expect("parse system");
    assert_eq!(parsed.variables, vec!["x", "y"]);
    assert_eq!(parsed.rows[0], vec![1.0, -1.0, 2.0]);
    let tokens: Vec<(usize, &str)> = parsed
        .ignored
        .iter()
        .map(|t| (t.line, t.token.as_str()))
        .collect();
    assert_eq!(tokens, vec![(1, "+5"), (2, "+*")]);
}

#[test]
fn strict_mode_rejects_skipped_chunks() {
    let config = SolverConfig::default().with_strict_terms(true);
    let err = parse_equations_with("x\n\nx+5=2", &config).unwrap_err();
    assert!(matches!(err, SolveError::MalformedEquation { line: 1, .. }));

    let err = parse_equations_with("x=1\n\nx+5=2", &config).unwrap_err();
    assert_eq!(
        err,
        SolveError::UnrecognizedTerm {
            line: 3,
            token: "+5".to_string()
        }
    );
}

#[test]
fn missing_equals_is_malformed() {
    let err = parse_equations("x+y").unwrap_err();
    assert!(matches!(err, SolveError::MalformedEquation { line: 1, .. }));
}

#[test]
fn non_numeric_rhs_is_malformed() {
    for input in ["x=", "x=y", "x=1=2", "x=nan", "x=inf", "x=3z"] {
        let err = parse_equations(input).unwrap_err();
        assert!(
            matches!(err, SolveError::MalformedEquation { .. }),
            "{input:?} gave {err:?}"
        );
    }
}

#[test]
fn overflowing_coefficient_is_malformed() {
    let input = format!("x=1\n1{}y=1", "0".repeat(400));
    let err = parse_equations(&input).unwrap_err();
    assert!(matches!(err, SolveError::MalformedEquation { line: 2, .. }));
    assert!(linsys::solve(&input).is_err());
}

#[test]
fn error_reports_original_line_number() {
    let err = parse_equations("x=1\n\ny=oops").unwrap_err();
    assert!(matches!(err, SolveError::MalformedEquation { line: 3, .. }));
    assert!(err.to_string().starts_with("malformed equation on line 3"));
}

#[test]
fn empty_input_parses_to_nothing() {
    let parsed = parse_equations("").expect("parse empty");
    assert!(parsed.variables.is_empty());
    assert!(parsed.rows.is_empty());
}
