use calc_engine::*;
use std::f64::consts::PI;

fn close(left: f64, right: f64) -> bool {
    (left - right).abs() <= 1e-9 * right.abs().max(1.0)
}

#[test]
fn exponentiation_groups_right_to_left() {
    assert_eq!(evaluate_expression("2^3^2"), Ok(512.0));
}

#[test]
fn precedence_and_parentheses() {
    assert_eq!(evaluate_expression("3+4*2"), Ok(11.0));
    assert_eq!(evaluate_expression("(3+4)*2"), Ok(14.0));
    assert_eq!(evaluate_expression("(7-3)*(4+6)/2"), Ok(20.0));
    assert_eq!(evaluate_expression("(1+2+3+4+5)/5"), Ok(3.0));
    assert_eq!(evaluate_expression("10 - 4 - 3"), Ok(3.0));
    assert_eq!(evaluate_expression(" 1.5 * .5 "), Ok(0.75));
}

#[test]
fn textbook_expression() {
    // 3 + 4*2 / (1-5)^(2^3) = 3 + 8/65536
    let result = evaluate_expression("3+4*2/(1-5)^2^3").unwrap();
    assert!(close(result, 3.0 + 8.0 / 65536.0));
}

#[test]
fn mismatched_parentheses() {
    assert!(matches!(evaluate_expression("(1+2"), Err(CalcError::mismatched_paren(_))));
    assert!(matches!(evaluate_expression("1+2)"), Err(CalcError::mismatched_paren(_))));
}

#[test]
fn malformed_expressions_fail_with_declared_errors() {
    assert_eq!(
        evaluate_expression("2 $ 3"),
        Err(CalcError::invalid_character { character: '$', position: 2 })
    );
    assert_eq!(evaluate_expression("1.2.3 + 1"), Err(CalcError::invalid_number("1.2.3".into())));
    // no unary minus, no implicit multiplication
    assert_eq!(evaluate_expression("-1"), Err(CalcError::stack_underflow));
    assert_eq!(evaluate_expression("2(3+4)"), Err(CalcError::stack_underflow));
    assert_eq!(evaluate_expression("1 + + 2"), Err(CalcError::stack_underflow));
    assert_eq!(evaluate_expression(""), Err(CalcError::stack_underflow));
    assert_eq!(evaluate_expression("()"), Err(CalcError::stack_underflow));
    assert_eq!(evaluate_expression("1/(2-2)"), Err(CalcError::divide_by_zero));
    assert_eq!(evaluate_expression("10^400"), Err(CalcError::non_finite_result));
}

#[test]
fn overflowing_literals_reach_finiteness_checks() {
    let huge = format!("1{}", "0".repeat(400));
    assert_eq!(evaluate_expression(&huge), Err(CalcError::non_finite_result));
    assert_eq!(
        evaluate_expression(&format!("{}+1", huge)),
        Err(CalcError::invalid_operand(f64::INFINITY))
    );
}

#[test]
fn every_small_expression_terminates_with_a_value_or_error() {
    let alphabet = ["1", "0", "2.5", "+", "-", "*", "/", "^", "(", ")"];
    for a in alphabet {
        for b in alphabet {
            for c in alphabet {
                for d in alphabet {
                    let text = format!("{}{}{}{}", a, b, c, d);
                    if let Ok(value) = evaluate_expression(&text) {
                        assert!(value.is_finite(), "{} gave {}", text, value);
                    }
                }
            }
        }
    }
}

#[test]
fn basic_operations() {
    assert_eq!(apply_basic_op(21.0, 2.0, "divide"), Ok(10.5));
    assert_eq!(apply_basic_op(200.0, 10.0, "percent"), Ok(20.0));
    assert_eq!(apply_basic_op(5.0, 0.0, "divide"), Err(CalcError::divide_by_zero));
    assert!(matches!(apply_basic_op(f64::NAN, 1.0, "add"), Err(CalcError::invalid_operand(_))));
    assert_eq!(apply_basic_op(1.0, 2.0, "modulo"), Err(CalcError::unknown_operation("modulo".into())));
    assert_eq!(apply_basic_op(1.0, 2.0, "sqrt"), Err(CalcError::unknown_operation("sqrt".into())));
}

#[test]
fn functions() {
    assert_eq!(apply_function("sqrt", &[9.0]), Ok(3.0));
    assert_eq!(apply_function("pow", &[2.0, 3.0]), Ok(8.0));
    assert!(close(apply_function("tau", &[]).unwrap(), 2.0 * PI));
    assert_eq!(apply_function("foo", &[1.0]), Err(CalcError::unknown_function("foo".into())));
    assert_eq!(apply_function("divide", &[1.0, 2.0]), Err(CalcError::unknown_function("divide".into())));
    assert_eq!(apply_function("sqrt", &[-4.0]), Err(CalcError::non_finite_result));
    assert!(matches!(apply_function("log", &[]), Err(CalcError::wrong_argument_count { .. })));
}

#[test]
fn unit_conversion() {
    assert_eq!(convert_units(5.0, "km", "km"), Ok(5.0));
    assert_eq!(convert_units(1.0, "km", "m"), Ok(1000.0));
    assert_eq!(convert_units(1.0, "h", "s"), Ok(3600.0));
    assert!(close(convert_units(2.0, "const", "pi").unwrap(), 2.0 * PI));
    assert_eq!(
        convert_units(1.0, "kg", "s"),
        Err(CalcError::unsupported_conversion { from: "kg".into(), to: "s".into() })
    );
}

#[test]
fn repeated_calls_give_identical_outcomes() {
    let first = (
        evaluate_expression("2^3^2"),
        evaluate_expression("(1+2"),
        apply_basic_op(5.0, 0.0, "divide"),
        convert_units(1.0, "kg", "s"),
    );
    for _ in 0..3 {
        let again = (
            evaluate_expression("2^3^2"),
            evaluate_expression("(1+2"),
            apply_basic_op(5.0, 0.0, "divide"),
            convert_units(1.0, "kg", "s"),
        );
        assert_eq!(again, first);
    }
}

#[test]
fn concurrent_callers_agree() {
    let inputs = ["2^3^2", "3+4*2", "(3+4)*2", "(1+2", "1/0", "1.2.3"];
    let expected: Vec<_> = inputs.iter().map(|text| evaluate_expression(text)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    (0..100)
                        .flat_map(|_| inputs.iter().map(|text| evaluate_expression(text)))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            let results = handle.join().unwrap();
            for chunk in results.chunks(inputs.len()) {
                assert_eq!(chunk, expected.as_slice());
            }
        }
    });
}

#[test]
fn errors_describe_themselves() {
    let e = evaluate_expression("1.2.3").unwrap_err();
    assert!(e.to_string().contains("1.2.3"));
    let e = convert_units(1.0, "kg", "s").unwrap_err();
    assert_eq!(e.to_string(), "cannot convert from 'kg' to 's'");
}
