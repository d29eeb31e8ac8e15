use super::*;

/// Mirrors how the parser nests one frame per prefix operator.
fn nested_negations(depth: u32) -> i64 {
    ensure_sufficient_stack(|| {
        if depth == 0 {
            1
        } else {
            -nested_negations(depth - 1)
        }
    })
}

#[test]
fn shallow_nesting_keeps_sign() {
    assert_eq!(nested_negations(3), -1);
    assert_eq!(nested_negations(4), 1);
}

#[test]
fn deep_nesting_does_not_overflow() {
    // 200k frames would overflow a default 8MB main-thread stack
    assert_eq!(nested_negations(200_000), 1);
}

#[test]
fn passes_through_result_values() {
    let result: Result<u8, String> = ensure_sufficient_stack(|| Err("boom".to_string()));
    assert_eq!(result, Err("boom".to_string()));
}
