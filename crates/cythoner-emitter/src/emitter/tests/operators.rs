use super::*;

#[test]
fn test_operator_table() {
    let expected = [
        (Operator::Add, "+"),
        (Operator::Sub, "-"),
        (Operator::Mult, "*"),
        (Operator::Div, "/"),
        (Operator::Pow, "**"),
        (Operator::Mod, "%"),
        (Operator::LShift, "<<"),
        (Operator::RShift, ">>"),
        (Operator::BitOr, "|"),
        (Operator::BitXor, "^"),
        (Operator::BitAnd, "&"),
        (Operator::FloorDiv, "//"),
    ];
    assert_eq!(expected.len(), Operator::ALL.len());
    for (op, symbol) in expected {
        assert_eq!(get_operator_text(op), symbol, "{op:?}");
    }
}

#[test]
fn test_comparison_table() {
    let expected = [
        (CmpOperator::Eq, "=="),
        (CmpOperator::NotEq, "!="),
        (CmpOperator::Lt, "<"),
        (CmpOperator::LtE, "<="),
        (CmpOperator::Gt, ">"),
        (CmpOperator::GtE, ">="),
        (CmpOperator::Is, "is"),
        (CmpOperator::IsNot, "is not"),
        (CmpOperator::In, "in"),
        (CmpOperator::NotIn, "not in"),
    ];
    assert_eq!(expected.len(), CmpOperator::ALL.len());
    for (op, symbol) in expected {
        assert_eq!(get_comparison_text(op), symbol, "{op:?}");
    }
}

#[test]
fn test_symbols_are_distinct() {
    let mut symbols: Vec<&str> = Operator::ALL.iter().map(|op| get_operator_text(*op)).collect();
    symbols.extend(CmpOperator::ALL.iter().map(|op| get_comparison_text(*op)));
    let total = symbols.len();
    symbols.sort_unstable();
    symbols.dedup();
    assert_eq!(symbols.len(), total);
}
