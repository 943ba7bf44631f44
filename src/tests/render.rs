use rstest::rstest;

use crate::{
    BinaryOperator, DisplayPart, OperatorId, SyntaxNode, SyntaxPath,
    node::Slot,
    render::{render, is_selectable, Constant, Paren},
    tests::util::quadratic_formula,
};

fn op(symbol: &'static str, id: usize) -> DisplayPart {
    DisplayPart::Operator { symbol, id: OperatorId(id) }
}

fn term(s: &str) -> DisplayPart {
    DisplayPart::Terminal(s.into())
}

#[test]
fn test_render_leaves() {
    let rendered = render(&num!(42));
    assert_eq!(rendered.part, term("42"));
    assert_eq!(rendered.text, "42");
    assert!(rendered.operators.is_empty());

    // Trailing zeroes are dropped from the literal
    let rendered = render(&SyntaxNode::number(2.50));
    assert_eq!(rendered.text, "2.5");

    assert_eq!(render(&SyntaxNode::Pi).part, DisplayPart::Constant(Constant::Pi));
    assert_eq!(render(&SyntaxNode::Pi).text, "PI");
    assert_eq!(render(&SyntaxNode::E).part, DisplayPart::Constant(Constant::E));
    assert_eq!(render(&SyntaxNode::E).text, "E");

    let rendered = render(&var!("$x"));
    assert_eq!(rendered.part, term("$x"));
    assert_eq!(rendered.text, "$x");
}

#[rstest]
#[case(0.0, "0")]
#[case(-0.0, "0")]
#[case(-2.5, "-2.5")]
#[case(0.1 + 0.2, "0.30000000000000004")]
#[case(0.000001, "0.000001")]
#[case(1e-7, "1e-7")]
#[case(1.5e-9, "1.5e-9")]
#[case(1e-30, "1e-30")]
#[case(123e18, "123000000000000000000")]
#[case(1e21, "1e+21")]
#[case(1e30, "1e+30")]
#[case(123456789012345678901234567890.0, "1.2345678901234568e+29")]
#[case(f64::INFINITY, "Infinity")]
#[case(f64::NAN, "NaN")]
fn test_render_number(#[case] value: f64, #[case] text: &str) {
    let rendered = render(&SyntaxNode::number(value));
    assert_eq!(rendered.part, term(text));
    assert_eq!(rendered.text, text);
}

#[rstest]
#[case(BinaryOperator::Addition, "+")]
#[case(BinaryOperator::Subtraction, "-")]
#[case(BinaryOperator::Multiplication, "*")]
#[case(BinaryOperator::Division, "/")]
fn test_render_binary(#[case] operator: BinaryOperator, #[case] symbol: &'static str) {
    let rendered = render(&SyntaxNode::binary(operator, num!(1), var!("x")));
    assert_eq!(
        rendered.part,
        DisplayPart::Group(vec![term("1"), op(symbol, 0), term("x")]),
    );
    assert_eq!(rendered.text, format!("1 {} x", symbol));
    assert_eq!(rendered.operators.get(OperatorId(0)), Some(&SyntaxPath::root()));
}

#[test]
fn test_render_power_and_negation() {
    let rendered = render(&SyntaxNode::power(var!("x"), SyntaxNode::negation(num!(2))));
    assert_eq!(
        rendered.part,
        DisplayPart::Group(vec![
            term("x"),
            op("^", 0),
            DisplayPart::Group(vec![term("-"), term("2")]),
        ]),
    );
    assert_eq!(rendered.text, "x ^ -2");
}

#[test]
fn test_render_function_call() {
    let rendered = render(&SyntaxNode::function_call("MAX", vec![num!(1), var!("y"), SyntaxNode::Pi]));
    assert_eq!(
        rendered.part,
        DisplayPart::Group(vec![
            DisplayPart::Function("MAX".into()),
            DisplayPart::Punctuation(Paren::Open),
            term("1"),
            term("y"),
            DisplayPart::Constant(Constant::Pi),
            DisplayPart::Punctuation(Paren::Close),
        ]),
    );

    // Arguments are not separated
    assert_eq!(rendered.text, "MAX(1yPI)");

    assert_eq!(render(&SyntaxNode::function_call("RAND", vec![])).text, "RAND()");
}

#[test]
fn test_render_grouping_flattens() {
    let rendered = render(&SyntaxNode::grouping(SyntaxNode::add(num!(1), num!(2))));
    assert_eq!(
        rendered.part,
        DisplayPart::Group(vec![
            DisplayPart::Punctuation(Paren::Open),
            term("1"),
            op("+", 0),
            term("2"),
            DisplayPart::Punctuation(Paren::Close),
        ]),
    );
    assert_eq!(rendered.text, "(1 + 2)");

    let rendered = render(&SyntaxNode::grouping(var!("x")));
    assert_eq!(
        rendered.part,
        DisplayPart::Group(vec![
            DisplayPart::Punctuation(Paren::Open),
            term("x"),
            DisplayPart::Punctuation(Paren::Close),
        ]),
    );
    assert_eq!(rendered.text, "(x)");
}

#[test]
fn test_render_nested_grouping() {
    let open = DisplayPart::Punctuation(Paren::Open);
    let close = DisplayPart::Punctuation(Paren::Close);

    // The inner parentheses are spliced in alongside the outer ones
    let rendered = render(&SyntaxNode::grouping(SyntaxNode::grouping(var!("x"))));
    assert_eq!(
        rendered.part,
        DisplayPart::Group(vec![open.clone(), open.clone(), term("x"), close.clone(), close.clone()]),
    );
    assert_eq!(rendered.text, "((x))");

    let rendered = render(&SyntaxNode::grouping(SyntaxNode::function_call("SQRT", vec![var!("x")])));
    assert_eq!(
        rendered.part,
        DisplayPart::Group(vec![
            open.clone(),
            DisplayPart::Function("SQRT".into()),
            open.clone(),
            term("x"),
            close.clone(),
            close.clone(),
        ]),
    );
    assert_eq!(rendered.text, "(SQRT(x))");

    let rendered = render(&SyntaxNode::grouping(SyntaxNode::negation(var!("x"))));
    assert_eq!(
        rendered.part,
        DisplayPart::Group(vec![open, term("-"), term("x"), close]),
    );
    assert_eq!(rendered.text, "(-x)");
    assert!(rendered.part.members().unwrap().iter().all(|m| m.members().is_none()));
}

#[test]
fn test_render_unrecognized() {
    let rendered = render(&SyntaxNode::Unrecognized);
    assert_eq!(rendered.part, DisplayPart::empty());
    assert_eq!(rendered.text, "");

    let rendered = render(&SyntaxNode::add(SyntaxNode::Unrecognized, num!(1)));
    assert_eq!(rendered.text, " + 1");
}

#[test]
fn test_operator_table() {
    let rendered = render(&quadratic_formula());
    assert_eq!(rendered.text, "($b + SQRT(SQR($b) - 4 * $a)) / (2 * $a)");

    // Identifiers are assigned after both operands, so inner operators come first
    let expected = vec![
        SyntaxPath::new(vec![Slot::Left, Slot::Expression, Slot::Right, Slot::Argument(0), Slot::Right]),
        SyntaxPath::new(vec![Slot::Left, Slot::Expression, Slot::Right, Slot::Argument(0)]),
        SyntaxPath::new(vec![Slot::Left, Slot::Expression]),
        SyntaxPath::new(vec![Slot::Right, Slot::Expression]),
        SyntaxPath::root(),
    ];
    assert_eq!(
        rendered.operators.iter().map(|(_, p)| p.clone()).collect::<Vec<_>>(),
        expected,
    );

    let tree = quadratic_formula();
    for (_, path) in rendered.operators.iter() {
        assert!(path.resolve(&tree).unwrap().has_operator());
    }

    assert_eq!(path!(0, 3, 2, 1).resolve(&rendered.part), Some(&op("-", 1)));
    assert_eq!(path!(1).resolve(&rendered.part), Some(&op("/", 4)));
}

#[test]
fn test_render_idempotent() {
    let tree = quadratic_formula();
    let first = render(&tree);
    let second = render(&tree);
    assert_eq!(first.text, second.text);
    assert_eq!(first, second);

    // Rendering doesn't touch the tree
    assert_eq!(tree, quadratic_formula());
}

#[test]
fn test_is_selectable() {
    assert!(is_selectable(&term("1")));
    assert!(is_selectable(&term("-")));
    assert!(is_selectable(&DisplayPart::Constant(Constant::E)));
    assert!(is_selectable(&DisplayPart::Group(vec![term("1"), op("+", 0), term("2")])));
    assert!(is_selectable(&DisplayPart::empty()));

    assert!(!is_selectable(&op("*", 3)));
    assert!(!is_selectable(&DisplayPart::Function("SQRT".into())));
    assert!(!is_selectable(&DisplayPart::Punctuation(Paren::Open)));
    assert!(!is_selectable(&DisplayPart::Punctuation(Paren::Close)));
}

#[test]
fn test_ascii_render() {
    let rendered = render(&quadratic_formula());
    assert_eq!(
        ascii!(rendered.part),
        "( [$b] + SQRT ( SQR ( [$b] ) - [4] * [$a] ) ) / ( [2] * [$a] )",
    );
    assert_eq!(
        ascii!(rendered.part, Some(&path!(2, 1))),
        "( [$b] + SQRT ( SQR ( [$b] ) - [4] * [$a] ) ) / ( {2} * [$a] )",
    );
    assert_eq!(
        ascii!(rendered.part, Some(&path!(0, 3, 2, 2))),
        "( [$b] + SQRT ( SQR ( [$b] ) - {[4] * [$a]} ) ) / ( [2] * [$a] )",
    );

    assert_eq!(ascii!(render(&SyntaxNode::E).part), "[E]");
    assert_eq!(ascii!(render(&SyntaxNode::Unrecognized).part), "");
}
